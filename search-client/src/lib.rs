use serde::de::DeserializeOwned;
use serde::Serialize;
use utils_common::models::{Article, Author, MediaKind, ModerationStatus};

pub mod models;

pub use models::{RawArticle, RawAuthor, SearchRequest, SearchResponse};

/// 后端搜索函数的名称
const SEARCH_FUNCTION: &str = "search-articles";

/// 搜索客户端 - 调用后端搜索函数并把结果规范化为 Article
#[derive(Clone, Debug)]
pub struct SearchClient {
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 执行远程搜索，返回规范化后的文章列表
    ///
    /// 传输错误、HTTP错误和响应格式错误统一以 Err(String) 返回，
    /// 由调用方决定如何恢复。
    pub async fn search_articles(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Article>, String> {
        let request = SearchRequest {
            query: query.to_string(),
            limit,
        };
        let response: SearchResponse = self.invoke(SEARCH_FUNCTION, &request).await?;
        Ok(response
            .articles
            .into_iter()
            .map(normalize_article)
            .collect())
    }

    /// 调用后端函数 (wasm32: 浏览器 fetch)
    #[cfg(target_arch = "wasm32")]
    async fn invoke<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode, Response};

        let url = format!("{}/{}", self.base_url, path);
        let payload =
            serde_json::to_string(body).map_err(|e| format!("序列化请求失败: {}", e))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&payload));

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| format!("构建请求失败: {:?}", e))?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("设置请求头失败: {:?}", e))?;

        let window = web_sys::window().ok_or("window 不可用")?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| format!("fetch 失败: {:?}", e))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| "响应不是 Response 类型".to_string())?;

        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }

        let json = JsFuture::from(
            resp.json()
                .map_err(|e| format!("读取响应体失败: {:?}", e))?,
        )
        .await
        .map_err(|e| format!("解析响应JSON失败: {:?}", e))?;

        serde_wasm_bindgen::from_value(json).map_err(|e| format!("反序列化响应失败: {}", e))
    }

    /// 调用后端函数 (原生: reqwest，用于非浏览器环境和测试)
    #[cfg(not(target_arch = "wasm32"))]
    async fn invoke<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let url = format!("{}/{}", self.base_url, path);

        let response = reqwest::Client::new()
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("请求失败: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("HTTP {}", response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("反序列化响应失败: {}", e))
    }
}

/// 把原始文章记录规范化为 Article
///
/// 映射必须是全量的: 无论远程省略了哪些字段，结果中每个字段都有值。
/// 缺失的字符串补空串，缺失的计数补0，缺失的状态视为已通过审核。
pub fn normalize_article(raw: RawArticle) -> Article {
    Article {
        id: raw.id,
        author_id: raw.author_id.unwrap_or_default(),
        author: raw.author.map(normalize_author),
        category_id: raw.category_id.unwrap_or_default(),
        title: raw.title,
        preview: raw.preview.unwrap_or_default(),
        body: raw.body,
        media_url: raw.media_url,
        media_type: normalize_media_kind(raw.media_type.as_deref()),
        is_anonymous: raw.is_anonymous.unwrap_or(false),
        status: normalize_status(raw.status.as_deref()),
        likes_count: raw.likes_count.unwrap_or(0),
        comments_count: raw.comments_count.unwrap_or(0),
        favorites_count: raw.favorites_count.unwrap_or(0),
        rep_score: raw.rep_score.unwrap_or(0),
        // 只有显式的 false 才关闭评论
        allow_comments: raw.allow_comments != Some(false),
        created_at: raw.created_at.unwrap_or_default(),
        updated_at: raw.updated_at.unwrap_or_default(),
    }
}

/// 把原始作者记录规范化为 Author，缺失的数值字段补0
fn normalize_author(raw: RawAuthor) -> Author {
    Author {
        id: raw.id,
        telegram_id: 0,
        username: raw.username.unwrap_or_default(),
        first_name: raw.first_name.unwrap_or_default(),
        last_name: raw.last_name,
        avatar_url: raw.avatar_url,
        reputation: raw.reputation.unwrap_or(0),
        articles_count: 0,
        is_premium: raw.is_premium.unwrap_or(false),
        created_at: raw.created_at.unwrap_or_default(),
    }
}

/// 识别媒体类型字符串，未知取值按无媒体处理
fn normalize_media_kind(kind: Option<&str>) -> Option<MediaKind> {
    match kind {
        Some("image") => Some(MediaKind::Image),
        Some("youtube") => Some(MediaKind::Youtube),
        _ => None,
    }
}

/// 识别审核状态字符串，缺失或未知取值默认已通过
fn normalize_status(status: Option<&str>) -> ModerationStatus {
    match status {
        Some("draft") => ModerationStatus::Draft,
        Some("pending") => ModerationStatus::Pending,
        Some("rejected") => ModerationStatus::Rejected,
        _ => ModerationStatus::Approved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_raw(id: &str) -> RawArticle {
        serde_json::from_str(&format!(
            r#"{{"id": "{}", "title": "t", "body": "b"}}"#,
            id
        ))
        .unwrap()
    }

    #[test]
    fn minimal_record_maps_to_fully_populated_article() {
        let article = normalize_article(minimal_raw("a1"));

        assert_eq!(article.id, "a1");
        assert_eq!(article.author, None);
        assert_eq!(article.author_id, "");
        assert_eq!(article.category_id, "");
        assert_eq!(article.preview, "");
        assert_eq!(article.media_url, None);
        assert_eq!(article.media_type, None);
        assert!(!article.is_anonymous);
        assert_eq!(article.status, ModerationStatus::Approved);
        assert_eq!(article.likes_count, 0);
        assert_eq!(article.comments_count, 0);
        assert_eq!(article.favorites_count, 0);
        assert_eq!(article.rep_score, 0);
        assert!(article.allow_comments);
        assert_eq!(article.created_at, "");
        assert_eq!(article.updated_at, "");
    }

    #[test]
    fn partial_author_gets_zero_valued_defaults() {
        let raw: RawArticle = serde_json::from_str(
            r#"{"id": "a1", "title": "t", "body": "b", "author": {"id": "u1"}}"#,
        )
        .unwrap();
        let article = normalize_article(raw);

        let author = article.author.expect("author 应被保留");
        assert_eq!(author.id, "u1");
        assert_eq!(author.telegram_id, 0);
        assert_eq!(author.username, "");
        assert_eq!(author.first_name, "");
        assert_eq!(author.last_name, None);
        assert_eq!(author.reputation, 0);
        assert_eq!(author.articles_count, 0);
        assert!(!author.is_premium);
        assert_eq!(author.created_at, "");
    }

    #[test]
    fn explicit_false_disables_comments() {
        let mut raw = minimal_raw("a1");
        raw.allow_comments = Some(false);
        assert!(!normalize_article(raw).allow_comments);

        let mut raw = minimal_raw("a2");
        raw.allow_comments = Some(true);
        assert!(normalize_article(raw).allow_comments);
    }

    #[test]
    fn media_kind_recognizes_known_strings_only() {
        let mut raw = minimal_raw("a1");
        raw.media_type = Some("youtube".to_string());
        assert_eq!(
            normalize_article(raw).media_type,
            Some(MediaKind::Youtube)
        );

        let mut raw = minimal_raw("a2");
        raw.media_type = Some("vimeo".to_string());
        assert_eq!(normalize_article(raw).media_type, None);
    }

    #[test]
    fn unknown_status_defaults_to_approved() {
        let mut raw = minimal_raw("a1");
        raw.status = Some("draft".to_string());
        assert_eq!(normalize_article(raw).status, ModerationStatus::Draft);

        let mut raw = minimal_raw("a2");
        raw.status = Some("banana".to_string());
        assert_eq!(normalize_article(raw).status, ModerationStatus::Approved);
    }

    #[test]
    fn response_without_articles_field_is_rejected() {
        let malformed: Result<SearchResponse, _> = serde_json::from_str(r#"{"error": "boom"}"#);
        assert!(malformed.is_err());
    }

    #[test]
    fn response_with_articles_parses() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"articles": [{"id": "a1", "title": "t", "body": "b", "likes_count": 7}]}"#,
        )
        .unwrap();
        assert_eq!(response.articles.len(), 1);
        assert_eq!(normalize_article(response.articles[0].clone()).likes_count, 7);
    }
}
