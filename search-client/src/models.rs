use serde::{Deserialize, Serialize};

/// 搜索请求 - 发送给后端搜索函数的参数
#[derive(Serialize, Debug, Clone)]
pub struct SearchRequest {
    /// 搜索查询 (已去除首尾空白)
    pub query: String,
    /// 返回结果上限
    pub limit: usize,
}

/// 搜索响应 - 后端返回的结果页
///
/// `articles` 字段缺失视为响应格式错误，反序列化会直接失败，
/// 由调用方按搜索失败处理。
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    /// 松散类型的文章记录列表
    pub articles: Vec<RawArticle>,
}

/// 远程返回的原始作者记录 - 除ID外字段均可能缺失
#[derive(Deserialize, Debug, Clone)]
pub struct RawAuthor {
    /// 作者唯一标识符
    pub id: String,
    /// 用户名 (可选)
    #[serde(default)]
    pub username: Option<String>,
    /// 名字 (可选)
    #[serde(default)]
    pub first_name: Option<String>,
    /// 姓氏 (可选)
    #[serde(default)]
    pub last_name: Option<String>,
    /// 头像地址 (可选)
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// 声望值 (可选)
    #[serde(default)]
    pub reputation: Option<i32>,
    /// 是否为高级用户 (可选)
    #[serde(default)]
    pub is_premium: Option<bool>,
    /// 注册时间 (可选)
    #[serde(default)]
    pub created_at: Option<String>,
}

/// 远程返回的原始文章记录 - 只有 id/title/body 保证存在
#[derive(Deserialize, Debug, Clone)]
pub struct RawArticle {
    /// 文章唯一标识符
    pub id: String,
    /// 作者ID (可选)
    #[serde(default)]
    pub author_id: Option<String>,
    /// 作者记录 (可选)
    #[serde(default)]
    pub author: Option<RawAuthor>,
    /// 分类ID (可选)
    #[serde(default)]
    pub category_id: Option<String>,
    /// 文章标题
    pub title: String,
    /// 文章摘要 (可选)
    #[serde(default)]
    pub preview: Option<String>,
    /// 文章正文
    pub body: String,
    /// 媒体地址 (可选)
    #[serde(default)]
    pub media_url: Option<String>,
    /// 媒体类型字符串: "image" 或 "youtube" (可选)
    #[serde(default)]
    pub media_type: Option<String>,
    /// 是否匿名发布 (可选)
    #[serde(default)]
    pub is_anonymous: Option<bool>,
    /// 审核状态字符串 (可选)
    #[serde(default)]
    pub status: Option<String>,
    /// 点赞数 (可选)
    #[serde(default)]
    pub likes_count: Option<u32>,
    /// 评论数 (可选)
    #[serde(default)]
    pub comments_count: Option<u32>,
    /// 收藏数 (可选)
    #[serde(default)]
    pub favorites_count: Option<u32>,
    /// 声望评分 (可选)
    #[serde(default)]
    pub rep_score: Option<i32>,
    /// 是否允许评论 (可选)
    #[serde(default)]
    pub allow_comments: Option<bool>,
    /// 创建时间 (可选)
    #[serde(default)]
    pub created_at: Option<String>,
    /// 更新时间 (可选)
    #[serde(default)]
    pub updated_at: Option<String>,
}
