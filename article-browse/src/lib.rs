use utils_common::models::{Article, Category};

#[cfg(target_arch = "wasm32")]
pub mod js;

/// 每次远程搜索的结果上限
pub const SEARCH_LIMIT: usize = 50;
/// 触发搜索所需的最小查询长度（按字符计）
pub const MIN_QUERY_CHARS: usize = 2;

/// 搜索凭据 - 标识一次已发起、尚未完成的远程搜索
///
/// 只有持有当前代数凭据的响应才能修改状态，过期凭据会被忽略，
/// 防止迟到的旧响应覆盖更新的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    /// 去除首尾空白后的查询文本
    pub query: String,
}

/// 浏览视图状态 - 全屏文章弹窗的核心状态机
///
/// 每次弹窗打开对应一个实例生命周期，关闭后状态即被丢弃。
/// 三个独立触发源（打开、选择分类、提交搜索）在这里汇聚为
/// 一致的结果集。
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    /// 打开时注入的初始文章列表，作为筛选和还原的基准
    seeded: Vec<Article>,
    /// 当前工作结果集
    articles: Vec<Article>,
    /// 当前选中的分类
    active_category: Option<Category>,
    /// 当前查询文本
    query_text: String,
    /// 当前展开的文章ID，同时至多一篇
    expanded_id: Option<String>,
    /// 移交给详情视图的文章
    selected: Option<Article>,
    /// 搜索代数计数器，每次发起搜索递增
    generation: u64,
    /// 未完成搜索的代数，None 表示没有在途搜索
    inflight: Option<u64>,
    /// 最近一次搜索是否失败
    search_failed: bool,
}

impl BrowseState {
    /// 创建并播种状态，等价于首次 open
    pub fn new(initial_articles: Vec<Article>, initial_category: Option<Category>) -> Self {
        Self {
            seeded: initial_articles.clone(),
            articles: initial_articles,
            active_category: initial_category,
            query_text: String::new(),
            expanded_id: None,
            selected: None,
            generation: 0,
            inflight: None,
            search_failed: false,
        }
    }

    /// 弹窗打开时重置全部状态
    ///
    /// 幂等: 相同参数重复调用得到相同状态。在途搜索作废。
    pub fn open(&mut self, initial_articles: Vec<Article>, initial_category: Option<Category>) {
        self.seeded = initial_articles.clone();
        self.articles = initial_articles;
        self.active_category = initial_category;
        self.query_text.clear();
        self.expanded_id = None;
        self.selected = None;
        self.inflight = None;
        self.search_failed = false;
    }

    /// 弹窗关闭时清空状态，下次打开必须重新播种
    pub fn close(&mut self) {
        self.seeded.clear();
        self.articles.clear();
        self.active_category = None;
        self.query_text.clear();
        self.expanded_id = None;
        self.selected = None;
        self.inflight = None;
        self.search_failed = false;
    }

    /// 选择分类并从初始列表重新计算结果集
    ///
    /// 结果集是 (初始列表, 分类) 的纯函数: 之前的搜索结果被丢弃，
    /// 查询文本被清空，在途搜索作废。传 None 还原完整初始列表。
    pub fn select_category(&mut self, category: Option<Category>) {
        self.query_text.clear();
        self.inflight = None;
        self.search_failed = false;
        self.articles = match &category {
            Some(cat) => self
                .seeded
                .iter()
                .filter(|a| a.category_id == cat.id)
                .cloned()
                .collect(),
            None => self.seeded.clone(),
        };
        self.active_category = category;
    }

    /// 发起搜索，返回本次搜索的凭据
    ///
    /// 去除空白后不足 MIN_QUERY_CHARS 个字符时不做任何事并返回 None。
    /// 再次发起会使上一次的凭据过期，保证同一时刻只有最新一次
    /// 搜索能够写回状态。
    pub fn begin_search(&mut self, query: &str) -> Option<SearchTicket> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return None;
        }

        self.generation += 1;
        self.inflight = Some(self.generation);
        self.query_text = trimmed.to_string();
        self.search_failed = false;

        Some(SearchTicket {
            generation: self.generation,
            query: trimmed.to_string(),
        })
    }

    /// 搜索成功，用返回的文章替换结果集
    ///
    /// 分类选择保持不变: 展示逻辑在查询非空时不做分类过滤。
    /// 过期凭据被忽略并返回 false。
    pub fn apply_search_results(&mut self, ticket: &SearchTicket, articles: Vec<Article>) -> bool {
        if self.inflight != Some(ticket.generation) {
            log::warn!("忽略过期的搜索响应: {}", ticket.query);
            return false;
        }
        self.inflight = None;
        self.search_failed = false;
        self.articles = articles;
        true
    }

    /// 搜索失败（传输错误或响应格式错误），结果集保持不变
    ///
    /// 无论成败，凭据结清后 is_searching 必然为 false。
    pub fn fail_search(&mut self, ticket: &SearchTicket) -> bool {
        if self.inflight != Some(ticket.generation) {
            return false;
        }
        self.inflight = None;
        self.search_failed = true;
        true
    }

    /// 展开/收起一篇文章，同一ID再次调用即收起
    pub fn toggle_expand(&mut self, id: &str) {
        if self.expanded_id.as_deref() == Some(id) {
            self.expanded_id = None;
        } else {
            self.expanded_id = Some(id.to_string());
        }
    }

    /// 选中文章移交详情视图，传 None 返回浏览视图
    pub fn select_article(&mut self, article: Option<Article>) {
        self.selected = article;
    }

    /// 计算当前应展示的文章列表
    ///
    /// 每次读取现算，不缓存: 只有在选中了分类且查询为空时
    /// 才按分类过滤，查询非空时搜索结果原样展示。
    pub fn displayed_articles(&self) -> Vec<Article> {
        match &self.active_category {
            Some(cat) if self.query_text.is_empty() => self
                .articles
                .iter()
                .filter(|a| a.category_id == cat.id)
                .cloned()
                .collect(),
            _ => self.articles.clone(),
        }
    }

    pub fn is_searching(&self) -> bool {
        self.inflight.is_some()
    }

    pub fn search_failed(&self) -> bool {
        self.search_failed
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn active_category(&self) -> Option<&Category> {
        self.active_category.as_ref()
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded_id.as_deref()
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.selected.as_ref()
    }
}
