//! 提供给 JavaScript 使用的弹窗状态接口
//!
//! 状态按弹窗实例持有，不使用全局变量。搜索是异步的，
//! 通过 spawn_local 在后台完成后写回共享状态。

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

use search_client::SearchClient;
use utils_common::models::{Article, Category};

use crate::{BrowseState, SEARCH_LIMIT};

/// 初始化函数 - 设置错误处理
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 版本信息
#[wasm_bindgen]
pub fn version() -> String {
    "1.0.0".to_string()
}

/// 全屏文章弹窗的JS接口
#[wasm_bindgen]
pub struct BrowseModal {
    state: Rc<RefCell<BrowseState>>,
    client: Rc<SearchClient>,
}

#[wasm_bindgen]
impl BrowseModal {
    /// 创建实例，endpoint 为后端函数服务的基础地址
    #[wasm_bindgen(constructor)]
    pub fn new(endpoint: &str) -> BrowseModal {
        BrowseModal {
            state: Rc::new(RefCell::new(BrowseState::new(Vec::new(), None))),
            client: Rc::new(SearchClient::new(endpoint)),
        }
    }

    /// 弹窗打开，用初始文章列表和可选分类播种状态
    pub fn open(
        &self,
        initial_articles: JsValue,
        initial_category: JsValue,
    ) -> Result<(), JsValue> {
        let articles: Vec<Article> = serde_wasm_bindgen::from_value(initial_articles)
            .map_err(|e| JsValue::from_str(&format!("解析初始文章列表失败: {}", e)))?;
        let category: Option<Category> = serde_wasm_bindgen::from_value(initial_category)
            .map_err(|e| JsValue::from_str(&format!("解析初始分类失败: {}", e)))?;
        self.state.borrow_mut().open(articles, category);
        Ok(())
    }

    /// 弹窗关闭，丢弃全部状态
    pub fn close(&self) {
        self.state.borrow_mut().close();
    }

    /// 选择分类，传 null 还原完整初始列表
    pub fn select_category(&self, category: JsValue) -> Result<(), JsValue> {
        let category: Option<Category> = serde_wasm_bindgen::from_value(category)
            .map_err(|e| JsValue::from_str(&format!("解析分类失败: {}", e)))?;
        self.state.borrow_mut().select_category(category);
        Ok(())
    }

    /// 提交搜索，查询太短时不做任何事
    ///
    /// 错误只写入控制台，不向调用方抛出; 无论成败，完成后
    /// is_searching 都会回到 false。
    pub fn search(&self, query: String) {
        let ticket = match self.state.borrow_mut().begin_search(&query) {
            Some(ticket) => ticket,
            None => return,
        };

        let state = Rc::clone(&self.state);
        let client = Rc::clone(&self.client);
        spawn_local(async move {
            match client.search_articles(&ticket.query, SEARCH_LIMIT).await {
                Ok(articles) => {
                    state.borrow_mut().apply_search_results(&ticket, articles);
                }
                Err(e) => {
                    console::log_1(&JsValue::from_str(&format!("搜索失败: {}", e)));
                    state.borrow_mut().fail_search(&ticket);
                }
            }
        });
    }

    /// 展开/收起一篇文章
    pub fn toggle_expand(&self, id: &str) {
        self.state.borrow_mut().toggle_expand(id);
    }

    /// 选中文章交给详情视图，传 null 返回浏览视图
    pub fn select_article(&self, article: JsValue) -> Result<(), JsValue> {
        let article: Option<Article> = serde_wasm_bindgen::from_value(article)
            .map_err(|e| JsValue::from_str(&format!("解析文章失败: {}", e)))?;
        self.state.borrow_mut().select_article(article);
        Ok(())
    }

    /// 当前应展示的文章列表（每次调用现算）
    pub fn displayed_articles(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.state.borrow().displayed_articles())
            .map_err(|e| JsValue::from_str(&format!("序列化文章列表失败: {}", e)))
    }

    /// 当前选中的文章，未选中时为 null
    pub fn selected_article(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.state.borrow().selected_article())
            .map_err(|e| JsValue::from_str(&format!("序列化文章失败: {}", e)))
    }

    /// 是否有搜索在途
    pub fn is_searching(&self) -> bool {
        self.state.borrow().is_searching()
    }

    /// 最近一次搜索是否失败
    pub fn search_failed(&self) -> bool {
        self.state.borrow().search_failed()
    }

    /// 当前展开的文章ID
    pub fn expanded_id(&self) -> Option<String> {
        self.state.borrow().expanded_id().map(|id| id.to_string())
    }

    /// 当前查询文本
    pub fn query_text(&self) -> String {
        self.state.borrow().query_text().to_string()
    }
}
