use serde::{Deserialize, Serialize};

/// 匿名作者的展示名称
pub const ANONYMOUS_LABEL: &str = "Аноним";
/// 头像缺失时的占位图路径
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// 审核状态 - 文章在审核流程中所处的阶段
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    /// 草稿
    Draft,
    /// 待审核
    Pending,
    /// 已通过
    Approved,
    /// 已拒绝
    Rejected,
}

/// 媒体类型 - 图片或外链视频
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// 图片，media_url 为图片地址
    Image,
    /// YouTube 视频，media_url 为视频ID
    Youtube,
}

/// 作者信息
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Author {
    /// 作者唯一标识符
    pub id: String,
    /// Telegram 用户ID
    pub telegram_id: i64,
    /// 用户名
    pub username: String,
    /// 名字
    pub first_name: String,
    /// 姓氏 (可选)
    pub last_name: Option<String>,
    /// 头像地址 (可选)
    pub avatar_url: Option<String>,
    /// 声望值
    pub reputation: i32,
    /// 已发布文章数
    pub articles_count: u32,
    /// 是否为高级用户
    pub is_premium: bool,
    /// 注册时间
    pub created_at: String,
}

/// 文章 - 浏览视图操作的核心实体，对本模块只读
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Article {
    /// 文章唯一标识符
    pub id: String,
    /// 作者ID
    pub author_id: String,
    /// 作者信息 (匿名发布时可能缺失)
    pub author: Option<Author>,
    /// 分类ID
    pub category_id: String,
    /// 文章标题
    pub title: String,
    /// 文章摘要
    pub preview: String,
    /// 文章正文
    pub body: String,
    /// 媒体地址 (可选)
    pub media_url: Option<String>,
    /// 媒体类型 (可选)
    pub media_type: Option<MediaKind>,
    /// 是否匿名发布
    pub is_anonymous: bool,
    /// 审核状态
    pub status: ModerationStatus,
    /// 点赞数
    pub likes_count: u32,
    /// 评论数
    pub comments_count: u32,
    /// 收藏数
    pub favorites_count: u32,
    /// 声望评分
    pub rep_score: i32,
    /// 是否允许评论
    pub allow_comments: bool,
    /// 创建时间
    pub created_at: String,
    /// 更新时间
    pub updated_at: String,
}

/// 分类 - 用于文章筛选的标签
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Category {
    /// 分类唯一标识符
    pub id: String,
    /// 分类显示名称
    pub name: String,
}

impl Article {
    /// 获取展示用的作者名称，匿名文章显示占位名称
    pub fn display_author_name(&self) -> &str {
        if self.is_anonymous {
            return ANONYMOUS_LABEL;
        }
        self.author
            .as_ref()
            .map(|a| a.first_name.as_str())
            .unwrap_or(ANONYMOUS_LABEL)
    }

    /// 获取展示用的头像地址，匿名或缺失时返回占位图
    pub fn display_avatar_url(&self) -> &str {
        if self.is_anonymous {
            return PLACEHOLDER_AVATAR;
        }
        self.author
            .as_ref()
            .and_then(|a| a.avatar_url.as_deref())
            .unwrap_or(PLACEHOLDER_AVATAR)
    }

    /// 根据视频ID生成 YouTube 预览图地址，非视频文章返回 None
    pub fn youtube_thumbnail_url(&self) -> Option<String> {
        match (self.media_type, self.media_url.as_deref()) {
            (Some(MediaKind::Youtube), Some(video_id)) => Some(format!(
                "https://img.youtube.com/vi/{}/maxresdefault.jpg",
                video_id
            )),
            _ => None,
        }
    }
}
