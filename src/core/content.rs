//! Static site copy and the feature table.
//!
//! Every user-visible string lives here. The copy is locale-fixed (zh-CN);
//! swapping the language means editing this module and nothing else.

/// Site/product display name
pub const SITE_NAME: &str = "我们的平台";

/// Document title
pub const PAGE_TITLE: &str = "我们的平台 - 创新解决方案";

/// SEO meta description
pub const META_DESCRIPTION: &str = "我们的平台提供直观的工具，帮助您更高效地完成工作，释放创造力。加入等待名单，成为第一批用户。";

// ---------------------------------------------------------------------------
// Hero section
// ---------------------------------------------------------------------------

pub const HERO_TITLE: &str = "创新解决方案，改变您的工作方式";
pub const HERO_SUBTITLE: &str = "我们的平台提供直观的工具，帮助您更高效地完成工作，释放创造力。";

/// Label of both waiting-list triggers (hero and CTA)
pub const JOIN_WAITLIST: &str = "加入等待名单";
pub const LEARN_MORE: &str = "了解更多";

// ---------------------------------------------------------------------------
// Features section
// ---------------------------------------------------------------------------

pub const FEATURES_TITLE: &str = "我们的核心价值";
pub const FEATURES_SUBTITLE: &str = "我们致力于提供最佳的用户体验和解决方案，以下是我们的核心价值观。";

/// One marketing feature: an icon identifier plus its copy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureDescriptor {
    /// Icon identifier rendered by the feature glyph widget
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The three features, in display order. Defined once, never mutated.
pub const FEATURES: [FeatureDescriptor; 3] = [
    FeatureDescriptor {
        icon: "rocket",
        title: "快速启动",
        description: "我们的平台让您能够快速启动项目，无需复杂的设置过程。",
    },
    FeatureDescriptor {
        icon: "shield",
        title: "安全可靠",
        description: "我们优先考虑您的数据安全，采用最先进的加密技术保护您的信息。",
    },
    FeatureDescriptor {
        icon: "zap",
        title: "高效协作",
        description: "我们的工具专为团队协作而设计，提高生产力和沟通效率。",
    },
];

// ---------------------------------------------------------------------------
// Call-to-action section
// ---------------------------------------------------------------------------

pub const CTA_TITLE: &str = "准备好开始了吗？";
pub const CTA_SUBTITLE: &str = "我们正在开发中，很快就会推出。现在加入等待名单，成为第一批体验我们平台的用户。";

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub const FOOTER_COPYRIGHT: &str = "© 2025 我们的平台。保留所有权利。";
pub const FOOTER_PRIVACY: &str = "隐私政策";
pub const FOOTER_TERMS: &str = "使用条款";

// ---------------------------------------------------------------------------
// Waiting-list dialog
// ---------------------------------------------------------------------------

pub const DIALOG_TITLE: &str = "加入等待名单";
pub const DIALOG_DESCRIPTION: &str = "填写以下信息加入我们的等待名单，成为第一批体验我们平台的用户。";

pub const FIELD_NAME_LABEL: &str = "姓名";
pub const FIELD_NAME_PLACEHOLDER: &str = "请输入您的姓名";
pub const FIELD_EMAIL_LABEL: &str = "电子邮箱";
pub const FIELD_EMAIL_PLACEHOLDER: &str = "请输入您的电子邮箱";
pub const FIELD_DESCRIPTION_LABEL: &str = "您对我们平台的期望";
pub const FIELD_DESCRIPTION_PLACEHOLDER: &str = "请告诉我们您对我们平台的期望或您希望解决的问题";

pub const DIALOG_SUBMIT: &str = "提交";
pub const DIALOG_CANCEL: &str = "取消";

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Fixed title/message pair shown after a successful submission
pub const SUBMIT_SUCCESS_TITLE: &str = "提交成功！";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "感谢您的兴趣，我们会尽快与您联系。";

// ---------------------------------------------------------------------------
// Not-found page
// ---------------------------------------------------------------------------

pub const NOT_FOUND_TITLE: &str = "页面未找到";
pub const NOT_FOUND_MESSAGE: &str = "您访问的页面不存在或已被移动。";
pub const NOT_FOUND_HOME: &str = "返回首页";
