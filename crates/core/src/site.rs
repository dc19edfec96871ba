//! Public site layout selection.
//!
//! The `system_config` content item's description holds the active mode.

use serde::{Deserialize, Serialize};

pub const MODE_DEFAULT: &str = "default";
pub const MODE_BLOG: &str = "blog";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteMode {
    #[default]
    Default,
    Blog,
}

impl SiteMode {
    /// Read the mode out of a `system_config` description. Anything other
    /// than `"blog"` keeps the marketing layout.
    pub fn from_description(description: Option<&str>) -> Self {
        match description.map(str::trim) {
            Some(MODE_BLOG) => SiteMode::Blog,
            _ => SiteMode::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SiteMode::Default => MODE_DEFAULT,
            SiteMode::Blog => MODE_BLOG,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SiteMode::Default => SiteMode::Blog,
            SiteMode::Blog => SiteMode::Default,
        }
    }
}
