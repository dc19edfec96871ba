//! Typed clients for each API resource.
//!
//! Like the server's repositories, each is a zero-sized struct whose
//! associated functions take the [`Gateway`](crate::gateway::Gateway).

pub mod auth;
pub mod blog;
pub mod cases;
pub mod categories;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod file;
pub mod inquiries;
pub mod products;
pub mod visits;

use serde::Serialize;

pub use auth::AuthApi;
pub use blog::BlogApi;
pub use cases::CaseApi;
pub use categories::CategoryApi;
pub use contact::ContactApi;
pub use content::ContentApi;
pub use dashboard::DashboardApi;
pub use file::FileApi;
pub use inquiries::InquiryApi;
pub use products::ProductApi;
pub use visits::VisitApi;

/// `?page=&size=` for paged lists. Unset values use the server defaults.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

impl PageQuery {
    pub fn sized(size: i64) -> Self {
        Self {
            page: None,
            size: Some(size),
        }
    }
}
