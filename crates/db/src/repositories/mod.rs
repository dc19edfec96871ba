//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod content_item_repo;
pub mod customer_case_repo;
pub mod dashboard_repo;
pub mod inquiry_repo;
pub mod product_repo;
pub mod user_repo;
pub mod visit_log_repo;

pub use category_repo::CategoryRepo;
pub use content_item_repo::ContentItemRepo;
pub use customer_case_repo::CustomerCaseRepo;
pub use dashboard_repo::DashboardRepo;
pub use inquiry_repo::InquiryRepo;
pub use product_repo::ProductRepo;
pub use user_repo::UserRepo;
pub use visit_log_repo::VisitLogRepo;
