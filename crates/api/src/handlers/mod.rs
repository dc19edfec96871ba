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
pub mod visit_logs;

use crate::error::AppError;
use tc_core::error::CoreError;

/// Reject a blank required text field.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} is required"
        ))));
    }
    Ok(())
}
