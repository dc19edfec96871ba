//! Customer inquiries submitted through the public contact form.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Processing state of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    Unread,
    Read,
    Processed,
}

impl InquiryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InquiryStatus::Unread => "unread",
            InquiryStatus::Read => "read",
            InquiryStatus::Processed => "processed",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "unread" => Ok(InquiryStatus::Unread),
            "read" => Ok(InquiryStatus::Read),
            "processed" => Ok(InquiryStatus::Processed),
            other => Err(CoreError::Validation(format!(
                "Unknown inquiry status '{other}'"
            ))),
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The public contact form.
///
/// `name`, `phone` and `content` are required; `email` and `attachment` are
/// optional and an empty string counts as absent. Missing JSON fields
/// deserialize as empty so they fail validation instead of parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub phone: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
    pub attachment: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ContactForm {
    /// Trim every field and collapse empty optionals to `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: non_blank(self.email),
            content: self.content.trim().to_string(),
            attachment: non_blank(self.attachment),
        }
    }

    /// Normalize, then check required fields.
    pub fn validated(self) -> Result<Self, CoreError> {
        let form = self.normalized();
        form.validate()?;
        Ok(form)
    }
}
