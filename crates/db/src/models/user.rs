//! Back-office user model.

use serde::Serialize;
use sqlx::FromRow;
use tc_core::types::{DbId, Timestamp};

/// Full row from the `sys_users` table.
///
/// Contains the password hash; never serialize this directly. Use
/// [`UserResponse`] for API output.
#[derive(Debug, Clone, FromRow)]
pub struct SysUser {
    pub id: DbId,
    pub username: String,
    pub nickname: Option<String>,
    pub password_hash: String,
    pub create_time: Timestamp,
}

/// Safe user representation for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub nickname: Option<String>,
    pub create_time: Timestamp,
}

impl From<SysUser> for UserResponse {
    fn from(user: SysUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            nickname: user.nickname,
            create_time: user.create_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSysUser {
    pub username: String,
    pub nickname: Option<String>,
    pub password_hash: String,
}
