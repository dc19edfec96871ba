//! First-start administrator provisioning.

use tc_db::models::user::CreateSysUser;
use tc_db::repositories::UserRepo;
use tc_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminBootstrap;
use crate::error::AppError;

/// Create the configured administrator when the user table is empty.
///
/// Does nothing once any user exists, so rotating `ADMIN_PASSWORD` later has
/// no effect on the stored account.
pub async fn ensure_admin_user(
    pool: &DbPool,
    admin: Option<&AdminBootstrap>,
) -> Result<(), AppError> {
    if UserRepo::count(pool).await? > 0 {
        return Ok(());
    }

    let Some(admin) = admin else {
        tracing::warn!("No users exist and ADMIN_USERNAME/ADMIN_PASSWORD are unset; nobody can log in");
        return Ok(());
    };

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let user = UserRepo::create(
        pool,
        &CreateSysUser {
            username: admin.username.clone(),
            nickname: Some("Administrator".to_string()),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap administrator created");
    Ok(())
}
