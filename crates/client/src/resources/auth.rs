use serde_json::json;

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use crate::models::{LoginResult, User};

pub struct AuthApi;

impl AuthApi {
    /// Log in and store the token and user in the session.
    pub async fn login(gateway: &Gateway, username: &str, password: &str) -> ClientResult<User> {
        let result: LoginResult = gateway
            .post(
                "/auth/login",
                &json!({ "username": username, "password": password }),
            )
            .await?;
        gateway.session().store_login(&result)?;
        tracing::info!(user_id = result.user.id, "Logged in");
        Ok(result.user)
    }

    /// Tell the server, then drop local credentials whatever it answered.
    pub async fn logout(gateway: &Gateway) -> ClientResult<()> {
        let outcome = gateway.post::<Option<()>, _>("/auth/logout", &json!({})).await;
        gateway.session().clear_credentials()?;
        match outcome {
            Ok(_) | Err(ClientError::Unauthorized) => Ok(()),
            Err(e) => Err(e),
        }
    }

    pub async fn me(gateway: &Gateway) -> ClientResult<User> {
        gateway.get("/auth/me").await
    }
}
