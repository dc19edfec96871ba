//! The single entry point for calls to the REST API.
//!
//! Every request gets the base path for the configured mode and the stored
//! token in the `satoken` header. Responses arrive as `{code, data,
//! message}` envelopes: `data` is returned on `code == 200`, anything else
//! is an error. A 401, as HTTP status or envelope code, clears the stored
//! credentials and navigates to the login route.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::guard::{Navigator, LOGIN_PATH};
use crate::session::Session;

/// Header the server reads the session token from.
pub const TOKEN_HEADER: &str = "satoken";

const SUCCESS_CODE: i64 = 200;
const UNAUTHORIZED_CODE: i64 = 401;

#[derive(Debug, Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    data: serde_json::Value,
    #[serde(default)]
    message: String,
}

/// HTTP gateway to the API. Cheap to clone; clones share the connection
/// pool, session and navigator.
#[derive(Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl Gateway {
    pub fn new(
        config: &ClientConfig,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url(),
            session,
            navigator,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an API path such as `/products/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    pub async fn get_with<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.delete(self.url(path))).await
    }

    /// Multipart upload of one file in the `file` part.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<T> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        self.send(self.client.post(self.url(path)).multipart(form))
            .await
    }

    /// Raw response bytes for non-envelope endpoints (file downloads).
    pub async fn download(&self, path: &str) -> ClientResult<Vec<u8>> {
        let response = self.authorize(self.client.get(self.url(path))).send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(self.force_logout());
        }
        if !status.is_success() {
            return Err(rejection_from_status(status));
        }
        Ok(response.bytes().await?.to_vec())
    }

    // ---- private helpers ----

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(TOKEN_HEADER, token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(self.force_logout());
        }

        let bytes = response.bytes().await?;
        let envelope: Envelope = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(rejection_from_status(status)),
            Err(e) => return Err(ClientError::Decode(e.to_string())),
        };

        match envelope.code {
            SUCCESS_CODE => serde_json::from_value(envelope.data)
                .map_err(|e| ClientError::Decode(e.to_string())),
            UNAUTHORIZED_CODE => Err(self.force_logout()),
            code => {
                tracing::debug!(code, message = %envelope.message, "Request rejected");
                Err(ClientError::Rejected {
                    code,
                    message: if envelope.message.is_empty() {
                        "Error".to_string()
                    } else {
                        envelope.message
                    },
                })
            }
        }
    }

    /// Clear `token`/`user` and send the user to the login route.
    fn force_logout(&self) -> ClientError {
        if let Err(e) = self.session.clear_credentials() {
            tracing::error!(error = %e, "Failed to clear session");
        }
        tracing::warn!("Session rejected by server, redirecting to login");
        self.navigator.navigate(LOGIN_PATH);
        ClientError::Unauthorized
    }
}

fn rejection_from_status(status: StatusCode) -> ClientError {
    ClientError::Rejected {
        code: i64::from(status.as_u16()),
        message: status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    }
}
