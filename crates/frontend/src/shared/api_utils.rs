//! HTTP client for the catalog backend
//!
//! Every request goes to the origin from [`AppConfig`]. When a session token is
//! held it is forwarded as a bearer token; the backend decides what to do with it.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::use_config;
use crate::system::auth::context::use_session;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Request failed with status {status}")]
    Status { status: u16 },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Whether the backend answered but refused the request
    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    origin: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(origin: impl Into<String>, token: Option<String>) -> Self {
        Self {
            origin: origin.into(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.bearer() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        log::debug!("GET {}", path);
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(check_status(response, path)?).await
    }

    /// POST a JSON body and decode the JSON answer
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.send_with_body(Request::post(&self.url(path)), path, body).await?;
        decode(response).await
    }

    /// POST a JSON body; the answer body is ignored
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_with_body(Request::post(&self.url(path)), path, body)
            .await
            .map(|_| ())
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send_with_body(Request::put(&self.url(path)), path, body)
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        log::debug!("DELETE {}", path);
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response, path).map(|_| ())
    }

    async fn send_with_body<B: Serialize>(
        &self,
        builder: RequestBuilder,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        log::debug!("send {}", path);
        let response = self
            .authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response, path)
    }
}

fn check_status(response: Response, path: &str) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        log::warn!("{} answered {}", path, response.status());
        Err(ApiError::Status {
            status: response.status(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Builds a client from the configured origin and the current session token.
pub fn use_api() -> ApiClient {
    let config = use_config();
    let session = use_session();
    ApiClient::new(config.api_origin, session.token_untracked())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_only_with_token() {
        let anonymous = ApiClient::new("http://localhost:8080", None);
        assert_eq!(anonymous.bearer(), None);

        let signed = ApiClient::new("http://localhost:8080", Some("abc".to_string()));
        assert_eq!(signed.bearer().as_deref(), Some("Bearer abc"));
        assert_eq!(signed.url("/categories"), "http://localhost:8080/categories");
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status { status: 401 };
        assert!(err.is_rejected());
        assert_eq!(err.to_string(), "Request failed with status 401");
        assert!(!ApiError::Network("offline".into()).is_rejected());
    }
}
