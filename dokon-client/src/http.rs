//! HTTP transport for backend API calls
//!
//! Thin reqwest wrapper that turns every response into either the payload
//! of a successful `ApiResponse` envelope or a [`ClientError`]. HTTP-level
//! failures map to status-specific variants; a 2xx body with
//! `success: false` maps to [`ClientError::Api`].

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;

/// HTTP client for making network requests to the catalog backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Backend base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request without body (status flips, soft deletes)
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// POST a single file as multipart form data under the `file` field
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        bytes: Vec<u8>,
        filename: &str,
        mime: &str,
    ) -> ClientResult<T> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Unwrap the `ApiResponse` envelope or map the failure
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // The backend sometimes ships an envelope even on error statuses;
            // prefer its message over the raw body.
            let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text)
                .map(|r| r.message)
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or(text);
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.success {
            return Err(ClientError::Api {
                message: envelope.message,
                code: envelope.code,
            });
        }
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("missing data field".to_string()))
    }
}
