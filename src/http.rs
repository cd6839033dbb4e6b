use reqwest::multipart::Form;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{PixGenError, Result};

/// Thin wrapper over a shared `reqwest::Client`, bound to the backend's
/// base URL. Responses are deserialized into the caller's type and passed
/// back untouched; failure statuses become errors carrying the backend's
/// own message where one is present.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| PixGenError::RequestError(format!("POST {} failed: {}", path, e)))?;

        Self::read_json(path, response).await
    }

    pub async fn post_multipart<T>(&self, path: &str, form: Form) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| PixGenError::RequestError(format!("POST {} failed: {}", path, e)))?;

        Self::read_json(path, response).await
    }

    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut request = self.client.get(self.endpoint(path));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PixGenError::RequestError(format!("GET {} failed: {}", path, e)))?;

        Self::read_json(path, response).await
    }

    pub async fn delete<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .delete(self.endpoint(path))
            .send()
            .await
            .map_err(|e| PixGenError::RequestError(format!("DELETE {} failed: {}", path, e)))?;

        Self::read_json(path, response).await
    }

    async fn read_json<T>(path: &str, response: reqwest::Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            PixGenError::ResponseError(format!("Failed to read response from {}: {}", path, e))
        })?;

        if !status.is_success() {
            // The backend reports most failures as a JSON envelope riding on
            // a 4xx/5xx status; surface its message when it has one.
            if let Ok(value) = serde_json::from_str::<Value>(&body) {
                if let Some(message) = value.get("error").and_then(Value::as_str) {
                    return Err(PixGenError::ApiError(message.to_string()));
                }
            }
            return Err(PixGenError::ResponseError(format!(
                "{} returned {}",
                path, status
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            PixGenError::ResponseError(format!("Invalid response from {}: {}", path, e))
        })
    }
}
