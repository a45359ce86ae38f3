//! HTTP backend abstraction.
//!
//! A small trait over the handful of verbs the adapter needs, so the
//! client can be driven by a fake in tests. The production
//! implementation is a thin layer over reqwest.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Trait for HTTP backends the API client can run on.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;

    /// POST a JSON body and deserialize the JSON response.
    async fn post_json<B: Serialize + Send + Sync, T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &B,
    ) -> ApiResult<T>;

    /// PUT raw bytes to a URL (signed-URL uploads, no bearer token).
    async fn put_bytes(&self, url: &Url, bytes: Vec<u8>, content_type: &str) -> ApiResult<()>;

    /// DELETE a URL and deserialize the JSON response.
    async fn delete_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;
}

/// Production backend over reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Build a backend from the client configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            auth_token: config.token.clone(),
        })
    }

    /// Attach the bearer token, if configured.
    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }
}

/// Fail on non-success statuses, keeping the code and URL.
async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::RequestFailed {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        let response = self.authed(self.client.get(url.as_str())).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize + Send + Sync, T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .authed(self.client.post(url.as_str()).json(body))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn put_bytes(&self, url: &Url, bytes: Vec<u8>, content_type: &str) -> ApiResult<()> {
        // Signed upload URLs carry their own authorization.
        let response = self
            .client
            .put(url.as_str())
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        let response = self.authed(self.client.delete(url.as_str())).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

// ============================================================================
// Fake backend for testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned reply keyed by URL substring.
    #[derive(Clone)]
    pub struct CannedReply {
        pub status: u16,
        pub json: serde_json::Value,
    }

    impl CannedReply {
        pub fn ok(json: serde_json::Value) -> Self {
            Self { status: 200, json }
        }

        pub const fn status(status: u16) -> Self {
            Self {
                status,
                json: serde_json::Value::Null,
            }
        }
    }

    /// A fake backend that matches requests by URL substring.
    #[derive(Default)]
    pub struct FakeBackend {
        replies: Mutex<HashMap<String, CannedReply>>,
        pub puts: Mutex<Vec<(String, usize, String)>>,
        pub requests: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_reply(self, url_contains: &str, reply: CannedReply) -> Self {
            self.replies
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), reply);
            self
        }

        fn reply_for(&self, url: &Url) -> ApiResult<serde_json::Value> {
            self.requests.lock().unwrap().push(url.to_string());
            let replies = self.replies.lock().unwrap();
            let reply = replies
                .iter()
                .find(|(pattern, _)| url.as_str().contains(pattern.as_str()))
                .map(|(_, reply)| reply.clone())
                .ok_or_else(|| ApiError::RequestFailed {
                    status: 404,
                    url: url.to_string(),
                })?;
            if (200..300).contains(&reply.status) {
                Ok(reply.json)
            } else {
                Err(ApiError::RequestFailed {
                    status: reply.status,
                    url: url.to_string(),
                })
            }
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
            serde_json::from_value(self.reply_for(url)?).map_err(Into::into)
        }

        async fn post_json<B: Serialize + Send + Sync, T: DeserializeOwned + Send>(
            &self,
            url: &Url,
            _body: &B,
        ) -> ApiResult<T> {
            serde_json::from_value(self.reply_for(url)?).map_err(Into::into)
        }

        async fn put_bytes(&self, url: &Url, bytes: Vec<u8>, content_type: &str) -> ApiResult<()> {
            self.puts.lock().unwrap().push((
                url.to_string(),
                bytes.len(),
                content_type.to_string(),
            ));
            Ok(())
        }

        async fn delete_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
            serde_json::from_value(self.reply_for(url)?).map_err(Into::into)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_builds_from_default_config() {
        let backend = ReqwestBackend::new(&ApiConfig::default()).unwrap();
        assert!(backend.auth_token.is_none());
    }

    #[test]
    fn backend_keeps_the_configured_token() {
        let config = ApiConfig::new().with_token("secret");
        let backend = ReqwestBackend::new(&config).unwrap();
        assert_eq!(backend.auth_token.as_deref(), Some("secret"));
    }
}
