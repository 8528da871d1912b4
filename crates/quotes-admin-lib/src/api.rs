use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::error::{Error, Result};

/// Resource paths of the quotes backend.
pub mod paths {
    pub fn categories() -> String {
        "/categories".to_string()
    }

    pub fn category(id: &str) -> String {
        format!("/categories/{}", urlencoding::encode(id))
    }

    pub fn quotes() -> String {
        "/quotes".to_string()
    }

    pub fn quote(id: &str) -> String {
        format!("/quotes/{}", urlencoding::encode(id))
    }
}

/// REST access to the backend by resource path. Every call is a single
/// request; there is no caching, retry or timeout policy.
#[async_trait(?Send)]
pub trait Api {
    async fn get(&self, path: &str) -> Result<Value>;

    async fn post(&self, path: &str, body: &Value) -> Result<Value>;

    async fn put(&self, path: &str, body: &Value) -> Result<Value>;

    async fn delete(&self, path: &str) -> Result<Value>;
}

pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send(&self, path: &str, req: RequestBuilder) -> Result<Value> {
        let res = req.send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = res.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl Api for HttpApi {
    async fn get(&self, path: &str) -> Result<Value> {
        debug!("GET {path}");
        self.send(path, self.client.get(self.url(path))).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        debug!("POST {path}");
        self.send(path, self.client.post(self.url(path)).json(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        debug!("PUT {path}");
        self.send(path, self.client.put(self.url(path)).json(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        debug!("DELETE {path}");
        self.send(path, self.client.delete(self.url(path))).await
    }
}
