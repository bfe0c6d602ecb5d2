use crate::{CliClientResult, ClientError};

use ug_config::Config;

use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;

/// HTTP client for the ug-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    ///
    /// Failures from ug-server arrive as `{ "error": "...", "success": false }`.
    /// Other error bodies (proxies, a wrong `--url`) fall back to the status reason.
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| body.get("error")?.as_str().map(String::from))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Ask the server to unlink the Google identity owned by `token`
    pub async fn unlink_google(&self, token: &str) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, "/unlink-google")
            .bearer_auth(token);
        self.execute(req).await
    }

    /// Probe the server's health endpoint
    pub async fn health(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/health");
        self.execute(req).await
    }
}

/// Server URL derived from the same config ug-server reads.
///
/// A wildcard bind address is rewritten to loopback so the CLI can reach it.
pub fn default_server_url() -> CliClientResult<String> {
    let config = Config::load()?;
    let host = match config.server.host.as_str() {
        "0.0.0.0" | "::" => "127.0.0.1",
        host => host,
    };
    Ok(format!("http://{}:{}", host, config.server.port))
}
