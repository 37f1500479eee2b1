use crate::config::MonitorConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

/// Source of the monitored page's markup
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page once. No retries; a failure ends the run.
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Fetches the page over HTTP(S) with a browser-like User-Agent and a bounded timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    url: String,
    user_agent: String,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>, user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            user_agent: user_agent.into(),
            timeout,
        }
    }

    pub fn from_config(config: &MonitorConfig) -> Self {
        Self::new(
            config.target_url.clone(),
            config.user_agent.clone(),
            config.fetch_timeout(),
        )
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self) -> Result<String, FetchError> {
        ::log::debug!("Fetching {} (timeout {:?})", self.url, self.timeout);

        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()?;

        let response = client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }
}
