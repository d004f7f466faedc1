use crate::domain::model::RetryPolicy;
use crate::utils::error::{ContentError, Result};
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;

/// Doubling delay sequence: `initial, 2 * initial, 4 * initial, ...`.
#[derive(Debug, Clone)]
pub struct Backoff {
    next: Duration,
}

impl Backoff {
    pub fn new(initial_delay: Duration) -> Self {
        Self {
            next: initial_delay,
        }
    }

    pub fn next_delay(&mut self) -> Duration {
        let delay = self.next;
        self.next = self.next.saturating_mul(2);
        delay
    }
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        Some(self.next_delay())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    Default,
    NoStore,
}

/// 每次請求的選項：標頭、快取指示與單次請求的逾時
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub cache: CacheMode,
    pub timeout: Duration,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            cache: CacheMode::NoStore,
            timeout: RetryPolicy::DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl RequestOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Final response of a transport call: a success or a non-retried status.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
    pub attempts: u32,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RetryingTransport {
    client: Client,
}

impl RetryingTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs up to `max_retries` sequential GET attempts against `url`.
    ///
    /// - 2xx: returned immediately.
    /// - 5xx or a network failure (including the per-attempt timeout): sleep
    ///   for the current backoff delay, double it and try again. On the last
    ///   attempt this becomes `ContentError::RetriesExhausted`.
    /// - Any other status (4xx): returned immediately without retrying.
    ///
    /// `max_retries` of zero is treated as a single attempt.
    pub async fn attempt(
        &self,
        url: &str,
        options: &RequestOptions,
        max_retries: u32,
        initial_delay: Duration,
    ) -> Result<RawResponse> {
        self.attempt_with_sleep(url, options, max_retries, initial_delay, tokio::time::sleep)
            .await
    }

    /// Retry loop with the backoff wait supplied by the caller.
    async fn attempt_with_sleep<F, Fut>(
        &self,
        url: &str,
        options: &RequestOptions,
        max_retries: u32,
        initial_delay: Duration,
        mut sleep: F,
    ) -> Result<RawResponse>
    where
        F: FnMut(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        let max_retries = max_retries.max(1);
        let mut backoff = Backoff::new(initial_delay);
        let mut attempt = 1;

        loop {
            tracing::debug!("📡 Attempt {}/{} for {}", attempt, max_retries, url);

            let last_failure = match self.send_once(url, options).await {
                Ok((status, _)) if status.is_server_error() => {
                    tracing::warn!(
                        status = status.as_u16(),
                        attempt,
                        "Server error from {}",
                        url
                    );
                    format!("HTTP {}", status)
                }
                Ok((status, body)) => {
                    tracing::debug!(status = status.as_u16(), attempt, "Response from {}", url);
                    return Ok(RawResponse {
                        status,
                        body,
                        attempts: attempt,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        timeout = e.is_timeout(),
                        "Attempt failed for {}: {}",
                        url,
                        e
                    );
                    e.to_string()
                }
            };

            if attempt >= max_retries {
                tracing::error!("❌ Giving up on {} after {} attempt(s)", url, attempt);
                return Err(ContentError::RetriesExhausted {
                    url: url.to_string(),
                    attempts: attempt,
                    last_failure,
                });
            }

            let delay = backoff.next_delay();
            tracing::info!("🔁 Retrying {} in {}ms", url, delay.as_millis());
            sleep(delay).await;
            attempt += 1;
        }
    }

    /// 單次請求；讀取回應內容失敗也視為網路層錯誤
    async fn send_once(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> std::result::Result<(StatusCode, String), reqwest::Error> {
        let mut request = self.client.get(url).timeout(options.timeout);

        for (key, value) in &options.headers {
            request = request.header(key, value);
        }

        if options.cache == CacheMode::NoStore {
            request = request.header(reqwest::header::CACHE_CONTROL, "no-store");
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}
