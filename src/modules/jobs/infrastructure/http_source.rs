use async_trait::async_trait;
use rand::Rng;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::modules::jobs::domain::entities::RawJob;
use crate::modules::jobs::domain::repository::JobSource;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

/// Retry configuration for the fetch request
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

/// `JobSource` backed by the remote sheet endpoint
///
/// One GET, no query parameters, no authentication. Transient failures
/// (transport errors, 5xx, 408, 429) are retried with exponential backoff;
/// everything else fails immediately and is left to the caller's fallback
/// chain.
pub struct HttpJobSource {
    client: Client,
    api_url: String,
    retry: RetryConfig,
}

impl HttpJobSource {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| AppError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            retry: RetryConfig::default(),
        })
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    async fn fetch_once(&self) -> AppResult<Vec<RawJob>> {
        let response = self.client.get(&self.api_url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(status_error(status));
        }

        let body = response.text().await?;
        let rows: Vec<RawJob> = serde_json::from_str(&body)
            .map_err(|e| AppError::ParseError(format!("Malformed job payload: {}", e)))?;

        debug!("Fetched {} raw rows from data source", rows.len());
        Ok(rows)
    }

    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponential = self.retry.base_delay.as_millis() as f64
            * self.retry.backoff_multiplier.powi(attempt as i32);
        let mut delay = Duration::from_millis(exponential as u64).min(self.retry.max_delay);

        if self.retry.jitter {
            let jitter_ms =
                (delay.as_millis() as f64 * 0.1 * rand::thread_rng().gen::<f64>()) as u64;
            delay += Duration::from_millis(jitter_ms);
        }

        delay
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_jobs(&self) -> AppResult<Vec<RawJob>> {
        let mut last_error = None;

        for attempt in 0..=self.retry.max_retries {
            match self.fetch_once().await {
                Ok(rows) => {
                    if attempt > 0 {
                        debug!("Fetch succeeded on attempt {}", attempt + 1);
                    }
                    return Ok(rows);
                }
                Err(error) => {
                    if !is_transient(&error) {
                        debug!("Fetch failed with non-retryable error: {}", error);
                        return Err(error);
                    }

                    if attempt < self.retry.max_retries {
                        let delay = self.delay_for_attempt(attempt);
                        warn!(
                            "Fetch failed on attempt {} ({}), retrying in {:?}",
                            attempt + 1,
                            error,
                            delay
                        );
                        sleep(delay).await;
                    } else {
                        warn!(
                            "Fetch failed on final attempt {} ({}), giving up",
                            attempt + 1,
                            error
                        );
                    }

                    last_error = Some(error);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| AppError::NetworkError("All fetch attempts failed".to_string())))
    }
}

fn status_error(status: StatusCode) -> AppError {
    AppError::ResponseError(format!("Data source returned {}", status))
}

/// Transport errors and server-side hiccups are worth a retry; client
/// errors and parse failures are not.
fn is_transient(error: &AppError) -> bool {
    match error {
        AppError::NetworkError(_) => true,
        AppError::ResponseError(msg) => {
            msg.contains("500")
                || msg.contains("502")
                || msg.contains("503")
                || msg.contains("504")
                || msg.contains("408")
                || msg.contains("429")
        }
        _ => false,
    }
}
