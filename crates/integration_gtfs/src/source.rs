//! Feed download

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::config::{ResourceDescriptor, ScheduleConfig};
use crate::error::ScheduleError;

/// Raw body of a downloaded resource
#[derive(Debug, Clone)]
pub struct FeedPayload {
    /// `Content-Type` header as sent by the server
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FeedPayload {
    /// Whether the content type announces a zip archive
    #[must_use]
    pub fn is_zip(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("zip"))
    }
}

/// Trait for fetching schedule resources
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Download one resource
    async fn fetch(&self, resource: &ResourceDescriptor) -> Result<FeedPayload, ScheduleError>;
}

/// Feed source downloading over HTTP
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
    timeout_secs: u64,
}

impl HttpFeedSource {
    /// Create a new HTTP feed source
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ScheduleConfig) -> Result<Self, ScheduleError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ScheduleError::ConnectionFailed {
                title: "client".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_transport_error(&self, title: &str, e: &reqwest::Error) -> ScheduleError {
        if e.is_timeout() {
            ScheduleError::Timeout {
                title: title.to_string(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            ScheduleError::ConnectionFailed {
                title: title.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    #[instrument(skip(self, resource), fields(title = %resource.title))]
    async fn fetch(&self, resource: &ResourceDescriptor) -> Result<FeedPayload, ScheduleError> {
        debug!(url = %resource.url, "Downloading feed");

        let response = self
            .client
            .get(&resource.url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&resource.title, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScheduleError::DownloadFailed {
                title: resource.title.clone(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(&resource.title, &e))?;

        debug!(bytes = body.len(), ?content_type, "Feed downloaded");
        Ok(FeedPayload { content_type, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(content_type: Option<&str>) -> FeedPayload {
        FeedPayload {
            content_type: content_type.map(str::to_string),
            body: Bytes::new(),
        }
    }

    #[test]
    fn test_zip_content_types() {
        assert!(payload(Some("application/zip")).is_zip());
        assert!(payload(Some("application/x-zip-compressed")).is_zip());
        assert!(payload(Some("Application/ZIP; charset=binary")).is_zip());
        assert!(!payload(Some("text/html")).is_zip());
        assert!(!payload(None).is_zip());
    }

    #[test]
    fn test_client_creation() {
        assert!(HttpFeedSource::new(&ScheduleConfig::for_testing()).is_ok());
    }
}
