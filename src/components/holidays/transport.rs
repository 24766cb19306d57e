use miette::Diagnostic;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

/// Transport-level failure while talking to the holiday API
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TransportError {
    #[error("Request to {url} timed out")]
    #[diagnostic(code(aquacal::transport::timeout))]
    Timeout { url: String },

    #[error("Failed to connect to {url}: {reason}")]
    #[diagnostic(code(aquacal::transport::connect))]
    Connect { url: String, reason: String },

    #[error("Request to {url} failed: {reason}")]
    #[diagnostic(code(aquacal::transport::other))]
    Other { url: String, reason: String },
}

impl TransportError {
    /// Classify a reqwest error for the given URL
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        let url = url.to_string();
        if err.is_timeout() {
            TransportError::Timeout { url }
        } else if err.is_connect() {
            TransportError::Connect {
                url,
                reason: err.to_string(),
            }
        } else {
            TransportError::Other {
                url,
                reason: err.to_string(),
            }
        }
    }
}

/// Raw response as seen by the fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Something that can perform a plain GET request
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by reqwest with its default settings
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        debug!("Sending GET request to {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError::from_reqwest(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::from_reqwest(url, e))?;

        debug!("Received status {} ({} bytes)", status, body.len());
        Ok(HttpResponse { status, body })
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}
