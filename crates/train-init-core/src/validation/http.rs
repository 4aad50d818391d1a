//! Platform client backed by a credential-check gateway
//!
//! The gateway accepts `POST {base}/v1/credentials/check` with the credentials as JSON.
//! A 2xx response carries a [`BucketListing`]; any other status carries
//! `{"code": ..., "message": ...}`.

use super::client::{BucketListing, PlatformClient, PlatformError};
use crate::config::Credentials;
use crate::error::{InitError, InitResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

const CHECK_PATH: &str = "/v1/credentials/check";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    #[serde(default)]
    message: String,
}

/// Talks to the platform over HTTP
#[derive(Debug, Clone)]
pub struct HttpPlatformClient {
    client: Client,
    check_url: String,
}

impl HttpPlatformClient {
    /// Create a client for the gateway rooted at `base_url`
    pub fn new(base_url: &str) -> InitResult<Self> {
        let base = base_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(InitError::config(format!(
                "Platform URL must start with http:// or https://: {}",
                base_url
            )));
        }
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            check_url: format!("{}{}", base, CHECK_PATH),
        })
    }

    pub fn check_url(&self) -> &str {
        &self.check_url
    }
}

/// Turn a gateway response into a listing or a raw platform error
pub(crate) fn interpret_response(
    status: StatusCode,
    body: &str,
) -> Result<BucketListing, PlatformError> {
    if status.is_success() {
        return serde_json::from_str::<BucketListing>(body)
            .map_err(|e| PlatformError::Other(format!("malformed bucket listing: {}", e)));
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => Err(PlatformError::Remote {
            code: error.code,
            message: error.message,
        }),
        Err(_) => Err(PlatformError::Other(format!(
            "gateway returned {} without an error code",
            status
        ))),
    }
}

#[async_trait]
impl PlatformClient for HttpPlatformClient {
    async fn check_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<BucketListing, PlatformError> {
        debug!("POST {}", self.check_url);
        let response = self
            .client
            .post(&self.check_url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PlatformError::Unreachable {
                        endpoint: self.check_url.clone(),
                        message: e.to_string(),
                    }
                } else {
                    warn!("Credential check transport failure: {}", e);
                    PlatformError::Other(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PlatformError::Other(e.to_string()))?;
        interpret_response(status, &body)
    }
}
