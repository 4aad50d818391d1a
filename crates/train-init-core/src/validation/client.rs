//! Remote platform seam

use crate::config::Credentials;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Buckets reachable with a set of credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketListing {
    #[serde(default)]
    pub training_buckets: Vec<String>,
    #[serde(default)]
    pub output_buckets: Vec<String>,
}

impl BucketListing {
    /// Same bucket names offered for training data and results
    pub fn shared(buckets: Vec<String>) -> Self {
        Self {
            training_buckets: buckets.clone(),
            output_buckets: buckets,
        }
    }
}

/// Raw failure reported by a platform client, before classification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The service answered with an error code
    #[error("{code}: {message}")]
    Remote { code: String, message: String },

    /// The endpoint for the region could not be reached
    #[error("endpoint {endpoint} unreachable: {message}")]
    Unreachable { endpoint: String, message: String },

    /// Anything else (malformed response, transport failure)
    #[error("{0}")]
    Other(String),
}

impl PlatformError {
    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        PlatformError::Remote {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Performs the remote credential check
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Check `credentials` (including the resolved region) and list reachable buckets
    async fn check_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<BucketListing, PlatformError>;
}
