//! Deterministic in-process platform
//!
//! Used when no platform gateway is configured and by tests. Reserved literals
//! trigger each failure path:
//!
//! | input                         | result                  |
//! |-------------------------------|-------------------------|
//! | region `random-error`         | unclassified error      |
//! | region `empty`                | listing without buckets |
//! | any other unknown region      | unreachable endpoint    |
//! | access key `fake`             | `InvalidAccessKeyId`    |
//! | secret key `fake`             | `SignatureDoesNotMatch` |

use super::client::{BucketListing, PlatformClient, PlatformError};
use crate::config::Credentials;
use crate::config::defaults::{
    SIMULATE_EMPTY_REGION, SIMULATE_ERROR_REGION, SIMULATE_REJECTED_KEY, is_known_region,
};
use async_trait::async_trait;
use tracing::debug;

/// Platform double with a fixed bucket inventory
#[derive(Debug, Clone)]
pub struct SimulatedPlatformClient {
    buckets: Vec<String>,
}

impl SimulatedPlatformClient {
    pub fn new(buckets: Vec<String>) -> Self {
        Self { buckets }
    }
}

impl Default for SimulatedPlatformClient {
    fn default() -> Self {
        Self::new(vec![
            "bucket".to_string(),
            "out-of-region".to_string(),
            "random-error".to_string(),
        ])
    }
}

#[async_trait]
impl PlatformClient for SimulatedPlatformClient {
    async fn check_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<BucketListing, PlatformError> {
        let cos = &credentials.cos;
        debug!("Simulated credential check in region {}", cos.region);

        match cos.region.as_str() {
            SIMULATE_ERROR_REGION => {
                return Err(PlatformError::remote(
                    "InternalError",
                    "We encountered an internal error. Please try again.",
                ));
            }
            SIMULATE_EMPTY_REGION => return Ok(BucketListing::default()),
            region if !is_known_region(region) => {
                return Err(PlatformError::Unreachable {
                    endpoint: format!("s3.{}.cloud-object-storage.appdomain.cloud", region),
                    message: "getaddrinfo ENOTFOUND".to_string(),
                });
            }
            _ => {}
        }

        if cos.access_key_id == SIMULATE_REJECTED_KEY {
            return Err(PlatformError::remote(
                "InvalidAccessKeyId",
                "The AWS Access Key Id you provided does not exist in our records.",
            ));
        }
        if cos.secret_access_key == SIMULATE_REJECTED_KEY {
            return Err(PlatformError::remote(
                "SignatureDoesNotMatch",
                "The request signature we calculated does not match the signature you provided.",
            ));
        }

        Ok(BucketListing::shared(self.buckets.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CosCredentials, WmlCredentials};

    fn credentials(access: &str, secret: &str, region: &str) -> Credentials {
        Credentials {
            wml: WmlCredentials::default(),
            cos: CosCredentials {
                access_key_id: access.into(),
                secret_access_key: secret.into(),
                region: region.into(),
            },
        }
    }

    #[tokio::test]
    async fn test_valid_credentials_list_buckets() {
        let client = SimulatedPlatformClient::default();
        let listing = client
            .check_credentials(&credentials("key", "secret", "us-geo"))
            .await
            .unwrap();
        assert_eq!(listing.training_buckets[0], "bucket");
        assert_eq!(listing.training_buckets, listing.output_buckets);
    }

    #[tokio::test]
    async fn test_rejected_keys() {
        let client = SimulatedPlatformClient::default();
        let err = client
            .check_credentials(&credentials("fake", "secret", "us-geo"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlatformError::Remote { ref code, .. } if code == "InvalidAccessKeyId"));

        let err = client
            .check_credentials(&credentials("key", "fake", "us-geo"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, PlatformError::Remote { ref code, .. } if code == "SignatureDoesNotMatch")
        );
    }

    #[tokio::test]
    async fn test_region_sentinels() {
        let client = SimulatedPlatformClient::default();

        let listing = client
            .check_credentials(&credentials("key", "secret", "empty"))
            .await
            .unwrap();
        assert!(listing.training_buckets.is_empty());

        let err = client
            .check_credentials(&credentials("key", "secret", "fake"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlatformError::Unreachable { .. }));

        let err = client
            .check_credentials(&credentials("key", "secret", "random-error"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlatformError::Remote { ref code, .. } if code == "InternalError"));
    }
}
