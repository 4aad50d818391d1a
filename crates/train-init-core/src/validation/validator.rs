//! Credential validator

use super::client::{PlatformClient, PlatformError};
use super::outcome::{FailureKind, ValidationOutcome};
use crate::config::Credentials;
use tracing::{info, warn};

/// Classifies a platform check into a [`ValidationOutcome`]
pub struct CredentialValidator<C: PlatformClient> {
    client: C,
}

impl<C: PlatformClient> CredentialValidator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Run one check. Never fails and never retries.
    pub async fn validate(&self, credentials: &Credentials) -> ValidationOutcome {
        let region = &credentials.cos.region;
        match self.client.check_credentials(credentials).await {
            Ok(listing) if listing.training_buckets.is_empty() => {
                info!("Credentials accepted in {} but no buckets exist", region);
                ValidationOutcome::failure(FailureKind::NoBucketsAvailable)
            }
            Ok(listing) => {
                info!(
                    "Credentials accepted in {}: {} training bucket(s), {} output bucket(s)",
                    region,
                    listing.training_buckets.len(),
                    listing.output_buckets.len()
                );
                ValidationOutcome::Success {
                    training_buckets: listing.training_buckets,
                    output_buckets: listing.output_buckets,
                }
            }
            Err(error) => {
                let kind = classify(&error);
                warn!("Credential check failed ({}): {}", kind, error);
                ValidationOutcome::failure(kind)
            }
        }
    }
}

/// Map a raw platform error onto the closed failure set
pub fn classify(error: &PlatformError) -> FailureKind {
    match error {
        PlatformError::Remote { code, .. } => FailureKind::from_code(code),
        PlatformError::Unreachable { .. } => FailureKind::UnknownEndpoint,
        PlatformError::Other(_) => FailureKind::UnknownError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{BucketListing, MockPlatformClient};

    fn validator_returning(
        result: Result<BucketListing, PlatformError>,
    ) -> CredentialValidator<MockPlatformClient> {
        let mut client = MockPlatformClient::new();
        client
            .expect_check_credentials()
            .times(1)
            .returning(move |_| result.clone());
        CredentialValidator::new(client)
    }

    #[tokio::test]
    async fn test_success_keeps_bucket_order() {
        let validator = validator_returning(Ok(BucketListing {
            training_buckets: vec!["b".into(), "a".into()],
            output_buckets: vec!["c".into()],
        }));

        let outcome = validator.validate(&Credentials::default()).await;
        assert_eq!(
            outcome,
            ValidationOutcome::Success {
                training_buckets: vec!["b".into(), "a".into()],
                output_buckets: vec!["c".into()],
            }
        );
    }

    #[tokio::test]
    async fn test_empty_listing_is_no_buckets() {
        let validator = validator_returning(Ok(BucketListing::default()));
        let outcome = validator.validate(&Credentials::default()).await;
        assert_eq!(outcome.failure_kind(), Some(FailureKind::NoBucketsAvailable));
    }

    #[tokio::test]
    async fn test_remote_codes_are_classified() {
        let cases = [
            ("InvalidAccessKeyId", FailureKind::InvalidAccessKeyId),
            ("SignatureDoesNotMatch", FailureKind::SignatureDoesNotMatch),
            ("UnknownEndpoint", FailureKind::UnknownEndpoint),
            ("AccessDenied", FailureKind::UnknownError),
            ("InternalError", FailureKind::UnknownError),
        ];
        for (code, expected) in cases {
            let validator = validator_returning(Err(PlatformError::remote(code, "")));
            let outcome = validator.validate(&Credentials::default()).await;
            assert_eq!(outcome.failure_kind(), Some(expected), "code {}", code);
        }
    }

    #[tokio::test]
    async fn test_unreachable_is_unknown_endpoint() {
        let validator = validator_returning(Err(PlatformError::Unreachable {
            endpoint: "s3.fake".into(),
            message: "ENOTFOUND".into(),
        }));
        let outcome = validator.validate(&Credentials::default()).await;
        assert_eq!(outcome.failure_kind(), Some(FailureKind::UnknownEndpoint));
    }

    #[test]
    fn test_other_errors_are_unknown() {
        assert_eq!(
            classify(&PlatformError::Other("timeout".into())),
            FailureKind::UnknownError
        );
    }
}
