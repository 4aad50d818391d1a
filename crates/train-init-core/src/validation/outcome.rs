//! Validation outcome types

use serde::{Deserialize, Serialize};

/// Classified reason a credential check did not produce usable buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// The access key does not exist
    InvalidAccessKeyId,
    /// The secret key does not belong to the access key
    SignatureDoesNotMatch,
    /// The region or endpoint is not recognized or not reachable
    UnknownEndpoint,
    /// The region is reachable but the account owns no buckets
    NoBucketsAvailable,
    /// Any other remote failure
    UnknownError,
}

impl FailureKind {
    /// Map a remote error code onto a kind. Unrecognized codes become `UnknownError`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "InvalidAccessKeyId" => FailureKind::InvalidAccessKeyId,
            "SignatureDoesNotMatch" => FailureKind::SignatureDoesNotMatch,
            "UnknownEndpoint" => FailureKind::UnknownEndpoint,
            "NoBucketsAvailable" => FailureKind::NoBucketsAvailable,
            _ => FailureKind::UnknownError,
        }
    }

    /// Stable identifier, identical to the remote code
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::InvalidAccessKeyId => "InvalidAccessKeyId",
            FailureKind::SignatureDoesNotMatch => "SignatureDoesNotMatch",
            FailureKind::UnknownEndpoint => "UnknownEndpoint",
            FailureKind::NoBucketsAvailable => "NoBucketsAvailable",
            FailureKind::UnknownError => "UnknownError",
        }
    }

    /// Message shown to the user after the check
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureKind::InvalidAccessKeyId => {
                "The access key id does not exist. Check your object storage credentials."
            }
            FailureKind::SignatureDoesNotMatch => {
                "The secret access key does not match the access key id."
            }
            FailureKind::UnknownEndpoint => "The region could not be reached.",
            FailureKind::NoBucketsAvailable => {
                "No buckets were found. Create a bucket and run setup again."
            }
            FailureKind::UnknownError => "The credentials could not be verified.",
        }
    }

    /// All kinds, in declaration order
    pub fn all() -> &'static [FailureKind] {
        &[
            FailureKind::InvalidAccessKeyId,
            FailureKind::SignatureDoesNotMatch,
            FailureKind::UnknownEndpoint,
            FailureKind::NoBucketsAvailable,
            FailureKind::UnknownError,
        ]
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Result of one validation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Success {
        training_buckets: Vec<String>,
        output_buckets: Vec<String>,
    },
    Failure {
        kind: FailureKind,
    },
}

impl ValidationOutcome {
    pub fn failure(kind: FailureKind) -> Self {
        ValidationOutcome::Failure { kind }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ValidationOutcome::Failure { kind } => Some(*kind),
            ValidationOutcome::Success { .. } => None,
        }
    }

    /// Training buckets offered for selection; empty on failure
    pub fn training_buckets(&self) -> &[String] {
        match self {
            ValidationOutcome::Success {
                training_buckets, ..
            } => training_buckets,
            ValidationOutcome::Failure { .. } => &[],
        }
    }

    /// Output buckets offered for selection; empty on failure
    pub fn output_buckets(&self) -> &[String] {
        match self {
            ValidationOutcome::Success { output_buckets, .. } => output_buckets,
            ValidationOutcome::Failure { .. } => &[],
        }
    }
}
