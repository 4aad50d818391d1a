//! Live credential validation
//!
//! The [`CredentialValidator`] asks a [`PlatformClient`] whether a set of credentials
//! works and turns the answer into exactly one [`ValidationOutcome`]. Remote failures are
//! never propagated as errors; they are classified into the closed [`FailureKind`] set.

mod client;
mod http;
mod outcome;
mod simulated;
mod validator;

pub use client::{BucketListing, PlatformClient, PlatformError};
pub use http::HttpPlatformClient;
pub use outcome::{FailureKind, ValidationOutcome};
pub use simulated::SimulatedPlatformClient;
pub use validator::{CredentialValidator, classify};

#[cfg(test)]
pub use client::MockPlatformClient;
