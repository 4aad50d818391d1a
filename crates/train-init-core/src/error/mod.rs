//! Error types for train-init
//!
//! Internal failures (terminal I/O, serialization, transport) are reported through
//! [`InitError`]. Remote credential problems are *not* errors: they are classified into
//! [`crate::validation::FailureKind`] and resolved by the wizard.

mod constructors;
mod conversions;
mod types;

pub use types::{InitError, InitResult};
