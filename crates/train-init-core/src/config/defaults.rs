//! Default values and reserved literals
//!
//! These literals are written into user config files and matched by existing
//! tooling, so they must not change.

/// Project name used when neither a name nor a training bucket was chosen
pub const DEFAULT_PROJECT_NAME: &str = "untitled-project";

/// Object storage region used when the region answer is blank
pub const DEFAULT_REGION: &str = "us-geo";

/// GPU flavor used when the gpu answer is blank
pub const DEFAULT_GPU: &str = "k80";

/// Training step count used when the steps answer is blank
pub const DEFAULT_STEPS: &str = "500";

/// Destination file when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Region literal that makes the simulated platform fail with an unclassified error
pub const SIMULATE_ERROR_REGION: &str = "random-error";

/// Region literal that makes the simulated platform report an account without buckets
pub const SIMULATE_EMPTY_REGION: &str = "empty";

/// Access key or secret key literal rejected by the simulated platform
pub const SIMULATE_REJECTED_KEY: &str = "fake";

/// Object storage regions the platform serves
pub const KNOWN_REGIONS: &[&str] = &[
    "us-geo",
    "us-south",
    "us-east",
    "eu-geo",
    "eu-gb",
    "eu-de",
    "ap-geo",
    "jp-tok",
    "au-syd",
];

/// Whether `region` is served by the platform
pub fn is_known_region(region: &str) -> bool {
    KNOWN_REGIONS.contains(&region)
}

/// Return `value` unless it is blank, in which case return `default`
pub fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
