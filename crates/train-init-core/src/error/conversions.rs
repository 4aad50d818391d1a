//! From trait implementations for InitError conversions

use super::types::InitError;

impl From<std::io::Error> for InitError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_yaml::Error> for InitError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization(error.to_string())
    }
}

impl From<serde_json::Error> for InitError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}

impl From<reqwest::Error> for InitError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        let url = error.url().map(|u| u.to_string());
        Self::Http {
            message: error.to_string(),
            url,
            status_code,
        }
    }
}

impl From<tokio::task::JoinError> for InitError {
    fn from(error: tokio::task::JoinError) -> Self {
        if error.is_cancelled() {
            Self::Cancelled
        } else {
            Self::other(format!("background task failed: {}", error))
        }
    }
}
