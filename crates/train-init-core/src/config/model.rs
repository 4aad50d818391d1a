//! Configuration data model

use super::defaults::{DEFAULT_GPU, DEFAULT_PROJECT_NAME, DEFAULT_REGION, DEFAULT_STEPS};
use serde::{Deserialize, Serialize};

/// Final configuration artifact
///
/// `Config::default()` is the config produced when every answer is left blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Human-readable project name
    pub name: String,
    /// Platform credentials
    pub credentials: Credentials,
    /// Storage locations for training data and results
    pub buckets: Buckets,
    /// GPU and step settings, empty when the section was skipped
    #[serde(rename = "trainingParams", default)]
    pub training_params: TrainingParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            credentials: Credentials::default(),
            buckets: Buckets::default(),
            training_params: TrainingParams::new(DEFAULT_GPU, DEFAULT_STEPS),
        }
    }
}

/// Credentials for both platform services
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub wml: WmlCredentials,
    pub cos: CosCredentials,
}

impl Credentials {
    /// Every credential field holds a value, the instance id included
    ///
    /// The wizard only contacts the platform when this holds.
    pub fn is_complete(&self) -> bool {
        self.wml.is_complete() && self.cos.has_keys()
    }
}

/// Training service account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WmlCredentials {
    pub instance_id: String,
    pub username: String,
    pub password: String,
    pub url: String,
}

impl WmlCredentials {
    pub fn is_complete(&self) -> bool {
        [&self.instance_id, &self.username, &self.password, &self.url]
            .iter()
            .all(|field| !field.is_empty())
    }
}

/// Object storage account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
}

impl CosCredentials {
    /// Both HMAC keys are present. The region always has a value.
    pub fn has_keys(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

impl Default for CosCredentials {
    fn default() -> Self {
        Self {
            access_key_id: String::new(),
            secret_access_key: String::new(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

/// Bucket selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buckets {
    /// Bucket holding training data, empty when none was selected
    pub training: String,
    /// Bucket receiving results, only present when the user opted in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// GPU flavor and step count
///
/// Either both values are set or neither is; the constructors are the only way to
/// build one so a half-populated group cannot exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    steps: Option<String>,
}

impl TrainingParams {
    /// Populated group
    pub fn new(gpu: impl Into<String>, steps: impl Into<String>) -> Self {
        Self {
            gpu: Some(gpu.into()),
            steps: Some(steps.into()),
        }
    }

    /// Empty group, serialized as `{}`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn gpu(&self) -> Option<&str> {
        self.gpu.as_deref()
    }

    pub fn steps(&self) -> Option<&str> {
        self.steps.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.gpu.is_none() && self.steps.is_none()
    }
}
