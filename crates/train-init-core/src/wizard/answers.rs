//! Answer snapshots

use crate::config::defaults::{DEFAULT_REGION, or_default};
use crate::config::{CosCredentials, Credentials, WmlCredentials};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every question the wizard can ask, in asking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKey {
    InstanceId,
    Username,
    Password,
    Url,
    AccessKeyId,
    SecretAccessKey,
    Region,
    TrainingBucket,
    UseOutput,
    OutputBucket,
    Gpu,
    Steps,
    Name,
    Save,
}

impl AnswerKey {
    /// All keys in asking order
    pub fn all() -> &'static [AnswerKey] {
        &[
            AnswerKey::InstanceId,
            AnswerKey::Username,
            AnswerKey::Password,
            AnswerKey::Url,
            AnswerKey::AccessKeyId,
            AnswerKey::SecretAccessKey,
            AnswerKey::Region,
            AnswerKey::TrainingBucket,
            AnswerKey::UseOutput,
            AnswerKey::OutputBucket,
            AnswerKey::Gpu,
            AnswerKey::Steps,
            AnswerKey::Name,
            AnswerKey::Save,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::InstanceId => "instance_id",
            AnswerKey::Username => "username",
            AnswerKey::Password => "password",
            AnswerKey::Url => "url",
            AnswerKey::AccessKeyId => "access_key_id",
            AnswerKey::SecretAccessKey => "secret_access_key",
            AnswerKey::Region => "region",
            AnswerKey::TrainingBucket => "training_bucket",
            AnswerKey::UseOutput => "use_output",
            AnswerKey::OutputBucket => "output_bucket",
            AnswerKey::Gpu => "gpu",
            AnswerKey::Steps => "steps",
            AnswerKey::Name => "name",
            AnswerKey::Save => "save",
        }
    }

    /// Values that must not show up in logs or summaries
    pub fn is_secret(&self) -> bool {
        matches!(self, AnswerKey::Password | AnswerKey::SecretAccessKey)
    }
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Interpret a yes/no answer. Anything unrecognized is `None`.
pub fn parse_confirm(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}

/// Immutable set of answers collected so far
///
/// Recording an answer returns a new snapshot, so every step of a session can be
/// replayed from the snapshot it started with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: BTreeMap<AnswerKey, String>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with `key` set to `value`
    #[must_use]
    pub fn with(&self, key: AnswerKey, value: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.insert(key, value.into());
        Self { values }
    }

    /// Whether the question was asked and answered (possibly with an empty string)
    pub fn contains(&self, key: AnswerKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn get(&self, key: AnswerKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Answer for `key`, empty when it was never given
    pub fn value(&self, key: AnswerKey) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Answer for `key` is present and not blank
    pub fn is_filled(&self, key: AnswerKey) -> bool {
        !self.value(key).trim().is_empty()
    }

    /// Answer for `key` is an affirmative yes/no
    pub fn is_yes(&self, key: AnswerKey) -> bool {
        parse_confirm(self.value(key)) == Some(true)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Answers in asking order
    pub fn iter(&self) -> impl Iterator<Item = (AnswerKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Credentials as entered, with the region default applied
    pub fn credentials(&self) -> Credentials {
        Credentials {
            wml: WmlCredentials {
                instance_id: self.value(AnswerKey::InstanceId).to_string(),
                username: self.value(AnswerKey::Username).to_string(),
                password: self.value(AnswerKey::Password).to_string(),
                url: self.value(AnswerKey::Url).to_string(),
            },
            cos: CosCredentials {
                access_key_id: self.value(AnswerKey::AccessKeyId).to_string(),
                secret_access_key: self.value(AnswerKey::SecretAccessKey).to_string(),
                region: or_default(self.value(AnswerKey::Region), DEFAULT_REGION),
            },
        }
    }
}

impl<S: Into<String>> FromIterator<(AnswerKey, S)> for Answers {
    fn from_iter<I: IntoIterator<Item = (AnswerKey, S)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_leaves_original_untouched() {
        let first = Answers::new().with(AnswerKey::Username, "alice");
        let second = first.with(AnswerKey::Password, "hunter2");

        assert_eq!(first.len(), 1);
        assert!(!first.contains(AnswerKey::Password));
        assert_eq!(second.value(AnswerKey::Username), "alice");
        assert_eq!(second.value(AnswerKey::Password), "hunter2");
    }

    #[test]
    fn test_iter_follows_question_order() {
        let answers: Answers = [
            (AnswerKey::Save, "yes"),
            (AnswerKey::InstanceId, "id"),
            (AnswerKey::Region, ""),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = answers.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![AnswerKey::InstanceId, AnswerKey::Region, AnswerKey::Save]
        );
    }

    #[test]
    fn test_empty_answer_is_contained_but_not_filled() {
        let answers = Answers::new().with(AnswerKey::Url, "");
        assert!(answers.contains(AnswerKey::Url));
        assert!(!answers.is_filled(AnswerKey::Url));
    }

    #[test]
    fn test_credentials_default_region() {
        let answers = Answers::new().with(AnswerKey::Region, "  ");
        assert_eq!(answers.credentials().cos.region, "us-geo");

        let answers = Answers::new().with(AnswerKey::Region, "eu-de");
        assert_eq!(answers.credentials().cos.region, "eu-de");
    }

    #[test]
    fn test_parse_confirm() {
        assert_eq!(parse_confirm("Yes"), Some(true));
        assert_eq!(parse_confirm(" y "), Some(true));
        assert_eq!(parse_confirm("NO"), Some(false));
        assert_eq!(parse_confirm(""), None);
        assert_eq!(parse_confirm("maybe"), None);
    }

    #[test]
    fn test_key_names_match_serde() {
        for key in AnswerKey::all() {
            let json = serde_json::to_value(key).unwrap();
            assert_eq!(json, serde_json::json!(key.as_str()));
        }
    }
}
