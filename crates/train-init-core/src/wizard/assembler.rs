//! Folding answers into the final [`Config`]

use super::answers::{AnswerKey, Answers};
use super::sequencer::SequencerOptions;
use crate::config::defaults::{DEFAULT_GPU, DEFAULT_PROJECT_NAME, DEFAULT_STEPS, or_default};
use crate::config::{Buckets, Config, TrainingParams};
use crate::validation::ValidationOutcome;

/// Build the configuration for a finished (or partial) answer set
///
/// Total and deterministic: any answers, including none at all, produce a valid
/// config, and the same inputs always produce the same config.
pub fn assemble(
    answers: &Answers,
    outcome: Option<&ValidationOutcome>,
    options: &SequencerOptions,
) -> Config {
    let buckets = assemble_buckets(answers, outcome);

    let name_default = if buckets.training.is_empty() {
        DEFAULT_PROJECT_NAME
    } else {
        buckets.training.as_str()
    };
    let name = or_default(answers.value(AnswerKey::Name), name_default);

    let training_params = if options.skip_training_params {
        TrainingParams::empty()
    } else {
        TrainingParams::new(
            or_default(answers.value(AnswerKey::Gpu), DEFAULT_GPU),
            or_default(answers.value(AnswerKey::Steps), DEFAULT_STEPS),
        )
    };

    Config {
        name,
        credentials: answers.credentials(),
        buckets,
        training_params,
    }
}

/// Buckets are only taken from a successful check, and only when they were offered
fn assemble_buckets(answers: &Answers, outcome: Option<&ValidationOutcome>) -> Buckets {
    let Some(outcome) = outcome.filter(|o| o.is_success()) else {
        return Buckets::default();
    };

    let offered = |list: &[String], key: AnswerKey| {
        let value = answers.value(key);
        list.iter().find(|bucket| bucket.as_str() == value).cloned()
    };

    let training = offered(outcome.training_buckets(), AnswerKey::TrainingBucket).unwrap_or_default();
    let output = if answers.is_yes(AnswerKey::UseOutput) {
        offered(outcome.output_buckets(), AnswerKey::OutputBucket)
    } else {
        None
    };

    Buckets { training, output }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CosCredentials, Credentials, WmlCredentials};
    use crate::validation::FailureKind;

    fn success() -> ValidationOutcome {
        ValidationOutcome::Success {
            training_buckets: vec!["bucket".into(), "data".into()],
            output_buckets: vec!["bucket".into(), "results".into()],
        }
    }

    fn credentials_answers() -> Answers {
        [
            (AnswerKey::InstanceId, "instance_id"),
            (AnswerKey::Username, "username"),
            (AnswerKey::Password, "password"),
            (AnswerKey::Url, "url"),
            (AnswerKey::AccessKeyId, "access_key_id"),
            (AnswerKey::SecretAccessKey, "secret_access_key"),
            (AnswerKey::Region, ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_all_blank_gives_documented_defaults() {
        let config = assemble(&Answers::new(), None, &SequencerOptions::default());
        let expected = Config {
            name: "untitled-project".into(),
            credentials: Credentials {
                wml: WmlCredentials::default(),
                cos: CosCredentials {
                    access_key_id: String::new(),
                    secret_access_key: String::new(),
                    region: "us-geo".into(),
                },
            },
            buckets: Buckets {
                training: String::new(),
                output: None,
            },
            training_params: TrainingParams::new("k80", "500"),
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_skip_mode_leaves_params_empty() {
        let answers = Answers::new()
            .with(AnswerKey::Gpu, "v100")
            .with(AnswerKey::Steps, "6000");
        let options = SequencerOptions {
            skip_training_params: true,
        };

        let config = assemble(&answers, None, &options);
        assert!(config.training_params.is_empty());
    }

    #[test]
    fn test_overrides_taken_verbatim() {
        let answers = Answers::new()
            .with(AnswerKey::Gpu, "v100")
            .with(AnswerKey::Steps, "6000")
            .with(AnswerKey::Name, "my-project");

        let config = assemble(&answers, None, &SequencerOptions::default());
        assert_eq!(config.training_params, TrainingParams::new("v100", "6000"));
        assert_eq!(config.name, "my-project");
    }

    #[test]
    fn test_name_defaults_to_training_bucket() {
        let answers = credentials_answers()
            .with(AnswerKey::TrainingBucket, "data")
            .with(AnswerKey::UseOutput, "no");

        let config = assemble(&answers, Some(&success()), &SequencerOptions::default());
        assert_eq!(config.buckets.training, "data");
        assert_eq!(config.name, "data");
        assert!(config.buckets.output.is_none());
    }

    #[test]
    fn test_output_bucket_only_when_opted_in() {
        let answers = credentials_answers()
            .with(AnswerKey::TrainingBucket, "bucket")
            .with(AnswerKey::UseOutput, "yes")
            .with(AnswerKey::OutputBucket, "results");

        let config = assemble(&answers, Some(&success()), &SequencerOptions::default());
        assert_eq!(config.buckets.output.as_deref(), Some("results"));

        let answers = answers.with(AnswerKey::UseOutput, "no");
        let config = assemble(&answers, Some(&success()), &SequencerOptions::default());
        assert!(config.buckets.output.is_none());
        let json = serde_json::to_value(&config).unwrap();
        assert!(json["buckets"].get("output").is_none());
    }

    #[test]
    fn test_unoffered_bucket_ignored() {
        let answers = credentials_answers().with(AnswerKey::TrainingBucket, "\x1B[B");
        let config = assemble(&answers, Some(&success()), &SequencerOptions::default());
        assert_eq!(config.buckets.training, "");
        assert_eq!(config.name, "untitled-project");
    }

    #[test]
    fn test_failures_keep_credentials_and_drop_buckets() {
        let answers = credentials_answers()
            .with(AnswerKey::TrainingBucket, "bucket")
            .with(AnswerKey::UseOutput, "yes")
            .with(AnswerKey::OutputBucket, "bucket");

        for kind in FailureKind::all() {
            let outcome = ValidationOutcome::failure(*kind);
            let config = assemble(&answers, Some(&outcome), &SequencerOptions::default());
            assert_eq!(config.credentials, answers.credentials(), "{}", kind);
            assert_eq!(config.buckets.training, "", "{}", kind);
            assert!(config.buckets.output.is_none(), "{}", kind);
            assert_eq!(config.name, "untitled-project", "{}", kind);
        }
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let answers = credentials_answers()
            .with(AnswerKey::TrainingBucket, "data")
            .with(AnswerKey::UseOutput, "yes")
            .with(AnswerKey::OutputBucket, "results");
        let outcome = success();
        let options = SequencerOptions::default();

        let first = assemble(&answers, Some(&outcome), &options);
        let second = assemble(&answers, Some(&outcome), &options);
        assert_eq!(first, second);
        assert_eq!(
            serde_yaml::to_string(&first).unwrap(),
            serde_yaml::to_string(&second).unwrap()
        );
    }
}
