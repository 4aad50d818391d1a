//! End-to-end wizard sessions
//!
//! Replays scripted answers through the public API, from the first question to the
//! YAML file on disk.

use tempfile::tempdir;
use train_init_core::config::{load_config, save_config};
use train_init_core::error::InitResult;
use train_init_core::validation::{FailureKind, SimulatedPlatformClient, ValidationOutcome};
use train_init_core::wizard::{Completion, QuestionSequencer, ScriptedLineReader, SequencerOptions};

async fn run(script: &[&str], options: SequencerOptions) -> InitResult<Completion> {
    let reader = ScriptedLineReader::new(script.iter().copied());
    QuestionSequencer::new(reader, SimulatedPlatformClient::default(), options)
        .run()
        .await
}

#[tokio::test]
async fn test_rejected_access_key_still_produces_config() -> InitResult<()> {
    let completion = run(
        &[
            "instance_id",
            "username",
            "password",
            "url",
            "fake",
            "secret_access_key",
            "",
            "",
            "",
            "",
            "",
        ],
        SequencerOptions::default(),
    )
    .await?;

    assert_eq!(
        completion.outcome,
        Some(ValidationOutcome::failure(FailureKind::InvalidAccessKeyId))
    );
    let config = completion.config;
    assert_eq!(config.credentials.cos.access_key_id, "fake");
    assert_eq!(config.credentials.cos.region, "us-geo");
    assert_eq!(config.buckets.training, "");
    assert_eq!(config.name, "untitled-project");
    Ok(())
}

#[tokio::test]
async fn test_empty_account_falls_back_to_default_name() -> InitResult<()> {
    let completion = run(
        &[
            "instance_id",
            "username",
            "password",
            "url",
            "access_key_id",
            "secret_access_key",
            "empty",
            "",
            "",
            "",
            "",
        ],
        SequencerOptions::default(),
    )
    .await?;

    assert_eq!(
        completion.outcome.and_then(|o| o.failure_kind()),
        Some(FailureKind::NoBucketsAvailable)
    );
    assert_eq!(completion.config.buckets.training, "");
    assert_eq!(completion.config.name, "untitled-project");
    Ok(())
}

#[tokio::test]
async fn test_session_written_to_disk() -> InitResult<()> {
    let completion = run(
        &[
            "instance_id",
            "username",
            "password",
            "url",
            "access_key_id",
            "secret_access_key",
            "",
            "",
            "y",
            "",
            "v100",
            "6000",
            "",
            "",
        ],
        SequencerOptions::default(),
    )
    .await?;
    assert!(completion.should_save());

    let dir = tempdir()?;
    let path = dir.path().join(".tmp").join("config.yaml");
    save_config(&path, &completion.config)?;

    let loaded = load_config(&path)?;
    assert_eq!(loaded, completion.config);
    assert_eq!(loaded.name, "bucket");
    assert_eq!(loaded.buckets.output.as_deref(), Some("bucket"));
    assert_eq!(loaded.training_params.gpu(), Some("v100"));
    assert_eq!(loaded.training_params.steps(), Some("6000"));

    let yaml = std::fs::read_to_string(&path)?;
    assert!(yaml.contains("trainingParams:"));
    assert!(yaml.contains("secret_access_key: secret_access_key"));
    Ok(())
}

#[tokio::test]
async fn test_skipped_training_params_written_empty() -> InitResult<()> {
    let completion = run(
        &["", "", "", "", "", "", "", "n"],
        SequencerOptions {
            skip_training_params: true,
        },
    )
    .await?;

    assert!(!completion.should_save());
    assert!(completion.config.training_params.is_empty());
    assert_eq!(completion.config.name, "untitled-project");

    let yaml = serde_yaml::to_string(&completion.config).unwrap();
    assert!(yaml.contains("trainingParams: {}"));
    Ok(())
}
