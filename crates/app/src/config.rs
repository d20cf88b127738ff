//! Launcher configuration: defaults, optional TOML file, then CLI overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use helix_core::model::RoundSettings;

/// File looked up in the working directory when no path is given.
pub const LOCAL_CONFIG_FILE: &str = "helix.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelixConfig {
    #[serde(default = "default_questions_per_round")]
    pub questions_per_round: u32,
    #[serde(default = "default_xp_per_correct")]
    pub xp_per_correct: u32,
    /// Probability of a bookwork check after a correct answer.
    #[serde(default = "default_bookwork_chance")]
    pub bookwork_chance: f64,
    /// Re-rolls allowed when a new question repeats the previous answer.
    #[serde(default = "default_duplicate_attempts")]
    pub duplicate_attempts: u32,
    /// Pause after a correct answer, in milliseconds.
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
    /// Catalog index of the highest topic unlocked at launch.
    #[serde(default)]
    pub unlocked: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_questions_per_round() -> u32 {
    RoundSettings::DEFAULT_QUESTIONS_PER_ROUND
}
fn default_xp_per_correct() -> u32 {
    RoundSettings::DEFAULT_XP_PER_CORRECT
}
fn default_bookwork_chance() -> f64 {
    RoundSettings::DEFAULT_BOOKWORK_CHANCE
}
fn default_duplicate_attempts() -> u32 {
    RoundSettings::DEFAULT_DUPLICATE_ATTEMPTS
}
fn default_advance_delay_ms() -> u64 {
    1000
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            questions_per_round: default_questions_per_round(),
            xp_per_correct: default_xp_per_correct(),
            bookwork_chance: default_bookwork_chance(),
            duplicate_attempts: default_duplicate_attempts(),
            advance_delay_ms: default_advance_delay_ms(),
            unlocked: 0,
            seed: None,
        }
    }
}

impl HelixConfig {
    /// # Errors
    ///
    /// Fails when the configured round is empty or the bookwork chance is not a probability.
    pub fn round_settings(&self) -> Result<RoundSettings> {
        RoundSettings::new(
            self.questions_per_round,
            self.xp_per_correct,
            self.bookwork_chance,
            self.duplicate_attempts,
        )
        .context("invalid round settings")
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}

/// Load config from an explicit path, or from `helix.toml` in the working
/// directory when present. Falls back to defaults.
///
/// # Errors
///
/// Fails when an explicit path is missing or a file cannot be read or parsed.
pub fn load_config_from(path: Option<&Path>) -> Result<HelixConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => Some(PathBuf::from(LOCAL_CONFIG_FILE)).filter(|local| local.exists()),
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<HelixConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(HelixConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(body.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults_match_round_settings() {
        let config = HelixConfig::default();
        let settings = config.round_settings().unwrap();
        assert_eq!(settings, RoundSettings::default());
        assert_eq!(config.advance_delay(), Duration::from_secs(1));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let file = write_config("questions_per_round = 8\nseed = 42\n");
        let config = load_config_from(Some(file.path())).unwrap();

        assert_eq!(config.questions_per_round, 8);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.xp_per_correct, 100);
        assert!((config.bookwork_chance - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"), "{err}");
    }

    #[test]
    fn malformed_file_reports_path() {
        let file = write_config("questions_per_round = \"many\"");
        let err = load_config_from(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"), "{err}");
    }

    #[test]
    fn out_of_range_chance_is_rejected() {
        let config = HelixConfig {
            bookwork_chance: 1.5,
            ..HelixConfig::default()
        };
        assert!(config.round_settings().is_err());
    }
}
