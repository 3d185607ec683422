use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::intake::{
    DelayWindow, ExtensionFilter, RandomPolicy, DEFAULT_EXTENSIONS, DEFAULT_MAX_DELAY,
    DEFAULT_MIN_DELAY, DEFAULT_SUCCESS_RATE,
};

const APP_DIR: &str = "GenomeLab";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config syntax: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Application settings, read from TOML.
///
/// ```toml
/// [intake]
/// accepted_extensions = [".fasta", ".fa", ".fas"]
/// min_delay_ms = 2000
/// max_delay_ms = 3000
/// success_rate = 0.9
///
/// [log]
/// filter = "info"
/// directory = "/tmp/genomelab"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub intake: IntakeConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntakeConfig {
    pub accepted_extensions: Vec<String>,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub success_rate: f64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            min_delay_ms: DEFAULT_MIN_DELAY.as_millis() as u64,
            max_delay_ms: DEFAULT_MAX_DELAY.as_millis() as u64,
            success_rate: DEFAULT_SUCCESS_RATE,
        }
    }
}

impl IntakeConfig {
    pub fn filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(self.accepted_extensions.iter().cloned())
    }

    pub fn window(&self) -> DelayWindow {
        DelayWindow {
            min: Duration::from_millis(self.min_delay_ms),
            max: Duration::from_millis(self.max_delay_ms),
        }
    }

    pub fn policy(&self) -> RandomPolicy {
        RandomPolicy::new(self.window(), self.success_rate)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_delay_ms >= self.max_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "intake.min_delay_ms ({}) must be below intake.max_delay_ms ({})",
                self.min_delay_ms, self.max_delay_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(ConfigError::Invalid(format!(
                "intake.success_rate must be within 0..=1, got {}",
                self.success_rate
            )));
        }
        if self.accepted_extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "intake.accepted_extensions is empty".into(),
            ));
        }
        if let Some(bad) = self
            .accepted_extensions
            .iter()
            .find(|ext| ext.len() < 2 || !ext.starts_with('.'))
        {
            return Err(ConfigError::Invalid(format!(
                "extension {bad:?} must start with '.'"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` wins when set.
    pub filter: String,
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: String::from("info"),
            directory: None,
        }
    }
}

impl LogConfig {
    /// Configured directory, else `<data dir>/GenomeLab`, else the cwd.
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present and defaults otherwise. Also returns the file that
    /// was read, `None` when running on defaults.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::load_with(explicit, default_path())
    }

    fn load_with(
        explicit: Option<&Path>,
        fallback: Option<PathBuf>,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let source = match explicit {
            Some(path) => Some(path.to_owned()),
            None => fallback.filter(|path| path.is_file()),
        };
        match source {
            Some(path) => Ok((Self::from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.intake.validate()
    }
}

/// `<config dir>/GenomeLab/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.intake.accepted_extensions, vec![".fasta", ".fa", ".fas"]);
        assert_eq!(config.intake.window(), DelayWindow::default());
        assert_eq!(config.intake.success_rate, 0.9);
        assert_eq!(config.log.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml_str(
            r#"
            [intake]
            success_rate = 0.5
            accepted_extensions = [".fasta"]
            "#,
        )
        .unwrap();
        assert_eq!(config.intake.success_rate, 0.5);
        assert_eq!(config.intake.min_delay_ms, 2000);
        assert!(config.intake.filter().accepts("x.fasta"));
        assert!(!config.intake.filter().accepts("x.fa"));
    }

    #[test]
    fn test_rejects_empty_window() {
        let err = AppConfig::from_toml_str("[intake]\nmin_delay_ms = 3000\nmax_delay_ms = 3000\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_rate() {
        let err = AppConfig::from_toml_str("[intake]\nsuccess_rate = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_extensions() {
        assert!(matches!(
            AppConfig::from_toml_str("[intake]\naccepted_extensions = []\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_toml_str("[intake]\naccepted_extensions = [\"fasta\"]\n"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = AppConfig::from_toml_str("[intake]\nretries = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[log]\nfilter = \"genomelab=debug\"\ndirectory = \"/var/tmp/gl\"\n",
        )
        .unwrap();

        let (config, source) = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(source.as_deref(), Some(path.as_path()));
        assert_eq!(config.log.filter, "genomelab=debug");
        assert_eq!(config.log.resolved_directory(), PathBuf::from("/var/tmp/gl"));
    }

    #[test]
    fn test_explicit_missing_file_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&tmp.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_missing_default_file_reports_no_source() {
        let tmp = tempfile::tempdir().unwrap();
        let absent = tmp.path().join("GenomeLab").join("config.toml");

        let (config, source) = AppConfig::load_with(None, Some(absent)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(source, None);

        let (_, source) = AppConfig::load_with(None, None).unwrap();
        assert_eq!(source, None);
    }

    #[test]
    fn test_present_default_file_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[intake]\nsuccess_rate = 0.25\n").unwrap();

        let (config, source) = AppConfig::load_with(None, Some(path.clone())).unwrap();
        assert_eq!(config.intake.success_rate, 0.25);
        assert_eq!(source, Some(path));
    }
}
