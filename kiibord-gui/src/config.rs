use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::filter;

use kiibord_auth::FlowConfig;

use crate::dir::KiibordDirectory;

pub const DEFAULT_FILE_NAME: &str = "kiibord.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "error", "warn", "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Minimum duration in milliseconds of the code redeploy cooldown.
    pub resend_delay_ms: Option<u64>,
    /// Only code accepted by the debug verifier. Any well-formed code is accepted if unset.
    pub debug_accepted_code: Option<String>,
}

impl Config {
    pub fn path(datadir: &KiibordDirectory) -> PathBuf {
        datadir.path().join(DEFAULT_FILE_NAME)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_slice::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        config.log_level()?;
        Ok(config)
    }

    /// Configuration file of the data directory, defaults if there is none.
    pub fn load(datadir: &KiibordDirectory) -> Result<Self, ConfigError> {
        match Self::from_file(&Self::path(datadir)) {
            Err(ConfigError::NotFound) => Ok(Self::default()),
            res => res,
        }
    }

    pub fn log_level(&self) -> Result<Option<filter::LevelFilter>, ConfigError> {
        match self.log_level.as_deref() {
            None => Ok(None),
            Some("error") => Ok(Some(filter::LevelFilter::ERROR)),
            Some("warn") => Ok(Some(filter::LevelFilter::WARN)),
            Some("info") => Ok(Some(filter::LevelFilter::INFO)),
            Some("debug") => Ok(Some(filter::LevelFilter::DEBUG)),
            Some("trace") => Ok(Some(filter::LevelFilter::TRACE)),
            Some(level) => Err(ConfigError::InvalidField(
                "log_level",
                format!("Unknown value '{}'", level),
            )),
        }
    }

    pub fn flow_config(&self) -> FlowConfig {
        let mut flow = FlowConfig::default();
        if let Some(ms) = self.resend_delay_ms {
            flow.resend_delay = Duration::from_millis(ms);
        }
        flow
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
    #[error("Invalid field {0}: {1}")]
    InvalidField(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiibord_auth::config::DEFAULT_RESEND_DELAY;

    fn datadir_with(content: Option<&str>) -> (tempfile::TempDir, KiibordDirectory) {
        let tmp = tempfile::tempdir().unwrap();
        let datadir = KiibordDirectory::new(tmp.path().to_path_buf());
        if let Some(content) = content {
            std::fs::write(Config::path(&datadir), content).unwrap();
        }
        (tmp, datadir)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let (_tmp, datadir) = datadir_with(None);
        assert_eq!(
            Config::from_file(&Config::path(&datadir)),
            Err(ConfigError::NotFound)
        );
        let config = Config::load(&datadir).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level().unwrap(), None);
        assert_eq!(config.flow_config().resend_delay, DEFAULT_RESEND_DELAY);
    }

    #[test]
    fn parse_full_config() {
        let (_tmp, datadir) = datadir_with(Some(
            r#"
            log_level = "debug"
            resend_delay_ms = 500
            debug_accepted_code = "123456"
            "#,
        ));
        let config = Config::load(&datadir).unwrap();
        assert_eq!(config.log_level().unwrap(), Some(filter::LevelFilter::DEBUG));
        assert_eq!(
            config.flow_config().resend_delay,
            Duration::from_millis(500)
        );
        assert_eq!(config.debug_accepted_code.as_deref(), Some("123456"));
    }

    #[test]
    fn reject_unknown_log_level() {
        let (_tmp, datadir) = datadir_with(Some("log_level = \"loud\""));
        assert!(matches!(
            Config::load(&datadir),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }

    #[test]
    fn reject_malformed_file() {
        let (_tmp, datadir) = datadir_with(Some("resend_delay_ms = \"soon\""));
        assert!(matches!(
            Config::load(&datadir),
            Err(ConfigError::ReadingFile(_))
        ));
    }
}
