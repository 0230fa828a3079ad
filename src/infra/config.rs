//! Application configuration: defaults merged with an optional TOML file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::infra::error::AppError;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub list: ListConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

/// Viewport dimensions supplied by the container. These are not layout
/// constants: row geometry inside a row is fixed, the viewport is not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            width: 360,
            height: 600,
        }
    }
}

/// File-side mirror of [`AppConfig`] where every field is optional, so a
/// partial config file overrides only what it names.
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    logging: Option<FileLogConfig>,
    list: Option<FileListConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct FileLogConfig {
    level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FileListConfig {
    width: Option<i32>,
    height: Option<i32>,
}

impl FileConfig {
    fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            if let Some(level) = logging.level {
                config.logging.level = level;
            }
        }

        if let Some(list) = self.list {
            if let Some(width) = list.width {
                config.list.width = width;
            }
            if let Some(height) = list.height {
                config.list.height = height;
            }
        }
    }
}

/// Loads config from `path` (default `./config.toml`), falling back to
/// defaults when the file does not exist.
pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.list.width, 360);
        assert_eq!(config.list.height, 600);
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir must be created");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[logging]
level = "debug"

[list]
width = 480
"#,
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.list.width, 480);
        // Unnamed fields keep their defaults.
        assert_eq!(config.list.height, 600);
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = tempfile::tempdir().expect("temp dir must be created");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[list\nwidth = ").expect("must write test config");

        let error = load(Some(&config_path)).expect_err("malformed config must fail");

        assert!(matches!(error, AppError::ConfigParse { .. }));
    }
}
