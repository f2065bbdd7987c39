//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the theme and the form opened by default.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::form::FormKind;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/forms-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub default_form: Option<FormKind>,
    pub show_log: bool,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub default_form: Option<FormKind>,
    #[serde(default)]
    pub show_log: bool,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            default_form: None,
            show_log: false,
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write one holding the
    /// current values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            let data: FileSpec =
                serde_yaml::from_str(&contents).map_err(|e| ConfigError::DeserializationFailed {
                    path: file_path.clone(),
                    message: e.to_string(),
                })?;
            self.theme_name = data.theme_name;
            self.default_form = data.default_form;
            self.show_log = data.show_log;
            debug!("Loaded configuration from {}", file_path.display());
        } else {
            info!("Writing default configuration to {}", file_path.display());
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            default_form: self.default_form,
            show_log: self.show_log,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("forms-tui-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let dir = temp_dir("defaults");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.default_form, None);
        assert!(!config.show_log);
        assert!(dir.join(FILE_NAME).exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_reads_existing_file() {
        let dir = temp_dir("existing");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "theme_name: rose-pine-dawn\ndefault_form: job\nshow_log: true\n",
        )
        .unwrap();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.theme_name, "rose-pine-dawn");
        assert_eq!(config.default_form, Some(FormKind::JobApplication));
        assert!(config.show_log);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let data: FileSpec = serde_yaml::from_str("show_log: true\n").unwrap();
        assert_eq!(
            data,
            FileSpec {
                theme_name: default_theme_name(),
                default_form: None,
                show_log: true,
            }
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = temp_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "default_form: [oops\n").unwrap();
        let mut config = Config::new();
        let err = config.load(dir.to_str()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::DeserializationFailed { .. })
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unknown_default_form_is_rejected() {
        let dir = temp_dir("unknown-form");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "default_form: survey\n").unwrap();
        let mut config = Config::new();
        match config.load(dir.to_str()) {
            Err(AppError::Config(ConfigError::DeserializationFailed { path, message })) => {
                assert_eq!(path, dir.join(FILE_NAME));
                assert!(message.contains("survey"));
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(config.default_form, None);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_without_path_fails() {
        let err = Config::new().save().unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::FilePathNotSet)));
    }
}
