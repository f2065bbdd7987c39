//! Errors raised while reading or writing `config.yml`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before `load` picked a file
    #[error("No config file chosen yet; load the configuration before saving it")]
    FilePathNotSet,

    #[error("Cannot locate the home directory to place config.yml in")]
    HomeDirectoryNotFound,

    #[error("Cannot read {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create config directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot encode settings as YAML: {0}")]
    SerializationFailed(String),

    /// Malformed YAML, or a `default_form` other than `event` or `job`
    #[error("Invalid settings in {path}: {message}")]
    DeserializationFailed { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormKind;

    #[test]
    fn test_unknown_default_form_names_the_file() {
        let message = serde_yaml::from_str::<Option<FormKind>>("survey")
            .unwrap_err()
            .to_string();
        let error = ConfigError::DeserializationFailed {
            path: PathBuf::from("/home/ada/.config/forms-tui/config.yml"),
            message,
        };
        let text = error.to_string();
        assert!(text.starts_with("Invalid settings in /home/ada/.config/forms-tui/config.yml"));
        assert!(text.contains("survey"));
    }

    #[test]
    fn test_save_before_load_hints_at_fix() {
        let text = ConfigError::FilePathNotSet.to_string();
        assert!(text.contains("load the configuration"));
    }

    #[test]
    fn test_io_failures_carry_path_and_cause() {
        let error = ConfigError::LoadFailed {
            path: PathBuf::from("/etc/forms-tui/config.yml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            error.to_string(),
            "Cannot read /etc/forms-tui/config.yml: denied"
        );
    }
}
