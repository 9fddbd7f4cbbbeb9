use std::path::PathBuf;

pub const EXPORT_DIR_ENV: &str = "CSVTOOL_EXPORT_DIR";
pub const NO_LOG_ENV: &str = "CSVTOOL_NO_LOG";

/// Session settings
///
/// Defaults are overridden by environment variables, which are in turn
/// overridden by command line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory where "export" without a path writes to
    pub export_dir: PathBuf,
    /// Print a message after each successful command
    pub print_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            print_logs: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = var(EXPORT_DIR_ENV).filter(|d| !d.is_empty()) {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(no_log) = var(NO_LOG_ENV) {
            config.print_logs = !matches!(no_log.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(Config::from_vars(|_| None), Config::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_vars(|key| match key {
            EXPORT_DIR_ENV => Some("/tmp/out".to_string()),
            NO_LOG_ENV => Some("TRUE".to_string()),
            _ => None,
        });
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert!(!config.print_logs);
    }
}
