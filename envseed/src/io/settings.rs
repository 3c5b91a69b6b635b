//! Optional settings stored in `envseed.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_PATH: &str = "envseed.toml";
pub const DEFAULT_TARGET: &str = ".env";

/// envseed settings (TOML).
///
/// Every field is optional. Values given here are the lowest-priority source:
/// command-line flags and `ENVSEED_*` variables override them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// File to write, relative to the working directory.
    pub target: PathBuf,

    pub api_key: Option<String>,

    pub database_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            api_key: None,
            database_url: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.target.as_os_str().is_empty() {
            return Err(anyhow!("target must not be empty"));
        }
        Ok(())
    }
}

/// Load settings from a TOML file.
///
/// If the file is missing, returns `Settings::default()`.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let settings: Settings =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let settings = load_settings(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.target, PathBuf::from(".env"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("envseed.toml");
        fs::write(&path, "api_key = \"from-file\"\n").expect("write");

        let settings = load_settings(&path).expect("load");
        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.database_url, None);
        assert_eq!(settings.target, PathBuf::from(DEFAULT_TARGET));
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("envseed.toml");
        fs::write(&path, "target = [").expect("write");

        let err = load_settings(&path).unwrap_err();
        assert!(err.to_string().contains("envseed.toml"));
    }

    #[test]
    fn empty_target_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("envseed.toml");
        fs::write(&path, "target = \"\"\n").expect("write");

        let err = load_settings(&path).unwrap_err();
        assert!(format!("{err:#}").contains("target must not be empty"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("envseed.toml");
        fs::write(&path, "api_kye = \"typo\"\n").expect("write");

        assert!(load_settings(&path).is_err());
    }
}
