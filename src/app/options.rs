use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::utils::error::{BoxResult, PressError};

/// Default site language
pub const DEFAULT_LANG: &str = "en-US";

/// Per-locale overrides, keyed by route prefix in `AppOptions::locales`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocaleOptions {
    pub lang: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Options for creating an application context
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppOptions {
    /// Directory containing the page source files
    pub source: PathBuf,

    /// Output directory (default: `<source>/.rustpress/dist`)
    pub dest: Option<PathBuf>,

    /// Directory for generated component and data files
    /// (default: `<source>/.rustpress/.temp`)
    pub temp: Option<PathBuf>,

    /// Cache directory (default: `<source>/.rustpress/.cache`)
    pub cache: Option<PathBuf>,

    /// Base route path the site is served under
    pub base: String,

    /// Site language
    pub lang: String,

    /// Site title
    pub title: String,

    /// Site description
    pub description: String,

    /// Locale overrides keyed by route prefix, e.g. "/" or "/zh/"
    pub locales: HashMap<String, LocaleOptions>,

    /// Permalink pattern with :year, :month, :day and :slug placeholders
    pub permalink_pattern: Option<String>,
}

impl Default for AppOptions {
    fn default() -> Self {
        AppOptions {
            source: PathBuf::from("."),
            dest: None,
            temp: None,
            cache: None,
            base: "/".to_string(),
            lang: DEFAULT_LANG.to_string(),
            title: String::new(),
            description: String::new(),
            locales: HashMap::new(),
            permalink_pattern: None,
        }
    }
}

impl AppOptions {
    /// Create options for the given source directory
    pub fn new<P: Into<PathBuf>>(source: P) -> Self {
        AppOptions {
            source: source.into(),
            ..AppOptions::default()
        }
    }

    /// Load options from a YAML or TOML config file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> BoxResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            PressError::Config(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let options: AppOptions = match ext.as_str() {
            "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| {
                PressError::Config(format!("Invalid YAML in {}: {}", path.display(), e))
            })?,
            "toml" => toml::from_str(&content).map_err(|e| {
                PressError::Config(format!("Invalid TOML in {}: {}", path.display(), e))
            })?,
            other => {
                return Err(PressError::Config(format!(
                    "Unsupported configuration file format: {}",
                    other
                ))
                .into());
            }
        };

        options.validate()?;
        Ok(options)
    }

    /// Validate option consistency
    pub fn validate(&self) -> BoxResult<()> {
        if self.source.as_os_str().is_empty() {
            return Err(PressError::Config("source directory must not be empty".into()).into());
        }

        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            return Err(PressError::Config(format!(
                "base must start and end with a slash, got '{}'",
                self.base
            ))
            .into());
        }

        if self.lang.is_empty() {
            return Err(PressError::Config("lang must not be empty".into()).into());
        }

        for prefix in self.locales.keys() {
            if !prefix.starts_with('/') || !prefix.ends_with('/') {
                return Err(PressError::Config(format!(
                    "locale prefix must start and end with a slash, got '{}'",
                    prefix
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AppOptions::new("docs");
        assert_eq!(options.lang, "en-US");
        assert_eq!(options.base, "/");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_base() {
        let mut options = AppOptions::new("docs");
        options.base = "site/".to_string();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_locale_prefix() {
        let mut options = AppOptions::new("docs");
        options.locales.insert("zh".to_string(), LocaleOptions::default());
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_from_yaml_config() {
        let dir = std::env::temp_dir().join("rustpress-options-test");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("config.yml");
        fs::write(
            &file,
            "source: docs\nlang: fr-FR\nlocales:\n  /fr/:\n    lang: fr-FR\n",
        )
        .unwrap();

        let options = AppOptions::from_config_file(&file).unwrap();
        assert_eq!(options.source, PathBuf::from("docs"));
        assert_eq!(options.lang, "fr-FR");
        assert!(options.locales.contains_key("/fr/"));

        fs::remove_file(&file).ok();
    }

    #[test]
    fn test_from_toml_config() {
        let dir = std::env::temp_dir().join("rustpress-options-test");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("config.toml");
        fs::write(
            &file,
            "source = \"docs\"\nlang = \"de-DE\"\n\n[locales.\"/de/\"]\nlang = \"de-DE\"\n",
        )
        .unwrap();

        let options = AppOptions::from_config_file(&file).unwrap();
        assert_eq!(options.source, PathBuf::from("docs"));
        assert_eq!(options.lang, "de-DE");
        assert!(options.locales.contains_key("/de/"));

        let bad = dir.join("bad.toml");
        fs::write(&bad, "source = [\n").unwrap();
        let err = AppOptions::from_config_file(&bad).unwrap_err();
        assert!(err.to_string().contains("Invalid TOML"));

        fs::remove_file(&file).ok();
        fs::remove_file(&bad).ok();
    }
}
