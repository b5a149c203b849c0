use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, TagFormatError};

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "tagformat.toml";

/// Represents the complete configuration for tag-format.
///
/// Holds the global candidate formats and optional per-package overrides.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_tag_formats")]
    pub tag_formats: Vec<String>,

    #[serde(default)]
    pub packages: BTreeMap<String, PackageConfig>,
}

/// Per-package settings.
///
/// An empty `tag_formats` list falls back to the global formats.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PackageConfig {
    #[serde(default)]
    pub repo: Option<String>,

    #[serde(default)]
    pub tag_formats: Vec<String>,
}

/// Returns the default candidate formats.
fn default_tag_formats() -> Vec<String> {
    vec![
        "v{major}.{minor}.{patch}".to_string(),
        "{major}.{minor}.{patch}".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag_formats: default_tag_formats(),
            packages: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Candidate formats for a package, or the global ones when no package is given.
    ///
    /// # Errors
    /// Returns a configuration error if the package is not configured.
    pub fn formats_for(&self, package: Option<&str>) -> Result<&[String]> {
        let Some(name) = package else {
            return Ok(&self.tag_formats);
        };
        let package = self.packages.get(name).ok_or_else(|| {
            TagFormatError::config(format!("Package '{}' is not configured", name))
        })?;
        if package.tag_formats.is_empty() {
            Ok(&self.tag_formats)
        } else {
            Ok(&package.tag_formats)
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagformat.toml` in current directory
/// 3. `.tagformat.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        Path::new(CONFIG_FILE_NAME).to_path_buf()
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if !path.exists() {
            tracing::debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
        path
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    parse_config(&config_str)
        .map_err(|e| TagFormatError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| TagFormatError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_formats() {
        let config = Config::default();
        assert_eq!(
            config.tag_formats,
            vec!["v{major}.{minor}.{patch}", "{major}.{minor}.{patch}"]
        );
        assert!(config.packages.is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_package_overrides() {
        let config = parse_config(
            r#"
tag_formats = ["v{major}.{minor}.{patch}"]

[packages.terraform]
repo = "https://github.com/hashicorp/terraform"
tag_formats = ["v{major}.{minor}.{patch}", "release-{YYYY}-{MM}-{DD}"]

[packages.requests]
repo = "https://github.com/psf/requests"
"#,
        )
        .unwrap();

        assert_eq!(config.formats_for(None).unwrap().len(), 1);
        assert_eq!(config.formats_for(Some("terraform")).unwrap().len(), 2);
        // no formats of its own: falls back to the global list
        assert_eq!(
            config.formats_for(Some("requests")).unwrap(),
            config.tag_formats.as_slice()
        );
        assert_eq!(
            config.packages["requests"].repo.as_deref(),
            Some("https://github.com/psf/requests")
        );
    }

    #[test]
    fn test_unknown_package_is_config_error() {
        let err = Config::default().formats_for(Some("missing")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Package 'missing' is not configured"
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse_config("tag_formats = 3").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
