//! Site configuration module.
//!
//! Handles loading and validating an optional `glossary.toml`. Every key has a
//! stock default, and the defaults reproduce the classic page layout, so most
//! glossaries need no config file at all.
//!
//! ## Config File Location
//!
//! Pass `--config <FILE>` explicitly, or place `glossary.toml` next to the
//! glossary source:
//!
//! ```text
//! terms/
//! ├── glossary.toml     # Optional page labels
//! └── terms.txt         # Glossary source
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [index]
//! title = "Glossary"          # <title> of index.html
//! heading = "Glossary Index"  # <h1> of index.html
//!
//! [term_page]
//! return_label = "Index"      # Text of the back-link to index.html
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up next to the glossary source when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "glossary.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `glossary.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Labels for the index page.
    pub index: IndexConfig,
    /// Labels for term pages.
    pub term_page: TermPageConfig,
}

impl SiteConfig {
    /// Validate that no label is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let labels = [
            ("index.title", &self.index.title),
            ("index.heading", &self.index.heading),
            ("term_page.return_label", &self.term_page.return_label),
        ];
        for (key, value) in labels {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    pub title: String,
    pub heading: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            title: "Glossary".to_string(),
            heading: "Glossary Index".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TermPageConfig {
    pub return_label: String,
}

impl Default for TermPageConfig {
    fn default() -> Self {
        Self {
            return_label: "Index".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

fn read_config_text(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = read_config_text(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit file path.
///
/// A missing file is an error here: the user asked for it by name.
pub fn load_config_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = read_config_text(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Load `glossary.toml` from the directory holding the glossary source.
///
/// Falls back to stock defaults when the file does not exist.
pub fn load_config_beside(input: &Path) -> Result<SiteConfig, ConfigError> {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    let overlay = load_raw_config(&dir.join(CONFIG_FILE_NAME))?;
    resolve_config(overlay)
}

/// Returns a fully-commented stock `glossary.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# glossgen Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to the glossary source as glossary.toml, or pass
# it explicitly with --config. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Index page (index.html)
# ---------------------------------------------------------------------------
[index]
# Document <title>.
title = "Glossary"

# Top-level <h1> heading above the term list.
heading = "Glossary Index"

# ---------------------------------------------------------------------------
# Term pages (<term>.html)
# ---------------------------------------------------------------------------
[term_page]
# Link text of the "Return to ..." link back to index.html.
return_label = "Index"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_classic_layout() {
        let config = SiteConfig::default();
        assert_eq!(config.index.title, "Glossary");
        assert_eq!(config.index.heading, "Glossary Index");
        assert_eq!(config.term_page.return_label, "Index");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[term_page]
return_label = "Home"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.term_page.return_label, "Home");
        // Defaults preserved
        assert_eq!(config.index.title, "Glossary");
        assert_eq!(config.index.heading, "Glossary Index");
    }

    #[test]
    fn load_config_beside_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config_beside(&tmp.path().join("terms.txt")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_beside_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
[index]
heading = "Terms of Art"
"#,
        )
        .unwrap();

        let config = load_config_beside(&tmp.path().join("terms.txt")).unwrap();
        assert_eq!(config.index.heading, "Terms of Art");
        assert_eq!(config.index.title, "Glossary");
    }

    #[test]
    fn load_config_file_missing_names_the_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom-glossary.toml");
        let err = load_config_file(&path).unwrap_err();
        match &err {
            ConfigError::Read { path: p, .. } => assert_eq!(p, &path),
            other => panic!("expected Read, got {other:?}"),
        }
        assert!(err.to_string().contains("custom-glossary.toml"));
    }

    #[test]
    fn load_raw_config_unreadable_names_the_path() {
        // A directory exists but cannot be read as text.
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(CONFIG_FILE_NAME);
        fs::create_dir(&dir).unwrap();
        let err = load_raw_config(&dir).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn color_key_is_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[term_page]\ncolor = \"blue\"");
        assert!(result.is_err());
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        let result = load_config_file(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Merge tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(1));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_preserves_sibling_keys() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[index]\ntitle = \"Words\"").unwrap();
        let merged = merge_toml(base, overlay);
        let index = merged.get("index").unwrap();
        assert_eq!(index.get("title").unwrap().as_str(), Some("Words"));
        assert_eq!(index.get("heading").unwrap().as_str(), Some("Glossary Index"));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[term_page]
return_lable = "Home"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml_str);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[theme]\nfont = \"serif\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "[index]\ntitel = \"x\"").unwrap();
        let result = load_config_beside(&tmp.path().join("terms.txt"));
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_empty_heading() {
        let mut config = SiteConfig::default();
        config.index.heading = "   ".into();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("index.heading"));
    }

    #[test]
    fn resolve_config_rejects_invalid_values() {
        let overlay: toml::Value = toml::from_str("[term_page]\nreturn_label = \"\"").unwrap();
        assert!(matches!(
            resolve_config(Some(overlay)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
