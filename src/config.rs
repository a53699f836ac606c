//! User configuration.
//!
//! Read once at startup from `<config dir>/deskcalc/config.toml`. A
//! missing file means defaults; a malformed one is an error worth
//! stopping on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::calculator::MAX_DISPLAY_DIGITS;

/// Narrowest result line that still fits a sign, a digit, a point, and
/// one fractional digit.
const MIN_DISPLAY_DIGITS: usize = 4;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Width budget for the result line.
    pub max_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_digits: MAX_DISPLAY_DIGITS,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardConfig {
    /// Copy every committed result to the clipboard.
    pub copy_on_equals: bool,
}

impl Config {
    /// Load from an explicit path, or from the default location when
    /// none is given. An explicit path must exist; the default location
    /// may not, in which case defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let Some(path) = default_path() else {
                    return Ok(Self::default());
                };
                if !path.exists() {
                    debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut config: Config =
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        // A result line narrower than the minimum cannot even show a
        // clamped fraction.
        config.display.max_digits = config.display.max_digits.max(MIN_DISPLAY_DIGITS);
        debug!(?config, "loaded configuration");
        Ok(config)
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deskcalc").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(text.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.display.max_digits, MAX_DISPLAY_DIGITS);
        assert!(!config.clipboard.copy_on_equals);
    }

    #[test]
    fn test_load_parses_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "[display]\nmax_digits = 12\n\n[clipboard]\ncopy_on_equals = true\n",
        );
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.display.max_digits, 12);
        assert!(config.clipboard.copy_on_equals);
    }

    #[test]
    fn test_load_fills_missing_sections_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[clipboard]\ncopy_on_equals = true\n");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.display.max_digits, MAX_DISPLAY_DIGITS);
        assert!(config.clipboard.copy_on_equals);
    }

    #[test]
    fn test_load_clamps_unusable_widths() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[display]\nmax_digits = 1\n");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.display.max_digits, MIN_DISPLAY_DIGITS);
    }

    #[test]
    fn test_load_rejects_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "display = \"wide\"\n");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_rejects_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
