//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_DEBIAN_CHANGELOG, DEFAULT_MARKDOWN_CHANGELOG, DEFAULT_MARKDOWN_FLAVOR,
    DEFAULT_MARKER_CLASS,
};

/// Main configuration for release-tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether the build is a release build. Non-release builds skip
    /// stamping and mark Debian stanzas as `UNRELEASED`.
    pub release: bool,

    /// Markdown changelog configuration
    pub changelog: ChangelogConfig,

    /// Debian changelog configuration
    pub debian: DebianConfig,

    /// Heading stamp configuration
    pub stamp: StampConfig,

    /// Release notes HTML configuration
    pub release_notes: ReleaseNotesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release: true,
            changelog: ChangelogConfig::default(),
            debian: DebianConfig::default(),
            stamp: StampConfig::default(),
            release_notes: ReleaseNotesConfig::default(),
        }
    }
}

/// Markdown changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Markdown changelog path
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_MARKDOWN_CHANGELOG),
        }
    }
}

/// Debian changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebianConfig {
    /// Debian changelog path
    pub changelog: PathBuf,

    /// Source package name used in stanza headers
    pub product: Option<String>,

    /// Distribution (e.g. "unstable", "stable")
    pub stability: Option<String>,

    /// Upload urgency (e.g. "low", "medium")
    pub urgency: Option<String>,

    /// Maintainer name and e-mail for the trailer line
    pub author: Option<String>,
}

impl Default for DebianConfig {
    fn default() -> Self {
        Self {
            changelog: PathBuf::from(DEFAULT_DEBIAN_CHANGELOG),
            product: None,
            stability: None,
            urgency: None,
            author: None,
        }
    }
}

/// Heading stamp configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StampConfig {
    /// Whether `stamp` rewrites the heading when no flag is given
    pub enabled: bool,
}

/// Release notes HTML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseNotesConfig {
    /// Target HTML file; derived from the changelog path when unset
    pub html_file: Option<PathBuf>,

    /// Class attribute value identifying the element to fill
    pub marker_class: String,

    /// Markdown flavor used for rendering ("commonmark" or "gfm")
    pub flavor: String,
}

impl Default for ReleaseNotesConfig {
    fn default() -> Self {
        Self {
            html_file: None,
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            flavor: DEFAULT_MARKDOWN_FLAVOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.release);
        assert!(!config.stamp.enabled);
        assert_eq!(config.changelog.file, PathBuf::from("CHANGELOG.md"));
        assert_eq!(config.debian.changelog, PathBuf::from("debian/changelog"));
        assert_eq!(config.release_notes.marker_class, "releasenotes");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("debian:\n  product: bloom\n").unwrap();
        assert_eq!(config.debian.product.as_deref(), Some("bloom"));
        assert_eq!(config.debian.changelog, PathBuf::from("debian/changelog"));
        assert!(config.release);
    }

    #[test]
    fn test_toml_release_flag() {
        let config: Config = toml::from_str("release = false\n[stamp]\nenabled = true\n").unwrap();
        assert!(!config.release);
        assert!(config.stamp.enabled);
    }
}
