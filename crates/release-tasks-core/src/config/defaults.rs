//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "release-tasks.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "release-tasks.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".release-tasks.yaml";

/// Default markdown changelog path
pub const DEFAULT_MARKDOWN_CHANGELOG: &str = "CHANGELOG.md";

/// Default Debian changelog path
pub const DEFAULT_DEBIAN_CHANGELOG: &str = "debian/changelog";

/// Class marking the element that receives rendered release notes
pub const DEFAULT_MARKER_CLASS: &str = "releasenotes";

/// Markdown flavor used when none is configured
pub const DEFAULT_MARKDOWN_FLAVOR: &str = "commonmark";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ALT_CONFIG_FILE,
        ".release-tasks.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# release-tasks configuration

# Non-release builds skip stamping and produce UNRELEASED Debian stanzas
release: true

changelog:
  file: CHANGELOG.md

debian:
  changelog: debian/changelog
  # product: myapp
  # stability: unstable
  # urgency: low
  # author: "Jane Doe <jane@example.com>"

stamp:
  enabled: false

release_notes:
  # html_file: ReleaseNotes.htm
  marker_class: releasenotes
  # commonmark or gfm
  flavor: commonmark
"#;
