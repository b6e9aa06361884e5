use std::path::Path;

use serde::Deserialize;

use crate::export::model::ExportFormat;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "struct-graph.toml";

/// Configuration loaded from `struct-graph.toml`.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StructGraphConfig {
    /// Render only edges between exported identifiers.
    pub public_only: bool,
    /// Default output format when `--format` is not given.
    pub format: Option<ExportFormat>,
    /// Glob patterns excluded when expanding directory arguments.
    pub exclude: Option<Vec<String>>,
}

impl StructGraphConfig {
    /// Load configuration from `path`.
    ///
    /// Returns a default (empty) configuration if the file does not exist or cannot be parsed.
    /// A missing file is only worth a warning when the path was given explicitly.
    pub fn load(path: &Path, explicit: bool) -> Self {
        if !path.exists() {
            if explicit {
                tracing::warn!(path = %path.display(), "config file not found, using defaults");
            }
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(path = %path.display(), "failed to parse config: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), "failed to read config: {err}. Using defaults.");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StructGraphConfig::load(&dir.path().join(CONFIG_FILE), false);
        assert_eq!(config, StructGraphConfig::default());
    }

    #[test]
    fn test_all_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "public_only = true\nformat = \"mermaid\"\nexclude = [\"*_gen.go\"]\n",
        )
        .unwrap();
        let config = StructGraphConfig::load(&path, true);
        assert!(config.public_only);
        assert_eq!(config.format, Some(ExportFormat::Mermaid));
        assert_eq!(config.exclude, Some(vec!["*_gen.go".to_string()]));
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "public_only = \"yes please\"\n").unwrap();
        assert_eq!(StructGraphConfig::load(&path, true), StructGraphConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "publik = true\n").unwrap();
        assert_eq!(StructGraphConfig::load(&path, true), StructGraphConfig::default());
    }
}
