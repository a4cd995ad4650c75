//! Configuration loading for the conversion pipeline.
//!
//! This module produces the effective [`DiagramConfig`] for a run. With
//! no override document the compiled-in defaults apply unchanged. With
//! one, the file is decoded into the typed configuration shape, so every
//! substructure the document supplies replaces the default it covers as
//! a whole; sections left out keep their defaults.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

pub use dotloom_core::config::{DiagramConfig, Settings, TableSettings, Templates};

/// Configuration-related errors.
///
/// Both variants are fatal and are surfaced before any rendering begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode configuration file `{path}`")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Root shape of an override document. Keys outside `diagram` are
/// ignored.
#[derive(Debug, Default, Deserialize)]
struct OverrideDocument {
    #[serde(default)]
    diagram: DiagramConfig,
}

/// Produces the effective configuration for a run.
///
/// # Arguments
///
/// * `path` - Optional path to a YAML override document.
///
/// # Errors
///
/// Returns [`ConfigError`] when an override path is given but the file
/// cannot be read or does not decode into the configuration shape.
pub fn load_config(path: Option<&Path>) -> Result<DiagramConfig, ConfigError> {
    let Some(path) = path else {
        debug!("No configuration file given, using the compiled-in defaults");
        return Ok(DiagramConfig::default());
    };

    info!(path = path.display().to_string(); "Loading configuration");

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: OverrideDocument =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(document.diagram)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn no_override_yields_the_defaults() {
        let config = load_config(None).expect("defaults should load");
        assert_eq!(config.settings().rankdir(), "TB");
        assert_eq!(config.templates().main(), "diagram.dot");
    }

    #[test]
    fn override_document_replaces_supplied_sections() {
        let file = config_file(
            r##"
            diagram:
              settings:
                rankdir: LR
              styles:
                entities:
                  user:
                    header:
                      bgcolor: "#2563EB"
            "##,
        );

        let config = load_config(Some(file.path())).expect("override should load");

        assert_eq!(config.settings().rankdir(), "LR");
        assert!(config.styles().entity("user").is_some());
        // Sections the document does not mention keep their defaults.
        assert_eq!(config.templates().entity(), "entity.dot");
        assert_eq!(config.settings().table_settings().border(), "2");
    }

    #[test]
    fn keys_outside_the_diagram_root_are_ignored() {
        let file = config_file("diagram:\n  settings:\n    rankdir: LR\nlogging:\n  level: debug\n");

        let config = load_config(Some(file.path())).expect("override should load");
        assert_eq!(config.settings().rankdir(), "LR");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_config(Some(Path::new("/nonexistent/dotloom.yaml")))
            .expect_err("missing file should fail");
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn undecodable_document_is_a_decode_error() {
        let file = config_file("diagram: [this, is, not, a, mapping]\n");

        let err = load_config(Some(file.path())).expect_err("bad shape should fail");
        assert!(matches!(err, ConfigError::Decode { .. }));
    }
}
