//! CLI error types and their miette adaptation.
//!
//! [`CliError`] covers the failure classes the CLI adds around the
//! library pipeline: unreadable input, unwritable output, and the
//! Graphviz subprocess. [`Reportable`] bridges it to [`miette`]'s rich
//! diagnostic formatting, attaching help text where a next step exists.

use std::{fmt, io, path::PathBuf, process::ExitStatus};

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use dotloom::{DotloomError, config::ConfigError};

/// Errors surfaced by the CLI. Every variant exits with code 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pipeline(#[from] DotloomError),

    #[error("both input and output paths are required")]
    MissingPaths,

    #[error("failed to read input file `{path}`")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output file `{path}`")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The `dot` command could not be started. The DOT file written
    /// beforehand stays on disk.
    #[error("failed to launch the `dot` command")]
    Launch(#[source] io::Error),

    /// The `dot` command ran but reported a failure. The DOT file stays
    /// on disk.
    #[error("graphviz rendering failed ({status})")]
    Render { status: ExitStatus },
}

/// Adapter that lets a [`CliError`] render through miette.
pub struct Reportable<'a>(pub &'a CliError);

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: &str = match self.0 {
            CliError::Launch(_) | CliError::Render { .. } => {
                "make sure Graphviz is installed and the `dot` command is available"
            }
            CliError::Config(_) => {
                "the configuration file must be a YAML document with a top-level `diagram` key"
            }
            CliError::MissingPaths => "run with `--create-sample PREFIX` or pass both paths",
            _ => return None,
        };
        Some(Box::new(help))
    }
}
