//! Error types for dotloom operations.
//!
//! This module provides the main error type [`DotloomError`] covering the
//! fatal failure classes of the pipeline. Template failures are not
//! represented here: they are recovered per element inside the renderer
//! and never cross the pipeline boundary.

use thiserror::Error;

use crate::{config::ConfigError, parse::ParseError};

/// The main error type for dotloom operations.
#[derive(Debug, Error)]
pub enum DotloomError {
    /// The input document is not a well-formed model.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The override configuration document could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
