//! Invocation of the external Graphviz `dot` tool.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use log::info;

use crate::error::CliError;

/// Derives the image path from the DOT path by swapping the extension.
pub fn image_path(dot_path: &Path, format: &str) -> PathBuf {
    dot_path.with_extension(format)
}

/// Runs `dot -T<format> <dot-file> -o <image-file>`.
///
/// A failure here is reported to the caller but does not invalidate the
/// DOT file already written.
pub fn render_image(dot_path: &Path, format: &str) -> Result<PathBuf, CliError> {
    let image = image_path(dot_path, format);

    let status = Command::new("dot")
        .arg(format!("-T{format}"))
        .arg(dot_path)
        .arg("-o")
        .arg(&image)
        .status()
        .map_err(CliError::Launch)?;

    if !status.success() {
        return Err(CliError::Render { status });
    }

    info!(image = image.display().to_string(); "Diagram rendered");
    Ok(image)
}
