//! CLI logic for the dotloom converter.
//!
//! This module contains the core CLI logic: configuration loading, the
//! conversion run, sample scaffolding, and the optional Graphviz
//! invocation.

pub mod error;

mod args;
mod render_tool;
mod sample;

pub use args::Args;
pub use error::CliError;

use std::{fs, path::Path};

use log::{info, warn};

use dotloom::{DotGenerator, config};

/// Run the dotloom CLI application
///
/// Converts the input model to a DOT document and writes it to the
/// output path; with `--create-sample` it scaffolds example files
/// instead.
///
/// # Errors
///
/// Returns [`CliError`] for:
/// - Missing or unreadable input files
/// - Configuration loading errors
/// - Model parsing errors
/// - Output write errors
/// - Graphviz subprocess failures (the written DOT file stays on disk)
pub fn run(args: &Args) -> Result<(), CliError> {
    if let Some(prefix) = &args.create_sample {
        return sample::create_sample_files(prefix);
    }

    let (input, output) = match (args.input.as_deref(), args.output.as_deref()) {
        (Some(input), Some(output)) => (input, output),
        _ => return Err(CliError::MissingPaths),
    };

    info!(input = input.to_string(), output = output.to_string(); "Processing model");

    // Load configuration
    let app_config = config::load_config(args.config.as_deref().map(Path::new))?;

    // Read input file
    let source = fs::read_to_string(input).map_err(|source| CliError::Input {
        path: input.into(),
        source,
    })?;

    // Process the model through the DotGenerator API
    let generator = DotGenerator::new(app_config);
    let dot = generator.convert(&source)?;

    // Write output file, creating parent directories as needed
    let output_path = Path::new(output);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(
                    path = parent.display().to_string(),
                    err:% = err;
                    "Could not create parent directories"
                );
            }
        }
    }
    fs::write(output_path, &dot).map_err(|source| CliError::Output {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!(output = output.to_string(), bytes = dot.len() as u64; "DOT file written");
    println!("Successfully converted {input} to {output}");

    if args.render {
        let image = render_tool::render_image(output_path, &args.format)?;
        println!("Diagram rendered: {}", image.display());
    } else {
        let image = render_tool::image_path(output_path, &args.format);
        println!(
            "To generate the diagram, run: dot -T{} {} -o {}",
            args.format,
            output,
            image.display()
        );
    }

    Ok(())
}
