//! CLI logic for the cellviz tool.
//!
//! This module reads a Graphviz SVG, normalizes it, replays the requested
//! pointer releases and writes the resulting SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use cellviz::{CellvizError, DiagramBuilder};

/// Run the cellviz CLI application
///
/// This function processes the input file through the cellviz pipeline
/// and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CellvizError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CellvizError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Parse and normalize
    let builder = DiagramBuilder::new(app_config);
    let mut diagram = builder.build(&source)?;

    // Replay clicks in order
    for id in &args.clicks {
        let selection = diagram.click_by_id(id);
        info!(id, selection:%; "Click replayed");
    }

    let svg = builder.render_svg(&diagram)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
