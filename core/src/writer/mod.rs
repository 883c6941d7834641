//! Rendering and writing of the generated dictionary module

mod header;
#[cfg(feature = "json")]
mod json;
pub mod python;

pub use header::header;

use crate::config::{OutputFormat, PipelineConfig};
use crate::error::{PrivateDictError, Result};
use crate::types::PrivateDictionaries;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders the complete output document for the configured format
///
/// For Python this is the header, the `name = \` assignment and the
/// literal. JSON output carries no header.
pub fn render(dictionaries: &PrivateDictionaries, config: &PipelineConfig) -> Result<String> {
    match config.format {
        OutputFormat::Python => {
            let mut out = header(
                &config.output_path.display().to_string(),
                &config.input_path.display().to_string(),
            );
            out.push_str(&config.dict_name);
            out.push_str(" = \\\n");
            out.push_str(&python::render_literal(dictionaries)?);
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Json => render_json(dictionaries),
    }
}

#[cfg(feature = "json")]
fn render_json(dictionaries: &PrivateDictionaries) -> Result<String> {
    json::render(dictionaries)
}

#[cfg(not(feature = "json"))]
fn render_json(_dictionaries: &PrivateDictionaries) -> Result<String> {
    Err(PrivateDictError::Serialization(
        "JSON output requires the 'json' feature".to_string(),
    ))
}

/// Writes rendered text to `path`, truncating any existing file
///
/// # Errors
///
/// Returns [`PrivateDictError::FileAccess`] if the file cannot be created
/// or written. A partially written file may remain on failure.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| PrivateDictError::file_access(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| PrivateDictError::file_access(path, e))?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
