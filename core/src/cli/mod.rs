pub mod report;

use crate::config::{self, PipelineConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for make-private-dict
///
/// Every option has a default, so running without arguments regenerates
/// the module from the standard locations.
#[derive(Parser, Debug)]
#[command(name = "make-private-dict")]
#[command(about = "Convert an mdcm private.dic file into a Python private DICOM dictionary module")]
#[command(version)]
pub struct Cli {
    /// Tab-separated private dictionary source
    #[arg(short, long, value_name = "FILE", default_value = config::DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Generated file (overwritten)
    #[arg(short, long, value_name = "FILE", default_value = config::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Variable name assigned in the generated module
    #[arg(short, long, default_value = config::DEFAULT_DICT_NAME)]
    pub dict_name: String,

    /// Output format
    #[arg(short, long, default_value = "python")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Python module with a dict literal
    Python,
    /// JSON document (requires the 'json' feature)
    Json,
}

impl From<OutputFormat> for config::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Python => config::OutputFormat::Python,
            OutputFormat::Json => config::OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Builds the pipeline configuration from the parsed arguments
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig::new(&self.input, &self.output)
            .with_dict_name(self.dict_name.clone())
            .with_format(self.format.clone().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["make-private-dict"]).unwrap();
        assert_eq!(cli.to_config(), PipelineConfig::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "make-private-dict",
            "--input",
            "new.dic",
            "-o",
            "out.json",
            "--dict-name",
            "vendor",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        let pipeline = cli.to_config();

        assert_eq!(pipeline.input_path, PathBuf::from("new.dic"));
        assert_eq!(pipeline.output_path, PathBuf::from("out.json"));
        assert_eq!(pipeline.dict_name, "vendor");
        assert_eq!(pipeline.format, config::OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["make-private-dict", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
