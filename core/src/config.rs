use crate::error::{PrivateDictError, Result};
use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

/// mdcm private dictionary release the generator reads by default
pub const DEFAULT_INPUT_PATH: &str = "mdcm-r52-private.dic";

/// Generated module location, relative to the generator's directory
pub const DEFAULT_OUTPUT_PATH: &str = "../dicom/_private_dict.py";

/// Variable the generated module assigns the dictionaries to
pub const DEFAULT_DICT_NAME: &str = "private_dictionaries";

/// Format of the generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Python module with header comments and a dict literal
    #[default]
    Python,
    /// Plain JSON document (requires the `json` feature)
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Python => write!(f, "python"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Parameters for one generation run
///
/// `Default` reproduces the historical fixed paths and variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Tab-separated private dictionary source
    pub input_path: PathBuf,

    /// Destination file, truncated on write
    pub output_path: PathBuf,

    /// Name assigned in the generated module
    pub dict_name: String,

    pub format: OutputFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            dict_name: DEFAULT_DICT_NAME.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl PipelineConfig {
    /// Creates a config for the given paths with default name and format
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn with_dict_name(mut self, dict_name: impl Into<String>) -> Self {
        self.dict_name = dict_name.into();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Checks that the configuration can produce a loadable module
    ///
    /// # Errors
    ///
    /// Returns [`PrivateDictError::InvalidShape`] if `dict_name` is not a
    /// valid Python identifier.
    pub fn validate(&self) -> Result<()> {
        if is_identifier(&self.dict_name) {
            Ok(())
        } else {
            Err(PrivateDictError::InvalidShape(format!(
                "'{}' is not a valid variable name",
                self.dict_name
            )))
        }
    }
}

/// Returns true for ASCII Python identifiers
pub fn is_identifier(s: &str) -> bool {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Failed to compile regex")
    });
    re.is_match(s)
}
