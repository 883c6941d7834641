pub mod aggregate;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod types;
pub mod writer;

pub use api::{GenerationSummary, PrivateDictGenerator};
pub use cli::report::SummaryReport;
pub use config::{OutputFormat, PipelineConfig};
pub use error::{PrivateDictError, Result};
pub use types::*;
