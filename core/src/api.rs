use crate::aggregate::{aggregate, Aggregation};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::input::{open_source, records};
use crate::writer::{render, write_output};
use std::path::PathBuf;

/// Generator for the private dictionary module
///
/// Runs the read → aggregate → write pipeline for one [`PipelineConfig`].
/// The source is parsed completely (and its handle closed) before the
/// output file is touched, so a malformed line never truncates an
/// existing output.
///
/// # Example
///
/// ```
/// use privdict_core::{loader, PipelineConfig, PrivateDictGenerator};
///
/// let dir = tempfile::tempdir().unwrap();
/// let input = dir.path().join("private.dic");
/// let output = dir.path().join("_private_dict.py");
/// std::fs::write(
///     &input,
///     "# group\telement\tVR\tVM\tname\t\tcreator\n\
///      0009\t0010\tLO\t1\tPrivate Creator\t\tACME\n\
///      0009\t0011\tSH\t1\tAcme Code\t\tACME\n",
/// )
/// .unwrap();
///
/// let generator = PrivateDictGenerator::new(PipelineConfig::new(&input, &output));
/// let summary = generator.run().unwrap();
/// assert_eq!(summary.creators, 1);
/// assert_eq!(summary.attributes, 2);
///
/// let text = std::fs::read_to_string(&output).unwrap();
/// let (name, dicts) = loader::load_module(&text).unwrap();
/// assert_eq!(name, "private_dictionaries");
/// assert_eq!(dicts.creator("ACME").unwrap().get("00090011").unwrap().name, "Acme Code");
/// ```
pub struct PrivateDictGenerator {
    config: PipelineConfig,
}

impl PrivateDictGenerator {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Reads and aggregates the source without writing anything
    ///
    /// Returns the aggregation and the number of comment lines skipped.
    ///
    /// # Errors
    ///
    /// - `FileAccess` if the source cannot be opened or read
    /// - `MalformedRecord` on the first line without exactly 7 fields
    pub fn build(&self) -> Result<(Aggregation, usize)> {
        let mut lines = open_source(&self.config.input_path)?;
        let aggregation = aggregate(records(&mut lines))?;
        Ok((aggregation, lines.skipped_comments()))
    }

    /// Runs the full pipeline and writes the output file
    ///
    /// # Errors
    ///
    /// Any error from [`build`](Self::build), an invalid `dict_name`,
    /// a rendering failure, or `FileAccess` when writing the output.
    pub fn run(&self) -> Result<GenerationSummary> {
        self.config.validate()?;

        let (aggregation, comments_skipped) = self.build()?;
        let contents = render(&aggregation.dictionaries, &self.config)?;
        write_output(&self.config.output_path, &contents)?;

        Ok(GenerationSummary {
            output_path: self.config.output_path.clone(),
            records: aggregation.records,
            comments_skipped,
            creators: aggregation.dictionaries.creator_count(),
            attributes: aggregation.dictionaries.attribute_count(),
            overwrites: aggregation.overwrites,
        })
    }
}

/// Counts describing a completed generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// File that was written
    pub output_path: PathBuf,

    /// Records parsed from the source
    pub records: usize,

    /// Comment lines ignored
    pub comments_skipped: usize,

    /// Distinct private creators
    pub creators: usize,

    /// Attributes written across all creators
    pub attributes: usize,

    /// Records that replaced an earlier entry for the same creator and tag
    pub overwrites: usize,
}
