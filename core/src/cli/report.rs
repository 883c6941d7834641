use crate::api::GenerationSummary;
use std::fmt;

/// Text report for a completed generation run
pub struct SummaryReport<'a> {
    summary: &'a GenerationSummary,
}

impl<'a> SummaryReport<'a> {
    /// Creates a new summary report
    pub fn new(summary: &'a GenerationSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for SummaryReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Private Dictionary Generation")?;
        writeln!(f, "=============================")?;
        writeln!(f, "Output:           {}", self.summary.output_path.display())?;
        writeln!(f, "Records:          {}", self.summary.records)?;
        writeln!(f, "Comments skipped: {}", self.summary.comments_skipped)?;
        writeln!(f, "Creators:         {}", self.summary.creators)?;
        writeln!(f, "Attributes:       {}", self.summary.attributes)?;
        write!(f, "Overwritten:      {}", self.summary.overwrites)
    }
}

/// One-line completion message printed by the binary
pub fn completion_line(summary: &GenerationSummary) -> String {
    format!(
        "Finished creating file {} containing the private dictionaries",
        summary.output_path.display()
    )
}
