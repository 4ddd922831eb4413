pub mod errors;
pub mod formats;
pub mod model;

pub use errors::ParserError;
pub use formats::{parse_results_payload, TpvCsvParser};
pub use model::{EventExport, ExportRow, RawResultRecord, ResultFile};

/// Common interface for readers that turn one results export into typed records.
pub trait ResultsParser {
    fn name(&self) -> &'static str;
    fn parse(&self, source: &str, content: &str) -> Result<ResultFile, ParserError>;
}

/// Parses a TrainingPeaks Virtual results CSV export.
pub fn parse_results_file(source: &str, content: &str) -> Result<ResultFile, ParserError> {
    TpvCsvParser.parse(source, content)
}

#[cfg(test)]
mod tests;
