pub mod classification;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod output;
pub mod runner;
pub mod time_format;

pub use classification::{
    classify, ClassificationEntry, ClassificationOutcome, ClassificationStats,
    GeneralClassification,
};
pub use config::Settings;
pub use error::{PipelineError, Result};
pub use runner::{convert_json, run_classification, ConvertedExport, RunReport};
