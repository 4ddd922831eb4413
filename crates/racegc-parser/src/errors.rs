use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("{parser} file is missing its column header row")]
    MissingHeader { parser: &'static str },

    #[error("{parser} header is missing required column '{column}'")]
    MissingColumn {
        parser: &'static str,
        column: &'static str,
    },

    #[error("{parser} CSV error: {source}")]
    Csv {
        parser: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("results payload is not valid JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("results payload invalid: {message}")]
    Payload { message: String },
}
