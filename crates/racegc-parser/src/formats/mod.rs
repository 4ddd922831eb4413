mod json_payload;
pub mod schema;
mod tpv_csv;

pub use json_payload::parse_results_payload;
pub use tpv_csv::TpvCsvParser;
