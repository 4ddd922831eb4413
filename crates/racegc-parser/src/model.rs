use serde::{Deserialize, Serialize};

/// One participant's row from one event export, restricted to the columns the
/// classification needs. Every value is kept as the text found in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResultRecord {
    pub uid: String,
    pub name: String,
    pub team: String,
    pub country: String,
    pub time: String,
    pub gender: String,
    pub position: String,
    pub arr: String,
    pub arr_band: String,
    pub event_rating: String,
    pub age_band: String,
}

/// Parsed contents of a single event export.
#[derive(Debug, Clone)]
pub struct ResultFile {
    pub source: String,
    pub records: Vec<RawResultRecord>,
}

impl ResultFile {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A JSON results payload normalised into export rows.
#[derive(Debug, Clone)]
pub struct EventExport {
    pub event_key: String,
    pub pen: String,
    pub rows: Vec<ExportRow>,
}

/// One row of a TrainingPeaks Virtual results export, in export column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "EventKey")]
    pub event_key: String,
    #[serde(rename = "Pen")]
    pub pen: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "DeltaTime")]
    pub delta_time: String,
    #[serde(rename = "Distance")]
    pub distance: String,
    #[serde(rename = "DeltaDistance")]
    pub delta_distance: String,
    #[serde(rename = "Points")]
    pub points: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(rename = "ARR")]
    pub arr: String,
    #[serde(rename = "ARRBand")]
    pub arr_band: String,
    #[serde(rename = "EventRating")]
    pub event_rating: String,
    #[serde(rename = "EventRatingBand")]
    pub event_rating_band: String,
    #[serde(rename = "AgeBand")]
    pub age_band: String,
    #[serde(rename = "NGB")]
    pub ngb: String,
    #[serde(rename = "NGB ID")]
    pub ngb_id: String,
    #[serde(rename = "UCI ID")]
    pub uci_id: String,
}
