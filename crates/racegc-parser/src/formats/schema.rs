/// Lines preceding the column header in an export: a title and a blank line.
pub const PREAMBLE_LINES: usize = 2;

pub const EXPORT_TITLE: &str = "OVERALL INDIVIDUAL RESULTS:";

pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Position",
    "Gender",
    "UID",
    "Name",
    "Team",
    "Country",
    "Time",
    "ARR",
    "ARRBand",
    "EventRating",
    "AgeBand",
];

pub const DEFAULT_EVENT_KEY: &str = "88000";
pub const DEFAULT_PEN: &str = "1";
pub const DEFAULT_DISTANCE: &str = "32417.966";
