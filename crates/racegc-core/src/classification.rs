use std::collections::HashSet;

use racegc_parser::{RawResultRecord, ResultFile};
use serde::Serialize;
use tracing::debug;

use crate::time_format::{format_seconds, parse_seconds};

/// Gender value marking a pacer or test entry rather than a rider.
pub const BOT_GENDER: &str = "Bot";
/// Position value marking a rider who did not finish.
pub const DID_NOT_FINISH: &str = "DNF";

/// One row of the general classification, in output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationEntry {
    #[serde(rename = "Position")]
    pub rank: usize,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Time")]
    pub time_formatted: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "ARR")]
    pub arr: String,
    #[serde(rename = "ARRBand")]
    pub arr_band: String,
    #[serde(rename = "EventRating")]
    pub event_rating: String,
    #[serde(rename = "AgeBand")]
    pub age_band: String,
    #[serde(skip)]
    pub time_seconds: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationStats {
    pub files: usize,
    pub records_read: usize,
    pub qualifying_records: usize,
    pub unparseable_times: usize,
    pub participants: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralClassification {
    pub entries: Vec<ClassificationEntry>,
    pub stats: ClassificationStats,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationOutcome {
    /// No result files were supplied.
    NothingToProcess,
    /// Files were supplied but no record survived filtering and time coercion.
    NoValidResults,
    Ranked(GeneralClassification),
}

impl ClassificationOutcome {
    pub fn entries(&self) -> &[ClassificationEntry] {
        match self {
            ClassificationOutcome::Ranked(classification) => &classification.entries,
            _ => &[],
        }
    }
}

struct TimedRecord<'a> {
    ordinal: usize,
    seconds: f64,
    record: &'a RawResultRecord,
}

/// Whether a record may take part in the classification at all.
pub fn is_qualifying(record: &RawResultRecord) -> bool {
    record.gender != BOT_GENDER && record.position != DID_NOT_FINISH
}

/// Merges per-event result files into one ranked classification.
///
/// Each participant (by uid) keeps their fastest qualifying time. Records are
/// numbered in encounter order, file by file then row by row, and that ordinal
/// settles every tie: between two equal times for the same uid the earlier
/// record is kept, and between different riders on the same time the earlier
/// one ranks higher.
pub fn classify(files: &[ResultFile]) -> ClassificationOutcome {
    if files.is_empty() {
        return ClassificationOutcome::NothingToProcess;
    }

    let records_read = files.iter().map(ResultFile::len).sum();
    let qualifying: Vec<&RawResultRecord> = files
        .iter()
        .flat_map(|file| file.records.iter().filter(|record| is_qualifying(record)))
        .collect();

    let mut timed: Vec<TimedRecord<'_>> = qualifying
        .iter()
        .copied()
        .enumerate()
        .filter_map(|(ordinal, record)| {
            parse_seconds(&record.time).map(|seconds| TimedRecord {
                ordinal,
                seconds,
                record,
            })
        })
        .collect();
    let unparseable_times = qualifying.len() - timed.len();

    timed.sort_by(|a, b| {
        a.seconds
            .total_cmp(&b.seconds)
            .then(a.ordinal.cmp(&b.ordinal))
    });

    let mut seen = HashSet::new();
    let entries: Vec<ClassificationEntry> = timed
        .into_iter()
        .filter(|timed| seen.insert(timed.record.uid.as_str()))
        .enumerate()
        .map(|(idx, timed)| to_entry(idx + 1, &timed))
        .collect();

    let stats = ClassificationStats {
        files: files.len(),
        records_read,
        qualifying_records: qualifying.len(),
        unparseable_times,
        participants: entries.len(),
    };
    debug!(?stats, "classification computed");

    if entries.is_empty() {
        ClassificationOutcome::NoValidResults
    } else {
        ClassificationOutcome::Ranked(GeneralClassification { entries, stats })
    }
}

fn to_entry(rank: usize, timed: &TimedRecord<'_>) -> ClassificationEntry {
    let record = timed.record;
    ClassificationEntry {
        rank,
        name: record.name.clone(),
        team: record.team.clone(),
        country: record.country.clone(),
        time_formatted: format_seconds(timed.seconds),
        gender: record.gender.clone(),
        arr: record.arr.clone(),
        arr_band: record.arr_band.clone(),
        event_rating: record.event_rating.clone(),
        age_band: record.age_band.clone(),
        time_seconds: timed.seconds,
    }
}
