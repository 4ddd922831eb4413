use csv::StringRecord;

use crate::errors::ParserError;
use crate::model::{RawResultRecord, ResultFile};
use crate::ResultsParser;

use super::schema::{PREAMBLE_LINES, REQUIRED_COLUMNS};

pub struct TpvCsvParser;

impl Default for TpvCsvParser {
    fn default() -> Self {
        Self
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    position: usize,
    gender: usize,
    uid: usize,
    name: usize,
    team: usize,
    country: usize,
    time: usize,
    arr: usize,
    arr_band: usize,
    event_rating: usize,
    age_band: usize,
}

impl ColumnIndex {
    fn locate(header: &StringRecord) -> Result<Self, ParserError> {
        let mut found = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, column) in found.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = header.iter().position(|name| name == column).ok_or(
                ParserError::MissingColumn {
                    parser: TpvCsvParser::NAME,
                    column,
                },
            )?;
        }

        let [position, gender, uid, name, team, country, time, arr, arr_band, event_rating, age_band] =
            found;
        Ok(Self {
            position,
            gender,
            uid,
            name,
            team,
            country,
            time,
            arr,
            arr_band,
            event_rating,
            age_band,
        })
    }

    fn project(&self, record: &StringRecord) -> RawResultRecord {
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        RawResultRecord {
            uid: field(self.uid),
            name: field(self.name),
            team: field(self.team),
            country: field(self.country),
            time: field(self.time),
            gender: field(self.gender),
            position: field(self.position),
            arr: field(self.arr),
            arr_band: field(self.arr_band),
            event_rating: field(self.event_rating),
            age_band: field(self.age_band),
        }
    }
}

impl TpvCsvParser {
    const NAME: &'static str = "TPV_CSV";

    /// Returns the text after the title and blank lines, or `None` when the
    /// file ends before its header row.
    fn skip_preamble(content: &str) -> Option<&str> {
        let mut rest = content;
        for _ in 0..PREAMBLE_LINES {
            let newline = rest.find('\n')?;
            rest = &rest[newline + 1..];
        }
        if rest.trim().is_empty() {
            None
        } else {
            Some(rest)
        }
    }
}

impl ResultsParser for TpvCsvParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse(&self, source: &str, content: &str) -> Result<ResultFile, ParserError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let body = Self::skip_preamble(content)
            .ok_or(ParserError::MissingHeader { parser: Self::NAME })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(body.as_bytes());

        let header = reader
            .headers()
            .map_err(|err| ParserError::Csv {
                parser: Self::NAME,
                source: err,
            })?
            .clone();
        let columns = ColumnIndex::locate(&header)?;

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| ParserError::Csv {
                parser: Self::NAME,
                source: err,
            })?;
            records.push(columns.project(&record));
        }

        Ok(ResultFile {
            source: source.to_string(),
            records,
        })
    }
}
