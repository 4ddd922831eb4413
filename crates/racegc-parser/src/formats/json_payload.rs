use serde_json::{Map, Value};

use crate::errors::ParserError;
use crate::model::{EventExport, ExportRow};

use super::schema::{DEFAULT_DISTANCE, DEFAULT_EVENT_KEY, DEFAULT_PEN};

/// Normalises a race-results API payload into export rows.
///
/// Three payload shapes are accepted: an object carrying a `results` array, a
/// bare array of results, or a single result object. Field names are matched
/// in export spelling first (`ARRBand`) and then in snake case (`arr_band`).
pub fn parse_results_payload(content: &str) -> Result<EventExport, ParserError> {
    let payload: Value =
        serde_json::from_str(content).map_err(|source| ParserError::Json { source })?;

    let (event_key, pen, results) = match &payload {
        Value::Object(map) if map.contains_key("results") => {
            let results = match &map["results"] {
                Value::Array(items) => items.iter().collect::<Vec<_>>(),
                other => {
                    return Err(ParserError::Payload {
                        message: format!("'results' must be an array, found {}", kind(other)),
                    })
                }
            };
            (payload_event_key(map), payload_pen(map), results)
        }
        Value::Array(items) => (
            DEFAULT_EVENT_KEY.to_string(),
            DEFAULT_PEN.to_string(),
            items.iter().collect(),
        ),
        Value::Object(map) => (payload_event_key(map), payload_pen(map), vec![&payload]),
        other => {
            return Err(ParserError::Payload {
                message: format!("expected an object or array, found {}", kind(other)),
            })
        }
    };

    let rows = results
        .into_iter()
        .enumerate()
        .map(|(idx, result)| match result {
            Value::Object(fields) => Ok(export_row(fields, &event_key, &pen)),
            other => Err(ParserError::Payload {
                message: format!("result {idx} must be an object, found {}", kind(other)),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EventExport {
        event_key,
        pen,
        rows,
    })
}

fn payload_event_key(map: &Map<String, Value>) -> String {
    lookup(map, &["event_key", "EventKey"]).unwrap_or_else(|| DEFAULT_EVENT_KEY.to_string())
}

fn payload_pen(map: &Map<String, Value>) -> String {
    lookup(map, &["pen", "Pen"]).unwrap_or_else(|| DEFAULT_PEN.to_string())
}

fn export_row(fields: &Map<String, Value>, event_key: &str, pen: &str) -> ExportRow {
    let text = |keys: &[&str]| lookup(fields, keys).unwrap_or_default();
    let or = |keys: &[&str], default: &str| {
        lookup(fields, keys).unwrap_or_else(|| default.to_string())
    };

    ExportRow {
        event_key: or(&["EventKey", "event_key"], event_key),
        pen: or(&["Pen", "pen"], pen),
        position: text(&["Position", "position"]),
        name: text(&["Name", "name"]),
        team: text(&["Team", "team"]),
        country: text(&["Country", "country"]),
        time: or(&["Time", "time"], "0"),
        delta_time: or(&["DeltaTime", "delta_time"], "0"),
        distance: or(&["Distance", "distance"], DEFAULT_DISTANCE),
        delta_distance: or(&["DeltaDistance", "delta_distance"], "0"),
        points: or(&["Points", "points"], "0"),
        gender: text(&["Gender", "gender"]),
        uid: text(&["UID", "uid", "user_id"]),
        arr: text(&["ARR", "arr"]),
        arr_band: text(&["ARRBand", "arr_band"]),
        event_rating: text(&["EventRating", "event_rating"]),
        event_rating_band: text(&["EventRatingBand", "event_rating_band"]),
        age_band: text(&["AgeBand", "age_band"]),
        ngb: text(&["NGB", "ngb"]),
        ngb_id: text(&["NGB ID", "ngb_id"]),
        uci_id: text(&["UCI ID", "uci_id"]),
    }
}

/// First key present wins, even when its value is null.
fn lookup(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| map.get(*key))
        .map(render_value)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
