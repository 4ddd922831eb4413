use std::fs;
use std::path::PathBuf;

use crate::errors::ParserError;
use crate::formats::schema::{DEFAULT_DISTANCE, DEFAULT_EVENT_KEY, DEFAULT_PEN};
use crate::{parse_results_file, parse_results_payload, ResultsParser, TpvCsvParser};

fn fixture(path: &str) -> String {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let full_path = base.join("tests/data").join(path);
    fs::read_to_string(&full_path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", full_path.display(), err))
}

#[test]
fn parses_export_with_bom_and_crlf() {
    let content = fixture("TPVirtual-Results-Event88022-Pen3.csv");
    let parsed = parse_results_file("event88022.csv", &content).expect("export parse failed");

    assert_eq!(parsed.source, "event88022.csv");
    assert_eq!(parsed.len(), 4);

    let first = &parsed.records[0];
    assert_eq!(first.uid, "u-100");
    assert_eq!(first.name, "Ana Sousa");
    assert_eq!(first.team, "Velo Club");
    assert_eq!(first.country, "PT");
    assert_eq!(first.time, "1805.412");
    assert_eq!(first.gender, "Female");
    assert_eq!(first.position, "1");
    assert_eq!(first.arr, "412");
    assert_eq!(first.arr_band, "Gold");
    assert_eq!(first.event_rating, "398");
    assert_eq!(first.age_band, "30-39");

    assert_eq!(parsed.records[2].gender, "Bot");
    assert_eq!(parsed.records[3].position, "DNF");
}

#[test]
fn keeps_unparseable_time_as_text() {
    let content = fixture("TPVirtual-Results-Event88023-Pen1.csv");
    let parsed = parse_results_file("event88023.csv", &content).expect("export parse failed");

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.records[1].uid, "u-400");
    assert_eq!(parsed.records[1].time, "");
}

#[test]
fn missing_required_column_is_rejected() {
    let content = fixture("missing-uid-column.csv");
    let err = parse_results_file("bad.csv", &content).expect_err("should reject file");

    match err {
        ParserError::MissingColumn { column, .. } => assert_eq!(column, "UID"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ragged_row_rejects_whole_file() {
    let content = fixture("ragged-row.csv");
    let err = parse_results_file("ragged.csv", &content).expect_err("should reject file");
    assert!(matches!(err, ParserError::Csv { .. }), "unexpected error: {err}");
}

#[test]
fn file_without_header_row_is_rejected() {
    let err = TpvCsvParser
        .parse("short.csv", "OVERALL INDIVIDUAL RESULTS:\n\n")
        .expect_err("should reject file");
    assert!(matches!(err, ParserError::MissingHeader { .. }));
    assert_eq!(TpvCsvParser.name(), "TPV_CSV");
}

#[test]
fn header_only_file_has_no_records() {
    let content = "title\n\nPosition,Gender,UID,Name,Team,Country,Time,ARR,ARRBand,EventRating,AgeBand\n";
    let parsed = parse_results_file("empty.csv", content).expect("header-only file parses");
    assert!(parsed.is_empty());
}

#[test]
fn column_order_is_irrelevant() {
    let content = "title\n\nAgeBand,UID,Time,Name,Position,Gender,Team,Country,ARR,ARRBand,EventRating,Extra\n\
                   30-39,7,99.5,Eve,4,Female,T,NL,300,Bronze,310,ignored\n";
    let parsed = parse_results_file("shuffled.csv", content).expect("parse failed");
    let record = &parsed.records[0];
    assert_eq!(record.uid, "7");
    assert_eq!(record.time, "99.5");
    assert_eq!(record.position, "4");
    assert_eq!(record.age_band, "30-39");
}

#[test]
fn payload_with_results_array_uses_payload_keys() {
    let payload = r#"{
        "event_key": 88022,
        "pen": 3,
        "results": [
            {"position": 1, "name": "Ana Sousa", "time": 1805.412, "gender": "Female",
             "user_id": "u-100", "arr_band": "Gold", "NGB ID": null},
            {"Position": "DNF", "Name": "Cara Lind", "UID": "u-300", "Pen": 4}
        ]
    }"#;
    let export = parse_results_payload(payload).expect("payload parse failed");

    assert_eq!(export.event_key, "88022");
    assert_eq!(export.pen, "3");
    assert_eq!(export.rows.len(), 2);

    let first = &export.rows[0];
    assert_eq!(first.event_key, "88022");
    assert_eq!(first.position, "1");
    assert_eq!(first.time, "1805.412");
    assert_eq!(first.uid, "u-100");
    assert_eq!(first.arr_band, "Gold");
    assert_eq!(first.ngb_id, "");
    assert_eq!(first.distance, DEFAULT_DISTANCE);
    assert_eq!(first.points, "0");

    let second = &export.rows[1];
    assert_eq!(second.position, "DNF");
    assert_eq!(second.pen, "4");
    assert_eq!(second.time, "0");
}

#[test]
fn bare_array_payload_uses_defaults() {
    let export = parse_results_payload(r#"[{"Name": "Ben"}]"#).expect("payload parse failed");
    assert_eq!(export.event_key, DEFAULT_EVENT_KEY);
    assert_eq!(export.pen, DEFAULT_PEN);
    assert_eq!(export.rows[0].name, "Ben");
    assert_eq!(export.rows[0].event_key, DEFAULT_EVENT_KEY);
}

#[test]
fn single_object_payload_is_one_result() {
    let export =
        parse_results_payload(r#"{"EventKey": "90001", "Name": "Solo", "UID": 5}"#).unwrap();
    assert_eq!(export.event_key, "90001");
    assert_eq!(export.rows.len(), 1);
    assert_eq!(export.rows[0].uid, "5");
}

#[test]
fn empty_results_array_is_not_an_error() {
    let export = parse_results_payload(r#"{"results": []}"#).unwrap();
    assert!(export.rows.is_empty());
}

#[test]
fn invalid_payloads_are_reported() {
    assert!(matches!(
        parse_results_payload("{not json"),
        Err(ParserError::Json { .. })
    ));
    assert!(matches!(
        parse_results_payload("42"),
        Err(ParserError::Payload { .. })
    ));
    assert!(matches!(
        parse_results_payload(r#"{"results": "nope"}"#),
        Err(ParserError::Payload { .. })
    ));
    assert!(matches!(
        parse_results_payload(r#"[1, 2]"#),
        Err(ParserError::Payload { .. })
    ));
}
