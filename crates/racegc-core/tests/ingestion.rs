use racegc_core::ingestion::{ingest_files, FileInput, FileStatus};

fn fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../racegc-parser/tests/data")
        .join(name);
    std::fs::read_to_string(path).expect("read fixture")
}

#[test]
fn ingestion_parses_export() {
    let content = fixture("TPVirtual-Results-Event88022-Pen3.csv");
    let inputs = [FileInput {
        path: "TPVirtual-Results-Event88022-Pen3.csv",
        contents: content.as_bytes(),
    }];

    let batch = ingest_files(&inputs);

    assert_eq!(batch.parsed.len(), 1);
    assert_eq!(batch.reports.len(), 1);
    assert_eq!(batch.reports[0].status, FileStatus::Parsed);
    assert_eq!(batch.reports[0].records, 4);
    assert!(batch.reports[0].hash.is_some());
}

#[test]
fn malformed_file_is_isolated() {
    let good = fixture("TPVirtual-Results-Event88023-Pen1.csv");
    let bad = fixture("missing-uid-column.csv");
    let inputs = [
        FileInput {
            path: "bad.csv",
            contents: bad.as_bytes(),
        },
        FileInput {
            path: "good.csv",
            contents: good.as_bytes(),
        },
    ];

    let batch = ingest_files(&inputs);

    assert_eq!(batch.parsed.len(), 1);
    assert_eq!(batch.parsed[0].source, "good.csv");
    let failures: Vec<_> = batch.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].path, "bad.csv");
    assert!(failures[0]
        .message
        .as_deref()
        .unwrap_or_default()
        .contains("UID"));
}

#[test]
fn identical_file_is_marked_duplicate() {
    let content = fixture("TPVirtual-Results-Event88023-Pen1.csv");
    let inputs = [
        FileInput {
            path: "first.csv",
            contents: content.as_bytes(),
        },
        FileInput {
            path: "copy.csv",
            contents: content.as_bytes(),
        },
    ];

    let batch = ingest_files(&inputs);
    assert_eq!(batch.parsed.len(), 1);
    assert_eq!(batch.reports[1].status, FileStatus::Duplicate);
    assert_eq!(batch.reports[0].hash, batch.reports[1].hash);
}

#[test]
fn non_utf8_file_fails() {
    let inputs = [FileInput {
        path: "binary.csv",
        contents: &[0xff, 0xfe, 0x00, 0x41],
    }];
    let batch = ingest_files(&inputs);
    assert!(batch.parsed.is_empty());
    assert_eq!(batch.reports[0].status, FileStatus::Failed);
}
