use std::collections::HashSet;

use blake3::Hasher;
use racegc_parser::{parse_results_file, ResultFile};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct FileInput<'a> {
    pub path: &'a str,
    pub contents: &'a [u8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Parsed,
    Duplicate,
    Failed,
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: String,
    pub hash: Option<String>,
    pub status: FileStatus,
    pub records: usize,
    pub message: Option<String>,
}

impl FileReport {
    /// Report for a file that could not be read or parsed.
    pub fn failed(path: impl Into<String>, hash: Option<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            hash,
            status: FileStatus::Failed,
            records: 0,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct IngestionBatch {
    pub parsed: Vec<ResultFile>,
    pub reports: Vec<FileReport>,
}

impl IngestionBatch {
    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.reports
            .iter()
            .filter(|report| report.status == FileStatus::Failed)
    }
}

/// Parses every input, isolating failures to the file that caused them.
///
/// A file whose bytes match an earlier input of the same batch is reported as
/// a duplicate and not parsed again.
pub fn ingest_files(inputs: &[FileInput<'_>]) -> IngestionBatch {
    let mut batch = IngestionBatch::default();
    let mut seen_hashes = HashSet::new();

    for input in inputs {
        let hash = compute_hash(input.contents);
        if !seen_hashes.insert(hash.clone()) {
            debug!(path = input.path, %hash, "skipping duplicate results file");
            batch.reports.push(FileReport {
                path: input.path.to_string(),
                hash: Some(hash),
                status: FileStatus::Duplicate,
                records: 0,
                message: None,
            });
            continue;
        }

        let Ok(content) = std::str::from_utf8(input.contents) else {
            warn!(path = input.path, "results file is not valid UTF-8");
            batch.reports.push(FileReport::failed(
                input.path,
                Some(hash),
                "file contents were not valid UTF-8",
            ));
            continue;
        };

        match parse_results_file(input.path, content) {
            Ok(parsed) => {
                debug!(path = input.path, records = parsed.len(), "parsed results file");
                batch.reports.push(FileReport {
                    path: input.path.to_string(),
                    hash: Some(hash),
                    status: FileStatus::Parsed,
                    records: parsed.len(),
                    message: None,
                });
                batch.parsed.push(parsed);
            }
            Err(err) => {
                warn!(path = input.path, error = %err, "skipping malformed results file");
                batch
                    .reports
                    .push(FileReport::failed(input.path, Some(hash), err.to_string()));
            }
        }
    }

    batch
}

fn compute_hash(contents: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(contents);
    hasher.finalize().to_hex().to_string()
}
