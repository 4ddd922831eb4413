use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use racegc_parser::parse_results_payload;
use tracing::{info, warn};

use crate::classification::{classify, ClassificationOutcome};
use crate::config::Settings;
use crate::error::{PipelineError, Result};
use crate::ingestion::{ingest_files, FileInput, FileReport};
use crate::output::{write_classification, write_export};

#[derive(Debug)]
pub struct RunReport {
    pub discovered: Vec<PathBuf>,
    pub reports: Vec<FileReport>,
    pub outcome: ClassificationOutcome,
    /// Set only when a classification file was written.
    pub written: Option<PathBuf>,
}

/// Classifies every results file in the configured input directory.
///
/// Missing directories are created. An empty directory, or one where nothing
/// survives parsing and filtering, completes without writing any output.
pub fn run_classification(settings: &Settings) -> Result<RunReport> {
    for dir in [&settings.input_dir, &settings.output_dir] {
        fs::create_dir_all(dir).map_err(|err| PipelineError::io(dir, err))?;
    }

    let discovered = discover_files(&settings.input_dir, &settings.file_pattern)?;
    if discovered.is_empty() {
        info!(dir = %settings.input_dir.display(), "no results files found");
        return Ok(RunReport {
            discovered,
            reports: Vec::new(),
            outcome: ClassificationOutcome::NothingToProcess,
            written: None,
        });
    }
    info!(count = discovered.len(), "discovered results files");

    let mut unreadable = Vec::new();
    let mut loaded = Vec::with_capacity(discovered.len());
    for path in &discovered {
        let shown = path.display().to_string();
        match fs::read(path) {
            Ok(contents) => loaded.push((shown, contents)),
            Err(err) => {
                warn!(path = %shown, error = %err, "failed to read results file");
                unreadable.push(FileReport::failed(shown, None, err.to_string()));
            }
        }
    }

    let inputs: Vec<FileInput<'_>> = loaded
        .iter()
        .map(|(path, contents)| FileInput {
            path: path.as_str(),
            contents: contents.as_slice(),
        })
        .collect();
    let mut batch = ingest_files(&inputs);
    batch.reports.extend(unreadable);

    let outcome = if batch.parsed.is_empty() {
        ClassificationOutcome::NoValidResults
    } else {
        classify(&batch.parsed)
    };

    let written = match &outcome {
        ClassificationOutcome::Ranked(classification) => {
            let path = settings.output_path();
            write_classification(&path, &classification.entries)?;
            Some(path)
        }
        _ => {
            info!("no valid results after filtering; nothing written");
            None
        }
    };

    Ok(RunReport {
        discovered,
        reports: batch.reports,
        outcome,
        written,
    })
}

/// Files in `dir` whose names match `pattern`, sorted by path.
///
/// Only `pattern` is glob syntax; brackets or stars in `dir` match literally.
pub fn discover_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.to_str().ok_or_else(|| {
        PipelineError::Validation(format!("path {} is not valid UTF-8", dir.display()))
    })?;
    let full = Path::new(&glob::Pattern::escape(dir)).join(pattern);
    let full = full.to_str().ok_or_else(|| {
        PipelineError::Validation(format!("pattern {pattern} is not valid UTF-8"))
    })?;

    let mut files = Vec::new();
    for entry in glob::glob(full)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(err) => warn!(error = %err, "could not read path from glob pattern"),
        }
    }
    files.sort();
    Ok(files)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedExport {
    pub path: PathBuf,
    pub rows: usize,
}

/// Converts a JSON results payload into a results export inside `output_dir`.
pub fn convert_json(json_path: &Path, output_dir: &Path) -> Result<Option<ConvertedExport>> {
    let content = fs::read_to_string(json_path).map_err(|err| PipelineError::io(json_path, err))?;
    let export = parse_results_payload(&content)?;
    if export.rows.is_empty() {
        info!(path = %json_path.display(), "no results found in JSON payload");
    }

    let written = write_export(output_dir, &export, Local::now().naive_local())?;
    Ok(written.map(|path| ConvertedExport {
        path,
        rows: export.rows.len(),
    }))
}
