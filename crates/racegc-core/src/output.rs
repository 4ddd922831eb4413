use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use racegc_parser::formats::schema::EXPORT_TITLE;
use racegc_parser::EventExport;
use tracing::info;

use crate::classification::ClassificationEntry;
use crate::error::{PipelineError, Result};

/// Writes the classification CSV. The target only ever holds a complete file.
pub fn write_classification(path: &Path, entries: &[ClassificationEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(PipelineError::Validation(
            "refusing to write an empty classification".to_string(),
        ));
    }

    persist_atomically(path, |file| {
        let mut writer = csv::Writer::from_writer(file);
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush().map_err(|err| PipelineError::io(path, err))?;
        Ok(())
    })?;

    info!(path = %path.display(), rows = entries.len(), "wrote general classification");
    Ok(())
}

/// File name used for a converted JSON payload.
pub fn export_file_name(export: &EventExport, now: NaiveDateTime) -> String {
    format!(
        "TPVirtual-Results-Event{}-Pen{}-{}.csv",
        export.event_key,
        export.pen,
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Writes a converted payload in results-export layout.
///
/// Quoting follows the rendered text: any field that reads as a number is
/// left bare, whatever its JSON type was, and every other field is quoted.
///
/// Returns `None` without touching the filesystem when the payload has no
/// results.
pub fn write_export(dir: &Path, export: &EventExport, now: NaiveDateTime) -> Result<Option<PathBuf>> {
    if export.rows.is_empty() {
        return Ok(None);
    }

    let path = dir.join(export_file_name(export, now));
    persist_atomically(&path, |file| {
        write!(file, "\u{feff}{EXPORT_TITLE}\n\n").map_err(|err| PipelineError::io(&path, err))?;
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::NonNumeric)
            .from_writer(file);
        for row in &export.rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(|err| PipelineError::io(&path, err))?;
        Ok(())
    })?;

    info!(path = %path.display(), rows = export.rows.len(), "wrote results export");
    Ok(Some(path))
}

/// Runs `write` against a sibling temporary file, then renames it over `path`.
fn persist_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|err| PipelineError::io(parent, err))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| PipelineError::Validation(format!("{} has no file name", path.display())))?;
    let tmp_path = parent.join(format!(".{}.tmp", file_name.to_string_lossy()));

    let result = File::create(&tmp_path)
        .map_err(|err| PipelineError::io(&tmp_path, err))
        .and_then(|mut file| {
            write(&mut file)?;
            file.sync_all().map_err(|err| PipelineError::io(&tmp_path, err))
        })
        .and_then(|()| fs::rename(&tmp_path, path).map_err(|err| PipelineError::io(path, err)));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
