use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use racegc_core::ingestion::FileStatus;
use racegc_core::{ClassificationEntry, ClassificationOutcome, RunReport, Settings};

pub fn print_run(settings: &Settings, report: &RunReport) {
    if report.discovered.is_empty() {
        println!(
            "No results files found in {}. Nothing to process.",
            settings.input_dir.display()
        );
        return;
    }

    println!("Found {} results file(s):", report.discovered.len());
    for path in &report.discovered {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("  - {name}");
    }

    for file in &report.reports {
        match file.status {
            FileStatus::Parsed => {}
            FileStatus::Duplicate => {
                println!("  -> Skipped duplicate file: {}", file.path);
            }
            FileStatus::Failed => {
                eprintln!(
                    "  -> ERROR: Skipping {}. Reason: {}",
                    file.path,
                    file.message.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    match &report.outcome {
        ClassificationOutcome::Ranked(classification) => {
            let stats = &classification.stats;
            println!("\n--- Classification Summary ---");
            println!("  Files merged:              {}", stats.files);
            println!("  Records read:              {}", stats.records_read);
            println!("  After Bot/DNF filtering:   {}", stats.qualifying_records);
            println!("  Dropped (no valid time):   {}", stats.unparseable_times);
            println!("  Unique participants:       {}", stats.participants);
            if let Some(path) = &report.written {
                println!("\n✅ General classification saved to {}", path.display());
            }
            if settings.preview_rows > 0 {
                println!("\nTop {} rows:", settings.preview_rows.min(stats.participants));
                println!("{}", preview_table(&classification.entries, settings.preview_rows));
            }
        }
        ClassificationOutcome::NothingToProcess | ClassificationOutcome::NoValidResults => {
            println!("\nNo valid results to process. No output written.");
        }
    }
}

fn preview_table(entries: &[ClassificationEntry], rows: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Position", "Name", "Team", "Country", "Time", "Gender", "ARR", "ARRBand",
        "EventRating", "AgeBand",
    ]);
    for entry in entries.iter().take(rows) {
        table.add_row(vec![
            entry.rank.to_string(),
            entry.name.clone(),
            entry.team.clone(),
            entry.country.clone(),
            entry.time_formatted.clone(),
            entry.gender.clone(),
            entry.arr.clone(),
            entry.arr_band.clone(),
            entry.event_rating.clone(),
            entry.age_band.clone(),
        ]);
    }
    table
}
