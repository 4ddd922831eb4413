use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use racegc_core::{convert_json, run_classification, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod summary;

#[derive(Parser, Debug)]
#[command(author, version, about = "Merge race result exports into a general classification", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank every results export in the input directory into one classification
    Classify(ClassifyArgs),
    /// Convert a JSON results payload into a results export
    Convert(ConvertArgs),
}

#[derive(Args, Debug, Default)]
struct ClassifyArgs {
    /// TOML file with input/output settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding the per-event results exports
    #[arg(short, long)]
    input_dir: Option<PathBuf>,
    /// Directory receiving the classification file
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Name of the classification file
    #[arg(long)]
    output_file: Option<String>,
    /// Number of leading rows to preview
    #[arg(long)]
    preview: Option<usize>,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// JSON payload received from the results API
    json_file: PathBuf,
    /// Folder the results export is written to
    output_folder: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match cli.command {
        Command::Classify(args) => handle_classify(args),
        Command::Convert(args) => handle_convert(args),
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn resolve_settings(args: ClassifyArgs) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.apply_env();

    if let Some(dir) = args.input_dir {
        settings.input_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        settings.output_dir = dir;
    }
    if let Some(file) = args.output_file {
        settings.output_file = file;
    }
    if let Some(rows) = args.preview {
        settings.preview_rows = rows;
    }
    Ok(settings)
}

fn handle_classify(args: ClassifyArgs) -> Result<()> {
    let settings = resolve_settings(args)?;
    info!(
        input = %settings.input_dir.display(),
        output = %settings.output_path().display(),
        "starting classification run"
    );

    let report = run_classification(&settings).context("classification run failed")?;
    summary::print_run(&settings, &report);
    Ok(())
}

fn handle_convert(args: ConvertArgs) -> Result<()> {
    if !args.json_file.exists() {
        bail!("JSON file not found: {}", args.json_file.display());
    }

    match convert_json(&args.json_file, &args.output_folder)
        .with_context(|| format!("failed to convert {}", args.json_file.display()))?
    {
        Some(converted) => {
            println!("✓ Converted JSON to CSV: {}", converted.path.display());
            println!("  - {} results processed", converted.rows);
        }
        None => println!("No results found in JSON data"),
    }
    Ok(())
}
