//! Batch processing command for multiple resume text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use resumex_core::models::config::ResumexConfig;
use resumex_core::{DecodedDocument, HeuristicResumeParser, ResumeParser, SourceFormat};

use super::extract::{format_report, ExtractionReport, OutputFormat, SourceArg};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Container format the texts were decoded from
    #[arg(short, long, value_enum, default_value = "pdf")]
    source: SourceArg,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers (default from config)
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    index: usize,
    path: PathBuf,
    report: Option<ExtractionReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        ResumexConfig::from_file(Path::new(path))?
    } else {
        ResumexConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(output_dir) = &args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    // Set up progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = HeuristicResumeParser::new()
        .with_email_name_fallback(config.extraction.email_name_fallback);

    let jobs = args.jobs.unwrap_or(config.batch.jobs).max(1).min(files.len());
    debug!("Using {} worker threads", jobs);

    let next_index = AtomicUsize::new(0);
    let abort = AtomicBool::new(false);

    // Workers pull indices from a shared counter; each collects its results
    // locally and the batches are merged and re-sorted after the join.
    let mut results: Vec<FileResult> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(jobs);

        for _ in 0..jobs {
            handles.push(scope.spawn(|| {
                let mut local = Vec::new();

                loop {
                    if abort.load(Ordering::SeqCst) {
                        break;
                    }
                    let index = next_index.fetch_add(1, Ordering::SeqCst);
                    if index >= files.len() {
                        break;
                    }

                    let path = &files[index];
                    let file_start = Instant::now();
                    let outcome = process_single_file(path, &parser, args.source);
                    let processing_time_ms = file_start.elapsed().as_millis() as u64;

                    let result = match outcome {
                        Ok(report) => FileResult {
                            index,
                            path: path.clone(),
                            report: Some(report),
                            error: None,
                            processing_time_ms,
                        },
                        Err(e) => {
                            let error_msg = e.to_string();
                            if args.continue_on_error {
                                warn!("Failed to process {}: {}", path.display(), error_msg);
                            } else {
                                error!("Failed to process {}: {}", path.display(), error_msg);
                                abort.store(true, Ordering::SeqCst);
                            }
                            FileResult {
                                index,
                                path: path.clone(),
                                report: None,
                                error: Some(error_msg),
                                processing_time_ms,
                            }
                        }
                    };

                    local.push(result);
                    pb.inc(1);
                }

                local
            }));
        }

        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("worker thread panicked"))
            .collect()
    });

    results.sort_by_key(|r| r.index);
    pb.finish_with_message("Complete");

    if !args.continue_on_error {
        if let Some(result) = results.iter().find(|r| r.error.is_some()) {
            anyhow::bail!(
                "Processing failed for {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    // Write outputs
    let successful: Vec<_> = results.iter().filter(|r| r.report.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    for result in &successful {
        if let (Some(report), Some(output_dir)) = (&result.report, &args.output_dir) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("resume");

            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = format_report(report, args.format)?;

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(
    path: &Path,
    parser: &HeuristicResumeParser,
    source: SourceArg,
) -> anyhow::Result<ExtractionReport> {
    let text = fs::read_to_string(path)?;
    let source = SourceFormat::from(source);
    let document = DecodedDocument::text(source.clone(), text);
    let profile = parser.parse_document(&document)?;
    Ok(ExtractionReport::new(path, source, profile))
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "name",
        "email",
        "phone",
        "missing",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(report) = &result.report {
            let missing = report
                .missing
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(";");

            wtr.write_record([
                filename,
                "success",
                report.profile.name.as_deref().unwrap_or(""),
                report.profile.email.as_deref().unwrap_or(""),
                report.profile.phone.as_deref().unwrap_or(""),
                &missing,
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
