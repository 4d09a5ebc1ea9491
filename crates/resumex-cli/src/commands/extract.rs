//! Extract command - pull contact details from a single resume text file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use resumex_core::{
    CandidateProfile, DecodedDocument, HeuristicResumeParser, ProfileField, ResumeParser,
    ResumexConfig, SourceFormat,
};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file with decoded resume content
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Container format the text was decoded from
    #[arg(short, long, value_enum, default_value = "pdf")]
    source: SourceArg,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON report
    Json,
    /// CSV row
    Csv,
    /// Plain text summary
    Text,
}

/// Declared container provenance for the decoded text.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum SourceArg {
    Pdf,
    Docx,
}

impl From<SourceArg> for SourceFormat {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Pdf => SourceFormat::Pdf,
            SourceArg::Docx => SourceFormat::Docx,
        }
    }
}

/// Report emitted for one processed resume.
#[derive(Debug, Serialize)]
pub struct ExtractionReport {
    /// File the decoded text was read from.
    pub file: String,
    /// Declared container format.
    pub source: SourceFormat,
    /// When extraction ran.
    pub extracted_at: DateTime<Utc>,
    /// Extracted contact details.
    pub profile: CandidateProfile,
    /// Fields no strategy could resolve.
    pub missing: Vec<ProfileField>,
}

impl ExtractionReport {
    /// Assemble the report for one processed file.
    pub fn new(file: &Path, source: SourceFormat, profile: CandidateProfile) -> Self {
        Self {
            file: file.display().to_string(),
            source,
            extracted_at: Utc::now(),
            missing: profile.missing_fields(),
            profile,
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        ResumexConfig::from_file(Path::new(path))?
    } else {
        ResumexConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = read_decoded_text(&args.input)?;

    let parser = HeuristicResumeParser::new()
        .with_email_name_fallback(config.extraction.email_name_fallback);

    let source = SourceFormat::from(args.source);
    let document = DecodedDocument::text(source.clone(), text);
    let profile = parser.parse_document(&document)?;

    let report = ExtractionReport::new(&args.input, source, profile);

    // Format output
    let output = format_report(&report, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if config.output.show_missing {
        print_missing_summary(&report);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read a decoded text file, rejecting binary resume containers.
fn read_decoded_text(path: &Path) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "txt" | "text" | "" => Ok(fs::read_to_string(path)?),
        "pdf" | "docx" | "doc" => anyhow::bail!(
            "{} is a binary document; decode it to text first and pass the .txt file",
            path.display()
        ),
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    }
}

/// Missing-field summary for humans; reports stay on stdout, this on stderr.
fn print_missing_summary(report: &ExtractionReport) {
    let total = ProfileField::ALL.len();

    if report.missing.is_empty() {
        eprintln!("{} All {} contact fields resolved", style("✓").green(), total);
    } else {
        let names: Vec<&str> = report.missing.iter().map(|f| f.as_str()).collect();
        eprintln!(
            "{} Resolved {}/{} contact fields; not found: {}",
            style("!").yellow(),
            total - report.missing.len(),
            total,
            names.join(", ")
        );
    }
}

pub fn format_report(report: &ExtractionReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &ExtractionReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // Write header
    wtr.write_record(["file", "name", "email", "phone", "missing"])?;

    let missing = report
        .missing
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(";");

    wtr.write_record([
        report.file.as_str(),
        report.profile.name.as_deref().unwrap_or(""),
        report.profile.email.as_deref().unwrap_or(""),
        report.profile.phone.as_deref().unwrap_or(""),
        &missing,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ExtractionReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("File:   {}\n", report.file));
    output.push_str(&format!("Source: {}\n", report.source));
    output.push('\n');

    output.push_str(&format!(
        "Name:   {}\n",
        report.profile.name.as_deref().unwrap_or("not found")
    ));
    output.push_str(&format!(
        "Email:  {}\n",
        report.profile.email.as_deref().unwrap_or("not found")
    ));
    output.push_str(&format!(
        "Phone:  {}\n",
        report.profile.phone.as_deref().unwrap_or("not found")
    ));

    output
}
