//! Moodlens CLI - Command-line interface for the mood analytics engine
//!
//! Commands:
//! - analyze: Run every analytics layer over an entry file
//! - insights: Generate ranked insights only
//! - validate: Validate mood.entry.v1 input
//! - doctor: Diagnose engine configuration
//! - schema: Print schema information

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use moodlens::analyzer::MoodAnalyzer;
use moodlens::config::AnalyticsConfig;
use moodlens::schema::{self, SCHEMA_VERSION};
use moodlens::types::MoodEntry;
use moodlens::{AnalyticsError, ENGINE_VERSION, PRODUCER_NAME};

/// Moodlens - mood analytics engine
#[derive(Parser)]
#[command(name = "moodlens")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Turn mood entries into statistics, trends, and insights", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every analytics layer over an entry file
    Analyze {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "json-pretty")]
        output_format: OutputFormat,

        /// Mood score at or above which an entry counts as positive
        #[arg(long, default_value = "6")]
        positive_threshold: u8,

        /// Minimum average change before a trend counts as up or down
        #[arg(long, default_value = "0.5")]
        trend_sensitivity: f64,
    },

    /// Generate ranked insights only
    Insights {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "json-pretty")]
        output_format: OutputFormat,

        /// Mood score at or above which an entry counts as positive
        #[arg(long, default_value = "6")]
        positive_threshold: u8,

        /// Minimum average change before a trend counts as up or down
        #[arg(long, default_value = "0.5")]
        trend_sensitivity: f64,
    },

    /// Validate mood.entry.v1 input
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Diagnose engine configuration
    Doctor {
        /// Entry file to sanity-check
        #[arg(long)]
        entries: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Output as JSON schema
        #[arg(long)]
        json_schema: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one entry per line)
    Ndjson,
    /// JSON array of entries
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlensCliError> {
    match cli.command {
        Commands::Analyze {
            input,
            output,
            input_format,
            output_format,
            positive_threshold,
            trend_sensitivity,
        } => cmd_analyze(
            &input,
            &output,
            input_format,
            output_format,
            positive_threshold,
            trend_sensitivity,
        ),

        Commands::Insights {
            input,
            input_format,
            output_format,
            positive_threshold,
            trend_sensitivity,
        } => cmd_insights(
            &input,
            input_format,
            output_format,
            positive_threshold,
            trend_sensitivity,
        ),

        Commands::Validate { input, json } => cmd_validate(&input, json),

        Commands::Doctor { entries, json } => cmd_doctor(entries.as_deref(), json),

        Commands::Schema { json_schema } => cmd_schema(json_schema),
    }
}

fn read_input(path: &PathBuf) -> Result<String, MoodlensCliError> {
    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn parse_entries(data: &str, format: InputFormat) -> Result<Vec<MoodEntry>, MoodlensCliError> {
    let entries = match format {
        InputFormat::Ndjson => schema::parse_ndjson(data)?,
        InputFormat::Json => schema::parse_array(data)?,
    };
    if entries.is_empty() {
        return Err(MoodlensCliError::NoEntries);
    }
    Ok(entries)
}

fn make_config(positive_threshold: u8, trend_sensitivity: f64) -> AnalyticsConfig {
    AnalyticsConfig {
        positive_threshold,
        trend_sensitivity,
        ..AnalyticsConfig::default()
    }
}

fn format_value<T: serde::Serialize>(
    value: &T,
    format: &OutputFormat,
) -> Result<String, MoodlensCliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
    }
}

fn cmd_analyze(
    input: &PathBuf,
    output: &PathBuf,
    input_format: InputFormat,
    output_format: OutputFormat,
    positive_threshold: u8,
    trend_sensitivity: f64,
) -> Result<(), MoodlensCliError> {
    let data = read_input(input)?;
    let entries = parse_entries(&data, input_format)?;

    let analyzer = MoodAnalyzer::new(make_config(positive_threshold, trend_sensitivity));
    let analytics = analyzer.analyze(&entries);

    let rendered = format_value(&analytics, &output_format)?;
    if output.to_string_lossy() == "-" {
        println!("{}", rendered);
    } else {
        fs::write(output, rendered)?;
    }

    Ok(())
}

fn cmd_insights(
    input: &PathBuf,
    input_format: InputFormat,
    output_format: OutputFormat,
    positive_threshold: u8,
    trend_sensitivity: f64,
) -> Result<(), MoodlensCliError> {
    let data = read_input(input)?;
    let entries = parse_entries(&data, input_format)?;

    let analyzer = MoodAnalyzer::new(make_config(positive_threshold, trend_sensitivity));
    let insights = analyzer.generate_insights(&entries);

    println!("{}", format_value(&insights, &output_format)?);
    Ok(())
}

fn cmd_validate(input: &PathBuf, json: bool) -> Result<(), MoodlensCliError> {
    let data = read_input(input)?;
    let report = schema::validate_ndjson(&data);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total entries:   {}", report.total);
        println!("Valid entries:   {}", report.valid);
        println!("Invalid entries: {}", report.issues.len());

        if !report.issues.is_empty() {
            println!("\nErrors:");
            for issue in &report.issues {
                println!("  - Line {}: {}", issue.line, issue.message);
            }
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(MoodlensCliError::ValidationFailed(report.issues.len()))
    }
}

fn cmd_doctor(entries: Option<&std::path::Path>, json: bool) -> Result<(), MoodlensCliError> {
    let mut checks: Vec<DoctorCheck> = Vec::new();

    checks.push(DoctorCheck {
        name: "engine_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Moodlens version {}", ENGINE_VERSION),
    });

    checks.push(DoctorCheck {
        name: "schema_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Input schema: {}", SCHEMA_VERSION),
    });

    if let Some(entries_path) = entries {
        if entries_path.exists() {
            match fs::read_to_string(entries_path) {
                Ok(content) => {
                    let report = schema::validate_ndjson(&content);
                    if report.is_clean() {
                        checks.push(DoctorCheck {
                            name: "entries".to_string(),
                            status: CheckStatus::Ok,
                            message: format!("{} valid entries", report.valid),
                        });
                    } else {
                        checks.push(DoctorCheck {
                            name: "entries".to_string(),
                            status: CheckStatus::Error,
                            message: format!(
                                "{} of {} entries invalid",
                                report.issues.len(),
                                report.total
                            ),
                        });
                    }
                }
                Err(e) => {
                    checks.push(DoctorCheck {
                        name: "entries".to_string(),
                        status: CheckStatus::Error,
                        message: format!("Cannot read entries file: {}", e),
                    });
                }
            }
        } else {
            checks.push(DoctorCheck {
                name: "entries".to_string(),
                status: CheckStatus::Warning,
                message: "Entries file does not exist".to_string(),
            });
        }
    }

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: ENGINE_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Moodlens Doctor Report");
        println!("======================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Warning => "[WARN]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(MoodlensCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

fn cmd_schema(json_schema: bool) -> Result<(), MoodlensCliError> {
    if json_schema {
        println!("{}", get_entry_json_schema());
    } else {
        println!("Input Schema: {}", SCHEMA_VERSION);
        println!();
        println!("Required fields:");
        println!("  - mood_score: integer 1-10");
        println!("  - created_at: RFC 3339 timestamp with offset");
        println!();
        println!("Optional fields:");
        println!("  - id: UUID (generated when absent)");
        println!("  - energy_level: integer 1-10");
        println!("  - stress_level: integer 1-10");
        println!("  - sleep_hours: number 0-24");
        println!("  - from, note, activity, weather, original_text, subject: strings");
    }

    Ok(())
}

fn get_entry_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": SCHEMA_VERSION,
        "description": "Moodlens mood entry schema",
        "type": "object",
        "required": ["mood_score", "created_at"],
        "properties": {
            "id": { "type": "string", "format": "uuid" },
            "mood_score": { "type": "integer", "minimum": 1, "maximum": 10 },
            "created_at": { "type": "string", "format": "date-time" },
            "energy_level": { "type": "integer", "minimum": 1, "maximum": 10 },
            "stress_level": { "type": "integer", "minimum": 1, "maximum": 10 },
            "sleep_hours": { "type": "number", "minimum": 0, "maximum": 24 },
            "from": { "type": "string" },
            "note": { "type": "string" },
            "activity": { "type": "string" },
            "weather": { "type": "string" },
            "original_text": { "type": "string" },
            "subject": { "type": "string" }
        }
    })
    .to_string()
}

// Error types

#[derive(Debug)]
enum MoodlensCliError {
    Io(io::Error),
    Analytics(AnalyticsError),
    Json(serde_json::Error),
    NoEntries,
    ValidationFailed(usize),
    DoctorFailed,
}

impl From<io::Error> for MoodlensCliError {
    fn from(e: io::Error) -> Self {
        MoodlensCliError::Io(e)
    }
}

impl From<AnalyticsError> for MoodlensCliError {
    fn from(e: AnalyticsError) -> Self {
        MoodlensCliError::Analytics(e)
    }
}

impl From<serde_json::Error> for MoodlensCliError {
    fn from(e: serde_json::Error) -> Self {
        MoodlensCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<MoodlensCliError> for CliError {
    fn from(e: MoodlensCliError) -> Self {
        match e {
            MoodlensCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            MoodlensCliError::Analytics(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some(format!("Ensure input matches the {} schema", SCHEMA_VERSION)),
            },
            MoodlensCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            MoodlensCliError::NoEntries => CliError {
                code: "NO_ENTRIES".to_string(),
                message: "No entries found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            MoodlensCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} entries failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
            MoodlensCliError::DoctorFailed => CliError {
                code: "DOCTOR_FAILED".to_string(),
                message: "One or more health checks failed".to_string(),
                hint: Some("Review the doctor report for details".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(serde::Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(serde::Serialize)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}
