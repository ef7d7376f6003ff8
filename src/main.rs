//! Command-line form for the sick-leave calculator.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sick_leave_calculator::config::{CompensationPolicy, ConfigLoader};
use sick_leave_calculator::presenter::{FormInput, Notifier, OutputField, Presenter};

/// Calculate sick-leave compensation paid by the employer and the
/// health-insurance fund.
#[derive(Debug, Parser)]
#[command(name = "sick-leave", version, about)]
struct Cli {
    /// Average monthly income (digits only)
    #[arg(long, allow_hyphen_values = true)]
    income: String,

    /// Number of sick-leave days (digits only)
    #[arg(long, allow_hyphen_values = true)]
    days: String,

    /// The sick leave is a tuberculosis case
    #[arg(long)]
    tuberculosis: bool,

    /// Directory containing policy.yaml (defaults to the statutory policy)
    #[arg(long, env = "SICK_LEAVE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the audit trace as JSON
    #[arg(long)]
    explain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Reports notifications on stderr.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

fn load_policy(config: Option<&PathBuf>) -> Result<CompensationPolicy> {
    match config {
        Some(dir) => {
            let loader = ConfigLoader::load(dir)
                .with_context(|| format!("loading policy from {}", dir.display()))?;
            Ok(loader.into_policy())
        }
        None => Ok(CompensationPolicy::default()),
    }
}

fn render_text(output: &BTreeMap<OutputField, String>) {
    for (field, text) in output {
        println!("{}: {}", field.label(), text);
    }
}

fn render_json(output: &BTreeMap<OutputField, String>) -> Result<()> {
    let fields: serde_json::Map<String, serde_json::Value> = output
        .iter()
        .map(|(field, text)| (field.key().to_string(), serde_json::Value::from(text.as_str())))
        .collect();
    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("sick-leave v{}", env!("CARGO_PKG_VERSION"));

    let policy = load_policy(cli.config.as_ref())?;
    let form = FormInput::new(cli.income, cli.days, cli.tuberculosis);

    let output: BTreeMap<OutputField, String> = BTreeMap::new();
    let mut presenter = Presenter::new(output, StderrNotifier).with_policy(policy);
    let audited = match presenter.submit_audited(&form) {
        Ok(audited) => audited,
        Err(_) => return Ok(ExitCode::FAILURE),
    };
    let (output, _) = presenter.into_parts();

    match cli.format {
        OutputFormat::Text => render_text(&output),
        OutputFormat::Json => render_json(&output)?,
    }

    if cli.explain {
        println!("{}", serde_json::to_string_pretty(&audited.audit_trace)?);
    }

    Ok(ExitCode::SUCCESS)
}
