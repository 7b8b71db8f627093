//! fl-core CLI: run both fairness policies over an applicant CSV and write
//! the decisions payload.

use clap::Parser;
use fl_common::{Policy, Result, RunMeta};
use fl_core::exit_codes::ExitCode;
use fl_core::{assemble, engine, fairness, ingest, threshold};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fl-core",
    about = "Loan approval fairness engine: equality of opportunity vs equality of outcomes",
    version
)]
struct Cli {
    /// Applicant dataset (CSV with HMDA-style columns)
    input: PathBuf,

    /// Fraction of applicants to approve, globally and per subgroup
    #[arg(long, default_value_t = 0.5)]
    target_rate: f64,

    /// Where to write the decisions JSON payload
    #[arg(long, default_value = "decisions.json")]
    output: PathBuf,

    /// Print the full analysis result as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "info", env = "FL_LOG")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(err) = run(&cli) {
        tracing::error!(code = err.code(), %err, "analysis failed");
        eprintln!("error: {err}");
        std::process::exit(ExitCode::from_error(&err).as_i32());
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // Reject a bad rate before spending time on ingest.
    threshold::validate_rate(cli.target_rate)?;

    let ingested = ingest::load_applicants(&cli.input)?;
    let table = &ingested.table;

    let opportunity = engine::run_policy(table, cli.target_rate, Policy::Opportunity)?;
    let outcomes = engine::run_policy(table, cli.target_rate, Policy::Outcomes)?;
    let opportunity_report = fairness::aggregate(&opportunity.decisions, table);
    let outcomes_report = fairness::aggregate(&outcomes.decisions, table);

    let result = assemble::assemble(
        RunMeta::capture(),
        cli.target_rate,
        table.len(),
        opportunity,
        opportunity_report,
        outcomes,
        outcomes_report,
    );

    let file = std::fs::File::create(&cli.output)?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &result)?;
    writer.flush()?;
    tracing::info!(path = %cli.output.display(), run_id = %result.run_id, "decisions written");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", fl_report::render_summary(&result));
    }

    Ok(())
}
