//! paxmsg-eval — evaluate the passenger-messaging rules for one flight.
//!
//! Loads the flight list and the full rule set, resolves the flight by id,
//! evaluates every rule at a single `now` and prints
//! `{"results":[{"ruleId":...,"message":...}]}` on stdout.
//! Logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use paxmsg_core::parse_timestamp;
use paxmsg_rules::loader::{find_flight, load_flights, RuleLoader};
use paxmsg_rules::schema::{EvaluationResult, Rule};
use paxmsg_rules::templates::unknown_placeholders;
use paxmsg_rules::RuleEvaluator;

// ── CLI ─────────────────────────────────────────────────────────────

/// Evaluate automated passenger-messaging rules against a flight.
#[derive(Parser, Debug)]
#[command(name = "paxmsg-eval", version, about)]
struct Cli {
    /// Id of the flight to evaluate.
    #[arg(long)]
    flight_id: String,

    /// Flight list file (JSON or YAML). Defaults to `FLIGHTS_PATH`.
    #[arg(long)]
    flights: Option<PathBuf>,

    /// Rule file or directory. Defaults to `RULES_PATH`.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Evaluation time as RFC 3339. Defaults to the current time.
    #[arg(long)]
    now: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct EvaluateResponse {
    results: Vec<EvaluationResult>,
}

/// Warn about template tokens the renderer will leave as-is.
fn warn_unknown_placeholders(rules: &[Rule]) {
    for rule in rules.iter().filter(|r| r.is_active) {
        let unknown = unknown_placeholders(&rule.message_template);
        if !unknown.is_empty() {
            warn!(rule_id = %rule.id, placeholders = ?unknown, "template has unsupported placeholders");
        }
    }
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    paxmsg_core::config::load_dotenv();
    let config = paxmsg_core::Config::from_env();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    let cli = Cli::parse();
    config.log_summary();

    let now: DateTime<Utc> = match cli.now.as_deref() {
        Some(raw) => parse_timestamp(raw).context("invalid --now")?,
        None => Utc::now(),
    };

    let flights_path = cli.flights.unwrap_or(config.sources.flights_path);
    let flights = load_flights(&flights_path)
        .with_context(|| format!("failed to load flights from {}", flights_path.display()))?;
    let flight = find_flight(&flights, &cli.flight_id)?;

    let loader = RuleLoader::new(cli.rules.unwrap_or(config.sources.rules_path));
    let rules = loader
        .load_all()
        .with_context(|| format!("failed to load rules from {}", loader.rules_path().display()))?;
    warn_unknown_placeholders(&rules);

    let results = RuleEvaluator::evaluate(flight, &rules, now)
        .with_context(|| format!("evaluation failed for flight {}", flight.id))?;
    info!(
        flight_id = %flight.id,
        now = %now.to_rfc3339(),
        matched = results.len(),
        "evaluated rules"
    );

    let response = EvaluateResponse { results };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);
    Ok(())
}
