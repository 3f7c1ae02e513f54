use anyhow::{Context, Result};
use attempt_chain::{config, install_quiet_hook, Attempt, CaptureConfig};
use clap::{Parser, Subcommand, ValueHint};
use env_logger::Env;
use log::{info, warn, LevelFilter};
use std::path::PathBuf;
#[derive(Parser, Debug)]
#[command(
    name = "attempt-demo",
    author,
    version,
    about = "Runs a small chain of fallible steps through an Attempt",
    long_about = r#"
attempt-demo - walk-through of an Attempt chain

Each step runs inside a capture region: an error it returns or a panic it
raises turns the chain into a failure, and later steps are skipped until a
recovery step handles it.

EXAMPLES:
  attempt-demo divide 84 2                  # success: 42
  attempt-demo divide 84 0                  # captured panic: attempt to divide by zero
  attempt-demo divide 84 zero               # parse failure, division never runs
  attempt-demo divide 84 0 --fallback 0     # failure recovered to 0
  attempt-demo -vv --report-panics divide 1 0
    "#
)]
struct Opt {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[arg(
        long,
        help = "Let captured panics reach the default panic hook",
        long_help = "By default panics raised inside a capture region are kept off \
                    stderr. With this flag they are reported like any other panic."
    )]
    report_panics: bool,
    #[arg(
        long,
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        help = "JSON capture configuration to load instead of the environment"
    )]
    config: Option<PathBuf>,
}
#[derive(Subcommand, Debug)]
enum Commands {
    Divide {
        #[arg(value_name = "NUMERATOR", allow_hyphen_values = true)]
        numerator: String,
        #[arg(value_name = "DENOMINATOR", allow_hyphen_values = true)]
        denominator: String,
        #[arg(
            long,
            value_name = "N",
            allow_hyphen_values = true,
            help = "Value to recover with when any step fails"
        )]
        fallback: Option<i64>,
    },
}
fn main() -> Result<()> {
    let opt = Opt::parse();
    let log_level = match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_env(
            Env::default().default_filter_or(log_level.to_string()),
        )
        .init();
    let mut capture = match &opt.config {
        Some(path) => CaptureConfig::load(path)?,
        None => CaptureConfig::from_env(),
    };
    if opt.report_panics {
        capture.report_captured_panics = true;
    }
    config::install(capture);
    install_quiet_hook();
    match opt.command {
        Commands::Divide { numerator, denominator, fallback } => {
            handle_divide(&numerator, &denominator, fallback)?;
        }
    }
    Ok(())
}
fn parse_operand(name: &str, raw: &str) -> Attempt<i64, String> {
    Attempt::evaluate(|| {
        raw.trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid {} {:?}: {}", name, raw, e))
    })
}
fn divide(numerator: &str, denominator: &str, fallback: Option<i64>) -> Attempt<i64, String> {
    let quotient = parse_operand("numerator", numerator)
        .and_then(|n| parse_operand("denominator", denominator).map(|d| (n, d)))
        .map(|(n, d)| n / d)
        .tap(|q| info!("quotient computed: {}", q));
    match fallback {
        Some(value) => {
            quotient
                .recover_value(|error| {
                    warn!("recovering with {} after: {}", value, error);
                    value
                })
        }
        None => quotient,
    }
}
fn handle_divide(numerator: &str, denominator: &str, fallback: Option<i64>) -> Result<()> {
    let quotient = divide(numerator, denominator, fallback);
    info!("chain finished as {}", quotient);
    let value = quotient
        .into_result()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("cannot divide {} by {}", numerator, denominator))?;
    println!("{}", value);
    Ok(())
}
