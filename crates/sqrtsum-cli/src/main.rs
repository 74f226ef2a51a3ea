use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use sqrtsum_core::{
    partial_sums, to_canonical_json_string, NegativePolicy, SqrtSumError, SumOpts, SumReport,
};
use tracing::info;

mod logging;

#[derive(Parser, Debug)]
#[command(name = "sqrtsum", version, about = "Sum of square roots over 1..=n")]
struct Cli {
    /// Inclusive upper bound of the summation (default 20).
    #[arg(long, allow_negative_numbers = true)]
    n: Option<i64>,
    /// Digits printed after the decimal point (default 6).
    #[arg(long)]
    precision: Option<usize>,
    /// YAML file with `n`, `precision` and `negative` keys.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Reject a negative upper bound instead of summing an empty range.
    #[arg(long)]
    strict: bool,
    /// Print the canonical JSON report instead of the bare decimal.
    #[arg(long)]
    json: bool,
    /// Log every partial sum at debug level on stderr.
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.trace)?;

    let opts = resolve_opts(&cli)?;
    info!(n = opts.n, precision = opts.precision, negative = ?opts.negative, "resolved options");

    let report = SumReport::compute(&opts)?;
    if cli.trace {
        // Replays the same ascending accumulation so each term reaches the log.
        let replayed = partial_sums(opts.n).last().unwrap_or(0.0);
        debug_assert_eq!(replayed.to_bits(), report.value.to_bits());
    }

    let mut stdout = io::stdout().lock();
    if cli.json {
        writeln!(stdout, "{}", to_canonical_json_string(&report)?)?;
    } else {
        writeln!(stdout, "{}", report.formatted)?;
    }
    Ok(())
}

/// Flags override the config file, which overrides the defaults.
fn resolve_opts(cli: &Cli) -> Result<SumOpts, SqrtSumError> {
    let mut opts = match &cli.config {
        Some(path) => SumOpts::from_yaml_path(path)?,
        None => SumOpts::default(),
    };
    if let Some(n) = cli.n {
        opts.n = n;
    }
    if let Some(precision) = cli.precision {
        opts.precision = precision;
    }
    if cli.strict {
        opts.negative = NegativePolicy::Reject;
    }
    Ok(opts.sanitised())
}
