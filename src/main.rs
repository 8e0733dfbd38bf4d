use std::io::{stdout, Write};

use anyhow::{Context, Result};
use clap::Parser;
use numtally::generator::{DEFAULT_COUNT, DEFAULT_HIGH, DEFAULT_LOW};
use numtally::report::DEFAULT_TOP;
use numtally::{
    seeded_rng, Error, FrequencyCounter, Generator, OutputFormat, Report, SampleRange,
};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of random integers to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Inclusive lower bound of generated values
    #[arg(long, default_value_t = DEFAULT_LOW, allow_hyphen_values = true)]
    low: i64,

    /// Inclusive upper bound of generated values
    #[arg(long, default_value_t = DEFAULT_HIGH, allow_hyphen_values = true)]
    high: i64,

    /// How many of the most common values to report
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format: plain or json
    #[arg(short, long, default_value = "plain")]
    format: OutputFormat,

    /// Do not print the generated sequence
    #[arg(long)]
    no_sample: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let range = SampleRange::new(args.low, args.high).context("Failed to build sample range")?;
    let mut rng = seeded_rng(args.seed);
    let sample = Generator::new(args.count, range).generate(&mut rng);

    let counter: FrequencyCounter<i64> = sample.iter().copied().collect();
    debug!(distinct = counter.len(), total = counter.total(), "tallied sample");

    let top = counter.most_common(args.top);
    let shown = if args.no_sample { None } else { Some(&sample[..]) };
    let report = Report::new(shown, top);

    let stdout = stdout();
    let mut out = stdout.lock();
    let written = report
        .write_to(&mut out, args.format)
        .and_then(|_| out.flush().map_err(Error::from));
    match written {
        // Reader went away (e.g. `| head -1`); nothing left to do.
        Err(e) if e.is_broken_pipe() => {
            debug!("stdout closed early");
            return Ok(());
        }
        other => other.context("Failed to write report")?,
    }

    info!(
        count = sample.len(),
        distinct = counter.len(),
        reported = report.top().len(),
        "done"
    );
    Ok(())
}
