use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stocksort::benchmark::config::{NUM_ITERATIONS, RENDER_EVERY, TOP_N};
use stocksort::benchmark::{Driver, SimulationConfig};
use stocksort::chart::{Chart, NullChart, TerminalChart};
use stocksort::generator::RandomSource;
use stocksort::pacing::DELAY;
use stocksort::report::{self, Format};
use stocksort::selector::checked_count;
use stocksort::sorting::Algorithm;
use stocksort::types::History;
use stocksort::SortError;

/// Compare sorting algorithms on a growing stream of simulated stock prices
#[derive(Parser)]
#[command(name = "stocksort", version)]
struct Cli {
    /// Samples generated per algorithm
    #[arg(long, default_value_t = NUM_ITERATIONS)]
    iterations: usize,

    /// Number of highest prices tracked
    #[arg(long, default_value_t = TOP_N as i64, allow_negative_numbers = true)]
    top_n: i64,

    /// Render the top prices every N iterations
    #[arg(long, default_value_t = RENDER_EVERY)]
    render_every: usize,

    /// Pause between iterations in milliseconds
    #[arg(long, default_value_t = DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Do not pause between iterations
    #[arg(long)]
    no_delay: bool,

    /// Skip the top-N bar charts
    #[arg(long)]
    no_chart: bool,

    /// Start every algorithm from an empty history
    #[arg(long)]
    fresh_history: bool,

    /// Check every sort against the stable reference ordering
    #[arg(long)]
    verify: bool,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Algorithms to run, in order (default: all five)
    #[arg(long = "algorithm", value_enum)]
    algorithms: Vec<Algorithm>,

    /// Format of the final comparison summary
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

impl Cli {
    fn config(&self) -> Result<SimulationConfig, SortError> {
        let algorithms = if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        };

        let config = SimulationConfig {
            iterations: self.iterations,
            top_n: checked_count(self.top_n)?,
            render_every: self.render_every,
            delay_ms: if self.no_delay { 0 } else { self.delay_ms },
            carry_history: !self.fresh_history,
            verify: self.verify,
            algorithms,
        };
        config.validate()?;

        Ok(config)
    }
}

fn main() -> Result<(), SortError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stocksort=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;

    let source = match cli.seed {
        Some(seed) => RandomSource::seeded(seed)?,
        None => RandomSource::from_os_rng()?,
    };

    let chart: Box<dyn Chart> = if cli.no_chart {
        Box::new(NullChart)
    } else {
        Box::new(TerminalChart::new(io::stdout()))
    };

    let mut history = History::with_capacity(config.iterations * config.algorithms.len());
    let mut driver = Driver::paced(config, source, chart, io::stdout())?;

    let summary = driver.run_all(&mut history)?;
    report::write_summary(&summary, cli.format, io::stdout())?;

    Ok(())
}
