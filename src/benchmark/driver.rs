use std::io::Write;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};
use tracing::{debug, info, trace};

use crate::benchmark::config::SimulationConfig;
use crate::chart::{bars, Chart};
use crate::error::SortError;
use crate::generator::SampleSource;
use crate::pacing::{Delay, FixedDelay};
use crate::perf::{Percentiles, SortTimer};
use crate::selector::top_n;
use crate::sorting::{is_sorted_by_price, SortStrategy, TimSort};
use crate::types::{History, Record};

/// Outcome of one strategy's full pass over all iterations
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub algorithm: &'static str,
    pub iterations: usize,
    /// History length handed to the first sort of this run
    pub first_sorted_len: usize,
    pub final_len: usize,
    /// Wall time of the whole run: sorting, selection, rendering and delays
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs")]
    pub elapsed: Duration,
    /// Time spent inside the sort calls alone
    pub sort_latency: Option<Percentiles>,
    /// Top-N of the last iteration
    pub top: Vec<Record>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub runs: Vec<RunReport>,
}

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Runs every configured strategy against a growing sample history.
///
/// Each iteration appends one sample, sorts a copy of the whole history,
/// extracts the top-N from the result and periodically renders it.
pub struct Driver<S, D, C, W> {
    config: SimulationConfig,
    source: S,
    delay: D,
    chart: C,
    console: W,
}

impl<S, C, W> Driver<S, FixedDelay, C, W>
where
    S: SampleSource,
    C: Chart,
    W: Write,
{
    /// Driver that pauses for `config.delay_ms` after every iteration
    pub fn paced(
        config: SimulationConfig,
        source: S,
        chart: C,
        console: W,
    ) -> Result<Self, SortError> {
        let delay = FixedDelay::new(config.delay());
        Self::new(config, source, delay, chart, console)
    }

    pub fn delay(&self) -> &FixedDelay {
        &self.delay
    }
}

impl<S, D, C, W> Driver<S, D, C, W>
where
    S: SampleSource,
    D: Delay,
    C: Chart,
    W: Write,
{
    pub fn new(
        config: SimulationConfig,
        source: S,
        delay: D,
        chart: C,
        console: W,
    ) -> Result<Self, SortError> {
        config.validate()?;

        Ok(Self {
            config,
            source,
            delay,
            chart,
            console,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    /// Run every configured algorithm in order.
    ///
    /// With `carry_history` set, `history` keeps growing across runs, so each
    /// strategy sorts strictly larger inputs than the one before it.
    pub fn run_all(&mut self, history: &mut History) -> Result<SimulationReport, SortError> {
        let algorithms = self.config.algorithms.clone();
        let mut runs = Vec::with_capacity(algorithms.len());

        for algorithm in algorithms {
            let strategy = algorithm.strategy();

            let report = if self.config.carry_history {
                self.run_strategy(strategy.as_ref(), history)?
            } else {
                let mut fresh = History::with_capacity(self.config.iterations);
                self.run_strategy(strategy.as_ref(), &mut fresh)?
            };

            runs.push(report);
        }

        Ok(SimulationReport {
            config: self.config.clone(),
            runs,
        })
    }

    pub fn run_strategy(
        &mut self,
        strategy: &dyn SortStrategy,
        history: &mut History,
    ) -> Result<RunReport, SortError> {
        let name = strategy.name();
        let iterations = self.config.iterations;

        writeln!(self.console, "\nTesting with {}:", name)?;
        info!(algorithm = name, history_len = history.len(), "run started");

        let mut timer = SortTimer::new(iterations);
        let mut first_sorted_len = None;
        let mut top = Vec::new();

        let start = Instant::now();

        for i in 0..iterations {
            history.push(self.source.generate());

            let snapshot = history.snapshot();
            first_sorted_len.get_or_insert(snapshot.len());

            let sorted = timer.record(|| strategy.sort(snapshot));

            if self.config.verify {
                let reference = TimSort.sort(history.snapshot());
                verify(name, &reference, &sorted)?;
            }

            top = top_n(&sorted, self.config.top_n);

            debug!(
                algorithm = name,
                iteration = i,
                history_len = history.len(),
                sort_ns = timer
                    .last()
                    .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)),
                "sorted history"
            );

            if i % self.config.render_every == 0 {
                trace!(algorithm = name, iteration = i, bars = top.len(), "rendering top-n");
                self.chart.render(&bars(&top))?;
            }

            self.delay.pause();
        }

        let elapsed = start.elapsed();

        writeln!(
            self.console,
            "Total time for sorting {} stock prices with {}: {:.4} seconds",
            iterations,
            name,
            elapsed.as_secs_f64()
        )?;
        info!(
            algorithm = name,
            elapsed_secs = elapsed.as_secs_f64(),
            sort_secs = timer.total().as_secs_f64(),
            history_len = history.len(),
            "run finished"
        );

        Ok(RunReport {
            algorithm: name,
            iterations,
            first_sorted_len: first_sorted_len.unwrap_or(0),
            final_len: history.len(),
            elapsed,
            sort_latency: timer.percentiles(),
            top,
        })
    }
}

/// Compare a strategy's output with the stable reference ordering of the same input
fn verify(algorithm: &'static str, reference: &[Record], sorted: &[Record]) -> Result<(), SortError> {
    if sorted.len() != reference.len() {
        return Err(SortError::Verification {
            algorithm,
            reason: format!("expected {} records, got {}", reference.len(), sorted.len()),
        });
    }

    if !is_sorted_by_price(sorted) {
        return Err(SortError::Verification {
            algorithm,
            reason: "prices are not in non-decreasing order".to_string(),
        });
    }

    if let Some(pos) = reference
        .iter()
        .zip(sorted)
        .position(|(a, b)| a.price() != b.price())
    {
        return Err(SortError::Verification {
            algorithm,
            reason: format!("price at position {} does not match the input", pos),
        });
    }

    Ok(())
}
