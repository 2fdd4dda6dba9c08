use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::benchmark::{RunReport, SimulationReport};
use crate::error::SortError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Csv,
    Json,
}

/// One CSV line per strategy run
#[derive(Serialize)]
struct SummaryRow {
    algorithm: &'static str,
    iterations: usize,
    first_sorted_len: usize,
    final_len: usize,
    elapsed_secs: f64,
    sort_total_us: f64,
    sort_p50_us: Option<f64>,
    sort_p99_us: Option<f64>,
    sort_max_us: Option<f64>,
}

fn ns_to_us(ns: u64) -> f64 {
    ns as f64 / 1_000.0
}

impl From<&RunReport> for SummaryRow {
    fn from(run: &RunReport) -> Self {
        let latency = run.sort_latency.as_ref();

        SummaryRow {
            algorithm: run.algorithm,
            iterations: run.iterations,
            first_sorted_len: run.first_sorted_len,
            final_len: run.final_len,
            elapsed_secs: run.elapsed.as_secs_f64(),
            sort_total_us: latency
                .map(|p| p.mean * run.iterations as f64 / 1_000.0)
                .unwrap_or(0.0),
            sort_p50_us: latency.map(|p| ns_to_us(p.p50)),
            sort_p99_us: latency.map(|p| ns_to_us(p.p99)),
            sort_max_us: latency.map(|p| ns_to_us(p.max)),
        }
    }
}

pub fn write_summary<W: Write>(
    report: &SimulationReport,
    format: Format,
    mut out: W,
) -> Result<(), SortError> {
    match format {
        Format::Table => write_table(report, &mut out)?,
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(&mut out);
            for run in &report.runs {
                writer.serialize(SummaryRow::from(run))?;
            }
            writer.flush()?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_table<W: Write>(report: &SimulationReport, out: &mut W) -> Result<(), SortError> {
    writeln!(out, "\n=== Comparison ===\n")?;
    writeln!(
        out,
        "{:<15} | {:>8} | {:>10} | {:>12} | {:>12} | {:>12}",
        "Algorithm", "History", "Total (s)", "Sort p50 us", "Sort p99 us", "Sort max us"
    )?;
    writeln!(out, "{:-<85}", "")?;

    for run in &report.runs {
        let row = SummaryRow::from(run);
        writeln!(
            out,
            "{:<15} | {:>8} | {:>10.4} | {:>12.1} | {:>12.1} | {:>12.1}",
            row.algorithm,
            row.final_len,
            row.elapsed_secs,
            row.sort_p50_us.unwrap_or(0.0),
            row.sort_p99_us.unwrap_or(0.0),
            row.sort_max_us.unwrap_or(0.0),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::SimulationConfig;
    use crate::perf::Percentiles;
    use std::time::Duration;

    fn report() -> SimulationReport {
        let run = |algorithm, first_sorted_len| RunReport {
            algorithm,
            iterations: 10,
            first_sorted_len,
            final_len: first_sorted_len + 9,
            elapsed: Duration::from_millis(1_250),
            sort_latency: Some(Percentiles {
                min: 1_000,
                max: 9_000,
                mean: 2_000.0,
                p50: 2_000,
                p95: 5_000,
                p99: 8_000,
            }),
            top: Vec::new(),
        };

        SimulationReport {
            config: SimulationConfig::default(),
            runs: vec![run("Insertion Sort", 1), run("Quick Sort", 11)],
        }
    }

    #[test]
    fn test_csv_summary() {
        let mut out = Vec::new();
        write_summary(&report(), Format::Csv, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("algorithm,iterations,first_sorted_len,final_len,elapsed_secs"));
        assert!(lines[2].starts_with("Quick Sort,10,11,20,1.25,"));
    }

    #[test]
    fn test_json_summary() {
        let mut out = Vec::new();
        write_summary(&report(), Format::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["runs"][1]["algorithm"], "Quick Sort");
        assert_eq!(value["runs"][0]["elapsed_secs"], 1.25);
        assert_eq!(value["config"]["top_n"], 5);
        assert_eq!(value["config"]["algorithms"][4], "tim");
    }

    #[test]
    fn test_table_summary() {
        let mut out = Vec::new();
        write_summary(&report(), Format::Table, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Insertion Sort  |       10 |     1.2500 |          2.0 |          8.0 |          9.0"));
    }
}
