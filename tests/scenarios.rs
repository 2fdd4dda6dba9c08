use stocksort::benchmark::{Driver, SimulationConfig};
use stocksort::chart::{NullChart, RecordingChart};
use stocksort::generator::SampleSource;
use stocksort::pacing::NoDelay;
use stocksort::selector::top_n;
use stocksort::sorting::{Algorithm, MergeSort, SortStrategy, TimSort};
use stocksort::types::{History, Price, Record};

fn record(id: u32, price: f64, timestamp: f64) -> Record {
    Record::new(id, Price::new(price).unwrap(), timestamp)
}

fn ids(records: &[Record]) -> Vec<u32> {
    records.iter().map(|r| r.id()).collect()
}

/// Replays a fixed price list, cycling, with ids counting up from 1
struct Scripted {
    prices: Vec<f64>,
    next: usize,
}

impl SampleSource for Scripted {
    fn generate(&mut self) -> Record {
        let price = self.prices[self.next % self.prices.len()];
        self.next += 1;
        record(self.next as u32, price, self.next as f64)
    }
}

fn quiet_config(iterations: usize) -> SimulationConfig {
    SimulationConfig {
        iterations,
        delay_ms: 0,
        ..Default::default()
    }
}

#[test]
fn distinct_prices_sort_and_select() {
    let input = vec![record(1, 50.0, 1.0), record(2, 10.0, 2.0), record(3, 30.0, 3.0)];
    let expected = vec![record(2, 10.0, 2.0), record(3, 30.0, 3.0), record(1, 50.0, 1.0)];

    for algorithm in Algorithm::ALL {
        let sorted = algorithm.strategy().sort(input.clone());
        assert_eq!(sorted, expected, "{}", algorithm);
        assert_eq!(
            top_n(&sorted, 2),
            vec![record(1, 50.0, 1.0), record(3, 30.0, 3.0)]
        );
    }
}

#[test]
fn equal_prices_follow_documented_tie_breaks() {
    let input = vec![record(1, 20.0, 1.0), record(2, 20.0, 2.0), record(3, 20.0, 3.0)];

    // Stable: input order kept
    assert_eq!(ids(&TimSort.sort(input.clone())), [1, 2, 3]);

    // Split [1] | [2, 3]; the right half [2, 3] merges to [3, 2], then
    // the outer merge takes the right half first on every tie
    assert_eq!(ids(&MergeSort.sort(input.clone())), [3, 2, 1]);

    for algorithm in Algorithm::ALL {
        let mut got = ids(&algorithm.strategy().sort(input.clone()));
        got.sort_unstable();
        assert_eq!(got, [1, 2, 3]);
    }
}

#[test]
fn history_accumulates_across_strategies() {
    let source = Scripted {
        prices: vec![120.0, 40.5, 333.3, 18.0, 250.0, 99.9, 480.0],
        next: 0,
    };
    let mut driver = Driver::new(
        quiet_config(12),
        source,
        NoDelay,
        RecordingChart::default(),
        Vec::new(),
    )
    .unwrap();
    let mut history = History::new();

    let report = driver.run_all(&mut history).unwrap();

    assert_eq!(history.len(), 12 * 5);
    assert_eq!(report.runs.len(), 5);
    assert_eq!(report.runs[0].first_sorted_len, 1);

    for pair in report.runs.windows(2) {
        assert_eq!(pair[1].first_sorted_len, pair[0].final_len + 1);
    }

    // Every strategy sees the same history prefix, so the final top-5 of the
    // last run is simply the top-5 of everything generated
    let last = report.runs.last().unwrap();
    assert_eq!(last.top, top_n(history.as_slice(), 5));
    assert_eq!(last.top[0].price().value(), 480.0);

    // Only iteration 0 renders with 12 iterations per run
    assert_eq!(driver.chart().renders.len(), 5);
}

#[test]
fn progress_lines_name_each_strategy() {
    let source = Scripted {
        prices: vec![10.0, 20.0],
        next: 0,
    };
    let mut driver = Driver::new(quiet_config(2), source, NoDelay, NullChart, Vec::new()).unwrap();

    driver.run_all(&mut History::new()).unwrap();

    let text = String::from_utf8(driver.console().clone()).unwrap();
    for algorithm in Algorithm::ALL {
        assert!(text.contains(&format!("Testing with {}:", algorithm)));
        assert!(text.contains(&format!(
            "Total time for sorting 2 stock prices with {}:",
            algorithm
        )));
    }
}
