use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::types::Record;

pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod tim;

pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use tim::TimSort;

/// Common trait that all sorting strategies implement
/// This allows benchmarking different algorithms uniformly
pub trait SortStrategy {
    /// Human readable name used in progress lines and reports
    fn name(&self) -> &'static str;

    /// Return a permutation of `records` ordered by non-decreasing price.
    /// Takes ownership so the caller's copy is never touched.
    fn sort(&self, records: Vec<Record>) -> Vec<Record>;
}

/// Registry of the strategies the driver knows how to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Insertion,
    Quick,
    Heap,
    Merge,
    Tim,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Tim,
    ];

    pub fn strategy(self) -> Box<dyn SortStrategy> {
        match self {
            Algorithm::Insertion => Box::new(InsertionSort),
            Algorithm::Quick => Box::new(QuickSort),
            Algorithm::Heap => Box::new(HeapSort::default()),
            Algorithm::Merge => Box::new(MergeSort),
            Algorithm::Tim => Box::new(TimSort),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Tim => "Tim Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check that prices never decrease along the slice.
pub fn is_sorted_by_price(records: &[Record]) -> bool {
    records.windows(2).all(|w| w[0].price() <= w[1].price())
}

#[cfg(test)]
pub(crate) fn records(samples: &[(u32, f64)]) -> Vec<Record> {
    use crate::types::Price;

    samples
        .iter()
        .enumerate()
        .map(|(i, &(id, price))| Record::new(id, Price::new(price).unwrap(), i as f64))
        .collect()
}

#[cfg(test)]
pub(crate) fn ids(records: &[Record]) -> Vec<u32> {
    records.iter().map(|r| r.id()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_names() {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.strategy().name()).collect();
        assert_eq!(
            names,
            ["Insertion Sort", "Quick Sort", "Heap Sort", "Merge Sort", "Tim Sort"]
        );
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name(), algorithm.strategy().name());
        }
    }

    #[test]
    fn test_every_strategy_sorts_distinct_prices() {
        let input = records(&[(1, 50.0), (2, 10.0), (3, 30.0)]);

        for algorithm in Algorithm::ALL {
            let sorted = algorithm.strategy().sort(input.clone());
            assert_eq!(ids(&sorted), [2, 3, 1], "{}", algorithm);
        }
    }

    #[test]
    fn test_empty_and_single() {
        for algorithm in Algorithm::ALL {
            let strategy = algorithm.strategy();
            assert!(strategy.sort(Vec::new()).is_empty());

            let single = records(&[(7, 42.0)]);
            assert_eq!(strategy.sort(single.clone()), single);
        }
    }

    #[test]
    fn test_is_sorted_by_price() {
        assert!(is_sorted_by_price(&[]));
        assert!(is_sorted_by_price(&records(&[(1, 1.0), (2, 1.0), (3, 2.0)])));
        assert!(!is_sorted_by_price(&records(&[(1, 2.0), (2, 1.0)])));
    }
}
