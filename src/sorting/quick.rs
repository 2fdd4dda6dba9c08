use std::cmp::Ordering;

use crate::sorting::SortStrategy;
use crate::types::Record;

/// Three-way partitioning quicksort.
///
/// The pivot is always the element at the middle index. There is no
/// randomisation or median-of-three, so inputs crafted against the middle
/// position degrade to O(n^2).
pub struct QuickSort;

impl QuickSort {
    fn sort_partition(records: Vec<Record>) -> Vec<Record> {
        if records.len() <= 1 {
            return records;
        }

        let pivot = records[records.len() / 2].price();

        let mut less = Vec::new();
        let mut equal = Vec::new();
        let mut greater = Vec::new();

        // Each bucket keeps input order
        for record in records {
            match record.price().cmp(&pivot) {
                Ordering::Less => less.push(record),
                Ordering::Equal => equal.push(record),
                Ordering::Greater => greater.push(record),
            }
        }

        let mut sorted = Self::sort_partition(less);
        sorted.append(&mut equal);
        sorted.append(&mut Self::sort_partition(greater));
        sorted
    }
}

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn sort(&self, records: Vec<Record>) -> Vec<Record> {
        Self::sort_partition(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{ids, records};

    #[test]
    fn test_partitions_keep_input_order() {
        // Pivot is index 2 (price 20.0); both 20.0 records land in `equal` in input order
        let input = records(&[(1, 30.0), (2, 20.0), (3, 20.0), (4, 5.0), (5, 30.0)]);
        let sorted = QuickSort.sort(input);
        assert_eq!(ids(&sorted), [4, 2, 3, 1, 5]);
    }

    #[test]
    fn test_all_equal_is_unchanged() {
        let input = records(&[(1, 20.0), (2, 20.0), (3, 20.0)]);
        assert_eq!(QuickSort.sort(input.clone()), input);
    }

    #[test]
    fn test_already_sorted_large_input() {
        let input: Vec<Record> = records(
            &(0..2_000)
                .map(|i| (i as u32, i as f64 * 0.5))
                .collect::<Vec<_>>(),
        );
        assert_eq!(QuickSort.sort(input.clone()), input);
    }
}
