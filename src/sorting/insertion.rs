use crate::sorting::SortStrategy;
use crate::types::Record;

/// Shift-and-insert into the growing sorted prefix.
///
/// O(n^2) on average, O(n) on already sorted input. Stable, because an
/// element only moves past strictly greater prices.
pub struct InsertionSort;

impl SortStrategy for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn sort(&self, mut records: Vec<Record>) -> Vec<Record> {
        for i in 1..records.len() {
            let key = records[i];
            let mut j = i;

            while j > 0 && key.price() < records[j - 1].price() {
                records[j] = records[j - 1];
                j -= 1;
            }
            records[j] = key;
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{ids, is_sorted_by_price, records};

    #[test]
    fn test_reverse_input() {
        let input = records(&[(1, 5.0), (2, 4.0), (3, 3.0), (4, 2.0), (5, 1.0)]);
        let sorted = InsertionSort.sort(input);
        assert_eq!(ids(&sorted), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_stable_on_ties() {
        let input = records(&[(1, 20.0), (2, 10.0), (3, 20.0), (4, 10.0)]);
        let sorted = InsertionSort.sort(input);

        assert!(is_sorted_by_price(&sorted));
        assert_eq!(ids(&sorted), [2, 4, 1, 3]);
    }
}
