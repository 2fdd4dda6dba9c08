use crate::sorting::SortStrategy;
use crate::types::Record;

/// Top-down merge sort splitting at `len / 2`.
///
/// During a merge the left head is taken only when its price is strictly
/// lower; on equal prices the right head wins. Equal elements therefore
/// come out in a split-dependent order, e.g. three equal prices `[a, b, c]`
/// become `[c, b, a]`.
pub struct MergeSort;

impl MergeSort {
    fn sort_slice(records: &mut [Record]) {
        if records.len() <= 1 {
            return;
        }

        let mid = records.len() / 2;
        let mut left = records[..mid].to_vec();
        let mut right = records[mid..].to_vec();

        Self::sort_slice(&mut left);
        Self::sort_slice(&mut right);

        let (mut i, mut j, mut k) = (0, 0, 0);

        while i < left.len() && j < right.len() {
            if left[i].price() < right[j].price() {
                records[k] = left[i];
                i += 1;
            } else {
                records[k] = right[j];
                j += 1;
            }
            k += 1;
        }

        for &record in left[i..].iter().chain(&right[j..]) {
            records[k] = record;
            k += 1;
        }
    }
}

impl SortStrategy for MergeSort {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn sort(&self, mut records: Vec<Record>) -> Vec<Record> {
        Self::sort_slice(&mut records);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::{ids, is_sorted_by_price, records};

    #[test]
    fn test_right_half_wins_ties() {
        let input = records(&[(1, 20.0), (2, 20.0), (3, 20.0)]);
        assert_eq!(ids(&MergeSort.sort(input)), [3, 2, 1]);

        // [1,2 | 3,4] -> [2,1] and [4,3] -> right-first merge
        let input = records(&[(1, 7.0), (2, 7.0), (3, 7.0), (4, 7.0)]);
        assert_eq!(ids(&MergeSort.sort(input)), [4, 3, 2, 1]);
    }

    #[test]
    fn test_mixed_ties() {
        // left [1(5), 2(1)] -> [2, 1]; right [3(5), 4(1)] -> [4, 3]
        // merge: 1.0 vs 1.0 takes right (4), then 2, then 5.0 vs 5.0 takes right (3), then 1
        let input = records(&[(1, 5.0), (2, 1.0), (3, 5.0), (4, 1.0)]);
        let sorted = MergeSort.sort(input);

        assert!(is_sorted_by_price(&sorted));
        assert_eq!(ids(&sorted), [4, 2, 3, 1]);
    }

    #[test]
    fn test_signed_zero_prices_tie() {
        // Equal prices: the right head wins
        let input = records(&[(1, -0.0), (2, 0.0)]);
        assert_eq!(ids(&MergeSort.sort(input)), [2, 1]);
    }
}
