use crate::sorting::SortStrategy;
use crate::types::Record;

/// The standard library's stable sort, keyed solely by price.
///
/// Used as the reference ordering: equal prices keep their input order.
pub struct TimSort;

impl SortStrategy for TimSort {
    fn name(&self) -> &'static str {
        "Tim Sort"
    }

    fn sort(&self, mut records: Vec<Record>) -> Vec<Record> {
        records.sort_by_key(Record::price);
        records
    }
}
