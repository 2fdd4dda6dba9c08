use crate::error::SortError;
use crate::types::Record;

/// Return the `n` highest-priced records, highest first.
///
/// Does its own stable descending sort instead of trusting the order of its
/// input, so it gives the same answer whichever strategy ran before it.
/// Records with equal prices keep their input order.
pub fn top_n(records: &[Record], n: usize) -> Vec<Record> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.price().cmp(&a.price()));
    ranked.truncate(n);
    ranked
}

/// Like [`top_n`], for counts arriving as signed integers.
pub fn try_top_n(records: &[Record], n: i64) -> Result<Vec<Record>, SortError> {
    Ok(top_n(records, checked_count(n)?))
}

pub fn checked_count(n: i64) -> Result<usize, SortError> {
    usize::try_from(n)
        .map_err(|_| SortError::InvalidInput(format!("top-n count must be >= 0, got {}", n)))
}
