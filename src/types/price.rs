use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::SortError;

/// Stock price in currency units.
///
/// Always finite, which lets `total_cmp` act as the single ordering key
/// shared by every strategy and the selector. Negative zero is stored as
/// zero so the two compare equal.
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, SortError> {
        if !value.is_finite() {
            return Err(SortError::InvalidInput(format!(
                "price must be finite, got {}",
                value
            )));
        }
        Ok(Self::from_finite(value))
    }

    /// For values already known to be finite
    pub(crate) fn from_finite(value: f64) -> Self {
        debug_assert!(value.is_finite());
        // -0.0 + 0.0 == +0.0
        Self(value + 0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
