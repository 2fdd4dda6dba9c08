use serde::Serialize;

use crate::types::price::Price;

pub type StockId = u32;

/// One stock price sample.
///
/// Records have no natural ordering of their own; sorting always goes
/// through an explicit price key.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    id: StockId,
    price: Price,
    /// Seconds since the Unix epoch at capture time. Carried, never compared.
    timestamp: f64,
}

impl Record {
    pub fn new(id: StockId, price: Price, timestamp: f64) -> Self {
        Record {
            id,
            price,
            timestamp,
        }
    }

    pub fn id(&self) -> StockId {
        self.id
    }
    pub fn price(&self) -> Price {
        self.price
    }
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }
}
