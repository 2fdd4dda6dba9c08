pub mod history;
pub mod price;
pub mod record;

pub use history::History;
pub use price::Price;
pub use record::{Record, StockId};
