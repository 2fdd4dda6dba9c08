pub mod latency;

pub use latency::{Percentiles, SortTimer};
