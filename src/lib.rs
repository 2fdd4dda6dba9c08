pub mod benchmark;
pub mod chart;
pub mod error;
pub mod generator;
pub mod pacing;
pub mod perf;
pub mod report;
pub mod selector;
pub mod sorting;
pub mod types;

pub use error::SortError;
