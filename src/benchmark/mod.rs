pub mod config;
pub mod driver;

pub use config::SimulationConfig;
pub use driver::{Driver, RunReport, SimulationReport};
