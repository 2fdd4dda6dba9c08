use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::pacing::DELAY;
use crate::sorting::Algorithm;

/// Samples generated (and full re-sorts performed) per strategy
pub const NUM_ITERATIONS: usize = 100;
/// Number of top prices tracked
pub const TOP_N: usize = 5;
/// Render the top-N every this many iterations, starting with the first
pub const RENDER_EVERY: usize = 20;

/// Missing fields take their defaults when deserialised.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub iterations: usize,
    pub top_n: usize,
    pub render_every: usize,
    /// Pause between iterations. `Driver::paced` builds its delay from this;
    /// `Driver::new` takes an injected delay and leaves it descriptive only.
    pub delay_ms: u64,
    /// Keep growing one history across all strategies. When false every
    /// strategy starts from an empty history.
    pub carry_history: bool,
    /// Check every strategy output against the reference stable sort
    pub verify: bool,
    pub algorithms: Vec<Algorithm>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: NUM_ITERATIONS,
            top_n: TOP_N,
            render_every: RENDER_EVERY,
            delay_ms: DELAY.as_millis() as u64,
            carry_history: true,
            verify: false,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl SimulationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn validate(&self) -> Result<(), SortError> {
        if self.render_every == 0 {
            return Err(SortError::Config(
                "render interval must be at least 1".to_string(),
            ));
        }

        if self.algorithms.is_empty() {
            return Err(SortError::Config(
                "at least one algorithm must be selected".to_string(),
            ));
        }

        Ok(())
    }
}
