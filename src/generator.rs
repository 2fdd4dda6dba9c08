use std::cell::Cell;
use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use crate::error::SortError;
use crate::types::{Price, Record, StockId};

pub const ID_RANGE: RangeInclusive<StockId> = 1..=100;
pub const PRICE_RANGE: RangeInclusive<f64> = 10.0..=500.0;

/// Produces one sample per call
pub trait SampleSource {
    fn generate(&mut self) -> Record;
}

/// Wall-clock reading used to stamp samples
pub trait Clock {
    /// Seconds since the Unix epoch
    fn now(&self) -> f64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        // A clock set before 1970 stamps 0.0 rather than failing the run
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64()
    }
}

/// Deterministic clock that advances by a fixed step on every reading
pub struct ManualClock {
    current: Cell<f64>,
    step: f64,
}

impl ManualClock {
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            current: Cell::new(start),
            step,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}

/// Uniform random samples: identifier in `ID_RANGE`, price in `PRICE_RANGE`
pub struct RandomSource<R: Rng, C: Clock = SystemClock> {
    rng: R,
    clock: C,
    ids: Uniform<StockId>,
    prices: Uniform<f64>,
}

impl RandomSource<StdRng, SystemClock> {
    /// OS-seeded source; runs are not reproducible
    pub fn from_os_rng() -> Result<Self, SortError> {
        Self::new(StdRng::from_os_rng(), SystemClock)
    }

    pub fn seeded(seed: u64) -> Result<Self, SortError> {
        Self::new(StdRng::seed_from_u64(seed), SystemClock)
    }
}

impl<R: Rng, C: Clock> RandomSource<R, C> {
    pub fn new(rng: R, clock: C) -> Result<Self, SortError> {
        Self::with_ranges(rng, clock, ID_RANGE, PRICE_RANGE)
    }

    pub fn with_ranges(
        rng: R,
        clock: C,
        ids: RangeInclusive<StockId>,
        prices: RangeInclusive<f64>,
    ) -> Result<Self, SortError> {
        let (price_low, price_high) = prices.into_inner();
        if !price_low.is_finite() || !price_high.is_finite() {
            return Err(SortError::InvalidInput(format!(
                "price range must be finite, got {}..={}",
                price_low, price_high
            )));
        }

        let ids = Uniform::new_inclusive(*ids.start(), *ids.end())
            .map_err(|e| SortError::InvalidInput(format!("identifier range: {}", e)))?;
        let prices = Uniform::new_inclusive(price_low, price_high)
            .map_err(|e| SortError::InvalidInput(format!("price range: {}", e)))?;

        Ok(Self {
            rng,
            clock,
            ids,
            prices,
        })
    }
}

impl<R: Rng, C: Clock> SampleSource for RandomSource<R, C> {
    fn generate(&mut self) -> Record {
        let id = self.ids.sample(&mut self.rng);
        // Sampled from a range validated as finite
        let price = Price::from_finite(self.prices.sample(&mut self.rng));

        Record::new(id, price, self.clock.now())
    }
}
