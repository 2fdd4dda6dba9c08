use std::time::Duration;

/// Pause between two benchmark iterations.
pub const DELAY: Duration = Duration::from_millis(100);

pub trait Delay {
    fn pause(&mut self);
}

/// Blocks the thread for a fixed interval, simulating data arriving in real time
pub struct FixedDelay(Duration);

impl FixedDelay {
    pub fn new(interval: Duration) -> Self {
        Self(interval)
    }

    pub fn interval(&self) -> Duration {
        self.0
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self(DELAY)
    }
}

impl Delay for FixedDelay {
    fn pause(&mut self) {
        if !self.0.is_zero() {
            std::thread::sleep(self.0);
        }
    }
}

/// Never waits; for tests and pure-throughput runs
pub struct NoDelay;

impl Delay for NoDelay {
    fn pause(&mut self) {}
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn pause(&mut self) {
        (**self).pause()
    }
}
