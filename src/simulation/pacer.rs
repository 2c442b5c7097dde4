//! Real-time pacing for the integration loop
//!
//! The tick rate caps how often simulated time advances per real
//! second, independent of `dt`: `dt` decides how fast simulated time
//! passes, the pacer decides how smooth it looks. The wait is a plain
//! blocking sleep; nothing else runs during it.

use std::thread;
use std::time::{Duration, Instant};

use super::integrator::euler_symplectic;
use super::scenario::Scenario;

/// Blocking throttle to a fixed tick cadence
pub struct Pacer {
    period: Duration,
    next: Instant,
}

impl Pacer {
    pub fn new(rate: f64) -> Self {
        let period = Duration::from_secs_f64(1.0 / rate);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// Sleep until the next tick deadline
    ///
    /// A caller that has fallen behind gets its deadline rebased to now
    /// plus one period instead of ticking in a burst to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }
}

/// Run the scenario forever without a window: one integrator tick per
/// pacer beat, single-threaded
///
/// There is no termination condition; the hosting process is expected
/// to be started as an isolated unit and killed externally.
pub fn run_headless(mut scenario: Scenario) -> ! {
    println!(
        "run_headless: integrating {} bodies at {} ticks/s, dt = {} s",
        scenario.system.bodies.len(),
        scenario.parameters.rate,
        scenario.parameters.dt
    );

    let mut pacer = Pacer::new(scenario.parameters.rate);
    loop {
        pacer.wait();
        euler_symplectic(
            &mut scenario.system,
            &scenario.forces,
            &scenario.parameters,
        );
    }
}
