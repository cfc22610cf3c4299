//! The timer that drives `Game::update()`.

use std::time::Duration;
#[cfg(not(target_arch="wasm32"))]
use std::thread::{self, JoinHandle};

#[cfg(not(target_arch="wasm32"))]
use log::debug;

/// Target number of ticks per second.
///
/// This is only a target: sleeping can't be more precise than what the OS
/// scheduler allows, so high rates end up lower in practice.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub struct TickRate(u32);

impl TickRate {
    /// Very aggressive, but it's what the game was tuned for.
    pub const NOMINAL: TickRate = TickRate(1200);

    /// 0 is treated as 1.
    pub fn per_second(ticks: u32) -> Self {
        TickRate(ticks.max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn period(self) -> Duration {
        Duration::from_secs_f64(f64::from(self.0).recip())
    }

    /// Call `tick` once per period on a new thread,
    /// until it returns false.
    #[cfg(not(target_arch="wasm32"))]
    pub fn spawn(self,  mut tick: impl FnMut() -> bool + Send + 'static) -> JoinHandle<()> {
        let period = self.period();
        debug!("ticking {} times per second ({:?} apart)", self.0, period);
        thread::spawn(move || {
            while tick() {
                thread::sleep(period);
            }
        })
    }
}

impl Default for TickRate {
    fn default() -> Self {
        TickRate::NOMINAL
    }
}
