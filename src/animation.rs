//! Non-blocking blink scheduler
//!
//! [`Scheduler::service`] is called on every loop iteration. It never waits:
//! it compares the tick against the last toggle and either flips the whole
//! LED set, forces it off, or returns straight away.
//!
//! The last-toggle timestamp is kept across speed changes, so the first
//! toggle after a change may come earlier or later than one new period.

use crate::hardware::led_set::LedSet;
use crate::hardware::traits::Led;
use crate::speed::Speed;
use crate::trace;

/// What one `service` call did to the LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Speed is `Off`, every LED was driven off
    AllOff,
    /// Period elapsed, every LED was inverted
    Toggled,
    /// Period not elapsed yet
    Waiting,
}

#[derive(Default)]
pub struct Scheduler {
    last_toggle: u32,
}

impl Scheduler {
    pub const fn new() -> Self {
        Self { last_toggle: 0 }
    }

    pub const fn last_toggle(&self) -> u32 {
        self.last_toggle
    }

    pub fn service<L: Led, const N: usize>(
        &mut self,
        speed: Speed,
        now: u32,
        leds: &mut LedSet<L, N>,
    ) -> Result<Action, L::Error> {
        let period = speed.period_ms();

        if period == 0 {
            leds.all_off()?;
            return Ok(Action::AllOff);
        }

        if now.wrapping_sub(self.last_toggle) < period {
            return Ok(Action::Waiting);
        }

        leds.toggle_all()?;
        trace!("toggle at {} ms (period {} ms)", now, period);
        self.last_toggle = now;
        Ok(Action::Toggled)
    }
}
