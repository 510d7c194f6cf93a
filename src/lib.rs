//! LED animation demo
//!
//! Five LEDs blink in lockstep at one of four speeds (off, 1Hz, 4Hz, 8Hz).
//! A push-button, polled and debounced, steps through the speeds.
//!
//! The logic here is hardware independent: it talks to LEDs, the button and
//! the millisecond tick through the traits in [hardware::traits]. The
//! `firmware` feature adds the embassy-backed clock used by the
//! `led_animation` binary.
//!
//! ```
//! use led_animation_demo::{Debouncer, Scheduler, Speed};
//!
//! let mut debouncer = Debouncer::default();
//! let mut speed = Speed::Off;
//! if debouncer.update(true, 0) {
//!     speed = speed.next();
//! }
//! assert_eq!(speed, Speed::Low);
//! assert_eq!(Scheduler::new().last_toggle(), 0);
//! ```
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, info, trace};
#[cfg(all(not(feature = "defmt"), feature = "log"))]
pub(crate) use log::{debug, info, trace};

#[cfg(not(any(feature = "defmt", feature = "log")))]
mod nolog {
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }
    macro_rules! info {
        ($($arg:tt)*) => {};
    }
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
    pub(crate) use {debug, info, trace};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
pub(crate) use nolog::{debug, info, trace};

pub mod animation;
pub mod app;
pub mod config;
pub mod debounce;
pub mod hardware;
pub mod speed;

pub use animation::{Action, Scheduler};
pub use app::App;
pub use debounce::Debouncer;
pub use speed::Speed;
