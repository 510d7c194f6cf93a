//! Time-window button debounce
//!
//! Level based: a press is accepted when the button reads pressed and at
//! least `window_ms` has passed since the last accepted press or the last
//! released sample. Holding the button down therefore repeats the press
//! once per window.
//!
//! A fresh filter is armed: the first pressed sample is accepted whatever
//! the tick reads.

use crate::config::DEBOUNCE_MS;
use crate::hardware::traits::Button;

pub struct Debouncer {
    last_edge: Option<u32>,
    window_ms: u32,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            last_edge: None,
            window_ms,
        }
    }

    pub const fn window_ms(&self) -> u32 {
        self.window_ms
    }

    pub const fn last_edge(&self) -> Option<u32> {
        self.last_edge
    }

    /// Feed one sample. Returns `true` when the sample is an accepted press.
    pub fn update(&mut self, pressed: bool, now: u32) -> bool {
        if !pressed {
            // released: re-arm right away
            self.last_edge = Some(now);
            return false;
        }

        let armed = match self.last_edge {
            Some(last) => now.wrapping_sub(last) >= self.window_ms,
            None => true,
        };
        if armed {
            self.last_edge = Some(now);
        }
        armed
    }

    /// Sample `button` and feed the result to [`Debouncer::update`].
    pub fn poll<B: Button>(&mut self, button: &mut B, now: u32) -> Result<bool, B::Error> {
        let pressed = button.is_pressed()?;
        Ok(self.update(pressed, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_button_repeats_every_window() {
        let mut d = Debouncer::new(200);
        assert!(d.update(true, 0));
        for t in 1..200 {
            assert!(!d.update(true, t), "t = {t}");
        }
        assert!(d.update(true, 200));
        assert!(!d.update(true, 399));
        assert!(d.update(true, 400));
        assert!(d.update(true, 600));
    }

    #[test]
    fn suppressed_sample_keeps_timestamp() {
        let mut d = Debouncer::new(200);
        assert!(d.update(true, 1000));
        assert!(!d.update(true, 1100));
        assert_eq!(d.last_edge(), Some(1000));
    }

    #[test]
    fn release_rearms_immediately() {
        let mut d = Debouncer::new(200);
        assert!(d.update(true, 500));
        assert!(!d.update(false, 550));
        assert_eq!(d.last_edge(), Some(550));
        // pressed again straight after: window counts from the release
        assert!(!d.update(true, 560));
        assert!(d.update(true, 750));
        assert!(!d.update(true, 751));
    }

    #[test]
    fn release_then_press_after_full_window_fires_once() {
        let mut d = Debouncer::new(200);
        assert!(!d.update(false, 100));
        assert!(d.update(true, 300));
        assert!(!d.update(true, 301));
        assert!(!d.update(true, 499));
    }

    #[test]
    fn window_survives_tick_wraparound() {
        let mut d = Debouncer::new(200);
        assert!(!d.update(false, u32::MAX - 50));
        assert!(!d.update(true, 100));
        assert!(d.update(true, 149));
    }

    #[test]
    fn fresh_filter_accepts_first_press() {
        let mut d = Debouncer::default();
        assert_eq!(d.last_edge(), None);
        assert!(d.update(true, 3));
        assert!(!d.update(true, 4));
    }

    #[test]
    fn default_window() {
        assert_eq!(Debouncer::default().window_ms(), 200);
    }
}
