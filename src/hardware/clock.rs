use super::traits::Clock;
use embassy_time::Instant;

/// Millisecond tick backed by the embassy time driver.
///
/// Truncated to 32 bits so it wraps like a HAL tick counter.
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
