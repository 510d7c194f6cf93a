//! Hardware seams: LEDs, the push-button and the millisecond tick

#[cfg(feature = "firmware")]
pub mod clock;
pub mod gpio_button;
pub mod gpio_led;
pub mod led_set;
pub mod traits;
