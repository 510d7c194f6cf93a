//! Board-level constants

use crate::hardware::gpio_led::Polarity;

/// Number of LEDs driven by the animation
pub const LED_COUNT: usize = 5;

/// Minimum spacing between two accepted button presses
pub const DEBOUNCE_MS: u32 = 200;

/// LEDs on the demo board light when the pin is driven high
pub const LED_POLARITY: Polarity = Polarity::ActiveHigh;

/// USART2 baud rate, 8N1
pub const UART_BAUD: u32 = 115_200;
