//! Blink speeds and their toggle periods

/// Animation rate selected by the push-button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// LEDs forced off
    #[default]
    Off,
    /// 1 Hz
    Low,
    /// 4 Hz
    Medium,
    /// 8 Hz
    High,
}

impl Speed {
    /// Every speed in button order
    pub const ALL: [Speed; 4] = [Speed::Off, Speed::Low, Speed::Medium, Speed::High];

    /// Next speed in the cycle Off -> Low -> Medium -> High -> Off
    pub const fn next(self) -> Self {
        match self {
            Speed::Off => Speed::Low,
            Speed::Low => Speed::Medium,
            Speed::Medium => Speed::High,
            Speed::High => Speed::Off,
        }
    }

    /// Toggle period in milliseconds. Zero means "do not toggle, keep LEDs off".
    pub const fn period_ms(self) -> u32 {
        match self {
            Speed::Off => 0,
            Speed::Low => 1000,
            Speed::Medium => 1000 / 4,
            Speed::High => 1000 / 8,
        }
    }
}

/// Step the speed state machine once
pub const fn advance(speed: Speed) -> Speed {
    speed.next()
}
