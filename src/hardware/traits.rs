pub trait Led {
    type Error;

    fn on(&mut self) -> Result<(), Self::Error>;
    fn off(&mut self) -> Result<(), Self::Error>;
    fn toggle(&mut self) -> Result<(), Self::Error>;
    fn is_on(&mut self) -> Result<bool, Self::Error>;
}

pub trait Button {
    type Error;

    fn is_pressed(&mut self) -> Result<bool, Self::Error>;
}

/// Monotonic millisecond tick since boot, wrapping at `u32::MAX`
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
