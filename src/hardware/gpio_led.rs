use super::traits::Led;
use embedded_hal::digital::StatefulOutputPin;

/// Pin level that lights the LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    /// Common-anode wiring, e.g. the Blue Pill PC13 LED
    ActiveLow,
}

pub struct GpioLed<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: StatefulOutputPin> GpioLed<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> Led for GpioLed<P> {
    type Error = P::Error;

    fn on(&mut self) -> Result<(), Self::Error> {
        match self.polarity {
            Polarity::ActiveHigh => self.pin.set_high(),
            Polarity::ActiveLow => self.pin.set_low(),
        }
    }

    fn off(&mut self) -> Result<(), Self::Error> {
        match self.polarity {
            Polarity::ActiveHigh => self.pin.set_low(),
            Polarity::ActiveLow => self.pin.set_high(),
        }
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.pin.toggle()
    }

    fn is_on(&mut self) -> Result<bool, Self::Error> {
        match self.polarity {
            Polarity::ActiveHigh => self.pin.is_set_high(),
            Polarity::ActiveLow => self.pin.is_set_low(),
        }
    }
}
