use super::traits::Led;

/// Fixed set of LEDs that always switch together
pub struct LedSet<L, const N: usize> {
    leds: [L; N],
}

impl<L: Led, const N: usize> LedSet<L, N> {
    pub fn new(leds: [L; N]) -> Self {
        Self { leds }
    }

    /// Drive every LED off.
    ///
    /// A pin error aborts the pass; LEDs after the failing one keep their level.
    pub fn all_off(&mut self) -> Result<(), L::Error> {
        for led in self.leds.iter_mut() {
            led.off()?;
        }
        Ok(())
    }

    /// Invert the set in one pass.
    ///
    /// The target level is the inverse of the first LED, and every LED is
    /// driven to it, so a pass retried after a pin error ends in lockstep.
    pub fn toggle_all(&mut self) -> Result<(), L::Error> {
        let Some(first) = self.leds.first_mut() else {
            return Ok(());
        };
        let target = !first.is_on()?;
        for led in self.leds.iter_mut() {
            if target {
                led.on()?;
            } else {
                led.off()?;
            }
        }
        Ok(())
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, L> {
        self.leds.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// LED whose `on` fails while `faults` is non-zero
    #[derive(Default)]
    struct FlakyLed {
        lit: bool,
        faults: u8,
    }

    impl Led for FlakyLed {
        type Error = ();

        fn on(&mut self) -> Result<(), ()> {
            if self.faults > 0 {
                self.faults -= 1;
                return Err(());
            }
            self.lit = true;
            Ok(())
        }

        fn off(&mut self) -> Result<(), ()> {
            self.lit = false;
            Ok(())
        }

        fn toggle(&mut self) -> Result<(), ()> {
            if self.lit {
                self.off()
            } else {
                self.on()
            }
        }

        fn is_on(&mut self) -> Result<bool, ()> {
            Ok(self.lit)
        }
    }

    fn levels(set: &mut LedSet<FlakyLed, 3>) -> [bool; 3] {
        let mut out = [false; 3];
        for (slot, led) in out.iter_mut().zip(set.iter_mut()) {
            *slot = led.lit;
        }
        out
    }

    #[test]
    fn toggle_follows_first_led() {
        let mut set = LedSet::new([
            FlakyLed { lit: false, faults: 0 },
            FlakyLed { lit: true, faults: 0 },
            FlakyLed { lit: false, faults: 0 },
        ]);
        set.toggle_all().unwrap();
        assert_eq!(levels(&mut set), [true; 3]);
        set.toggle_all().unwrap();
        assert_eq!(levels(&mut set), [false; 3]);
    }

    #[test]
    fn retry_after_failed_toggle_restores_lockstep() {
        let mut set = LedSet::new([
            FlakyLed::default(),
            FlakyLed { lit: false, faults: 1 },
            FlakyLed::default(),
        ]);
        assert_eq!(set.toggle_all(), Err(()));
        assert_eq!(levels(&mut set), [true, false, false]);

        set.toggle_all().unwrap();
        let after = levels(&mut set);
        assert!(after.iter().all(|&l| l == after[0]), "{after:?}");
    }

    #[test]
    fn empty_set_is_a_no_op() {
        let mut set = LedSet::<FlakyLed, 0>::new([]);
        assert_eq!(set.toggle_all(), Ok(()));
        assert_eq!(set.all_off(), Ok(()));
    }
}
