//! The polling loop body

use crate::animation::{Action, Scheduler};
use crate::debounce::Debouncer;
use crate::hardware::led_set::LedSet;
use crate::hardware::traits::{Button, Clock, Led};
use crate::speed::Speed;
use crate::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<BE, LE> {
    /// Reading the button pin failed
    Button(BE),
    /// Driving an LED pin failed
    Led(LE),
}

/// Button, LEDs, tick and the two pieces of state threaded between iterations
pub struct App<B, L, C, const N: usize> {
    button: B,
    leds: LedSet<L, N>,
    clock: C,
    speed: Speed,
    debouncer: Debouncer,
    scheduler: Scheduler,
}

impl<B, L, C, const N: usize> App<B, L, C, N>
where
    B: Button,
    L: Led,
    C: Clock,
{
    pub fn new(button: B, leds: LedSet<L, N>, clock: C, debouncer: Debouncer) -> Self {
        Self {
            button,
            leds,
            clock,
            speed: Speed::Off,
            debouncer,
            scheduler: Scheduler::new(),
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn leds(&mut self) -> &mut LedSet<L, N> {
        &mut self.leds
    }

    /// One loop iteration: debounce the button, step the speed on a press,
    /// then service the blink schedule.
    pub fn poll(&mut self) -> Result<Action, Error<B::Error, L::Error>> {
        let now = self.clock.now_ms();
        if self
            .debouncer
            .poll(&mut self.button, now)
            .map_err(Error::Button)?
        {
            self.speed = self.speed.next();
            info!("speed -> {:?} ({} ms)", self.speed, self.speed.period_ms());
            if self.speed == Speed::Off {
                debug!("LEDs forced off");
            }
        }

        let now = self.clock.now_ms();
        self.scheduler
            .service(self.speed, now, &mut self.leds)
            .map_err(Error::Led)
    }
}
