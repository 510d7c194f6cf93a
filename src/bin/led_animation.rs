//! NUCLEO-F401RE LED Animation Demo
//! This firmware blinks five LEDs in lockstep and lets the user button pick
//! the speed:
//! 1. Off (LEDs held low)
//! 2. 1Hz
//! 3. 4Hz
//! 4. 8Hz
//! Each accepted press moves one step, wrapping back to Off.
//!
//! Hardware Connections:
//!   - LED1..LED5: PA5..PA9 (active high, LED1 is the onboard LD2)
//!   - Button: PC13 (onboard B1, external pull-up, low when pressed)
//!   - USART2: PA2 TX / PA3 RX via ST-LINK VCP, 115200 8N1
//!
//! Expected Behavior:
//!   - LEDs start off
//!   - Holding the button steps the speed every 200ms
//!   - Speed changes are logged via defmt RTT

#![no_std]
#![no_main]

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_stm32::{
    gpio::{Input, Level, Output, Pull, Speed},
    usart::{self, UartTx},
};
use led_animation_demo::{
    App, Debouncer,
    config::{DEBOUNCE_MS, LED_COUNT, LED_POLARITY, UART_BAUD},
    hardware::{
        clock::EmbassyClock, gpio_button::GpioButton, gpio_led::GpioLed, led_set::LedSet,
    },
};
use {defmt_rtt as _, panic_probe as _};

/// Main application entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // HSI 16MHz -> PLL -> 84MHz SYSCLK
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hsi = true;
        config.rcc.pll_src = PllSource::HSI;
        config.rcc.pll = Some(Pll {
            prediv: PllPreDiv::DIV16, // 1MHz
            mul: PllMul::MUL336,      // 336MHz VCO
            divp: Some(PllPDiv::DIV4), // 84MHz
            divq: Some(PllQDiv::DIV7),
            divr: None,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2; // 42MHz
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    let p = embassy_stm32::init(config);

    info!("LED animation demo starting");

    let mut uart_config = usart::Config::default();
    uart_config.baudrate = UART_BAUD;
    let mut uart = match UartTx::new_blocking(p.USART2, p.PA2, uart_config) {
        Ok(uart) => uart,
        Err(e) => {
            error!("USART2 config failed: {}", e);
            fatal();
        }
    };
    if uart.blocking_write(b"led_animation_demo ready\r\n").is_err() {
        fatal();
    }

    let leds: LedSet<_, LED_COUNT> = LedSet::new([
        GpioLed::new(Output::new(p.PA5, Level::Low, Speed::Low), LED_POLARITY),
        GpioLed::new(Output::new(p.PA6, Level::Low, Speed::Low), LED_POLARITY),
        GpioLed::new(Output::new(p.PA7, Level::Low, Speed::Low), LED_POLARITY),
        GpioLed::new(Output::new(p.PA8, Level::Low, Speed::Low), LED_POLARITY),
        GpioLed::new(Output::new(p.PA9, Level::Low, Speed::Low), LED_POLARITY),
    ]);
    let button = GpioButton::new(Input::new(p.PC13, Pull::None));

    let mut app = App::new(button, leds, EmbassyClock, Debouncer::new(DEBOUNCE_MS));

    // Polling loop: never waits, only yields to the executor between passes
    loop {
        if let Err(e) = app.poll() {
            error!("pin error: {}", e);
            fatal();
        }
        yield_now().await;
    }
}

/// Unrecoverable bring-up failure: mask interrupts and park the core
fn fatal() -> ! {
    cortex_m::interrupt::disable();
    loop {
        cortex_m::asm::nop();
    }
}
