//! bscalc - handheld Black-Scholes option calculator.
//!
//! Embedded entry point for the nRF52840. Wires the board drivers to the
//! host-tested core: one task blinks the heartbeat LED, one services the
//! rotary encoder edges, and the main loop polls the keypad and ticks
//! the UI state machine.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use bscalc::board::encoder::encoder_task;
use bscalc::board::keypad::MatrixKeypad;
use bscalc::board::lcd::Hd44780;
use bscalc::board::ledbar::I2cLedBar;
use bscalc::config::{HEARTBEAT_PERIOD_MS, POLL_PERIOD_MS};
use bscalc::encoder::QuadCounter;
use bscalc::App;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    TWISPI1 => twim::InterruptHandler<peripherals::TWISPI1>;
});

/// Shared with the encoder task; drained by the UI once per poll.
static QUAD_STEPS: QuadCounter = QuadCounter::new();

#[embassy_executor::task]
async fn heartbeat(mut led: Output<'static>) {
    loop {
        led.toggle();
        Timer::after(Duration::from_millis(HEARTBEAT_PERIOD_MS)).await;
    }
}

#[embassy_executor::task]
async fn encoder(a: Input<'static>, b: Input<'static>) {
    encoder_task(a, b, &QUAD_STEPS).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("bscalc starting");

    // Heartbeat LED
    let led = Output::new(p.P0_06, Level::High, OutputDrive::Standard);
    spawner.spawn(heartbeat(led)).unwrap();

    // Rotary encoder phase lines
    let enc_a = Input::new(p.P0_03, Pull::Up);
    let enc_b = Input::new(p.P0_04, Pull::Up);
    spawner.spawn(encoder(enc_a, enc_b)).unwrap();

    // I²C bus 0: character LCD. Without a display the unit is useless,
    // so a failed init is a halt-and-report.
    let lcd_i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let lcd = defmt::unwrap!(Hd44780::new(lcd_i2c));

    // I²C bus 1: LED-bar slave
    let bar = I2cLedBar::new(Twim::new(
        p.TWISPI1,
        Irqs,
        p.P0_30,
        p.P0_31,
        twim::Config::default(),
    ));

    // Keypad matrix
    let rows = [
        Output::new(p.P0_11, Level::High, OutputDrive::Standard0Disconnect1),
        Output::new(p.P0_12, Level::High, OutputDrive::Standard0Disconnect1),
        Output::new(p.P0_13, Level::High, OutputDrive::Standard0Disconnect1),
        Output::new(p.P0_14, Level::High, OutputDrive::Standard0Disconnect1),
    ];
    let cols = [
        Input::new(p.P0_15, Pull::Up),
        Input::new(p.P0_16, Pull::Up),
        Input::new(p.P0_17, Pull::Up),
        Input::new(p.P0_18, Pull::Up),
    ];
    let keypad = MatrixKeypad::new(rows, cols);

    let mut app = App::new(lcd, bar, keypad, &QUAD_STEPS);
    if let Err(e) = app.start() {
        warn!("initial render failed: {}", e);
    }
    info!("ui up");

    // The run loop never exits; peripheral errors are logged and served past.
    loop {
        if let Err(e) = app.tick() {
            warn!("tick: {}", e);
        }
        Timer::after(Duration::from_millis(POLL_PERIOD_MS)).await;
    }
}
