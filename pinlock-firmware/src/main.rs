//! Pinlock - Numeric Password Keypad Firmware
//!
//! Four-digit seven-segment keypad for RP2040-based boards. Buttons are
//! active-high with pull-downs, digit anodes and segments are active-low.
//!
//! Pin map:
//! - GP10..GP14: advance, decrement, digit, clear, mode switch
//! - GP2..GP5: digit anodes, slot 0 (rightmost) first
//! - GP16..GP23: segments a..g, dp
//! - GP25: status LED (lit in advanced mode)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use pinlock_core::Keypad;
use pinlock_drivers::{BoardPins, DelayClock, EhDelay, EhInput, EhOutput, PinBoard};

mod config;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Pinlock firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Anodes and segments start released (high), status LED off
    let board = PinBoard::new(BoardPins {
        advance: EhInput(Input::new(p.PIN_10, Pull::Down)),
        decrement: EhInput(Input::new(p.PIN_11, Pull::Down)),
        digit: EhInput(Input::new(p.PIN_12, Pull::Down)),
        clear: EhInput(Input::new(p.PIN_13, Pull::Down)),
        mode: EhInput(Input::new(p.PIN_14, Pull::Down)),
        anodes: [
            EhOutput::new(Output::new(p.PIN_2, Level::High), true),
            EhOutput::new(Output::new(p.PIN_3, Level::High), true),
            EhOutput::new(Output::new(p.PIN_4, Level::High), true),
            EhOutput::new(Output::new(p.PIN_5, Level::High), true),
        ],
        segments: [
            EhOutput::new(Output::new(p.PIN_16, Level::High), true),
            EhOutput::new(Output::new(p.PIN_17, Level::High), true),
            EhOutput::new(Output::new(p.PIN_18, Level::High), true),
            EhOutput::new(Output::new(p.PIN_19, Level::High), true),
            EhOutput::new(Output::new(p.PIN_20, Level::High), true),
            EhOutput::new(Output::new(p.PIN_21, Level::High), true),
            EhOutput::new(Output::new(p.PIN_22, Level::High), true),
            EhOutput::new(Output::new(p.PIN_23, Level::High), true),
        ],
        status_led: EhOutput::new(Output::new(p.PIN_25, Level::Low), false),
    });
    info!("Board pins configured");

    let clock = DelayClock::new(EhDelay(Delay));

    let mut keypad = match Keypad::new(board, clock, &config::KEYPAD_CONFIG) {
        Ok(keypad) => keypad,
        Err(e) => {
            error!("Invalid keypad configuration: {}", e);
            loop {
                cortex_m::asm::wfi();
            }
        }
    };

    info!(
        "Keypad ready (mode: {}, display: {})",
        keypad.state().mode,
        keypad.state().display_mode()
    );

    // The refresh loop owns the core; actions and verdicts are logged by pinlock-core
    keypad.run()
}
