//! Mnemon - Two-Light Memory Game Firmware
//!
//! Main firmware binary for RP2040-based boards. Wires the buttons,
//! indicators, and LCD link described in game.toml to the game controller
//! and plays forever.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::uart::{Blocking, Config as UartConfig, UartTx};
use embedded_io::ErrorKind;
use {defmt_rtt as _, panic_probe as _};

use mnemon_core::timing::TimingService;
use mnemon_core::GameController;
use mnemon_drivers::{PinButtons, PinIndicators, SerialLcd};

use crate::clock::{InstantCounter, PeriodTicker};

mod clock;

/// Board constants generated from game.toml
#[macro_use]
mod board {
    include!(concat!(env!("OUT_DIR"), "/game_config.rs"));
}

/// Blocking UART transmitter as an `embedded-io` writer
struct LcdPort(UartTx<'static, Blocking>);

impl embedded_io::ErrorType for LcdPort {
    type Error = ErrorKind;
}

impl embedded_io::Write for LcdPort {
    fn write(&mut self, buf: &[u8]) -> Result<usize, ErrorKind> {
        self.0.blocking_write(buf).map_err(|_| ErrorKind::Other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), ErrorKind> {
        self.0.blocking_flush().map_err(|_| ErrorKind::Other)
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Mnemon firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let (button_a, button_b, indicator_a, indicator_b, lcd_tx) = board_pins!(p);
    info!(
        "Pins: buttons GPIO{}/GPIO{}, indicators GPIO{}/GPIO{}, LCD TX GPIO{}",
        board::BUTTON_A_PIN,
        board::BUTTON_B_PIN,
        board::INDICATOR_A_PIN,
        board::INDICATOR_B_PIN,
        board::LCD_TX_PIN,
    );

    let buttons = PinButtons::new(Input::new(button_a, Pull::Up), Input::new(button_b, Pull::Up));
    let indicators = PinIndicators::new(
        Output::new(indicator_a, Level::Low),
        Output::new(indicator_b, Level::Low),
    );

    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board::LCD_BAUD;
    let mut lcd = SerialLcd::new(LcdPort(UartTx::new_blocking(p.UART0, lcd_tx, uart_config)));
    if let Err(e) = lcd.init() {
        warn!("LCD init failed: {}", e);
    }
    info!("LCD link up at {} baud", board::LCD_BAUD);

    let config = board::GAME_CONFIG;
    let timing = TimingService::new(InstantCounter, PeriodTicker::new(config.tick_period_ms));

    let mut game = match GameController::new(lcd, buttons, indicators, timing, &config) {
        Ok(game) => game,
        Err(e) => {
            error!("Invalid game configuration: {}", e);
            loop {
                cortex_m::asm::wfi();
            }
        }
    };
    info!("Game ready: {}-slot display, {}ms tick", config.display_width, config.tick_period_ms);

    loop {
        let outcome = game.run_game();
        if outcome.won {
            info!("Game won");
        } else {
            info!("Game lost with score {}", outcome.score);
        }

        let dropped = game.renderer_mut().display_mut().take_dropped_frames();
        if dropped > 0 {
            warn!("LCD link dropped {} frames", dropped);
        }
    }
}
