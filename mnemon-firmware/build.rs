//! Build script for mnemon-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml and generates the board constants from it

use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Highest GPIO number on the RP2040
const MAX_GPIO: i64 = 29;

/// GPIOs that can carry UART0 TX
const UART0_TX_PINS: [i64; 4] = [0, 12, 16, 28];

/// Widths the renderer supports ("ERROR" must fit)
const DISPLAY_WIDTHS: std::ops::RangeInclusive<i64> = 5..=6;

const PIN_KEYS: [&str; 5] = ["button_a", "button_b", "indicator_a", "indicator_b", "lcd_tx"];

/// `[timing]` keys and the `Timings` field each one becomes
const PAUSE_KEYS: [(&str, &str); 6] = [
    ("word_pause_ms", "word_pause"),
    ("scroll_step_ms", "scroll_step"),
    ("round_pause_ms", "round_pause"),
    ("watch_pause_ms", "watch_pause"),
    ("flash_ms", "flash_duration"),
    ("debounce_ms", "debounce_poll"),
];

fn main() {
    setup_linker();
    let config = load_config();
    let board = validate(&config);
    generate(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

fn load_config() -> toml::Value {
    println!("cargo:rerun-if-changed=game.toml");

    let path = Path::new("game.toml");
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read game.toml", &[e.to_string()]),
    };

    match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let lines: Vec<String> = e.to_string().lines().map(str::to_owned).collect();
            fail("Invalid TOML syntax in game.toml", &lines)
        }
    }
}

/// Validated values ready for code generation
struct Board {
    pins: BTreeMap<&'static str, i64>,
    lcd_baud: i64,
    width: i64,
    tick_ms: i64,
    pauses: Vec<(&'static str, i64)>,
}

fn validate(config: &toml::Value) -> Board {
    let mut errors = Vec::new();

    let board = section(config, "board", &mut errors);
    let mut pins = BTreeMap::new();
    for key in PIN_KEYS {
        match integer(board, "board", key, &mut errors) {
            Some(pin) if (0..=MAX_GPIO).contains(&pin) => {
                if let Some((other, _)) = pins.iter().find(|&(_, &p)| p == pin) {
                    errors.push(format!("[board] {} and {} share GPIO{}", other, key, pin));
                }
                pins.insert(key, pin);
            }
            Some(pin) => errors.push(format!("[board] {} = {} is not a GPIO (0-29)", key, pin)),
            None => {}
        }
    }
    if let Some(&tx) = pins.get("lcd_tx") {
        if !UART0_TX_PINS.contains(&tx) {
            errors.push(format!("[board] lcd_tx = {} cannot carry UART0 TX", tx));
        }
    }
    let lcd_baud = integer(board, "board", "lcd_baud", &mut errors).unwrap_or(0);
    if !(1200..=921_600).contains(&lcd_baud) {
        errors.push(format!("[board] lcd_baud must be 1200-921600, got {}", lcd_baud));
    }

    let display = section(config, "display", &mut errors);
    let width = integer(display, "display", "width", &mut errors).unwrap_or(0);
    if !DISPLAY_WIDTHS.contains(&width) {
        errors.push(format!("[display] width must be 5 or 6, got {}", width));
    }

    let timing = section(config, "timing", &mut errors);
    let tick_ms = integer(timing, "timing", "tick_ms", &mut errors).unwrap_or(0);
    if !(1..=1000).contains(&tick_ms) {
        errors.push(format!("[timing] tick_ms must be 1-1000, got {}", tick_ms));
    }

    let mut pauses = Vec::new();
    for (key, field) in PAUSE_KEYS {
        let Some(ms) = integer(timing, "timing", key, &mut errors) else {
            continue;
        };
        if ms <= 0 {
            errors.push(format!("[timing] {} must be positive", key));
            continue;
        }
        let tick = tick_ms.max(1);
        let units = (ms + tick - 1) / tick;
        if units > i64::from(u16::MAX) {
            errors.push(format!("[timing] {} is too long for the tick", key));
            continue;
        }
        pauses.push((field, units));
    }

    if !errors.is_empty() {
        fail("Invalid game.toml", &errors);
    }

    Board {
        pins,
        lcd_baud,
        width,
        tick_ms,
        pauses,
    }
}

fn section<'a>(
    config: &'a toml::Value,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a toml::value::Table> {
    let table = config.get(name).and_then(|v| v.as_table());
    if table.is_none() {
        errors.push(format!("Missing [{}] section", name));
    }
    table
}

fn integer(
    table: Option<&toml::value::Table>,
    section: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<i64> {
    let table = table?;
    match table.get(key) {
        Some(toml::Value::Integer(v)) => Some(*v),
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            None
        }
    }
}

/// Write `game_config.rs` into OUT_DIR
fn generate(board: &Board) {
    let mut out = String::from("// Generated by build.rs from game.toml\n\n");

    for (key, pin) in &board.pins {
        out += &format!("pub const {}_PIN: u8 = {};\n", key.to_uppercase(), pin);
    }
    out += &format!("pub const LCD_BAUD: u32 = {};\n\n", board.lcd_baud);

    out += "pub const GAME_CONFIG: mnemon_core::GameConfig = mnemon_core::GameConfig {\n";
    out += &format!("    display_width: {},\n", board.width);
    out += &format!("    tick_period_ms: {},\n", board.tick_ms);
    out += "    timings: mnemon_core::Timings {\n";
    for (field, units) in &board.pauses {
        out += &format!("        {}: {},\n", field, units);
    }
    out += "    },\n};\n\n";

    // Pin singletons must be named statically, so hand them out by macro
    let pin = |key: &str| format!("$p.PIN_{}", board.pins[key]);
    out += "/// Take (button A, button B, indicator A, indicator B, LCD TX) from the peripherals\n";
    out += "macro_rules! board_pins {\n    ($p:ident) => {\n        (";
    out += &PIN_KEYS.map(pin).join(", ");
    out += ")\n    };\n}\n";

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("game_config.rs"), out).unwrap();
}

fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let line = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", line)
        })
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
