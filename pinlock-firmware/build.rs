//! Build script for pinlock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates keypad.toml at compile time
//! - Generates the `KEYPAD_CONFIG` constant from keypad.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timing keys, their integer range, and the minimum accepted value
const TIMING_KEYS: &[(&str, i64, i64)] = &[
    ("digit_hold_us", 0, u32::MAX as i64),
    ("settle_us", 0, u32::MAX as i64),
    ("blink_period", 2, u16::MAX as i64),
    ("scroll_hold_us", 0, u32::MAX as i64),
    ("scroll_step_cycles", 1, u16::MAX as i64),
    ("scroll_steps", 1, u8::MAX as i64),
    ("error_hold_us", 0, u32::MAX as i64),
    ("error_passes", 1, u8::MAX as i64),
    ("error_blink_after", 0, u16::MAX as i64),
    ("error_blank_ms", 0, u32::MAX as i64),
];

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated contents of keypad.toml
struct KeypadToml {
    password: [u8; 4],
    timing: Vec<(&'static str, i64)>,
}

/// Read and validate keypad.toml
fn load_config() -> KeypadToml {
    // Re-run if keypad.toml changes
    println!("cargo:rerun-if-changed=keypad.toml");

    let config_path = Path::new("keypad.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: keypad.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a keypad.toml configuration file.         ║\n\
            ║  Please create one in the pinlock-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read keypad.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in keypad.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let password = validate_password(&config, &mut errors);
    let timing = validate_timing(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid keypad configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=keypad.toml validated successfully");
    KeypadToml { password, timing }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate [keypad] password: exactly four decimal digits
fn validate_password(config: &toml::Value, errors: &mut Vec<String>) -> [u8; 4] {
    let mut password = [0u8; 4];

    let value = match config.get("keypad").and_then(|k| k.get("password")) {
        Some(toml::Value::String(s)) => s,
        Some(_) => {
            errors.push("[keypad] password must be a string such as \"9583\"".to_string());
            return password;
        }
        None => {
            errors.push("Missing [keypad] password".to_string());
            return password;
        }
    };

    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(format!(
            "[keypad] password must be exactly 4 digits, got '{}'",
            value
        ));
        return password;
    }

    for (cell, b) in password.iter_mut().zip(value.bytes()) {
        *cell = b - b'0';
    }
    password
}

/// Validate [timing]: known keys, integers within range
fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) -> Vec<(&'static str, i64)> {
    let mut timing = Vec::new();

    let table = match config.get("timing") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[timing] must be a table".to_string());
            return timing;
        }
        None => return timing,
    };

    for (key, value) in table {
        let Some(&(name, min, max)) = TIMING_KEYS.iter().find(|(name, _, _)| name == key) else {
            errors.push(format!("[timing] unknown key '{}'", key));
            continue;
        };

        match value {
            toml::Value::Integer(v) if (min..=max).contains(v) => timing.push((name, *v)),
            toml::Value::Integer(_) => {
                errors.push(format!("[timing] {} must be {}-{}", name, min, max));
            }
            _ => errors.push(format!("[timing] {} must be an integer", name)),
        }
    }

    timing
}

/// Write the `KEYPAD_CONFIG` constant to OUT_DIR
fn generate_config(config: &KeypadToml) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let mut code = String::new();
    code.push_str("/// Keypad configuration generated from keypad.toml\n");
    code.push_str("pub const KEYPAD_CONFIG: pinlock_core::KeypadConfig = pinlock_core::KeypadConfig {\n");
    code.push_str(&format!("    password: {:?},\n", config.password));
    code.push_str("    timing: pinlock_core::Timing {\n");
    for (name, value) in &config.timing {
        code.push_str(&format!("        {}: {},\n", name, value));
    }
    code.push_str("        ..pinlock_core::Timing::DEFAULT\n");
    code.push_str("    },\n");
    code.push_str("};\n");

    fs::write(out_dir.join("keypad_config.rs"), code).unwrap();
}
