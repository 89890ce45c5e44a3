//! Build script for servodeck-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates servodeck.toml and bakes it into `config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use servodeck_core::config::{ConfigError, ControllerConfig};

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

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Contents of servodeck.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    controller: ControllerConfig,
    servo: ServoSection,
}

/// `[servo]` section
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ServoSection {
    min_pulse_us: u32,
    max_pulse_us: u32,
    frame_us: u32,
}

impl Default for ServoSection {
    fn default() -> Self {
        Self {
            min_pulse_us: 500,
            max_pulse_us: 2500,
            frame_us: 20_000,
        }
    }
}

/// Read and validate servodeck.toml
fn load_config() -> ConfigFile {
    // Re-run if servodeck.toml changes
    println!("cargo:rerun-if-changed=servodeck.toml");

    let config_path = Path::new("servodeck.toml");

    // A missing file means factory defaults
    if !config_path.exists() {
        println!("cargo:warning=servodeck.toml not found, using factory defaults");
        return ConfigFile::default();
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read servodeck.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: ConfigFile = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid servodeck.toml                                   ║\n\
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
    if let Err(e) = config.controller.validate() {
        errors.push(describe(e).to_string());
    }
    validate_servo(&config.servo, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in servodeck.toml                         ║\n\
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

    println!("cargo:warning=servodeck.toml validated successfully");
    config
}

/// Human-readable validation error
fn describe(error: ConfigError) -> &'static str {
    match error {
        ConfigError::ZeroStepSize => "[controller] step_sizes must all be non-zero",
        ConfigError::ZeroHoldThreshold => "[controller] hold_threshold_ms must be non-zero",
        ConfigError::ZeroTickInterval => "[controller] tick_interval_ms must be non-zero",
        ConfigError::ZeroPeriodQuantum => "[controller] period_quantum_ms must be non-zero",
        ConfigError::InvalidPeriodRange => {
            "[controller] need 0 < min_period_ms < max_period_ms"
        }
        ConfigError::InitialPeriodOutOfRange => {
            "[controller] initial_period_ms outside [min, max]"
        }
        ConfigError::InitialAngleOutOfRange => "[controller] initial_angle must be 0..=180",
    }
}

/// Validate the servo pulse calibration
fn validate_servo(servo: &ServoSection, errors: &mut Vec<String>) {
    if servo.min_pulse_us >= servo.max_pulse_us {
        errors.push("[servo] min_pulse_us must be below max_pulse_us".to_string());
    }
    if servo.frame_us == 0 || servo.max_pulse_us > servo.frame_us {
        errors.push("[servo] frame_us must be non-zero and cover max_pulse_us".to_string());
    }
}

/// Write the validated configuration as Rust constants
fn generate_config(config: &ConfigFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let c = &config.controller;
    let s = &config.servo;

    let source = format!(
        "// Generated by build.rs from servodeck.toml\n\
         \n\
         /// Controller tunables\n\
         pub const CONTROLLER_CONFIG: servodeck_core::config::ControllerConfig =\n\
         \x20   servodeck_core::config::ControllerConfig {{\n\
         \x20       hold_threshold_ms: {},\n\
         \x20       step_sizes: {:?},\n\
         \x20       tick_interval_ms: {},\n\
         \x20       initial_angle: {},\n\
         \x20       initial_period_ms: {},\n\
         \x20       min_period_ms: {},\n\
         \x20       max_period_ms: {},\n\
         \x20       period_quantum_ms: {},\n\
         \x20       switch_debounce: servodeck_core::config::SwitchDebounce::{:?},\n\
         \x20       switch_settle_ms: {},\n\
         \x20   }};\n\
         \n\
         /// Servo pulse calibration\n\
         pub const SERVO_CONFIG: servodeck_drivers::servo::ServoConfig =\n\
         \x20   servodeck_drivers::servo::ServoConfig {{\n\
         \x20       min_pulse_us: {},\n\
         \x20       max_pulse_us: {},\n\
         \x20       frame_us: {},\n\
         \x20   }};\n",
        c.hold_threshold_ms,
        c.step_sizes,
        c.tick_interval_ms,
        c.initial_angle,
        c.initial_period_ms,
        c.min_period_ms,
        c.max_period_ms,
        c.period_quantum_ms,
        c.switch_debounce,
        c.switch_settle_ms,
        s.min_pulse_us,
        s.max_pulse_us,
        s.frame_us,
    );

    fs::write(out_dir.join("config.rs"), source).unwrap();
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
