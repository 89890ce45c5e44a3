//! servodeck - Servo Jog & Playback Controller Firmware
//!
//! Main firmware binary for an RP2040 servo controller: an encoder jogs
//! the servo, three buttons capture and recall two positions, and
//! playback swings between them at an adjustable period.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::I2C0;
use embassy_rp::pwm::{self, Pwm};
use {defmt_rtt as _, panic_probe as _};

use servodeck_drivers::display::StatusPanel;
use servodeck_drivers::input::LevelInput;
use servodeck_drivers::servo::PwmServo;

use crate::board::ServodeckBoard;
use crate::config::SERVO_CONFIG;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// PWM clock divider for servo frames
const SERVO_PWM_DIVIDER: u8 = 64;

/// Encoder sampling runs here so it preempts the thread-mode tasks,
/// including a control tick spinning in the blocking switch debounce
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("servodeck firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Servo signal on GP16 (PWM slice 0, channel A)
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, servo_pwm_config(SERVO_CONFIG.frame_us));
    let (servo_out, _) = pwm.split();
    let servo = PwmServo::new(unwrap!(servo_out), SERVO_CONFIG);
    info!(
        "Servo PWM initialized: {}-{}us pulse, {}us frame",
        SERVO_CONFIG.min_pulse_us, SERVO_CONFIG.max_pulse_us, SERVO_CONFIG.frame_us
    );

    // Buttons switch to 3.3V (left, middle, right)
    let buttons = [
        LevelInput::active_high(Input::new(p.PIN_12, Pull::Down)),
        LevelInput::active_high(Input::new(p.PIN_11, Pull::Down)),
        LevelInput::active_high(Input::new(p.PIN_10, Pull::Down)),
    ];

    // Encoder push switch pulls to ground
    let switch = LevelInput::active_low(Input::new(p.PIN_15, Pull::Up));

    let enc_a = Input::new(p.PIN_13, Pull::Up);
    let enc_b = Input::new(p.PIN_14, Pull::Up);
    info!("Inputs initialized");

    // OLED on I2C0 (GP9=SCL, GP8=SDA)
    let i2c = I2c::new_async(p.I2C0, p.PIN_9, p.PIN_8, Irqs, i2c::Config::default());
    let panel = StatusPanel::new(i2c);

    let board = ServodeckBoard::new(buttons, switch, servo);

    // Encoder sampling at raised priority
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner.spawn(tasks::encoder_task(enc_a, enc_b)).unwrap();

    // Spawn tasks
    spawner.spawn(tasks::display_task(panel)).unwrap();
    spawner.spawn(tasks::control_task(board)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// PWM configuration for one servo frame per `frame_us`
fn servo_pwm_config(frame_us: u32) -> pwm::Config {
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq();
    let frame_hz = 1_000_000 / frame_us.max(1);
    let top = clock_freq_hz / (frame_hz.max(1) * u32::from(SERVO_PWM_DIVIDER)) - 1;

    let mut config = pwm::Config::default();
    config.divider = SERVO_PWM_DIVIDER.into();
    config.top = top.min(u32::from(u16::MAX)) as u16;
    config
}
