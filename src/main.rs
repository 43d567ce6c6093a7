#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Level, Output, OutputDrive},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker};

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, display::Display};
use progress_clock::ui::{ProgressWatchface, WatchFace};
use system::{
    config::{SystemConfig, BACKLIGHT_LEVEL},
    time::{TimeManager, TimeReference},
};

// Include build time clock (UTC epoch and local offset)
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

// Communication channels
static TICK: Signal<ThreadModeRawMutex, ()> = Signal::new();

/// Mark the watchface dirty once per second
#[embassy_executor::task(pool_size = 1)]
async fn second_tick() {
    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        TICK.signal(());

        // Re-schedule the timer interrupt in 1s
        tick.next().await;
    }
}

/// Redraw the watchface on every tick
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display<SPI2>, mut face: ProgressWatchface, clock: TimeManager) {
    loop {
        TICK.wait().await;
        face.on_tick();

        match display.refresh(&mut face, &clock) {
            Ok(drawn) => defmt::trace!("Redrew layers {=u8:b}", drawn.bits()),
            Err(err) => defmt::error!("Display update failed: {}", err),
        }
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize Backlight
    let mut backlight = unwrap!(Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
        0,
    ));

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));
    unwrap!(backlight.set(BACKLIGHT_LEVEL));
    defmt::info!("Backlight at level {}", backlight.brightness());

    // Initialize clock
    let reference = unwrap!(TimeReference::from_timestamp(UTC_EPOCH, UTC_OFFSET));
    let clock = TimeManager::init(reference);

    // Build the watchface
    let face = ProgressWatchface::load(unwrap!(SystemConfig::face()));

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(_spawner.spawn(update_lcd(display, face, clock)));
    unwrap!(_spawner.spawn(second_tick()));
}
