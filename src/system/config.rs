//! General system configuration

use embassy_nrf::{
    config::{Config, Debug, HfclkSource, LfclkSource},
    interrupt::Priority,
};
use progress_clock::config::{ConfigError, DisplayCapability, FaceConfig, Variant};

/// Watchface variant built into the firmware
pub const VARIANT: Variant = Variant::FiveMinuteCountdown;

/// The PineTime LCD shows 16 bit color
pub const CAPABILITY: DisplayCapability = DisplayCapability::Color;

/// Backlight level after boot (0–7)
pub const BACKLIGHT_LEVEL: u8 = 2;

pub struct SystemConfig {}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut config = Config::default();

        // Set high-frequency and low-frequency clock sources to external
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to massively reduce runtime current consumption
        config.dcdc.reg1 = true;

        // The tick timer is the only interrupt source that matters
        config.gpiote_interrupt_priority = Priority::P2;
        config.time_interrupt_priority = Priority::P2;

        // Allow debugging
        config.debug = Debug::Allowed;

        config
    }

    /// Watchface configuration for this build
    pub fn face() -> Result<FaceConfig, ConfigError> {
        let config = VARIANT.config(CAPABILITY);
        config.validate()?;
        defmt::info!("Watchface variant: {}", VARIANT);
        Ok(config)
    }
}
