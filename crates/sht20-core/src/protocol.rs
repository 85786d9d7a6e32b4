//! SHT20 wire protocol constants
//!
//! Values from the Sensirion SHT20 datasheet. Only the "no hold master"
//! commands are used: the sensor NAKs reads until the conversion is done, so
//! the driver waits the documented conversion time before reading instead of
//! holding the clock line.

/// Fixed 7-bit I²C address of the SHT20.
pub const DEFAULT_ADDRESS: u8 = 0x40;

/// Worst-case 14-bit temperature conversion time.
pub const TEMPERATURE_CONVERSION_MS: u32 = 85;

/// Worst-case 12-bit humidity conversion time.
pub const HUMIDITY_CONVERSION_MS: u32 = 29;

/// Decimal places kept for a calibrated temperature.
pub const TEMPERATURE_DECIMAL_PLACES: i32 = 2;

/// Decimal places kept for a calibrated humidity.
pub const HUMIDITY_DECIMAL_PLACES: i32 = 1;

/// Measurement commands understood by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Trigger T measurement, no hold master
    TriggerTemperatureNoHold,
    /// Trigger RH measurement, no hold master
    TriggerHumidityNoHold,
}

impl Command {
    /// The command byte sent on the bus.
    pub const fn code(self) -> u8 {
        match self {
            Command::TriggerTemperatureNoHold => 0xF3,
            Command::TriggerHumidityNoHold => 0xF5,
        }
    }

    /// How long to wait after the command before the result can be read.
    pub const fn conversion_time_ms(self) -> u32 {
        match self {
            Command::TriggerTemperatureNoHold => TEMPERATURE_CONVERSION_MS,
            Command::TriggerHumidityNoHold => HUMIDITY_CONVERSION_MS,
        }
    }
}

/// `T = -46.85 + 175.72 * S_T / 2^16` (datasheet section 6.2).
pub fn temperature_from_raw(raw: u16) -> f64 {
    (raw as f64 / 65536.0) * 175.72 - 46.85
}

/// `RH = -6 + 125 * S_RH / 2^16` (datasheet section 6.1).
pub fn humidity_from_raw(raw: u16) -> f64 {
    (raw as f64 / 65536.0) * 125.0 - 6.0
}
