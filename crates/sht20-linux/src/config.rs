//! Reader configuration from the process environment
//!
//! | Variable            | Default | Meaning                                  |
//! |---------------------|---------|------------------------------------------|
//! | `SHT20_BUS`         | `1`     | Adapter number `N` of `/dev/i2c-N`       |
//! | `SHT20_ADDRESS`     | `0x40`  | Device address, decimal or `0x` hex      |
//! | `SHT20_INTERVAL_MS` | `2000`  | Pause between measurements               |
//! | `SHT20_SAMPLES`     | `0`     | Measurements to take, `0` means forever  |
//! | `SHT20_SCAN`        | `false` | List the devices on the bus before start |

use sht20_core::Sht20Config;
use thiserror_no_std::Error;

pub const DEFAULT_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub sensor: Sht20Config<u8>,
    pub interval_ms: u64,
    pub samples: u32,
    pub scan: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            sensor: Sht20Config::default(),
            interval_ms: DEFAULT_INTERVAL_MS,
            samples: 0,
            scan: false,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source, falling back to defaults
    /// for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("SHT20_BUS") {
            config.sensor.bus = parse("SHT20_BUS", &value, |v| v.parse().ok())?;
        }
        if let Some(value) = lookup("SHT20_ADDRESS") {
            config.sensor.address = parse("SHT20_ADDRESS", &value, parse_address)?;
        }
        if let Some(value) = lookup("SHT20_INTERVAL_MS") {
            config.interval_ms = parse("SHT20_INTERVAL_MS", &value, |v| v.parse().ok())?;
        }
        if let Some(value) = lookup("SHT20_SAMPLES") {
            config.samples = parse("SHT20_SAMPLES", &value, |v| v.parse().ok())?;
        }
        if let Some(value) = lookup("SHT20_SCAN") {
            config.scan = parse("SHT20_SCAN", &value, parse_flag)?;
        }

        Ok(config)
    }
}

fn parse<T>(
    key: &'static str,
    value: &str,
    parser: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    parser(value.trim()).ok_or_else(|| ConfigError::Invalid {
        key,
        value: value.to_owned(),
    })
}

/// 7-bit address, written as decimal or `0x`-prefixed hex.
fn parse_address(value: &str) -> Option<u8> {
    let address = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16).ok()?,
        None => value.parse().ok()?,
    };

    (address <= 0x7F).then_some(address)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
