//! Hardware-independent core library for the SHT20 driver
//!
//! This crate contains the platform-agnostic parts of the Sensirion SHT20
//! humidity/temperature sensor driver: the CRC-8 checksum, raw value
//! extraction, calibrated unit types, the transport contract and the async
//! measurement sequencer.
//!
//! It is `#![no_std]` so it compiles on both embedded targets and desktop
//! hosts (for the Linux reader and tests).
//!
//! # Measurement pipeline
//!
//! ```text
//! Sht20 ──write cmd──▶ Transport ──▶ delay ──▶ Transport ──read 3 bytes──┐
//!   ▲                                                                     │
//!   └── Temperature / Humidity ◀── calibration ◀── raw::extract_raw_value ◀┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use sht20_core::{Sht20, Sht20Config, transport::HalTransport};
//!
//! let mut sensor = Sht20::new(HalTransport::new(i2c), embassy_time::Delay, Sht20Config::new(()));
//! sensor.open(()).await?;
//! let measurement = sensor.read().await?;
//! log::info!("{} / {}", measurement.temperature, measurement.humidity);
//! sensor.close().await?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod checksum;
pub mod config;
pub mod error;
pub mod protocol;
pub mod raw;
pub mod sensor;
pub mod transport;
pub mod units;

pub use config::Sht20Config;
pub use error::{InvalidArgument, ProtocolError, Sht20Error, StateError, TransportError};
pub use sensor::{Measurement, Sht20};
pub use units::{Humidity, HumidityUnit, Temperature, TemperatureUnit, round};
