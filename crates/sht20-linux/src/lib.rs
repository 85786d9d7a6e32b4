//! Linux host support for the SHT20 driver
//!
//! Provides a [`sht20_core::transport::Transport`] over the kernel's
//! `/dev/i2c-N` character devices and the environment configuration used by
//! the `sht20-linux` reader binary.

pub mod config;
pub mod transport;

pub use config::{ConfigError, HostConfig};
pub use transport::{LinuxTransport, LinuxTransportError};
