use embedded_hal::i2c::I2c;
use linux_embedded_hal::i2cdev::linux::LinuxI2CError;
use linux_embedded_hal::{I2CError, I2cdev};
use log::debug;
use sht20_core::transport::{Scan, ScanResult, Transport, scan_bus};
use thiserror_no_std::Error;

#[derive(Debug, Error)]
pub enum LinuxTransportError {
    #[error("Failed to open /dev/i2c-{bus}: {error:?}")]
    Open { bus: u8, error: LinuxI2CError },
    #[error("I2C transfer failed: {0:?}")]
    I2c(I2CError),
}

/// Path of the character device for bus number `bus`.
pub fn bus_path(bus: u8) -> String {
    format!("/dev/i2c-{}", bus)
}

/// Transport over Linux `i2c-dev` character devices.
///
/// The bus identifier is the adapter number `N` of `/dev/i2c-N`. The handle
/// is the open device file; closing drops it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxTransport;

fn open_bus(bus: u8) -> Result<I2cdev, LinuxTransportError> {
    I2cdev::new(bus_path(bus)).map_err(|error| LinuxTransportError::Open { bus, error })
}

impl Transport for LinuxTransport {
    type Bus = u8;
    type Options = ();
    type Handle = I2cdev;
    type Error = LinuxTransportError;

    async fn open(&mut self, bus: &u8, _options: ()) -> Result<I2cdev, LinuxTransportError> {
        debug!("Opening {}", bus_path(*bus));
        open_bus(*bus)
    }

    async fn close(&mut self, handle: I2cdev) -> Result<(), LinuxTransportError> {
        drop(handle);
        Ok(())
    }

    async fn write(
        &mut self,
        handle: &mut I2cdev,
        address: u8,
        bytes: &[u8],
    ) -> Result<(), LinuxTransportError> {
        handle
            .write(address, bytes)
            .map_err(LinuxTransportError::I2c)
    }

    async fn read(
        &mut self,
        handle: &mut I2cdev,
        address: u8,
        buffer: &mut [u8],
    ) -> Result<usize, LinuxTransportError> {
        // The kernel rejects reads the device does not complete in full
        handle.read(address, buffer).map_err(LinuxTransportError::I2c)?;
        Ok(buffer.len())
    }
}

impl Scan for LinuxTransport {
    type Bus = u8;
    type Error = LinuxTransportError;

    fn scan(&self, bus: &u8) -> Result<ScanResult, LinuxTransportError> {
        let mut i2c = open_bus(*bus)?;
        Ok(scan_bus(&mut i2c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_path() {
        assert_eq!(bus_path(1), "/dev/i2c-1");
        assert_eq!(bus_path(12), "/dev/i2c-12");
    }
}
