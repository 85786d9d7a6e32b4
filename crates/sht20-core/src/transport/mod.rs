//! Bus transport contract
//!
//! The sequencer only needs four operations from a bus: open it, close it,
//! and write or read bytes at a device address through the open handle.
//! Implementations for the `embedded-hal-async` I²C traits live in [`hal`];
//! the Linux host crate provides one for `/dev/i2c-N` character devices.

mod hal;
mod scan;
mod shared;

pub use hal::{HalTransport, HalTransportError};
pub use scan::{SCAN_FIRST_ADDRESS, SCAN_LAST_ADDRESS, ScanResult, scan_bus};
pub use shared::SharedI2cDevice;

/// Port for talking to devices on a two-wire bus.
///
/// A transport hands out one [`Transport::Handle`] per `open` call. The
/// handle is owned by the caller until it is given back through `close`.
pub trait Transport {
    /// Identifies which bus to open.
    type Bus;
    /// Transport-specific open options.
    type Options;
    /// An open bus connection.
    type Handle;
    type Error: core::fmt::Debug;

    fn open(
        &mut self,
        bus: &Self::Bus,
        options: Self::Options,
    ) -> impl Future<Output = Result<Self::Handle, Self::Error>>;

    fn close(&mut self, handle: Self::Handle) -> impl Future<Output = Result<(), Self::Error>>;

    /// Write `bytes` to the device at `address`.
    fn write(
        &mut self,
        handle: &mut Self::Handle,
        address: u8,
        bytes: &[u8],
    ) -> impl Future<Output = Result<(), Self::Error>>;

    /// Read from the device at `address` into `buffer`.
    ///
    /// Returns how many bytes were actually received.
    fn read(
        &mut self,
        handle: &mut Self::Handle,
        address: u8,
        buffer: &mut [u8],
    ) -> impl Future<Output = Result<usize, Self::Error>>;
}

/// Synchronous bus scan, independent of any open sensor.
pub trait Scan {
    type Bus;
    type Error;

    /// List the addresses that acknowledge on `bus`.
    fn scan(&self, bus: &Self::Bus) -> Result<ScanResult, Self::Error>;
}
