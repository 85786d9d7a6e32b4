//! Sharing one async I2C bus between several sensors
//!
//! Each sensor gets its own [`SharedI2cDevice`] pointing at the same
//! Embassy mutex. The lock is held for a single bus transfer only, so while
//! one SHT20 waits out its conversion time the others can use the bus.

use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;

/// Async I2C device on a bus shared through an Embassy mutex.
///
/// Bus errors arrive wrapped in
/// [`embassy_embedded_hal::shared_bus::I2cDeviceError`].
///
/// # Example
///
/// ```ignore
/// use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
/// use embassy_sync::mutex::Mutex;
/// use static_cell::StaticCell;
///
/// static I2C_BUS: StaticCell<Mutex<CriticalSectionRawMutex, Bus>> = StaticCell::new();
///
/// let bus = I2C_BUS.init(Mutex::new(i2c));
/// let indoor = Sht20::new(HalTransport::new(SharedI2cDevice::new(bus)), Delay, Sht20Config::new(()));
/// let outdoor = Sht20::new(HalTransport::new(SharedI2cDevice::new(bus)), Delay, Sht20Config::new(()).with_address(0x41));
/// ```
pub type SharedI2cDevice<'a, M, T> = I2cDevice<'a, M, T>;
