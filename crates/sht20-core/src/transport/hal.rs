use embedded_hal_async::i2c::I2c;
use thiserror_no_std::Error;

use super::Transport;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HalTransportError<E> {
    /// The bus is already held by an open handle
    #[error("I2C bus is already in use")]
    Unavailable,
    /// A handle was closed while the bus was not lent out
    #[error("I2C bus returned while none was lent out")]
    NotLent,
    #[error("I2C error: {0:?}")]
    I2c(E),
}

/// [`Transport`] over an owned `embedded-hal-async` I²C bus.
///
/// Opening lends the bus out as the handle; closing hands it back. Since
/// the bus is already owned, the bus identifier and open options are `()`.
///
/// To put several sensors on one physical bus, give each its own
/// `HalTransport` around a [`super::SharedI2cDevice`].
pub struct HalTransport<I> {
    i2c: Option<I>,
}

impl<I: I2c> HalTransport<I> {
    pub const fn new(i2c: I) -> Self {
        Self { i2c: Some(i2c) }
    }

    /// Whether the bus is currently lent out to a handle.
    pub fn is_lent(&self) -> bool {
        self.i2c.is_none()
    }

    /// Take the bus back. Returns `None` while a handle is open.
    pub fn into_inner(self) -> Option<I> {
        self.i2c
    }
}

impl<I: I2c> Transport for HalTransport<I> {
    type Bus = ();
    type Options = ();
    type Handle = I;
    type Error = HalTransportError<I::Error>;

    async fn open(&mut self, _bus: &(), _options: ()) -> Result<I, Self::Error> {
        self.i2c.take().ok_or(HalTransportError::Unavailable)
    }

    /// Takes back whatever handle is given while the bus is lent out, and
    /// fails with [`HalTransportError::NotLent`] otherwise.
    async fn close(&mut self, handle: I) -> Result<(), Self::Error> {
        if self.i2c.is_some() {
            return Err(HalTransportError::NotLent);
        }
        self.i2c = Some(handle);
        Ok(())
    }

    async fn write(&mut self, handle: &mut I, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        handle
            .write(address, bytes)
            .await
            .map_err(HalTransportError::I2c)
    }

    async fn read(
        &mut self,
        handle: &mut I,
        address: u8,
        buffer: &mut [u8],
    ) -> Result<usize, Self::Error> {
        // An embedded-hal read either fills the whole buffer or fails
        handle
            .read(address, buffer)
            .await
            .map_err(HalTransportError::I2c)?;
        Ok(buffer.len())
    }
}
