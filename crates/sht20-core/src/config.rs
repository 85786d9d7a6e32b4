use serde::{Deserialize, Serialize};

use crate::protocol::DEFAULT_ADDRESS;

/// Bus number used when none is configured.
pub const DEFAULT_BUS: u8 = 1;

/// Construction options for an [`crate::Sht20`] sequencer.
///
/// `B` is the transport's bus identifier: a Linux bus number, or `()` for a
/// transport that already owns its bus.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sht20Config<B> {
    pub address: u8,
    pub bus: B,
}

impl<B> Sht20Config<B> {
    /// Config for the default device address on `bus`.
    pub const fn new(bus: B) -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            bus,
        }
    }

    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }
}

impl Default for Sht20Config<u8> {
    fn default() -> Self {
        Self::new(DEFAULT_BUS)
    }
}

impl Default for Sht20Config<()> {
    fn default() -> Self {
        Self::new(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Sht20Config::<u8>::default();
        assert_eq!(config.address, 0x40);
        assert_eq!(config.bus, 1);

        assert_eq!(Sht20Config::<()>::default(), Sht20Config::new(()));
    }

    #[test]
    fn test_overrides() {
        let config = Sht20Config::new(3u8).with_address(0x41);
        assert_eq!(config.address, 0x41);
        assert_eq!(config.bus, 3);
    }
}
