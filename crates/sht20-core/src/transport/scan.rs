use embedded_hal::i2c::I2c;

/// Lowest address probed by [`scan_bus`]; `0x00..=0x02` are reserved.
pub const SCAN_FIRST_ADDRESS: u8 = 0x03;
/// Highest address probed by [`scan_bus`]; `0x78..` are reserved.
pub const SCAN_LAST_ADDRESS: u8 = 0x77;

const SCAN_CAPACITY: usize = (SCAN_LAST_ADDRESS - SCAN_FIRST_ADDRESS) as usize + 1;

/// Addresses that acknowledged during a scan, in ascending order.
pub type ScanResult = heapless::Vec<u8, SCAN_CAPACITY>;

/// Probe every non-reserved 7-bit address with a one-byte read.
///
/// A device that acknowledges its address is listed; any bus error at an
/// address is taken to mean nothing is there.
pub fn scan_bus<I: I2c>(i2c: &mut I) -> ScanResult {
    let mut found = ScanResult::new();
    let mut probe = [0u8; 1];

    for address in SCAN_FIRST_ADDRESS..=SCAN_LAST_ADDRESS {
        if i2c.read(address, &mut probe).is_ok() {
            log::trace!("Scan: device acknowledged at {:#04x}", address);
            // Capacity covers the whole scan range
            let _ = found.push(address);
        }
    }

    found
}
