//! BLE Addresses
//!
//! - `DeviceAddress`: 6-byte device address, opaque to this crate
//! - `AccessAddress`: 32-bit link-layer access address and its split into the
//!   radio's 3-byte base + 1-byte prefix representation

use defmt::Format;

/// Access address of every advertising-channel packet (Core v5.1, Vol 6, Part B, 2.1.2)
pub const BLE_ACCESS_ADDRESS: u32 = 0x8E89_BED6;

/// Length of a BLE device address in bytes
pub const DEVICE_ADDRESS_LEN: usize = 6;

/// Address errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum AddressError {
    /// Source slice was not exactly 6 bytes
    InvalidLength(usize),
}

/// BLE device address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Format)]
pub struct DeviceAddress([u8; DEVICE_ADDRESS_LEN]);

impl DeviceAddress {
    pub const fn new(bytes: [u8; DEVICE_ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Build an address from a slice, which must hold exactly 6 bytes
    pub fn from_slice(data: &[u8]) -> Result<Self, AddressError> {
        let bytes: [u8; DEVICE_ADDRESS_LEN] = data
            .try_into()
            .map_err(|_| AddressError::InvalidLength(data.len()))?;
        Ok(Self(bytes))
    }

    pub const fn as_bytes(&self) -> &[u8; DEVICE_ADDRESS_LEN] {
        &self.0
    }
}

impl From<[u8; DEVICE_ADDRESS_LEN]> for DeviceAddress {
    fn from(bytes: [u8; DEVICE_ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

/// Link-layer access address
///
/// The RADIO matches addresses as a base (BALEN bytes) followed by a 1-byte
/// prefix. With BALEN = 3 the base is truncated from the left, so the three
/// low bytes of the access address sit in BASE0[31:8] and the top byte goes
/// into the prefix. Cross-checked against Mynewt's nRF5x BLE PHY driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Format)]
pub struct AccessAddress(u32);

impl AccessAddress {
    /// Advertising channel access address
    pub const ADVERTISING: Self = Self(BLE_ACCESS_ADDRESS);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// 3-byte base address, left-aligned in a 32-bit BASE register
    pub const fn base(self) -> u32 {
        (self.0 << 8) & 0xFFFF_FF00
    }

    /// Most significant byte, for the PREFIX register
    pub const fn prefix(self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    /// Rebuild the access address from a BASE register value and a prefix byte
    pub const fn from_parts(base: u32, prefix: u8) -> Self {
        Self(((prefix as u32) << 24) | (base >> 8))
    }
}

impl Default for AccessAddress {
    fn default() -> Self {
        Self::ADVERTISING
    }
}

impl From<AccessAddress> for u32 {
    fn from(aa: AccessAddress) -> Self {
        aa.0
    }
}
