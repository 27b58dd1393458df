//! Packet Format Fields
//!
//! The RADIO frames packets as
//!
//! ```text
//! | Preamble | Address (base + prefix) | S0 | LENGTH | S1 | Payload | CRC |
//! ```
//!
//! and BLE advertising and data packets (Core v5.1, Vol 6, Part B, 2.1, 2.3, 2.4) as
//!
//! ```text
//! | Preamble | Access Address | Header (1 byte) | Length (1 byte) | Payload | CRC |
//! ```
//!
//! so BLE maps onto the radio with S0 = 1 byte, LENGTH = 8 bits, S1 = 0 bits
//! (nRF51 RM v3.0, 17.1.2). PCNF0 holds those widths, PCNF1 holds length
//! limits, base address length, endianness and whitening.

use defmt::Format;

/// Combined length of S0, LENGTH, S1 and payload cannot exceed this, whatever MAXLEN says
/// (nRF51 RM v3.0, 17.1.3)
pub const MAX_COMBINED_LEN: u16 = 254;

const PCNF0_LFLEN_POS: u32 = 0;
const PCNF0_LFLEN_MASK: u32 = 0x0F;
const PCNF0_S0LEN_POS: u32 = 8;
const PCNF0_S0LEN_MASK: u32 = 0x01;
const PCNF0_S1LEN_POS: u32 = 16;
const PCNF0_S1LEN_MASK: u32 = 0x0F;

const PCNF1_MAXLEN_POS: u32 = 0;
const PCNF1_MAXLEN_MASK: u32 = 0xFF;
const PCNF1_STATLEN_POS: u32 = 8;
const PCNF1_STATLEN_MASK: u32 = 0xFF;
const PCNF1_BALEN_POS: u32 = 16;
const PCNF1_BALEN_MASK: u32 = 0x07;
const PCNF1_ENDIAN_POS: u32 = 24;
const PCNF1_ENDIAN_MASK: u32 = 0x01;
const PCNF1_WHITEEN_POS: u32 = 25;
const PCNF1_WHITEEN_MASK: u32 = 0x01;

/// Packet field errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum FieldError {
    /// LENGTH field wider than the 4-bit LFLEN field allows
    LengthFieldTooWide(u8),
    /// S1 field wider than the 4-bit S1LEN field allows
    S1FieldTooWide(u8),
    /// BALEN outside 2..=4 bytes
    BaseAddressLength(u32),
    /// Header plus MAXLEN over `MAX_COMBINED_LEN`
    MaxLenExceedsHardware(u16),
}

/// S0 field length. Unlike LENGTH and S1 this one is counted in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
#[repr(u8)]
pub enum S0Length {
    Zero = 0,
    OneByte = 1,
}

impl S0Length {
    pub const fn bytes(self) -> u8 {
        self as u8
    }
}

/// On-air endianness of S0, LENGTH, S1 and payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
#[repr(u8)]
pub enum Endianness {
    Little = 0,
    Big = 1,
}

/// Base address length in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
#[repr(u8)]
pub enum BaseAddressLength {
    Two = 2,
    Three = 3,
    Four = 4,
}

impl BaseAddressLength {
    pub const fn bytes(self) -> u8 {
        self as u8
    }

    pub fn from_bits(value: u32) -> Result<Self, FieldError> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(FieldError::BaseAddressLength(other)),
        }
    }
}

/// PCNF0: S0, LENGTH and S1 field widths
///
/// Only built through `new` or `from_bits`, so the widths always fit their
/// 4-bit register fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub struct PacketConfig0 {
    s0_len: S0Length,
    length_bits: u8,
    s1_bits: u8,
}

impl PacketConfig0 {
    /// BLE uncoded PHY: 1 byte header in S0, 8 bit LENGTH, no S1
    pub const BLE: Self = Self {
        s0_len: S0Length::OneByte,
        length_bits: 8,
        s1_bits: 0,
    };

    pub fn new(s0_len: S0Length, length_bits: u8, s1_bits: u8) -> Result<Self, FieldError> {
        if u32::from(length_bits) > PCNF0_LFLEN_MASK {
            return Err(FieldError::LengthFieldTooWide(length_bits));
        }
        if u32::from(s1_bits) > PCNF0_S1LEN_MASK {
            return Err(FieldError::S1FieldTooWide(s1_bits));
        }
        Ok(Self {
            s0_len,
            length_bits,
            s1_bits,
        })
    }

    pub const fn s0_len(&self) -> S0Length {
        self.s0_len
    }

    /// LENGTH field width in bits
    pub const fn length_bits(&self) -> u8 {
        self.length_bits
    }

    /// S1 field width in bits
    pub const fn s1_bits(&self) -> u8 {
        self.s1_bits
    }

    /// S0 width in bits
    pub const fn s0_bits(&self) -> u8 {
        self.s0_len.bytes() * 8
    }

    /// Bytes taken by S0, LENGTH and S1 together
    pub const fn header_bytes(&self) -> u16 {
        self.s0_len.bytes() as u16
            + (self.length_bits as u16).div_ceil(8)
            + (self.s1_bits as u16).div_ceil(8)
    }

    pub const fn bits(&self) -> u32 {
        ((self.length_bits as u32 & PCNF0_LFLEN_MASK) << PCNF0_LFLEN_POS)
            | ((self.s0_len as u32 & PCNF0_S0LEN_MASK) << PCNF0_S0LEN_POS)
            | ((self.s1_bits as u32 & PCNF0_S1LEN_MASK) << PCNF0_S1LEN_POS)
    }

    /// Decode the S0LEN, LFLEN and S1LEN fields; other PCNF0 bits are ignored
    pub fn from_bits(value: u32) -> Self {
        let s0_len = if (value >> PCNF0_S0LEN_POS) & PCNF0_S0LEN_MASK == 0 {
            S0Length::Zero
        } else {
            S0Length::OneByte
        };
        Self {
            s0_len,
            length_bits: ((value >> PCNF0_LFLEN_POS) & PCNF0_LFLEN_MASK) as u8,
            s1_bits: ((value >> PCNF0_S1LEN_POS) & PCNF0_S1LEN_MASK) as u8,
        }
    }
}

/// Largest MAXLEN the hardware accepts behind the given header fields
pub const fn max_payload_len(pcnf0: &PacketConfig0) -> u8 {
    (MAX_COMBINED_LEN - pcnf0.header_bytes()) as u8
}

/// PCNF1: length limits, base address length, endianness and whitening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub struct PacketConfig1 {
    /// Maximum payload length in bytes
    pub max_len: u8,
    /// Bytes added to LENGTH to get the payload length
    pub static_len: u8,
    pub base_len: BaseAddressLength,
    pub endian: Endianness,
    pub whitening: bool,
}

impl PacketConfig1 {
    /// BLE uncoded PHY.
    ///
    /// Max payload is 254 - 1 (S0) - 1 (LENGTH) = 252, short of BLE's own
    /// limit (257 bytes combined in v4.2, 258 with CTEInfo in v5.1).
    /// 3 byte base + 1 byte prefix give the 4 byte access address. Little
    /// endian is required by BLE and by the address matcher (nRF51 RM v3.0,
    /// 17.1.13). The radio's whitening is the BLE scheme (17.1.6), so it only
    /// needs enabling.
    pub const BLE: Self = Self {
        max_len: max_payload_len(&PacketConfig0::BLE),
        static_len: 0,
        base_len: BaseAddressLength::Three,
        endian: Endianness::Little,
        whitening: true,
    };

    pub const fn bits(&self) -> u32 {
        ((self.max_len as u32 & PCNF1_MAXLEN_MASK) << PCNF1_MAXLEN_POS)
            | ((self.static_len as u32 & PCNF1_STATLEN_MASK) << PCNF1_STATLEN_POS)
            | ((self.base_len as u32 & PCNF1_BALEN_MASK) << PCNF1_BALEN_POS)
            | ((self.endian as u32 & PCNF1_ENDIAN_MASK) << PCNF1_ENDIAN_POS)
            | ((self.whitening as u32 & PCNF1_WHITEEN_MASK) << PCNF1_WHITEEN_POS)
    }

    pub fn from_bits(value: u32) -> Result<Self, FieldError> {
        let endian = if (value >> PCNF1_ENDIAN_POS) & PCNF1_ENDIAN_MASK == 0 {
            Endianness::Little
        } else {
            Endianness::Big
        };
        Ok(Self {
            max_len: ((value >> PCNF1_MAXLEN_POS) & PCNF1_MAXLEN_MASK) as u8,
            static_len: ((value >> PCNF1_STATLEN_POS) & PCNF1_STATLEN_MASK) as u8,
            base_len: BaseAddressLength::from_bits((value >> PCNF1_BALEN_POS) & PCNF1_BALEN_MASK)?,
            endian,
            whitening: (value >> PCNF1_WHITEEN_POS) & PCNF1_WHITEEN_MASK != 0,
        })
    }

    /// Check MAXLEN against the hardware ceiling for the given header fields
    pub fn validate(&self, pcnf0: &PacketConfig0) -> Result<(), FieldError> {
        let combined = pcnf0.header_bytes() + u16::from(self.max_len);
        if combined > MAX_COMBINED_LEN {
            return Err(FieldError::MaxLenExceedsHardware(combined));
        }
        Ok(())
    }
}
