//! RADIO Register Access
//!
//! The configurator never addresses hardware directly. It writes through a
//! `RadioRegisters` handle, which is the real peripheral on target
//! (`radio::nrf::NrfRadio`) and a plain register file in tests.
//!
//! Offsets and field values follow the nRF51/nRF52 reference manuals; the
//! registers used here share their layout across both families.

use defmt::Format;

/// Registers written during receive configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Register {
    /// Interrupt enable clear. Reads back the enabled sources.
    IntEnClr,
    /// Data rate and modulation
    Mode,
    /// Packet configuration register 0
    Pcnf0,
    /// Packet configuration register 1
    Pcnf1,
    /// Base address 0
    Base0,
    /// Prefix bytes for logical addresses 0-3
    Prefix0,
}

impl Register {
    /// Every configured register, in the order the configurator writes them
    pub const ALL: [Register; 6] = [
        Register::IntEnClr,
        Register::Mode,
        Register::Pcnf0,
        Register::Pcnf1,
        Register::Base0,
        Register::Prefix0,
    ];

    /// Offset from the RADIO base address
    pub const fn offset(self) -> usize {
        match self {
            Register::IntEnClr => 0x308,
            Register::Mode => 0x510,
            Register::Pcnf0 => 0x514,
            Register::Pcnf1 => 0x518,
            Register::Base0 => 0x51C,
            Register::Prefix0 => 0x524,
        }
    }

    /// Position in `Register::ALL`
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Handle on a RADIO register block
///
/// `write` takes `&mut self`: programming the radio needs exclusive access to
/// the peripheral for the whole sequence.
pub trait RadioRegisters {
    fn write(&mut self, reg: Register, value: u32);

    fn read(&self, reg: Register) -> u32;
}

/// RADIO interrupt sources (INTENSET/INTENCLR bit positions)
pub struct Interrupts;

impl Interrupts {
    pub const READY: u32 = 1 << 0;
    pub const ADDRESS: u32 = 1 << 1;
    pub const PAYLOAD: u32 = 1 << 2;
    pub const END: u32 = 1 << 3;
    pub const DISABLED: u32 = 1 << 4;
    pub const DEVMATCH: u32 = 1 << 5;
    pub const DEVMISS: u32 = 1 << 6;
    pub const RSSIEND: u32 = 1 << 7;
    pub const BCMATCH: u32 = 1 << 10;

    /// Sources present on every nRF51/nRF52 RADIO
    pub const COMMON: u32 = Self::READY
        | Self::ADDRESS
        | Self::PAYLOAD
        | Self::END
        | Self::DISABLED
        | Self::DEVMATCH
        | Self::DEVMISS
        | Self::RSSIEND
        | Self::BCMATCH;

    /// Disable-all mask for INTENCLR. Bits without a source are ignored, so
    /// setting every bit also clears the chip-specific sources above bit 10.
    pub const ALL: u32 = u32::MAX;
}

/// Radio data rate and modulation (MODE register)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
#[repr(u32)]
pub enum Mode {
    Nrf1Mbit = 0,
    Nrf2Mbit = 1,
    /// BLE uncoded PHY, 1 Mbit/s
    Ble1Mbit = 3,
    /// BLE uncoded PHY, 2 Mbit/s
    Ble2Mbit = 4,
}

impl Mode {
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Decode the MODE field (bits 3:0)
    pub fn from_bits(value: u32) -> Option<Self> {
        match value & 0x0F {
            0 => Some(Self::Nrf1Mbit),
            1 => Some(Self::Nrf2Mbit),
            3 => Some(Self::Ble1Mbit),
            4 => Some(Self::Ble2Mbit),
            _ => None,
        }
    }
}
