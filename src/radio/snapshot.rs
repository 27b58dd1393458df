//! Register Read-Back
//!
//! A configuration mistake never shows up as an error at write time, only as
//! a radio that hears nothing. Reading the registers back and decoding them
//! catches it on the bench.

use defmt::{warn, Format};

use crate::ble::AccessAddress;

use super::config::RxConfig;
use super::packet::{FieldError, PacketConfig0, PacketConfig1};
use super::registers::{Mode, RadioRegisters, Register};

/// First register found to differ from the expected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum ConfigMismatch {
    /// Interrupt sources still enabled
    InterruptsEnabled(u32),
    Mode { expected: Mode, actual: u32 },
    Pcnf0 { expected: PacketConfig0, actual: PacketConfig0 },
    Pcnf1 { expected: PacketConfig1, actual: PacketConfig1 },
    AccessAddress { expected: u32, actual: u32 },
    /// PCNF1 holds a field value the hardware does not define
    InvalidField(FieldError),
}

impl From<FieldError> for ConfigMismatch {
    fn from(err: FieldError) -> Self {
        ConfigMismatch::InvalidField(err)
    }
}

/// Raw values of the configured registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub struct RadioSnapshot {
    /// Enabled interrupt sources (INTENCLR read-back)
    pub interrupts: u32,
    pub mode: u32,
    pub pcnf0: u32,
    pub pcnf1: u32,
    pub base0: u32,
    pub prefix0: u32,
}

impl RadioSnapshot {
    pub fn capture<R: RadioRegisters>(radio: &R) -> Self {
        Self {
            interrupts: radio.read(Register::IntEnClr),
            mode: radio.read(Register::Mode),
            pcnf0: radio.read(Register::Pcnf0),
            pcnf1: radio.read(Register::Pcnf1),
            base0: radio.read(Register::Base0),
            prefix0: radio.read(Register::Prefix0),
        }
    }

    /// Access address as matched by logical address 0 (PREFIX0.AP0 ‖ BASE0[31:8])
    pub fn access_address(&self) -> AccessAddress {
        AccessAddress::from_parts(self.base0, (self.prefix0 & 0xFF) as u8)
    }

    /// Compare against `expected`, in write order
    pub fn verify(&self, expected: &RxConfig) -> Result<(), ConfigMismatch> {
        let result = self.check(expected);
        if let Err(mismatch) = result {
            warn!("RADIO read-back mismatch: {}", mismatch);
        }
        result
    }

    fn check(&self, expected: &RxConfig) -> Result<(), ConfigMismatch> {
        if self.interrupts != 0 {
            return Err(ConfigMismatch::InterruptsEnabled(self.interrupts));
        }

        if Mode::from_bits(self.mode) != Some(expected.mode) {
            return Err(ConfigMismatch::Mode {
                expected: expected.mode,
                actual: self.mode,
            });
        }

        let pcnf0 = PacketConfig0::from_bits(self.pcnf0);
        if pcnf0 != expected.pcnf0 {
            return Err(ConfigMismatch::Pcnf0 {
                expected: expected.pcnf0,
                actual: pcnf0,
            });
        }

        let pcnf1 = PacketConfig1::from_bits(self.pcnf1)?;
        if pcnf1 != expected.pcnf1 {
            return Err(ConfigMismatch::Pcnf1 {
                expected: expected.pcnf1,
                actual: pcnf1,
            });
        }
        pcnf1.validate(&pcnf0)?;

        let actual = self.access_address();
        if actual != expected.access_address {
            return Err(ConfigMismatch::AccessAddress {
                expected: expected.access_address.value(),
                actual: actual.value(),
            });
        }

        Ok(())
    }
}
