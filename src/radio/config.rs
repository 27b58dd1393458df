//! BLE Receive Configuration
//!
//! One-shot register programming that makes the RADIO frame and match
//! packets the way the BLE uncoded PHY lays them out. The radio must be
//! DISABLED before calling in; nothing here checks that.

use defmt::{debug, info, Format};

use crate::ble::AccessAddress;

use super::packet::{PacketConfig0, PacketConfig1};
use super::registers::{Interrupts, Mode, RadioRegisters, Register};

/// Receive-side radio configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub struct RxConfig {
    pub mode: Mode,
    pub pcnf0: PacketConfig0,
    pub pcnf1: PacketConfig1,
    pub access_address: AccessAddress,
}

impl RxConfig {
    /// BLE 1 Mbit/s uncoded PHY on the advertising access address
    pub const BLE_UNCODED_1M: Self = Self {
        mode: Mode::Ble1Mbit,
        pcnf0: PacketConfig0::BLE,
        pcnf1: PacketConfig1::BLE,
        access_address: AccessAddress::ADVERTISING,
    };

    /// Register values this configuration writes, in write order
    pub const fn register_values(&self) -> [(Register, u32); 6] {
        [
            (Register::IntEnClr, Interrupts::ALL),
            (Register::Mode, self.mode.bits()),
            (Register::Pcnf0, self.pcnf0.bits()),
            (Register::Pcnf1, self.pcnf1.bits()),
            (Register::Base0, self.access_address.base()),
            (Register::Prefix0, self.access_address.prefix() as u32),
        ]
    }

    /// Program the radio. Interrupts are disabled before anything else is touched.
    pub fn apply<R: RadioRegisters>(&self, radio: &mut R) {
        for (reg, value) in self.register_values() {
            debug!("RADIO {} <= 0x{:08X}", reg, value);
            radio.write(reg, value);
        }

        info!(
            "RADIO configured for RX: {}, maxlen {}, access address 0x{:08X}",
            self.mode,
            self.pcnf1.max_len,
            self.access_address.value()
        );
    }
}

impl Default for RxConfig {
    fn default() -> Self {
        Self::BLE_UNCODED_1M
    }
}

/// Configure the radio to receive BLE uncoded PHY packets on the advertising
/// access address
pub fn configure_rx<R: RadioRegisters>(radio: &mut R) {
    RxConfig::BLE_UNCODED_1M.apply(radio);
}
