//! nRF RADIO Binding
//!
//! `RadioRegisters` over the real peripheral. Owning the `RADIO` singleton
//! from embassy-nrf is what guarantees exclusive access to the registers.

use defmt::{debug, Format};
use embassy_nrf::{pac, peripherals::RADIO, Peri};

use super::registers::{RadioRegisters, Register};

/// Radio state as reported by the STATE register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum RadioState {
    Disabled,
    Busy(u32),
}

/// RADIO peripheral handle
pub struct NrfRadio<'d> {
    _radio: Peri<'d, RADIO>,
}

impl<'d> NrfRadio<'d> {
    pub fn new(radio: Peri<'d, RADIO>) -> Self {
        Self { _radio: radio }
    }

    /// Stop any ongoing RX/TX and wait until the radio reports DISABLED.
    ///
    /// This is the precondition for `configure_rx`; it is up to the caller to
    /// run it first.
    pub fn disable(&mut self) {
        if self.is_disabled() {
            return;
        }

        let r = pac::RADIO;
        debug!("RADIO disabling from {}", self.state());
        r.events_disabled().write_value(0);
        r.tasks_disable().write_value(1);
        while r.events_disabled().read() == 0 {}
        r.events_disabled().write_value(0);
    }

    pub fn state(&self) -> RadioState {
        let state = pac::RADIO.state().read().0 & 0x0F;
        if state == 0 {
            RadioState::Disabled
        } else {
            RadioState::Busy(state)
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.state() == RadioState::Disabled
    }
}

impl RadioRegisters for NrfRadio<'_> {
    fn write(&mut self, reg: Register, value: u32) {
        let r = pac::RADIO;
        match reg {
            Register::IntEnClr => r.intenclr().write(|w| w.0 = value),
            Register::Mode => r.mode().write(|w| w.0 = value),
            Register::Pcnf0 => r.pcnf0().write(|w| w.0 = value),
            Register::Pcnf1 => r.pcnf1().write(|w| w.0 = value),
            Register::Base0 => r.base0().write_value(value),
            Register::Prefix0 => r.prefix0().write(|w| w.0 = value),
        }
    }

    fn read(&self, reg: Register) -> u32 {
        let r = pac::RADIO;
        match reg {
            Register::IntEnClr => r.intenclr().read().0,
            Register::Mode => r.mode().read().0,
            Register::Pcnf0 => r.pcnf0().read().0,
            Register::Pcnf1 => r.pcnf1().read().0,
            Register::Base0 => r.base0().read(),
            Register::Prefix0 => r.prefix0().read().0,
        }
    }
}
