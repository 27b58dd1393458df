//! RADIO Peripheral Configuration
//!
//! Layers, bottom-up:
//! - `registers`: register names, field values and the `RadioRegisters` handle
//! - `packet`: PCNF0/PCNF1 field composition
//! - `config`: the BLE receive configurator
//! - `snapshot`: read-back verification of a configured radio
//! - `nrf`: `RadioRegisters` over the real peripheral

pub mod config;
pub mod nrf;
pub mod packet;
pub mod registers;
pub mod snapshot;

pub use config::{configure_rx, RxConfig};
pub use nrf::{NrfRadio, RadioState};
pub use packet::{BaseAddressLength, Endianness, FieldError, PacketConfig0, PacketConfig1, S0Length};
pub use registers::{Interrupts, Mode, RadioRegisters, Register};
pub use snapshot::{ConfigMismatch, RadioSnapshot};
