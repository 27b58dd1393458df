//! Common test utilities and setup for embedded tests
//!
//! This module provides shared functionality for all defmt-test based tests:
//! - Runtime crates the test binaries have to link
//! - A register file standing in for the RADIO peripheral
//! - Test helpers

#![allow(dead_code)]

// Re-export commonly used items for tests (except conflicting macros)
pub use defmt_rtt as _; // global logger
pub use panic_probe as _; // panic handler
// Interrupt vectors and time driver, same as the firmware binary
pub use {embassy_executor as _, embassy_nrf as _, embassy_time as _};

pub use defmt::info;

use nrf_ble_rx::radio::{RadioRegisters, Register};

/// Maximum number of register writes a mock records
pub const MAX_RECORDED_WRITES: usize = 32;

/// In-memory RADIO register block
///
/// INTENCLR behaves like the hardware: writing clears enable bits, reading
/// returns the sources still enabled. All other registers store what is
/// written. Every write is recorded in order.
pub struct MockRadio {
    registers: [u32; Register::ALL.len()],
    enabled_interrupts: u32,
    writes: heapless::Vec<(Register, u32), MAX_RECORDED_WRITES>,
}

impl MockRadio {
    /// Register block at reset values, no interrupts enabled
    pub fn new() -> Self {
        Self {
            registers: [0; Register::ALL.len()],
            enabled_interrupts: 0,
            writes: heapless::Vec::new(),
        }
    }

    /// Register block left with some interrupt sources enabled, like INTENSET would
    pub fn with_interrupts(mask: u32) -> Self {
        let mut radio = Self::new();
        radio.enabled_interrupts = mask;
        radio
    }

    /// Overwrite a register without recording it, to simulate a corrupted value
    pub fn poke(&mut self, reg: Register, value: u32) {
        match reg {
            Register::IntEnClr => self.enabled_interrupts = value,
            _ => self.registers[reg.index()] = value,
        }
    }

    pub fn writes(&self) -> &[(Register, u32)] {
        &self.writes
    }

    pub fn enabled_interrupts(&self) -> u32 {
        self.enabled_interrupts
    }

    /// Full observable state: enabled interrupts plus every stored register
    pub fn state(&self) -> (u32, [u32; Register::ALL.len()]) {
        (self.enabled_interrupts, self.registers)
    }
}

impl Default for MockRadio {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioRegisters for MockRadio {
    fn write(&mut self, reg: Register, value: u32) {
        match reg {
            Register::IntEnClr => self.enabled_interrupts &= !value,
            _ => self.registers[reg.index()] = value,
        }
        if self.writes.push((reg, value)).is_err() {
            defmt::warn!("MockRadio write log full, dropping {}", reg);
        }
    }

    fn read(&self, reg: Register) -> u32 {
        match reg {
            Register::IntEnClr => self.enabled_interrupts,
            _ => self.registers[reg.index()],
        }
    }
}

/// Log the start of a test case
pub fn log_test_start(name: &str) {
    info!("TEST START: {}", name);
}

/// Log a passing test case
pub fn log_test_pass(name: &str) {
    info!("TEST PASS: {}", name);
}
