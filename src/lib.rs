#![no_std]

//! nRF52820 BLE Receive Configuration Library
//!
//! Programs the RADIO peripheral so its native packet framing matches the
//! Bluetooth Low Energy uncoded PHY, organized into two layers:
//!
//! - `ble`: protocol constants and address types
//! - `radio`: register abstraction, packet-format fields, the receive
//!   configurator and read-back verification

pub mod ble;
pub mod radio;
