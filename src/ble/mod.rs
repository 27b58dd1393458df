//! BLE Protocol Definitions
//!
//! Constants and identifiers taken from the Bluetooth Core Specification that
//! the radio layer needs. Nothing here touches hardware.

pub mod address;

pub use address::{AccessAddress, AddressError, DeviceAddress, BLE_ACCESS_ADDRESS};
