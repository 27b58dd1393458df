#![no_std]
#![no_main]

mod common;

use nrf_ble_rx::ble::{AccessAddress, AddressError, DeviceAddress, BLE_ACCESS_ADDRESS};

#[defmt_test::tests]
mod tests {
    use super::*;
    use crate::common::*;
    use defmt::{assert, assert_eq, assert_ne};

    #[test]
    fn test_advertising_access_address() {
        assert_eq!(BLE_ACCESS_ADDRESS, 0x8E89_BED6);
        assert_eq!(AccessAddress::ADVERTISING.value(), BLE_ACCESS_ADDRESS);
        assert_eq!(AccessAddress::default(), AccessAddress::ADVERTISING);
        assert_eq!(u32::from(AccessAddress::ADVERTISING), 0x8E89_BED6);
    }

    #[test]
    fn test_advertising_base_and_prefix() {
        log_test_start("advertising_base_and_prefix");

        let aa = AccessAddress::ADVERTISING;
        info!("base = 0x{:08X}, prefix = 0x{:02X}", aa.base(), aa.prefix());

        assert_eq!(aa.base(), 0x89BE_D600);
        assert_eq!(aa.prefix(), 0x8E);

        // Low byte of the base register is never used with a 3 byte base
        assert_eq!(aa.base() & 0xFF, 0);

        log_test_pass("advertising_base_and_prefix");
    }

    #[test]
    fn test_reconstruct_from_parts() {
        let aa = AccessAddress::ADVERTISING;
        let rebuilt = AccessAddress::from_parts(aa.base(), aa.prefix());
        assert_eq!(rebuilt, aa);
        assert_eq!(rebuilt.value(), 0x8E89_BED6);
    }

    #[test]
    fn test_reconstruct_many_addresses() {
        log_test_start("reconstruct_many_addresses");

        // Walk a spread of values including the extremes
        let mut value: u32 = 0;
        for _ in 0..512 {
            let aa = AccessAddress::new(value);
            assert_eq!(AccessAddress::from_parts(aa.base(), aa.prefix()), aa);
            value = value.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        }

        for value in [0u32, 1, 0xFF, 0xFF00_0000, 0x00FF_FFFF, u32::MAX] {
            let aa = AccessAddress::new(value);
            assert_eq!(AccessAddress::from_parts(aa.base(), aa.prefix()), aa);
        }

        log_test_pass("reconstruct_many_addresses");
    }

    #[test]
    fn test_from_parts_ignores_base_low_byte() {
        // BASE0[7:0] is outside a 3 byte base address
        let aa = AccessAddress::ADVERTISING;
        let rebuilt = AccessAddress::from_parts(aa.base() | 0xAB, aa.prefix());
        assert_eq!(rebuilt, aa);
    }

    #[test]
    fn test_different_addresses_split_differently() {
        let a = AccessAddress::new(0x1234_5678);
        let b = AccessAddress::new(0x1234_5679);
        assert_eq!(a.prefix(), b.prefix());
        assert_ne!(a.base(), b.base());
        assert_eq!(a.base(), 0x3456_7800);
        assert_eq!(a.prefix(), 0x12);
    }

    #[test]
    fn test_device_address_from_array() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let addr = DeviceAddress::new(bytes);
        assert_eq!(addr.as_bytes(), &bytes);
        assert_eq!(DeviceAddress::from(bytes), addr);
    }

    #[test]
    fn test_device_address_from_slice() {
        let data = [0xC0, 0xFF, 0xEE, 0x00, 0x11, 0x22];
        let addr = DeviceAddress::from_slice(&data).unwrap();
        assert_eq!(addr.as_bytes(), &data);
    }

    #[test]
    fn test_device_address_wrong_length() {
        assert_eq!(
            DeviceAddress::from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05]),
            Err(AddressError::InvalidLength(5))
        );
        assert_eq!(
            DeviceAddress::from_slice(&[0; 7]),
            Err(AddressError::InvalidLength(7))
        );
        assert!(DeviceAddress::from_slice(&[]).is_err());
    }
}
