//! Device identity formatting.
//!
//! Tileio devices advertise their 6-byte hardware unique id as an uppercase
//! hex string in the link's serial descriptor. Reading the id out of the MCU
//! is the platform's job; this module only does the formatting.

use heapless::String;

pub const DEVICE_ID_LENGTH: usize = 6;
pub const SERIAL_ID_LENGTH: usize = 2 * DEVICE_ID_LENGTH;

/// Formats a device id as the serial id string, e.g. `[0xca, 0xfe, ..]` ->
/// `"CAFE.."`.
pub fn serial_id(device_id: &[u8; DEVICE_ID_LENGTH]) -> String<SERIAL_ID_LENGTH> {
    let mut hex = [0u8; SERIAL_ID_LENGTH];
    base16::encode_config_slice(device_id, base16::EncodeUpper, &mut hex);
    let mut serial = String::new();
    // hex output is always ASCII
    serial.push_str(core::str::from_utf8(&hex).unwrap()).unwrap();
    serial
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_id_is_uppercase_hex() {
        let id = [0xca, 0xfe, 0x00, 0x01, 0xab, 0x9f];
        assert_eq!(serial_id(&id).as_str(), "CAFE0001AB9F");
    }

    #[test]
    fn test_serial_id_zero() {
        assert_eq!(serial_id(&[0u8; DEVICE_ID_LENGTH]).as_str(), "000000000000");
    }
}
