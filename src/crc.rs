//! Frame checksum.
//!
//! CRC-16 with the CCITT polynomial, MSB first, but a custom initial register
//! value of `0xEF4A`. This is **not** CRC-16/CCITT-FALSE - the init value is
//! shared with deployed Tileio hosts, so it must not be changed or frames stop
//! validating on either end.

const CRC_INIT: u16 = 0xEF4A;
const CRC_POLY: u16 = 0x1021;

/// Computes the checksum over `data`.
pub fn checksum(data: &[u8]) -> u16 {
    let mut crc = CRC_INIT;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ CRC_POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};

    #[test]
    fn test_empty_input_yields_init() {
        assert_eq!(checksum(&[]), 0xEF4A);
    }

    #[test]
    fn test_deterministic() {
        let mut data = [0u8; 250];
        thread_rng().try_fill(&mut data[..]).unwrap();
        assert_eq!(checksum(&data), checksum(&data));
    }

    #[test]
    fn test_single_bit_flip_changes_checksum() {
        let mut data = [0u8; 64];
        thread_rng().try_fill(&mut data[..]).unwrap();
        let original = checksum(&data);
        for i in 0..data.len() {
            for bit in 0..8 {
                data[i] ^= 1 << bit;
                assert_ne!(original, checksum(&data), "flip at byte {} bit {}", i, bit);
                data[i] ^= 1 << bit;
            }
        }
    }

    #[test]
    fn test_differs_from_ccitt_false() {
        // same polynomial, different init - must not collide on this input
        let data = [0x12, 0x34, 0x56];
        let mut ccitt_false: u16 = 0xFFFF;
        for &b in &data {
            ccitt_false ^= (b as u16) << 8;
            for _ in 0..8 {
                if ccitt_false & 0x8000 != 0 {
                    ccitt_false = (ccitt_false << 1) ^ 0x1021;
                } else {
                    ccitt_false <<= 1;
                }
            }
        }
        assert_ne!(checksum(&data), ccitt_false);
    }
}
