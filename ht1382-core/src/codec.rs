//! Register codec
//!
//! Pure byte transforms between the decimal values of the public API and
//! the packed representation in the register file. Nothing here touches
//! the bus and nothing here fails; callers validate ranges first.

use crate::datetime::DateTime;
use crate::registers::{bits, reg, DATETIME_LEN};

/// Pack a decimal value (0-99) as two BCD digits
pub const fn dec_to_bcd(value: u8) -> u8 {
    let ones = value % 10;
    let tens = (value / 10) % 10;
    (tens << 4) | ones
}

/// Unpack two BCD digits into a decimal value
pub const fn bcd_to_dec(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

/// Set a single bit
pub const fn set_bit(byte: u8, bit: u8) -> u8 {
    byte | (1 << bit)
}

/// Clear a single bit
pub const fn clear_bit(byte: u8, bit: u8) -> u8 {
    byte & !(1 << bit)
}

/// Test a single bit
pub const fn bit_is_set(byte: u8, bit: u8) -> bool {
    byte & (1 << bit) != 0
}

/// Extract the field `mask` located at `shift`
pub const fn read_field(byte: u8, shift: u8, mask: u8) -> u8 {
    (byte >> shift) & mask
}

/// Replace the field `mask` located at `shift` with `value`
///
/// Bits of `value` outside `mask` are dropped; bits outside the field are
/// preserved.
pub const fn write_field(byte: u8, shift: u8, mask: u8, value: u8) -> u8 {
    (byte & !(mask << shift)) | ((value & mask) << shift)
}

/// Encode a date/time into the seconds..year register block
///
/// Bytes are placed at their register offsets. The clock halt bit of the
/// seconds register is always cleared so that writing a time also starts
/// the oscillator.
pub fn encode_datetime(dt: &DateTime) -> [u8; DATETIME_LEN] {
    let mut block = [0u8; DATETIME_LEN];
    block[reg::SECONDS as usize] = clear_bit(dec_to_bcd(dt.second), bits::SECONDS_CH);
    block[reg::MINUTES as usize] = dec_to_bcd(dt.minute);
    block[reg::HOURS as usize] = dec_to_bcd(dt.hour);
    block[reg::DATE as usize] = dec_to_bcd(dt.day);
    block[reg::MONTH as usize] = dec_to_bcd(dt.month);
    block[reg::DAY as usize] = dec_to_bcd(dt.weekday);
    block[reg::YEAR as usize] = dec_to_bcd(dt.year);
    block
}

/// Decode the seconds..year register block
///
/// The clock halt bit is masked off before decoding seconds. No range
/// checks are applied to what the chip returned.
pub fn decode_datetime(block: &[u8; DATETIME_LEN]) -> DateTime {
    DateTime {
        second: bcd_to_dec(clear_bit(block[reg::SECONDS as usize], bits::SECONDS_CH)),
        minute: bcd_to_dec(block[reg::MINUTES as usize]),
        hour: bcd_to_dec(block[reg::HOURS as usize]),
        weekday: bcd_to_dec(block[reg::DAY as usize]),
        day: bcd_to_dec(block[reg::DATE as usize]),
        month: bcd_to_dec(block[reg::MONTH as usize]),
        year: bcd_to_dec(block[reg::YEAR as usize]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bcd_known_values() {
        assert_eq!(dec_to_bcd(0), 0x00);
        assert_eq!(dec_to_bcd(9), 0x09);
        assert_eq!(dec_to_bcd(10), 0x10);
        assert_eq!(dec_to_bcd(59), 0x59);
        assert_eq!(dec_to_bcd(99), 0x99);

        assert_eq!(bcd_to_dec(0x23), 23);
        assert_eq!(bcd_to_dec(0x59), 59);
    }

    #[test]
    fn test_bit_helpers() {
        assert_eq!(set_bit(0x00, 7), 0x80);
        assert_eq!(clear_bit(0xFF, 7), 0x7F);
        assert!(bit_is_set(0x80, 7));
        assert!(!bit_is_set(0x7F, 7));
    }

    #[test]
    fn test_field_helpers() {
        // Upper nibble of INT survives a frequency change
        assert_eq!(write_field(0xF3, 0, 0x0F, 0x0A), 0xFA);
        assert_eq!(write_field(0x00, 0, 0x0F, 0xFF), 0x0F);
        assert_eq!(write_field(0x00, 4, 0x0F, 0x05), 0x50);
        assert_eq!(read_field(0xC7, 0, 0x0F), 0x07);
        assert_eq!(read_field(0xC7, 4, 0x0F), 0x0C);
    }

    #[test]
    fn test_encode_layout() {
        let dt = DateTime::new(0, 2, 10, 5, 23, 11, 23);
        let block = encode_datetime(&dt);

        assert_eq!(block, [0x00, 0x02, 0x10, 0x23, 0x11, 0x05, 0x23]);
    }

    #[test]
    fn test_clock_halt_cleared_on_encode() {
        // 80 is out of range for seconds but its BCD form (0x80) lands
        // exactly on the CH bit
        let dt = DateTime::new(80, 0, 0, 1, 1, 1, 0);
        let block = encode_datetime(&dt);
        assert_eq!(block[reg::SECONDS as usize], 0x00);
    }

    #[test]
    fn test_clock_halt_masked_on_decode() {
        let block = [0x80 | 0x45, 0x30, 0x12, 0x01, 0x06, 0x03, 0x24];
        let dt = decode_datetime(&block);

        assert_eq!(dt.second, 45);
        assert_eq!(dt.weekday, 3);
        assert_eq!(dt.day, 1);
        assert_eq!(dt.month, 6);
        assert_eq!(dt.year, 24);
    }

    proptest! {
        #[test]
        fn prop_bcd_law(v in 0u8..=99) {
            prop_assert_eq!(bcd_to_dec(dec_to_bcd(v)), v);
        }

        #[test]
        fn prop_datetime_roundtrip(
            second in 0u8..=59,
            minute in 0u8..=59,
            hour in 0u8..=23,
            weekday in 1u8..=7,
            day in 1u8..=31,
            month in 1u8..=12,
            year in 0u8..=99,
        ) {
            let dt = DateTime::new(second, minute, hour, weekday, day, month, year);
            let block = encode_datetime(&dt);
            prop_assert!(!bit_is_set(block[reg::SECONDS as usize], bits::SECONDS_CH));
            prop_assert_eq!(decode_datetime(&block), dt);
        }
    }
}
