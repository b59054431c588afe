use crate::word::{Word, FUNCTION_BITS, WORD_BITS};
use bitvec::prelude::*;

/// position of the display format flag, just in front of the function code
const HEX_FLAG: usize = WORD_BITS - FUNCTION_BITS - 1;

/// reinterpret the low `width` bits of `value` as a signed integer
/// `width` is 1 to 64
pub fn twos_complement(value: u64, width: u32) -> i64 {
    debug_assert!((1..=64).contains(&width), "width {} out of range", width);
    let shift = 64 - width;
    ((value << shift) as i64) >> shift
}

/// `$` and lowercase hex, or `#` and decimal
pub fn render(value: i64, hex: bool) -> String {
    match (hex, value < 0) {
        (true, false) => format!("${:x}", value),
        // sign in front of the magnitude, not inside the hex digits
        (true, true) => format!("$-{:x}", value.unsigned_abs()),
        (false, _) => format!("#{}", value),
    }
}

fn is_hex(word: &Word) -> bool {
    word.bits()[HEX_FLAG]
}

/// number packed into the 27 bits in front of the format flag
pub fn short(word: &Word) -> String {
    let magnitude = &word.bits()[..HEX_FLAG];
    let value = twos_complement(magnitude.load_be::<u32>() as u64, magnitude.len() as u32);
    render(value, is_hex(word))
}

/// number whose format flag is in `first` and whose 32-bit value is all of `second`
pub fn long(first: &Word, second: &Word) -> String {
    let value = twos_complement(second.0 as u64, WORD_BITS as u32);
    render(value, is_hex(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_word(magnitude: u32, hex: bool, code: u32) -> Word {
        Word((magnitude << 5) | ((hex as u32) << 4) | code)
    }

    #[test]
    fn twos_complement_matches_sign_extension() {
        for width in 1..=32u32 {
            let top = 1u64 << width;
            let samples: Vec<u64> = if width <= 12 {
                (0..top).collect()
            } else {
                vec![0, 1, top / 2 - 1, top / 2, top / 2 + 1, top - 2, top - 1]
            };
            for value in samples {
                let shift = 64 - width;
                let extended = ((value << shift) as i64) >> shift;
                assert_eq!(twos_complement(value, width), extended, "{} in {} bits", value, width);
                // re-encoding gives back the original pattern
                let mask = top - 1;
                assert_eq!(twos_complement(value, width) as u64 & mask, value);
            }
        }
    }

    #[test]
    fn twos_complement_full_width() {
        assert_eq!(twos_complement(1 << 63, 64), i64::MIN);
        assert_eq!(twos_complement(u64::MAX, 64), -1);
        assert_eq!(twos_complement(i64::MAX as u64, 64), i64::MAX);
        assert_eq!(twos_complement(1 << 62, 63), -(1 << 62));
    }

    #[test]
    fn short_hex() {
        assert_eq!(short(&short_word(12789, true, 8)), "$31f5");
    }

    #[test]
    fn short_decimal() {
        assert_eq!(short(&short_word(42, false, 8)), "#42");
        assert_eq!(short(&short_word(0, false, 6)), "#0");
    }

    #[test]
    fn short_negative() {
        let minus_one = (1 << 27) - 1;
        assert_eq!(short(&short_word(minus_one, false, 8)), "#-1");
        assert_eq!(short(&short_word(minus_one - 0x1f, true, 8)), "$-20");
        assert_eq!(short(&short_word(1 << 26, false, 8)), "#-67108864");
    }

    #[test]
    fn long_takes_value_from_second_word() {
        let first = short_word(0, false, 2);
        assert_eq!(long(&first, &Word(0b11 << 30)), "#-1073741824");
        assert_eq!(long(&first, &Word(0x7fff_ffff)), "#2147483647");
        assert_eq!(long(&short_word(0, true, 5), &Word(0x1234_abcd)), "$1234abcd");
        assert_eq!(long(&first, &Word(0)), "#0");
    }
}
