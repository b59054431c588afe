use crate::error::WordError;
use crate::tables::{Case, Charset};
use bitvec::prelude::*;

/// code length implied by the 2-bit prefix at `at`
fn code_length(bits: &BitSlice<u32, Msb0>, at: usize) -> usize {
    match (bits[at], bits[at + 1]) {
        (false, _) => 4,
        (true, false) => 5,
        (true, true) => 7,
    }
}

/// unpack variable length character codes until fewer than 2 bits remain
/// a code cut short by the end of `bits` is padded with zeros on the right
pub fn unpack(bits: &BitSlice<u32, Msb0>, charset: Charset) -> Result<String, WordError> {
    let mut cursor = 0;
    let mut text = String::new();
    while bits.len() - cursor >= 2 {
        let length = code_length(bits, cursor);
        let end = bits.len().min(cursor + length);
        let taken = &bits[cursor..end];
        let code = taken.load_be::<u8>() << (length - taken.len());
        match charset.lookup(code) {
            None => return Err(WordError::UnknownCharacter(code)),
            Some(Some(c)) => text.push(c),
            // blank still takes its slot
            Some(None) => {}
        }
        cursor = end;
    }
    Ok(text)
}

/// apply the case a text function code asks for
pub fn apply_case(text: String, case: Case) -> String {
    match case {
        Case::Lower => text,
        Case::Upper => text.to_uppercase(),
        Case::Capitalized => {
            let mut chars = text.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        }
    }
}
