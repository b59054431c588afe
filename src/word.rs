use crate::error::Error;
use bitvec::prelude::*;
use std::fmt;

/// bytes per block
pub const BLOCK_SIZE: usize = 1024;
/// bytes per word
pub const WORD_SIZE: usize = 4;
/// bits per word
pub const WORD_BITS: usize = WORD_SIZE * 8;
/// width of the function code at the low end of a word
pub const FUNCTION_BITS: usize = 4;

/// a 32-bit word of a block, reassembled from its little endian bytes
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Word(pub u32);
impl Word {
    /// view the word most significant bit first
    pub fn bits(&self) -> &BitSlice<u32, Msb0> {
        self.0.view_bits::<Msb0>()
    }

    /// the 4-bit function code
    pub fn function_code(&self) -> u8 {
        self.bits()[WORD_BITS - FUNCTION_BITS..].load_be::<u8>()
    }

    /// the 28 bits in front of the function code
    pub fn payload(&self) -> &BitSlice<u32, Msb0> {
        &self.bits()[..WORD_BITS - FUNCTION_BITS]
    }
}
impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "Word({:032b})", self.0)
    }
}

/// exactly `BLOCK_SIZE` bytes of input
#[derive(Debug, Clone, Copy)]
pub struct Block<'a>(pub(crate) &'a [u8]);
impl<'a> Block<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self, Error> {
        if bytes.len() == BLOCK_SIZE {
            Ok(Block(bytes))
        } else {
            Err(Error::InvalidLength(bytes.len()))
        }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.0
    }
}

/// walks the words of one block
#[derive(Debug)]
pub struct WordReader<'a> {
    block: &'a [u8],
    /// byte offset of the next word, always a multiple of 4
    cursor: usize,
}
impl<'a> WordReader<'a> {
    pub fn new(block: Block<'a>) -> Self {
        WordReader {
            block: block.bytes(),
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_next(&self) -> bool {
        self.cursor < BLOCK_SIZE
    }

    /// consume the word at the cursor
    /// callers check `has_next` first
    pub fn next_word(&mut self) -> Word {
        let mut bytes = [0u8; WORD_SIZE];
        bytes.copy_from_slice(&self.block[self.cursor..self.cursor + WORD_SIZE]);
        self.cursor += WORD_SIZE;
        Word(u32::from_le_bytes(bytes))
    }
}
