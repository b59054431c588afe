//! Decoder for colorForth source blocks.
//!
//! A block is 1024 bytes of little endian 32-bit words. The low 4 bits of each
//! word are a function code choosing how the other 28 bits are read (packed
//! characters, a number, or a continuation of the previous word) and which
//! color the resulting token is shown in.

pub mod chars;
pub mod decoder;
pub mod error;
pub mod number;
pub mod tables;
pub mod word;

pub use decoder::{decode_block, decode_blocks, DecodeResult, DecodedBlock, Options, Token};
pub use error::{DecodeError, Error, WordError};
pub use tables::{Charset, Color};
pub use word::{Block, BLOCK_SIZE};
