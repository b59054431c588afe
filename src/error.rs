use std::io;
use thiserror::Error;

/// caller level failures, raised before any block is decoded
#[derive(Debug, Error)]
pub enum Error {
    /// input is not a whole number of blocks
    #[error("input length {0} is not a multiple of 1024")]
    InvalidLength(usize),

    /// just relaying io::Error
    #[error(transparent)]
    Io(#[from] io::Error),

    /// there is no input path and stdin is a terminal
    #[error("no input: pass a path or pipe blocks to stdin")]
    NoStdin,
}

/// reasons a single word can not be decoded
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordError {
    /// packed character code outside the charset domain
    #[error("unknown character code {0}")]
    UnknownCharacter(u8),
}

/// hard failure that aborts the decode of one block
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{is} at byte {word}")]
pub struct DecodeError {
    /// byte offset of the failing word within its block
    pub word: usize,
    pub is: WordError,
}
