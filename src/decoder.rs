use crate::chars::{apply_case, unpack};
use crate::error::{DecodeError, Error, WordError};
use crate::number;
use crate::tables::{function_for, Category, Charset, Color, Function};
use crate::word::{Block, Word, WordReader, BLOCK_SIZE};
use log::{debug, warn};

/// value of the token an unmapped function code produces
pub const UNKNOWN_VALUE: &str = "???";

/// decoder settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// charset text words are unpacked with
    pub charset: Charset,
}

/// a colored piece of source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub color: Color,
    pub value: String,
}
impl Token {
    pub fn new(color: Color, value: impl Into<String>) -> Self {
        Token {
            color,
            value: value.into(),
        }
    }
}

/// one decoded word, or a word pair for long numbers, before continuations are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub function: Function,
    pub value: String,
}

/// outcome of decoding one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    Decoded(Vec<Token>),
    Failed(DecodeError),
}

/// a block's result with its number in the original file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlock {
    pub number: usize,
    pub result: DecodeResult,
}

/// consume and decode the next logical unit of `reader`
pub fn decode_word(reader: &mut WordReader, options: &Options) -> Result<RawToken, WordError> {
    let word = reader.next_word();
    let code = word.function_code();
    let function = function_for(code);
    let value = match function.category {
        Category::Continuation => unpack(word.payload(), options.charset)?,
        Category::Text(case) => apply_case(unpack(word.payload(), options.charset)?, case),
        Category::ShortNumber => number::short(&word),
        Category::LongNumber => {
            // a long number cut off by the end of the block reads as zero
            let second = if reader.has_next() {
                reader.next_word()
            } else {
                Word::default()
            };
            number::long(&word, &second)
        }
        Category::Unknown => {
            warn!("unrecognized function code {:#x}", code);
            UNKNOWN_VALUE.to_string()
        }
    };
    Ok(RawToken { function, value })
}

/// folds continuation words onto the token before them
#[derive(Debug, Default)]
pub struct Merger {
    /// token being extended, with the function that started it
    working: Option<(Function, Token)>,
    merged: Vec<Token>,
}
impl Merger {
    pub fn new() -> Self {
        Merger::default()
    }

    pub fn push(&mut self, raw: RawToken) {
        if let Some(color) = raw.function.color {
            if let Some((_, token)) = self.working.take() {
                self.merged.push(token);
            }
            self.working = Some((raw.function, Token::new(color, raw.value)));
            return;
        }
        match &mut self.working {
            Some((function, token)) => {
                if !raw.value.is_empty()
                    && matches!(
                        function.category,
                        Category::ShortNumber | Category::LongNumber
                    )
                {
                    warn!("continuation {:?} follows number {}", raw.value, token.value);
                }
                token.value.push_str(&raw.value);
            }
            // blank padding with nothing to extend
            None if raw.value.is_empty() => {}
            None => {
                warn!("continuation {:?} has no token to extend", raw.value);
                self.working = Some((raw.function, Token::new(Color::Unknown, raw.value)));
            }
        }
    }

    pub fn finish(mut self) -> Vec<Token> {
        if let Some((_, token)) = self.working.take() {
            self.merged.push(token);
        }
        self.merged
    }
}

fn decode_tokens<F>(block: Block, mut decode: F) -> Result<Vec<Token>, DecodeError>
where
    F: FnMut(&mut WordReader) -> Result<RawToken, WordError>,
{
    let mut reader = WordReader::new(block);
    let mut merger = Merger::new();
    while reader.has_next() {
        let at = reader.cursor();
        let raw = decode(&mut reader).map_err(|is| DecodeError { word: at, is })?;
        merger.push(raw);
    }
    Ok(merger.finish())
}

fn decode_block_with<F>(number: usize, block: Block, decode: F) -> DecodedBlock
where
    F: FnMut(&mut WordReader) -> Result<RawToken, WordError>,
{
    let result = match decode_tokens(block, decode) {
        Ok(tokens) => {
            debug!("block {}: {} tokens", number, tokens.len());
            DecodeResult::Decoded(tokens)
        }
        Err(err) => {
            debug!("block {}: {}", number, err);
            DecodeResult::Failed(err)
        }
    };
    DecodedBlock { number, result }
}

/// decode every word of one block, a hard failure fails only this block
pub fn decode_block(number: usize, block: Block, options: &Options) -> DecodedBlock {
    decode_block_with(number, block, |reader| decode_word(reader, options))
}

/// decode a buffer of whole blocks, numbering them from `first_block`
pub fn decode_blocks(
    blocks: &[u8],
    first_block: usize,
    options: &Options,
) -> Result<Vec<DecodedBlock>, Error> {
    if blocks.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidLength(blocks.len()));
    }

    #[cfg(feature = "parallel")]
    use rayon::prelude::*;
    #[cfg(feature = "parallel")]
    let chunks = blocks.par_chunks_exact(BLOCK_SIZE);
    #[cfg(not(feature = "parallel"))]
    let chunks = blocks.chunks_exact(BLOCK_SIZE);

    Ok(chunks
        .enumerate()
        .map(|(i, chunk)| decode_block(first_block + i, Block(chunk), options))
        .collect())
}
