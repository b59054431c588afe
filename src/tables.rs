use std::fmt;

/// number of characters every charset defines
pub const CHARSET_LEN: usize = 48;

/// character set used to unpack text words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// the set documented on colorforth.com
    Legacy,
    /// the GreenArrays set
    Greenarray,
    /// the set used by cf2019 and family
    Howerd,
}
impl Default for Charset {
    fn default() -> Self {
        Charset::Howerd
    }
}
impl Charset {
    /// characters in code order, a space stands for the blank code
    pub fn chars(self) -> &'static str {
        match self {
            Charset::Legacy => " rtoeanismcylgfwdvpbhxuqkzj34567891-0.2/;:!+@*,?",
            Charset::Greenarray => " rtoeanismcylgfwdvpbhxuq0123456789j-k.z/;'!+@*,?",
            Charset::Howerd => " rtoeanismcylgfwdvpbhxuq0123456789j-k.z/;:!+@*,?",
        }
    }

    /// look up a packed character code
    /// returns None when the code is outside 0-7, 16-23 and 96-127
    /// returns Some(None) for the blank code
    pub fn lookup(self, code: u8) -> Option<Option<char>> {
        let index = match code {
            0..=7 => code as usize,
            16..=23 => code as usize - 8,
            96..=127 => code as usize - 80,
            _ => return None,
        };
        self.chars()
            .chars()
            .nth(index)
            .map(|c| if c == ' ' { None } else { Some(c) })
    }
}

/// display color of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Yellow,
    Red,
    Green,
    Cyan,
    White,
    Magenta,
    Silver,
    Blue,
    /// function code with no mapping
    Unknown,
}
impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Magenta => "magenta",
            Color::Silver => "silver",
            Color::Blue => "blue",
            Color::Unknown => "???",
        }
    }
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}

/// case applied to unpacked text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// stored lowercase, left as is
    Lower,
    /// first character uppercased
    Capitalized,
    /// every character uppercased
    Upper,
}

/// what a function code asks the decoder to do with its word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// text appended onto the preceding token
    Continuation,
    Text(Case),
    /// magnitude packed in the same word
    ShortNumber,
    /// magnitude held by the following word
    LongNumber,
    Unknown,
}

/// one row of the dispatch table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Function {
    pub category: Category,
    /// None for continuations, which take the color of the token they extend
    pub color: Option<Color>,
}

const fn function(category: Category, color: Color) -> Function {
    Function {
        category,
        color: Some(color),
    }
}

use Category::*;

/// function code to category and color, indexed by the low nibble of a word
pub const FUNCTIONS: [Function; 16] = [
    Function {
        category: Continuation,
        color: None,
    },
    function(Text(Case::Lower), Color::Yellow),
    function(LongNumber, Color::Yellow),
    function(Text(Case::Lower), Color::Red),
    function(Text(Case::Lower), Color::Green),
    function(LongNumber, Color::Green),
    function(ShortNumber, Color::Green),
    function(Text(Case::Lower), Color::Cyan),
    function(ShortNumber, Color::Yellow),
    function(Text(Case::Lower), Color::White),
    function(Text(Case::Capitalized), Color::White),
    function(Text(Case::Upper), Color::White),
    function(Text(Case::Lower), Color::Magenta),
    function(Text(Case::Lower), Color::Silver),
    function(Text(Case::Lower), Color::Blue),
    function(Unknown, Color::Unknown),
];

/// dispatch table entry for a function code, only the low 4 bits are used
pub fn function_for(code: u8) -> Function {
    FUNCTIONS[(code & 0xf) as usize]
}
