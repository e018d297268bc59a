//! Ready-made codec configurations.

use lazy_static::lazy_static;

use crate::codec::Bootstring;
use crate::digits::{DigitBase, BASE36};
use crate::error::Result;
use crate::mapped::{MappedAlphabet, MappingMode};
use crate::params::Tuning;
use crate::unicode_range::UnicodeRange;

/// Punycode: ASCII over all of Unicode.
pub type Punycode = Bootstring<UnicodeRange, UnicodeRange>;

/// Identifier-safe codec whose output is only `0-9A-Za-z`.
pub type Alphanumeric = Bootstring<MappedAlphabet<UnicodeRange>, MappedAlphabet<UnicodeRange>>;

/// Delimiter of the alphanumeric preset.
pub const ALPHANUMERIC_DELIMITER: char = 'X';

/// Tuning of the alphanumeric preset.
pub const ALPHANUMERIC_TUNING: Tuning = Tuning {
    tmin: 1,
    tmax: 42,
    skew: 38,
    damp: 700,
    initial_bias: 72,
    initial_n: None,
};

lazy_static! {
    pub static ref PUNYCODE: Punycode = punycode().expect("punycode parameters are valid");
    pub static ref ALPHANUMERIC: Alphanumeric =
        alphanumeric().expect("alphanumeric parameters are valid");
}

/// Build a Punycode codec (RFC 3492 section 5).
pub fn punycode() -> Result<Punycode> {
    punycode_with(Tuning::PUNYCODE)
}

/// Punycode alphabets and digits with custom tuning.
pub fn punycode_with(tuning: Tuning) -> Result<Punycode> {
    Bootstring::new(
        UnicodeRange::ascii(),
        UnicodeRange::unicode(),
        BASE36.clone(),
        '-',
        tuning,
    )
}

/// Build the alphanumeric codec.
///
/// The basic alphabet is `0-9A-Za-z`, stored as code points `0..=61`
/// renamed to those characters. The extended alphabet is Unicode with the
/// same renaming plus the inverse moves, so every basic character keeps its
/// basic index. Every basic character except the delimiter is a digit,
/// giving base 61.
pub fn alphanumeric() -> Result<Alphanumeric> {
    alphanumeric_with(ALPHANUMERIC_TUNING)
}

/// Alphanumeric alphabets and digits with custom tuning.
pub fn alphanumeric_with(tuning: Tuning) -> Result<Alphanumeric> {
    let alnum: Vec<char> = ('0'..='9').chain('A'..='Z').chain('a'..='z').collect();
    let raw: Vec<char> = (0u8..alnum.len() as u8).map(char::from).collect();

    let basic = MappedAlphabet::new(
        UnicodeRange::new(0, alnum.len() as u32 - 1)?,
        raw.iter().copied().zip(alnum.iter().copied()),
        MappingMode::Total,
    )?;

    // Alphanumerics displaced by the renaming take over the code points that
    // are left without a name.
    let displaced = alnum.iter().copied().filter(|c| !raw.contains(c));
    let vacated = raw.iter().copied().filter(|c| !alnum.contains(c));
    let extended = MappedAlphabet::new(
        UnicodeRange::unicode(),
        raw.iter()
            .copied()
            .zip(alnum.iter().copied())
            .chain(displaced.zip(vacated)),
        MappingMode::Partial,
    )?;

    let digits = DigitBase::from_chars(
        alnum
            .iter()
            .copied()
            .filter(|&c| c != ALPHANUMERIC_DELIMITER),
    )?;

    Bootstring::new(basic, extended, digits, ALPHANUMERIC_DELIMITER, tuning)
}
