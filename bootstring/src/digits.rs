//! Digit bases: the symbols of the variable-length integers.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

lazy_static! {
    /// The RFC 3492 base: `a`-`z` (0-25, either case) then `0`-`9` (26-35).
    pub static ref BASE36: DigitBase = {
        let letters = ('a'..='z').map(|c| vec![c, c.to_ascii_uppercase()]);
        let numerals = ('0'..='9').map(|c| vec![c]);
        DigitBase::new(letters.chain(numerals).collect())
            .expect("base 36 digits are distinct")
    };
}

/// A bijection between digit values `[0, base)` and their representations.
///
/// A digit may have several representations (e.g. both cases of a letter);
/// the first one is canonical and is what encoding emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBase {
    digits: Vec<Vec<char>>,
    values: HashMap<char, u32>,
}

impl DigitBase {
    pub fn new(digits: Vec<Vec<char>>) -> Result<Self> {
        let mut values = HashMap::new();

        for (value, representations) in digits.iter().enumerate() {
            if representations.is_empty() {
                return Err(Error::config(format!(
                    "digit {} has no representation",
                    value
                )));
            }
            let value = u32::try_from(value)
                .map_err(|_| Error::config("too many digits for a u32 base"))?;
            for &c in representations {
                if let Some(other) = values.insert(c, value) {
                    return Err(Error::config(format!(
                        "representation {:?} is used by digits {} and {}",
                        c, other, value
                    )));
                }
            }
        }

        Ok(DigitBase { digits, values })
    }

    /// One single-glyph digit per character, valued in iteration order.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Result<Self> {
        Self::new(chars.into_iter().map(|c| vec![c]).collect())
    }

    pub fn base(&self) -> u32 {
        self.digits.len() as u32
    }

    pub fn representations(&self, value: u32) -> Option<&[char]> {
        self.digits.get(value as usize).map(Vec::as_slice)
    }

    pub fn canonical(&self, value: u32) -> Option<char> {
        self.representations(value).map(|reps| reps[0])
    }

    pub fn value_of(&self, c: char) -> Option<u32> {
        self.values.get(&c).copied()
    }

    pub fn is_digit(&self, c: char) -> bool {
        self.values.contains_key(&c)
    }

    /// Resolve every representation to its index in `basic`.
    ///
    /// Fails if a representation is not a member of `basic`.
    pub fn resolve<A: Alphabet>(&self, basic: &A) -> Result<DigitTable> {
        let mut canonical = Vec::with_capacity(self.digits.len());
        let mut values = HashMap::with_capacity(self.values.len());

        for (value, representations) in self.digits.iter().enumerate() {
            for (n, &c) in representations.iter().enumerate() {
                let index = basic.index_of(c).map_err(|_| {
                    Error::config(format!(
                        "digit representation {:?} is not in the basic alphabet",
                        c
                    ))
                })?;
                if n == 0 {
                    canonical.push(index);
                }
                values.insert(index, value as u32);
            }
        }

        Ok(DigitTable { canonical, values })
    }
}

/// A [`DigitBase`] expressed in basic-alphabet indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitTable {
    canonical: Vec<u32>,
    values: HashMap<u32, u32>,
}

impl DigitTable {
    pub fn base(&self) -> u32 {
        self.canonical.len() as u32
    }

    /// Basic index of the canonical representation of `digit`.
    pub fn index_of_digit(&self, digit: u32) -> Option<u32> {
        self.canonical.get(digit as usize).copied()
    }

    /// Digit value of the basic index `index`, if it is a digit.
    pub fn digit_at(&self, index: u32) -> Option<u32> {
        self.values.get(&index).copied()
    }
}
