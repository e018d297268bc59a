//! Contiguous code point range alphabets.

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

const UNICODE_MAX: u32 = 0x10FFFF;
const SURROGATES_START: u32 = 0xD800;
const SURROGATES_END: u32 = 0xDFFF;
const SURROGATES_COUNT: u32 = SURROGATES_END - SURROGATES_START + 1;

/// The code points `start..=end`, minus the UTF-16 surrogate block.
///
/// Index `0` is `start`; indices run contiguously across the surrogate gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeRange {
    start: u32,
    end: u32,
    len: u32,
}

impl UnicodeRange {
    /// Build the range `start..=end` (inclusive code points).
    ///
    /// Bounds that fall inside the surrogate block are moved outward to the
    /// nearest scalar value.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if end > UNICODE_MAX {
            return Err(Error::config(format!(
                "range end {:#X} is above U+10FFFF",
                end
            )));
        }

        let start = if (SURROGATES_START..=SURROGATES_END).contains(&start) {
            SURROGATES_END + 1
        } else {
            start
        };
        let end = if (SURROGATES_START..=SURROGATES_END).contains(&end) {
            SURROGATES_START - 1
        } else {
            end
        };

        if start > end {
            return Err(Error::config(format!(
                "empty code point range {:#X}..={:#X}",
                start, end
            )));
        }

        Ok(Self::spanning(start, end))
    }

    /// Build the range spanning two characters, inclusive.
    pub fn between(first: char, last: char) -> Result<Self> {
        Self::new(first as u32, last as u32)
    }

    /// U+0000..=U+007F.
    pub const fn ascii() -> Self {
        Self::spanning(0, 0x7F)
    }

    /// Every Unicode scalar value.
    pub const fn unicode() -> Self {
        Self::spanning(0, UNICODE_MAX)
    }

    const fn spanning(start: u32, end: u32) -> Self {
        let gap = if start < SURROGATES_START && end > SURROGATES_END {
            SURROGATES_COUNT
        } else {
            0
        };
        UnicodeRange {
            start,
            end,
            len: end - start + 1 - gap,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    fn skips_surrogates(&self, code_point: u32) -> bool {
        self.start < SURROGATES_START && code_point >= SURROGATES_START
    }
}

impl Alphabet for UnicodeRange {
    fn len(&self) -> u32 {
        self.len
    }

    fn get_at(&self, index: u32) -> Result<char> {
        let out_of_range = Error::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }

        let mut code_point = self.start + index;
        if self.skips_surrogates(code_point) {
            code_point += SURROGATES_COUNT;
        }
        char::from_u32(code_point).ok_or(out_of_range)
    }

    fn index_of(&self, c: char) -> Result<u32> {
        let code_point = c as u32;
        if code_point < self.start || code_point > self.end {
            return Err(Error::UnknownCharacter(c));
        }

        let gap = if self.skips_surrogates(code_point) {
            SURROGATES_COUNT
        } else {
            0
        };
        Ok(code_point - self.start - gap)
    }
}
