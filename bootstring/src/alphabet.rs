//! The `Alphabet` abstraction: an indexable bijection between `[0, len)` and
//! a set of characters.

use crate::error::Result;

/// An ordered, immutable set of characters addressed by index.
///
/// Implementations must keep `index_of(get_at(i)) == i` for every
/// `i < len()`, and `get_at(index_of(c)) == c` for every member `c`.
pub trait Alphabet {
    /// Number of characters in the alphabet.
    fn len(&self) -> u32;

    /// Character at `index`, or `IndexOutOfRange`.
    fn get_at(&self, index: u32) -> Result<char>;

    /// Index of `c`, or `UnknownCharacter`.
    fn index_of(&self, c: char) -> Result<u32>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, c: char) -> bool {
        self.index_of(c).is_ok()
    }

    /// Iterate the alphabet in index order.
    ///
    /// Every call starts a fresh pass over the same characters.
    fn chars(&self) -> Chars<'_, Self>
    where
        Self: Sized,
    {
        Chars::new(self)
    }
}

impl<A: Alphabet + ?Sized> Alphabet for &A {
    fn len(&self) -> u32 {
        (**self).len()
    }

    fn get_at(&self, index: u32) -> Result<char> {
        (**self).get_at(index)
    }

    fn index_of(&self, c: char) -> Result<u32> {
        (**self).index_of(c)
    }
}

/// Iterator over the characters of an [`Alphabet`], in index order.
#[derive(Debug, Clone)]
pub struct Chars<'a, A: ?Sized> {
    alphabet: &'a A,
    next: u32,
    end: u32,
}

impl<'a, A: Alphabet + ?Sized> Chars<'a, A> {
    pub fn new(alphabet: &'a A) -> Self {
        Chars {
            alphabet,
            next: 0,
            end: alphabet.len(),
        }
    }
}

impl<A: Alphabet + ?Sized> Iterator for Chars<'_, A> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        while self.next < self.end {
            let index = self.next;
            self.next += 1;
            if let Ok(c) = self.alphabet.get_at(index) {
                return Some(c);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some((self.end - self.next) as usize))
    }
}
