//! Character-remapping layer over another alphabet.

use std::collections::HashMap;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// How much of the inner alphabet a mapping covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingMode {
    /// Unmapped inner characters keep their own representation.
    Partial,
    /// Every inner character must be mapped; unmapped ones are not members.
    Total,
}

/// An alphabet whose characters are those of `inner`, renamed through a
/// one-to-one `inner char -> output char` mapping.
///
/// Indices are those of the inner alphabet.
#[derive(Debug, Clone)]
pub struct MappedAlphabet<A> {
    inner: A,
    mode: MappingMode,
    forward: HashMap<char, char>,
    reverse: HashMap<char, char>,
}

impl<A: Alphabet> MappedAlphabet<A> {
    pub fn new<I>(inner: A, mapping: I, mode: MappingMode) -> Result<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();

        for (from, to) in mapping {
            if !inner.contains(from) {
                return Err(Error::config(format!(
                    "mapped character {:?} is not in the underlying alphabet",
                    from
                )));
            }
            if forward.insert(from, to).is_some() {
                return Err(Error::config(format!(
                    "character {:?} is mapped more than once",
                    from
                )));
            }
            if reverse.insert(to, from).is_some() {
                return Err(Error::config(format!(
                    "mapped keys must have 1-1 correspondence, {:?} is a target twice",
                    to
                )));
            }
        }

        match mode {
            MappingMode::Total => {
                if let Some(unmapped) = inner.chars().find(|c| !forward.contains_key(c)) {
                    return Err(Error::config(format!(
                        "all characters must be mapped, {:?} is not",
                        unmapped
                    )));
                }
            }
            MappingMode::Partial => {
                // A target that is also an unmapped inner character would
                // have two indices.
                for to in reverse.keys() {
                    if !forward.contains_key(to) && inner.contains(*to) {
                        return Err(Error::config(format!(
                            "mapped character {:?} collides with an unmapped character",
                            to
                        )));
                    }
                }
            }
        }

        Ok(MappedAlphabet {
            inner,
            mode,
            forward,
            reverse,
        })
    }

    pub fn mode(&self) -> MappingMode {
        self.mode
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Alphabet> Alphabet for MappedAlphabet<A> {
    fn len(&self) -> u32 {
        self.inner.len()
    }

    fn get_at(&self, index: u32) -> Result<char> {
        let c = self.inner.get_at(index)?;
        match (self.forward.get(&c), self.mode) {
            (Some(&mapped), _) => Ok(mapped),
            (None, MappingMode::Partial) => Ok(c),
            (None, MappingMode::Total) => Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    fn index_of(&self, c: char) -> Result<u32> {
        if let Some(&original) = self.reverse.get(&c) {
            return self.inner.index_of(original);
        }
        match self.mode {
            // Remapped away: `c` now lives under another name.
            MappingMode::Partial if self.forward.contains_key(&c) => {
                Err(Error::UnknownCharacter(c))
            }
            MappingMode::Partial => self.inner.index_of(c),
            MappingMode::Total => Err(Error::UnknownCharacter(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode_range::UnicodeRange;

    fn letters() -> UnicodeRange {
        UnicodeRange::between('a', 'e').unwrap()
    }

    #[test]
    fn total_mapping_renames_every_character() {
        let upper = MappedAlphabet::new(
            letters(),
            letters().chars().map(|c| (c, c.to_ascii_uppercase())),
            MappingMode::Total,
        )
        .unwrap();

        assert_eq!(upper.len(), 5);
        assert_eq!(upper.chars().collect::<String>(), "ABCDE");
        assert_eq!(upper.index_of('C').unwrap(), 2);
        assert_eq!(upper.index_of('c'), Err(Error::UnknownCharacter('c')));
        assert!(upper.contains('E'));
        assert!(!upper.contains('e'));
    }

    #[test]
    fn total_mapping_requires_full_coverage() {
        let result = MappedAlphabet::new(letters(), [('a', 'A')], MappingMode::Total);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn partial_mapping_passes_unmapped_characters_through() {
        let swapped =
            MappedAlphabet::new(letters(), [('a', 'z'), ('b', 'y')], MappingMode::Partial).unwrap();

        assert_eq!(swapped.chars().collect::<String>(), "zycde");
        assert_eq!(swapped.index_of('z').unwrap(), 0);
        assert_eq!(swapped.index_of('c').unwrap(), 2);
        // `a` has been renamed to `z`.
        assert_eq!(swapped.index_of('a'), Err(Error::UnknownCharacter('a')));
    }

    #[test]
    fn partial_permutation_keeps_bijection() {
        let rotated = MappedAlphabet::new(
            letters(),
            [('a', 'b'), ('b', 'c'), ('c', 'a')],
            MappingMode::Partial,
        )
        .unwrap();

        assert_eq!(rotated.chars().collect::<String>(), "bcade");
        for (i, c) in rotated.chars().enumerate() {
            assert_eq!(rotated.index_of(c).unwrap(), i as u32);
            assert_eq!(rotated.get_at(i as u32).unwrap(), c);
        }
    }

    #[test]
    fn partial_collision_is_rejected() {
        // `a -> c` would leave `c` reachable from two indices.
        let result = MappedAlphabet::new(letters(), [('a', 'c')], MappingMode::Partial);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn non_injective_mapping_is_rejected() {
        let result = MappedAlphabet::new(
            letters(),
            [('a', 'x'), ('b', 'x')],
            MappingMode::Partial,
        );
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn mapping_outside_inner_is_rejected() {
        let result = MappedAlphabet::new(letters(), [('q', 'x')], MappingMode::Partial);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn out_of_range_index() {
        let swapped = MappedAlphabet::new(letters(), [('a', 'z')], MappingMode::Partial).unwrap();
        assert_eq!(
            swapped.get_at(5),
            Err(Error::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(swapped.mode(), MappingMode::Partial);
        assert_eq!(swapped.inner().len(), 5);
    }
}
