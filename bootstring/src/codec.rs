//! The `Bootstring` codec: alphabets, digits and tuning bound together.

use crate::alphabet::Alphabet;
use crate::decode;
use crate::digits::{DigitBase, DigitTable};
use crate::encode;
use crate::error::{Error, FormatError, Result};
use crate::params::{Params, Tuning};

/// A validated Bootstring configuration.
///
/// `basic` is the output alphabet and must sit inside `extended` at the same
/// indices. Instances are immutable and can be shared across threads when
/// the alphabets can.
#[derive(Debug, Clone)]
pub struct Bootstring<B, E> {
    basic: B,
    extended: E,
    digits: DigitBase,
    table: DigitTable,
    delimiter: char,
    params: Params,
}

impl<B: Alphabet, E: Alphabet> Bootstring<B, E> {
    /// Build a codec, checking every parameter and cross-alphabet invariant.
    pub fn new(
        basic: B,
        extended: E,
        digits: DigitBase,
        delimiter: char,
        tuning: Tuning,
    ) -> Result<Self> {
        let codec = Self::build(basic, extended, digits, delimiter, tuning);
        match &codec {
            Ok(codec) => log::debug!(
                "Built bootstring codec: base={} basic={} extended={} delimiter={:?} initial_n={}",
                codec.params.base,
                codec.params.basic_len,
                codec.extended.len(),
                codec.delimiter,
                codec.params.initial_n
            ),
            Err(e) => log::debug!("Rejected bootstring configuration: {}", e),
        }
        codec
    }

    fn build(
        basic: B,
        extended: E,
        digits: DigitBase,
        delimiter: char,
        tuning: Tuning,
    ) -> Result<Self> {
        let delimiter_index = basic.index_of(delimiter).map_err(|_| {
            Error::config(format!(
                "delimiter {:?} is not in the basic alphabet",
                delimiter
            ))
        })?;
        if digits.is_digit(delimiter) {
            return Err(Error::config(format!(
                "delimiter {:?} cannot also be a digit",
                delimiter
            )));
        }

        let params = Params::new(&tuning, digits.base(), delimiter_index, basic.len())?;
        if params.initial_n > extended.len() {
            return Err(Error::config(format!(
                "initial_n ({}) is past the end of the extended alphabet ({})",
                params.initial_n,
                extended.len()
            )));
        }

        for (index, c) in basic.chars().enumerate() {
            match extended.index_of(c) {
                Ok(found) if found as usize == index => {}
                Ok(found) => {
                    return Err(Error::config(format!(
                        "basic character {:?} has index {} but extended index {}",
                        c, index, found
                    )))
                }
                Err(_) => {
                    return Err(Error::config(format!(
                        "basic character {:?} is not in the extended alphabet",
                        c
                    )))
                }
            }
        }

        let table = digits.resolve(&basic)?;

        Ok(Bootstring {
            basic,
            extended,
            digits,
            table,
            delimiter,
            params,
        })
    }

    /// Encode `input` into the basic alphabet.
    ///
    /// Input made only of basic characters comes back unchanged apart from
    /// a trailing delimiter.
    pub fn encode(&self, input: &str) -> Result<String> {
        log::trace!("Encoding {:?}", input);
        let indices = self.extended_indices(input)?;
        let output = encode::encode(&indices, &self.params, &self.table)?;
        output.into_iter().map(|i| self.basic.get_at(i)).collect()
    }

    /// Decode a string produced by [`Bootstring::encode`].
    pub fn decode(&self, input: &str) -> Result<String> {
        log::trace!("Decoding {:?}", input);
        let indices = self.extended_indices(input)?;
        let output = decode::decode(&indices, &self.params, &self.table)?;
        output
            .into_iter()
            .map(|n| {
                self.extended
                    .get_at(n)
                    .map_err(|_| Error::from(FormatError::OutsideAlphabet(n)))
            })
            .collect()
    }

    fn extended_indices(&self, input: &str) -> Result<Vec<u32>> {
        input.chars().map(|c| self.extended.index_of(c)).collect()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn basic(&self) -> &B {
        &self.basic
    }

    pub fn extended(&self) -> &E {
        &self.extended
    }

    pub fn digits(&self) -> &DigitBase {
        &self.digits
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}
