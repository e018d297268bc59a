//! Bootstring: a generalized RFC 3492 codec.
//!
//! Bootstring maps strings over a large, sparse *extended* alphabet onto a
//! small *basic* alphabet and back. Punycode is the best known instance
//! (Unicode onto ASCII), but both alphabets, the digit base and the tuning
//! constants are pluggable here.
//!
//! # Key Properties
//!
//! - Roundtrip: `decode(encode(s)) == s` for any `s` over the extended alphabet
//! - Basic pass-through: input made only of basic characters is copied as is,
//!   followed by the delimiter
//! - All arithmetic is checked; overflow is an error, never a wraparound
//!
//! # Examples
//!
//! ```
//! use bootstring::presets::{ALPHANUMERIC, PUNYCODE};
//!
//! assert_eq!(PUNYCODE.encode("b\u{fc}cher").unwrap(), "bcher-kva");
//! assert_eq!(PUNYCODE.decode("bcher-kva").unwrap(), "b\u{fc}cher");
//!
//! // Output restricted to 0-9A-Za-z, delimiter `X`.
//! let encoded = ALPHANUMERIC.encode("hello world!").unwrap();
//! assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric()));
//! assert_eq!(ALPHANUMERIC.decode(&encoded).unwrap(), "hello world!");
//! ```
//!
//! Custom configurations combine an [`Alphabet`] pair, a [`DigitBase`] and
//! [`Tuning`]:
//!
//! ```
//! use bootstring::{Bootstring, DigitBase, Tuning, UnicodeRange};
//!
//! let codec = Bootstring::new(
//!     UnicodeRange::ascii(),
//!     UnicodeRange::new(0, 0xFF).unwrap(),
//!     DigitBase::from_chars('a'..='z').unwrap(),
//!     '_',
//!     Tuning { tmax: 25, ..Tuning::PUNYCODE },
//! )
//! .unwrap();
//! let encoded = codec.encode("caf\u{e9}").unwrap();
//! assert_eq!(codec.decode(&encoded).unwrap(), "caf\u{e9}");
//! ```

mod alphabet;
mod bias;
mod codec;
mod decode;
mod digits;
mod encode;
mod error;
mod mapped;
mod params;
pub mod presets;
pub mod punycode;
mod unicode_range;

pub use alphabet::{Alphabet, Chars};
pub use codec::Bootstring;
pub use digits::{DigitBase, DigitTable, BASE36};
pub use error::{Error, FormatError, Result};
pub use mapped::{MappedAlphabet, MappingMode};
pub use params::{Params, Tuning};
pub use unicode_range::UnicodeRange;
