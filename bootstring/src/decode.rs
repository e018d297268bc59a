//! Bootstring decoding (RFC 3492 section 6.2).

use crate::bias::adapt_bias;
use crate::digits::DigitTable;
use crate::error::{Error, FormatError, Result};
use crate::params::Params;

/// Decode a sequence of extended-alphabet indices.
///
/// Everything before the last delimiter must be basic and is copied as is;
/// the delimiter is dropped and the remainder is read as digits.
pub(crate) fn decode(input: &[u32], params: &Params, digits: &DigitTable) -> Result<Vec<u32>> {
    let (basic, encoded, offset) = match input.iter().rposition(|&c| c == params.delimiter) {
        Some(delimiter) => (&input[..delimiter], &input[delimiter + 1..], delimiter + 1),
        None => (&input[..0], input, 0),
    };

    let mut output: Vec<u32> = Vec::with_capacity(input.len());
    for (position, &c) in basic.iter().enumerate() {
        if c >= params.basic_len {
            return Err(FormatError::ExtendedBeforeDelimiter { position }.into());
        }
        output.push(c);
    }

    let mut n = params.initial_n;
    let mut i: u32 = 0;
    let mut bias = u64::from(params.initial_bias);
    let mut position = 0;

    while position < encoded.len() {
        let old_i = i;
        i = decode_varint(encoded, &mut position, offset, i, bias, params, digits)?;

        let len = u32::try_from(output.len() + 1).map_err(|_| Error::Overflow)?;
        bias = adapt_bias(i - old_i, len, old_i == 0, params);

        n = n.checked_add(i / len).ok_or(Error::Overflow)?;
        i %= len;

        // A well-formed encoding never inserts a basic code point.
        if n < params.basic_len {
            return Err(FormatError::BasicCodePoint(n).into());
        }

        output.insert(i as usize, n);
        i += 1;
    }

    Ok(output)
}

/// Read one variable-length integer starting at `encoded[*position]` and
/// add it to `i`.
fn decode_varint(
    encoded: &[u32],
    position: &mut usize,
    offset: usize,
    mut i: u32,
    bias: u64,
    params: &Params,
    digits: &DigitTable,
) -> Result<u32> {
    let base = u64::from(params.base);
    let mut w: u32 = 1;
    let mut k = base;

    loop {
        let index = *encoded.get(*position).ok_or(FormatError::UnexpectedEnd)?;
        let digit = digits.digit_at(index).ok_or(FormatError::InvalidDigit {
            position: offset + *position,
        })?;
        *position += 1;

        // i += digit * w
        i = digit
            .checked_mul(w)
            .and_then(|step| i.checked_add(step))
            .ok_or(Error::Overflow)?;

        let t = params.threshold(k, bias);
        if digit < t {
            return Ok(i);
        }

        // w *= (base - t)
        w = w.checked_mul(params.base - t).ok_or(Error::Overflow)?;
        k += base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::BASE36;
    use crate::encode::encode;
    use crate::params::Tuning;
    use crate::unicode_range::UnicodeRange;

    fn punycode() -> (Params, DigitTable) {
        let params = Params::new(&Tuning::PUNYCODE, 36, '-' as u32, 128).unwrap();
        let digits = BASE36.resolve(&UnicodeRange::ascii()).unwrap();
        (params, digits)
    }

    fn decode_str(input: &str) -> Result<String> {
        let (params, digits) = punycode();
        let indices: Vec<u32> = input.chars().map(|c| c as u32).collect();
        let output = decode(&indices, &params, &digits)?;
        Ok(output
            .into_iter()
            .map(|i| char::from_u32(i).unwrap())
            .collect())
    }

    #[test]
    fn basic_only() {
        assert_eq!(decode_str("-> $1.00 <--").unwrap(), "-> $1.00 <-");
        assert_eq!(decode_str("abc-").unwrap(), "abc");
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode_str("").unwrap(), "");
    }

    #[test]
    fn rfc_arabic() {
        let arabic = "\u{0644}\u{064A}\u{0647}\u{0645}\u{0627}\u{0628}\u{062A}\u{0643}\u{0644}\
                      \u{0645}\u{0648}\u{0634}\u{0639}\u{0631}\u{0628}\u{064A}\u{061F}";
        assert_eq!(decode_str("egbpdaj6bu4bxfgehfvwxn").unwrap(), arabic);
    }

    #[test]
    fn rfc_mixed_basic_and_extended() {
        assert_eq!(
            decode_str("MajiKoi5-783gue6qz075azm5e").unwrap(),
            "Maji\u{3067}Koi\u{3059}\u{308B}5\u{79D2}\u{524D}"
        );
    }

    #[test]
    fn digits_are_case_insensitive() {
        assert_eq!(decode_str("EGB").unwrap(), "\u{061F}");
        assert_eq!(decode_str("egb").unwrap(), "\u{061F}");
    }

    #[test]
    fn inverse_of_encode() {
        let (params, digits) = punycode();
        let input: Vec<u32> = "b\u{fc}cher \u{2603}!".chars().map(|c| c as u32).collect();
        let encoded = encode(&input, &params, &digits).unwrap();
        assert_eq!(decode(&encoded, &params, &digits).unwrap(), input);
    }

    #[test]
    fn extended_before_delimiter() {
        assert_eq!(
            decode_str("ab\u{e9}-egb"),
            Err(Error::InvalidFormat(FormatError::ExtendedBeforeDelimiter {
                position: 2
            }))
        );
    }

    #[test]
    fn truncated_varint() {
        // 'z' = 25 is above every threshold, so more digits must follow.
        assert_eq!(
            decode_str("abc-z"),
            Err(Error::InvalidFormat(FormatError::UnexpectedEnd))
        );
    }

    #[test]
    fn non_digit_after_delimiter() {
        assert_eq!(
            decode_str("abc-e!"),
            Err(Error::InvalidFormat(FormatError::InvalidDigit { position: 5 }))
        );
    }

    #[test]
    fn code_point_in_basic_range() {
        // A basic range reaching past initial_n makes the first insertion
        // land inside it.
        let (params, digits) = punycode();
        let params = Params {
            basic_len: 200,
            ..params
        };
        let result = decode(&['a' as u32], &params, &digits);
        assert_eq!(
            result,
            Err(Error::InvalidFormat(FormatError::BasicCodePoint(128)))
        );
    }

    #[test]
    fn weight_overflow() {
        assert_eq!(decode_str("9999999999999a"), Err(Error::Overflow));
    }

    #[test]
    fn delimiter_at_start_is_dropped() {
        assert_eq!(decode_str("-egb").unwrap(), "\u{061F}");
    }
}
