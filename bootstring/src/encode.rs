//! Bootstring encoding (RFC 3492 section 6.3).

use crate::bias::adapt_bias;
use crate::digits::DigitTable;
use crate::error::{Error, Result};
use crate::params::Params;

/// Encode a sequence of extended-alphabet indices.
///
/// Indices below `params.basic_len` are basic and are copied verbatim, in
/// order, followed by the delimiter if there was at least one. The rest of
/// the output is the insertion deltas as variable-length integers, written
/// as basic-alphabet indices of their digits.
pub(crate) fn encode(input: &[u32], params: &Params, digits: &DigitTable) -> Result<Vec<u32>> {
    let mut n = params.initial_n;
    let mut delta: u32 = 0;
    let mut bias = u64::from(params.initial_bias);

    let mut output = Vec::with_capacity(input.len());
    for (position, &c) in input.iter().enumerate() {
        if c < params.basic_len {
            output.push(c);
        } else if c < n {
            return Err(Error::InvalidCharacter { position, index: c });
        }
    }

    let basic_count = output.len();
    let mut handled = basic_count;
    if basic_count > 0 {
        output.push(params.delimiter);
    }

    while handled < input.len() {
        // Next code point to insert: the smallest one not yet reached.
        let Some(m) = input.iter().copied().filter(|&c| c >= n).min() else {
            break;
        };

        let weight = u32::try_from(handled + 1).map_err(|_| Error::Overflow)?;
        delta = (m - n)
            .checked_mul(weight)
            .and_then(|step| delta.checked_add(step))
            .ok_or(Error::Overflow)?;
        n = m;

        for &c in input {
            if c < n {
                delta = delta.checked_add(1).ok_or(Error::Overflow)?;
            } else if c == n {
                encode_varint(&mut output, delta, bias, params, digits)?;

                let points = u32::try_from(handled + 1).map_err(|_| Error::Overflow)?;
                bias = adapt_bias(delta, points, handled == basic_count, params);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(Error::Overflow)?;
        n = n.checked_add(1).ok_or(Error::Overflow)?;
    }

    Ok(output)
}

/// Append `value` as a generalized variable-length integer.
fn encode_varint(
    output: &mut Vec<u32>,
    mut value: u32,
    bias: u64,
    params: &Params,
    digits: &DigitTable,
) -> Result<()> {
    let base = u64::from(params.base);
    let mut k = base;

    loop {
        let t = params.threshold(k, bias);

        if value < t {
            output.push(digit_index(value, digits)?);
            return Ok(());
        }

        let digit = t + (value - t) % (params.base - t);
        output.push(digit_index(digit, digits)?);

        value = (value - t) / (params.base - t);
        k += base;
    }
}

fn digit_index(digit: u32, digits: &DigitTable) -> Result<u32> {
    digits
        .index_of_digit(digit)
        .ok_or_else(|| Error::config(format!("digit {} has no representation", digit)))
}
