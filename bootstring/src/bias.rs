//! Bias adaptation (RFC 3492 section 6.1).

use crate::params::Params;

/// Recompute the bias after a delta has been encoded or decoded.
///
/// - `delta`: the delta value just processed
/// - `num_points`: number of code points handled so far, including this one
/// - `first_time`: whether this is the first adaptation
///
/// All divisions truncate toward zero.
pub(crate) fn adapt_bias(delta: u32, num_points: u32, first_time: bool, params: &Params) -> u64 {
    let base = u64::from(params.base);
    let base_minus_tmin = u64::from(params.base - params.tmin);

    // Scale delta down
    let mut delta = u64::from(delta) / if first_time { u64::from(params.damp) } else { 2 };

    // Compensate for the length of the string
    delta += delta / u64::from(num_points.max(1));

    let threshold = (base_minus_tmin * u64::from(params.tmax)) / 2;
    let mut k = 0u64;
    while delta > threshold {
        delta /= base_minus_tmin;
        k += base;
    }

    k + ((base_minus_tmin + 1) * delta) / (delta + u64::from(params.skew))
}
