//! Wei/ether conversion.
//!
//! Wei amounts are carried as signed, unbounded `BigInt`s so that any finite
//! `f64` ether amount has an exact wei counterpart.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;

use crate::error::EvmError;

/// One ether = 1,000,000,000,000,000,000 wei (10^18).
pub const WEI_IN_ETHEREUM: u64 = 1_000_000_000_000_000_000;

/// Converts wei to whole ether, rounding towards negative infinity.
///
/// For non-negative amounts this truncates the fractional part.
pub fn wei_big_to_ethereum_big(wei: &BigInt) -> BigInt {
    wei.div_floor(&BigInt::from(WEI_IN_ETHEREUM))
}

/// Converts wei to ether as the `f64` nearest to the exact quotient.
pub fn wei_big_to_ethereum_float(wei: &BigInt) -> f64 {
    let (whole, fraction) = wei.magnitude().div_rem(&BigUint::from(WEI_IN_ETHEREUM));
    let sign = if wei.sign() == Sign::Minus { "-" } else { "" };

    // Exact decimal quotient, rounded once by the float parser.
    let exact = format!("{sign}{whole}.{fraction:018}");
    // A sign, digits and one point always parse; NaN is unreachable.
    exact.parse::<f64>().unwrap_or(f64::NAN)
}

/// Converts an ether amount to wei.
///
/// The value is scaled by 10^18 in `f64` and rounded half to even to an
/// integer. NaN and amounts whose scaled value is infinite are rejected with
/// [`EvmError::InvalidValue`].
pub fn ethereum_float_to_wei_big(ether: f64) -> Result<BigInt, EvmError> {
    let scaled = ether * WEI_IN_ETHEREUM as f64;

    // Sub-wei negatives render as "-0", which parses to zero.
    let rendered = format!("{scaled:.0}");
    rendered.parse::<BigInt>().map_err(|e| {
        tracing::debug!(ether, %rendered, "cannot represent ether amount in wei");
        EvmError::InvalidValue(format!("{ether} ether: {e}"))
    })
}
