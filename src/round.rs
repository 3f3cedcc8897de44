//! Rounding of scaled magnitudes.

use crate::RoundMode;

/// Rounds a non-negative scaled `magnitude` according to `mode`.
///
/// `negative` tells whether the original value was negative. The value is
/// rounded in signed form so that `Up` always moves away from zero and `Down`
/// toward zero; the returned magnitude is unsigned and the caller re-applies
/// the sign.
///
/// `Even` and `Odd` truncate first and then bump the truncated value by one
/// when its parity is wrong. The fractional part is never consulted, so this is
/// not round-half-to-even.
///
/// # Examples
///
/// ```rust
/// use number_scale::{round, RoundMode};
///
/// assert_eq!(round(RoundMode::Up, false, 4.001), 5.0);
/// assert_eq!(round(RoundMode::Down, true, 4.999), 4.0);
/// assert_eq!(round(RoundMode::Even, false, 5.2), 6.0);
/// assert_eq!(round(RoundMode::Odd, false, 4.7), 5.0);
/// assert_eq!(round(RoundMode::HalfUp, false, 2.5), 3.0);
/// ```
#[must_use]
pub fn round(mode: RoundMode, negative: bool, magnitude: f64) -> f64 {
    let sign = if negative { -1.0 } else { 1.0 };
    let value = sign * magnitude;

    let rounded = match mode {
        RoundMode::Up if negative => value.floor(),
        RoundMode::Up => value.ceil(),
        RoundMode::Down if negative => value.ceil(),
        RoundMode::Down => value.floor(),
        RoundMode::Even => {
            let truncated = value.trunc();
            if is_odd(truncated) {
                truncated + sign
            } else {
                truncated
            }
        }
        RoundMode::Odd => {
            let truncated = value.trunc();
            if is_odd(truncated) {
                truncated
            } else {
                truncated + sign
            }
        }
        RoundMode::HalfUp => sign * (magnitude + 0.5).floor(),
    };

    rounded.abs()
}

fn is_odd(integer: f64) -> bool {
    integer % 2.0 != 0.0
}
