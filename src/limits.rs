// ============================================================================
// Numeric Descriptor
// Compile-time introspection analogous to floating-point limits
// ============================================================================

use crate::fixed::Fixed;
use crate::repr::Int;
use crate::strategy::MulDiv;

// fixed so the decimal estimates need no runtime transcendental call
const LOG10_2: f64 = 0.301029995663981195;

/// Compile-time description of a fixed-point configuration.
///
/// Computed entirely from the representation's constants; query it as
/// [`Fixed::LIMITS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Whether the representation is signed.
    pub is_signed: bool,
    /// Arithmetic on representable results is exact.
    pub is_exact: bool,
    /// The value range is bounded by `MIN` and `MAX`.
    pub is_bounded: bool,
    /// Base of the scale factor.
    pub radix: u32,
    /// Value bits in the representation (width minus sign bit).
    pub digits: u32,
    /// Decimal digits that survive a round trip.
    pub digits10: u32,
    /// Fractional bits: one ULP is `2^-min_exponent`.
    pub min_exponent: i32,
    /// Decimal estimate of the fractional resolution.
    pub min_exponent10: i32,
    /// Integer bits: every magnitude is below `2^max_exponent`.
    pub max_exponent: i32,
    /// Decimal estimate of the integer range.
    pub max_exponent10: i32,
    /// Whether scaled multiplication truncates toward zero.
    pub rounds_toward_zero: bool,
}

impl<R: Int, const S: u32, M: MulDiv<R, S>> Fixed<R, S, M> {
    /// The descriptor for this configuration.
    pub const LIMITS: Limits = Limits {
        is_signed: R::SIGNED,
        is_exact: true,
        is_bounded: true,
        radix: 2,
        digits: R::DIGITS,
        digits10: (R::DIGITS as f64 * LOG10_2) as u32,
        min_exponent: S as i32,
        min_exponent10: (S as f64 * LOG10_2) as i32,
        max_exponent: R::DIGITS as i32 - S as i32,
        max_exponent10: ((R::DIGITS as i32 - S as i32) as f64 * LOG10_2) as i32,
        rounds_toward_zero: M::ROUNDS_TOWARD_ZERO,
    };
}

impl<R: Int, const S: u32, M> Fixed<R, S, M> {
    /// The value 0.
    pub const ZERO: Self = Self::from_raw(R::ZERO);

    /// Smallest representable value (raw `R::MIN`).
    pub const MIN: Self = Self::from_raw(R::MIN);

    /// Largest representable value (raw `R::MAX`).
    pub const MAX: Self = Self::from_raw(R::MAX);

    /// One unit in the last place: `from_scaled(1, S)`, raw 1.
    pub const EPSILON: Self = Self::from_raw(R::ONE);
}
