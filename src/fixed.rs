// ============================================================================
// Fixed-Point Value Type
// Scaled-integer arithmetic with compile-time width, scale and strategy
// ============================================================================

use std::any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::errors::{NumericError, NumericResult};
use crate::repr::{shl_full, shr_full, CastFrom, Int};
use crate::strategy::{exact_div, exact_mul, Fast, MulDiv, Safe};

/// Binary fixed-point number.
///
/// Stores `value * 2^S` in a single integer of type `R`; the represented
/// value is always `raw / 2^S`. The multiplication/division strategy `M` is
/// part of the configuration: [`Safe`] (the default) never produces a wrong
/// result unless the true result is unrepresentable, [`Fast`] trades that
/// guarantee for a plain widened multiply.
///
/// Two values only interoperate when `R`, `S` and `M` all match; mixing
/// configurations is a type error, not a runtime one.
///
/// # Type Parameters
/// - `R`: representation type, any [`Int`] (all primitive integers).
/// - `S`: scale bits, `0 <= S <= R::BITS`. The count of low-order bits
///   treated as fractional.
/// - `M`: multiply/divide strategy, [`Safe`] or [`Fast<W>`](Fast).
///
/// # Example
/// ```
/// use fixed_point::Fixed;
///
/// type Q = Fixed<u32, 16>;
///
/// let a = Q::from_integer(13);
/// let b = Q::from_scaled(1, 4); // 1/16
/// assert_eq!((a / b).to_integer::<u32>(), 208);
/// ```
#[repr(transparent)]
pub struct Fixed<R, const S: u32, M = Safe> {
    raw: R,
    strategy: PhantomData<M>,
}

impl<R: Int, const S: u32, M> Fixed<R, S, M> {
    const SCALE_OK: () = assert!(S <= R::BITS, "scale bits exceed the representation width");

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap an already-scaled raw value.
    #[inline]
    pub const fn from_raw(raw: R) -> Self {
        let _ = Self::SCALE_OK;
        Self {
            raw,
            strategy: PhantomData,
        }
    }

    /// Store an integer value as fixed point: `raw = v << S`.
    ///
    /// Bits shifted beyond the representation width are discarded, the same
    /// wraparound the raw type applies.
    #[inline]
    pub fn from_integer(v: R) -> Self {
        Self::from_raw(shl_full(v, S))
    }

    /// Store `v * 2^(-scale)`, re-expressed at the native scale:
    /// `raw = v << (S - scale)`.
    ///
    /// `scale` must not exceed `S`; checked only in debug builds.
    #[inline]
    pub fn from_scaled(v: R, scale: u32) -> Self {
        debug_assert!(scale <= S, "scale exceeds the configured scale bits");
        Self::from_raw(shl_full(v, S - scale))
    }

    /// The value 1 (raw `1 << S`).
    #[inline]
    pub fn one() -> Self {
        Self::from_integer(R::ONE)
    }

    // ========================================================================
    // Accessors & Conversion
    // ========================================================================

    /// The stored scaled integer.
    #[inline]
    pub const fn raw(self) -> R {
        self.raw
    }

    /// Integer part by arithmetic right shift, narrowed to `T2` with
    /// `as`-cast rules.
    ///
    /// The shift happens at the representation's own width, so narrowing
    /// only ever drops bits the target cannot hold. The shift is arithmetic:
    /// negative values round toward negative infinity.
    #[inline]
    pub fn to_integer<T2: CastFrom<R>>(self) -> T2 {
        T2::cast_from(shr_full(self.raw, S))
    }

    /// Integer part at the representation's own width.
    #[inline]
    pub fn int_part(self) -> R {
        shr_full(self.raw, S)
    }

    /// The low `S` raw bits: the scaled fractional residue, so that
    /// `value = int_part() + frac_part() / 2^S`.
    #[inline]
    pub fn frac_part(self) -> R::Unsigned {
        let one = <R::Unsigned as Int>::ONE;
        let mask = shl_full(one, S).wrapping_sub(one);
        self.raw.to_unsigned() & mask
    }

    /// Floating approximation `raw / 2^S`.
    ///
    /// Accuracy is bounded by the mantissa width, not guaranteed exact for
    /// wide representations.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.raw.as_f32() / (S as f32).exp2()
    }

    /// Floating approximation `raw / 2^S` in double precision.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.raw.as_f64() / (S as f64).exp2()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.raw == R::ZERO
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.raw > R::ZERO
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.raw < R::ZERO
    }

    /// Returns the smaller of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.raw <= other.raw {
            self
        } else {
            other
        }
    }

    /// Returns the larger of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.raw >= other.raw {
            self
        } else {
            other
        }
    }

    /// Absolute value.
    ///
    /// # Errors
    /// `Overflow` for the minimum signed value.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        if self.raw < R::ZERO {
            self.raw
                .checked_neg()
                .map(Self::from_raw)
                .ok_or(NumericError::Overflow)
        } else {
            Ok(self)
        }
    }

    // ========================================================================
    // Integer-Operand Arithmetic
    // ========================================================================

    /// Multiply by a plain integer directly on the raw value.
    ///
    /// An integer factor adds no scale bits, so the scaled machinery is
    /// skipped entirely.
    #[inline]
    pub fn mul_int(self, k: R) -> Self {
        Self::from_raw(self.raw * k)
    }

    /// Divide by a plain integer directly on the raw value.
    #[inline]
    pub fn div_int(self, k: R) -> Self {
        Self::from_raw(self.raw / k)
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.raw
            .checked_add(rhs.raw)
            .map(Self::from_raw)
            .ok_or_else(|| {
                if rhs.raw > R::ZERO {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                }
            })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.raw
            .checked_sub(rhs.raw)
            .map(Self::from_raw)
            .ok_or_else(|| {
                if rhs.raw < R::ZERO {
                    NumericError::Overflow
                } else {
                    NumericError::Underflow
                }
            })
    }

    /// Checked negation.
    ///
    /// # Errors
    /// `Overflow` when the negation is unrepresentable.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.raw
            .checked_neg()
            .map(Self::from_raw)
            .ok_or(NumericError::Overflow)
    }

    /// Checked multiplication through the exact long-form product,
    /// truncating toward zero regardless of the configured strategy.
    ///
    /// # Errors
    /// `Overflow`/`Underflow` exactly when the true product does not fit.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        exact_mul(self.raw, rhs.raw, S)
            .map(Self::from_raw)
            .ok_or_else(|| {
                if self.raw.is_negative() != rhs.raw.is_negative() {
                    NumericError::Underflow
                } else {
                    NumericError::Overflow
                }
            })
    }

    /// Checked division through the exact long-form quotient, truncating
    /// toward zero regardless of the configured strategy.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor, `Overflow`/`Underflow` when the
    /// true quotient does not fit.
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.raw == R::ZERO {
            return Err(NumericError::DivisionByZero);
        }
        exact_div(self.raw, rhs.raw, S)
            .map(Self::from_raw)
            .ok_or_else(|| {
                if self.raw.is_negative() != rhs.raw.is_negative() {
                    NumericError::Underflow
                } else {
                    NumericError::Overflow
                }
            })
    }

    // ========================================================================
    // Decimal Boundary Conversions
    // ========================================================================

    fn pow2_decimal() -> Option<Decimal> {
        if S >= 96 {
            return None;
        }
        Decimal::from_u128(1u128 << S)
    }

    /// Decimal rendering `raw / 2^S`, intended for API boundaries and
    /// display.
    ///
    /// Exact while the value fits `Decimal`'s 28 significant decimal
    /// digits; beyond that the quotient is rounded.
    ///
    /// # Errors
    /// `PrecisionLoss` when the raw value or the scale factor exceeds
    /// decimal range.
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        let raw = self.raw.to_decimal().ok_or(NumericError::PrecisionLoss)?;
        let scale = Self::pow2_decimal().ok_or(NumericError::PrecisionLoss)?;
        raw.checked_div(scale).ok_or(NumericError::PrecisionLoss)
    }

    /// Nearest representable value to a decimal (ties to even on the scaled
    /// value).
    ///
    /// # Errors
    /// `Overflow` if the value is out of range, `PrecisionLoss` when the
    /// scale factor exceeds decimal range.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let scale = Self::pow2_decimal().ok_or(NumericError::PrecisionLoss)?;
        let scaled = d.checked_mul(scale).ok_or(NumericError::Overflow)?;
        R::from_decimal(scaled.round())
            .map(Self::from_raw)
            .ok_or(NumericError::Overflow)
    }

    /// Exact decimal conversion: rejects inputs this configuration cannot
    /// represent bit-for-bit.
    ///
    /// # Errors
    /// `PrecisionLoss` if rounding occurred, plus the [`from_decimal`]
    /// errors.
    ///
    /// [`from_decimal`]: Self::from_decimal
    pub fn from_decimal_exact(d: Decimal) -> NumericResult<Self> {
        let v = Self::from_decimal(d)?;
        if v.to_decimal()? != d {
            return Err(NumericError::PrecisionLoss);
        }
        Ok(v)
    }
}

// ============================================================================
// Additive & Bitwise Operators
// Direct on the raw value, inheriting the representation's overflow rules
// ============================================================================

impl<R: Int, const S: u32, M> Add for Fixed<R, S, M> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw + rhs.raw)
    }
}

impl<R: Int, const S: u32, M> AddAssign for Fixed<R, S, M> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: Int, const S: u32, M> Sub for Fixed<R, S, M> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw - rhs.raw)
    }
}

impl<R: Int, const S: u32, M> SubAssign for Fixed<R, S, M> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<R: Int, const S: u32, M> Neg for Fixed<R, S, M> {
    type Output = Self;

    /// Two's-complement negation of the raw value. Defined for unsigned
    /// representations as well; the minimum signed value wraps to itself.
    #[inline]
    fn neg(self) -> Self {
        Self::from_raw(self.raw.wrapping_neg())
    }
}

impl<R: Int, const S: u32, M> Not for Fixed<R, S, M> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.raw)
    }
}

impl<R: Int, const S: u32, M> BitAnd for Fixed<R, S, M> {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(self.raw & rhs.raw)
    }
}

impl<R: Int, const S: u32, M> BitAndAssign for Fixed<R, S, M> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<R: Int, const S: u32, M> BitOr for Fixed<R, S, M> {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.raw | rhs.raw)
    }
}

impl<R: Int, const S: u32, M> BitOrAssign for Fixed<R, S, M> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<R: Int, const S: u32, M> BitXor for Fixed<R, S, M> {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_raw(self.raw ^ rhs.raw)
    }
}

impl<R: Int, const S: u32, M> BitXorAssign for Fixed<R, S, M> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl<R: Int, const S: u32, M> Shl<u32> for Fixed<R, S, M> {
    type Output = Self;
    #[inline]
    fn shl(self, amt: u32) -> Self {
        Self::from_raw(self.raw << amt)
    }
}

impl<R: Int, const S: u32, M> ShlAssign<u32> for Fixed<R, S, M> {
    #[inline]
    fn shl_assign(&mut self, amt: u32) {
        *self = *self << amt;
    }
}

impl<R: Int, const S: u32, M> Shr<u32> for Fixed<R, S, M> {
    type Output = Self;
    #[inline]
    fn shr(self, amt: u32) -> Self {
        Self::from_raw(self.raw >> amt)
    }
}

impl<R: Int, const S: u32, M> ShrAssign<u32> for Fixed<R, S, M> {
    #[inline]
    fn shr_assign(&mut self, amt: u32) {
        *self = *self >> amt;
    }
}

impl<R: Int, const S: u32, M> Shl<Fixed<R, S, M>> for Fixed<R, S, M>
where
    u32: CastFrom<R>,
{
    type Output = Self;

    /// Shifts by the raw bit count of `rhs`, not by its scaled value.
    #[inline]
    fn shl(self, rhs: Self) -> Self {
        Self::from_raw(self.raw << u32::cast_from(rhs.raw))
    }
}

impl<R: Int, const S: u32, M> Shr<Fixed<R, S, M>> for Fixed<R, S, M>
where
    u32: CastFrom<R>,
{
    type Output = Self;

    /// Shifts by the raw bit count of `rhs`, not by its scaled value.
    #[inline]
    fn shr(self, rhs: Self) -> Self {
        Self::from_raw(self.raw >> u32::cast_from(rhs.raw))
    }
}

// ============================================================================
// Multiplicative Operators
// Dispatched to the configured strategy; modulus is scale-invariant
// ============================================================================

impl<R: Int, const S: u32, M: MulDiv<R, S>> Mul for Fixed<R, S, M> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(M::mul(self.raw, rhs.raw))
    }
}

impl<R: Int, const S: u32, M: MulDiv<R, S>> MulAssign for Fixed<R, S, M> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<R: Int, const S: u32, M: MulDiv<R, S>> Div for Fixed<R, S, M> {
    type Output = Self;

    /// See the strategy types for division-by-zero behavior; `checked_div`
    /// is the guarded form.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_raw(M::div(self.raw, rhs.raw))
    }
}

impl<R: Int, const S: u32, M: MulDiv<R, S>> DivAssign for Fixed<R, S, M> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<R: Int, const S: u32, M> Rem for Fixed<R, S, M> {
    type Output = Self;

    /// Modulus on scaled integers is scale-invariant, so it applies to the
    /// raw values directly.
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Self::from_raw(self.raw % rhs.raw)
    }
}

impl<R: Int, const S: u32, M> RemAssign for Fixed<R, S, M> {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// ============================================================================
// Integer Operand Forms
// One operand may be a plain integer of the representation type
// ============================================================================

macro_rules! impl_int_operand {
    ($($t:ty),* $(,)?) => {$(
        impl<const S: u32, M> Mul<$t> for Fixed<$t, S, M> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: $t) -> Self {
                self.mul_int(rhs)
            }
        }

        impl<const S: u32, M> MulAssign<$t> for Fixed<$t, S, M> {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = self.mul_int(rhs);
            }
        }

        impl<const S: u32, M> Div<$t> for Fixed<$t, S, M> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: $t) -> Self {
                self.div_int(rhs)
            }
        }

        impl<const S: u32, M> DivAssign<$t> for Fixed<$t, S, M> {
            #[inline]
            fn div_assign(&mut self, rhs: $t) {
                *self = self.div_int(rhs);
            }
        }

        impl<const S: u32, M> Add<$t> for Fixed<$t, S, M> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: $t) -> Self {
                self + Self::from_integer(rhs)
            }
        }

        impl<const S: u32, M> AddAssign<$t> for Fixed<$t, S, M> {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl<const S: u32, M> Sub<$t> for Fixed<$t, S, M> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: $t) -> Self {
                self - Self::from_integer(rhs)
            }
        }

        impl<const S: u32, M> SubAssign<$t> for Fixed<$t, S, M> {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }

        impl<const S: u32, M> Rem<$t> for Fixed<$t, S, M> {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: $t) -> Self {
                self % Self::from_integer(rhs)
            }
        }

        impl<const S: u32, M> BitAnd<$t> for Fixed<$t, S, M> {
            type Output = Self;
            #[inline]
            fn bitand(self, rhs: $t) -> Self {
                self & Self::from_integer(rhs)
            }
        }

        impl<const S: u32, M> BitOr<$t> for Fixed<$t, S, M> {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: $t) -> Self {
                self | Self::from_integer(rhs)
            }
        }

        impl<const S: u32, M> BitXor<$t> for Fixed<$t, S, M> {
            type Output = Self;
            #[inline]
            fn bitxor(self, rhs: $t) -> Self {
                self ^ Self::from_integer(rhs)
            }
        }

        // integer on the left: multiplication commutes on the raw value,
        // everything else promotes the integer first
        impl<const S: u32, M> Mul<Fixed<$t, S, M>> for $t {
            type Output = Fixed<$t, S, M>;
            #[inline]
            fn mul(self, rhs: Fixed<$t, S, M>) -> Fixed<$t, S, M> {
                rhs.mul_int(self)
            }
        }

        impl<const S: u32, M: MulDiv<$t, S>> Div<Fixed<$t, S, M>> for $t {
            type Output = Fixed<$t, S, M>;
            #[inline]
            fn div(self, rhs: Fixed<$t, S, M>) -> Fixed<$t, S, M> {
                Fixed::from_integer(self) / rhs
            }
        }

        impl<const S: u32, M> Add<Fixed<$t, S, M>> for $t {
            type Output = Fixed<$t, S, M>;
            #[inline]
            fn add(self, rhs: Fixed<$t, S, M>) -> Fixed<$t, S, M> {
                Fixed::from_integer(self) + rhs
            }
        }

        impl<const S: u32, M> Sub<Fixed<$t, S, M>> for $t {
            type Output = Fixed<$t, S, M>;
            #[inline]
            fn sub(self, rhs: Fixed<$t, S, M>) -> Fixed<$t, S, M> {
                Fixed::from_integer(self) - rhs
            }
        }

        impl<const S: u32, M> Rem<Fixed<$t, S, M>> for $t {
            type Output = Fixed<$t, S, M>;
            #[inline]
            fn rem(self, rhs: Fixed<$t, S, M>) -> Fixed<$t, S, M> {
                Fixed::from_integer(self) % rhs
            }
        }

        impl<const S: u32, M> BitAnd<Fixed<$t, S, M>> for $t {
            type Output = Fixed<$t, S, M>;
            #[inline]
            fn bitand(self, rhs: Fixed<$t, S, M>) -> Fixed<$t, S, M> {
                Fixed::from_integer(self) & rhs
            }
        }

        impl<const S: u32, M> BitOr<Fixed<$t, S, M>> for $t {
            type Output = Fixed<$t, S, M>;
            #[inline]
            fn bitor(self, rhs: Fixed<$t, S, M>) -> Fixed<$t, S, M> {
                Fixed::from_integer(self) | rhs
            }
        }

        impl<const S: u32, M> BitXor<Fixed<$t, S, M>> for $t {
            type Output = Fixed<$t, S, M>;
            #[inline]
            fn bitxor(self, rhs: Fixed<$t, S, M>) -> Fixed<$t, S, M> {
                Fixed::from_integer(self) ^ rhs
            }
        }
    )*};
}

impl_int_operand!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ============================================================================
// Comparison, Hashing, Defaults
// Total order and equality are those of the raw value
// ============================================================================

impl<R: Int, const S: u32, M> Clone for Fixed<R, S, M> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Int, const S: u32, M> Copy for Fixed<R, S, M> {}

impl<R: Int, const S: u32, M> PartialEq for Fixed<R, S, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<R: Int, const S: u32, M> Eq for Fixed<R, S, M> {}

impl<R: Int, const S: u32, M> PartialOrd for Fixed<R, S, M> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Int, const S: u32, M> Ord for Fixed<R, S, M> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<R: Int, const S: u32, M> Hash for Fixed<R, S, M> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<R: Int, const S: u32, M> Default for Fixed<R, S, M> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Display, Debug, Parsing
// ============================================================================

impl<R: Int, const S: u32, M> fmt::Display for Fixed<R, S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(d) => write!(f, "{}", d.normalize()),
            // configurations beyond decimal range fall back to the raw form
            Err(_) => write!(f, "{}*2^-{}", self.raw, S),
        }
    }
}

impl<R: Int, const S: u32, M> fmt::Debug for Fixed<R, S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fixed<{}, {}>({}, raw={})",
            any::type_name::<R>(),
            S,
            self,
            self.raw
        )
    }
}

impl<R: Int, const S: u32, M> FromStr for Fixed<R, S, M> {
    type Err = NumericError;

    /// Parses a decimal string and rounds to the nearest representable
    /// value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = Decimal::from_str(s.trim()).map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(d)
    }
}

// ============================================================================
// Serde (optional): transports only the raw scaled integer
// ============================================================================

#[cfg(feature = "serde")]
impl<R: Int + serde::Serialize, const S: u32, M> serde::Serialize for Fixed<R, S, M> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        self.raw.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R: Int + serde::Deserialize<'de>, const S: u32, M> serde::Deserialize<'de>
    for Fixed<R, S, M>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        R::deserialize(deserializer).map(Self::from_raw)
    }
}

// ============================================================================
// Type Aliases for Common Configurations
// ============================================================================

/// Signed 32-bit, 16 fractional bits (Q15.16), safe strategy.
pub type Q15x16 = Fixed<i32, 16>;

/// Unsigned 32-bit, 16 fractional bits (UQ16.16), safe strategy.
pub type UQ16x16 = Fixed<u32, 16>;

/// Signed 64-bit, 32 fractional bits (Q31.32), safe strategy.
pub type Q31x32 = Fixed<i64, 32>;

/// Unsigned 64-bit, 32 fractional bits (UQ32.32), safe strategy.
pub type UQ32x32 = Fixed<u64, 32>;

/// Q15.16 multiplying through a 64-bit widening cast.
pub type Q15x16Fast = Fixed<i32, 16, Fast<i64>>;

/// UQ16.16 multiplying through a 64-bit widening cast.
pub type UQ16x16Fast = Fixed<u32, 16, Fast<u64>>;

// ============================================================================
// Tests
// ============================================================================
