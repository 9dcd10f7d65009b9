// ============================================================================
// Representation Contract
// Capability bound for the integer type backing a fixed-point value
// ============================================================================

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr, Sub};

/// Fixed-width, bounded, radix-2 integer semantics.
///
/// This is the compile-time constraint on a fixed-point representation type:
/// anything implementing `Int` behaves like a native two's-complement (or
/// unsigned) machine integer of `BITS` bits. All ten primitive integer types
/// implement it.
///
/// The trait is deliberately open. A custom fixed-size big integer may back a
/// fixed-point value, provided it supplies the same constants and operations
/// a native integer would.
pub trait Int:
    Copy
    + Eq
    + Ord
    + Hash
    + Send
    + Sync
    + 'static
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// The same-width unsigned type (`Self` when already unsigned).
    ///
    /// The long multiplication and division algorithms run on unsigned
    /// magnitudes; this is the type they run on.
    type Unsigned: Int<Unsigned = Self::Unsigned>;

    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;

    /// Total bit width.
    const BITS: u32;

    /// Value bits (width minus the sign bit for signed types).
    const DIGITS: u32;

    const SIGNED: bool;

    /// Bit-pattern cast to the unsigned counterpart.
    fn to_unsigned(self) -> Self::Unsigned;

    /// Bit-pattern cast from the unsigned counterpart.
    fn from_unsigned(u: Self::Unsigned) -> Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_neg(self) -> Option<Self>;
    fn wrapping_neg(self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;

    fn as_f32(self) -> f32;
    fn as_f64(self) -> f64;

    /// Exact decimal rendering of the integer, `None` if out of `Decimal`
    /// range.
    fn to_decimal(self) -> Option<Decimal>;

    /// Integral `Decimal` back to this type, `None` on overflow or a
    /// fractional input.
    fn from_decimal(d: Decimal) -> Option<Self>;

    #[inline]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_int {
    ($($t:ty => $u:ty, $signed:literal, $route:ty, $from_dec:ident, $to_dec:ident);* $(;)?) => {$(
        impl Int for $t {
            type Unsigned = $u;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const BITS: u32 = <$t>::BITS;
            const DIGITS: u32 = <$t>::BITS - ($signed as u32);
            const SIGNED: bool = $signed;

            #[inline]
            fn to_unsigned(self) -> $u {
                self as $u
            }

            #[inline]
            fn from_unsigned(u: $u) -> Self {
                u as Self
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }

            #[inline]
            fn checked_neg(self) -> Option<Self> {
                <$t>::checked_neg(self)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$t>::wrapping_neg(self)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn as_f32(self) -> f32 {
                self as f32
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn to_decimal(self) -> Option<Decimal> {
                Decimal::$from_dec(self as $route)
            }

            #[inline]
            fn from_decimal(d: Decimal) -> Option<Self> {
                <$t>::try_from(d.$to_dec()?).ok()
            }
        }
    )*};
}

impl_int! {
    i8 => u8, true, i128, from_i128, to_i128;
    i16 => u16, true, i128, from_i128, to_i128;
    i32 => u32, true, i128, from_i128, to_i128;
    i64 => u64, true, i128, from_i128, to_i128;
    i128 => u128, true, i128, from_i128, to_i128;
    u8 => u8, false, u128, from_u128, to_u128;
    u16 => u16, false, u128, from_u128, to_u128;
    u32 => u32, false, u128, from_u128, to_u128;
    u64 => u64, false, u128, from_u128, to_u128;
    u128 => u128, false, u128, from_u128, to_u128;
}

// ============================================================================
// Explicit Narrowing/Widening Casts
// ============================================================================

/// Explicit, possibly lossy conversion between integer widths with `as`-cast
/// semantics (truncation on narrowing, sign/zero extension on widening).
///
/// Used by [`Fixed::to_integer`](crate::Fixed::to_integer) to narrow a
/// shifted raw value, and by the [`Fast`](crate::Fast) strategy to move
/// operands into and out of the widened type.
pub trait CastFrom<T>: Sized {
    fn cast_from(v: T) -> Self;
}

macro_rules! impl_cast_from {
    ($to:ty: $($from:ty),* $(,)?) => {$(
        impl CastFrom<$from> for $to {
            #[inline]
            fn cast_from(v: $from) -> Self {
                v as Self
            }
        }
    )*};
}

impl_cast_from!(i8: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
impl_cast_from!(i16: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
impl_cast_from!(i32: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
impl_cast_from!(i64: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
impl_cast_from!(i128: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
impl_cast_from!(u8: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
impl_cast_from!(u16: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
impl_cast_from!(u32: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
impl_cast_from!(u64: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
impl_cast_from!(u128: i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ============================================================================
// Full-Width Shifts
// ============================================================================

/// Left shift that treats a count of `BITS` as shifting every bit out.
///
/// Native shifts reject counts equal to the width; the scale parameter is
/// allowed to reach it.
#[inline]
pub(crate) fn shl_full<R: Int>(v: R, n: u32) -> R {
    if n >= R::BITS {
        R::ZERO
    } else {
        v << n
    }
}

/// Right shift with the same full-width extension. Arithmetic for signed
/// types: a count of `BITS` leaves only the sign fill.
#[inline]
pub(crate) fn shr_full<R: Int>(v: R, n: u32) -> R {
    if n >= R::BITS {
        (v >> (R::BITS - 1)) >> 1
    } else {
        v >> n
    }
}
