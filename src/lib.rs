// ============================================================================
// Fixed-Point Arithmetic Library
// Deterministic scaled-integer arithmetic with selectable overflow strategy
// ============================================================================

//! # fixed-point
//!
//! A generic binary fixed-point number: a drop-in replacement for floating
//! point wherever deterministic, overflow-controllable arithmetic is needed
//! (embedded targets, DSP, deterministic simulation, quantity math).
//!
//! ## Features
//!
//! - **Compile-time configuration**: representation type, scale bits and
//!   multiply/divide strategy are type parameters; mixing configurations is
//!   a type error.
//! - **Overflow-safe multiplication and division** ([`Safe`]): long
//!   multiplication and shift-and-subtract long division at the
//!   representation's native width — no wider intermediate type — that only
//!   overflow when the true result is unrepresentable.
//! - **Widening fast path** ([`Fast`]): plain widened-cast multiply/divide
//!   when headroom is guaranteed by the caller.
//! - **Fixed iteration counts**: the long-form algorithms run a constant
//!   number of steps regardless of operand values.
//! - **Checked API and decimal boundary conversions** for the edges of a
//!   program where raw wraparound is not acceptable.
//!
//! ## Example
//!
//! ```rust
//! use fixed_point::{Fast, Fixed};
//!
//! // Overflow-safe Q15.16: long multiplication at native width
//! type Q = Fixed<i32, 16>;
//!
//! let rate = Q::from_scaled(3, 2); // 0.75
//! let qty = Q::from_integer(100);
//! assert_eq!((rate * qty).to_integer::<i32>(), 75);
//!
//! // The same layout through a 64-bit widening cast
//! type QFast = Fixed<i32, 16, Fast<i64>>;
//! let x = QFast::from_integer(3) / QFast::from_integer(4);
//! assert_eq!(x.to_f32(), 0.75);
//!
//! // Compile-time introspection
//! assert_eq!(Q::LIMITS.digits, 31);
//! assert_eq!(Q::EPSILON.to_f64(), 2f64.powi(-16));
//! ```

mod errors;
mod fixed;
mod limits;
mod repr;
mod strategy;

pub use errors::{NumericError, NumericResult};
pub use fixed::{Fixed, Q15x16, Q15x16Fast, Q31x32, UQ16x16, UQ16x16Fast, UQ32x32};
pub use limits::Limits;
pub use repr::{CastFrom, Int};
pub use strategy::{Fast, MulDiv, Safe};

// Re-exports for convenience
pub mod prelude {
    pub use crate::errors::{NumericError, NumericResult};
    pub use crate::fixed::{Fixed, Q15x16, Q15x16Fast, Q31x32, UQ16x16, UQ16x16Fast, UQ32x32};
    pub use crate::limits::Limits;
    pub use crate::repr::{CastFrom, Int};
    pub use crate::strategy::{Fast, MulDiv, Safe};
}
