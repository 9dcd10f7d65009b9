use fixed_point::{Fast, Fixed};
use proptest::prelude::*;

type Q32 = Fixed<i32, 16>;
type UQ32 = Fixed<u32, 16>;
type Q64 = Fixed<i64, 32>;
type UQ64 = Fixed<u64, 32>;

// Reference arithmetic at double width. Multiplication truncates toward
// zero on the magnitude, matching the sign-magnitude long multiplication;
// division relies on Rust's toward-zero integer division.

fn ref_mul_i32(a: i32, b: i32) -> Option<i32> {
    let p = a as i128 * b as i128;
    let q = if p < 0 { -((-p) >> 16) } else { p >> 16 };
    i32::try_from(q).ok()
}

fn ref_mul_u32(a: u32, b: u32) -> Option<u32> {
    u32::try_from((a as u128 * b as u128) >> 16).ok()
}

fn ref_mul_i64(a: i64, b: i64) -> Option<i64> {
    let p = a as i128 * b as i128;
    let q = if p < 0 { -((-p) >> 32) } else { p >> 32 };
    i64::try_from(q).ok()
}

fn ref_div_i32(a: i32, b: i32) -> Option<i32> {
    i32::try_from(((a as i128) << 16) / b as i128).ok()
}

fn ref_div_u64(a: u64, b: u64) -> Option<u64> {
    u64::try_from(((a as u128) << 32) / b as u128).ok()
}

// Property 1: integer round trip (from_integer -> to_integer == identity)
proptest! {
    #[test]
    fn prop_integer_roundtrip(v in -32_768i32..32_768) {
        prop_assert_eq!(Q32::from_integer(v).to_integer::<i32>(), v);
    }
}

// Property 2: scale consistency (from_scaled at scale 0 == from_integer)
proptest! {
    #[test]
    fn prop_scale_consistency(v in any::<i32>()) {
        prop_assert_eq!(Q32::from_scaled(v, 0), Q32::from_integer(v));
    }
}

// Property 3: additive inverse (x + (-x) == 0 whenever -x is representable)
proptest! {
    #[test]
    fn prop_additive_inverse(raw in (i32::MIN + 1)..=i32::MAX) {
        let x = Q32::from_raw(raw);
        prop_assert_eq!(x + (-x), Q32::ZERO);
    }
}

// Property 4: safe multiplication matches the double-width reference for
// every representable result, and the checked form reports exactly the
// out-of-range cases
proptest! {
    #[test]
    fn prop_safe_mul_matches_reference_i32(a in any::<i32>(), b in any::<i32>()) {
        let x = Q32::from_raw(a);
        let y = Q32::from_raw(b);
        match ref_mul_i32(a, b) {
            Some(q) => {
                prop_assert_eq!((x * y).raw(), q);
                prop_assert_eq!(x.checked_mul(y).map(|v| v.raw()), Ok(q));
            }
            None => prop_assert!(x.checked_mul(y).is_err()),
        }
    }
}

proptest! {
    #[test]
    fn prop_safe_mul_matches_reference_u32(a in any::<u32>(), b in any::<u32>()) {
        let x = UQ32::from_raw(a);
        let y = UQ32::from_raw(b);
        match ref_mul_u32(a, b) {
            Some(q) => prop_assert_eq!((x * y).raw(), q),
            None => prop_assert!(x.checked_mul(y).is_err()),
        }
    }
}

// Property 5: boundary-heavy operands still match the reference
proptest! {
    #[test]
    fn prop_safe_mul_near_extremes(
        a in prop_oneof![
            Just(i64::MIN), Just(i64::MIN + 1), Just(i64::MAX), Just(i64::MAX - 1),
            -4i64..4,
            any::<i64>(),
        ],
        b in prop_oneof![
            Just(i64::MIN), Just(i64::MAX), Just(1i64 << 32), Just(-(1i64 << 32)),
            any::<i64>(),
        ],
    ) {
        let x = Q64::from_raw(a);
        let y = Q64::from_raw(b);
        match ref_mul_i64(a, b) {
            Some(q) => prop_assert_eq!((x * y).raw(), q),
            None => prop_assert!(x.checked_mul(y).is_err()),
        }
    }
}

// Property 6: safe division matches the double-width reference for every
// representable quotient
proptest! {
    #[test]
    fn prop_safe_div_matches_reference_i32(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(b != 0);
        let x = Q32::from_raw(a);
        let y = Q32::from_raw(b);
        match ref_div_i32(a, b) {
            Some(q) => {
                prop_assert_eq!((x / y).raw(), q);
                prop_assert_eq!(x.checked_div(y).map(|v| v.raw()), Ok(q));
            }
            None => prop_assert!(x.checked_div(y).is_err()),
        }
    }
}

proptest! {
    #[test]
    fn prop_safe_div_matches_reference_u64(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(b != 0);
        let x = UQ64::from_raw(a);
        let y = UQ64::from_raw(b);
        match ref_div_u64(a, b) {
            Some(q) => prop_assert_eq!((x / y).raw(), q),
            None => prop_assert!(x.checked_div(y).is_err()),
        }
    }
}

// Property 7: multiplication commutes, including on wrapped results
proptest! {
    #[test]
    fn prop_mul_commutative(a in any::<i32>(), b in any::<i32>()) {
        let x = Q32::from_raw(a);
        let y = Q32::from_raw(b);
        prop_assert_eq!(x * y, y * x);
    }
}

// Property 8: integer multiplication is the same operation on either side
// and agrees with full fixed-point multiplication when nothing overflows
proptest! {
    #[test]
    fn prop_int_mul_equivalence(v in -128i32..128, k in -128i32..128) {
        let a = Q32::from_integer(v);
        prop_assert_eq!(k * a, a * k);
        prop_assert_eq!(a * k, a * Q32::from_integer(k));
    }
}

// Property 9: ordering matches the floating approximation while the raw
// values convert exactly
proptest! {
    #[test]
    fn prop_ordering_matches_float(a in any::<i32>(), b in any::<i32>()) {
        let x = Q32::from_raw(a);
        let y = Q32::from_raw(b);
        prop_assert_eq!(x < y, x.to_f64() < y.to_f64());
        prop_assert_eq!(x == y, x.to_f64() == y.to_f64());
    }
}

// Property 10: modulus is scale-invariant (applies directly to raw values)
proptest! {
    #[test]
    fn prop_modulus_scale_invariant(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(b != 0);
        prop_assume!(!(a == i32::MIN && b == -1));
        let x = Q32::from_raw(a);
        let y = Q32::from_raw(b);
        prop_assert_eq!((x % y).raw(), a % b);
    }
}

// Property 11: the fast strategy agrees with the safe strategy whenever the
// caller-guaranteed headroom actually holds
proptest! {
    #[test]
    fn prop_fast_matches_safe_in_range(a in 0u32..(1 << 24), b in 0u32..(1 << 24)) {
        prop_assume!(ref_mul_u32(a, b).is_some());
        type F = Fixed<u32, 16, Fast<u64>>;
        let safe = (UQ32::from_raw(a) * UQ32::from_raw(b)).raw();
        let fast = (F::from_raw(a) * F::from_raw(b)).raw();
        prop_assert_eq!(safe, fast);

        // the quotient must also be representable for the two paths to agree
        if b != 0 && ((a as u64) << 16) / b as u64 <= u32::MAX as u64 {
            let safe_div = (UQ32::from_raw(a) / UQ32::from_raw(b)).raw();
            let fast_div = (F::from_raw(a) / F::from_raw(b)).raw();
            prop_assert_eq!(safe_div, fast_div);
        }
    }
}
