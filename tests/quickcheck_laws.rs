use fixed_point::Fixed;
use quickcheck::quickcheck;

// Algebraic laws that must hold over the full raw-value space, wrapped
// results included.

quickcheck! {
    fn prop_safe_mul_commutes(a: u64, b: u64) -> bool {
        type Q = Fixed<u64, 32>;
        let x = Q::from_raw(a);
        let y = Q::from_raw(b);
        (x * y) == (y * x)
    }

    fn prop_negation_involution(raw: i32) -> bool {
        let x = Fixed::<i32, 16>::from_raw(raw);
        -(-x) == x
    }

    fn prop_int_mul_matches_promoted_mul(v: i8, k: i8) -> bool {
        type Q = Fixed<i32, 16>;
        let a = Q::from_integer(v as i32);
        (a * (k as i32)) == (a * Q::from_integer(k as i32))
    }

    fn prop_equality_is_raw_equality(a: u32, b: u32) -> bool {
        type Q = Fixed<u32, 16>;
        (Q::from_raw(a) == Q::from_raw(b)) == (a == b)
    }
}
