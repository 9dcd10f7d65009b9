// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_point::prelude::*;

fn main() {
    println!("=== Fixed-Point Example ===\n");

    // Q15.16: signed 32-bit storage, 16 fractional bits, safe strategy
    let price = Q15x16::from_integer(13);
    let tick = Q15x16::from_scaled(1, 4); // 1/16

    println!("price       = {} (raw {})", price, price.raw());
    println!("tick        = {} (raw {})", tick, tick.raw());
    println!("price/tick  = {}", price / tick);
    println!("price*0.75  = {}", price * Q15x16::from_scaled(3, 2));
    println!("price % 3   = {}", price % 3);

    // integer operands skip the scaled machinery entirely
    let third = Q15x16::one() / 3;
    println!("\n1/3         = {} ~ {}", third, third.to_f64());
    println!("2 * (1/3)   = {}", 2 * third);

    // the checked API reports what the operators would wrap
    println!("\n=== Checked Arithmetic ===");
    let big = Q15x16::from_integer(256);
    match big.checked_mul(big) {
        Ok(v) => println!("256 * 256 = {}", v),
        Err(e) => println!("256 * 256 -> {}", e),
    }
    match Q15x16::one().checked_div(Q15x16::ZERO) {
        Ok(v) => println!("1 / 0 = {}", v),
        Err(e) => println!("1 / 0 -> {}", e),
    }

    // parsing rounds to the nearest representable value
    println!("\n=== Parsing ===");
    let parsed: Q15x16 = "2.5".parse().unwrap();
    println!("\"2.5\"       = {} (raw {})", parsed, parsed.raw());
    let rounded: Q15x16 = "0.1".parse().unwrap();
    println!("\"0.1\"       = {} (raw {})", rounded, rounded.raw());

    // the fast strategy shares the layout but multiplies through i64
    println!("\n=== Strategies ===");
    let fast = Q15x16Fast::from_integer(3) / Q15x16Fast::from_integer(4);
    println!("3/4 (fast)  = {}", fast);

    // compile-time introspection
    println!("\n=== Limits ===");
    let l = Q15x16::LIMITS;
    println!("signed      = {}", l.is_signed);
    println!("digits      = {} ({} decimal)", l.digits, l.digits10);
    println!("resolution  = 2^-{}", l.min_exponent);
    println!("range       < 2^{}", l.max_exponent);
    println!("epsilon     = {}", Q15x16::EPSILON.to_f64());
    println!("max         = {}", Q15x16::MAX.to_f64());
}
