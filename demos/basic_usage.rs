// ============================================================================
// Basic Usage Example
// ============================================================================

use scaled_multdiv::prelude::*;

fn main() {
    println!("=== Scaled Multiply-Divide Example ===\n");

    // 7 * 3 / 2 = 10.5 under every rounding mode
    println!("7 * 3 / 2 = 10.5");
    for mode in RoundingMode::ALL {
        match multiply_divide(7, 3, 2, mode) {
            Ok(value) => println!("  {:<12} -> {}", mode, value),
            Err(e) => println!("  {:<12} -> error: {}", mode, e),
        }
    }

    // Same for the negative product
    println!("\n-7 * 3 / 2 = -10.5");
    for mode in RoundingMode::ALL {
        match multiply_divide(-7, 3, 2, mode) {
            Ok(value) => println!("  {:<12} -> {}", mode, value),
            Err(e) => println!("  {:<12} -> error: {}", mode, e),
        }
    }

    // Full-range operands: the product needs 127 bits
    println!("\nFull-range operands");
    let wide = multiply_divide(i64::MAX, i64::MAX - 1, i64::MAX, RoundingMode::Down);
    println!("  MAX * (MAX - 1) / MAX = {:?}", wide);
    let overflow = multiply_divide(i64::MAX, 2, 1, RoundingMode::Down);
    println!("  MAX * 2 / 1           = {:?}", overflow);

    // Fixed-point money: 2 decimals, banker's rounding
    let engine = match ScaledMultiplyDivide::from_config(&MultDivConfig::currency()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            return;
        },
    };

    println!("\nCurrency engine: {:?}", engine);
    let net = 1_999; // 19.99
    let tax_rate = 19; // 0.19
    match engine.multiply_scaled_default(net, tax_rate) {
        Ok(tax) => println!("  tax on 19.99 at 19% = {}.{:02}", tax / 100, tax % 100),
        Err(e) => println!("  tax computation failed: {}", e),
    }
    match engine.divide_scaled_default(10_000, 300) {
        Ok(share) => println!("  100.00 / 3.00       = {}.{:02}", share / 100, share % 100),
        Err(e) => println!("  division failed: {}", e),
    }

    println!("\n=== Example Complete ===");
}
