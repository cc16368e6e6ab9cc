// demos/error_handling_demo.rs
use barrier_mc::error::SdeError;
use barrier_mc::mc::mc_engine::{BarrierConfig, BarrierOption};
use barrier_mc::stats;

fn main() {
    println!("Error Handling Demo for barrier-mc");
    println!("==================================\n");

    // Test 1: Zero time steps would divide by zero in dt
    println!("1. Testing zero time steps...");

    let zero_steps = BarrierConfig {
        n_steps: 0,
        ..Default::default()
    };

    match BarrierOption::new(zero_steps) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero experiments would divide by zero in the mean
    println!("\n2. Testing zero experiments...");

    let zero_paths = BarrierConfig {
        num_exp: 0,
        ..Default::default()
    };

    match BarrierOption::new(zero_paths) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Non-positive maturity
    println!("\n3. Testing non-positive maturity...");

    let bad_maturity = BarrierConfig {
        t: -0.75,
        ..Default::default()
    };

    match BarrierOption::new(bad_maturity) {
        Err(SdeError::InvalidParameters {
            parameter,
            value,
            constraint,
        }) => {
            println!(
                "   ✓ Caught InvalidParameters: {} = {} ({})",
                parameter, value, constraint
            );
        }
        Err(other) => println!("   Unexpected error type: {}", other),
        Ok(_) => println!("   Unexpected: Should have failed!"),
    }

    // Test 4: A single experiment is valid, but its stddev is undefined
    println!("\n4. Testing a single-experiment run...");

    let single = BarrierConfig {
        n_steps: 100,
        num_exp: 1,
        ..Default::default()
    };

    match BarrierOption::new(single).and_then(|mut o| o.simulate().map(|(_, s)| s)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(SdeError::DivideByZero { operation, len }) => {
            println!("   ✓ Caught DivideByZero in {} with {} sample(s)", operation, len);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    // Test 5: Statistics on empty input
    println!("\n5. Testing statistics on an empty series...");

    match stats::mean(&[]) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Valid configuration should work
    println!("\n6. Testing valid configuration...");

    let valid = BarrierConfig {
        n_steps: 250,
        num_exp: 10_000,
        seed: 42,
        ..Default::default()
    };

    match BarrierOption::new(valid).and_then(|mut o| o.simulate().map(|(_, s)| s)) {
        Ok(summary) => println!(
            "   ✓ Success: Value = {:.4}, Std Dev = {:.4}",
            summary.current_value, summary.discounted_stddev
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
