//! Convergence tests for the arithmetic-average Asian Monte Carlo engine.
//!
//! # Test Categories
//!
//! 1. **Reference band**: 100,000-path estimate near the high-accuracy value
//! 2. **Geometric bracket**: Arithmetic call ≥ geometric call, put ≤ geometric put
//! 3. **Convergence**: Standard error shrinks roughly as 1/√M
//! 4. **Determinism**: Fixed seed reproduces the estimate

use pricer_core::types::{OptionKind, OptionParameters};
use pricer_pricing::analytical::geometric_asian;
use pricer_pricing::mc::{Execution, McEstimate, MonteCarloEngine, SimulationConfig};
use pricer_pricing::rng::PricerRng;

/// S = K = 100, r = 5%, σ = 20%, T = 1.
fn standard_params() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.05)
}

const STEPS: usize = 50;

/// Reference values from a 400,000-path run (standard error ≈ 0.013 / 0.008).
const REFERENCE_CALL: f64 = 5.855;
const REFERENCE_PUT: f64 = 3.39;

fn price(paths: usize, kind: OptionKind, execution: Execution, seed: u64) -> McEstimate {
    let config = SimulationConfig::builder()
        .path_count(paths)
        .time_steps(STEPS)
        .execution(execution)
        .build()
        .unwrap();
    MonteCarloEngine::new(config)
        .price_asian(&standard_params(), kind, &mut PricerRng::from_seed(seed))
        .unwrap()
}

fn assert_in_band(estimate: &McEstimate, reference: f64, label: &str) {
    let tolerance = 4.0 * estimate.std_error + 0.05;
    let error = (estimate.price - reference).abs();
    assert!(
        error < tolerance,
        "{}: MC={:.4}, Reference={:.4}, Error={:.4}, Tolerance={:.4}",
        label,
        estimate.price,
        reference,
        error,
        tolerance
    );
}

// ============================================================================
// Reference Band Tests
// ============================================================================

#[test]
fn test_asian_call_within_reference_band() {
    let estimate = price(100_000, OptionKind::Call, Execution::Serial, 42);
    assert!(estimate.std_error < 0.04);
    assert_in_band(&estimate, REFERENCE_CALL, "Asian call");
}

#[test]
fn test_asian_put_within_reference_band() {
    let estimate = price(100_000, OptionKind::Put, Execution::Serial, 42);
    assert_in_band(&estimate, REFERENCE_PUT, "Asian put");
}

#[test]
fn test_parallel_asian_call_within_reference_band() {
    let estimate = price(100_000, OptionKind::Call, Execution::Parallel, 42);
    assert_in_band(&estimate, REFERENCE_CALL, "Parallel Asian call");
}

// ============================================================================
// Geometric Bracket Tests
// ============================================================================

#[test]
fn test_arithmetic_brackets_geometric() {
    let geometric_call = geometric_asian(&standard_params(), OptionKind::Call, STEPS).unwrap();
    let geometric_put = geometric_asian(&standard_params(), OptionKind::Put, STEPS).unwrap();

    let call = price(100_000, OptionKind::Call, Execution::Serial, 7);
    let put = price(100_000, OptionKind::Put, Execution::Serial, 7);

    assert!(
        call.price > geometric_call - 3.0 * call.std_error,
        "arithmetic call {} below geometric {}",
        call.price,
        geometric_call
    );
    assert!(
        put.price < geometric_put + 3.0 * put.std_error,
        "arithmetic put {} above geometric {}",
        put.price,
        geometric_put
    );
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_std_error_scales_with_inverse_sqrt_paths() {
    let coarse = price(10_000, OptionKind::Call, Execution::Serial, 11);
    let fine = price(40_000, OptionKind::Call, Execution::Serial, 11);

    let ratio = coarse.std_error / fine.std_error;
    assert!(
        (1.7..2.3).contains(&ratio),
        "Quadrupling paths should halve the standard error, got ratio {:.3}",
        ratio
    );
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_serial_bit_identical_across_runs() {
    let a = price(20_000, OptionKind::Call, Execution::Serial, 2024);
    let b = price(20_000, OptionKind::Call, Execution::Serial, 2024);
    assert_eq!(a.price.to_bits(), b.price.to_bits());
    assert_eq!(a.std_error.to_bits(), b.std_error.to_bits());
}

#[test]
fn test_parallel_reproducible_up_to_summation_order() {
    let a = price(20_000, OptionKind::Put, Execution::Parallel, 2024);
    let b = price(20_000, OptionKind::Put, Execution::Parallel, 2024);
    assert!((a.price - b.price).abs() <= 1e-12 * a.price.abs());
}

#[test]
fn test_serial_and_parallel_agree_statistically() {
    let serial = price(50_000, OptionKind::Call, Execution::Serial, 99);
    let parallel = price(50_000, OptionKind::Call, Execution::Parallel, 99);
    let combined = (serial.std_error.powi(2) + parallel.std_error.powi(2)).sqrt();
    assert!((serial.price - parallel.price).abs() < 4.0 * combined);
}
