//! Prime Field GF(p) Arithmetic Tests
//!
//! Tests for PrimeField operations including modular reduction,
//! multiplication, inverses, and signed powers.

use reed_solomon_gfp::reed_solomon::galois::{is_prime, PrimeField};

const GF929: PrimeField = PrimeField::new(929);

// ============================================================================
// Basic Arithmetic Operations
// ============================================================================

#[test]
fn test_reduce_always_in_range() {
    for x in -5000i64..5000 {
        let r = GF929.reduce(x);
        assert!(r < 929, "reduce({}) = {} out of range", x, r);
        assert_eq!((r as i64 - x).rem_euclid(929), 0);
    }
}

#[test]
fn test_add_sub_are_inverse() {
    for a in (0..929).step_by(7) {
        for b in (0..929).step_by(11) {
            assert_eq!(GF929.sub(GF929.add(a, b), b), a);
        }
    }
}

#[test]
fn test_large_prime_products_do_not_overflow() {
    // Largest prime below 2^32
    let field = PrimeField::new(4_294_967_291);
    let a = 4_294_967_290; // -1
    assert_eq!(field.mul(a, a), 1);
    assert_eq!(field.add(a, a), 4_294_967_289);
    assert_eq!(field.mul(a, field.inverse(a)), 1);
}

// ============================================================================
// Inverses and Powers
// ============================================================================

#[test]
fn test_every_nonzero_element_has_inverse() {
    for a in 1..929 {
        let inv = GF929.inverse(a);
        assert_eq!(GF929.mul(a, inv), 1);
        assert_eq!(GF929.pow(a, -1), inv);
        assert_eq!(GF929.div(1, a), inv);
    }
}

#[test]
fn test_fermat_little_theorem() {
    for a in 1..929 {
        assert_eq!(GF929.pow(a, 928), 1);
    }
}

#[test]
fn test_negative_exponent_matches_shifted_positive() {
    for a in [3u32, 5, 100, 928] {
        for e in 1..20i64 {
            assert_eq!(GF929.pow(a, -e), GF929.pow(a, 928 - e));
        }
    }
}

#[test]
fn test_power_of_zero() {
    assert_eq!(GF929.pow(0, 0), 1);
    assert_eq!(GF929.pow(0, 1), 0);
    assert_eq!(GF929.pow(0, 928), 0);
    assert_eq!(GF929.pow(0, -1), 0);
}

// ============================================================================
// Field Construction Helpers
// ============================================================================

#[test]
fn test_is_prime_small_values() {
    let primes: Vec<u32> = (0..50).filter(|&n| is_prime(n)).collect();
    assert_eq!(
        primes,
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
    );
}

#[test]
fn test_primitive_element_generates_group() {
    let mut seen = vec![false; 929];
    let mut x = 1u32;
    for _ in 0..928 {
        assert!(!seen[x as usize], "3 repeats before covering GF(929)*");
        seen[x as usize] = true;
        x = GF929.mul(x, 3);
    }
    assert!(GF929.is_primitive(3));
    assert!(!GF929.is_primitive(2));
}
