//! Forney's algorithm for error magnitudes
//!
//! With `S(x) = S_1 + S_2 x + ... + S_2t x^(2t-1)` the error evaluator is
//! `Ω(x) = S(x)·Λ(x) mod x^(2t)`. For an error at exponent `e`, with
//! `X_e = α^e`, the magnitude is `-Ω(X_e⁻¹) / Λ'(X_e⁻¹)`. The syndromes start
//! at `α^1`, so no extra `X_e` scale factor appears.

use super::poly::Polynomial;
use crate::config::CodeConfig;
use crate::error::{RsError, RsResult};
use log::trace;

/// `Ω(x)`, highest degree first, exactly `syndromes.len()` coefficients wide
pub fn error_evaluator(config: &CodeConfig, syndromes: &[u32], locator: &Polynomial) -> Polynomial {
    let field = config.field();
    // Reversing [S_1..S_2t] gives S(x) highest degree first
    let syndrome_poly = Polynomial::new(syndromes.to_vec()).reversed();
    syndrome_poly
        .mul(&field, locator)
        .trailing(syndromes.len())
}

/// Error-value vector of length n: nonzero only at `positions` (codeword indices).
///
/// Fails with `VanishingDerivative` when `Λ'` is zero at a claimed position,
/// which means the locator and the positions disagree.
pub fn error_values(
    config: &CodeConfig,
    syndromes: &[u32],
    locator: &Polynomial,
    positions: &[usize],
) -> RsResult<Vec<u32>> {
    let field = config.field();
    let alpha = config.primitive_element();
    let code_len = config.code_len();

    let omega = error_evaluator(config, syndromes, locator);
    let lambda_prime = locator.derivative(&field);

    let mut values = vec![0u32; code_len];
    for &position in positions {
        let exponent = (code_len - 1 - position) as i64;
        let x_inv = field.pow(alpha, -exponent);

        let omega_val = omega.eval(&field, x_inv);
        let lambda_prime_val = lambda_prime.eval(&field, x_inv);

        let magnitude = field
            .checked_div(field.neg(omega_val), lambda_prime_val)
            .ok_or(RsError::VanishingDerivative { position })?;
        trace!(
            "Position {}: Ω = {}, Λ' = {}, magnitude = {}",
            position,
            omega_val,
            lambda_prime_val,
            magnitude
        );
        values[position] = magnitude;
    }
    Ok(values)
}

/// `received[i] - error_values[i]` for every symbol
pub fn apply_correction(config: &CodeConfig, received: &[u32], error_values: &[u32]) -> Vec<u32> {
    let field = config.field();
    received
        .iter()
        .zip(error_values)
        .map(|(&r, &e)| field.sub(r, e))
        .collect()
}
