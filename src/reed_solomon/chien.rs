//! Error location by exhaustive root search
//!
//! Codeword index `i` carries exponent `e = n - 1 - i`. It is in error exactly
//! when `Λ(α^-e) = 0`, so evaluating the locator at the `n` candidate points
//! recovers every position inside the codeword.

use super::poly::Polynomial;
use crate::config::CodeConfig;

/// Codeword indices whose evaluation point is a root of `locator`, ascending
pub fn locate_errors(config: &CodeConfig, locator: &Polynomial) -> Vec<usize> {
    let field = config.field();
    let alpha = config.primitive_element();
    let code_len = config.code_len();

    (0..code_len)
        .filter(|&index| {
            let exponent = (code_len - 1 - index) as i64;
            locator.eval(&field, field.pow(alpha, -exponent)) == 0
        })
        .collect()
}
