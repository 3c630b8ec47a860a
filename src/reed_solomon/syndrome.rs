//! Syndrome computation
//!
//! `S_i = r(α^i)` for `i = 1..=2t`, where `r(x)` is the received word read
//! highest degree first. A codeword is divisible by the generator, so all of
//! its syndromes are zero.
//!
//! When `n - k` is odd the generator has one root beyond `α^(2t)`; the decoder
//! only needs the first `2t`, but membership in the code is checked against
//! all `n - k` roots.

use crate::config::CodeConfig;

/// Syndromes `S_1..S_2t` used by the key equation and Forney
pub fn compute_syndromes(config: &CodeConfig, received: &[u32]) -> Vec<u32> {
    evaluate_at_roots(config, received, config.syndrome_len())
}

/// `word(α^i)` for every generator root `i = 1..=n-k`
pub fn parity_check(config: &CodeConfig, word: &[u32]) -> Vec<u32> {
    evaluate_at_roots(config, word, config.parity_len())
}

/// `word(α^i)` for `i = 1..=count`
pub fn evaluate_at_roots(config: &CodeConfig, word: &[u32], count: usize) -> Vec<u32> {
    let field = config.field();
    let alpha = config.primitive_element();
    let top = word.len().saturating_sub(1);

    (1..=count)
        .map(|i| {
            word.iter().enumerate().fold(0u32, |acc, (j, &symbol)| {
                let weight = field.pow(alpha, (i * (top - j)) as i64);
                field.add(acc, field.mul(symbol, weight))
            })
        })
        .collect()
}

#[inline]
pub fn all_zero(syndromes: &[u32]) -> bool {
    syndromes.iter().all(|&s| s == 0)
}
