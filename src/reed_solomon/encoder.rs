//! Systematic Reed-Solomon encoding
//!
//! The generator polynomial is `g(x) = (x - α)(x - α^2)...(x - α^r)` with
//! `r = n - k`. A message occupies the top `k` coefficients of the codeword;
//! the low `r` coefficients are the negated remainder of `m(x)·x^r` divided by
//! `g(x)`, which makes every codeword a multiple of `g(x)`.

use super::galois::PrimeField;
use super::poly::Polynomial;
use crate::config::CodeConfig;
use log::trace;

/// Build the generator polynomial for `config`, one linear factor at a time
pub fn generator_polynomial(config: &CodeConfig) -> Polynomial {
    let field = config.field();
    let alpha = config.primitive_element();

    (1..=config.parity_len()).fold(Polynomial::one(), |g, i| {
        let root = field.pow(alpha, i as i64);
        g.mul(&field, &Polynomial::linear(&field, root))
    })
}

/// Encode `message` (exactly `k` reduced symbols) against `generator`.
///
/// Length and range are the caller's contract; [`ReedSolomon::encode`]
/// checks them before calling in.
///
/// [`ReedSolomon::encode`]: super::codec::ReedSolomon::encode
pub fn encode_systematic(
    field: &PrimeField,
    code_len: usize,
    generator: &Polynomial,
    message: &[u32],
) -> Vec<u32> {
    debug_assert_eq!(message.len() + generator.degree(), code_len);

    let mut codeword = vec![0u32; code_len];
    codeword[..message.len()].copy_from_slice(message);

    let remainder = Polynomial::new(codeword.clone()).rem(field, generator);
    trace!("Parity remainder: {:?}", remainder.coeffs());

    let parity_start = code_len - remainder.len();
    for (slot, &r) in codeword[parity_start..].iter_mut().zip(remainder.coeffs()) {
        *slot = field.sub(*slot, r);
    }
    codeword
}
