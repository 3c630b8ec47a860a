//! Code instance configuration

use crate::error::{RsError, RsResult};
use crate::reed_solomon::galois::{is_prime, PrimeField};

/// Parameters of one Reed-Solomon code over GF(p).
///
/// A value of this type is always valid: the only ways to obtain one are
/// [`CodeConfig::new`], which checks every parameter, and
/// [`CodeConfig::default`], the RS(7,3) code over GF(929) with α = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeConfig {
    prime: u32,
    code_len: usize,
    message_len: usize,
    primitive_element: u32,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            prime: 929,
            code_len: 7,
            message_len: 3,
            primitive_element: 3,
        }
    }
}

impl CodeConfig {
    pub fn new(
        prime: u32,
        code_len: usize,
        message_len: usize,
        primitive_element: u32,
    ) -> RsResult<Self> {
        if !is_prime(prime) {
            return Err(RsError::NotPrime(prime));
        }
        if message_len == 0 || message_len >= code_len || code_len - message_len < 2 {
            return Err(RsError::InvalidDimensions {
                code_len,
                message_len,
            });
        }

        // Positions are told apart by α^(n-1-i); n must not exceed the group order
        let limit = (prime - 1) as usize;
        if code_len > limit {
            return Err(RsError::CodeLengthTooLarge {
                code_len,
                limit,
                prime,
            });
        }

        let field = PrimeField::new(prime);
        if primitive_element >= prime || !field.is_primitive(primitive_element) {
            return Err(RsError::NotPrimitive {
                alpha: primitive_element,
                prime,
            });
        }

        Ok(Self {
            prime,
            code_len,
            message_len,
            primitive_element,
        })
    }

    #[inline]
    pub fn prime(&self) -> u32 {
        self.prime
    }

    /// Codeword length n
    #[inline]
    pub fn code_len(&self) -> usize {
        self.code_len
    }

    /// Message length k
    #[inline]
    pub fn message_len(&self) -> usize {
        self.message_len
    }

    /// Primitive element α
    #[inline]
    pub fn primitive_element(&self) -> u32 {
        self.primitive_element
    }

    #[inline]
    pub fn field(&self) -> PrimeField {
        PrimeField::new(self.prime)
    }

    /// Number of parity symbols, n - k (degree of the generator polynomial)
    #[inline]
    pub fn parity_len(&self) -> usize {
        self.code_len - self.message_len
    }

    /// Guaranteed correction radius t = ⌊(n - k) / 2⌋
    #[inline]
    pub fn correction_capacity(&self) -> usize {
        self.parity_len() / 2
    }

    /// Number of syndromes computed per received word, 2t
    #[inline]
    pub fn syndrome_len(&self) -> usize {
        2 * self.correction_capacity()
    }
}
