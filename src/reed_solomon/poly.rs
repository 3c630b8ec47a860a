//! Polynomials over GF(p)
//!
//! Coefficients are stored highest degree first: `[3, 2, 1]` is `3x^2 + 2x + 1`.
//! The same convention is used for messages, codewords, the generator, the
//! error locator, and the error evaluator.

use super::galois::PrimeField;

/// Owned polynomial with coefficients in GF(p), highest degree first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    coeffs: Vec<u32>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<u32>) -> Self {
        Self { coeffs }
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    /// Monic linear factor `x - root`
    pub fn linear(field: &PrimeField, root: u32) -> Self {
        Self {
            coeffs: vec![1, field.neg(root)],
        }
    }

    #[inline]
    pub fn coeffs(&self) -> &[u32] {
        &self.coeffs
    }

    #[inline]
    pub fn into_coeffs(self) -> Vec<u32> {
        self.coeffs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree by storage length (`len - 1`); leading zeros are not stripped
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    #[inline]
    pub fn leading(&self) -> u32 {
        self.coeffs.first().copied().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Product of two polynomials (coefficient convolution)
    pub fn mul(&self, field: &PrimeField, other: &Polynomial) -> Polynomial {
        if self.is_empty() || other.is_empty() {
            return Polynomial::default();
        }
        let mut product = vec![0u32; self.len() + other.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                product[i + j] = field.add(product[i + j], field.mul(a, b));
            }
        }
        Polynomial::new(product)
    }

    /// Evaluate at `x` using Horner's rule
    pub fn eval(&self, field: &PrimeField, x: u32) -> u32 {
        self.coeffs
            .iter()
            .fold(0, |acc, &c| field.add(field.mul(acc, x), c))
    }

    /// Formal derivative.
    ///
    /// Coefficient `i` of the result is `(degree - i) * coeff[i]` for every
    /// coefficient but the constant term.
    pub fn derivative(&self, field: &PrimeField) -> Polynomial {
        let degree = self.degree();
        let coeffs = self
            .coeffs
            .iter()
            .take(degree)
            .enumerate()
            .map(|(i, &c)| field.mul(field.reduce((degree - i) as i64), c))
            .collect();
        Polynomial::new(coeffs)
    }

    /// Remainder of division by `divisor` using synthetic long division.
    ///
    /// The result always has `divisor.degree()` coefficients. Panics if the
    /// divisor's leading coefficient is zero.
    pub fn rem(&self, field: &PrimeField, divisor: &Polynomial) -> Polynomial {
        let shift = divisor.degree();
        if self.len() <= shift {
            let mut coeffs = vec![0u32; shift - self.len()];
            coeffs.extend_from_slice(&self.coeffs);
            return Polynomial::new(coeffs);
        }

        let lead_inv = field.inverse(divisor.leading());
        let mut work = self.coeffs.clone();
        for i in 0..(work.len() - shift) {
            let coef = field.mul(work[i], lead_inv);
            if coef == 0 {
                continue;
            }
            for (j, &d) in divisor.coeffs.iter().enumerate() {
                work[i + j] = field.sub(work[i + j], field.mul(coef, d));
            }
        }
        Polynomial::new(work.split_off(work.len() - shift))
    }

    /// Keep the `width` lowest-degree coefficients, i.e. reduce mod `x^width`.
    ///
    /// Pads with leading zeros when the polynomial is shorter than `width`.
    pub fn trailing(&self, width: usize) -> Polynomial {
        if self.len() >= width {
            Polynomial::new(self.coeffs[self.len() - width..].to_vec())
        } else {
            let mut coeffs = vec![0u32; width - self.len()];
            coeffs.extend_from_slice(&self.coeffs);
            Polynomial::new(coeffs)
        }
    }

    /// Reverse the coefficient order
    pub fn reversed(&self) -> Polynomial {
        Polynomial::new(self.coeffs.iter().rev().copied().collect())
    }
}

impl From<Vec<u32>> for Polynomial {
    fn from(coeffs: Vec<u32>) -> Self {
        Self::new(coeffs)
    }
}
