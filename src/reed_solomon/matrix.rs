//! Augmented matrices over GF(p) and the key-equation solver
//!
//! The error locator `Λ(x) = 1 + Λ_1 x + ... + Λ_v x^v` satisfies Newton's
//! identities `S_{i+v} + Λ_1 S_{i+v-1} + ... + Λ_v S_i = 0`. For `v` errors this
//! is a `v × v` Hankel system in the syndromes whose solution, read top to
//! bottom, is `[Λ_v, ..., Λ_1]`. Appending the constant term 1 gives the
//! locator highest degree first.

use super::galois::PrimeField;
use super::poly::Polynomial;
use crate::error::{RsError, RsResult};
use log::trace;

/// Row-major `rows × (rows + 1)` system `[A | b]` over GF(p)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentedMatrix {
    rows: usize,
    data: Vec<u32>,
}

impl AugmentedMatrix {
    /// Create a zero system with `rows` equations in `rows` unknowns
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            data: vec![0; rows * (rows + 1)],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.rows + 1
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[row * self.cols() + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        let cols = self.cols();
        self.data[row * cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[u32] {
        let cols = self.cols();
        &self.data[row * cols..(row + 1) * cols]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols();
        for col in 0..cols {
            self.data.swap(a * cols + col, b * cols + col);
        }
    }

    /// `row[target] -= factor * row[source]`, from column `from` onwards
    fn subtract_scaled_row(
        &mut self,
        field: &PrimeField,
        target: usize,
        source: usize,
        factor: u32,
        from: usize,
    ) {
        for col in from..self.cols() {
            let scaled = field.mul(factor, self.get(source, col));
            let value = field.sub(self.get(target, col), scaled);
            self.set(target, col, value);
        }
    }

    /// Solve the system by Gaussian elimination with back substitution.
    ///
    /// A zero pivot is replaced by the first nonzero entry below it in the
    /// same column (row swap). If there is none the system is singular and
    /// `SingularSystem` is returned; nothing is ever divided by zero.
    pub fn solve(mut self, field: &PrimeField) -> RsResult<Vec<u32>> {
        let n = self.rows;

        for col in 0..n {
            let pivot_row = (col..n)
                .find(|&row| self.get(row, col) != 0)
                .ok_or(RsError::SingularSystem { column: col })?;
            if pivot_row != col {
                trace!("Zero pivot in column {}, swapping in row {}", col, pivot_row);
                self.swap_rows(col, pivot_row);
            }

            // Scale pivot row so the pivot is 1
            let pivot_inv = field.inverse(self.get(col, col));
            for c in col..self.cols() {
                let value = field.mul(self.get(col, c), pivot_inv);
                self.set(col, c, value);
            }

            // Eliminate below
            for row in (col + 1)..n {
                let factor = self.get(row, col);
                if factor != 0 {
                    self.subtract_scaled_row(field, row, col, factor, col);
                }
            }
        }

        // Back substitution: clear entries above each pivot
        for col in (1..n).rev() {
            for row in 0..col {
                let factor = self.get(row, col);
                if factor != 0 {
                    self.subtract_scaled_row(field, row, col, factor, col);
                }
            }
        }

        Ok((0..n).map(|row| self.get(row, n)).collect())
    }
}

/// Syndrome system for `error_count` errors: `A[i][j] = S[i + j]`,
/// `b[i] = -S[error_count + i]`
pub fn key_equation_system(
    field: &PrimeField,
    syndromes: &[u32],
    error_count: usize,
) -> AugmentedMatrix {
    debug_assert!(2 * error_count <= syndromes.len());

    let mut system = AugmentedMatrix::new(error_count);
    for i in 0..error_count {
        for j in 0..error_count {
            system.set(i, j, syndromes[i + j]);
        }
        system.set(i, error_count, field.neg(syndromes[error_count + i]));
    }
    system
}

/// Solve for the error locator of degree `error_count`, highest degree first,
/// with constant term 1
pub fn solve_key_equation(
    field: &PrimeField,
    syndromes: &[u32],
    error_count: usize,
) -> RsResult<Polynomial> {
    let mut locator = key_equation_system(field, syndromes, error_count).solve(field)?;
    locator.push(1);
    Ok(Polynomial::new(locator))
}
