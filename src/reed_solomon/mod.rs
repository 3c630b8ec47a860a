//! Reed-Solomon Error Correction Module
//!
//! Systematic Reed-Solomon codes over a prime field GF(p). Encoding divides by
//! the generator polynomial; decoding computes syndromes, solves the key
//! equation for the error locator by Gaussian elimination, and applies Forney's
//! formula for the error magnitudes. Error positions are either supplied by the
//! caller or found by a root search over the codeword positions.

pub mod chien;
pub mod codec;
pub mod encoder;
pub mod forney;
pub mod galois;
pub mod matrix;
pub mod poly;
pub mod syndrome;

pub use codec::*;
pub use galois::PrimeField;
pub use poly::Polynomial;
