//! Reed-Solomon encoding and syndrome decoding over small prime fields
//!
//! ```
//! use reed_solomon_gfp::ReedSolomon;
//!
//! let rs = ReedSolomon::default(); // RS(7, 3) over GF(929), α = 3
//! let codeword = rs.encode(&[3, 2, 1]).unwrap();
//!
//! let mut received = codeword.clone();
//! received[2] = 123;
//! received[3] = 456;
//! assert_eq!(rs.decode(&received, &[2, 3]).unwrap(), codeword);
//! assert_eq!(rs.correct(&received).unwrap().codeword, codeword);
//! ```

pub mod config;
pub mod error;
pub mod reed_solomon;

pub use config::CodeConfig;
pub use error::{RsError, RsResult};
pub use reed_solomon::{Correction, ReedSolomon, ReedSolomonBuilder};
