//! Error types for Reed-Solomon encoding and decoding

use thiserror::Error;

/// Result type for Reed-Solomon operations
pub type RsResult<T> = Result<T, RsError>;

/// Errors that can occur while configuring, encoding, or decoding a code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Field modulus is not a prime number
    #[error("Modulus {0} is not prime")]
    NotPrime(u32),

    /// Message length must be nonzero and leave at least two parity symbols
    #[error("Invalid code dimensions: n={code_len}, k={message_len}")]
    InvalidDimensions { code_len: usize, message_len: usize },

    /// Codeword longer than the multiplicative group of the field
    #[error("Code length {code_len} exceeds the {limit} distinct evaluation points of GF({prime})")]
    CodeLengthTooLarge {
        code_len: usize,
        limit: usize,
        prime: u32,
    },

    /// Configured generator does not span the multiplicative group
    #[error("{alpha} is not a primitive element of GF({prime})")]
    NotPrimitive { alpha: u32, prime: u32 },

    /// Message does not have exactly k symbols
    #[error("Message has {actual} symbols, expected {expected}")]
    MessageLength { expected: usize, actual: usize },

    /// Received word does not have exactly n symbols
    #[error("Received word has {actual} symbols, expected {expected}")]
    CodewordLength { expected: usize, actual: usize },

    /// Symbol is not a reduced field element
    #[error("Symbol {value} at index {index} is not an element of GF({prime})")]
    SymbolOutOfRange { index: usize, value: u32, prime: u32 },

    /// More error positions than the code can correct
    #[error("{count} errors exceed the correction capability t={capacity}")]
    TooManyErrors { count: usize, capacity: usize },

    /// Error position does not index into the codeword
    #[error("Error position {position} is outside a codeword of length {code_len}")]
    PositionOutOfRange { position: usize, code_len: usize },

    /// Same error position supplied twice
    #[error("Error position {0} supplied more than once")]
    DuplicatePosition(usize),

    /// Key equation has no unique solution
    #[error("Key equation is singular: no nonzero pivot in column {column}")]
    SingularSystem { column: usize },

    /// Forney denominator is zero at a claimed error position
    #[error("Formal derivative of the error locator vanishes at position {position}")]
    VanishingDerivative { position: usize },

    /// Corrected word is still not a codeword
    #[error("Corrected word still has nonzero syndromes")]
    ResidualSyndromes,

    /// Locator root count disagrees with the number of errors it was solved for
    #[error("Error locator has {found} roots inside the codeword, expected {expected}")]
    LocatorRootMismatch { expected: usize, found: usize },
}

impl RsError {
    /// Whether this error describes a received word the code could not repair,
    /// as opposed to a configuration or caller contract violation
    pub fn is_uncorrectable(&self) -> bool {
        matches!(
            self,
            RsError::SingularSystem { .. }
                | RsError::VanishingDerivative { .. }
                | RsError::ResidualSyndromes
                | RsError::LocatorRootMismatch { .. }
        )
    }
}
