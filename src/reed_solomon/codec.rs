//! Reed-Solomon encoder/decoder over GF(p)
//!
//! ## Pipeline
//!
//! ```text
//! encode:  message ─► m(x)·x^r mod g(x) ─► codeword
//!
//! decode:  received + positions
//!            ─► syndromes ─► key equation (Λ) ─► Forney (Ω, Λ') ─► correction
//!
//! correct: received
//!            ─► syndromes ─► key equation, largest nonsingular v ≤ t
//!            ─► root search (positions) ─► Forney ─► correction
//! ```
//!
//! Every decode re-checks the syndromes of its output, so a wrong set of
//! positions surfaces as an error instead of a plausible-looking codeword.

use super::chien::locate_errors;
use super::encoder::{encode_systematic, generator_polynomial};
use super::forney::{apply_correction, error_values};
use super::galois::PrimeField;
use super::matrix::solve_key_equation;
use super::poly::Polynomial;
use super::syndrome::{all_zero, compute_syndromes, parity_check};
use crate::config::CodeConfig;
use crate::error::{RsError, RsResult};
use log::{debug, warn};
use rayon::prelude::*;

/// Outcome of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// Corrected codeword
    pub codeword: Vec<u32>,
    /// Codeword indices that were changed, ascending
    pub positions: Vec<usize>,
    /// Value subtracted at each index (zero outside `positions`)
    pub error_values: Vec<u32>,
    /// Syndromes of the received word
    pub syndromes: Vec<u32>,
    /// Error locator, highest degree first, constant term 1
    pub locator: Polynomial,
}

impl Correction {
    fn unchanged(received: &[u32], syndromes: Vec<u32>) -> Self {
        Self {
            codeword: received.to_vec(),
            positions: Vec::new(),
            error_values: vec![0; received.len()],
            syndromes,
            locator: Polynomial::one(),
        }
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Systematic Reed-Solomon code for one [`CodeConfig`]
#[derive(Debug, Clone)]
pub struct ReedSolomon {
    config: CodeConfig,
    field: PrimeField,
    generator: Polynomial,
}

impl Default for ReedSolomon {
    fn default() -> Self {
        Self::new(CodeConfig::default())
    }
}

impl ReedSolomon {
    pub fn new(config: CodeConfig) -> Self {
        let generator = generator_polynomial(&config);
        debug!(
            "RS({}, {}) over GF({}), α = {}, generator {:?}",
            config.code_len(),
            config.message_len(),
            config.prime(),
            config.primitive_element(),
            generator.coeffs()
        );
        Self {
            field: config.field(),
            config,
            generator,
        }
    }

    #[inline]
    pub fn config(&self) -> &CodeConfig {
        &self.config
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Generator polynomial, highest degree first
    #[inline]
    pub fn generator(&self) -> &Polynomial {
        &self.generator
    }

    /// Message part of a codeword (its top k symbols)
    pub fn message<'a>(&self, codeword: &'a [u32]) -> &'a [u32] {
        &codeword[..self.config.message_len().min(codeword.len())]
    }

    /// Encode exactly k symbols into an n-symbol codeword
    pub fn encode(&self, message: &[u32]) -> RsResult<Vec<u32>> {
        let expected = self.config.message_len();
        if message.len() != expected {
            return Err(RsError::MessageLength {
                expected,
                actual: message.len(),
            });
        }
        self.check_symbols(message)?;

        Ok(encode_systematic(
            &self.field,
            self.config.code_len(),
            &self.generator,
            message,
        ))
    }

    /// Syndromes `S_1..S_2t` of a received word
    pub fn syndromes(&self, received: &[u32]) -> RsResult<Vec<u32>> {
        self.check_received(received)?;
        Ok(compute_syndromes(&self.config, received))
    }

    /// Whether `word` is a codeword of this code, i.e. vanishes at every
    /// root of the generator
    pub fn is_codeword(&self, word: &[u32]) -> RsResult<bool> {
        self.check_received(word)?;
        Ok(all_zero(&parity_check(&self.config, word)))
    }

    /// Correct `received` given the codeword indices that were corrupted
    pub fn decode(&self, received: &[u32], positions: &[usize]) -> RsResult<Vec<u32>> {
        self.decode_detailed(received, positions)
            .map(|correction| correction.codeword)
    }

    /// Like [`decode`](Self::decode), returning the intermediate results too
    pub fn decode_detailed(&self, received: &[u32], positions: &[usize]) -> RsResult<Correction> {
        self.check_received(received)?;
        self.check_positions(positions)?;

        let syndromes = compute_syndromes(&self.config, received);
        debug!("Syndromes: {:?}", syndromes);
        if all_zero(&syndromes) {
            return self.accept_clean(received, syndromes);
        }

        let mut sorted = positions.to_vec();
        sorted.sort_unstable();

        self.forney_correct(received, syndromes, sorted, None)
            .inspect_err(|e| warn!("Decode with positions {:?} failed: {}", positions, e))
    }

    /// Correct up to t errors at unknown positions.
    ///
    /// The error count is the largest `v <= t` whose key-equation system is
    /// nonsingular; the positions are the roots of the resulting locator.
    pub fn correct(&self, received: &[u32]) -> RsResult<Correction> {
        self.check_received(received)?;

        let syndromes = compute_syndromes(&self.config, received);
        debug!("Syndromes: {:?}", syndromes);
        if all_zero(&syndromes) {
            return self.accept_clean(received, syndromes);
        }

        let (error_count, locator) = self.find_locator(&syndromes)?;
        let positions = locate_errors(&self.config, &locator);
        debug!(
            "Locator {:?} of degree {} has roots at {:?}",
            locator.coeffs(),
            error_count,
            positions
        );
        if positions.len() != error_count {
            return Err(RsError::LocatorRootMismatch {
                expected: error_count,
                found: positions.len(),
            });
        }

        self.forney_correct(received, syndromes, positions, Some(locator))
    }

    /// Encode many messages in parallel, preserving order
    pub fn encode_batch<M>(&self, messages: &[M]) -> RsResult<Vec<Vec<u32>>>
    where
        M: AsRef<[u32]> + Sync,
    {
        messages.par_iter().map(|m| self.encode(m.as_ref())).collect()
    }

    /// Decode many `(received, positions)` pairs in parallel, preserving order
    pub fn decode_batch<W, P>(&self, words: &[(W, P)]) -> RsResult<Vec<Vec<u32>>>
    where
        W: AsRef<[u32]> + Sync,
        P: AsRef<[usize]> + Sync,
    {
        words
            .par_iter()
            .map(|(received, positions)| self.decode(received.as_ref(), positions.as_ref()))
            .collect()
    }

    /// Correct many received words at unknown positions in parallel
    pub fn correct_batch<W>(&self, words: &[W]) -> RsResult<Vec<Correction>>
    where
        W: AsRef<[u32]> + Sync,
    {
        words.par_iter().map(|w| self.correct(w.as_ref())).collect()
    }

    /// Key equation, Forney, subtraction, and the residual-syndrome check.
    /// `locator` is solved from `positions.len()` when not supplied.
    fn forney_correct(
        &self,
        received: &[u32],
        syndromes: Vec<u32>,
        positions: Vec<usize>,
        locator: Option<Polynomial>,
    ) -> RsResult<Correction> {
        let locator = match locator {
            Some(locator) => locator,
            None => solve_key_equation(&self.field, &syndromes, positions.len())?,
        };
        debug!("Error locator: {:?}", locator.coeffs());

        let values = error_values(&self.config, &syndromes, &locator, &positions)?;
        let codeword = apply_correction(&self.config, received, &values);

        if !all_zero(&parity_check(&self.config, &codeword)) {
            return Err(RsError::ResidualSyndromes);
        }
        debug!("Corrected {} symbol(s) at {:?}", positions.len(), positions);

        Ok(Correction {
            codeword,
            positions,
            error_values: values,
            syndromes,
            locator,
        })
    }

    /// Fast path for a word whose decoding syndromes are all zero. With odd
    /// `n - k` the remaining generator root can still flag an error that no
    /// pattern of t or fewer errors explains.
    fn accept_clean(&self, received: &[u32], syndromes: Vec<u32>) -> RsResult<Correction> {
        if !all_zero(&parity_check(&self.config, received)) {
            return Err(RsError::ResidualSyndromes);
        }
        debug!("No error detected");
        Ok(Correction::unchanged(received, syndromes))
    }

    fn find_locator(&self, syndromes: &[u32]) -> RsResult<(usize, Polynomial)> {
        let mut outcome = Err(RsError::SingularSystem { column: 0 });
        for error_count in (1..=self.config.correction_capacity()).rev() {
            outcome = solve_key_equation(&self.field, syndromes, error_count)
                .map(|locator| (error_count, locator));
            if outcome.is_ok() {
                break;
            }
        }
        outcome
    }

    fn check_received(&self, received: &[u32]) -> RsResult<()> {
        let expected = self.config.code_len();
        if received.len() != expected {
            return Err(RsError::CodewordLength {
                expected,
                actual: received.len(),
            });
        }
        self.check_symbols(received)
    }

    fn check_symbols(&self, symbols: &[u32]) -> RsResult<()> {
        match symbols
            .iter()
            .position(|&value| !self.field.contains(value))
        {
            Some(index) => Err(RsError::SymbolOutOfRange {
                index,
                value: symbols[index],
                prime: self.field.prime(),
            }),
            None => Ok(()),
        }
    }

    fn check_positions(&self, positions: &[usize]) -> RsResult<()> {
        let capacity = self.config.correction_capacity();
        if positions.len() > capacity {
            return Err(RsError::TooManyErrors {
                count: positions.len(),
                capacity,
            });
        }

        let code_len = self.config.code_len();
        let mut seen = vec![false; code_len];
        for &position in positions {
            if position >= code_len {
                return Err(RsError::PositionOutOfRange { position, code_len });
            }
            if seen[position] {
                return Err(RsError::DuplicatePosition(position));
            }
            seen[position] = true;
        }
        Ok(())
    }
}

/// Builds a [`ReedSolomon`] from individually set parameters.
///
/// Parameters left unset keep the values of [`CodeConfig::default`].
#[derive(Debug, Clone)]
pub struct ReedSolomonBuilder {
    prime: u32,
    code_len: usize,
    message_len: usize,
    primitive_element: u32,
}

impl Default for ReedSolomonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReedSolomonBuilder {
    pub fn new() -> Self {
        let config = CodeConfig::default();
        Self {
            prime: config.prime(),
            code_len: config.code_len(),
            message_len: config.message_len(),
            primitive_element: config.primitive_element(),
        }
    }

    pub fn with_prime(mut self, prime: u32) -> Self {
        self.prime = prime;
        self
    }

    pub fn with_code_len(mut self, code_len: usize) -> Self {
        self.code_len = code_len;
        self
    }

    pub fn with_message_len(mut self, message_len: usize) -> Self {
        self.message_len = message_len;
        self
    }

    pub fn with_primitive_element(mut self, alpha: u32) -> Self {
        self.primitive_element = alpha;
        self
    }

    /// Validate the parameters and build the codec
    pub fn build(self) -> RsResult<ReedSolomon> {
        CodeConfig::new(
            self.prime,
            self.code_len,
            self.message_len,
            self.primitive_element,
        )
        .map(ReedSolomon::new)
    }
}
