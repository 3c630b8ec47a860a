//! Reed-Solomon Decoding Tests
//!
//! Tests for syndrome decoding with caller-supplied error positions,
//! blind correction with root search, failure reporting, and batches.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reed_solomon_gfp::{ReedSolomon, ReedSolomonBuilder, RsError};

const CODEWORD: [u32; 7] = [3, 2, 1, 382, 191, 487, 474];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn corrupt(codeword: &[u32], positions: &[usize], deltas: &[u32], prime: u32) -> Vec<u32> {
    let mut received = codeword.to_vec();
    for (&pos, &delta) in positions.iter().zip(deltas) {
        received[pos] = (received[pos] + delta) % prime;
    }
    received
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_clean_codeword_is_returned_unchanged() {
    init_logger();
    let rs = ReedSolomon::default();
    assert_eq!(rs.decode(&CODEWORD, &[]).unwrap(), CODEWORD.to_vec());

    // Positions on a clean word are ignored: there is nothing to correct
    let correction = rs.decode_detailed(&CODEWORD, &[1, 5]).unwrap();
    assert_eq!(correction.codeword, CODEWORD.to_vec());
    assert!(correction.is_clean());
    assert_eq!(correction.syndromes, vec![0, 0, 0, 0]);
}

#[test]
fn test_two_errors_with_known_positions() {
    init_logger();
    let rs = ReedSolomon::default();
    let received = [3, 2, 123, 456, 191, 487, 474];

    let correction = rs.decode_detailed(&received, &[2, 3]).unwrap();
    assert_eq!(correction.codeword, CODEWORD.to_vec());
    assert_eq!(correction.syndromes, vec![732, 637, 762, 925]);
    assert_eq!(correction.locator.coeffs(), &[329, 821, 1]);
    assert_eq!(correction.error_values, vec![0, 0, 122, 74, 0, 0, 0]);
    assert_eq!(correction.positions, vec![2, 3]);
}

#[test]
fn test_every_single_error_position() {
    let rs = ReedSolomon::default();
    for pos in 0..7 {
        for delta in [1u32, 2, 464, 928] {
            let received = corrupt(&CODEWORD, &[pos], &[delta], 929);
            assert_eq!(
                rs.decode(&received, &[pos]).unwrap(),
                CODEWORD.to_vec(),
                "position {} delta {}",
                pos,
                delta
            );
        }
    }
}

#[test]
fn test_every_error_pair() {
    let rs = ReedSolomon::default();
    for a in 0..7 {
        for b in (a + 1)..7 {
            let received = corrupt(&CODEWORD, &[a, b], &[100, 555], 929);
            assert_eq!(rs.decode(&received, &[a, b]).unwrap(), CODEWORD.to_vec());
            assert_eq!(rs.decode(&received, &[b, a]).unwrap(), CODEWORD.to_vec());

            let correction = rs.correct(&received).unwrap();
            assert_eq!(correction.codeword, CODEWORD.to_vec());
            assert_eq!(correction.positions, vec![a, b]);
        }
    }
}

// ============================================================================
// Failure Reporting
// ============================================================================

#[test]
fn test_missing_position_is_not_silently_accepted() {
    let rs = ReedSolomon::default();
    let received = corrupt(&CODEWORD, &[1, 4], &[9, 9], 929);
    let err = rs.decode(&received, &[1]).unwrap_err();
    assert!(err.is_uncorrectable(), "unexpected error {:?}", err);
}

#[test]
fn test_extra_position_makes_key_equation_singular() {
    let rs = ReedSolomon::default();
    let received = corrupt(&CODEWORD, &[4], &[50], 929);
    assert!(matches!(
        rs.decode(&received, &[4, 5]),
        Err(RsError::SingularSystem { .. })
    ));
    assert_eq!(rs.decode(&received, &[4]).unwrap(), CODEWORD.to_vec());
}

#[test]
fn test_too_many_errors_is_reported() {
    let rs = ReedSolomon::default();
    let received = corrupt(&CODEWORD, &[0, 3, 6], &[1, 2, 3], 929);
    assert_eq!(
        rs.decode(&received, &[0, 3, 6]),
        Err(RsError::TooManyErrors {
            count: 3,
            capacity: 2
        })
    );
    // Blind correction never returns a codeword that is not a codeword
    if let Ok(correction) = rs.correct(&received) {
        assert!(rs.is_codeword(&correction.codeword).unwrap());
        assert_ne!(correction.codeword, CODEWORD.to_vec());
    }
}

#[test]
fn test_received_word_validation() {
    let rs = ReedSolomon::default();
    assert_eq!(
        rs.decode(&CODEWORD[..6], &[]),
        Err(RsError::CodewordLength {
            expected: 7,
            actual: 6
        })
    );
    assert_eq!(
        rs.correct(&[3, 2, 1, 382, 191, 487, 1000]),
        Err(RsError::SymbolOutOfRange {
            index: 6,
            value: 1000,
            prime: 929
        })
    );
}

// ============================================================================
// Larger Codes
// ============================================================================

#[test]
fn test_randomized_larger_code() {
    init_logger();
    let rs = ReedSolomonBuilder::new()
        .with_prime(97)
        .with_code_len(20)
        .with_message_len(10)
        .with_primitive_element(5)
        .build()
        .unwrap();
    let t = rs.config().correction_capacity();
    assert_eq!(t, 5);

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let message: Vec<u32> = (0..10).map(|_| rng.random_range(0..97)).collect();
        let codeword = rs.encode(&message).unwrap();

        let count = rng.random_range(0..=t);
        let mut positions: Vec<usize> = Vec::new();
        while positions.len() < count {
            let pos = rng.random_range(0..20);
            if !positions.contains(&pos) {
                positions.push(pos);
            }
        }
        let deltas: Vec<u32> = (0..count).map(|_| rng.random_range(1..97)).collect();
        let received = corrupt(&codeword, &positions, &deltas, 97);

        assert_eq!(rs.decode(&received, &positions).unwrap(), codeword);

        let correction = rs.correct(&received).unwrap();
        assert_eq!(correction.codeword, codeword);
        assert_eq!(correction.error_count(), count);
    }
}

#[test]
fn test_odd_parity_code() {
    let rs = ReedSolomonBuilder::new()
        .with_code_len(8)
        .with_message_len(3)
        .build()
        .unwrap();
    assert_eq!(rs.config().correction_capacity(), 2);

    let codeword = rs.encode(&[7, 8, 9]).unwrap();
    let received = corrupt(&codeword, &[0, 7], &[3, 4], 929);
    assert_eq!(rs.decode(&received, &[0, 7]).unwrap(), codeword);
    assert_eq!(rs.correct(&received).unwrap().codeword, codeword);
}

#[test]
fn test_odd_parity_checks_last_generator_root() {
    let rs = ReedSolomonBuilder::new()
        .with_code_len(8)
        .with_message_len(3)
        .build()
        .unwrap();

    // Vanishes at α..α^4 but not at α^5, so it is not a multiple of g(x)
    let partial = [0, 0, 0, 1, 809, 723, 568, 522];
    assert_eq!(rs.syndromes(&partial).unwrap(), vec![0, 0, 0, 0]);
    assert!(!rs.is_codeword(&partial).unwrap());
    assert_eq!(rs.decode(&partial, &[]), Err(RsError::ResidualSyndromes));
    assert_eq!(rs.correct(&partial), Err(RsError::ResidualSyndromes));

    let codeword = rs.encode(&[7, 8, 9]).unwrap();
    assert!(rs.is_codeword(&codeword).unwrap());
    let received: Vec<u32> = codeword
        .iter()
        .zip(&partial)
        .map(|(&c, &w)| (c + w) % 929)
        .collect();
    let err = rs.correct(&received).unwrap_err();
    assert!(err.is_uncorrectable(), "unexpected error {:?}", err);
    assert!(rs.decode(&received, &[]).unwrap_err().is_uncorrectable());
}

// ============================================================================
// Batches
// ============================================================================

#[test]
fn test_batch_decode_and_correct() {
    let rs = ReedSolomon::default();
    let words: Vec<(Vec<u32>, Vec<usize>)> = (0..7)
        .map(|pos| (corrupt(&CODEWORD, &[pos], &[pos as u32 + 1], 929), vec![pos]))
        .collect();

    let decoded = rs.decode_batch(&words).unwrap();
    assert!(decoded.iter().all(|w| w.as_slice() == CODEWORD));

    let received: Vec<Vec<u32>> = words.iter().map(|(w, _)| w.clone()).collect();
    let corrections = rs.correct_batch(&received).unwrap();
    for (pos, correction) in corrections.iter().enumerate() {
        assert_eq!(correction.positions, vec![pos]);
        assert_eq!(correction.error_values[pos], pos as u32 + 1);
    }
}
