//! Nonce generation for signed requests.

use rand::Rng;

use crate::error::EdanError;

/// Characters a nonce may contain.
pub const NONCE_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Nonce length used when none is configured.
pub const DEFAULT_NONCE_LENGTH: usize = 15;

/// Draw a nonce of `length` characters from [`NONCE_ALPHABET`] in which no
/// character repeats.
///
/// Draws that collide with an already chosen character are rejected and
/// redrawn, so the result is a uniformly random arrangement of distinct
/// characters. Lengths above the alphabet size cannot be satisfied.
pub fn generate_nonce<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String, EdanError> {
    if length > NONCE_ALPHABET.len() {
        return Err(EdanError::InvalidInput(format!(
            "nonce length {} exceeds the {} available characters",
            length,
            NONCE_ALPHABET.len()
        )));
    }

    let mut seen = [false; 36];
    let mut nonce = String::with_capacity(length);
    while nonce.len() < length {
        let idx = rng.gen_range(0..NONCE_ALPHABET.len());
        if seen[idx] {
            continue;
        }
        seen[idx] = true;
        nonce.push(NONCE_ALPHABET[idx] as char);
    }
    Ok(nonce)
}

/// Source of nonces for the request signer.
pub trait NonceSource: Send + Sync {
    fn nonce(&self, length: usize) -> Result<String, EdanError>;
}

/// Thread-local RNG backed nonces.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn nonce(&self, length: usize) -> Result<String, EdanError> {
        generate_nonce(&mut rand::thread_rng(), length)
    }
}

/// Always returns the same nonce. For reproducible signatures in tests.
#[derive(Debug, Clone)]
pub struct FixedNonce(pub String);

impl NonceSource for FixedNonce {
    fn nonce(&self, _length: usize) -> Result<String, EdanError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_nonce_has_no_repeated_characters() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [1, 8, DEFAULT_NONCE_LENGTH, 30, 36] {
            for _ in 0..50 {
                let nonce = generate_nonce(&mut rng, length).unwrap();
                assert_eq!(nonce.len(), length);
                let unique: HashSet<char> = nonce.chars().collect();
                assert_eq!(unique.len(), length, "repeat in {}", nonce);
            }
        }
    }

    #[test]
    fn test_nonce_alphabet() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let nonce = generate_nonce(&mut rng, DEFAULT_NONCE_LENGTH).unwrap();
            assert!(nonce
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_full_alphabet_nonce_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let nonce = generate_nonce(&mut rng, 36).unwrap();
        let mut chars: Vec<u8> = nonce.into_bytes();
        chars.sort_unstable();
        assert_eq!(&chars[..], &NONCE_ALPHABET[..]);
    }

    #[test]
    fn test_nonce_too_long_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_nonce(&mut rng, 37).unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_empty_nonce() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_nonce(&mut rng, 0).unwrap(), "");
    }
}
