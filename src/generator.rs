// src/generator.rs
use rand::rngs::OsRng;
use rand::Rng;
use thiserror::Error;

use crate::models::GenerationOptions;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+~`|}{[]:;?><,./-=";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("password length must be between 8 and 32, got {0}")]
    InvalidLength(usize),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

// Letters are always in the pool; digits and symbols are opt-in.
fn build_pool(options: &GenerationOptions) -> Vec<u8> {
    let mut pool =
        Vec::with_capacity(LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SYMBOLS.len());
    pool.extend_from_slice(LOWERCASE);
    pool.extend_from_slice(UPPERCASE);
    if options.include_numbers {
        pool.extend_from_slice(DIGITS);
    }
    if options.include_symbols {
        pool.extend_from_slice(SYMBOLS);
    }
    pool
}

/// Generate a password using the operating system's secure random source.
pub fn generate(options: &GenerationOptions) -> Result<String> {
    generate_with(options, &mut OsRng)
}

/// Generate a password from the supplied random source.
///
/// Every position is sampled independently and uniformly from the pool, so a
/// password can come out without any digit or symbol even when those sets are
/// enabled; there is no per-category minimum. Lengths outside [8, 32] are
/// rejected rather than clamped.
pub fn generate_with<R: Rng>(options: &GenerationOptions, rng: &mut R) -> Result<String> {
    if options.length < MIN_LENGTH || options.length > MAX_LENGTH {
        return Err(GeneratorError::InvalidLength(options.length));
    }

    let pool = build_pool(options);
    let password = (0..options.length)
        .map(|_| pool[rng.gen_range(0..pool.len())] as char)
        .collect();

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn options(length: usize, numbers: bool, symbols: bool) -> GenerationOptions {
        GenerationOptions {
            length,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        for length in [0, 7, 33, 100] {
            let err = generate(&options(length, true, true)).unwrap_err();
            assert!(matches!(err, GeneratorError::InvalidLength(l) if l == length));
        }
    }

    #[test]
    fn accepts_boundary_lengths() {
        for length in [MIN_LENGTH, MAX_LENGTH] {
            let password = generate(&options(length, true, true)).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn every_character_comes_from_the_active_pool() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for &(numbers, symbols) in &[(false, false), (true, false), (false, true), (true, true)] {
            let opts = options(24, numbers, symbols);
            let pool = build_pool(&opts);
            for _ in 0..200 {
                let password = generate_with(&opts, &mut rng).unwrap();
                assert_eq!(password.len(), 24);
                assert!(password.bytes().all(|b| pool.contains(&b)));
            }
        }
    }

    #[test]
    fn letters_only_pool_never_yields_digits_or_symbols() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let opts = options(32, false, false);
        for _ in 0..500 {
            let password = generate_with(&opts, &mut rng).unwrap();
            assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn output_varies_across_calls() {
        let opts = options(8, true, true);
        let first = generate(&opts).unwrap();
        let mut all_same = true;
        for _ in 0..999 {
            let password = generate(&opts).unwrap();
            assert_eq!(password.chars().count(), 8);
            if password != first {
                all_same = false;
            }
        }
        assert!(!all_same, "1000 generated passwords were identical");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let opts = options(16, true, true);
        let a = generate_with(&opts, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        let b = generate_with(&opts, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
