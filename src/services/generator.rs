//! String Generation Engine.
//!
//! Produces one pseudo-random string of an exact length, drawing each
//! character uniformly and with replacement from a supplied alphabet.
//!
//! The default source is `rand::thread_rng()`. It is fast and seeded from the
//! OS, but the output is **not** meant to resist an adversary: do not use it
//! for passwords or tokens that must be unpredictable. Callers that need a
//! CSPRNG can pass one to [`generate_with`].

use rand::Rng;

use crate::types::errors::GeneratorError;

/// Generates a string of `length` characters drawn from `alphabet`.
///
/// Repeats are expected. Characters are Unicode scalar values, so multi-byte
/// members are sampled as single characters.
///
/// # Errors
/// `GeneratorError::InvalidInput` if `length` is 0 or `alphabet` is empty.
///
/// # Examples
/// ```
/// let s = strgen::services::generator::generate(5, "ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
/// assert_eq!(s.chars().count(), 5);
/// assert!(s.chars().all(|c| c.is_ascii_uppercase()));
/// ```
pub fn generate(length: usize, alphabet: &str) -> Result<String, GeneratorError> {
    generate_with(&mut rand::thread_rng(), length, alphabet)
}

/// Same as [`generate`] with a caller-supplied random source.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    alphabet: &str,
) -> Result<String, GeneratorError> {
    if length < 1 {
        return Err(GeneratorError::InvalidInput(
            "length must be at least 1".to_string(),
        ));
    }

    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(GeneratorError::InvalidInput("alphabet is empty".to_string()));
    }

    let value: String = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();
    Ok(value)
}
