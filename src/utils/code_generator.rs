//! Random short code generation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet.
//! Uniqueness against the store is handled by
//! [`crate::application::services::MappingService`].

use rand::Rng;

/// Alphabet short codes are drawn from: `A-Z`, `a-z`, `0-9`.
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default short code length.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest code the `url_map.short_code` column can hold.
pub const MAX_CODE_LENGTH: usize = 10;

/// Shortest code accepted by configuration.
pub const MIN_CODE_LENGTH: usize = 4;

/// Generates a random alphanumeric code of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Returns `true` if `code` could have been produced by [`generate_code`].
///
/// Used to reject obviously foreign path segments before touching the store.
pub fn is_well_formed_code(code: &str) -> bool {
    !code.is_empty() && code.len() <= MAX_CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
