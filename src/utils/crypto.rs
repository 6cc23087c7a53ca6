//! Random token utilities

use rand::Rng;

use crate::constants::SHARE_CODE_LENGTH;

/// Generate a random token drawn from `charset`
pub fn generate_token(charset: &[u8], length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..charset.len());
            charset[idx] as char
        })
        .collect()
}

/// Generate a private category share code (uppercase letters and digits)
pub fn generate_share_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    generate_token(CHARSET, SHARE_CODE_LENGTH)
}
