use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::FortuneError;

/// Length of a SHA-256 digest rendered as hex.
pub const SEED_HEX_LEN: usize = 64;

/// A lowercase hex SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Remainder of the digest, read as one big-endian integer, modulo `modulus`.
    pub fn modulo(&self, modulus: u64) -> u64 {
        hex_modulo(&self.0, modulus)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Seed {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() == SEED_HEX_LEN
            && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !valid {
            return Err(FortuneError::InvalidSeed(s.to_string()));
        }
        Ok(Seed(s.to_string()))
    }
}

pub fn digest(message: &str) -> Seed {
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    let hash = hasher.finalize();

    Seed(hex::encode(hash))
}

/// Horner's rule over the hex nibbles; the accumulator stays below `modulus`,
/// so a u128 never overflows.
fn hex_modulo(hex: &str, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");
    let modulus = u128::from(modulus);

    let rem = hex
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0u128, |acc, nibble| (acc * 16 + u128::from(nibble)) % modulus);

    rem as u64
}
