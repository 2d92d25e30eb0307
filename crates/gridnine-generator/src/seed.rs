//! Reproducible puzzle seeds.

use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generated puzzle.
///
/// Seeds print as 64 lowercase hex characters and parse back from the same
/// form, so a puzzle can be reproduced from the string shown to the user.
/// The generator's random number generator is derived from the SHA-256
/// digest of the seed bytes.
///
/// # Examples
///
/// ```
/// use gridnine_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///         .parse()
///         .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh random seed from the operating system entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes[..]);
        Self(bytes)
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic generator RNG for this seed.
    pub(crate) fn rng(&self) -> Pcg64Mcg {
        let digest = Sha256::digest(self.0);
        let mut state = [0u8; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength(s.len()));
        }
        let mut bytes = [0u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let hi = hex_value(pair[0])?;
            let lo = hex_value(pair[1])?;
            *byte = hi << 4 | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(byte: u8) -> Result<u8, ParseSeedError> {
    let c = char::from(byte);
    let digit = c
        .to_digit(16)
        .ok_or(ParseSeedError::InvalidCharacter(c))?;
    #[expect(clippy::cast_possible_truncation)]
    Ok(digit as u8)
}

/// Errors produced when parsing a seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string was not exactly 64 characters long.
    #[display("seed must be 64 hex characters, found {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// A character was not a hex digit.
    #[display("invalid hex character {_0:?} in seed")]
    InvalidCharacter(#[error(not(source))] char),
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_display_round_trip() {
        let seed = PuzzleSeed::from_str(HEX).unwrap();
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(seed.to_string().parse::<PuzzleSeed>().unwrap(), seed);
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let bytes = [0xab; 32];
        let seed = PuzzleSeed::from_bytes(bytes);
        assert_eq!(seed.as_bytes(), &bytes);
        assert_eq!(seed.to_string(), "ab".repeat(32));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            PuzzleSeed::from_str("abcd"),
            Err(ParseSeedError::InvalidLength(4))
        );
        assert_eq!(
            PuzzleSeed::from_str(&"0".repeat(65)),
            Err(ParseSeedError::InvalidLength(65))
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let bad = format!("g{}", &HEX[1..]);
        assert_eq!(
            PuzzleSeed::from_str(&bad),
            Err(ParseSeedError::InvalidCharacter('g'))
        );
    }

    #[test]
    fn test_entropy_seeds_differ() {
        // Not a strict guarantee, but a 256-bit collision here means the
        // entropy source is broken.
        assert_ne!(PuzzleSeed::from_entropy(), PuzzleSeed::from_entropy());
    }

    #[test]
    fn test_rng_is_deterministic() {
        let a = PuzzleSeed::from_str(HEX).unwrap().rng().random::<u64>();
        let b = PuzzleSeed::from_str(HEX).unwrap().rng().random::<u64>();
        assert_eq!(a, b);
    }
}
