//! Reproducible puzzle seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use sha2::{Digest as _, Sha256};

/// An opaque 256-bit seed identifying one generated puzzle.
///
/// A seed fully determines both the solved grid and the carved cells: feeding
/// the same seed back into the generator reproduces the same puzzle. Seeds
/// display as 64 lowercase hex characters and parse back from that form.
///
/// Internally each consumer derives its own random stream from the seed via
/// a domain label, so the solving and carving steps draw from independent
/// sequences.
///
/// # Examples
///
/// ```
/// use hexadoku_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///         .parse()
///         .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed {
    bytes: [u8; 32],
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0_u8; 32];
        rand::rng().fill(&mut bytes[..]);
        Self { bytes }
    }

    /// Derives a deterministic random stream for the given domain label.
    ///
    /// Distinct labels yield statistically independent streams from the same
    /// seed; the same `(seed, label)` pair always yields the same stream.
    #[must_use]
    pub fn stream(&self, label: &str) -> Pcg64Mcg {
        let mut hasher = Sha256::new();
        hasher.update(self.bytes);
        hasher.update(label.as_bytes());
        let digest = hasher.finalize();
        let mut state = [0_u8; 16];
        state.copy_from_slice(&digest[..16]);
        Pcg64Mcg::from_seed(state)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`PuzzleSeed`] from its hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("invalid seed string length {len}, expected 64")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The string contains a non-hex character.
    #[display("invalid seed character {c:?}")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let mut bytes = [0_u8; 32];
        for (i, c) in s.chars().enumerate() {
            let nibble = c.to_digit(16).ok_or(ParseSeedError::InvalidCharacter { c })?;
            #[expect(clippy::cast_possible_truncation)]
            {
                bytes[i / 2] = (bytes[i / 2] << 4) | (nibble as u8);
            }
        }
        Ok(Self { bytes })
    }
}
