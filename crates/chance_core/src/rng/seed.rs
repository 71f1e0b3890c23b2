//! Seed scrambling.
//!
//! Turns arbitrary seed material (integers, strings, bytes) into the 64-bit
//! value from which a bit source derives its key. The engine depends only on
//! determinism here: the same material always yields the same seed on every
//! platform. Integers are finalised with the SplitMix64 mixer; text and byte
//! strings are folded with 64-bit FNV-1a first.

use std::sync::atomic::{AtomicU64, Ordering};

const SPLITMIX_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MUL_1: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MUL_2: u64 = 0x94D0_49BB_1331_11EB;

const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// Distinguishes successive auto-generated seeds within one process.
static AUTO_SEED_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// SplitMix64 finaliser.
///
/// # Examples
/// ```
/// use chance_core::rng::scramble_u64;
///
/// assert_eq!(scramble_u64(0), scramble_u64(0));
/// assert_ne!(scramble_u64(0), scramble_u64(1));
/// ```
#[inline]
pub fn scramble_u64(value: u64) -> u64 {
    let mut z = value.wrapping_add(SPLITMIX_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX_MUL_1);
    z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX_MUL_2);
    z ^ (z >> 31)
}

/// Scrambles a byte string.
pub fn scramble_bytes(bytes: &[u8]) -> u64 {
    let folded = bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
    });
    scramble_u64(folded)
}

/// Scrambles UTF-8 text.
#[inline]
pub fn scramble_str(text: &str) -> u64 {
    scramble_bytes(text.as_bytes())
}

/// Returns a fresh seed that differs from every other auto seed produced by
/// this process.
pub fn auto_seed() -> u64 {
    let sequence = AUTO_SEED_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    rand::random::<u64>() ^ scramble_u64(sequence)
}

/// Seed material accepted by [`crate::rng::Chance::from_material`].
pub trait Scramble {
    /// Folds the material into a 64-bit seed.
    fn scramble(&self) -> u64;
}

macro_rules! impl_scramble_int {
    ($($t:ty),*) => {
        $(
            impl Scramble for $t {
                #[inline]
                fn scramble(&self) -> u64 {
                    scramble_u64(*self as u64)
                }
            }
        )*
    };
}

impl_scramble_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Scramble for u128 {
    fn scramble(&self) -> u64 {
        scramble_u64(scramble_u64(*self as u64) ^ (*self >> 64) as u64)
    }
}

impl Scramble for i128 {
    fn scramble(&self) -> u64 {
        (*self as u128).scramble()
    }
}

impl Scramble for str {
    #[inline]
    fn scramble(&self) -> u64 {
        scramble_str(self)
    }
}

impl Scramble for String {
    #[inline]
    fn scramble(&self) -> u64 {
        scramble_str(self)
    }
}

impl Scramble for [u8] {
    #[inline]
    fn scramble(&self) -> u64 {
        scramble_bytes(self)
    }
}

/// Where a generator's seed comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeedSource {
    /// A numeric seed.
    Numeric(u64),
    /// Text hashed into a seed.
    Text(String),
    /// A unique seed generated at construction time.
    #[default]
    Auto,
}

impl SeedSource {
    /// Resolves the source to the 64-bit value handed to the bit source.
    ///
    /// Numeric seeds pass through unchanged (the bit source scrambles them
    /// when deriving its key), text is scrambled here, and `Auto` draws a
    /// fresh value on every call.
    pub fn resolve(&self) -> u64 {
        match self {
            SeedSource::Numeric(seed) => *seed,
            SeedSource::Text(text) => scramble_str(text),
            SeedSource::Auto => auto_seed(),
        }
    }

    /// Short label for log events.
    pub fn kind(&self) -> &'static str {
        match self {
            SeedSource::Numeric(_) => "numeric",
            SeedSource::Text(_) => "text",
            SeedSource::Auto => "auto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitmix_reference_value() {
        // First output of SplitMix64 seeded with 0.
        assert_eq!(scramble_u64(0), 0xE220_A839_7B1D_CDAF);
    }

    #[test]
    fn test_text_scrambling_is_deterministic() {
        assert_eq!(scramble_str("monte carlo"), scramble_str("monte carlo"));
        assert_ne!(scramble_str("monte carlo"), scramble_str("Monte carlo"));
        assert_eq!("abc".scramble(), String::from("abc").scramble());
        assert_eq!(b"abc"[..].scramble(), "abc".scramble());
    }

    #[test]
    fn test_integer_widths_agree_on_small_values() {
        assert_eq!(7u8.scramble(), 7u64.scramble());
        assert_eq!(7i32.scramble(), 7u64.scramble());
        assert_eq!(7u128.scramble(), scramble_u64(scramble_u64(7)));
    }

    #[test]
    fn test_auto_seeds_are_unique() {
        let seeds: std::collections::HashSet<u64> = (0..1000).map(|_| auto_seed()).collect();
        assert_eq!(seeds.len(), 1000);
    }

    #[test]
    fn test_seed_source_resolution() {
        assert_eq!(SeedSource::Numeric(42).resolve(), 42);
        assert_eq!(SeedSource::Text("x".into()).resolve(), scramble_str("x"));
        assert_eq!(SeedSource::default(), SeedSource::Auto);
        assert_eq!(SeedSource::Auto.kind(), "auto");
    }
}
