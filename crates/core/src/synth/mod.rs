//! Deterministic fallback synthesizers.
//!
//! Each submodule builds a schema-conformant payload for one kind from the
//! validated input alone. The only sources of variation are the random
//! generator and clock carried by [`SynthContext`]; a seeded context makes
//! every synthesizer reproducible.

pub mod code;
pub mod design;
pub mod image;
pub mod movie;
pub mod research;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::types::Timestamp;

/// Random source and clock for one synthesis run.
#[derive(Debug, Clone)]
pub struct SynthContext {
    rng: StdRng,
    now: Timestamp,
}

impl SynthContext {
    /// Reproducible context: the same seed and clock give the same output.
    pub fn seeded(seed: u64, now: Timestamp) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now,
        }
    }

    /// Context seeded from OS entropy.
    pub fn from_entropy(now: Timestamp) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            now,
        }
    }

    /// Seeded when `seed` is set, entropy-backed otherwise.
    pub fn new(seed: Option<u64>, now: Timestamp) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed, now),
            None => Self::from_entropy(now),
        }
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

// ---------------------------------------------------------------------------
// Keyword matching shared by the template selectors
// ---------------------------------------------------------------------------

/// Lowercased alphanumeric words of `text`.
pub(crate) fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// `true` if any keyword appears in `text`.
///
/// Multi-word keywords match as substrings; keywords of three characters or
/// fewer must match a whole word (so `ai` does not match `rain`); longer
/// keywords match a word prefix (`health` matches `healthcare`).
pub(crate) fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    let words = words(&lower);
    keywords.iter().any(|kw| {
        if kw.contains(' ') {
            lower.contains(kw)
        } else if kw.len() <= 3 {
            words.iter().any(|w| w == kw)
        } else {
            words.iter().any(|w| w.starts_with(kw))
        }
    })
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let now = chrono::DateTime::UNIX_EPOCH;
        let mut a = SynthContext::seeded(7, now);
        let mut b = SynthContext::seeded(7, now);
        let xs: Vec<u32> = (0..8).map(|_| a.rng().random_range(0..1000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.rng().random_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn short_keywords_need_whole_words() {
        assert!(mentions_any("The future of AI in schools", &["ai"]));
        assert!(!mentions_any("Rainfall patterns in Kerala", &["ai"]));
    }

    #[test]
    fn long_keywords_match_word_prefixes() {
        assert!(mentions_any("Healthcare access", &["health"]));
        assert!(mentions_any("machine learning at scale", &["machine learning"]));
        assert!(!mentions_any("Cooking pasta", &["health", "climate"]));
    }
}
