//! Movie fallback: curated catalog titles plus generic additions, shuffled.

use rand::seq::SliceRandom;
use rand::Rng;

use super::SynthContext;
use crate::movie_catalog::{self, IMDB_BASE_URL};
use crate::payload::MoviePayload;
use crate::types::Timestamp;
use crate::validation::MovieInput;

/// Smallest list cap drawn for a fallback list.
pub const MIN_LIST_CAP: usize = 25;
/// Extra cap range added on top of [`MIN_LIST_CAP`].
pub const LIST_CAP_SPREAD: usize = 15;

/// Generic titles appended to the curated list for `emotion`.
pub fn generic_titles(emotion: &str) -> [String; 5] {
    [
        format!("New {emotion} Release 2024"),
        format!("Classic {emotion} Film"),
        format!("Award Winning {emotion} Movie"),
        format!("Popular {emotion} Cinema"),
        format!("Blockbuster {emotion} Hit"),
    ]
}

/// Length a returned list is truncated to: `25 + U[0, 15]`.
pub fn list_cap(ctx: &mut SynthContext) -> usize {
    MIN_LIST_CAP + ctx.rng().random_range(0..=LIST_CAP_SPREAD)
}

/// Assemble a payload around an already-chosen title list.
pub fn payload(input: &MovieInput, url: String, movies: Vec<String>, now: Timestamp) -> MoviePayload {
    MoviePayload {
        emotion: input.emotion.clone(),
        language: input.language.clone(),
        url,
        count: movies.len(),
        movies,
        generated_at: now,
    }
}

pub fn synthesize(input: &MovieInput, ctx: &mut SynthContext) -> MoviePayload {
    let mut movies: Vec<String> = movie_catalog::curated_titles(input.genre, input.lang)
        .iter()
        .map(|t| t.to_string())
        .chain(generic_titles(&input.emotion))
        .collect();

    movies.shuffle(ctx.rng());
    let cap = list_cap(ctx);
    movies.truncate(cap);

    let url = movie_catalog::listing_url(IMDB_BASE_URL, input.genre, input.lang);
    payload(input, url, movies, ctx.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie_catalog::{Genre, Language};

    fn input() -> MovieInput {
        MovieInput {
            emotion: "Romance".into(),
            language: "Tamil".into(),
            genre: Genre::Romance,
            lang: Language::Tamil,
        }
    }

    #[test]
    fn fallback_lists_catalog_and_generic_titles() {
        let ctx = &mut SynthContext::seeded(5, chrono::DateTime::UNIX_EPOCH);
        let payload = synthesize(&input(), ctx);

        assert_eq!(payload.count, 10);
        assert_eq!(payload.movies.len(), payload.count);
        assert!(payload.movies.iter().any(|m| m == "OK Kanmani"));
        assert!(payload.movies.iter().any(|m| m == "Classic Romance Film"));
        assert!(payload.url.ends_with("genres=romance&languages=ta"));
        assert_eq!(payload.emotion, "Romance");
    }

    #[test]
    fn same_seed_same_order() {
        let now = chrono::DateTime::UNIX_EPOCH;
        let a = synthesize(&input(), &mut SynthContext::seeded(9, now));
        let b = synthesize(&input(), &mut SynthContext::seeded(9, now));
        assert_eq!(a.movies, b.movies);
    }
}
