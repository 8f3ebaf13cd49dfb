//! Movie kind: IMDb listing, falling back to the curated catalog.

use std::sync::Arc;
use std::time::Duration;

use agentdeck_core::attempt::{AttemptLog, ProviderError, ResultSource};
use agentdeck_core::payload::MoviePayload;
use agentdeck_core::synth::{self, SynthContext};
use agentdeck_core::validation::MovieInput;
use agentdeck_providers::imdb::{ImdbClient, Listing};
use async_trait::async_trait;

use crate::chain::{ChainOutcome, ProviderChain};
use crate::provider::Provider;

pub struct MovieAgent {
    listing: ProviderChain<MovieInput, Listing>,
}

impl MovieAgent {
    pub fn new(imdb: ImdbClient, timeout: Duration) -> Self {
        Self {
            listing: ProviderChain::new("movie.listing", timeout).with_provider(Arc::new(ListingScraper(imdb))),
        }
    }

    pub async fn run(
        &self,
        input: &MovieInput,
        ctx: &mut SynthContext,
        log: &mut AttemptLog,
    ) -> (ResultSource, MoviePayload) {
        match self.listing.execute(input, log).await {
            ChainOutcome::Success {
                provider_id,
                payload: listing,
            } => {
                let mut movies = listing.titles;
                movies.truncate(synth::movie::list_cap(ctx));
                let payload = synth::movie::payload(input, listing.url, movies, ctx.now());
                (ResultSource::Provider(provider_id), payload)
            }
            ChainOutcome::Exhausted => (ResultSource::Fallback, synth::movie::synthesize(input, ctx)),
        }
    }
}

struct ListingScraper(ImdbClient);

#[async_trait]
impl Provider<MovieInput, Listing> for ListingScraper {
    fn id(&self) -> &str {
        "imdb"
    }

    async fn attempt(&self, input: &MovieInput) -> Result<Listing, ProviderError> {
        Ok(self.0.get_listing(input.genre, input.lang).await?)
    }
}
