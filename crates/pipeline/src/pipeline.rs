//! Entry points for each generation kind.

use std::future::Future;
use std::time::{Duration, Instant};

use agentdeck_core::attempt::{AttemptLog, GenerationResult, ResultSource};
use agentdeck_core::error::CoreError;
use agentdeck_core::kind::GenerationKind;
use agentdeck_core::layout::normalize_vertical;
use agentdeck_core::payload::{CodePayload, DesignPayload, ImagePayload, MoviePayload, ResearchPayload};
use agentdeck_core::synth::{self, SynthContext};
use agentdeck_core::types::now;
use agentdeck_core::validation::{CodeInput, DesignInput, ImageInput, MovieInput, ResearchInput};
use agentdeck_providers::chat::{ChatClient, ChatPrompt};
use agentdeck_providers::figma::FigmaClient;
use agentdeck_providers::images::{DalleClient, HuggingFaceClient, ImgGenClient, PollinationsClient};
use agentdeck_providers::imdb::ImdbClient;
use agentdeck_providers::leetcode::LeetCodeClient;
use agentdeck_providers::vision::VisionClient;
use agentdeck_providers::ProviderConfig;

use crate::agents::code::CodeAgent;
use crate::agents::design::DesignAgent;
use crate::agents::image::{ImageAgent, ImageBackends};
use crate::agents::movie::MovieAgent;
use crate::agents::research::{ResearchAgent, NOT_CONFIGURED_MESSAGE};
use crate::compose::compose;
use crate::prompts;

/// All five agents, built once at startup around one shared HTTP client.
pub struct Pipeline {
    code: CodeAgent,
    design: DesignAgent,
    image: ImageAgent,
    research: ResearchAgent,
    movie: MovieAgent,
    /// Chat clients in preference order, for the LLM health probe.
    chat: Vec<ChatClient>,
    /// Fixed seed for reproducible fallbacks; `None` draws from entropy.
    seed: Option<u64>,
    /// Upper bound on all provider work for one generation.
    deadline: Option<Duration>,
}

impl Pipeline {
    pub fn new(config: &ProviderConfig, client: reqwest::Client, seed: Option<u64>) -> Self {
        let timeout = config.timeout;
        let groq = ChatClient::with_client(client.clone(), "groq", &config.groq);
        let openai = ChatClient::with_client(client.clone(), "openai", &config.openai);

        let code = CodeAgent::new(
            LeetCodeClient::with_client(client.clone(), config.leetcode_base_url.clone()),
            vec![groq.clone(), openai.clone()],
            timeout,
        );
        let design = DesignAgent::new(
            FigmaClient::with_client(client.clone(), config.figma_base_url.clone(), config.figma_token.clone()),
            VisionClient::with_client(
                client.clone(),
                config.gemini_base_url.clone(),
                config.gemini_model.clone(),
                config.gemini_api_key.clone(),
            ),
            groq.clone(),
            timeout,
        );
        let image = ImageAgent::new(
            groq.clone(),
            ImageBackends {
                pollinations: PollinationsClient::with_client(client.clone(), config.pollinations_base_url.clone()),
                imggen: ImgGenClient::with_client(client.clone(), config.imggen_base_url.clone()),
                hugging_face: HuggingFaceClient::with_client(
                    client.clone(),
                    config.hugging_face_base_url.clone(),
                    config.hugging_face_api_key.clone(),
                ),
                dalle: DalleClient::with_client(client.clone(), &config.openai),
            },
            timeout,
        );
        let research = ResearchAgent::new(vec![groq.clone(), openai.clone()], timeout);
        let movie = MovieAgent::new(ImdbClient::with_client(client, config.imdb_base_url.clone()), timeout);

        Self {
            code,
            design,
            image,
            research,
            movie,
            chat: vec![groq, openai],
            seed,
            deadline: None,
        }
    }

    /// Bound each generation's provider work by `deadline`. Chains still
    /// running when it passes are dropped and the local fallback is returned.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    fn context(&self) -> SynthContext {
        SynthContext::new(self.seed, now())
    }

    /// Run `work` under the generation deadline. `None` means it expired.
    async fn within_deadline<R>(&self, kind: GenerationKind, work: impl Future<Output = R>) -> Option<R> {
        let Some(deadline) = self.deadline else {
            return Some(work.await);
        };
        match tokio::time::timeout(deadline, work).await {
            Ok(result) => Some(result),
            Err(_) => {
                tracing::warn!(
                    kind = %kind,
                    deadline_ms = deadline.as_millis() as u64,
                    "Generation deadline reached, using fallback"
                );
                None
            }
        }
    }

    pub async fn generate_code(&self, input: &CodeInput) -> GenerationResult<CodePayload> {
        let started = Instant::now();
        let mut log = AttemptLog::new();
        let outcome = self
            .within_deadline(GenerationKind::Code, self.code.run(input, &mut log))
            .await;
        let (source, payload) =
            outcome.unwrap_or_else(|| (ResultSource::Fallback, synth::code::synthesize(input)));
        compose(GenerationKind::Code, source, payload, &log, started, now())
    }

    pub async fn generate_design(&self, input: &DesignInput) -> GenerationResult<DesignPayload> {
        let started = Instant::now();
        let mut log = AttemptLog::new();
        let mut ctx = self.context();
        let outcome = self
            .within_deadline(GenerationKind::Design, self.design.run(input, &mut ctx, &mut log))
            .await;
        let (source, payload) = outcome.unwrap_or_else(|| {
            let mut payload = synth::design::synthesize(input, &mut ctx);
            payload.code = normalize_vertical(payload.code);
            (ResultSource::Fallback, payload)
        });
        compose(GenerationKind::Design, source, payload, &log, started, ctx.now())
    }

    pub async fn generate_image(&self, input: &ImageInput) -> GenerationResult<ImagePayload> {
        let started = Instant::now();
        let mut log = AttemptLog::new();
        let mut ctx = self.context();
        let outcome = self
            .within_deadline(GenerationKind::Image, self.image.run(input, &mut ctx, &mut log))
            .await;
        let (source, payload) =
            outcome.unwrap_or_else(|| (ResultSource::Fallback, synth::image::synthesize(input, &mut ctx)));
        compose(GenerationKind::Image, source, payload, &log, started, ctx.now())
    }

    /// Fails only when no chat model is configured at all.
    pub async fn generate_research(
        &self,
        input: &ResearchInput,
    ) -> Result<GenerationResult<ResearchPayload>, CoreError> {
        let started = Instant::now();
        let mut log = AttemptLog::new();
        let mut ctx = self.context();
        let outcome = self
            .within_deadline(GenerationKind::Research, self.research.run(input, &mut ctx, &mut log))
            .await;
        let (source, payload) = match outcome {
            Some(result) => result?,
            None => (ResultSource::Fallback, synth::research::synthesize(input, &mut ctx)),
        };
        Ok(compose(GenerationKind::Research, source, payload, &log, started, ctx.now()))
    }

    pub async fn generate_movie(&self, input: &MovieInput) -> GenerationResult<MoviePayload> {
        let started = Instant::now();
        let mut log = AttemptLog::new();
        let mut ctx = self.context();
        let outcome = self
            .within_deadline(GenerationKind::Movie, self.movie.run(input, &mut ctx, &mut log))
            .await;
        let (source, payload) =
            outcome.unwrap_or_else(|| (ResultSource::Fallback, synth::movie::synthesize(input, &mut ctx)));
        compose(GenerationKind::Movie, source, payload, &log, started, ctx.now())
    }

    /// Send a one-line prompt to the first configured chat model.
    ///
    /// Returns the provider id and the model's reply.
    pub async fn probe_llm(&self) -> Result<(String, String), CoreError> {
        let client = self
            .chat
            .iter()
            .find(|c| c.is_configured())
            .ok_or_else(|| CoreError::Configuration(NOT_CONFIGURED_MESSAGE.to_string()))?;

        let prompt = ChatPrompt {
            system: prompts::PROBE_SYSTEM,
            user: prompts::PROBE_USER,
            temperature: 0.0,
            max_tokens: prompts::PROBE_MAX_TOKENS,
        };
        match client.complete(&prompt).await {
            Ok(reply) => Ok((client.service().to_string(), reply)),
            Err(err) => Err(CoreError::Internal(format!(
                "{} probe failed: {err}",
                client.service()
            ))),
        }
    }
}
