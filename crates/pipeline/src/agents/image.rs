//! Image kind: prompt enhancement, then the image generation chain.

use std::sync::Arc;
use std::time::Duration;

use agentdeck_core::attempt::{AttemptLog, ProviderError, ResultSource};
use agentdeck_core::payload::{GeneratedImage, ImagePayload};
use agentdeck_core::synth::{self, SynthContext};
use agentdeck_core::validation::ImageInput;
use agentdeck_providers::chat::{ChatClient, ChatPrompt};
use agentdeck_providers::images::{DalleClient, HuggingFaceClient, ImgGenClient, PollinationsClient};
use async_trait::async_trait;
use rand::Rng;

use crate::chain::ProviderChain;
use crate::prompts;
use crate::provider::Provider;

/// Upper bound (exclusive) for the Pollinations seed.
const MAX_IMAGE_SEED: u32 = 1_000_000;

/// Input to the generation stage.
#[derive(Debug, Clone)]
pub struct RenderTask {
    pub prompt: String,
    pub seed: u32,
}

/// The generation clients, in the order they are tried.
pub struct ImageBackends {
    pub pollinations: PollinationsClient,
    pub imggen: ImgGenClient,
    pub hugging_face: HuggingFaceClient,
    pub dalle: DalleClient,
}

pub struct ImageAgent {
    enhance: ProviderChain<ImageInput, String>,
    render: ProviderChain<RenderTask, GeneratedImage>,
}

impl ImageAgent {
    pub fn new(enhancer: ChatClient, backends: ImageBackends, timeout: Duration) -> Self {
        Self {
            enhance: ProviderChain::new("image.enhance", timeout).with_provider(Arc::new(PromptEnhancer(enhancer))),
            render: ProviderChain::new("image.generate", timeout)
                .with_provider(Arc::new(Pollinations(backends.pollinations)))
                .with_provider(Arc::new(ImgGen(backends.imggen)))
                .with_provider(Arc::new(HuggingFace(backends.hugging_face)))
                .with_provider(Arc::new(Dalle(backends.dalle))),
        }
    }

    pub async fn run(
        &self,
        input: &ImageInput,
        ctx: &mut SynthContext,
        log: &mut AttemptLog,
    ) -> (ResultSource, ImagePayload) {
        let (enhance_source, enhanced) = self
            .enhance
            .execute(input, log)
            .await
            .or_fallback(|| synth::image::enhance_prompt(&input.prompt, &input.style));

        let task = RenderTask {
            seed: ctx.rng().random_range(0..MAX_IMAGE_SEED),
            prompt: enhanced,
        };
        let (render_source, image) = self
            .render
            .execute(&task, log)
            .await
            .or_fallback(|| synth::image::placeholder_image(&task.prompt, ctx));

        let payload = synth::image::compose(input, task.prompt, image, ctx.now());
        (enhance_source.then(render_source), payload)
    }
}

struct PromptEnhancer(ChatClient);

#[async_trait]
impl Provider<ImageInput, String> for PromptEnhancer {
    fn id(&self) -> &str {
        self.0.service()
    }

    async fn attempt(&self, input: &ImageInput) -> Result<String, ProviderError> {
        let user = prompts::image_enhancement(&input.prompt, &input.style);
        let prompt = ChatPrompt {
            system: prompts::IMAGE_SYSTEM,
            user: &user,
            temperature: prompts::IMAGE_TEMPERATURE,
            max_tokens: prompts::IMAGE_MAX_TOKENS,
        };
        let text = self.0.complete(&prompt).await?;
        let enhanced = text.trim().trim_matches('"').trim();
        if enhanced.is_empty() {
            return Err(ProviderError::parse("empty enhanced prompt"));
        }
        Ok(enhanced.to_string())
    }
}

struct Pollinations(PollinationsClient);

#[async_trait]
impl Provider<RenderTask, GeneratedImage> for Pollinations {
    fn id(&self) -> &str {
        "pollinations"
    }

    async fn attempt(&self, task: &RenderTask) -> Result<GeneratedImage, ProviderError> {
        Ok(self.0.generate(&task.prompt, task.seed).await?)
    }
}

struct ImgGen(ImgGenClient);

#[async_trait]
impl Provider<RenderTask, GeneratedImage> for ImgGen {
    fn id(&self) -> &str {
        "imggen"
    }

    async fn attempt(&self, task: &RenderTask) -> Result<GeneratedImage, ProviderError> {
        Ok(self.0.generate(&task.prompt).await?)
    }
}

struct HuggingFace(HuggingFaceClient);

#[async_trait]
impl Provider<RenderTask, GeneratedImage> for HuggingFace {
    fn id(&self) -> &str {
        "huggingface"
    }

    async fn attempt(&self, task: &RenderTask) -> Result<GeneratedImage, ProviderError> {
        Ok(self.0.generate(&task.prompt).await?)
    }
}

struct Dalle(DalleClient);

#[async_trait]
impl Provider<RenderTask, GeneratedImage> for Dalle {
    fn id(&self) -> &str {
        "dalle"
    }

    async fn attempt(&self, task: &RenderTask) -> Result<GeneratedImage, ProviderError> {
        Ok(self.0.generate(&task.prompt).await?)
    }
}
