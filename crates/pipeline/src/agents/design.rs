//! Design kind: analysis (Figma file or screenshot), then code generation,
//! then vertical-layout normalization of whichever code was produced.

use std::sync::Arc;
use std::time::Duration;

use agentdeck_core::attempt::{AttemptLog, ProviderError, ResultSource};
use agentdeck_core::layout::normalize_vertical;
use agentdeck_core::payload::{DesignAnalysis, DesignAnalysisEnvelope, DesignCode, DesignCodeEnvelope, DesignPayload};
use agentdeck_core::sanitize::{self, parse_repaired};
use agentdeck_core::synth::{self, SynthContext};
use agentdeck_core::validation::DesignInput;
use agentdeck_providers::chat::{ChatClient, ChatPrompt};
use agentdeck_providers::figma::{self, FigmaClient};
use agentdeck_providers::vision::VisionClient;
use async_trait::async_trait;
use rand::seq::IndexedRandom;

use super::chat_json;
use crate::chain::ProviderChain;
use crate::prompts;
use crate::provider::Provider;

/// Input to the code stage: the analysis plus the layout hints drawn for
/// this request.
#[derive(Debug, Clone)]
pub struct CodeBrief {
    pub analysis: DesignAnalysis,
    pub layout: &'static str,
    pub spacing: &'static str,
    pub container: &'static str,
}

pub struct DesignAgent {
    from_url: ProviderChain<DesignInput, DesignAnalysis>,
    from_upload: ProviderChain<DesignInput, DesignAnalysis>,
    code: ProviderChain<CodeBrief, DesignCode>,
}

impl DesignAgent {
    pub fn new(figma: FigmaClient, vision: VisionClient, coder: ChatClient, timeout: Duration) -> Self {
        Self {
            from_url: ProviderChain::new("design.analysis", timeout).with_provider(Arc::new(FigmaAnalyzer(figma))),
            from_upload: ProviderChain::new("design.analysis", timeout)
                .with_provider(Arc::new(VisionAnalyzer(vision)))
                .with_repair(|raw: &str| parse_repaired::<DesignAnalysisEnvelope>(raw).map(|e| e.analysis)),
            code: ProviderChain::new("design.code", timeout)
                .with_provider(Arc::new(ChatCoder(coder)))
                .with_repair(|raw: &str| parse_repaired::<DesignCodeEnvelope>(raw).map(|e| e.code)),
        }
    }

    pub async fn run(
        &self,
        input: &DesignInput,
        ctx: &mut SynthContext,
        log: &mut AttemptLog,
    ) -> (ResultSource, DesignPayload) {
        let (analysis_source, analysis) = match input {
            DesignInput::FigmaUrl { url, .. } => self
                .from_url
                .execute(input, log)
                .await
                .or_fallback(|| synth::design::analysis_for_url(url)),
            DesignInput::Upload { .. } => self
                .from_upload
                .execute(input, log)
                .await
                .or_fallback(|| synth::design::analysis_for_upload(ctx)),
        };

        let brief = CodeBrief {
            layout: pick(&prompts::LAYOUT_HINTS, ctx),
            spacing: pick(&prompts::SPACING_HINTS, ctx),
            container: pick(&prompts::CONTAINER_HINTS, ctx),
            analysis,
        };
        let (code_source, code) = self
            .code
            .execute(&brief, log)
            .await
            .or_fallback(|| synth::design::code_for(&brief.analysis));

        let payload = DesignPayload {
            analysis: brief.analysis,
            code: normalize_vertical(code),
        };
        (analysis_source.then(code_source), payload)
    }
}

fn pick(options: &[&'static str], ctx: &mut SynthContext) -> &'static str {
    options.choose(ctx.rng()).copied().unwrap_or(options[0])
}

struct FigmaAnalyzer(FigmaClient);

#[async_trait]
impl Provider<DesignInput, DesignAnalysis> for FigmaAnalyzer {
    fn id(&self) -> &str {
        "figma"
    }

    async fn attempt(&self, input: &DesignInput) -> Result<DesignAnalysis, ProviderError> {
        let DesignInput::FigmaUrl { file_key, .. } = input else {
            return Err(ProviderError::Configuration("figma analyses links only".into()));
        };
        if !self.0.is_configured() {
            return Err(ProviderError::Configuration("FIGMA_ACCESS_TOKEN not set".into()));
        }
        let file_key = file_key
            .as_deref()
            .ok_or_else(|| ProviderError::parse("link has no Figma file key"))?;

        let file = self.0.get_file(file_key).await?;
        Ok(figma::analyze(&file))
    }
}

struct VisionAnalyzer(VisionClient);

#[async_trait]
impl Provider<DesignInput, DesignAnalysis> for VisionAnalyzer {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn attempt(&self, input: &DesignInput) -> Result<DesignAnalysis, ProviderError> {
        let DesignInput::Upload { mime_type, bytes } = input else {
            return Err(ProviderError::Configuration("gemini analyses uploads only".into()));
        };
        let text = self.0.describe_image(prompts::DESIGN_VISION, mime_type, bytes).await?;
        sanitize::parse_json::<DesignAnalysisEnvelope>(&text)
            .map(|envelope| envelope.analysis)
            .map_err(|reason| ProviderError::parse_with_raw(reason, text))
    }
}

struct ChatCoder(ChatClient);

#[async_trait]
impl Provider<CodeBrief, DesignCode> for ChatCoder {
    fn id(&self) -> &str {
        self.0.service()
    }

    async fn attempt(&self, brief: &CodeBrief) -> Result<DesignCode, ProviderError> {
        let user = prompts::design_code(&brief.analysis, brief.layout, brief.spacing, brief.container);
        let prompt = ChatPrompt {
            system: prompts::DESIGN_CODE_SYSTEM,
            user: &user,
            temperature: prompts::DESIGN_CODE_TEMPERATURE,
            max_tokens: prompts::DESIGN_CODE_MAX_TOKENS,
        };
        let envelope: DesignCodeEnvelope = chat_json(&self.0, &prompt).await?;
        Ok(envelope.code)
    }
}
