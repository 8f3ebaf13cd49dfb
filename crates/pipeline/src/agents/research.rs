//! Research kind: three chat completions (summary, findings, report)
//! assembled with synthesized sources.

use std::sync::Arc;
use std::time::Duration;

use agentdeck_core::attempt::{AttemptLog, ProviderError, ResultSource};
use agentdeck_core::error::CoreError;
use agentdeck_core::payload::ResearchPayload;
use agentdeck_core::synth::{self, research, SynthContext};
use agentdeck_core::validation::ResearchInput;
use agentdeck_providers::chat::{ChatClient, ChatPrompt};
use async_trait::async_trait;

use crate::chain::{ChainOutcome, ProviderChain};
use crate::prompts;
use crate::provider::Provider;

pub const NOT_CONFIGURED_MESSAGE: &str = "AI service not configured. Please check server configuration.";

/// The model-written parts of a research payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchText {
    pub summary: String,
    pub findings: Vec<String>,
    pub report: String,
}

pub struct ResearchAgent {
    chain: ProviderChain<ResearchInput, ResearchText>,
    configured: bool,
}

impl ResearchAgent {
    pub fn new(writers: Vec<ChatClient>, timeout: Duration) -> Self {
        let configured = writers.iter().any(ChatClient::is_configured);
        let chain = writers.into_iter().fold(ProviderChain::new("research", timeout), |chain, client| {
            chain.with_provider(Arc::new(ChatResearcher(client)))
        });
        Self { chain, configured }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Research has no fallback for a server with no LLM credential at all;
    /// that case is reported as a configuration error.
    pub async fn run(
        &self,
        input: &ResearchInput,
        ctx: &mut SynthContext,
        log: &mut AttemptLog,
    ) -> Result<(ResultSource, ResearchPayload), CoreError> {
        if !self.configured {
            return Err(CoreError::Configuration(NOT_CONFIGURED_MESSAGE.to_string()));
        }

        let result = match self.chain.execute(input, log).await {
            ChainOutcome::Success {
                provider_id,
                payload: text,
            } => (ResultSource::Provider(provider_id), assemble(input, text, ctx)),
            ChainOutcome::Exhausted => (ResultSource::Fallback, synth::research::synthesize(input, ctx)),
        };
        Ok(result)
    }
}

/// Combine model text with synthesized sources. An empty findings list
/// is filled with the generic findings.
fn assemble(input: &ResearchInput, text: ResearchText, ctx: &mut SynthContext) -> ResearchPayload {
    let query = input.query.clone();
    let key_findings = if text.findings.is_empty() {
        research::fallback_findings(&query)
    } else {
        text.findings
    };
    ResearchPayload {
        summary: text.summary,
        key_findings,
        sources: research::sources(&query, ctx),
        analysis: research::provider_analysis(ctx),
        report: text.report,
        generated_at: ctx.now(),
        query,
    }
}

struct ChatResearcher(ChatClient);

impl ChatResearcher {
    async fn ask(&self, system: &str, user: &str, max_tokens: u32) -> Result<String, ProviderError> {
        let prompt = ChatPrompt {
            system,
            user,
            temperature: prompts::RESEARCH_TEMPERATURE,
            max_tokens,
        };
        Ok(self.0.complete(&prompt).await?)
    }
}

#[async_trait]
impl Provider<ResearchInput, ResearchText> for ChatResearcher {
    fn id(&self) -> &str {
        self.0.service()
    }

    async fn attempt(&self, input: &ResearchInput) -> Result<ResearchText, ProviderError> {
        let query = &input.query;
        let summary = self
            .ask(prompts::SUMMARY_SYSTEM, &prompts::research_summary(query), prompts::SUMMARY_MAX_TOKENS)
            .await?;
        let findings = self
            .ask(prompts::FINDINGS_SYSTEM, &prompts::research_findings(query), prompts::FINDINGS_MAX_TOKENS)
            .await?;
        let report = self
            .ask(prompts::REPORT_SYSTEM, &prompts::research_report(query), prompts::REPORT_MAX_TOKENS)
            .await?;

        Ok(ResearchText {
            summary,
            findings: research::parse_findings(&findings),
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SynthContext {
        SynthContext::seeded(3, chrono::DateTime::UNIX_EPOCH)
    }

    #[test]
    fn empty_findings_are_filled() {
        let input = ResearchInput {
            query: "solar panels".into(),
        };
        let text = ResearchText {
            summary: "Summary.".into(),
            findings: vec![],
            report: "# Report".into(),
        };
        let payload = assemble(&input, text, &mut ctx());
        assert_eq!(payload.key_findings, research::fallback_findings("solar panels"));
        assert_eq!(payload.analysis.credibility, "High");
        assert_eq!(payload.report, "# Report");
    }

    #[tokio::test]
    async fn no_credentials_is_configuration_error() {
        let agent = ResearchAgent::new(vec![], Duration::from_secs(1));
        let input = ResearchInput {
            query: "solar panels".into(),
        };
        let err = agent
            .run(&input, &mut ctx(), &mut AttemptLog::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Configuration(msg) if msg == NOT_CONFIGURED_MESSAGE));
    }
}
