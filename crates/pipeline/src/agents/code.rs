//! Code kind: problem lookup, then an LLM solution.

use std::sync::Arc;
use std::time::Duration;

use agentdeck_core::attempt::{AttemptLog, ProviderError, ResultSource};
use agentdeck_core::payload::{CodePayload, Problem, SolutionBundle};
use agentdeck_core::sanitize::parse_repaired;
use agentdeck_core::synth;
use agentdeck_core::validation::CodeInput;
use agentdeck_providers::chat::{ChatClient, ChatPrompt};
use agentdeck_providers::leetcode::LeetCodeClient;
use async_trait::async_trait;

use super::chat_json;
use crate::chain::ProviderChain;
use crate::prompts;
use crate::provider::Provider;

pub struct CodeAgent {
    lookup: ProviderChain<CodeInput, Problem>,
    solve: ProviderChain<Problem, SolutionBundle>,
}

impl CodeAgent {
    pub fn new(leetcode: LeetCodeClient, solvers: Vec<ChatClient>, timeout: Duration) -> Self {
        let lookup = ProviderChain::new("code.lookup", timeout).with_provider(Arc::new(ProblemLookup(leetcode)));
        let solve = solvers.into_iter().fold(
            ProviderChain::new("code.solution", timeout).with_repair(parse_repaired::<SolutionBundle>),
            |chain, client| chain.with_provider(Arc::new(ChatSolver(client))),
        );
        Self { lookup, solve }
    }

    pub async fn run(&self, input: &CodeInput, log: &mut AttemptLog) -> (ResultSource, CodePayload) {
        let (problem_source, problem) = self
            .lookup
            .execute(input, log)
            .await
            .or_fallback(|| synth::code::fallback_problem(&input.slug));

        let (solution_source, bundle) = self
            .solve
            .execute(&problem, log)
            .await
            .or_fallback(|| synth::code::fallback_solution(&problem, &input.slug));

        let payload = CodePayload {
            problem,
            solution: bundle.solution,
            alternative_solutions: bundle.alternative_solutions,
        };
        (problem_source.then(solution_source), payload)
    }
}

struct ProblemLookup(LeetCodeClient);

#[async_trait]
impl Provider<CodeInput, Problem> for ProblemLookup {
    fn id(&self) -> &str {
        "leetcode"
    }

    async fn attempt(&self, input: &CodeInput) -> Result<Problem, ProviderError> {
        Ok(self.0.get_problem(&input.slug).await?)
    }
}

struct ChatSolver(ChatClient);

#[async_trait]
impl Provider<Problem, SolutionBundle> for ChatSolver {
    fn id(&self) -> &str {
        self.0.service()
    }

    async fn attempt(&self, problem: &Problem) -> Result<SolutionBundle, ProviderError> {
        let user = prompts::code_solution(problem);
        let prompt = ChatPrompt {
            system: prompts::CODE_SYSTEM,
            user: &user,
            temperature: prompts::CODE_TEMPERATURE,
            max_tokens: prompts::CODE_MAX_TOKENS,
        };
        chat_json(&self.0, &prompt).await
    }
}
