//! Prompt text for the LLM-backed stages.

use agentdeck_core::payload::{DesignAnalysis, Problem};

// ---------------------------------------------------------------------------
// Code
// ---------------------------------------------------------------------------

pub const CODE_SYSTEM: &str =
    "You are an expert competitive programmer. Respond with a single JSON object and nothing else.";
pub const CODE_TEMPERATURE: f32 = 0.3;
pub const CODE_MAX_TOKENS: u32 = 2500;

pub fn code_solution(problem: &Problem) -> String {
    let examples = problem
        .examples
        .iter()
        .enumerate()
        .map(|(i, ex)| format!("Example {}:\nInput: {}\nOutput: {}", i + 1, ex.input, ex.output))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"Solve the following problem in Python.

Title: {title}
Difficulty: {difficulty}

{description}

{examples}

Return JSON in exactly this shape:
{{
  "solution": {{
    "code": "complete Python solution",
    "language": "python",
    "timeComplexity": "O(...)",
    "spaceComplexity": "O(...)",
    "explanation": "step-by-step explanation of the approach"
  }},
  "alternativeSolutions": [
    {{ "code": "alternative Python solution", "approach": "name of the approach", "complexity": "time and space" }}
  ]
}}"#,
        title = problem.title,
        difficulty = problem.difficulty,
        description = problem.description,
        examples = examples,
    )
}

// ---------------------------------------------------------------------------
// Design
// ---------------------------------------------------------------------------

pub const DESIGN_VISION: &str = r#"Analyze this UI/UX design image and provide a detailed analysis. Focus on:

1. Visual components (buttons, cards, forms, navigation, etc.)
2. Layout structure (grid, flexbox, positioning)
3. Color palette (extract main colors)
4. Typography style
5. Overall design pattern/theme

Provide your analysis in JSON format:
{
  "analysis": {
    "components": ["list of UI components identified"],
    "layout": "description of layout structure",
    "colors": ["array of hex color codes"],
    "typography": "description of typography style",
    "theme": "overall design theme/style"
  }
}

Be specific and accurate based on what you see in the image."#;

pub const DESIGN_CODE_SYSTEM: &str = "You are a senior frontend engineer. You write React with Tailwind CSS \
    and always stack page sections vertically in a single column. Respond with a single JSON object.";
pub const DESIGN_CODE_TEMPERATURE: f32 = 0.7;
pub const DESIGN_CODE_MAX_TOKENS: u32 = 3000;

/// Layout, spacing and container classes the code prompt rotates through.
pub const LAYOUT_HINTS: [&str; 3] = ["flex flex-col", "grid grid-cols-1", "block space-y-8"];
pub const SPACING_HINTS: [&str; 3] = ["space-y-6", "space-y-8", "gap-8"];
pub const CONTAINER_HINTS: [&str; 3] = ["max-w-4xl mx-auto", "max-w-5xl mx-auto", "container mx-auto"];

pub fn design_code(analysis: &DesignAnalysis, layout: &str, spacing: &str, container: &str) -> String {
    format!(
        r#"Generate a responsive page from this design analysis.

Components: {components}
Layout: {layout_desc}
Colors: {colors}
Typography: {typography}
Theme: {theme}

Rules:
- Every section is stacked vertically in one column. Never place sections side by side.
- Use `{layout}` for the main wrapper, `{spacing}` between sections and `{container}` for the content container.
- Do not use grid-cols-2 or higher, flex-row, or multi-column CSS grid templates.
- Use the listed colors for accents.

Return JSON in exactly this shape:
{{
  "code": {{
    "react": "a complete React functional component using Tailwind classes",
    "html": "a complete HTML document",
    "css": "the CSS used by the HTML document"
  }}
}}"#,
        components = analysis.components.join(", "),
        layout_desc = analysis.layout,
        colors = analysis.colors.join(", "),
        typography = analysis.typography,
        theme = analysis.theme,
    )
}

// ---------------------------------------------------------------------------
// Image
// ---------------------------------------------------------------------------

pub const IMAGE_SYSTEM: &str =
    "You are an expert prompt engineer who creates detailed, artistic prompts for AI image generation.";
pub const IMAGE_TEMPERATURE: f32 = 0.7;
pub const IMAGE_MAX_TOKENS: u32 = 200;

pub fn image_enhancement(prompt: &str, style: &str) -> String {
    format!(
        r#"Enhance this image prompt for a {style} image:
- Add artistic style details (lighting, composition, color palette)
- Include quality modifiers (high resolution, detailed, professional)
- Keep the core concept intact
- Make it concise but descriptive
- Avoid NSFW content

Original prompt: "{prompt}"

Return only the enhanced prompt, nothing else."#
    )
}

// ---------------------------------------------------------------------------
// Research
// ---------------------------------------------------------------------------

pub const RESEARCH_TEMPERATURE: f32 = 0.7;

pub const SUMMARY_SYSTEM: &str = "You are a research assistant. Provide concise, informative summaries.";
pub const SUMMARY_MAX_TOKENS: u32 = 200;

pub fn research_summary(query: &str) -> String {
    format!(
        "Write a 2-3 sentence executive summary about \"{query}\". Focus on current state and \
         significance. Be specific to this topic."
    )
}

pub const FINDINGS_SYSTEM: &str = "You are a research assistant. Provide specific, actionable findings.";
pub const FINDINGS_MAX_TOKENS: u32 = 300;

pub fn research_findings(query: &str) -> String {
    format!(
        "List 5 specific key findings about \"{query}\". Each finding should be one sentence and \
         specific to this topic. Format as a simple list, one finding per line."
    )
}

pub const REPORT_SYSTEM: &str =
    "You are a professional research analyst. Write detailed, informative reports.";
pub const REPORT_MAX_TOKENS: u32 = 2000;

pub fn research_report(query: &str) -> String {
    format!(
        r#"Write a comprehensive research report about "{query}". Include:

1. Current state and recent developments
2. Key challenges and opportunities
3. Expert perspectives and trends
4. Future outlook and predictions
5. Practical implications

Make it 400-600 words, specific to "{query}", and format with markdown headers."#
    )
}

// ---------------------------------------------------------------------------
// Health probe
// ---------------------------------------------------------------------------

pub const PROBE_SYSTEM: &str = "You are a helpful assistant.";
pub const PROBE_USER: &str = "Say \"Hello, the LLM connection works!\" and nothing else.";
pub const PROBE_MAX_TOKENS: u32 = 50;

#[cfg(test)]
mod tests {
    use agentdeck_core::payload::ProblemExample;

    use super::*;

    #[test]
    fn code_prompt_lists_examples() {
        let problem = Problem {
            title: "Two Sum".into(),
            difficulty: "Easy".into(),
            description: "Find two numbers.".into(),
            examples: vec![ProblemExample {
                input: "nums = [1,2]".into(),
                output: "[0,1]".into(),
                explanation: None,
            }],
        };
        let prompt = code_solution(&problem);
        assert!(prompt.contains("Title: Two Sum"));
        assert!(prompt.contains("Example 1:\nInput: nums = [1,2]\nOutput: [0,1]"));
        assert!(prompt.contains("\"timeComplexity\""));
    }

    #[test]
    fn design_prompt_carries_layout_hints() {
        let analysis = DesignAnalysis {
            components: vec!["Hero".into(), "Footer".into()],
            layout: "stacked".into(),
            colors: vec!["#000000".into()],
            typography: "sans".into(),
            theme: "Landing".into(),
        };
        let prompt = design_code(&analysis, LAYOUT_HINTS[1], SPACING_HINTS[0], CONTAINER_HINTS[2]);
        assert!(prompt.contains("Components: Hero, Footer"));
        assert!(prompt.contains("`grid grid-cols-1`"));
        assert!(prompt.contains("`container mx-auto`"));
    }
}
