//! Image fallback: a local prompt enhancer and a procedural SVG renderer.
//!
//! The SVG is 1024×1024, self-contained, and returned as a base64 data URL.
//! Colours, motif and density are chosen from keywords in the prompt.

use std::fmt::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::Rng;

use super::{mentions_any, words, SynthContext};
use crate::payload::{GeneratedImage, ImageMetadata, ImagePayload};
use crate::types::Timestamp;
use crate::validation::ImageInput;

pub const IMAGE_SIZE: u32 = 1024;
pub const IMAGE_DIMENSIONS: &str = "1024x1024";
pub const DEFAULT_STEPS: u32 = 30;
pub const DEFAULT_GUIDANCE: f64 = 7.5;
/// `metadata.model` for the procedural SVG path.
pub const PLACEHOLDER_MODEL: &str = "Placeholder Generator";

/// Number of prompt words rendered as text art.
const TITLE_WORDS: usize = 6;

// ---------------------------------------------------------------------------
// Keyword analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

const PALETTES: &[(&[&str], Palette)] = &[
    (&["sunset", "orange", "warm", "autumn"], Palette { primary: "#ff7e5f", secondary: "#feb47b", accent: "#ff6b6b" }),
    (&["ocean", "blue", "water", "sea"], Palette { primary: "#667eea", secondary: "#764ba2", accent: "#4facfe" }),
    (&["forest", "green", "nature", "jungle"], Palette { primary: "#11998e", secondary: "#38ef7d", accent: "#7ed321" }),
    (&["fire", "red", "passion", "lava"], Palette { primary: "#ff416c", secondary: "#ff4b2b", accent: "#ff6b6b" }),
    (&["purple", "magic", "mystical", "dream"], Palette { primary: "#667eea", secondary: "#764ba2", accent: "#a8edea" }),
];

const DEFAULT_PALETTE: Palette = Palette {
    primary: "#667eea",
    secondary: "#764ba2",
    accent: "#f093fb",
};

pub fn palette_for(prompt: &str) -> Palette {
    PALETTES
        .iter()
        .find(|(keywords, _)| mentions_any(prompt, keywords))
        .map_or(DEFAULT_PALETTE, |(_, p)| *p)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Space,
    Floral,
    Geometric,
    Landscape,
    Urban,
    Abstract,
}

pub fn theme_for(prompt: &str) -> Theme {
    if mentions_any(prompt, &["space", "star", "galaxy", "cosmic", "planet", "nebula"]) {
        Theme::Space
    } else if mentions_any(prompt, &["flower", "garden", "botanical", "floral", "bloom"]) {
        Theme::Floral
    } else if mentions_any(prompt, &["geometric", "pattern", "abstract", "shape"]) {
        Theme::Geometric
    } else if mentions_any(prompt, &["mountain", "landscape", "scenery", "valley", "sunset"]) {
        Theme::Landscape
    } else if mentions_any(prompt, &["city", "urban", "building", "skyline", "street"]) {
        Theme::Urban
    } else {
        Theme::Abstract
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Calm,
    Energetic,
    Balanced,
}

impl Mood {
    /// Shape count multiplier.
    fn density(self) -> f64 {
        match self {
            Mood::Calm => 0.6,
            Mood::Energetic => 1.5,
            Mood::Balanced => 1.0,
        }
    }

    fn opacity(self) -> f64 {
        match self {
            Mood::Calm => 0.35,
            Mood::Energetic => 0.8,
            Mood::Balanced => 0.55,
        }
    }
}

pub fn mood_for(prompt: &str) -> Mood {
    if mentions_any(prompt, &["calm", "peaceful", "serene", "quiet", "gentle", "soft"]) {
        Mood::Calm
    } else if mentions_any(prompt, &["energetic", "vibrant", "dynamic", "explosive", "bold", "action"]) {
        Mood::Energetic
    } else {
        Mood::Balanced
    }
}

// ---------------------------------------------------------------------------
// Prompt enhancement
// ---------------------------------------------------------------------------

/// Style-specific descriptors appended by the local enhancer.
pub fn style_modifiers(style: &str) -> &'static str {
    match style.to_ascii_lowercase().as_str() {
        "realistic" => "photorealistic, natural lighting, sharp focus, high dynamic range",
        "artistic" => "painterly, expressive brushwork, rich layered colour",
        "anime" => "anime style, clean line art, vibrant cel shading",
        "digital-art" => "digital art, concept art, intricate detail, cinematic lighting",
        "vintage" => "vintage film look, muted tones, soft grain, retro composition",
        "minimalist" => "minimalist composition, clean shapes, generous negative space",
        _ => "balanced composition, considered colour palette",
    }
}

/// Enhance a prompt without a model: keep the subject, add style and
/// quality descriptors.
pub fn enhance_prompt(prompt: &str, style: &str) -> String {
    let prompt = prompt.trim().trim_end_matches(['.', ',']);
    format!(
        "{prompt}, {}, highly detailed, professional quality, high resolution",
        style_modifiers(style)
    )
}

// ---------------------------------------------------------------------------
// SVG rendering
// ---------------------------------------------------------------------------

/// Render the procedural artwork for `prompt`.
pub fn render_svg(prompt: &str, ctx: &mut SynthContext) -> String {
    let palette = palette_for(prompt);
    let theme = theme_for(prompt);
    let mood = mood_for(prompt);
    let size = IMAGE_SIZE;

    let mut svg = String::with_capacity(8 * 1024);
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
<defs>
<linearGradient id="main" x1="0%" y1="0%" x2="100%" y2="100%">
<stop offset="0%" stop-color="{p}"/><stop offset="50%" stop-color="{s}"/><stop offset="100%" stop-color="{a}"/>
</linearGradient>
<radialGradient id="centerGlow" cx="50%" cy="50%" r="50%">
<stop offset="0%" stop-color="#ffffff" stop-opacity="0.35"/><stop offset="100%" stop-color="#ffffff" stop-opacity="0"/>
</radialGradient>
<filter id="glow"><feGaussianBlur stdDeviation="4" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>
<path id="arc" d="M 212 560 A 300 300 0 0 1 812 560"/>
</defs>
<rect width="100%" height="100%" fill="url(#main)"/>
<circle cx="512" cy="512" r="420" fill="url(#centerGlow)"/>
"##,
        p = palette.primary,
        s = palette.secondary,
        a = palette.accent,
    );

    match theme {
        Theme::Space => draw_space(&mut svg, ctx, mood, palette),
        Theme::Floral => draw_floral(&mut svg, ctx, mood, palette),
        Theme::Geometric => draw_geometric(&mut svg, ctx, mood, palette),
        Theme::Landscape => draw_landscape(&mut svg, ctx, mood, palette),
        Theme::Urban => draw_urban(&mut svg, ctx, mood, palette),
        Theme::Abstract => draw_abstract(&mut svg, ctx, mood, palette),
    }

    let title: Vec<String> = words(prompt).into_iter().take(TITLE_WORDS).collect();
    let _ = write!(
        svg,
        r##"<text font-family="Georgia, serif" font-size="44" fill="#ffffff" filter="url(#glow)"><textPath href="#arc" startOffset="50%" text-anchor="middle">{}</textPath></text>
<text x="512" y="940" text-anchor="middle" font-family="Arial, sans-serif" font-size="22" fill="#ffffff" fill-opacity="0.8">AI Generated Art</text>
<rect x="8" y="8" width="1008" height="1008" fill="none" stroke="#ffffff" stroke-opacity="0.4" stroke-width="4" rx="24"/>
</svg>"##,
        xml_escape(&title.join(" "))
    );
    svg
}

fn scaled(base: u32, mood: Mood) -> u32 {
    ((base as f64) * mood.density()).round().max(1.0) as u32
}

fn draw_space(svg: &mut String, ctx: &mut SynthContext, mood: Mood, palette: Palette) {
    for _ in 0..50 {
        let (x, y) = (ctx.rng().random_range(0..1024), ctx.rng().random_range(0..1024));
        let r: f64 = ctx.rng().random_range(0.8..3.0);
        let o: f64 = ctx.rng().random_range(0.4..1.0);
        let _ = writeln!(svg, r##"<circle cx="{x}" cy="{y}" r="{r:.1}" fill="#ffffff" opacity="{o:.2}"/>"##);
    }
    let _ = writeln!(
        svg,
        r#"<circle cx="700" cy="320" r="140" fill="{}" opacity="{:.2}" filter="url(#glow)"/>"#,
        palette.accent,
        mood.opacity() + 0.2
    );
    let _ = writeln!(
        svg,
        r##"<ellipse cx="700" cy="320" rx="220" ry="40" fill="none" stroke="#ffffff" stroke-opacity="0.5" stroke-width="6" transform="rotate(-18 700 320)"/>"##
    );
}

fn draw_floral(svg: &mut String, ctx: &mut SynthContext, mood: Mood, palette: Palette) {
    let flowers = scaled(6, mood);
    for i in 0..flowers {
        let (cx, cy) = if i == 0 {
            (512, 512)
        } else {
            (ctx.rng().random_range(120..904), ctx.rng().random_range(120..904))
        };
        let petal = if i == 0 { 120 } else { ctx.rng().random_range(30..70) };
        for k in 0..8 {
            let angle = k * 45;
            let _ = writeln!(
                svg,
                r#"<ellipse cx="{cx}" cy="{}" rx="{}" ry="{petal}" fill="{}" opacity="{:.2}" transform="rotate({angle} {cx} {cy})"/>"#,
                cy - petal,
                petal / 3,
                palette.accent,
                mood.opacity()
            );
        }
        let _ = writeln!(
            svg,
            r#"<circle cx="{cx}" cy="{cy}" r="{}" fill="{}"/>"#,
            petal / 4,
            palette.secondary
        );
    }
}

fn draw_geometric(svg: &mut String, ctx: &mut SynthContext, mood: Mood, palette: Palette) {
    let colours = [palette.primary, palette.secondary, palette.accent, "#ffffff"];
    for i in 0..scaled(14, mood) {
        let (x, y) = (ctx.rng().random_range(40..900), ctx.rng().random_range(40..900));
        let w = ctx.rng().random_range(60..220);
        let rot = ctx.rng().random_range(0..90);
        let colour = colours[i as usize % colours.len()];
        if i % 2 == 0 {
            let _ = writeln!(
                svg,
                r#"<rect x="{x}" y="{y}" width="{w}" height="{w}" fill="{colour}" opacity="{:.2}" transform="rotate({rot} {x} {y})"/>"#,
                mood.opacity()
            );
        } else {
            let _ = writeln!(
                svg,
                r#"<polygon points="{x},{} {},{} {},{}" fill="{colour}" opacity="{:.2}"/>"#,
                y + w,
                x + w / 2,
                y,
                x + w,
                y + w,
                mood.opacity()
            );
        }
    }
}

fn draw_landscape(svg: &mut String, ctx: &mut SynthContext, mood: Mood, palette: Palette) {
    let _ = writeln!(
        svg,
        r##"<circle cx="{}" cy="300" r="110" fill="#fff6d5" opacity="0.85" filter="url(#glow)"/>"##,
        ctx.rng().random_range(250..780)
    );
    let layers = [(620, palette.secondary), (700, palette.primary), (800, palette.accent)];
    for (base, colour) in layers {
        let mut points = format!("0,1024 0,{base}");
        let mut x = 0;
        while x < 1024 {
            x += ctx.rng().random_range(90..200);
            let peak = base - ctx.rng().random_range(60..260);
            let _ = write!(points, " {},{peak}", x.min(1024));
        }
        let _ = write!(points, " 1024,{base} 1024,1024");
        let _ = writeln!(
            svg,
            r#"<polygon points="{points}" fill="{colour}" opacity="{:.2}"/>"#,
            (mood.opacity() + 0.3).min(1.0)
        );
    }
}

fn draw_urban(svg: &mut String, ctx: &mut SynthContext, mood: Mood, palette: Palette) {
    let mut x = 0;
    while x < 1024 {
        let w = ctx.rng().random_range(50..110);
        let h = ctx.rng().random_range(180..520);
        let _ = writeln!(
            svg,
            r#"<rect x="{x}" y="{}" width="{w}" height="{h}" fill="{}" opacity="{:.2}"/>"#,
            1024 - h,
            palette.secondary,
            (mood.opacity() + 0.3).min(1.0)
        );
        let lit = scaled(4, mood);
        for _ in 0..lit {
            let wx = x + ctx.rng().random_range(6..(w - 14).max(7));
            let wy = 1024 - h + ctx.rng().random_range(10..(h - 20).max(11));
            let _ = writeln!(
                svg,
                r#"<rect x="{wx}" y="{wy}" width="8" height="12" fill="{}"/>"#,
                palette.accent
            );
        }
        x += w + ctx.rng().random_range(4..16);
    }
}

fn draw_abstract(svg: &mut String, ctx: &mut SynthContext, mood: Mood, palette: Palette) {
    let colours = [palette.primary, palette.secondary, palette.accent];
    for i in 0..scaled(9, mood) {
        let (x, y) = (ctx.rng().random_range(80..944), ctx.rng().random_range(80..944));
        let r = ctx.rng().random_range(40..200);
        let _ = writeln!(
            svg,
            r#"<circle cx="{x}" cy="{y}" r="{r}" fill="{}" opacity="{:.2}" filter="url(#glow)"/>"#,
            colours[i as usize % colours.len()],
            mood.opacity()
        );
    }
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Render the artwork and wrap it as a `data:image/svg+xml;base64,` URL.
pub fn placeholder_image(prompt: &str, ctx: &mut SynthContext) -> GeneratedImage {
    let svg = render_svg(prompt, ctx);
    GeneratedImage {
        url: format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)),
        model: PLACEHOLDER_MODEL.to_string(),
    }
}

/// Build the response payload from the enhancement and image stages.
pub fn compose(
    input: &ImageInput,
    enhanced_prompt: String,
    image: GeneratedImage,
    now: Timestamp,
) -> ImagePayload {
    ImagePayload {
        prompt: input.prompt.clone(),
        enhanced_prompt,
        image_url: image.url,
        style: input.style.clone(),
        dimensions: IMAGE_DIMENSIONS.to_string(),
        generated_at: now,
        metadata: ImageMetadata {
            model: image.model,
            steps: DEFAULT_STEPS,
            guidance: DEFAULT_GUIDANCE,
        },
    }
}

pub fn synthesize(input: &ImageInput, ctx: &mut SynthContext) -> ImagePayload {
    let enhanced = enhance_prompt(&input.prompt, &input.style);
    let image = placeholder_image(&enhanced, ctx);
    compose(input, enhanced, image, ctx.now())
}
