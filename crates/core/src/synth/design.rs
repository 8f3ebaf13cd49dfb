//! Design fallback: analysis families chosen from URL keywords or at random
//! for uploads, and React/HTML/CSS templates chosen from the analysis.
//!
//! Output is not normalized here; the pipeline applies
//! [`crate::layout::normalize_vertical`] to every design result.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::{mentions_any, SynthContext};
use crate::payload::{DesignAnalysis, DesignCode, DesignPayload};
use crate::validation::DesignInput;

/// Colour used when an analysis carries none.
pub const DEFAULT_PRIMARY: &str = "#3B82F6";

/// Modifiers occasionally prefixed to upload-fallback component names.
const COMPONENT_MODIFIERS: &[&str] = &["Enhanced", "Modern", "Interactive", "Responsive", "Dynamic"];

/// Probability that an upload-fallback component gets a modifier.
const MODIFIER_PROBABILITY: f64 = 0.2;

// ---------------------------------------------------------------------------
// Analysis families
// ---------------------------------------------------------------------------

struct Family {
    components: &'static [&'static str],
    layout: &'static str,
    colors: &'static [&'static str],
    typography: &'static str,
    theme: &'static str,
}

impl Family {
    fn analysis(&self) -> DesignAnalysis {
        DesignAnalysis {
            components: self.components.iter().map(|c| c.to_string()).collect(),
            layout: self.layout.to_string(),
            colors: self.colors.iter().map(|c| c.to_string()).collect(),
            typography: self.typography.to_string(),
            theme: self.theme.to_string(),
        }
    }
}

const LANDING: Family = Family {
    components: &["Hero Section", "Feature Cards", "CTA Button", "Navigation", "Footer"],
    layout: "Landing page with a hero section followed by stacked feature sections",
    colors: &["#6366F1", "#1F2937", "#F8FAFC", "#EF4444", "#10B981"],
    typography: "Bold headings with clean body text",
    theme: "Modern SaaS landing page",
};

const FORM: Family = Family {
    components: &["Form Container", "Input Fields", "Submit Button", "Validation Messages"],
    layout: "Centered form layout inside a card",
    colors: &["#8B5CF6", "#374151", "#F9FAFB", "#F59E0B"],
    typography: "Clean form typography with clear labels",
    theme: "Elegant form design",
};

const PROFILE: Family = Family {
    components: &["Profile Header", "Info Cards", "Settings Panel", "Action Buttons"],
    layout: "Profile header above stacked information and settings sections",
    colors: &["#059669", "#1F2937", "#F0FDF4", "#DC2626"],
    typography: "Professional profile typography",
    theme: "Clean profile interface",
};

const DASHBOARD: Family = Family {
    components: &["Navigation", "Dashboard Cards", "Charts", "Sidebar", "Stats"],
    layout: "Dashboard with navigation, summary cards and charts",
    colors: &["#3B82F6", "#1E293B", "#F1F5F9", "#10B981", "#F59E0B"],
    typography: "Professional system font stack",
    theme: "Clean dashboard interface",
};

/// Variations used when an uploaded screenshot cannot be analysed.
const UPLOAD_VARIATIONS: &[Family] = &[
    Family {
        components: &["Header", "Hero Section", "CTA Button", "Feature Cards", "Footer"],
        layout: "Landing page with hero section and feature list",
        colors: &["#6366F1", "#1F2937", "#F8FAFC", "#EF4444", "#10B981"],
        typography: "Clean sans-serif with bold headings and readable body text",
        theme: "Modern SaaS landing page",
    },
    Family {
        components: &["Navigation", "Dashboard Cards", "Charts", "Sidebar", "Stats Widget"],
        layout: "Dashboard layout with navigation and summary widgets",
        colors: &["#3B82F6", "#1E293B", "#F1F5F9", "#10B981", "#F59E0B"],
        typography: "Professional system font stack with data visualization",
        theme: "Clean dashboard interface",
    },
    Family {
        components: &["Form Container", "Input Fields", "Submit Button", "Validation Messages"],
        layout: "Centered form layout with card wrapper and validation",
        colors: &["#8B5CF6", "#374151", "#F9FAFB", "#F59E0B", "#DC2626"],
        typography: "Modern form typography with clear labels and error states",
        theme: "Elegant form design",
    },
    Family {
        components: &["Profile Header", "Avatar", "Info Cards", "Settings Panel", "Action Buttons"],
        layout: "Profile layout with header and stacked content sections",
        colors: &["#059669", "#1F2937", "#F0FDF4", "#DC2626", "#3B82F6"],
        typography: "Professional profile typography with hierarchy",
        theme: "Clean profile interface",
    },
    Family {
        components: &["Product Cards", "Filter Panel", "Search Bar", "Product List", "Pagination"],
        layout: "E-commerce layout with filters above the product list",
        colors: &["#F59E0B", "#1F2937", "#FEF3C7", "#DC2626", "#059669"],
        typography: "E-commerce typography with product focus",
        theme: "Modern e-commerce interface",
    },
    Family {
        components: &["Article Header", "Content Body", "Related Articles", "Comments"],
        layout: "Blog layout with article body followed by related content",
        colors: &["#6B7280", "#1F2937", "#F9FAFB", "#3B82F6", "#059669"],
        typography: "Editorial typography optimized for reading",
        theme: "Clean blog interface",
    },
    Family {
        components: &["Project Cards", "About Section", "Contact Form", "Skills List"],
        layout: "Portfolio layout with project showcase and personal branding",
        colors: &["#EC4899", "#1F2937", "#FDF2F8", "#8B5CF6", "#F59E0B"],
        typography: "Creative typography with personality and visual hierarchy",
        theme: "Creative portfolio design",
    },
    Family {
        components: &["Team Cards", "Company Stats", "Mission Statement", "Values List", "Contact Info"],
        layout: "About page with team showcase and company information",
        colors: &["#0EA5E9", "#1E293B", "#F0F9FF", "#10B981", "#F97316"],
        typography: "Corporate typography with trust and professionalism",
        theme: "Professional about page",
    },
    Family {
        components: &["Event Cards", "Calendar View", "Registration Form", "Speaker Profiles", "Schedule"],
        layout: "Event page with schedule and registration",
        colors: &["#7C3AED", "#1F2937", "#F5F3FF", "#EF4444", "#059669"],
        typography: "Event typography with excitement and clarity",
        theme: "Dynamic event interface",
    },
    Family {
        components: &["Service Cards", "Pricing Table", "Testimonials", "FAQ Section", "Contact CTA"],
        layout: "Service page with pricing and social proof",
        colors: &["#DC2626", "#1F2937", "#FEF2F2", "#3B82F6", "#10B981"],
        typography: "Service typography with trust and conversion focus",
        theme: "Professional service page",
    },
    Family {
        components: &["News Feed", "Article Cards", "Category Filters", "Search Widget", "Newsletter Signup"],
        layout: "News layout with feed and filtering",
        colors: &["#1D4ED8", "#1F2937", "#EFF6FF", "#F59E0B", "#059669"],
        typography: "News typography with readability and hierarchy",
        theme: "Modern news interface",
    },
];

/// Analysis for a Figma link whose file could not be read, chosen from
/// keywords in the link itself.
pub fn analysis_for_url(url: &str) -> DesignAnalysis {
    let lower = url.to_lowercase();
    let family = if lower.contains("landing") || lower.contains("home") {
        &LANDING
    } else if ["form", "login", "signup", "sign-up"].iter().any(|k| lower.contains(k)) {
        &FORM
    } else if lower.contains("profile") || lower.contains("settings") {
        &PROFILE
    } else {
        &DASHBOARD
    };
    family.analysis()
}

/// Analysis for an upload that could not be analysed: one of the upload
/// variations, with an occasional modifier on component names.
pub fn analysis_for_upload(ctx: &mut SynthContext) -> DesignAnalysis {
    let family = UPLOAD_VARIATIONS
        .choose(ctx.rng())
        .unwrap_or(&UPLOAD_VARIATIONS[0]);
    let mut analysis = family.analysis();
    for component in &mut analysis.components {
        if ctx.rng().random_bool(MODIFIER_PROBABILITY) {
            if let Some(modifier) = COMPONENT_MODIFIERS.choose(ctx.rng()) {
                *component = format!("{modifier} {component}");
            }
        }
    }
    analysis
}

// ---------------------------------------------------------------------------
// Code templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Form,
    Dashboard,
    Cards,
}

/// Pick a template from the analysis components and theme.
pub fn template_for(analysis: &DesignAnalysis) -> Template {
    let mentions = |kw: &[&str]| {
        analysis.components.iter().any(|c| mentions_any(c, kw)) || mentions_any(&analysis.theme, kw)
    };
    if mentions(&["form", "input", "login", "registration"]) {
        Template::Form
    } else if mentions(&["dashboard", "chart", "stats"]) {
        Template::Dashboard
    } else {
        Template::Cards
    }
}

/// PascalCase component name from the first analysed component.
pub fn component_name(analysis: &DesignAnalysis) -> String {
    let name: String = analysis
        .components
        .first()
        .map(|c| {
            c.split(|ch: char| !ch.is_ascii_alphanumeric())
                .filter(|w| !w.is_empty())
                .map(|w| {
                    let mut chars = w.chars();
                    match chars.next() {
                        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                        None => String::new(),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    match name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => name,
        _ => "Component".to_string(),
    }
}

/// Render the template chosen for `analysis`.
pub fn code_for(analysis: &DesignAnalysis) -> DesignCode {
    let name = component_name(analysis);
    let primary = analysis
        .colors
        .iter()
        .find(|c| c.starts_with('#'))
        .map_or(DEFAULT_PRIMARY, String::as_str);
    let sections: Vec<&str> = analysis.components.iter().map(String::as_str).collect();

    let (react, html) = match template_for(analysis) {
        Template::Form => (FORM_REACT, FORM_HTML),
        Template::Dashboard => (DASHBOARD_REACT, DASHBOARD_HTML),
        Template::Cards => (CARDS_REACT, CARDS_HTML),
    };

    let js_items = sections
        .iter()
        .map(|s| format!("'{}'", s.replace('\\', "").replace('\'', "\\'")))
        .collect::<Vec<_>>()
        .join(", ");
    let html_items = sections
        .iter()
        .map(|s| {
            format!(
                "      <article class=\"card\">\n        <h3>{}</h3>\n        <p>Content for this section.</p>\n      </article>",
                html_escape(s)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let theme = html_escape(&analysis.theme);

    let fill = |tpl: &str| {
        tpl.replace("__NAME__", &name)
            .replace("__PRIMARY__", primary)
            .replace("__THEME__", &theme)
            .replace("__JS_ITEMS__", &js_items)
            .replace("__HTML_ITEMS__", &html_items)
    };

    DesignCode {
        react: fill(react),
        html: fill(html),
        css: fill(SHARED_CSS),
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ---------------------------------------------------------------------------
// Full fallback
// ---------------------------------------------------------------------------

pub fn synthesize(input: &DesignInput, ctx: &mut SynthContext) -> DesignPayload {
    let analysis = match input {
        DesignInput::FigmaUrl { url, .. } => analysis_for_url(url),
        DesignInput::Upload { .. } => analysis_for_upload(ctx),
    };
    let code = code_for(&analysis);
    DesignPayload { analysis, code }
}

// ---------------------------------------------------------------------------
// Template sources
// ---------------------------------------------------------------------------

const FORM_REACT: &str = r#"import { useState } from 'react'

export default function __NAME__Form() {
  const [form, setForm] = useState({ email: '', password: '' })
  const fields = [__JS_ITEMS__]

  const handleSubmit = (e) => {
    e.preventDefault()
  }

  return (
    <div className="min-h-screen bg-gray-50 flex flex-col">
      <header className="w-full bg-white border-b py-4 px-6">
        <h1 className="text-2xl font-bold text-gray-900">__THEME__</h1>
      </header>
      <main className="flex-1 w-full max-w-md mx-auto py-12 px-4 space-y-8">
        <form className="space-y-6" onSubmit={handleSubmit}>
          <div className="space-y-4">
            <label className="block text-sm font-medium text-gray-700" htmlFor="email">Email address</label>
            <input id="email" type="email" required className="block w-full px-3 py-2 border rounded-md"
              value={form.email} onChange={(e) => setForm({ ...form, email: e.target.value })} />
            <label className="block text-sm font-medium text-gray-700" htmlFor="password">Password</label>
            <input id="password" type="password" required className="block w-full px-3 py-2 border rounded-md"
              value={form.password} onChange={(e) => setForm({ ...form, password: e.target.value })} />
          </div>
          <button type="submit" className="w-full py-2 px-4 rounded-md text-white" style={{ backgroundColor: '__PRIMARY__' }}>
            Continue
          </button>
        </form>
        <ul className="space-y-2 text-sm text-gray-500">
          {fields.map((field) => (
            <li key={field}>{field}</li>
          ))}
        </ul>
      </main>
      <footer className="w-full border-t py-4 text-center text-sm text-gray-500">All rights reserved.</footer>
    </div>
  )
}
"#;

const FORM_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>__THEME__</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <div class="page">
    <header class="page-header"><h1>__THEME__</h1></header>
    <main class="page-main">
      <form class="stack">
        <label for="email">Email address</label>
        <input id="email" type="email" required>
        <label for="password">Password</label>
        <input id="password" type="password" required>
        <button type="submit" class="primary">Continue</button>
      </form>
__HTML_ITEMS__
    </main>
    <footer class="page-footer">All rights reserved.</footer>
  </div>
</body>
</html>
"#;

const DASHBOARD_REACT: &str = r#"export default function __NAME__Dashboard() {
  const stats = [
    { name: 'Total Users', value: '12,345', change: '+12%' },
    { name: 'Revenue', value: '$45,678', change: '+8%' },
    { name: 'Orders', value: '1,234', change: '+23%' },
    { name: 'Conversion', value: '3.2%', change: '+2%' },
  ]
  const sections = [__JS_ITEMS__]

  return (
    <div className="min-h-screen bg-gray-50 flex flex-col">
      <header className="w-full bg-white shadow-sm py-4 px-6">
        <h1 className="text-xl font-semibold text-gray-900">__THEME__</h1>
      </header>
      <main className="flex-1 w-full max-w-5xl mx-auto py-8 px-4 space-y-8">
        <section className="w-full">
          <h2 className="text-lg font-medium text-gray-900 mb-4">Overview</h2>
          <div className="grid grid-cols-1 md:grid-cols-4 gap-6">
            {stats.map((stat) => (
              <div key={stat.name} className="bg-white shadow rounded-lg p-5">
                <p className="text-sm text-gray-500">{stat.name}</p>
                <p className="text-2xl font-semibold" style={{ color: '__PRIMARY__' }}>{stat.value}</p>
                <p className="text-sm text-green-600">{stat.change}</p>
              </div>
            ))}
          </div>
        </section>
        {sections.map((title) => (
          <section key={title} className="w-full bg-white shadow rounded-lg p-6">
            <h3 className="text-lg font-medium text-gray-900">{title}</h3>
            <p className="mt-2 text-gray-600">Live data for {title.toLowerCase()} appears here.</p>
          </section>
        ))}
      </main>
    </div>
  )
}
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>__THEME__</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <div class="page">
    <header class="page-header"><h1>__THEME__</h1></header>
    <main class="page-main">
      <section class="stats">
        <div class="card"><p>Total Users</p><strong>12,345</strong></div>
        <div class="card"><p>Revenue</p><strong>$45,678</strong></div>
        <div class="card"><p>Orders</p><strong>1,234</strong></div>
      </section>
__HTML_ITEMS__
    </main>
  </div>
</body>
</html>
"#;

const CARDS_REACT: &str = r#"export default function __NAME__() {
  const items = [__JS_ITEMS__]

  return (
    <div className="min-h-screen bg-white flex flex-col">
      <header className="w-full py-6 px-6 border-b">
        <h1 className="text-3xl font-bold" style={{ color: '__PRIMARY__' }}>__THEME__</h1>
      </header>
      <main className="flex-1 w-full max-w-4xl mx-auto py-12 px-4">
        <div className="grid grid-cols-1 md:grid-cols-3 gap-8">
          {items.map((item) => (
            <article key={item} className="rounded-xl border p-6 shadow-sm">
              <h2 className="text-xl font-semibold text-gray-900">{item}</h2>
              <p className="mt-2 text-gray-600">A short description of {item.toLowerCase()}.</p>
              <button className="mt-4 px-4 py-2 rounded-md text-white" style={{ backgroundColor: '__PRIMARY__' }}>
                Learn more
              </button>
            </article>
          ))}
        </div>
      </main>
      <footer className="w-full border-t py-6 text-center text-sm text-gray-500">All rights reserved.</footer>
    </div>
  )
}
"#;

const CARDS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>__THEME__</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <div class="page">
    <header class="page-header"><h1>__THEME__</h1></header>
    <main class="page-main">
__HTML_ITEMS__
    </main>
    <footer class="page-footer">All rights reserved.</footer>
  </div>
</body>
</html>
"#;

const SHARED_CSS: &str = r#".page {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
  font-family: system-ui, -apple-system, sans-serif;
}

.page-header,
.page-footer {
  padding: 1.5rem;
}

.page-main {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  max-width: 64rem;
  margin: 0 auto;
  padding: 3rem 1rem;
}

.stats {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.card {
  border: 1px solid #e5e7eb;
  border-radius: 0.75rem;
  padding: 1.5rem;
}

.stack {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.primary {
  background: __PRIMARY__;
  color: #fff;
  border: none;
  border-radius: 0.375rem;
  padding: 0.5rem 1rem;
}
"#;
