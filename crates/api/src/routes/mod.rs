//! Route tree.
//!
//! ```text
//! GET  /health              service status and provider credential map
//! GET  /health/llm          live probe of the first configured chat model
//!
//! POST /generate/code       LeetCode problem + solution
//! POST /generate/design     design analysis + vertical UI code
//! POST /generate/image      image URL + enhanced prompt
//! POST /generate/research   summary, findings, sources, report
//! POST /generate/movie      IMDb listing link + titles
//! ```

pub mod generate;
pub mod health;
