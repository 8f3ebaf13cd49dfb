//! The five generation kinds served by the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A generation kind. Each kind has its own validation rule, provider chain
/// and payload schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Code,
    Design,
    Image,
    Research,
    Movie,
}

impl GenerationKind {
    /// All kinds, in route order.
    pub const ALL: [GenerationKind; 5] = [
        GenerationKind::Code,
        GenerationKind::Design,
        GenerationKind::Image,
        GenerationKind::Research,
        GenerationKind::Movie,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GenerationKind::Code => "code",
            GenerationKind::Design => "design",
            GenerationKind::Image => "image",
            GenerationKind::Research => "research",
            GenerationKind::Movie => "movie",
        }
    }
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&GenerationKind::Research).unwrap();
        assert_eq!(json, "\"research\"");
    }

    #[test]
    fn display_matches_as_str() {
        for kind in GenerationKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
