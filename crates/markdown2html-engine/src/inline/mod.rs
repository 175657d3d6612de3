//! # Inline Rendering
//!
//! Inline content runs through a fixed sequence of string-to-string stages.
//! Block renderers pick the stage list that fits them.
//!
//! ## Modules
//!
//! - **`entities`**: entity decoding followed by HTML escaping
//! - **`line_break`**: `HardBreak` (`"  \n"` to `<br />`) and per-line trimming
//! - **`delimiter`**: `DelimiterKind` and the opener/closer flanking rules
//! - **`emphasis`**: `resolve_emphasis()`, the delimiter-stack resolver
//!
//! ## Stage Order
//!
//! Entities are escaped first so the tags inserted by later stages are never
//! escaped themselves.

pub mod delimiter;
pub mod emphasis;
pub mod entities;
pub mod line_break;

pub use delimiter::{DelimiterKind, DelimiterPotential};
pub use emphasis::resolve_emphasis;
pub use entities::escape_entities;
pub use line_break::{HardBreak, trim_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStage {
    Entities,
    HardBreaks,
    Emphasis,
    TrimLines,
}

impl InlineStage {
    pub fn apply(self, content: &str) -> String {
        match self {
            InlineStage::Entities => escape_entities(content),
            InlineStage::HardBreaks => HardBreak::apply(content),
            InlineStage::Emphasis => resolve_emphasis(content),
            InlineStage::TrimLines => trim_lines(content),
        }
    }
}

/// Stages for paragraph-like blocks (paragraphs, list items).
pub const BLOCK_STAGES: &[InlineStage] = &[
    InlineStage::Entities,
    InlineStage::HardBreaks,
    InlineStage::Emphasis,
    InlineStage::TrimLines,
];

/// Headings are single-line, so breaks and trimming do not apply.
pub const HEADING_STAGES: &[InlineStage] = &[InlineStage::Entities, InlineStage::Emphasis];

pub fn render_inline(content: &str, stages: &[InlineStage]) -> String {
    stages
        .iter()
        .fold(content.to_string(), |acc, stage| stage.apply(&acc))
}
