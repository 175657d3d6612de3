//! # markdown2html engine
//!
//! Markdown goes through three table-driven stages:
//!
//! - **`lexing`**: block lexers in priority order produce `MarkdownToken`s
//! - **`parsing`**: token parsers produce `MarkdownObject`s
//! - **`rendering`**: object renderers produce HTML, running inline content
//!   through **`inline`** (entities, hard breaks, emphasis, trimming)
//!
//! **`collections`** holds the `TokenList` the emphasis resolver works on,
//! **`pipeline`** wires the stages into a `MarkdownEngine`, and
//! **`conformance`** runs CommonMark JSON examples against it.

pub mod collections;
pub mod conformance;
pub mod inline;
pub mod io;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod rendering;

// Re-export key types for easier usage
pub use collections::{NodeId, TokenList, TokenListError};
pub use conformance::{ConformanceCase, ConformanceError, ConformanceReport, ConformanceRunner};
pub use inline::resolve_emphasis;
pub use io::IoError;
pub use lexing::{ListBlock, lex_list_block};
pub use pipeline::{MarkdownEngine, markdown_to_html};
