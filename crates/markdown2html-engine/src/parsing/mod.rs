//! # Block Parsing
//!
//! Converts block tokens into `MarkdownObject`s.
//!
//! ## Modules
//!
//! - **`objects`**: `MarkdownObject`, `ListItem` and `ObjectKind`
//! - **`engine`**: `ParserEngine` table keyed by `TokenKind`, `TokenParser`, `ParseError`
//! - **`parsers`**: one parser per token kind; list items are parsed by the list parser

pub mod engine;
pub mod objects;
pub mod parsers;

pub use engine::{ParseError, ParserEngine, TokenParser};
pub use objects::{ListItem, MarkdownObject, ObjectKind};
