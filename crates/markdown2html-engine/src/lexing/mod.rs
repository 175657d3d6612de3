//! # Block Lexing
//!
//! Turns Markdown source into a flat sequence of block tokens.
//!
//! ## Modules
//!
//! - **`token`**: `MarkdownToken` (leaf or container) and `TokenKind`
//! - **`lines`**: `LineRef` and line iteration with byte offsets
//! - **`engine`**: `LexerEngine` dispatch loop, `BlockLexer` trait, `preprocess()`
//! - **`kinds`**: one module per block construct, each owning its own patterns
//!   (`AtxHeader`, `Bullet`, `Paragraph`) next to its lexer
//!
//! ## Dispatch
//!
//! Lexers are tried in `LexerPriority` order; the first to return a token wins
//! and the loop continues after the bytes it consumed. Lists are lexed by the
//! item state machine in `kinds::list::item_machine`.

pub mod engine;
pub mod kinds;
pub mod lines;
pub mod token;

pub use engine::{BlockLexer, LexerEngine, LexerPriority, preprocess};
pub use kinds::list::{LexedItem, ListBlock, lex_list_block, lex_list_item};
pub use token::{MarkdownToken, TokenKind};
