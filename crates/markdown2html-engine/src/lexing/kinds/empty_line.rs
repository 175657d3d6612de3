use regex::Regex;
use std::sync::LazyLock;

use crate::lexing::engine::BlockLexer;
use crate::lexing::token::{MarkdownToken, TokenKind};

/// A run of blank lines, or trailing spaces at the very end of the input.
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?: *\n)+(?: *$)?|^ +$").unwrap());

pub struct EmptyLineLexer;

impl BlockLexer for EmptyLineLexer {
    fn name(&self) -> &'static str {
        "empty-line"
    }

    fn lex(&self, remainder: &str) -> Option<MarkdownToken> {
        let run = BLANK_RUN.find(remainder)?;
        Some(MarkdownToken::leaf(TokenKind::EmptyLine, run.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn consumes_consecutive_blank_lines() {
        let token = EmptyLineLexer.lex("\n   \n\nnext").unwrap();
        assert_eq!(token.consumed(), 6);
    }

    #[test]
    fn trailing_spaces_at_end_of_input() {
        let token = EmptyLineLexer.lex("   ").unwrap();
        assert_eq!(token.content(), Some("   "));
    }

    #[test]
    fn declines_text() {
        assert_eq!(EmptyLineLexer.lex("  text\n"), None);
        assert_eq!(EmptyLineLexer.lex(""), None);
    }
}
