use regex::Regex;
use std::sync::LazyLock;

use crate::lexing::engine::BlockLexer;
use crate::lexing::token::{MarkdownToken, TokenKind};

static ATX_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(#{1,6})(?: (.*?))??(?: +#* *)?(?:\n|$)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtxMatch<'a> {
    pub level: u8,
    /// Heading text with surrounding spaces and the closing sequence removed.
    pub text: &'a str,
    /// Bytes of the line, newline included.
    pub consumed: usize,
}

pub struct AtxHeader;

impl AtxHeader {
    pub fn match_line(remainder: &str) -> Option<AtxMatch<'_>> {
        let caps = ATX_HEADER.captures(remainder)?;
        let whole = caps.get(0)?;
        let level = u8::try_from(caps.get(1)?.as_str().len()).ok()?;
        let text = caps.get(2).map_or("", |m| m.as_str().trim_matches(' '));
        Some(AtxMatch {
            level,
            text,
            consumed: whole.end(),
        })
    }

    pub fn starts(remainder: &str) -> bool {
        ATX_HEADER.is_match(remainder)
    }
}

/// Emits the full header line, newline included, as a leaf token.
pub struct AtxHeaderLexer;

impl BlockLexer for AtxHeaderLexer {
    fn name(&self) -> &'static str {
        "atx-header"
    }

    fn lex(&self, remainder: &str) -> Option<MarkdownToken> {
        let header = AtxHeader::match_line(remainder)?;
        Some(MarkdownToken::leaf(
            TokenKind::AtxHeader,
            &remainder[..header.consumed],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# foo", 1, "foo")]
    #[case("###### foo\n", 6, "foo")]
    #[case("## foo ##", 2, "foo")]
    #[case("   ### foo", 3, "foo")]
    #[case("# foo#", 1, "foo#")]
    #[case("#", 1, "")]
    fn matches_headers(#[case] input: &str, #[case] level: u8, #[case] text: &str) {
        let header = AtxHeader::match_line(input).unwrap();
        assert_eq!(header.level, level);
        assert_eq!(header.text, text);
    }

    #[rstest]
    #[case("####### foo")]
    #[case("#5 bolt")]
    #[case("#hashtag")]
    #[case("    # foo")]
    fn rejects_non_headers(#[case] input: &str) {
        assert_eq!(AtxHeader::match_line(input), None);
    }

    #[test]
    fn lexer_consumes_only_the_header_line() {
        let token = AtxHeaderLexer.lex("# title\nbody").unwrap();
        assert_eq!(token, MarkdownToken::leaf(TokenKind::AtxHeader, "# title\n"));
    }
}
