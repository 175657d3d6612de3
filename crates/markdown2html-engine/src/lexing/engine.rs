use super::kinds::{AtxHeaderLexer, EmptyLineLexer, ListLexer, ParagraphLexer};
use super::lines::first_line;
use super::token::MarkdownToken;

/// A block-level lexer. Returns `None` when the text does not start with its
/// construct; a returned token must consume at least one byte.
pub trait BlockLexer: Send + Sync {
    fn name(&self) -> &'static str;
    fn lex(&self, remainder: &str) -> Option<MarkdownToken>;
}

/// Dispatch priority of the built-in lexers. Lower runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LexerPriority {
    AtxHeader = 0,
    List = 1,
    EmptyLine = 2,
    Paragraph = 3,
}

/// Normalises line endings, expands tabs to four spaces and replaces NUL with
/// U+FFFD.
pub fn preprocess(markdown: &str) -> String {
    markdown
        .replace("\r\n", "\n")
        .replace('\t', "    ")
        .replace('\0', "\u{FFFD}")
}

/// Runs block lexers in priority order over the document until it is used up.
pub struct LexerEngine {
    lexers: Vec<(u8, Box<dyn BlockLexer>)>,
}

impl Default for LexerEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl LexerEngine {
    /// An engine with no lexers; every line would be discarded.
    pub fn empty() -> Self {
        Self {
            lexers: Vec::new(),
        }
    }

    pub fn standard() -> Self {
        Self::empty()
            .with_lexer(LexerPriority::AtxHeader as u8, AtxHeaderLexer)
            .with_lexer(LexerPriority::List as u8, ListLexer)
            .with_lexer(LexerPriority::EmptyLine as u8, EmptyLineLexer)
            .with_lexer(LexerPriority::Paragraph as u8, ParagraphLexer)
    }

    /// Registers `lexer` after any already registered at the same priority.
    pub fn with_lexer(mut self, priority: u8, lexer: impl BlockLexer + 'static) -> Self {
        let position = self
            .lexers
            .iter()
            .position(|(existing, _)| *existing > priority)
            .unwrap_or(self.lexers.len());
        let lexer: Box<dyn BlockLexer> = Box::new(lexer);
        self.lexers.insert(position, (priority, lexer));
        self
    }

    pub fn lexer_names(&self) -> Vec<&'static str> {
        self.lexers.iter().map(|(_, lexer)| lexer.name()).collect()
    }

    fn lex_one(&self, remainder: &str) -> Option<MarkdownToken> {
        self.lexers.iter().find_map(|(_, lexer)| {
            lexer
                .lex(remainder)
                .filter(|token| token.consumed() > 0 && token.consumed() <= remainder.len())
        })
    }

    /// Preprocesses and lexes `markdown` into block tokens.
    ///
    /// When no lexer accepts the remaining text its first line is dropped so
    /// lexing always makes progress.
    pub fn lex(&self, markdown: &str) -> Vec<MarkdownToken> {
        let source = preprocess(markdown);
        let mut tokens = Vec::new();
        let mut offset = 0;

        while offset < source.len() {
            let remainder = &source[offset..];
            match self.lex_one(remainder) {
                Some(token) => {
                    log::trace!("lexed {:?} ({} bytes)", token.kind(), token.consumed());
                    offset += token.consumed();
                    tokens.push(token);
                }
                None => {
                    let skipped =
                        first_line(remainder).map_or(remainder.len(), |line| line.text.len());
                    log::warn!(
                        "no block lexer matched at byte {offset}, discarding {:?}",
                        &remainder[..skipped]
                    );
                    offset += skipped;
                }
            }
        }

        log::debug!("lexed {} block tokens", tokens.len());
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::token::TokenKind;
    use pretty_assertions::assert_eq;

    fn kinds(tokens: &[MarkdownToken]) -> Vec<TokenKind> {
        tokens.iter().map(MarkdownToken::kind).collect()
    }

    #[test]
    fn preprocess_normalises_input() {
        assert_eq!(preprocess("a\r\n\tb\0"), "a\n    b\u{FFFD}");
    }

    #[test]
    fn standard_priority_order() {
        assert_eq!(
            LexerEngine::standard().lexer_names(),
            vec!["atx-header", "list", "empty-line", "paragraph"]
        );
    }

    #[test]
    fn lexes_mixed_document() {
        let tokens = LexerEngine::standard().lex("# Title\n\nSome text\nmore\n\n- a\n- b\n");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::AtxHeader,
                TokenKind::EmptyLine,
                TokenKind::Paragraph,
                TokenKind::EmptyLine,
                TokenKind::List,
            ]
        );
    }

    #[test]
    fn consumed_bytes_cover_the_document() {
        let source = "para\n\n1. x\n2. y\n\n## h\n";
        let tokens = LexerEngine::standard().lex(source);
        let total: usize = tokens.iter().map(MarkdownToken::consumed).sum();
        assert_eq!(total, source.len());
    }

    struct HeaderOnly;

    impl BlockLexer for HeaderOnly {
        fn name(&self) -> &'static str {
            "header-only"
        }

        fn lex(&self, remainder: &str) -> Option<MarkdownToken> {
            AtxHeaderLexer.lex(remainder)
        }
    }

    #[test]
    fn equal_priorities_keep_registration_order() {
        let engine = LexerEngine::empty()
            .with_lexer(5, ParagraphLexer)
            .with_lexer(1, HeaderOnly)
            .with_lexer(5, EmptyLineLexer);
        assert_eq!(
            engine.lexer_names(),
            vec!["header-only", "paragraph", "empty-line"]
        );
    }

    #[test]
    fn unmatched_lines_are_discarded() {
        let engine = LexerEngine::empty().with_lexer(0, HeaderOnly);
        let tokens = engine.lex("junk\n# kept\nmore junk");
        assert_eq!(
            tokens,
            vec![MarkdownToken::leaf(TokenKind::AtxHeader, "# kept\n")]
        );
    }
}
