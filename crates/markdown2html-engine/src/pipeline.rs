use crate::lexing::{LexerEngine, MarkdownToken};
use crate::parsing::{MarkdownObject, ParserEngine};
use crate::rendering::RenderEngine;

/// Lexer, parser and renderer tables wired together.
#[derive(Default)]
pub struct MarkdownEngine {
    lexer: LexerEngine,
    parser: ParserEngine,
    renderer: RenderEngine,
}

impl MarkdownEngine {
    pub fn new(lexer: LexerEngine, parser: ParserEngine, renderer: RenderEngine) -> Self {
        Self {
            lexer,
            parser,
            renderer,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            LexerEngine::standard(),
            ParserEngine::standard(),
            RenderEngine::standard(),
        )
    }

    pub fn lex(&self, markdown: &str) -> Vec<MarkdownToken> {
        self.lexer.lex(markdown)
    }

    pub fn parse(&self, markdown: &str) -> Vec<MarkdownObject> {
        self.parser.parse(&self.lex(markdown))
    }

    /// Converts a whole document. Never fails: input no lexer understands is
    /// dropped and unmatched emphasis stays literal.
    pub fn markdown_to_html(&self, markdown: &str) -> String {
        self.renderer.render(&self.parse(markdown))
    }
}

/// Converts `markdown` with the standard engine.
pub fn markdown_to_html(markdown: &str) -> String {
    MarkdownEngine::standard().markdown_to_html(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("aaa\n\nbbb", "<p>aaa</p>\n<p>bbb</p>\n")]
    #[case("# Title\n\nbody\n", "<h1>Title</h1>\n<p>body</p>\n")]
    #[case("- a\n- b", "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n")]
    #[case("1. A\n2. B\n3. C", "<ol>\n<li>A</li>\n<li>B</li>\n<li>C</li>\n</ol>\n")]
    #[case("aaa  \nbbb", "<p>aaa<br />\nbbb</p>\n")]
    #[case("- a\n\npara", "<ul>\n<li>a</li>\n</ul>\n<p>para</p>\n")]
    #[case("", "")]
    fn converts_documents(#[case] markdown: &str, #[case] html: &str) {
        assert_eq!(markdown_to_html(markdown), html);
    }

    #[test]
    fn parse_exposes_objects() {
        let objects = MarkdownEngine::standard().parse("## x");
        assert_eq!(
            objects,
            vec![MarkdownObject::AtxHeader {
                level: 2,
                text: "x".to_string()
            }]
        );
    }
}
