use crate::lexing::engine::BlockLexer;
use crate::lexing::kinds::atx_header::AtxHeader;
use crate::lexing::kinds::list::Bullet;
use crate::lexing::lines::lines_with_offsets;
use crate::lexing::token::{MarkdownToken, TokenKind};

pub struct Paragraph;

impl Paragraph {
    /// Lines that end a paragraph (and a lazy list continuation) without a
    /// blank line in between.
    pub fn interrupted_by(remainder: &str) -> bool {
        AtxHeader::starts(remainder) || Bullet::match_line(remainder).is_some()
    }
}

/// Collects consecutive non-blank lines. The newline after the last line is
/// left for the next lexer.
pub struct ParagraphLexer;

impl BlockLexer for ParagraphLexer {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn lex(&self, remainder: &str) -> Option<MarkdownToken> {
        let mut content_end = 0;
        for line in lines_with_offsets(remainder) {
            if line.is_blank() {
                break;
            }
            if line.start > 0 && Paragraph::interrupted_by(&remainder[line.start..]) {
                break;
            }
            content_end = line.start + line.content().len();
        }
        if content_end == 0 {
            return None;
        }
        Some(MarkdownToken::leaf(
            TokenKind::Paragraph,
            &remainder[..content_end],
        ))
    }
}
