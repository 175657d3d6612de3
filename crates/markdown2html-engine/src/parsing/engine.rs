use std::collections::HashMap;

use crate::lexing::{MarkdownToken, TokenKind};

use super::objects::MarkdownObject;
use super::parsers::{AtxHeaderParser, EmptyLineParser, ListParser, ParagraphParser};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no parser registered for {0:?} tokens")]
    NoParser(TokenKind),
    #[error("malformed {kind:?} token: {reason}")]
    MalformedToken {
        kind: TokenKind,
        reason: &'static str,
    },
}

impl ParseError {
    pub fn malformed(kind: TokenKind, reason: &'static str) -> Self {
        ParseError::MalformedToken { kind, reason }
    }
}

pub trait TokenParser: Send + Sync {
    fn parse(&self, token: &MarkdownToken) -> Result<MarkdownObject, ParseError>;
}

/// Maps each token kind to the parser that turns it into an object.
pub struct ParserEngine {
    parsers: HashMap<TokenKind, Box<dyn TokenParser>>,
}

impl Default for ParserEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl ParserEngine {
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    pub fn standard() -> Self {
        Self::empty()
            .with_parser(TokenKind::Paragraph, ParagraphParser)
            .with_parser(TokenKind::AtxHeader, AtxHeaderParser)
            .with_parser(TokenKind::EmptyLine, EmptyLineParser)
            .with_parser(TokenKind::List, ListParser)
    }

    pub fn with_parser(mut self, kind: TokenKind, parser: impl TokenParser + 'static) -> Self {
        let parser: Box<dyn TokenParser> = Box::new(parser);
        self.parsers.insert(kind, parser);
        self
    }

    pub fn parse_token(&self, token: &MarkdownToken) -> Result<MarkdownObject, ParseError> {
        let parser = self
            .parsers
            .get(&token.kind())
            .ok_or(ParseError::NoParser(token.kind()))?;
        parser.parse(token)
    }

    /// Parses every token, logging and skipping the ones that fail.
    pub fn parse(&self, tokens: &[MarkdownToken]) -> Vec<MarkdownObject> {
        let objects: Vec<_> = tokens
            .iter()
            .filter_map(|token| match self.parse_token(token) {
                Ok(object) => Some(object),
                Err(e) => {
                    log::error!("skipping token: {e}");
                    None
                }
            })
            .collect();
        log::debug!("parsed {} objects from {} tokens", objects.len(), tokens.len());
        objects
    }
}
