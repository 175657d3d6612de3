use crate::lexing::kinds::{AtxHeader, Bullet, Marker};
use crate::lexing::lines::lines_with_offsets;
use crate::lexing::{MarkdownToken, TokenKind};

use super::engine::{ParseError, TokenParser};
use super::objects::{ListItem, MarkdownObject};

fn leaf_content(token: &MarkdownToken) -> Result<&str, ParseError> {
    token
        .content()
        .ok_or_else(|| ParseError::malformed(token.kind(), "expected a leaf token"))
}

pub struct ParagraphParser;

impl TokenParser for ParagraphParser {
    fn parse(&self, token: &MarkdownToken) -> Result<MarkdownObject, ParseError> {
        Ok(MarkdownObject::Paragraph {
            content: leaf_content(token)?.to_string(),
        })
    }
}

pub struct AtxHeaderParser;

impl TokenParser for AtxHeaderParser {
    fn parse(&self, token: &MarkdownToken) -> Result<MarkdownObject, ParseError> {
        let header = AtxHeader::match_line(leaf_content(token)?)
            .ok_or_else(|| ParseError::malformed(token.kind(), "no header marker"))?;
        Ok(MarkdownObject::AtxHeader {
            level: header.level,
            text: header.text.to_string(),
        })
    }
}

pub struct EmptyLineParser;

impl TokenParser for EmptyLineParser {
    fn parse(&self, _token: &MarkdownToken) -> Result<MarkdownObject, ParseError> {
        Ok(MarkdownObject::EmptyLine)
    }
}

/// Removes at most `padding` leading spaces.
fn strip_padding(line: &str, padding: usize) -> &str {
    let indent = line.len() - line.trim_start_matches(' ').len();
    &line[indent.min(padding)..]
}

/// Splits an item's source into its paragraphs, dropping the bullet prefix
/// and the continuation indent.
pub fn parse_list_item(token: &MarkdownToken) -> Result<ListItem, ParseError> {
    let source = leaf_content(token)?;
    let bullet = Bullet::match_line(source).ok_or_else(|| {
        ParseError::malformed(token.kind(), "item does not start with a bullet")
    })?;

    let continuation = lines_with_offsets(&source[bullet.consumed..])
        .map(|line| strip_padding(line.content(), bullet.legal_padding));

    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in std::iter::once(bullet.content).chain(continuation) {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    Ok(ListItem { paragraphs })
}

/// The first item's marker decides whether the list is ordered and where it
/// starts; later markers are not checked.
pub struct ListParser;

impl TokenParser for ListParser {
    fn parse(&self, token: &MarkdownToken) -> Result<MarkdownObject, ParseError> {
        let children = token.children();
        let first = children
            .first()
            .ok_or_else(|| ParseError::malformed(TokenKind::List, "list has no items"))?;
        let marker = Bullet::match_line(leaf_content(first)?)
            .ok_or_else(|| ParseError::malformed(TokenKind::List, "first item has no bullet"))?
            .marker;
        let tight = first.kind() == TokenKind::TightListItem;
        let items = children
            .iter()
            .map(parse_list_item)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match marker {
            Marker::Numbered { start, .. } => MarkdownObject::OrderedList {
                tight,
                start,
                items,
            },
            Marker::Dash => MarkdownObject::UnorderedList {
                tight,
                bullet: '-',
                items,
            },
            Marker::Asterisk => MarkdownObject::UnorderedList {
                tight,
                bullet: '*',
                items,
            },
            Marker::Plus => MarkdownObject::UnorderedList {
                tight,
                bullet: '+',
                items,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::kinds::ListLexer;
    use crate::lexing::BlockLexer;
    use pretty_assertions::assert_eq;

    fn item(paragraphs: &[&str]) -> ListItem {
        ListItem {
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn parse_list(source: &str) -> MarkdownObject {
        let token = ListLexer.lex(source).unwrap();
        ListParser.parse(&token).unwrap()
    }

    #[test]
    fn ordered_list_starting_at_one() {
        assert_eq!(
            parse_list("1. A\n2. B\n3. C"),
            MarkdownObject::OrderedList {
                tight: true,
                start: 1,
                items: vec![item(&["A"]), item(&["B"]), item(&["C"])],
            }
        );
    }

    #[test]
    fn loose_list_keeps_item_paragraphs_apart() {
        assert_eq!(
            parse_list("- one\n\n  two\n- three"),
            MarkdownObject::UnorderedList {
                tight: false,
                bullet: '-',
                items: vec![item(&["one", "two"]), item(&["three"])],
            }
        );
    }

    #[test]
    fn lazy_line_joins_first_paragraph() {
        assert_eq!(
            parse_list("* item one\nlazy continuation\n\n* item two"),
            MarkdownObject::UnorderedList {
                tight: false,
                bullet: '*',
                items: vec![
                    item(&["item one\nlazy continuation"]),
                    item(&["item two"])
                ],
            }
        );
    }

    #[test]
    fn ordered_start_comes_from_first_item() {
        let MarkdownObject::OrderedList { start, .. } = parse_list("7) x\n8) y") else {
            panic!("expected an ordered list");
        };
        assert_eq!(start, 7);
    }

    #[test]
    fn header_text_is_trimmed() {
        let token = MarkdownToken::leaf(TokenKind::AtxHeader, "##  Title ##\n");
        assert_eq!(
            AtxHeaderParser.parse(&token),
            Ok(MarkdownObject::AtxHeader {
                level: 2,
                text: "Title".to_string()
            })
        );
    }

    #[test]
    fn empty_container_is_malformed() {
        let token = MarkdownToken::Container {
            kind: TokenKind::List,
            children: Vec::new(),
            consumed: 0,
        };
        assert!(matches!(
            ListParser.parse(&token),
            Err(ParseError::MalformedToken { .. })
        ));
    }
}
