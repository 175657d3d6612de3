pub mod bullet;
pub mod item_machine;

pub use bullet::{Bullet, BulletMatch, Marker};
pub use item_machine::{ItemData, ItemState, LexedItem, Transition, lex_list_item, step};

use crate::lexing::engine::BlockLexer;
use crate::lexing::token::{MarkdownToken, TokenKind};

/// A run of consecutive list items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock<'a> {
    pub consumed: usize,
    pub items: Vec<LexedItem<'a>>,
    pub is_tight: bool,
}

impl ListBlock<'_> {
    pub fn item_spans(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text).collect()
    }
}

/// Lexes items until one fails to start. `None` if the first one fails.
///
/// The list is loose when any item holds a blank line between its blocks, or
/// when a blank line separates two items. Blank lines trailing the last item
/// do not count.
pub fn lex_list_block(remainder: &str) -> Option<ListBlock<'_>> {
    let mut items = Vec::new();
    let mut offset = 0;
    while let Some(item) = lex_list_item(&remainder[offset..]) {
        offset += item.text.len();
        items.push(item);
    }
    let last = items.len().checked_sub(1)?;
    let is_tight = !items
        .iter()
        .enumerate()
        .any(|(i, item)| item.has_loose_content || (i != last && !item.is_tight));
    Some(ListBlock {
        consumed: offset,
        items,
        is_tight,
    })
}

/// Wraps a [`ListBlock`] into a `List` container whose children are
/// `TightListItem` or `LooseListItem` leaves.
pub struct ListLexer;

impl BlockLexer for ListLexer {
    fn name(&self) -> &'static str {
        "list"
    }

    fn lex(&self, remainder: &str) -> Option<MarkdownToken> {
        let block = lex_list_block(remainder)?;
        let item_kind = if block.is_tight {
            TokenKind::TightListItem
        } else {
            TokenKind::LooseListItem
        };
        let children = block
            .items
            .iter()
            .map(|item| MarkdownToken::leaf(item_kind, item.text))
            .collect();
        Some(MarkdownToken::Container {
            kind: TokenKind::List,
            children,
            consumed: block.consumed,
        })
    }
}
