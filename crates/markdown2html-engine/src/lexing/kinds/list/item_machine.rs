//! Priority-ordered state machine that lexes a single list item.
//!
//! States are tried in [`ItemState::PRIORITY`] order against the remaining
//! text. The first one that accepts consumes text and updates [`ItemData`],
//! then the scan restarts from the top. Lexing ends when nothing accepts.
//!
//! `Start -> BulletLine -> (EmptyLines | LooseContentLine)* -> done`

use crate::lexing::kinds::paragraph::Paragraph;
use crate::lexing::lines::lines_with_offsets;

use super::bullet::Bullet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Start,
    BulletLine,
    EmptyLines,
    LooseContentLine,
}

impl ItemState {
    pub const PRIORITY: [ItemState; 3] = [
        ItemState::BulletLine,
        ItemState::EmptyLines,
        ItemState::LooseContentLine,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemData<'a> {
    pub remaining: &'a str,
    pub legal_padding: usize,
    pub preceded_by_empty: bool,
    pub is_tight: bool,
}

impl<'a> ItemData<'a> {
    pub fn new(markdown: &'a str) -> Self {
        Self {
            remaining: markdown,
            legal_padding: 0,
            preceded_by_empty: false,
            is_tight: true,
        }
    }

    fn advance(self, consumed: usize) -> Self {
        Self {
            remaining: &self.remaining[consumed..],
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<'a> {
    pub state: ItemState,
    pub data: ItemData<'a>,
    pub consumed: usize,
}

/// Bytes of the leading lines that continue the current paragraph: non-blank
/// and not starting a new block.
fn continuation_len(text: &str) -> usize {
    lines_with_offsets(text)
        .take_while(|line| {
            !line.is_blank() && !Paragraph::interrupted_by(&text[line.start..])
        })
        .last()
        .map_or(0, |line| line.end())
}

fn blank_run_len(text: &str) -> usize {
    lines_with_offsets(text)
        .take_while(|line| line.is_blank() && line.text.ends_with('\n'))
        .last()
        .map_or(0, |line| line.end())
}

fn padded_content_line(data: &ItemData<'_>) -> bool {
    let padding = data.legal_padding;
    let indented = data
        .remaining
        .as_bytes()
        .get(..padding)
        .is_some_and(|prefix| prefix.iter().all(|&b| b == b' '));
    indented
        && lines_with_offsets(&data.remaining[padding..])
            .next()
            .is_some_and(|line| !line.is_blank())
}

/// Runs `candidate` against `data`, returning the updated data if it accepts.
fn fire<'a>(
    candidate: ItemState,
    current: ItemState,
    data: ItemData<'a>,
) -> Option<ItemData<'a>> {
    match candidate {
        ItemState::BulletLine => {
            if current != ItemState::Start {
                return None;
            }
            let bullet = Bullet::match_line(data.remaining)?;
            let after = &data.remaining[bullet.consumed..];
            let consumed = bullet.consumed + continuation_len(after);
            Some(ItemData {
                legal_padding: bullet.legal_padding,
                ..data.advance(consumed)
            })
        }
        ItemState::EmptyLines => {
            if current == ItemState::Start {
                return None;
            }
            let consumed = blank_run_len(data.remaining);
            (consumed > 0).then(|| ItemData {
                preceded_by_empty: true,
                is_tight: false,
                ..data.advance(consumed)
            })
        }
        ItemState::LooseContentLine => {
            if current == ItemState::Start
                || !data.preceded_by_empty
                || !padded_content_line(&data)
            {
                return None;
            }
            let first = lines_with_offsets(data.remaining).next()?;
            let consumed = first.end() + continuation_len(&data.remaining[first.end()..]);
            Some(ItemData {
                preceded_by_empty: false,
                ..data.advance(consumed)
            })
        }
        ItemState::Start => None,
    }
}

/// Pure transition: the first state in priority order that accepts wins.
pub fn step<'a>(current: ItemState, data: ItemData<'a>) -> Option<Transition<'a>> {
    ItemState::PRIORITY.into_iter().find_map(|candidate| {
        fire(candidate, current, data).map(|next| Transition {
            state: candidate,
            consumed: data.remaining.len() - next.remaining.len(),
            data: next,
        })
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexedItem<'a> {
    /// Raw source of the item, bullet line and trailing blank lines included.
    pub text: &'a str,
    pub legal_padding: usize,
    /// False once a blank line was seen inside or after the item.
    pub is_tight: bool,
    /// A blank line was followed by more indented content.
    pub has_loose_content: bool,
}

/// Lexes one list item from the start of `markdown`.
///
/// Returns `None` when the text does not start with a bullet line.
pub fn lex_list_item(markdown: &str) -> Option<LexedItem<'_>> {
    let mut state = ItemState::Start;
    let mut data = ItemData::new(markdown);
    let mut has_loose_content = false;

    while let Some(transition) = step(state, data) {
        log::trace!(
            "list item: {:?} consumed {} bytes",
            transition.state,
            transition.consumed
        );
        has_loose_content |= transition.state == ItemState::LooseContentLine;
        state = transition.state;
        data = transition.data;
    }

    if state == ItemState::Start {
        return None;
    }
    let consumed = markdown.len() - data.remaining.len();
    Some(LexedItem {
        text: &markdown[..consumed],
        legal_padding: data.legal_padding,
        is_tight: data.is_tight,
        has_loose_content,
    })
}
