use regex::Regex;
use std::sync::LazyLock;

static STAR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*+").unwrap());
static UNDERSCORE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Emphasis delimiter characters. Each kind is resolved in its own pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    Star,
    Underscore,
}

impl DelimiterKind {
    /// Pass order used by the resolver: stars first, then underscores.
    pub const RESOLUTION_ORDER: [DelimiterKind; 2] =
        [DelimiterKind::Star, DelimiterKind::Underscore];

    pub fn marker(self) -> char {
        match self {
            DelimiterKind::Star => '*',
            DelimiterKind::Underscore => '_',
        }
    }

    /// `*` may open or close in the middle of a word, `_` may not.
    pub fn allows_intraword(self) -> bool {
        matches!(self, DelimiterKind::Star)
    }

    pub(crate) fn run_pattern(self) -> &'static Regex {
        match self {
            DelimiterKind::Star => &STAR_RUN,
            DelimiterKind::Underscore => &UNDERSCORE_RUN,
        }
    }
}

/// What a delimiter run is able to do, given its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DelimiterPotential {
    pub opener: bool,
    pub closer: bool,
}

impl DelimiterPotential {
    pub const NONE: DelimiterPotential = DelimiterPotential {
        opener: false,
        closer: false,
    };

    pub fn is_none(self) -> bool {
        !self.opener && !self.closer
    }
}

/// Punctuation as seen by the flanking rules: ASCII and Latin-1 punctuation
/// plus the general and CJK punctuation blocks.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '¡' | '§' | '«' | '¶' | '·' | '»' | '¿'
                | '\u{2010}'..='\u{2027}'
                | '\u{2030}'..='\u{205E}'
                | '\u{3000}'..='\u{303F}'
        )
}

/// Missing neighbours (line start/end) count as whitespace.
fn is_boundary(c: Option<char>) -> bool {
    c.is_none_or(|c| c.is_whitespace() || is_punctuation(c))
}

fn last_char(fragment: Option<&str>) -> Option<char> {
    fragment.and_then(|s| s.chars().next_back())
}

fn first_char(fragment: Option<&str>) -> Option<char> {
    fragment.and_then(|s| s.chars().next())
}

/// Whether a run sitting between `prev` and `next` may open emphasis.
pub fn can_open(prev: Option<&str>, next: Option<&str>, allow_intraword: bool) -> bool {
    let before = last_char(prev);
    let Some(after) = first_char(next) else {
        return false;
    };
    if after.is_whitespace() {
        return false;
    }
    let before_is_boundary = is_boundary(before);
    if !allow_intraword && !before_is_boundary {
        return false;
    }
    !is_punctuation(after) || before_is_boundary
}

/// Whether a run sitting between `prev` and `next` may close emphasis.
pub fn can_close(prev: Option<&str>, next: Option<&str>, allow_intraword: bool) -> bool {
    let after = first_char(next);
    let Some(before) = last_char(prev) else {
        return false;
    };
    if before.is_whitespace() {
        return false;
    }
    let after_is_boundary = is_boundary(after);
    if !allow_intraword && !after_is_boundary {
        return false;
    }
    !is_punctuation(before) || after_is_boundary
}

pub fn classify(prev: Option<&str>, next: Option<&str>, kind: DelimiterKind) -> DelimiterPotential {
    let intraword = kind.allows_intraword();
    DelimiterPotential {
        opener: can_open(prev, next, intraword),
        closer: can_close(prev, next, intraword),
    }
}
