#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    AtxHeader,
    EmptyLine,
    Paragraph,
    List,
    TightListItem,
    LooseListItem,
}

/// Output of the block lexers.
///
/// Leaf tokens hold the exact source text they consumed; containers hold
/// their children plus the number of source bytes the whole container took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownToken {
    Leaf {
        kind: TokenKind,
        content: String,
    },
    Container {
        kind: TokenKind,
        children: Vec<MarkdownToken>,
        consumed: usize,
    },
}

impl MarkdownToken {
    pub fn leaf(kind: TokenKind, content: impl Into<String>) -> Self {
        MarkdownToken::Leaf {
            kind,
            content: content.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            MarkdownToken::Leaf { kind, .. } | MarkdownToken::Container { kind, .. } => *kind,
        }
    }

    /// Source bytes this token accounts for.
    pub fn consumed(&self) -> usize {
        match self {
            MarkdownToken::Leaf { content, .. } => content.len(),
            MarkdownToken::Container { consumed, .. } => *consumed,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            MarkdownToken::Leaf { content, .. } => Some(content),
            MarkdownToken::Container { .. } => None,
        }
    }

    pub fn children(&self) -> &[MarkdownToken] {
        match self {
            MarkdownToken::Leaf { .. } => &[],
            MarkdownToken::Container { children, .. } => children,
        }
    }
}
