#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Paragraph,
    AtxHeader,
    EmptyLine,
    OrderedList,
    UnorderedList,
}

/// One list item, split into the chunks separated by blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownObject {
    Paragraph {
        content: String,
    },
    AtxHeader {
        level: u8,
        text: String,
    },
    EmptyLine,
    OrderedList {
        tight: bool,
        start: u32,
        items: Vec<ListItem>,
    },
    UnorderedList {
        tight: bool,
        bullet: char,
        items: Vec<ListItem>,
    },
}

impl MarkdownObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            MarkdownObject::Paragraph { .. } => ObjectKind::Paragraph,
            MarkdownObject::AtxHeader { .. } => ObjectKind::AtxHeader,
            MarkdownObject::EmptyLine => ObjectKind::EmptyLine,
            MarkdownObject::OrderedList { .. } => ObjectKind::OrderedList,
            MarkdownObject::UnorderedList { .. } => ObjectKind::UnorderedList,
        }
    }
}
