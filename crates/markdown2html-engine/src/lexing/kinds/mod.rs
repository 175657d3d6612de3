pub mod atx_header;
pub mod empty_line;
pub mod list;
pub mod paragraph;

pub use atx_header::{AtxHeader, AtxHeaderLexer, AtxMatch};
pub use empty_line::EmptyLineLexer;
pub use list::{Bullet, ListLexer, Marker, lex_list_block};
pub use paragraph::{Paragraph, ParagraphLexer};
