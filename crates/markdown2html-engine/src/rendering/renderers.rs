use crate::inline::{BLOCK_STAGES, HEADING_STAGES, render_inline};
use crate::parsing::{ListItem, MarkdownObject};

use super::engine::{ObjectRenderer, RenderError};

fn unexpected(renderer: &'static str, object: &MarkdownObject) -> RenderError {
    RenderError::UnexpectedObject {
        renderer,
        found: object.kind(),
    }
}

pub struct ParagraphRenderer;

impl ObjectRenderer for ParagraphRenderer {
    fn render(&self, object: &MarkdownObject) -> Result<String, RenderError> {
        let MarkdownObject::Paragraph { content } = object else {
            return Err(unexpected("paragraph", object));
        };
        Ok(format!("<p>{}</p>\n", render_inline(content, BLOCK_STAGES)))
    }
}

pub struct AtxHeaderRenderer;

impl ObjectRenderer for AtxHeaderRenderer {
    fn render(&self, object: &MarkdownObject) -> Result<String, RenderError> {
        let MarkdownObject::AtxHeader { level, text } = object else {
            return Err(unexpected("atx-header", object));
        };
        Ok(format!(
            "<h{level}>{}</h{level}>\n",
            render_inline(text, HEADING_STAGES)
        ))
    }
}

/// Blank lines only separate blocks, and every block ends with a newline.
pub struct EmptyLineRenderer;

impl ObjectRenderer for EmptyLineRenderer {
    fn render(&self, object: &MarkdownObject) -> Result<String, RenderError> {
        match object {
            MarkdownObject::EmptyLine => Ok(String::new()),
            other => Err(unexpected("empty-line", other)),
        }
    }
}

/// Renders both list flavours. Tight items inline their text; loose items
/// wrap each paragraph in `<p>`.
pub struct ListRenderer;

impl ListRenderer {
    fn render_item(item: &ListItem, tight: bool) -> String {
        if tight {
            let text = item.paragraphs.join("\n");
            return format!("<li>{}</li>\n", render_inline(&text, BLOCK_STAGES));
        }
        let mut html = String::from("<li>\n");
        for paragraph in &item.paragraphs {
            html.push_str(&format!(
                "<p>{}</p>\n",
                render_inline(paragraph, BLOCK_STAGES)
            ));
        }
        html.push_str("</li>\n");
        html
    }

    fn render_items(open: &str, close: &str, items: &[ListItem], tight: bool) -> String {
        let mut html = format!("{open}\n");
        for item in items {
            html.push_str(&Self::render_item(item, tight));
        }
        html.push_str(close);
        html.push('\n');
        html
    }
}

impl ObjectRenderer for ListRenderer {
    fn render(&self, object: &MarkdownObject) -> Result<String, RenderError> {
        match object {
            MarkdownObject::UnorderedList { tight, items, .. } => {
                Ok(Self::render_items("<ul>", "</ul>", items, *tight))
            }
            MarkdownObject::OrderedList {
                tight,
                start,
                items,
            } => {
                let open = if *start == 1 {
                    "<ol>".to_string()
                } else {
                    format!("<ol start=\"{start}\">")
                };
                Ok(Self::render_items(&open, "</ol>", items, *tight))
            }
            other => Err(unexpected("list", other)),
        }
    }
}
