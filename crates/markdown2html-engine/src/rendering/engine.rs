use std::collections::HashMap;

use crate::parsing::{MarkdownObject, ObjectKind};

use super::renderers::{AtxHeaderRenderer, EmptyLineRenderer, ListRenderer, ParagraphRenderer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no renderer registered for {0:?} objects")]
    NoRenderer(ObjectKind),
    #[error("{renderer} renderer cannot render {found:?}")]
    UnexpectedObject {
        renderer: &'static str,
        found: ObjectKind,
    },
}

pub trait ObjectRenderer: Send + Sync {
    fn render(&self, object: &MarkdownObject) -> Result<String, RenderError>;
}

/// Maps each object kind to its HTML renderer.
pub struct RenderEngine {
    renderers: HashMap<ObjectKind, Box<dyn ObjectRenderer>>,
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl RenderEngine {
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    pub fn standard() -> Self {
        Self::empty()
            .with_renderer(ObjectKind::Paragraph, ParagraphRenderer)
            .with_renderer(ObjectKind::AtxHeader, AtxHeaderRenderer)
            .with_renderer(ObjectKind::EmptyLine, EmptyLineRenderer)
            .with_renderer(ObjectKind::OrderedList, ListRenderer)
            .with_renderer(ObjectKind::UnorderedList, ListRenderer)
    }

    pub fn with_renderer(
        mut self,
        kind: ObjectKind,
        renderer: impl ObjectRenderer + 'static,
    ) -> Self {
        let renderer: Box<dyn ObjectRenderer> = Box::new(renderer);
        self.renderers.insert(kind, renderer);
        self
    }

    pub fn render_object(&self, object: &MarkdownObject) -> Result<String, RenderError> {
        let renderer = self
            .renderers
            .get(&object.kind())
            .ok_or(RenderError::NoRenderer(object.kind()))?;
        renderer.render(object)
    }

    /// Concatenates the HTML of every object, logging and skipping failures.
    pub fn render(&self, objects: &[MarkdownObject]) -> String {
        let mut html = String::new();
        for object in objects {
            match self.render_object(object) {
                Ok(fragment) => html.push_str(&fragment),
                Err(e) => log::error!("skipping object: {e}"),
            }
        }
        html
    }
}
