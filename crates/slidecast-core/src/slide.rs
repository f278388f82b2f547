//! Slide model: an ordered element sequence plus an optional background.

use crate::element::{Element, ElementId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for slides.
pub type SlideId = Uuid;

/// Background descriptor for a slide.
///
/// Absent background means the default surface color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Background {
    /// Solid color, e.g. `#1a1a1a`.
    Color(String),
    /// CSS-style gradient string.
    Gradient(String),
    /// Image locator.
    Image(String),
}

impl Background {
    /// Render the CSS background value.
    pub fn css(&self) -> String {
        match self {
            Background::Color(c) | Background::Gradient(c) => c.clone(),
            Background::Image(url) => format!("url({})", url),
        }
    }
}

/// An ordered collection of elements plus a background.
///
/// Element order is z-order: front-most last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Unique identity.
    pub id: SlideId,
    /// Optional background descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    /// Elements in rendering order.
    pub elements: Vec<Element>,
}

impl Slide {
    /// Create an empty slide with no background.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            background: None,
            elements: Vec::new(),
        }
    }

    /// Find an element by id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// Find an element by id, mutably.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// Remove an element by id. Returns the removed element, if any.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let pos = self.elements.iter().position(|el| el.id == id)?;
        Some(self.elements.remove(pos))
    }

    /// Mint fresh identities for the slide and all its elements.
    ///
    /// Used when cloning a template so the copy never collides with the
    /// catalog or an existing slide.
    pub fn regenerate_ids(&mut self) {
        self.id = Uuid::new_v4();
        for el in &mut self.elements {
            el.id = Uuid::new_v4();
        }
    }
}

impl Default for Slide {
    fn default() -> Self {
        Self::new()
    }
}
