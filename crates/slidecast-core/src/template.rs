//! Pre-built slide templates.
//!
//! The catalog is read-only; applying a template always goes through
//! [`Template::instantiate`], which deep-copies the blueprint with fresh
//! identities so edits to one deck can never reach the catalog or another
//! deck.

use crate::element::{Element, ElementKind, Position, Size};
use crate::slide::{Background, Slide};
use std::sync::LazyLock;
use uuid::Uuid;

/// A named, immutable slide blueprint.
#[derive(Debug, Clone)]
pub struct Template {
    /// Stable catalog key, e.g. `"title"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short description for the picker UI.
    pub description: &'static str,
    slide: Slide,
}

impl Template {
    /// The blueprint slide. Read-only; use [`instantiate`](Self::instantiate)
    /// to get an editable copy.
    pub fn slide(&self) -> &Slide {
        &self.slide
    }

    /// Deep-copy the blueprint with regenerated slide and element ids.
    pub fn instantiate(&self) -> Slide {
        let mut slide = self.slide.clone();
        slide.regenerate_ids();
        slide
    }

    /// The built-in template catalog.
    pub fn catalog() -> &'static [Template] {
        &CATALOG
    }

    /// Look up a catalog template by its key.
    pub fn by_id(id: &str) -> Option<&'static Template> {
        CATALOG.iter().find(|t| t.id == id)
    }
}

fn text_at(content: &str, x: f64, y: f64, width: u32, height: u32) -> Element {
    Element {
        id: Uuid::new_v4(),
        kind: ElementKind::Text,
        content: content.to_string(),
        position: Position::new(x, y),
        size: Size::new(width, height),
    }
}

fn avatar_at(x: f64, y: f64) -> Element {
    Element {
        id: Uuid::new_v4(),
        kind: ElementKind::Avatar,
        content: String::new(),
        position: Position::new(x, y),
        size: Size::new(100, 100),
    }
}

fn blueprint(background: Option<Background>, elements: Vec<Element>) -> Slide {
    Slide {
        id: Uuid::new_v4(),
        background,
        elements,
    }
}

static CATALOG: LazyLock<Vec<Template>> = LazyLock::new(|| {
    vec![
        Template {
            id: "title",
            name: "Title Slide",
            description: "Perfect for opening slides",
            slide: blueprint(
                Some(Background::Gradient(
                    "linear-gradient(135deg, #4f46e5, #9333ea)".into(),
                )),
                vec![
                    text_at("Presentation Title", 50.0, 40.0, 500, 60),
                    text_at("Subtitle goes here", 50.0, 55.0, 400, 40),
                ],
            ),
        },
        Template {
            id: "content",
            name: "Content Slide",
            description: "Standard content layout",
            slide: blueprint(
                None,
                vec![
                    text_at("Slide Title", 50.0, 20.0, 400, 50),
                    text_at("\u{2022} Key point 1", 30.0, 40.0, 300, 40),
                    text_at("\u{2022} Key point 2", 30.0, 55.0, 300, 40),
                    text_at("\u{2022} Key point 3", 30.0, 70.0, 300, 40),
                ],
            ),
        },
        Template {
            id: "comparison",
            name: "Comparison Slide",
            description: "Compare two items side by side",
            slide: blueprint(
                Some(Background::Color("#1e293b".into())),
                vec![
                    text_at("Comparison", 50.0, 15.0, 400, 50),
                    text_at("Option A", 25.0, 35.0, 200, 40),
                    text_at("Option B", 75.0, 35.0, 200, 40),
                    text_at("Details about A", 25.0, 55.0, 200, 80),
                    text_at("Details about B", 75.0, 55.0, 200, 80),
                ],
            ),
        },
        Template {
            id: "team",
            name: "Team Slide",
            description: "Showcase team members",
            slide: blueprint(
                None,
                vec![
                    text_at("Our Team", 50.0, 15.0, 400, 50),
                    avatar_at(25.0, 50.0),
                    text_at("Team Member 1", 25.0, 70.0, 150, 30),
                    avatar_at(50.0, 50.0),
                    text_at("Team Member 2", 50.0, 70.0, 150, 30),
                    avatar_at(75.0, 50.0),
                    text_at("Team Member 3", 75.0, 70.0, 150, 30),
                ],
            ),
        },
    ]
});
