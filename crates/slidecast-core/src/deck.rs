//! Deck state and editing operations.
//!
//! The deck is the single source of truth the presentation surface renders
//! from: an ordered sequence of slides, a current-slide cursor, and a
//! selected-element cursor. Every operation runs to completion inside one
//! user-input callback; there are no await points here.

use crate::element::{Element, ElementId, ElementKind, Position, Size};
use crate::slide::{Background, Slide, SlideId};
use crate::template::Template;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for rejected deck operations.
///
/// These surface as non-fatal notices in the UI; the deck is left unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// The sole remaining slide may not be deleted.
    #[error("a deck needs at least one slide")]
    LastSlide,
    /// Slide index outside the deck.
    #[error("no slide at index {0}")]
    SlideOutOfBounds(usize),
    /// Stored deck data carried no slides at all.
    #[error("a deck must contain at least one slide")]
    Empty,
}

/// A partial element update.
///
/// Unset fields are left untouched; width/height carry the raw committed
/// value and are sanitized on apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementUpdate {
    /// Replacement content.
    pub content: Option<String>,
    /// Replacement position (clamped on construction).
    pub position: Option<Position>,
    /// Committed width in pixels, unsanitized.
    pub width: Option<f64>,
    /// Committed height in pixels, unsanitized.
    pub height: Option<f64>,
}

impl ElementUpdate {
    /// Update only the content.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Update only the position.
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Update only the width.
    pub fn width(width: f64) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    /// Update only the height.
    pub fn height(height: f64) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }
}

/// The full ordered collection of slides plus editing cursors.
///
/// Invariants: `slides` is never empty and `current` always indexes into it.
/// Deserialization goes through [`DeckRepr`] so stored data cannot smuggle
/// in a deck that violates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DeckRepr")]
pub struct Deck {
    /// Slides in presentation order.
    slides: Vec<Slide>,
    /// Index of the slide being edited.
    current: usize,
    /// Selected element within the current slide, if any.
    #[serde(skip)]
    selected: Option<ElementId>,
}

/// Raw serialized deck shape, validated before it becomes a [`Deck`].
#[derive(Debug, Deserialize)]
struct DeckRepr {
    slides: Vec<Slide>,
    #[serde(default)]
    current: usize,
}

impl TryFrom<DeckRepr> for Deck {
    type Error = DeckError;

    /// Reject deck data with no slides; clamp a stale cursor back into
    /// bounds rather than letting it panic later.
    fn try_from(repr: DeckRepr) -> Result<Self, Self::Error> {
        if repr.slides.is_empty() {
            return Err(DeckError::Empty);
        }
        let current = repr.current.min(repr.slides.len() - 1);
        Ok(Self {
            slides: repr.slides,
            current,
            selected: None,
        })
    }
}

impl Deck {
    /// Create a deck with one empty slide.
    pub fn new() -> Self {
        Self {
            slides: vec![Slide::new()],
            current: 0,
            selected: None,
        }
    }

    /// All slides in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides. Always at least 1.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// A deck is never empty; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the current slide.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The slide being edited.
    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    fn current_slide_mut(&mut self) -> &mut Slide {
        &mut self.slides[self.current]
    }

    /// The selected element's id, if any.
    pub fn selected_element(&self) -> Option<ElementId> {
        self.selected
    }

    /// Move the editing cursor. Out-of-bounds indices are rejected.
    pub fn goto_slide(&mut self, index: usize) -> Result<(), DeckError> {
        if index >= self.slides.len() {
            return Err(DeckError::SlideOutOfBounds(index));
        }
        self.current = index;
        self.selected = None;
        Ok(())
    }

    /// Append a new empty slide and make it current. Always succeeds.
    pub fn add_slide(&mut self) -> SlideId {
        let slide = Slide::new();
        let id = slide.id;
        self.slides.push(slide);
        self.current = self.slides.len() - 1;
        self.selected = None;
        log::debug!("added slide {} ({} total)", id, self.slides.len());
        id
    }

    /// Remove the slide at `index`.
    ///
    /// Rejected when only one slide remains; the cursor is re-clamped when
    /// the deletion would leave it out of bounds.
    pub fn delete_slide(&mut self, index: usize) -> Result<(), DeckError> {
        if self.slides.len() == 1 {
            log::warn!("refusing to delete the last slide");
            return Err(DeckError::LastSlide);
        }
        if index >= self.slides.len() {
            return Err(DeckError::SlideOutOfBounds(index));
        }
        let focused = self.current_slide().id;
        self.slides.remove(index);
        if self.current >= self.slides.len() {
            self.current = self.slides.len() - 1;
        }
        // The cursor may now point at a different slide; a stale selection
        // would dangle into it.
        if self.current_slide().id != focused {
            self.selected = None;
        }
        Ok(())
    }

    /// Replace the slide at `index` wholesale.
    ///
    /// Bounds-checked only; callers are expected to preserve the id.
    pub fn update_slide(&mut self, index: usize, slide: Slide) -> Result<(), DeckError> {
        if index >= self.slides.len() {
            return Err(DeckError::SlideOutOfBounds(index));
        }
        self.slides[index] = slide;
        Ok(())
    }

    /// Add an element to the current slide and select it.
    ///
    /// The element gets a fresh identity, default geometry at the slide
    /// center, and a kind-specific placeholder when `content` is omitted.
    pub fn add_element(&mut self, kind: ElementKind, content: Option<&str>) -> ElementId {
        let element = Element::new(kind, content);
        let id = element.id;
        self.current_slide_mut().elements.push(element);
        self.selected = Some(id);
        id
    }

    /// Merge a partial update into the matching element of the current slide.
    ///
    /// A silent no-op when no element matches. Size fields are sanitized:
    /// non-positive or non-numeric commits fall back to 100 px.
    pub fn update_element(&mut self, id: ElementId, update: ElementUpdate) {
        let Some(el) = self.current_slide_mut().element_mut(id) else {
            return;
        };
        if let Some(content) = update.content {
            el.content = content;
        }
        if let Some(position) = update.position {
            el.position = Position::new(position.x, position.y);
        }
        if let Some(width) = update.width {
            el.size.width = Size::sanitize_px(width);
        }
        if let Some(height) = update.height {
            el.size.height = Size::sanitize_px(height);
        }
    }

    /// Remove an element from the current slide, clearing the selection if
    /// it pointed there.
    pub fn delete_element(&mut self, id: ElementId) {
        self.current_slide_mut().remove_element(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Replace the current slide's background.
    pub fn set_background(&mut self, background: Background) {
        self.current_slide_mut().background = Some(background);
    }

    /// Revert the current slide to the default surface color.
    pub fn clear_background(&mut self) {
        self.current_slide_mut().background = None;
    }

    /// Set or clear the selected element.
    ///
    /// Clicking the slide surface background clears the selection.
    pub fn select_element(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }

    /// Install a deep copy of a template as the current slide.
    ///
    /// The copy gets fresh identities so catalog state never leaks into the
    /// deck. The selection is cleared.
    pub fn apply_template(&mut self, template: &Template) {
        let slide = template.instantiate();
        log::debug!("applying template '{}' to slide {}", template.name, self.current);
        self.slides[self.current] = slide;
        self.selected = None;
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
