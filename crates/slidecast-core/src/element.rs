//! Slide element model: typed, positioned, sized content items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Fallback size in pixels when a committed width/height is unusable.
pub const SIZE_FALLBACK: u32 = 100;

/// Default element width in pixels.
pub const DEFAULT_WIDTH: u32 = 200;

/// Default height for text elements (advisory; text height is intrinsic).
pub const DEFAULT_TEXT_HEIGHT: u32 = 50;

/// Default height for media elements.
pub const DEFAULT_MEDIA_HEIGHT: u32 = 150;

/// Placeholder content for freshly added text elements.
pub const TEXT_PLACEHOLDER: &str = "Enter text here";

/// The kind of content an element carries.
///
/// A closed set: the kind determines the renderer and the default size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Literal text; `content` is the text itself.
    Text,
    /// Still image; `content` is a resource locator.
    Image,
    /// Video clip; `content` is a resource locator.
    Video,
    /// Presenter avatar; `content` is a resource locator.
    Avatar,
}

impl ElementKind {
    /// Default size for a freshly created element of this kind.
    pub fn default_size(&self) -> Size {
        match self {
            ElementKind::Text => Size::new(DEFAULT_WIDTH, DEFAULT_TEXT_HEIGHT),
            _ => Size::new(DEFAULT_WIDTH, DEFAULT_MEDIA_HEIGHT),
        }
    }

    /// Default content when none is supplied at creation.
    pub fn placeholder_content(&self) -> &'static str {
        match self {
            ElementKind::Text => TEXT_PLACEHOLDER,
            _ => "",
        }
    }
}

/// Element center as a percentage of the slide surface.
///
/// Both axes are kept in `[0, 100]`; every constructor and update clamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a position, clamping both axes into `[0, 100]`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// The slide center.
    pub fn center() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::center()
    }
}

/// Clamp a percentage coordinate into `[0, 100]`.
///
/// Non-finite input (a degenerate surface divides by zero) clamps to 0.
fn clamp_percent(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Element box size in pixels.
///
/// Height is advisory for text elements, whose rendered height is intrinsic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a size from already-valid pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Sanitize a committed numeric dimension.
    ///
    /// Non-finite or non-positive values take the fallback of 100; this is a
    /// local recovery, never an error.
    pub fn sanitize_px(value: f64) -> u32 {
        if value.is_finite() && value >= 1.0 {
            value as u32
        } else {
            SIZE_FALLBACK
        }
    }
}

/// A single placeable item on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable identity, minted at creation and never reused.
    pub id: ElementId,
    /// Content kind.
    pub kind: ElementKind,
    /// Text or resource locator; empty means "no content yet".
    pub content: String,
    /// Center position in surface percent.
    pub position: Position,
    /// Box size in pixels.
    pub size: Size,
}

impl Element {
    /// Create an element with default geometry at the slide center.
    ///
    /// When `content` is omitted, text elements get a placeholder and media
    /// elements start empty.
    pub fn new(kind: ElementKind, content: Option<&str>) -> Self {
        let content = match content {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => kind.placeholder_content().to_string(),
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            content,
            position: Position::center(),
            size: kind.default_size(),
        }
    }

    /// Whether the rendered height is intrinsic rather than the stored one.
    pub fn has_intrinsic_height(&self) -> bool {
        self.kind == ElementKind::Text
    }
}
