//! Presentation surface geometry.
//!
//! Maps percentage positions to pixels and pointer drag gestures back to
//! positions. This is the only geometry transform in the editor, so the
//! rules are strict: elements are visually centered on their anchor, and
//! drag conversion clamps *after* the percentage division, not before.

use crate::element::{Element, ElementId, Position};
use crate::slide::Slide;
use kurbo::{Point, Rect};

/// Pixel location of an element's visual center on a surface.
pub fn anchor_point(surface: Rect, position: Position) -> Point {
    Point::new(
        surface.x0 + surface.width() * position.x / 100.0,
        surface.y0 + surface.height() * position.y / 100.0,
    )
}

/// Pixel box of an element, centered on its anchor.
///
/// The box is offset by minus half its own size. For text elements the
/// stored height is advisory (rendered height is intrinsic); the frame
/// still uses it so hit areas stay predictable.
pub fn element_frame(surface: Rect, element: &Element) -> Rect {
    let center = anchor_point(surface, element.position);
    let w = element.size.width as f64;
    let h = element.size.height as f64;
    Rect::new(
        center.x - w / 2.0,
        center.y - h / 2.0,
        center.x + w / 2.0,
        center.y + h / 2.0,
    )
}

/// Convert a pointer release location into a percentage position.
///
/// `x = (pointer.x - surface.x0) / surface.width() * 100`, `y` analogously;
/// both axes clamp into `[0, 100]` after conversion, so pointers released
/// outside the surface land on its edge. A degenerate surface yields the
/// origin rather than NaN.
pub fn position_from_pointer(surface: Rect, pointer: Point) -> Position {
    let x = (pointer.x - surface.x0) / surface.width() * 100.0;
    let y = (pointer.y - surface.y0) / surface.height() * 100.0;
    Position::new(x, y)
}

/// Find the front-most element under a pointer, if any.
///
/// Elements later in the slide sequence render in front, so the scan runs
/// in reverse. A hit selects the element instead of deselecting on the
/// surface background.
pub fn element_at(surface: Rect, slide: &Slide, pointer: Point) -> Option<ElementId> {
    slide
        .elements
        .iter()
        .rev()
        .find(|el| element_frame(surface, el).contains(pointer))
        .map(|el| el.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementKind, Size};

    fn surface() -> Rect {
        Rect::new(100.0, 50.0, 900.0, 500.0)
    }

    #[test]
    fn test_corner_drags() {
        let s = surface();
        let top_left = position_from_pointer(s, Point::new(s.x0, s.y0));
        assert_eq!((top_left.x, top_left.y), (0.0, 0.0));

        let bottom_right = position_from_pointer(s, Point::new(s.x1, s.y1));
        assert_eq!((bottom_right.x, bottom_right.y), (100.0, 100.0));
    }

    #[test]
    fn test_outside_pointer_clamps() {
        let s = surface();
        let p = position_from_pointer(s, Point::new(s.x1 + 400.0, s.y0 - 300.0));
        assert_eq!((p.x, p.y), (100.0, 0.0));
    }

    #[test]
    fn test_midpoint_drag() {
        let s = surface();
        let p = position_from_pointer(s, Point::new(s.x0 + s.width() / 2.0, s.y0 + s.height() / 4.0));
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_surface_yields_origin() {
        let s = Rect::new(10.0, 10.0, 10.0, 10.0);
        let p = position_from_pointer(s, Point::new(42.0, 42.0));
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn test_anchor_round_trips_drag() {
        let s = surface();
        let pos = Position::new(37.5, 81.25);
        let anchor = anchor_point(s, pos);
        let back = position_from_pointer(s, anchor);
        assert!((back.x - pos.x).abs() < 1e-9);
        assert!((back.y - pos.y).abs() < 1e-9);
    }

    #[test]
    fn test_element_at_prefers_front_most() {
        let s = Rect::new(0.0, 0.0, 1000.0, 500.0);
        let mut slide = Slide::new();

        let mut back = Element::new(ElementKind::Image, None);
        back.position = Position::new(50.0, 50.0);
        back.size = Size::new(400, 300);
        let back_id = back.id;

        let mut front = Element::new(ElementKind::Text, None);
        front.position = Position::new(50.0, 50.0);
        front.size = Size::new(100, 50);
        let front_id = front.id;

        slide.elements.push(back);
        slide.elements.push(front);

        // Center hits both; the front-most wins.
        assert_eq!(element_at(s, &slide, Point::new(500.0, 250.0)), Some(front_id));
        // Off-center hits only the larger back element.
        assert_eq!(element_at(s, &slide, Point::new(350.0, 250.0)), Some(back_id));
        // The empty corner hits nothing, which deselects.
        assert_eq!(element_at(s, &slide, Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_element_frame_is_centered() {
        let s = Rect::new(0.0, 0.0, 1000.0, 500.0);
        let mut el = Element::new(ElementKind::Image, None);
        el.position = Position::new(50.0, 50.0);
        el.size = Size::new(200, 100);

        let frame = element_frame(s, &el);
        assert_eq!(frame, Rect::new(400.0, 200.0, 600.0, 300.0));
    }
}
