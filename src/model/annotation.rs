//! Annotation data model and geometric transforms.
//!
//! Every annotation variant carries two anchors, `start` and `end`. The
//! anchors are not required to be ordered (`end.x` may be smaller than
//! `start.x`); consumers normalize via min/abs when they need a bounding
//! box.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::model::style::{Color, Fill, StrokeStyle};
use crate::model::tool::AttributeUpdate;

/// An ordered annotation collection. Order is z-order: later entries draw
/// on top. Annotations are addressed by index while being edited.
pub type AnnotationList = Vec<Annotation>;

/// Line annotation sub-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// A plain line segment.
    Straight,
    /// A line with an arrowhead at the end anchor.
    Arrow,
}

/// Shape annotation sub-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rect,
    RoundedRect,
    Ellipse,
    /// Rendered as a cut-out in the overlay mask instead of a filled shape.
    SpotlightRect,
}

/// One of the four control points a user can drag to resize an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vertex {
    Start,
    End,
    /// The corner at (end.x, start.y). Dragging it moves only `start`;
    /// `end` stays pinned.
    StartPlusX,
    /// The corner at (start.x, end.y). Dragging it moves only `start`;
    /// `end` stays pinned.
    StartPlusY,
}

impl Vertex {
    /// Get all resize handles in drawing order.
    pub fn all() -> &'static [Vertex] {
        &[
            Vertex::Start,
            Vertex::End,
            Vertex::StartPlusX,
            Vertex::StartPlusY,
        ]
    }
}

/// A straight or arrow line between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub start: Point,
    pub end: Point,
    pub stroke_color: Color,
    pub stroke_style: StrokeStyle,
}

/// A rectangle, rounded rectangle, ellipse, or spotlight cut-out spanning
/// two opposite corners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub start: Point,
    pub end: Point,
    pub fill: Fill,
    pub stroke_color: Color,
    pub stroke_style: StrokeStyle,
}

/// Live sizing state of the content-editable buffer backing a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBufferState {
    /// Number of text rows the buffer has auto-expanded to.
    pub line_count: usize,
}

impl Default for EditBufferState {
    fn default() -> Self {
        Self { line_count: 1 }
    }
}

/// A text annotation spanning two opposite corners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub start: Point,
    pub end: Point,
    pub color: Color,
    pub font_size: u32,
    pub text: String,
    /// Rotation in radians around the box center.
    pub rotation: f64,
    #[serde(default)]
    pub edit_buffer: EditBufferState,
}

/// A persisted drawable object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Annotation {
    Line(Line),
    Shape(Shape),
    Text(TextBox),
}

impl Annotation {
    /// Display name for this annotation's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Annotation::Line(line) => match line.kind {
                LineKind::Straight => "line",
                LineKind::Arrow => "arrow",
            },
            Annotation::Shape(shape) => match shape.kind {
                ShapeKind::Rect => "rectangle",
                ShapeKind::RoundedRect => "rounded rectangle",
                ShapeKind::Ellipse => "ellipse",
                ShapeKind::SpotlightRect => "spotlight",
            },
            Annotation::Text(_) => "text",
        }
    }

    /// The first geometric anchor.
    pub fn start(&self) -> Point {
        match self {
            Annotation::Line(line) => line.start,
            Annotation::Shape(shape) => shape.start,
            Annotation::Text(text) => text.start,
        }
    }

    /// The second geometric anchor.
    pub fn end(&self) -> Point {
        match self {
            Annotation::Line(line) => line.end,
            Annotation::Shape(shape) => shape.end,
            Annotation::Text(text) => text.end,
        }
    }

    /// Replace both anchors, keeping everything else.
    pub fn with_anchors(&self, start: Point, end: Point) -> Annotation {
        let mut out = self.clone();
        match &mut out {
            Annotation::Line(line) => {
                line.start = start;
                line.end = end;
            }
            Annotation::Shape(shape) => {
                shape.start = start;
                shape.end = end;
            }
            Annotation::Text(text) => {
                text.start = start;
                text.end = end;
            }
        }
        out
    }

    /// Translate both anchors by the delta from `old_pos` to `new_pos`.
    pub fn translated(&self, old_pos: Point, new_pos: Point) -> Annotation {
        let dx = new_pos.x - old_pos.x;
        let dy = new_pos.y - old_pos.y;
        self.with_anchors(self.start().offset(dx, dy), self.end().offset(dx, dy))
    }

    /// Rewrite the anchor owned by `vertex` to `new_pos`.
    ///
    /// `StartPlusX`/`StartPlusY` move only the start anchor; the end anchor
    /// stays pinned (asymmetric-resize convention).
    pub fn resized(&self, vertex: Vertex, new_pos: Point) -> Annotation {
        match vertex {
            Vertex::Start | Vertex::StartPlusX | Vertex::StartPlusY => {
                self.with_anchors(new_pos, self.end())
            }
            Vertex::End => self.with_anchors(self.start(), new_pos),
        }
    }

    /// Replace the text content. No-op for non-text annotations.
    pub fn with_text(&self, new_text: impl Into<String>) -> Annotation {
        match self {
            Annotation::Text(text) => Annotation::Text(TextBox {
                text: new_text.into(),
                ..text.clone()
            }),
            _ => self.clone(),
        }
    }

    /// Replace the font size. No-op for non-text annotations.
    pub fn with_font_size(&self, font_size: u32) -> Annotation {
        match self {
            Annotation::Text(text) => Annotation::Text(TextBox {
                font_size,
                ..text.clone()
            }),
            _ => self.clone(),
        }
    }

    /// Replace the auto-expand buffer state. No-op for non-text annotations.
    pub fn with_auto_expand(&self, edit_buffer: EditBufferState) -> Annotation {
        match self {
            Annotation::Text(text) => Annotation::Text(TextBox {
                edit_buffer,
                ..text.clone()
            }),
            _ => self.clone(),
        }
    }

    /// Apply a toolbar attribute update to the matching attribute of this
    /// annotation. Updates that do not apply to the variant are no-ops.
    pub fn with_attribute(&self, update: AttributeUpdate) -> Annotation {
        let mut out = self.clone();
        match (&mut out, update) {
            (Annotation::Line(line), AttributeUpdate::StrokeColor(color)) => {
                line.stroke_color = color;
            }
            (Annotation::Line(line), AttributeUpdate::StrokeStyle(style)) => {
                line.stroke_style = style;
            }
            (Annotation::Shape(shape), AttributeUpdate::StrokeColor(color)) => {
                shape.stroke_color = color;
            }
            (Annotation::Shape(shape), AttributeUpdate::StrokeStyle(style)) => {
                shape.stroke_style = style;
            }
            (Annotation::Shape(shape), AttributeUpdate::Fill(fill)) => {
                // Spotlight shapes keep their mask-rendering fill
                if !shape.fill.is_spotlight() {
                    shape.fill = fill;
                }
            }
            (Annotation::Text(text), AttributeUpdate::StrokeColor(color)) => {
                text.color = color;
            }
            (Annotation::Text(text), AttributeUpdate::FontSize(font_size)) => {
                text.font_size = font_size;
            }
            _ => {}
        }
        out
    }

    /// Width of the unnormalized bounding box.
    pub fn width(&self) -> i32 {
        (self.end().x - self.start().x).abs()
    }

    /// Height of the unnormalized bounding box.
    pub fn height(&self) -> i32 {
        (self.end().y - self.start().y).abs()
    }

    /// Whether this annotation is a spotlight shape.
    pub fn is_spotlight(&self) -> bool {
        matches!(self, Annotation::Shape(shape) if shape.kind == ShapeKind::SpotlightRect)
    }

    /// Whether this annotation is a text box.
    pub fn is_text(&self) -> bool {
        matches!(self, Annotation::Text(_))
    }
}

/// Drawing-completion policy: a draw from `start` to `end` is kept unless
/// its bounding box is below `min` on both axes.
pub fn meets_min_draw_size(start: Point, end: Point, min: i32) -> bool {
    let width = (end.x - start.x).abs();
    let height = (end.y - start.y).abs();
    width >= min || height >= min
}

/// Index of the first spotlight shape in storage order, which determines
/// where the overlay mask is inserted in the render list. Spotlights are
/// re-sorted visually but never reordered in storage.
pub fn first_spotlight_index(annotations: &[Annotation]) -> Option<usize> {
    annotations.iter().position(Annotation::is_spotlight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::style::StrokeWidth;

    fn rect(start: Point, end: Point) -> Annotation {
        Annotation::Shape(Shape {
            kind: ShapeKind::Rect,
            start,
            end,
            fill: Fill::Empty,
            stroke_color: Color::RED,
            stroke_style: StrokeStyle::default(),
        })
    }

    fn line(start: Point, end: Point) -> Annotation {
        Annotation::Line(Line {
            kind: LineKind::Straight,
            start,
            end,
            stroke_color: Color::RED,
            stroke_style: StrokeStyle::default(),
        })
    }

    fn text(start: Point, end: Point) -> Annotation {
        Annotation::Text(TextBox {
            start,
            end,
            color: Color::BLACK,
            font_size: 20,
            text: String::new(),
            rotation: 0.0,
            edit_buffer: EditBufferState::default(),
        })
    }

    #[test]
    fn test_move_translates_both_anchors() {
        let moved = line(Point::new(1, 1), Point::new(5, 5))
            .translated(Point::new(1, 1), Point::new(3, 2));
        assert_eq!(moved.start(), Point::new(3, 2));
        assert_eq!(moved.end(), Point::new(7, 6));
    }

    #[test]
    fn test_resize_start_and_end() {
        let shape = rect(Point::new(0, 0), Point::new(10, 10));

        let resized = shape.resized(Vertex::Start, Point::new(5, 5));
        assert_eq!(resized.start(), Point::new(5, 5));
        assert_eq!(resized.end(), Point::new(10, 10));

        let resized = shape.resized(Vertex::End, Point::new(20, 20));
        assert_eq!(resized.start(), Point::new(0, 0));
        assert_eq!(resized.end(), Point::new(20, 20));
    }

    #[test]
    fn test_resize_plus_vertices_pin_end() {
        let shape = rect(Point::new(0, 0), Point::new(10, 10));
        for vertex in [Vertex::StartPlusX, Vertex::StartPlusY] {
            let resized = shape.resized(vertex, Point::new(3, 7));
            assert_eq!(resized.start(), Point::new(3, 7));
            assert_eq!(resized.end(), Point::new(10, 10));
        }
    }

    #[test]
    fn test_every_handle_moves_exactly_one_anchor() {
        let shape = rect(Point::new(0, 0), Point::new(10, 10));
        for &vertex in Vertex::all() {
            let resized = shape.resized(vertex, Point::new(3, 7));
            match vertex {
                Vertex::End => {
                    assert_eq!(resized.start(), shape.start());
                    assert_eq!(resized.end(), Point::new(3, 7));
                }
                _ => {
                    assert_eq!(resized.start(), Point::new(3, 7));
                    assert_eq!(resized.end(), shape.end());
                }
            }
        }
    }

    #[test]
    fn test_resize_preserves_style() {
        let shape = Annotation::Shape(Shape {
            kind: ShapeKind::Ellipse,
            start: Point::new(0, 0),
            end: Point::new(10, 10),
            fill: Fill::Solid(Color::BLUE),
            stroke_color: Color::GREEN,
            stroke_style: StrokeStyle::new(StrokeWidth::Thick, crate::model::style::LineDash::Dashed),
        });
        let resized = shape.resized(Vertex::End, Point::new(30, 5));
        match resized {
            Annotation::Shape(s) => {
                assert_eq!(s.kind, ShapeKind::Ellipse);
                assert_eq!(s.fill, Fill::Solid(Color::BLUE));
                assert_eq!(s.stroke_color, Color::GREEN);
            }
            _ => panic!("variant changed by resize"),
        }
    }

    #[test]
    fn test_text_updates_are_total() {
        let shape = rect(Point::new(0, 0), Point::new(10, 10));
        // Non-text variants reject text updates as no-ops
        assert_eq!(shape.with_text("hello"), shape);
        assert_eq!(shape.with_font_size(32), shape);

        let text = text(Point::new(0, 0), Point::new(100, 40));
        let updated = text.with_text("hello").with_font_size(32);
        match updated {
            Annotation::Text(t) => {
                assert_eq!(t.text, "hello");
                assert_eq!(t.font_size, 32);
            }
            _ => panic!("expected text annotation"),
        }
    }

    #[test]
    fn test_attribute_update_by_variant() {
        let line = line(Point::new(0, 0), Point::new(10, 0));
        let updated = line.with_attribute(AttributeUpdate::StrokeColor(Color::BLUE));
        match &updated {
            Annotation::Line(l) => assert_eq!(l.stroke_color, Color::BLUE),
            _ => panic!("expected line"),
        }
        // Fill does not apply to lines
        assert_eq!(
            updated.with_attribute(AttributeUpdate::Fill(Fill::Solid(Color::RED))),
            updated
        );
    }

    #[test]
    fn test_spotlight_fill_is_kept() {
        let spotlight = Annotation::Shape(Shape {
            kind: ShapeKind::SpotlightRect,
            start: Point::new(0, 0),
            end: Point::new(20, 20),
            fill: Fill::Spotlight,
            stroke_color: Color::RED,
            stroke_style: StrokeStyle::default(),
        });
        let updated = spotlight.with_attribute(AttributeUpdate::Fill(Fill::Solid(Color::RED)));
        assert_eq!(updated, spotlight);
    }

    #[test]
    fn test_min_draw_size() {
        assert!(!meets_min_draw_size(Point::new(0, 0), Point::new(2, 2), 4));
        assert!(meets_min_draw_size(Point::new(0, 0), Point::new(50, 0), 4));
        assert!(meets_min_draw_size(Point::new(0, 0), Point::new(4, 1), 4));
        // Unordered anchors normalize via abs
        assert!(meets_min_draw_size(Point::new(10, 10), Point::new(2, 8), 4));
    }

    #[test]
    fn test_first_spotlight_index() {
        let spotlight = Annotation::Shape(Shape {
            kind: ShapeKind::SpotlightRect,
            start: Point::new(0, 0),
            end: Point::new(20, 20),
            fill: Fill::Spotlight,
            stroke_color: Color::RED,
            stroke_style: StrokeStyle::default(),
        });
        let plain = rect(Point::new(0, 0), Point::new(10, 10));

        assert_eq!(first_spotlight_index(&[]), None);
        assert_eq!(first_spotlight_index(&[plain.clone()]), None);
        assert_eq!(
            first_spotlight_index(&[plain, spotlight.clone(), spotlight]),
            Some(1)
        );
    }
}
