//! Drawing tools and toolbar attributes.
//!
//! A [`DrawingTool`] is the pending new-annotation choice made in the
//! toolbar; [`Attributes`] is the style snapshot applied to the next
//! annotation (and cached for the selected one).

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::geometry::Point;
use crate::model::annotation::{
    Annotation, EditBufferState, Line, LineKind, Shape, ShapeKind, TextBox,
};
use crate::model::style::{Color, Fill, StrokeStyle};

/// The pending new-annotation tool choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawingTool {
    /// Draw a line; `snap` constrains it to the 8 compass directions.
    Line { kind: LineKind, snap: bool },
    /// Draw a shape; `equalize` holds it square/circular.
    Shape { kind: ShapeKind, equalize: bool },
    /// Draw a text box.
    Text,
}

impl Default for DrawingTool {
    fn default() -> Self {
        DrawingTool::Shape {
            kind: ShapeKind::Rect,
            equalize: false,
        }
    }
}

impl DrawingTool {
    /// Get the display name for this tool.
    pub fn name(&self) -> &'static str {
        match self {
            DrawingTool::Line {
                kind: LineKind::Straight,
                ..
            } => "Line",
            DrawingTool::Line {
                kind: LineKind::Arrow,
                ..
            } => "Arrow",
            DrawingTool::Shape { kind, .. } => match kind {
                ShapeKind::Rect => "Rectangle",
                ShapeKind::RoundedRect => "Rounded Rectangle",
                ShapeKind::Ellipse => "Ellipse",
                ShapeKind::SpotlightRect => "Spotlight",
            },
            DrawingTool::Text => "Text",
        }
    }

    /// Toolbar-highlight equality: two tool choices light up the same
    /// button when variant and sub-kind match, ignoring mode flags
    /// (snap / equalize).
    pub fn same_button(&self, other: &DrawingTool) -> bool {
        match (self, other) {
            (DrawingTool::Line { kind: a, .. }, DrawingTool::Line { kind: b, .. }) => a == b,
            (DrawingTool::Shape { kind: a, .. }, DrawingTool::Shape { kind: b, .. }) => a == b,
            (DrawingTool::Text, DrawingTool::Text) => true,
            _ => false,
        }
    }

    /// Minimum bounding-box dimension for a finished draw with this tool.
    pub fn min_draw_size(&self) -> i32 {
        match self {
            DrawingTool::Shape {
                kind: ShapeKind::SpotlightRect,
                ..
            } => constants::draw::MIN_SPOTLIGHT_SIZE,
            _ => constants::draw::MIN_SIZE,
        }
    }

    /// Build the annotation this tool produces for a finished draw.
    pub fn create_annotation(&self, start: Point, end: Point, attributes: &Attributes) -> Annotation {
        match *self {
            DrawingTool::Line { kind, .. } => Annotation::Line(Line {
                kind,
                start,
                end,
                stroke_color: attributes.stroke_color,
                stroke_style: attributes.stroke_style,
            }),
            DrawingTool::Shape { kind, .. } => Annotation::Shape(Shape {
                kind,
                start,
                end,
                fill: if kind == ShapeKind::SpotlightRect {
                    Fill::Spotlight
                } else {
                    attributes.fill
                },
                stroke_color: attributes.stroke_color,
                stroke_style: attributes.stroke_style,
            }),
            DrawingTool::Text => Annotation::Text(TextBox {
                start,
                end,
                color: attributes.stroke_color,
                font_size: attributes.font_size,
                text: String::new(),
                rotation: 0.0,
                edit_buffer: EditBufferState::default(),
            }),
        }
    }
}

/// Style snapshot shown in the toolbar and applied to new annotations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub stroke_color: Color,
    pub fill: Fill,
    pub stroke_style: StrokeStyle,
    pub font_size: u32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            stroke_color: Color::RED,
            fill: Fill::Empty,
            stroke_style: StrokeStyle::default(),
            font_size: constants::text::DEFAULT_FONT_SIZE,
        }
    }
}

impl Attributes {
    /// Snapshot the attributes of an existing annotation, falling back to
    /// `self` for attributes the variant does not carry.
    pub fn cached_from(&self, annotation: &Annotation) -> Attributes {
        let mut out = *self;
        match annotation {
            Annotation::Line(line) => {
                out.stroke_color = line.stroke_color;
                out.stroke_style = line.stroke_style;
            }
            Annotation::Shape(shape) => {
                out.stroke_color = shape.stroke_color;
                out.stroke_style = shape.stroke_style;
                out.fill = shape.fill;
            }
            Annotation::Text(text) => {
                out.stroke_color = text.color;
                out.font_size = text.font_size;
            }
        }
        out
    }

    /// Apply a toolbar update, making it the default for new annotations.
    pub fn apply(&mut self, update: AttributeUpdate) {
        match update {
            AttributeUpdate::StrokeColor(color) => self.stroke_color = color,
            AttributeUpdate::Fill(fill) => self.fill = fill,
            AttributeUpdate::StrokeStyle(style) => self.stroke_style = style,
            AttributeUpdate::FontSize(size) => {
                self.font_size =
                    size.clamp(constants::text::MIN_FONT_SIZE, constants::text::MAX_FONT_SIZE);
            }
        }
    }
}

/// A single attribute change coming from the style toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AttributeUpdate {
    StrokeColor(Color),
    Fill(Fill),
    StrokeStyle(StrokeStyle),
    FontSize(u32),
}
