//! Data model for the markup editor.

mod annotation;
mod style;
mod tool;

pub use annotation::{
    first_spotlight_index, meets_min_draw_size, Annotation, AnnotationList, EditBufferState, Line,
    LineKind, Shape, ShapeKind, TextBox, Vertex,
};
pub use style::{Color, Fill, LineDash, StrokeStyle, StrokeWidth};
pub use tool::{AttributeUpdate, Attributes, DrawingTool};
