//! imark - Image Markup Editor Core
//!
//! The headless core of an image annotation editor: the annotation data
//! model, the edit-interaction state machine, linear undo/redo history,
//! and the controller that ties them together. Rendering and raw input
//! handling live in the embedding application; this crate owns every
//! decision about what an interaction means.

mod action;
mod constants;
mod editor;
mod geometry;
mod history;
mod keybindings;
mod model;
mod snapshot;
mod state;

pub use action::EditorAction;
pub use editor::Editor;
pub use geometry::{angle, distance, equalize_axes, normalize_angle, snap_to_octant, Point};
pub use history::EditHistory;
pub use keybindings::{key_to_string, EditorCommand, KeyBindings, KeyCode, KeyEvent};
pub use model::{
    first_spotlight_index, meets_min_draw_size, Annotation, AnnotationList, AttributeUpdate,
    Attributes, Color, DrawingTool, EditBufferState, Fill, Line, LineDash, LineKind, Shape,
    ShapeKind, StrokeStyle, StrokeWidth, TextBox, Vertex,
};
pub use snapshot::{SessionSnapshot, SnapshotError, SNAPSHOT_VERSION};
pub use state::{CursorHint, EditState, SelectionVisual, Subscriptions};
