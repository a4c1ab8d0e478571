//! The finite-state model of the current editing interaction.
//!
//! Exactly one [`EditState`] variant is active at a time; every transition
//! replaces the value wholesale. The controller in [`crate::editor`] owns
//! the transition table; this module owns the state value itself and the
//! read-only queries the rendering/input layer derives from it.

use crate::constants;
use crate::geometry::Point;
use crate::model::{Attributes, Vertex};

/// The current interaction mode, with the minimal context needed to resume
/// or finish it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditState {
    /// Nothing selected; ready to start drawing or select.
    #[default]
    Idle,
    /// A new annotation is being sketched.
    Drawing {
        start: Point,
        current: Point,
        /// Decimated cursor samples for freehand preview rendering.
        freehand: Vec<Point>,
    },
    /// An existing annotation is selected but not being transformed.
    Selected {
        index: usize,
        /// Cached style snapshot for the toolbar.
        attributes: Attributes,
    },
    /// The selected annotation is being dragged.
    Moving {
        index: usize,
        start: Point,
        /// Live cumulative offset from `start`.
        delta: (i32, i32),
        attributes: Attributes,
    },
    /// A vertex handle of the selected annotation is being dragged.
    Resizing {
        index: usize,
        start: Point,
        current: Point,
        vertex: Vertex,
        /// Anchors as they were when the drag began.
        original_start: Point,
        original_end: Point,
        attributes: Attributes,
    },
    /// A text annotation has content-editable focus.
    EditingText { index: usize, attributes: Attributes },
}

/// Cursor shape the rendering layer should show for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Crosshair,
    Move,
    Resize,
    Default,
}

/// How an annotation at a candidate index should be decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionVisual {
    /// Selected without resize handles (text in live edit).
    SelectedPlain,
    /// Selected with the four vertex handles.
    SelectedWithHandles,
    NotSelected,
}

/// Which raw event streams the input layer needs to forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Subscriptions {
    /// Pointer-move events are only needed mid-gesture.
    pub pointer_move: bool,
    /// Keyboard events are needed whenever a key could change state.
    pub keyboard: bool,
}

impl EditState {
    /// Cursor hint for the rendering layer.
    pub fn cursor_hint(&self) -> CursorHint {
        match self {
            EditState::Idle | EditState::Drawing { .. } => CursorHint::Crosshair,
            EditState::Selected { .. } | EditState::Moving { .. } => CursorHint::Move,
            EditState::Resizing { .. } => CursorHint::Resize,
            EditState::EditingText { .. } => CursorHint::Default,
        }
    }

    /// Selection decoration for the annotation at `candidate`.
    pub fn selection_visual(&self, candidate: usize) -> SelectionVisual {
        match self {
            EditState::EditingText { index, .. } if *index == candidate => {
                SelectionVisual::SelectedPlain
            }
            EditState::Selected { index, .. }
            | EditState::Moving { index, .. }
            | EditState::Resizing { index, .. }
                if *index == candidate =>
            {
                SelectionVisual::SelectedWithHandles
            }
            _ => SelectionVisual::NotSelected,
        }
    }

    /// Index of the annotation this state refers to, if any.
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            EditState::Idle | EditState::Drawing { .. } => None,
            EditState::Selected { index, .. }
            | EditState::Moving { index, .. }
            | EditState::Resizing { index, .. }
            | EditState::EditingText { index, .. } => Some(*index),
        }
    }

    /// Event streams the input layer should subscribe to right now.
    pub fn subscriptions(&self) -> Subscriptions {
        Subscriptions {
            pointer_move: matches!(
                self,
                EditState::Drawing { .. } | EditState::Moving { .. } | EditState::Resizing { .. }
            ),
            keyboard: !matches!(self, EditState::Idle),
        }
    }

    /// Whether a drag-style gesture (draw/move/resize) is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            EditState::Drawing { .. } | EditState::Moving { .. } | EditState::Resizing { .. }
        )
    }
}

/// Append `point` to a freehand sample list if it differs from the last
/// recorded sample by at least [`constants::draw::FREEHAND_STEP`] on both
/// axes. Bounds the point count during fast pointer movement.
pub fn record_freehand_point(freehand: &mut Vec<Point>, point: Point) {
    let step = constants::draw::FREEHAND_STEP;
    match freehand.last() {
        Some(last) => {
            if (point.x - last.x).abs() >= step && (point.y - last.y).abs() >= step {
                freehand.push(point);
            }
        }
        None => freehand.push(point),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(index: usize) -> EditState {
        EditState::Selected {
            index,
            attributes: Attributes::default(),
        }
    }

    #[test]
    fn test_cursor_hints() {
        assert_eq!(EditState::Idle.cursor_hint(), CursorHint::Crosshair);
        assert_eq!(selected(0).cursor_hint(), CursorHint::Move);
        let resizing = EditState::Resizing {
            index: 0,
            start: Point::new(0, 0),
            current: Point::new(5, 5),
            vertex: Vertex::End,
            original_start: Point::new(0, 0),
            original_end: Point::new(10, 10),
            attributes: Attributes::default(),
        };
        assert_eq!(resizing.cursor_hint(), CursorHint::Resize);
        let editing = EditState::EditingText {
            index: 0,
            attributes: Attributes::default(),
        };
        assert_eq!(editing.cursor_hint(), CursorHint::Default);
    }

    #[test]
    fn test_selection_scoped_to_one_index() {
        let state = selected(2);
        assert_eq!(state.selection_visual(1), SelectionVisual::NotSelected);
        assert_eq!(state.selection_visual(2), SelectionVisual::SelectedWithHandles);
    }

    #[test]
    fn test_editing_text_shows_plain_selection() {
        let state = EditState::EditingText {
            index: 3,
            attributes: Attributes::default(),
        };
        assert_eq!(state.selection_visual(3), SelectionVisual::SelectedPlain);
        assert_eq!(state.selection_visual(0), SelectionVisual::NotSelected);
    }

    #[test]
    fn test_subscriptions() {
        assert_eq!(EditState::Idle.subscriptions(), Subscriptions::default());

        let drawing = EditState::Drawing {
            start: Point::new(0, 0),
            current: Point::new(5, 5),
            freehand: Vec::new(),
        };
        let subs = drawing.subscriptions();
        assert!(subs.pointer_move);
        assert!(subs.keyboard);

        let subs = selected(0).subscriptions();
        assert!(!subs.pointer_move);
        assert!(subs.keyboard);
    }

    #[test]
    fn test_is_dragging_matches_pointer_move_gestures() {
        assert!(!EditState::Idle.is_dragging());
        assert!(!selected(0).is_dragging());

        let drawing = EditState::Drawing {
            start: Point::new(0, 0),
            current: Point::new(5, 5),
            freehand: Vec::new(),
        };
        assert!(drawing.is_dragging());
        let moving = EditState::Moving {
            index: 0,
            start: Point::new(0, 0),
            delta: (3, 3),
            attributes: Attributes::default(),
        };
        assert!(moving.is_dragging());

        // is_dragging and the pointer-move subscription agree
        for state in [EditState::Idle, selected(0), drawing, moving] {
            assert_eq!(state.is_dragging(), state.subscriptions().pointer_move);
        }
    }

    #[test]
    fn test_freehand_decimation() {
        let mut freehand = Vec::new();
        record_freehand_point(&mut freehand, Point::new(0, 0));
        // Moved 9px on x: below threshold on one axis, dropped
        record_freehand_point(&mut freehand, Point::new(9, 20));
        assert_eq!(freehand.len(), 1);
        // Moved 10px on both axes: recorded
        record_freehand_point(&mut freehand, Point::new(10, 10));
        assert_eq!(freehand.len(), 2);
        // Negative movement counts via abs
        record_freehand_point(&mut freehand, Point::new(-5, -5));
        assert_eq!(freehand.len(), 3);
        assert_eq!(freehand.last(), Some(&Point::new(-5, -5)));
    }
}
