//! The editor's message type.
//!
//! Input and toolbar layers translate raw events into [`EditorAction`]
//! values and feed them to [`Editor::apply`]. Keeping the surface a single
//! enum makes the event flow inspectable and trivially replayable.

use crate::editor::Editor;
use crate::geometry::Point;
use crate::keybindings::{EditorCommand, KeyBindings, KeyEvent};
use crate::model::{AttributeUpdate, DrawingTool, EditBufferState, Vertex};

/// Every discrete input the editor reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    // Toolbar
    SetTool(DrawingTool),
    SetAttribute(AttributeUpdate),

    // Canvas pointer events
    DrawStarted(Point),
    DrawMoved(Point),
    DrawFinished(Point),
    AnnotationClicked(usize),
    MoveStarted(Point),
    MoveUpdated(Point),
    MoveFinished(Point),
    ResizeStarted(Vertex, Point),
    ResizeUpdated(Point),
    ResizeFinished(Point),

    // Text editing
    TextEditStarted(usize),
    TextChanged(String),
    FontSizeChanged(u32),
    TextBufferResized(EditBufferState),
    TextEditFinished,
    TextFocusResult(bool),

    // Commands
    DeleteSelected,
    Undo,
    Redo,
    Cancel,
    Reset,
}

impl EditorAction {
    /// Resolve a raw key press into an action via the active bindings.
    pub fn from_key(event: KeyEvent, bindings: &KeyBindings) -> Option<EditorAction> {
        bindings.command_for_event(event).map(|command| match command {
            EditorCommand::Cancel => EditorAction::Cancel,
            EditorCommand::DeleteSelected => EditorAction::DeleteSelected,
            EditorCommand::Undo => EditorAction::Undo,
            EditorCommand::Redo => EditorAction::Redo,
            EditorCommand::SelectTool(tool) => EditorAction::SetTool(tool),
        })
    }
}

impl Editor {
    /// Dispatch one action to the matching operation.
    pub fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::SetTool(tool) => self.set_tool(tool),
            EditorAction::SetAttribute(update) => self.apply_attribute(update),

            EditorAction::DrawStarted(pos) => self.start_drawing(pos),
            EditorAction::DrawMoved(pos) => self.continue_drawing(pos),
            EditorAction::DrawFinished(pos) => self.finish_drawing(pos),
            EditorAction::AnnotationClicked(index) => self.select_annotation(index),
            EditorAction::MoveStarted(pos) => self.start_moving(pos),
            EditorAction::MoveUpdated(pos) => self.continue_moving(pos),
            EditorAction::MoveFinished(pos) => self.finish_moving(pos),
            EditorAction::ResizeStarted(vertex, pos) => self.start_resizing(vertex, pos),
            EditorAction::ResizeUpdated(pos) => self.continue_resizing(pos),
            EditorAction::ResizeFinished(pos) => self.finish_resizing(pos),

            EditorAction::TextEditStarted(index) => self.start_editing_text(index),
            EditorAction::TextChanged(text) => self.set_text(text),
            EditorAction::FontSizeChanged(size) => self.set_font_size(size),
            EditorAction::TextBufferResized(buffer) => self.set_auto_expand(buffer),
            EditorAction::TextEditFinished => self.finish_editing_text(),
            EditorAction::TextFocusResult(focused) => self.text_focus_result(focused),

            EditorAction::DeleteSelected => self.delete_selected(),
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::Cancel => self.cancel(),
            EditorAction::Reset => self.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybindings::KeyCode;
    use crate::state::EditState;

    #[test]
    fn test_apply_full_draw_gesture() {
        let mut editor = Editor::new();
        for action in [
            EditorAction::DrawStarted(Point::new(0, 0)),
            EditorAction::DrawMoved(Point::new(25, 25)),
            EditorAction::DrawFinished(Point::new(50, 40)),
        ] {
            editor.apply(action);
        }
        assert_eq!(editor.annotations().len(), 1);
        assert_eq!(*editor.edit_state(), EditState::Idle);
    }

    #[test]
    fn test_key_routing() {
        let bindings = KeyBindings::default();

        let action = EditorAction::from_key(KeyEvent::ctrl(KeyCode::Z), &bindings);
        assert_eq!(action, Some(EditorAction::Undo));

        let action = EditorAction::from_key(KeyEvent::plain(KeyCode::T), &bindings);
        assert_eq!(action, Some(EditorAction::SetTool(DrawingTool::Text)));

        assert_eq!(
            EditorAction::from_key(KeyEvent::plain(KeyCode::Q), &bindings),
            None
        );
    }

    #[test]
    fn test_keyed_undo_round_trip() {
        let bindings = KeyBindings::default();
        let mut editor = Editor::new();
        editor.apply(EditorAction::DrawStarted(Point::new(0, 0)));
        editor.apply(EditorAction::DrawFinished(Point::new(30, 30)));
        assert_eq!(editor.annotations().len(), 1);

        let undo = EditorAction::from_key(KeyEvent::ctrl(KeyCode::Z), &bindings).unwrap();
        editor.apply(undo);
        assert!(editor.annotations().is_empty());

        let redo = EditorAction::from_key(KeyEvent::ctrl_shift(KeyCode::Z), &bindings).unwrap();
        editor.apply(redo);
        assert_eq!(editor.annotations().len(), 1);
    }
}
