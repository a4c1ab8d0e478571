//! The annotation editor controller.
//!
//! [`Editor`] composes the edit history, the edit state machine, and the
//! toolbar attributes. External collaborators feed it discrete actions
//! (pointer down/move/up, key presses, toolbar picks) and read back the
//! current annotations, state, and cursor hint.
//!
//! Every operation is total: an action that does not apply in the current
//! state is a no-op, and a stale annotation index degrades to Idle instead
//! of failing.

use crate::geometry::{self, Point};
use crate::history::EditHistory;
use crate::model::{
    first_spotlight_index, meets_min_draw_size, Annotation, AttributeUpdate, Attributes,
    DrawingTool, EditBufferState, Vertex,
};
use crate::state::{record_freehand_point, CursorHint, EditState, SelectionVisual, Subscriptions};

/// The long-lived editing session for one image.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    history: EditHistory,
    state: EditState,
    tool: DrawingTool,
    attributes: Attributes,
}

impl Editor {
    /// Create an editor with an empty canvas and default toolbar choices.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Query surface
    // ========================================================================

    /// The current annotation collection in z-order.
    pub fn annotations(&self) -> &[Annotation] {
        self.history.present()
    }

    /// The current edit state.
    pub fn edit_state(&self) -> &EditState {
        &self.state
    }

    /// The active drawing tool.
    pub fn tool(&self) -> DrawingTool {
        self.tool
    }

    /// The toolbar attributes applied to the next new annotation.
    pub fn toolbar_attributes(&self) -> Attributes {
        match &self.state {
            EditState::Selected { attributes, .. }
            | EditState::Moving { attributes, .. }
            | EditState::Resizing { attributes, .. }
            | EditState::EditingText { attributes, .. } => *attributes,
            _ => self.attributes,
        }
    }

    /// Cursor shape the rendering layer should show.
    pub fn cursor_hint(&self) -> CursorHint {
        self.state.cursor_hint()
    }

    /// Index of the selected annotation, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index()
    }

    /// Selection decoration for the annotation at `candidate`.
    pub fn selection_visual(&self, candidate: usize) -> SelectionVisual {
        self.state.selection_visual(candidate)
    }

    /// Event streams the input layer should currently forward.
    pub fn subscriptions(&self) -> Subscriptions {
        self.state.subscriptions()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Render-list position of the spotlight overlay mask: the storage
    /// index of the first spotlight shape.
    pub fn mask_insertion_index(&self) -> Option<usize> {
        first_spotlight_index(self.history.present())
    }

    // ========================================================================
    // Toolbar
    // ========================================================================

    /// Switch the drawing tool. Cancels any in-progress gesture: a sketch
    /// is discarded, a drag is abandoned at its live position.
    pub fn set_tool(&mut self, tool: DrawingTool) {
        match self.state {
            EditState::Drawing { .. } => {
                self.state = EditState::Idle;
                log::debug!("❌ Drawing cancelled by tool switch");
            }
            EditState::Moving { index, attributes, .. }
            | EditState::Resizing { index, attributes, .. } => {
                self.history.cancel_transient();
                self.state = EditState::Selected { index, attributes };
                log::debug!("❌ Drag abandoned by tool switch");
            }
            _ => {}
        }
        self.tool = tool;
        log::debug!("🖌️ Tool: {}", tool.name());
    }

    /// Apply a style change: to the selected annotation (with a history
    /// entry) when something is selected or in text edit, and always to the
    /// toolbar defaults for the next new annotation.
    pub fn apply_attribute(&mut self, update: AttributeUpdate) {
        self.attributes.apply(update);

        let index = match &self.state {
            EditState::Selected { index, .. } | EditState::EditingText { index, .. } => *index,
            _ => return,
        };
        if !self.check_index(index) {
            return;
        }

        let updated = self.history.present()[index].with_attribute(update);
        if updated != self.history.present()[index] {
            let mut next = self.history.present().clone();
            next[index] = updated;
            self.history.commit(next);
            log::debug!("🎨 Restyled annotation {index}");
        }
        self.refresh_cached_attributes(index);
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Pointer down on empty canvas: begin sketching a new annotation.
    pub fn start_drawing(&mut self, pos: Point) {
        match self.state {
            // Clicking the canvas while selected deselects and starts a
            // fresh draw.
            EditState::Idle | EditState::Selected { .. } => {
                self.state = EditState::Drawing {
                    start: pos,
                    current: pos,
                    freehand: Vec::new(),
                };
                log::debug!("✏️ Started {} at ({}, {})", self.tool.name(), pos.x, pos.y);
            }
            _ => {}
        }
    }

    /// Pointer move while sketching.
    pub fn continue_drawing(&mut self, pos: Point) {
        if let EditState::Drawing {
            current, freehand, ..
        } = &mut self.state
        {
            *current = pos;
            record_freehand_point(freehand, pos);
        }
    }

    /// Pointer up: finish the sketch. Draws below the minimum size are
    /// discarded. A finished text draw enters live text editing.
    pub fn finish_drawing(&mut self, pos: Point) {
        let EditState::Drawing { start, .. } = self.state else {
            return;
        };

        let end = self.adjusted_end(start, pos);
        if !meets_min_draw_size(start, end, self.tool.min_draw_size()) {
            self.state = EditState::Idle;
            log::debug!("❌ Draw discarded: below minimum size");
            return;
        }

        let annotation = self.tool.create_annotation(start, end, &self.attributes);
        let kind = annotation.kind_name();
        let mut next = self.history.present().clone();
        next.push(annotation);
        let index = next.len() - 1;
        self.history.commit(next);
        log::info!("✅ Created {kind} annotation at index {index}");

        if self.tool == DrawingTool::Text {
            // Focus acquisition is asynchronous; text_focus_result reverts
            // the creation if the input layer fails to focus the box.
            self.state = EditState::EditingText {
                index,
                attributes: self.cached_attributes(index),
            };
        } else {
            self.state = EditState::Idle;
        }
    }

    /// Tool-specific end-point adjustment: octant snapping for snapped
    /// lines, axis equalization for equalized shapes.
    fn adjusted_end(&self, start: Point, pos: Point) -> Point {
        match self.tool {
            DrawingTool::Line { snap: true, .. } => geometry::snap_to_octant(start, pos),
            DrawingTool::Shape {
                equalize: true, ..
            } => geometry::equalize_axes(start, pos),
            _ => pos,
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Click on an existing annotation. Clicking the already-selected text
    /// annotation again enters live text editing. A drag in progress is
    /// abandoned at its live position.
    pub fn select_annotation(&mut self, index: usize) {
        self.abandon_drag();
        if !self.check_index(index) {
            return;
        }
        let reselected = matches!(
            self.state,
            EditState::Selected { index: i, .. }
                | EditState::Moving { index: i, .. }
                | EditState::Resizing { index: i, .. }
                if i == index
        );
        if reselected && self.history.present()[index].is_text() {
            self.state = EditState::EditingText {
                index,
                attributes: self.cached_attributes(index),
            };
            log::debug!("📝 Editing text annotation {index}");
        } else {
            self.state = EditState::Selected {
                index,
                attributes: self.cached_attributes(index),
            };
            log::debug!("🔍 Selected annotation {index}");
        }
    }

    /// Delete the selected annotation. No-op when nothing is selected.
    pub fn delete_selected(&mut self) {
        let EditState::Selected { index, .. } = self.state else {
            return;
        };
        if !self.check_index(index) {
            return;
        }
        let mut next = self.history.present().clone();
        let removed = next.remove(index);
        self.history.commit(next);
        self.state = EditState::Idle;
        log::info!("🗑️ Deleted {} annotation {index}", removed.kind_name());
    }

    // ========================================================================
    // Moving
    // ========================================================================

    /// Pointer down on the body of the selected annotation.
    pub fn start_moving(&mut self, pos: Point) {
        let EditState::Selected { index, attributes } = self.state else {
            return;
        };
        if !self.check_index(index) {
            return;
        }
        self.history.begin_transient();
        self.state = EditState::Moving {
            index,
            start: pos,
            delta: (0, 0),
            attributes,
        };
    }

    /// Pointer move while dragging: amend the live position, no history
    /// entry per move.
    pub fn continue_moving(&mut self, pos: Point) {
        let EditState::Moving {
            index,
            start,
            attributes,
            ..
        } = self.state
        else {
            return;
        };
        if !self.check_index(index) {
            return;
        }
        let Some(base) = self.history.transient_base() else {
            self.state = EditState::Idle;
            return;
        };
        let moved = base[index].translated(start, pos);
        let mut next = self.history.present().clone();
        next[index] = moved;
        self.history.amend(next);
        self.state = EditState::Moving {
            index,
            start,
            delta: (pos.x - start.x, pos.y - start.y),
            attributes,
        };
    }

    /// Pointer up: commit the whole drag as one history entry.
    pub fn finish_moving(&mut self, pos: Point) {
        if !matches!(self.state, EditState::Moving { .. }) {
            return;
        }
        self.continue_moving(pos);
        // continue_moving may have degraded to Idle on a stale index
        if let EditState::Moving { index, .. } = self.state {
            self.history.commit_transient();
            self.state = EditState::Selected {
                index,
                attributes: self.cached_attributes(index),
            };
        }
    }

    // ========================================================================
    // Resizing
    // ========================================================================

    /// Pointer down on a vertex handle of the selected annotation.
    pub fn start_resizing(&mut self, vertex: Vertex, pos: Point) {
        let EditState::Selected { index, attributes } = self.state else {
            return;
        };
        if !self.check_index(index) {
            return;
        }
        let original_start = self.history.present()[index].start();
        let original_end = self.history.present()[index].end();
        self.history.begin_transient();
        self.state = EditState::Resizing {
            index,
            start: pos,
            current: pos,
            vertex,
            original_start,
            original_end,
            attributes,
        };
    }

    /// Pointer move while resizing: amend the live anchors.
    pub fn continue_resizing(&mut self, pos: Point) {
        let EditState::Resizing {
            index,
            start,
            vertex,
            original_start,
            original_end,
            attributes,
            ..
        } = self.state
        else {
            return;
        };
        if !self.check_index(index) {
            return;
        }
        let resized = self.history.present()[index]
            .with_anchors(original_start, original_end)
            .resized(vertex, pos);
        let mut next = self.history.present().clone();
        next[index] = resized;
        self.history.amend(next);
        self.state = EditState::Resizing {
            index,
            start,
            current: pos,
            vertex,
            original_start,
            original_end,
            attributes,
        };
    }

    /// Pointer up: commit the whole resize as one history entry.
    pub fn finish_resizing(&mut self, pos: Point) {
        if !matches!(self.state, EditState::Resizing { .. }) {
            return;
        }
        self.continue_resizing(pos);
        if let EditState::Resizing { index, .. } = self.state {
            self.history.commit_transient();
            self.state = EditState::Selected {
                index,
                attributes: self.cached_attributes(index),
            };
        }
    }

    // ========================================================================
    // Text editing
    // ========================================================================

    /// Enter live text editing on an existing text annotation. A drag in
    /// progress is abandoned at its live position.
    pub fn start_editing_text(&mut self, index: usize) {
        self.abandon_drag();
        if !self.check_index(index) {
            return;
        }
        if !self.history.present()[index].is_text() {
            return;
        }
        self.state = EditState::EditingText {
            index,
            attributes: self.cached_attributes(index),
        };
        log::debug!("📝 Editing text annotation {index}");
    }

    /// Replace the text content. Always an amend: keystrokes never create
    /// history entries; the text is committed by being part of `present`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let EditState::EditingText { index, .. } = self.state else {
            return;
        };
        if !self.check_index(index) {
            return;
        }
        let mut next = self.history.present().clone();
        let updated = next[index].with_text(text);
        next[index] = updated;
        self.history.amend(next);
    }

    /// Live font-size change while editing text (amend only).
    pub fn set_font_size(&mut self, font_size: u32) {
        let EditState::EditingText { index, .. } = self.state else {
            return;
        };
        if !self.check_index(index) {
            return;
        }
        let mut next = self.history.present().clone();
        let updated = next[index].with_font_size(font_size);
        next[index] = updated;
        self.history.amend(next);
        self.refresh_cached_attributes(index);
    }

    /// Update the auto-expand state of the live edit buffer (amend only).
    pub fn set_auto_expand(&mut self, edit_buffer: EditBufferState) {
        let EditState::EditingText { index, .. } = self.state else {
            return;
        };
        if !self.check_index(index) {
            return;
        }
        let mut next = self.history.present().clone();
        let updated = next[index].with_auto_expand(edit_buffer);
        next[index] = updated;
        self.history.amend(next);
    }

    /// Blur / click-away from the text box. A text box left empty is
    /// removed rather than kept invisible.
    pub fn finish_editing_text(&mut self) {
        let EditState::EditingText { index, .. } = self.state else {
            return;
        };
        self.state = EditState::Idle;
        if !self.check_index(index) {
            return;
        }
        let empty = matches!(
            &self.history.present()[index],
            Annotation::Text(text) if text.text.is_empty()
        );
        if empty {
            let mut next = self.history.present().clone();
            next.remove(index);
            self.history.commit(next);
            log::debug!("🗑️ Removed empty text annotation {index}");
        }
    }

    /// Report whether the rendering layer managed to focus the text box
    /// created by the last text draw. On failure the creation is reverted
    /// so no focus-less text annotation is left behind.
    pub fn text_focus_result(&mut self, focused: bool) {
        if !matches!(self.state, EditState::EditingText { .. }) {
            return;
        }
        if !focused {
            log::warn!("⚠️ Text focus not acquired; reverting text creation");
            self.history.undo();
            self.state = EditState::Idle;
        }
    }

    // ========================================================================
    // History and cancellation
    // ========================================================================

    /// Undo the last committed action. Any in-progress gesture is
    /// abandoned and the editor returns to Idle.
    pub fn undo(&mut self) {
        self.history.undo();
        self.state = EditState::Idle;
    }

    /// Redo the last undone action. Any in-progress gesture is abandoned
    /// and the editor returns to Idle.
    pub fn redo(&mut self) {
        self.history.redo();
        self.state = EditState::Idle;
    }

    /// Universal cancel (Escape). Always returns to Idle. A drag in
    /// progress keeps its last live position; it is not rolled back.
    pub fn cancel(&mut self) {
        match self.state {
            EditState::Idle => return,
            EditState::Moving { .. } | EditState::Resizing { .. } => {
                self.history.cancel_transient();
            }
            _ => {}
        }
        self.state = EditState::Idle;
        log::debug!("❌ Cancelled, back to idle");
    }

    /// Full editor reset: image changed or session cancelled. Clears both
    /// the history and the edit state; toolbar choices persist.
    pub fn reset(&mut self) {
        self.history.reset();
        self.state = EditState::Idle;
        log::info!("🔄 Editor reset");
    }

    /// Replace the whole annotation collection, clearing history and
    /// state. Used when rehydrating a stored session.
    pub(crate) fn restore_annotations(&mut self, annotations: Vec<Annotation>) {
        self.history.reset_to(annotations);
        self.state = EditState::Idle;
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn cached_attributes(&self, index: usize) -> Attributes {
        self.attributes.cached_from(&self.history.present()[index])
    }

    /// Drop the transient history pin if a drag is being left through any
    /// path other than its own finish or an explicit cancel. A stale pin
    /// would make the next drag translate from the wrong base.
    fn abandon_drag(&mut self) {
        if matches!(
            self.state,
            EditState::Moving { .. } | EditState::Resizing { .. }
        ) {
            self.history.cancel_transient();
        }
    }

    fn refresh_cached_attributes(&mut self, index: usize) {
        if index >= self.history.present().len() {
            return;
        }
        let cached = self.cached_attributes(index);
        match &mut self.state {
            EditState::Selected { attributes, .. }
            | EditState::Moving { attributes, .. }
            | EditState::Resizing { attributes, .. }
            | EditState::EditingText { attributes, .. } => *attributes = cached,
            _ => {}
        }
    }

    /// Validate an annotation index; a stale index (external reset)
    /// degrades to Idle instead of failing.
    fn check_index(&mut self, index: usize) -> bool {
        if index < self.history.present().len() {
            true
        } else {
            log::warn!("⚠️ Stale annotation index {index}, returning to idle");
            self.abandon_drag();
            self.state = EditState::Idle;
            false
        }
    }
}
