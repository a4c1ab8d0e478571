//! Session persistence: serialize the annotation collection to JSON and
//! rehydrate it later.
//!
//! Only the durable annotation data is stored. Edit state, undo history,
//! and toolbar choices are session-local and deliberately excluded; a
//! restored session always starts Idle with an empty history.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::editor::Editor;
use crate::model::AnnotationList;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors from snapshot encode/decode.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { expected: u32, found: u32 },
}

/// A stored editing session: the annotation collection plus a format
/// version for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub annotations: AnnotationList,
}

impl SessionSnapshot {
    /// Capture the durable state of an editor.
    pub fn capture(editor: &Editor) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            annotations: editor.annotations().to_vec(),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON string, rejecting unknown versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: SessionSnapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                expected: SNAPSHOT_VERSION,
                found: snapshot.version,
            });
        }
        Ok(snapshot)
    }

    /// Load this snapshot into an editor, replacing its annotations and
    /// clearing history and state.
    pub fn restore(self, editor: &mut Editor) {
        let count = self.annotations.len();
        editor.restore_annotations(self.annotations);
        log::info!("📂 Restored session with {count} annotations");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::state::EditState;

    fn editor_with_annotations() -> Editor {
        let mut editor = Editor::new();
        editor.start_drawing(Point::new(0, 0));
        editor.finish_drawing(Point::new(40, 30));
        editor.start_drawing(Point::new(50, 50));
        editor.finish_drawing(Point::new(90, 80));
        editor
    }

    #[test]
    fn test_capture_restore_round_trip() {
        let editor = editor_with_annotations();
        let json = SessionSnapshot::capture(&editor).to_json().unwrap();

        let mut restored = Editor::new();
        SessionSnapshot::from_json(&json).unwrap().restore(&mut restored);

        assert_eq!(restored.annotations(), editor.annotations());
        assert_eq!(*restored.edit_state(), EditState::Idle);
        // History does not survive persistence
        assert!(!restored.can_undo());
    }

    #[test]
    fn test_restore_clears_previous_session() {
        let mut editor = editor_with_annotations();
        editor.select_annotation(1);

        SessionSnapshot {
            version: SNAPSHOT_VERSION,
            annotations: Vec::new(),
        }
        .restore(&mut editor);

        assert!(editor.annotations().is_empty());
        assert_eq!(*editor.edit_state(), EditState::Idle);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_unknown_version_rejected() {
        let json = r#"{"version": 99, "annotations": []}"#;
        let err = SessionSnapshot::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::UnsupportedVersion {
                expected: SNAPSHOT_VERSION,
                found: 99,
            }
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            SessionSnapshot::from_json("{not json"),
            Err(SnapshotError::Json(_))
        ));
    }
}
