//! Customizable keybindings for the markup editor.
//!
//! This module maps raw keyboard events to editor commands: tool
//! selection hotkeys plus the fixed editing chords (undo, redo, delete,
//! cancel). Tool hotkeys can be rebound; the editing chords are fixed so
//! they stay discoverable.

use serde::{Deserialize, Serialize};

use crate::model::{DrawingTool, LineKind, ShapeKind};

/// A physical key, decoupled from any windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Escape,
    Delete,
    Backspace,
    Enter,
    Space,
    Tab,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            shift: false,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: true,
            shift: false,
        }
    }

    pub fn ctrl_shift(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: true,
            shift: true,
        }
    }
}

/// An editor command resolved from a key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorCommand {
    /// Escape: leave the current interaction.
    Cancel,
    /// Delete / Backspace: remove the selected annotation.
    DeleteSelected,
    Undo,
    Redo,
    /// Switch to a drawing tool via its hotkey.
    SelectTool(DrawingTool),
}

/// Keybinding configuration for the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Hotkey for the straight line tool
    pub tool_line: KeyCode,
    /// Hotkey for the arrow tool
    pub tool_arrow: KeyCode,
    /// Hotkey for the rectangle tool
    pub tool_rect: KeyCode,
    /// Hotkey for the rounded rectangle tool
    pub tool_rounded_rect: KeyCode,
    /// Hotkey for the ellipse tool
    pub tool_ellipse: KeyCode,
    /// Hotkey for the spotlight tool
    pub tool_spotlight: KeyCode,
    /// Hotkey for the text tool
    pub tool_text: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            tool_line: KeyCode::L,
            tool_arrow: KeyCode::A,
            tool_rect: KeyCode::R,
            tool_rounded_rect: KeyCode::U,
            tool_ellipse: KeyCode::E,
            tool_spotlight: KeyCode::S,
            tool_text: KeyCode::T,
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a key press to an editor command, if it is bound.
    ///
    /// Tool hotkeys only fire without modifiers, so typing in a focused
    /// text box never switches tools.
    pub fn command_for_event(&self, event: KeyEvent) -> Option<EditorCommand> {
        if event.ctrl {
            return match (event.code, event.shift) {
                (KeyCode::Z, false) => Some(EditorCommand::Undo),
                (KeyCode::Z, true) | (KeyCode::Y, _) => Some(EditorCommand::Redo),
                _ => None,
            };
        }
        if event.shift {
            return None;
        }
        match event.code {
            KeyCode::Escape => Some(EditorCommand::Cancel),
            KeyCode::Delete | KeyCode::Backspace => Some(EditorCommand::DeleteSelected),
            code => self.tool_for_key(code).map(EditorCommand::SelectTool),
        }
    }

    /// Get the tool that corresponds to a key press, if any.
    pub fn tool_for_key(&self, key: KeyCode) -> Option<DrawingTool> {
        if key == self.tool_line {
            Some(DrawingTool::Line {
                kind: LineKind::Straight,
                snap: false,
            })
        } else if key == self.tool_arrow {
            Some(DrawingTool::Line {
                kind: LineKind::Arrow,
                snap: false,
            })
        } else if key == self.tool_rect {
            Some(DrawingTool::Shape {
                kind: ShapeKind::Rect,
                equalize: false,
            })
        } else if key == self.tool_rounded_rect {
            Some(DrawingTool::Shape {
                kind: ShapeKind::RoundedRect,
                equalize: false,
            })
        } else if key == self.tool_ellipse {
            Some(DrawingTool::Shape {
                kind: ShapeKind::Ellipse,
                equalize: false,
            })
        } else if key == self.tool_spotlight {
            Some(DrawingTool::Shape {
                kind: ShapeKind::SpotlightRect,
                equalize: false,
            })
        } else if key == self.tool_text {
            Some(DrawingTool::Text)
        } else {
            None
        }
    }

    /// Get the hotkey for a tool button (mode flags ignored).
    pub fn key_for_tool(&self, tool: &DrawingTool) -> KeyCode {
        match tool {
            DrawingTool::Line {
                kind: LineKind::Straight,
                ..
            } => self.tool_line,
            DrawingTool::Line {
                kind: LineKind::Arrow,
                ..
            } => self.tool_arrow,
            DrawingTool::Shape { kind, .. } => match kind {
                ShapeKind::Rect => self.tool_rect,
                ShapeKind::RoundedRect => self.tool_rounded_rect,
                ShapeKind::Ellipse => self.tool_ellipse,
                ShapeKind::SpotlightRect => self.tool_spotlight,
            },
            DrawingTool::Text => self.tool_text,
        }
    }

    /// Check if a key is already used by another tool binding.
    /// Returns the name of the conflicting tool, if any.
    pub fn key_conflict(&self, key: KeyCode, exclude: Option<&DrawingTool>) -> Option<&'static str> {
        let bindings: [(KeyCode, DrawingTool); 7] = [
            (
                self.tool_line,
                DrawingTool::Line {
                    kind: LineKind::Straight,
                    snap: false,
                },
            ),
            (
                self.tool_arrow,
                DrawingTool::Line {
                    kind: LineKind::Arrow,
                    snap: false,
                },
            ),
            (
                self.tool_rect,
                DrawingTool::Shape {
                    kind: ShapeKind::Rect,
                    equalize: false,
                },
            ),
            (
                self.tool_rounded_rect,
                DrawingTool::Shape {
                    kind: ShapeKind::RoundedRect,
                    equalize: false,
                },
            ),
            (
                self.tool_ellipse,
                DrawingTool::Shape {
                    kind: ShapeKind::Ellipse,
                    equalize: false,
                },
            ),
            (
                self.tool_spotlight,
                DrawingTool::Shape {
                    kind: ShapeKind::SpotlightRect,
                    equalize: false,
                },
            ),
            (self.tool_text, DrawingTool::Text),
        ];
        bindings
            .iter()
            .filter(|(_, tool)| exclude.is_none_or(|ex| !ex.same_button(tool)))
            .find(|(bound, _)| *bound == key)
            .map(|(_, tool)| tool.name())
    }

    /// Rebind the hotkey for a tool button.
    pub fn set_tool_key(&mut self, tool: &DrawingTool, key: KeyCode) {
        match tool {
            DrawingTool::Line {
                kind: LineKind::Straight,
                ..
            } => self.tool_line = key,
            DrawingTool::Line {
                kind: LineKind::Arrow,
                ..
            } => self.tool_arrow = key,
            DrawingTool::Shape { kind, .. } => match kind {
                ShapeKind::Rect => self.tool_rect = key,
                ShapeKind::RoundedRect => self.tool_rounded_rect = key,
                ShapeKind::Ellipse => self.tool_ellipse = key,
                ShapeKind::SpotlightRect => self.tool_spotlight = key,
            },
            DrawingTool::Text => self.tool_text = key,
        }
    }
}

/// Convert a KeyCode to a display string.
pub fn key_to_string(key: KeyCode) -> &'static str {
    match key {
        KeyCode::A => "A",
        KeyCode::B => "B",
        KeyCode::C => "C",
        KeyCode::D => "D",
        KeyCode::E => "E",
        KeyCode::F => "F",
        KeyCode::G => "G",
        KeyCode::H => "H",
        KeyCode::I => "I",
        KeyCode::J => "J",
        KeyCode::K => "K",
        KeyCode::L => "L",
        KeyCode::M => "M",
        KeyCode::N => "N",
        KeyCode::O => "O",
        KeyCode::P => "P",
        KeyCode::Q => "Q",
        KeyCode::R => "R",
        KeyCode::S => "S",
        KeyCode::T => "T",
        KeyCode::U => "U",
        KeyCode::V => "V",
        KeyCode::W => "W",
        KeyCode::X => "X",
        KeyCode::Y => "Y",
        KeyCode::Z => "Z",
        KeyCode::Escape => "Esc",
        KeyCode::Delete => "Del",
        KeyCode::Backspace => "Backspace",
        KeyCode::Enter => "Enter",
        KeyCode::Space => "Space",
        KeyCode::Tab => "Tab",
    }
}
