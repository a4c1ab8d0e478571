//! Editing constants shared across the crate.
//!
//! This module centralizes the thresholds and defaults used by the
//! drawing-completion policy, freehand sampling, and the undo history.

/// Drawing-completion thresholds.
pub mod draw {
    /// Minimum bounding-box dimension (px) for a finished draw to be kept.
    /// A draw is discarded only when width and height are both below this.
    pub const MIN_SIZE: i32 = 4;
    /// Minimum dimension for spotlight shapes, which are useless when tiny.
    pub const MIN_SPOTLIGHT_SIZE: i32 = 8;
    /// A freehand point is recorded only once the cursor has moved at least
    /// this far from the last recorded point on both axes.
    pub const FREEHAND_STEP: i32 = 10;
}

/// Undo history limits.
pub mod history {
    /// Maximum number of snapshots kept on the undo stack.
    pub const MAX_DEPTH: usize = 100;
}

/// Text annotation defaults.
pub mod text {
    /// Default font size (px) for new text boxes.
    pub const DEFAULT_FONT_SIZE: u32 = 20;
    /// Smallest selectable font size.
    pub const MIN_FONT_SIZE: u32 = 10;
    /// Largest selectable font size.
    pub const MAX_FONT_SIZE: u32 = 64;
}
