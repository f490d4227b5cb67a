//! Shared crate-wide constants.

/// Side of the square corner grips, in cells.
pub const DEFAULT_CORNER_SIZE: i32 = 12;

/// Thickness of the edge grips, in cells.
pub const DEFAULT_EDGE_SIZE: i32 = 8;

pub const DEFAULT_MIN_WIDTH: i32 = 100;
pub const DEFAULT_MIN_HEIGHT: i32 = 50;

/// Distance the cursor must travel after pressing the title bar before a
/// drag starts moving the window.
pub const DEFAULT_DRAG_THRESHOLD: i32 = 3;

pub const DEFAULT_WINDOW_CLASS: &str = "fakewin";
pub const DEFAULT_PART_PREFIX: &str = "fakewin-";
pub const DEFAULT_CURSOR_PREFIX: &str = "cursor-";

/// Rows taken by a synthesized title bar, including the top border.
pub const TITLEBAR_HEIGHT: i32 = 2;

/// Width of each synthesized title bar button (`[x]`).
pub const BUTTON_WIDTH: i32 = 3;
