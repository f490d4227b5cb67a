//! Draggable, resizable, title-barred windows for terminal UIs.
//!
//! The pieces, bottom-up:
//!
//! - [`geometry`] classifies a cursor position against a window's corner
//!   grips, edge grips and title bar.
//! - [`host`] is the capability interface a window uses to read and mutate
//!   the element tree it lives in; [`scene`] is the in-memory tree.
//! - [`widget`] holds the per-window interaction state machine and its
//!   lifecycle.
//! - [`desktop`] routes terminal mouse events to windows, [`render`] paints
//!   them with ratatui.

pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod host;
pub mod render;
pub mod scene;
pub mod tracing_sub;
pub mod widget;

pub use config::{Axes, ClassNames, WindowConfig};
pub use error::{ConfigError, WindowError};
pub use geometry::{Corner, CursorPoint, Edge, Rect, ResizeDirection, ZoneHit, classify};
pub use widget::{FloatingWindow, InteractionState, WindowResponse};
