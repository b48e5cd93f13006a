//! Drawing the board
//!
//! The engine projects its state into a [`Picture`] and hands it to a
//! [`Surface`]. The terminal surface lays the picture out with ratatui,
//! painting segments through a swappable [`SegmentStyle`].

pub mod picture;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod terminal;

pub use picture::{GameOverSummary, Picture, Tile};
pub use renderer::{HudSnapshot, Renderer};
pub use style::{AccentedStyle, PlainStyle, SegmentStyle, StyleKind};
pub use surface::{ScoreDisplay, Surface};
pub use terminal::{Hud, TerminalSurface};
