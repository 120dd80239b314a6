//! Terminal presentation layer.
//!
//! Everything cosmetic lives here; the engine never sees a color or a glyph.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use theme::{Palette, CLASSIC, PALETTES, SUNSET};
