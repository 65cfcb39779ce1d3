//! Core geometry types for the board
//!
//! Screen-space positions, sizes and rectangles in CSS pixels.

mod vec2;
mod rect;
mod size;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
