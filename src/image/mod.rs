//! Binary frame access: a borrowed read-only view consumed by the pipeline
//! and an owned buffer used by tests, demos and frame-source adapters.
//!
//! Frames hold exactly two values, [`BLACK`] and [`WHITE`], with a
//! zero-padded border of configurable width on all sides so that the maze
//! walker never steps out of bounds.

pub mod buffer;
pub mod view;

pub use buffer::BinaryImage;
pub use view::BinaryView;

/// Track pixel value.
pub const WHITE: u8 = 255;
/// Background / border pixel value.
pub const BLACK: u8 = 0;
