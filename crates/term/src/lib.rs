//! Console presentation for the piece manager
//!
//! Two layers, in the spirit of keeping rendering testable:
//!
//! - [`view`]: pure string assembly for every line the program prints
//! - [`renderer`]: crossterm-backed writer with per-kind piece colors

pub mod renderer;
pub mod view;

pub use renderer::ConsoleRenderer;
