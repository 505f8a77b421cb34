//! A freeform note canvas: draggable notes, resizable sub-canvases and text
//! labels, arranged with the mouse and a context menu.

slint::include_modules!();

pub mod callbacks;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod state;
pub mod utils;
