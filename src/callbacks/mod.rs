//! Callback handlers for the note canvas.
//!
//! This module contains all UI callback implementations organized by functionality:
//! - `pointer` - Dragging items and resizing sub-canvases
//! - `context_menu` - Right-click menu on the canvas
//! - `dialogs` - Text prompt, note editor and colour picker
//! - `file_menu` - File menu entries
//! - `title` - Inline editing of the canvas title

pub mod context_menu;
pub mod dialogs;
pub mod file_menu;
pub mod pointer;
pub mod title;
