//! State management for the note canvas.
//!
//! This module contains:
//! - Item collection operations (`board`)
//! - Pointer gestures: drag and resize (`gesture`)
//! - Context menu dispatch (`menu`)
//! - Dialog resolution (`dialog`)
//! - Shared state types

pub mod board;
pub mod dialog;
pub mod gesture;
pub mod menu;
mod types;

pub use types::*;
