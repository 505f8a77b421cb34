//! State types shared between the canvas callbacks.

use crate::config::AppConfig;
use crate::utils::parse_color_or;
use crate::CanvasItem;
use slint::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Note,
    Subcanvas,
    Label,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Note => "note",
            ItemKind::Subcanvas => "subcanvas",
            ItemKind::Label => "label",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "note" => Some(ItemKind::Note),
            "subcanvas" => Some(ItemKind::Subcanvas),
            "label" => Some(ItemKind::Label),
            _ => None,
        }
    }

    pub fn of(item: &CanvasItem) -> Option<Self> {
        Self::parse(item.kind.as_str())
    }
}

/// What the left button is doing with the item it pressed. The item is held
/// by id so a model change mid-gesture never retargets another row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Dragging {
        id: i32,
        offset_x: f32,
        offset_y: f32,
    },
    Resizing {
        id: i32,
        start_x: f32,
        start_y: f32,
        original_width: f32,
        original_height: f32,
    },
}

/// Where the context menu was opened and which item was under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuState {
    pub x: f32,
    pub y: f32,
    pub target: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewNote,
    NewCanvas,
    NewLabel,
    Edit,
    ChangeColor,
    Rename,
    Copy,
    Cut,
    Paste,
    Delete,
    BringToFront,
    SendToBack,
}

impl MenuAction {
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "new-note" => MenuAction::NewNote,
            "new-canvas" => MenuAction::NewCanvas,
            "new-label" => MenuAction::NewLabel,
            "edit" => MenuAction::Edit,
            "change-color" => MenuAction::ChangeColor,
            "rename" => MenuAction::Rename,
            "copy" => MenuAction::Copy,
            "cut" => MenuAction::Cut,
            "paste" => MenuAction::Paste,
            "delete" => MenuAction::Delete,
            "bring-to-front" => MenuAction::BringToFront,
            "send-to-back" => MenuAction::SendToBack,
            _ => return None,
        })
    }
}

/// The dialog currently on screen and what its answer applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingDialog {
    NewNote { x: f32, y: f32 },
    NewLabel { x: f32, y: f32 },
    RenameNote { id: i32 },
    RenameLabel { id: i32 },
    EditNote { id: i32 },
    ChangeColor { id: i32 },
}

impl PendingDialog {
    pub fn heading(&self) -> &'static str {
        match self {
            PendingDialog::NewNote { .. } => "New Note",
            PendingDialog::NewLabel { .. } => "New Text Label",
            PendingDialog::RenameNote { .. } => "Rename Note",
            PendingDialog::RenameLabel { .. } => "Rename Text Label",
            PendingDialog::EditNote { .. } => "Edit Note",
            PendingDialog::ChangeColor { .. } => "Select Color",
        }
    }

    pub fn prompt_label(&self) -> &'static str {
        match self {
            PendingDialog::NewNote { .. } | PendingDialog::RenameNote { .. } => "Enter Note Name:",
            PendingDialog::NewLabel { .. } | PendingDialog::RenameLabel { .. } => "Enter Text:",
            PendingDialog::EditNote { .. } | PendingDialog::ChangeColor { .. } => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    Accepted(String),
    Cancelled,
}

/// Sizes and colours given to newly created items.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasDefaults {
    pub note_width: f32,
    pub note_height: f32,
    pub note_color: Color,
    pub subcanvas_min_width: f32,
    pub subcanvas_min_height: f32,
    pub subcanvas_color: Color,
    pub resize_handle: f32,
    pub label_font_size: f32,
    pub label_color: Color,
}

impl Default for CanvasDefaults {
    fn default() -> Self {
        Self {
            note_width: 100.0,
            note_height: 120.0,
            note_color: Color::from_rgb_u8(0x4e, 0x56, 0x61),
            subcanvas_min_width: 200.0,
            subcanvas_min_height: 200.0,
            subcanvas_color: Color::from_rgb_u8(0x4e, 0x61, 0x59),
            resize_handle: 10.0,
            label_font_size: 18.0,
            label_color: Color::from_rgb_u8(0xc7, 0xc7, 0xc7),
        }
    }
}

impl CanvasDefaults {
    pub fn from_config(config: &AppConfig) -> Self {
        let fallback = Self::default();
        Self {
            note_width: config.note.width,
            note_height: config.note.height,
            note_color: parse_color_or(&config.note.color, fallback.note_color),
            subcanvas_min_width: config.subcanvas.min_width,
            subcanvas_min_height: config.subcanvas.min_height,
            subcanvas_color: parse_color_or(&config.subcanvas.color, fallback.subcanvas_color),
            resize_handle: config.subcanvas.resize_handle,
            label_font_size: config.label.font_size,
            label_color: parse_color_or(&config.label.color, fallback.label_color),
        }
    }
}
