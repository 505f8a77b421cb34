//! File menu callbacks.
//!
//! New, Open, Save and Save As only log their label; nothing is persisted.

use crate::AppWindow;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
}

impl FileAction {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(FileAction::New),
            "open" => Some(FileAction::Open),
            "save" => Some(FileAction::Save),
            "save-as" => Some(FileAction::SaveAs),
            "exit" => Some(FileAction::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileAction::New => "New",
            FileAction::Open => "Open",
            FileAction::Save => "Save",
            FileAction::SaveAs => "Save As",
            FileAction::Exit => "Exit",
        }
    }
}

pub fn setup_file_callbacks(ui: &AppWindow) {
    ui.on_file_action(move |name| {
        let Some(action) = FileAction::parse(name.as_str()) else {
            warn!("Unknown file action {:?}", name.as_str());
            return;
        };
        info!("{}", action.label());
        if action == FileAction::Exit {
            if let Err(e) = slint::quit_event_loop() {
                warn!("Failed to quit: {e}");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_names_map_to_labels() {
        assert_eq!(FileAction::parse("save-as").map(FileAction::label), Some("Save As"));
        assert_eq!(FileAction::parse("exit"), Some(FileAction::Exit));
        assert_eq!(FileAction::parse("print"), None);
    }
}
