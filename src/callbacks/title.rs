//! Inline editing of the canvas title.

use crate::AppWindow;
use log::info;
use slint::ComponentHandle;

pub fn setup_title_callbacks(ui: &AppWindow) {
    let ui_weak = ui.as_weak();
    ui.on_title_edited(move |text| {
        if let Some(ui) = ui_weak.upgrade() {
            info!("Canvas title set to {:?}", text.as_str());
            ui.set_canvas_title(text);
            ui.set_editing_title(false);
        }
    });
}
