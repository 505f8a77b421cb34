//! Dialog callbacks: text prompt, note editor and colour picker.
//!
//! Handles: dialog_accepted, dialog_cancelled, color_text_edited

use crate::state::{board, dialog, CanvasDefaults, DialogOutcome, PendingDialog};
use crate::utils::{color_to_hex, parse_color};
use crate::{AppWindow, CanvasItem};
use slint::{ComponentHandle, Model};
use std::cell::RefCell;
use std::rc::Rc;

/// Shows the dialog for `pending` and remembers what its answer applies to.
pub fn open_dialog(
    ui: &AppWindow,
    items: &slint::VecModel<CanvasItem>,
    pending: PendingDialog,
    slot: &RefCell<Option<PendingDialog>>,
) {
    let target = |id: i32| {
        board::find_index(items, id).and_then(|index| items.row_data(index))
    };

    ui.set_dialog_title(pending.heading().into());
    ui.set_dialog_label(pending.prompt_label().into());
    ui.set_dialog_text("".into());

    let kind = match pending {
        PendingDialog::EditNote { id } => {
            let Some(note) = target(id) else {
                return;
            };
            ui.set_dialog_note_title(note.title);
            ui.set_dialog_text(note.body);
            "edit-note"
        }
        PendingDialog::ChangeColor { id } => {
            let Some(item) = target(id) else {
                return;
            };
            ui.set_dialog_color(item.color);
            ui.set_dialog_text(color_to_hex(item.color).into());
            "color"
        }
        _ => "prompt",
    };

    *slot.borrow_mut() = Some(pending);
    ui.set_dialog_kind(kind.into());
}

fn close_dialog(ui: &AppWindow) {
    ui.set_dialog_kind("".into());
    ui.set_dialog_text("".into());
}

/// Sets up all dialog-related callbacks on the UI.
pub fn setup_dialog_callbacks(
    ui: &AppWindow,
    items: Rc<slint::VecModel<CanvasItem>>,
    pending: Rc<RefCell<Option<PendingDialog>>>,
    defaults: Rc<CanvasDefaults>,
) {
    setup_dialog_accepted(ui, items.clone(), pending.clone(), defaults.clone());
    setup_dialog_cancelled(ui, items, pending, defaults);
    setup_color_text_edited(ui);
}

fn setup_dialog_accepted(
    ui: &AppWindow,
    items: Rc<slint::VecModel<CanvasItem>>,
    pending: Rc<RefCell<Option<PendingDialog>>>,
    defaults: Rc<CanvasDefaults>,
) {
    let ui_weak = ui.as_weak();
    ui.on_dialog_accepted(move |text| {
        if let Some(ui) = ui_weak.upgrade() {
            close_dialog(&ui);
        }
        let Some(current) = pending.borrow_mut().take() else {
            return;
        };
        dialog::apply_dialog(
            &items,
            &defaults,
            current,
            DialogOutcome::Accepted(text.to_string()),
        );
    });
}

fn setup_dialog_cancelled(
    ui: &AppWindow,
    items: Rc<slint::VecModel<CanvasItem>>,
    pending: Rc<RefCell<Option<PendingDialog>>>,
    defaults: Rc<CanvasDefaults>,
) {
    let ui_weak = ui.as_weak();
    ui.on_dialog_cancelled(move || {
        if let Some(ui) = ui_weak.upgrade() {
            close_dialog(&ui);
        }
        if let Some(current) = pending.borrow_mut().take() {
            dialog::apply_dialog(&items, &defaults, current, DialogOutcome::Cancelled);
        }
    });
}

fn setup_color_text_edited(ui: &AppWindow) {
    let ui_weak = ui.as_weak();
    // Live preview: only well-formed hex values repaint the swatch.
    ui.on_color_text_edited(move |text| {
        if let (Some(color), Some(ui)) = (parse_color(text.as_str()), ui_weak.upgrade()) {
            ui.set_dialog_color(color);
        }
    });
}
