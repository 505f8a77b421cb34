//! Context menu callbacks.
//!
//! Handles: open_context_menu, menu_action

use crate::callbacks::dialogs::open_dialog;
use crate::state::{menu, CanvasDefaults, MenuAction, MenuState, PendingDialog};
use crate::{AppWindow, CanvasItem};
use log::warn;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// Sets up all context menu callbacks on the UI.
pub fn setup_context_menu_callbacks(
    ui: &AppWindow,
    items: Rc<slint::VecModel<CanvasItem>>,
    menu_state: Rc<RefCell<MenuState>>,
    pending: Rc<RefCell<Option<PendingDialog>>>,
    clipboard: Rc<RefCell<Option<CanvasItem>>>,
    defaults: Rc<CanvasDefaults>,
) {
    setup_open_context_menu(ui, items.clone(), menu_state.clone(), clipboard.clone());
    setup_menu_action(ui, items, menu_state, pending, clipboard, defaults);
}

fn setup_open_context_menu(
    ui: &AppWindow,
    items: Rc<slint::VecModel<CanvasItem>>,
    menu_state: Rc<RefCell<MenuState>>,
    clipboard: Rc<RefCell<Option<CanvasItem>>>,
) {
    let ui_weak = ui.as_weak();
    ui.on_open_context_menu(move |x, y| {
        let (state, enablement) = menu::open(&items, &clipboard.borrow(), x, y);
        *menu_state.borrow_mut() = state;

        if let Some(ui) = ui_weak.upgrade() {
            ui.set_menu_has_target(enablement.has_target);
            ui.set_menu_can_edit(enablement.can_edit);
            ui.set_menu_can_rename(enablement.can_rename);
            ui.set_menu_can_paste(enablement.can_paste);
        }
    });
}

fn setup_menu_action(
    ui: &AppWindow,
    items: Rc<slint::VecModel<CanvasItem>>,
    menu_state: Rc<RefCell<MenuState>>,
    pending: Rc<RefCell<Option<PendingDialog>>>,
    clipboard: Rc<RefCell<Option<CanvasItem>>>,
    defaults: Rc<CanvasDefaults>,
) {
    let ui_weak = ui.as_weak();
    ui.on_menu_action(move |name| {
        let Some(action) = MenuAction::parse(name.as_str()) else {
            warn!("Unknown menu action {:?}", name.as_str());
            return;
        };

        let state = *menu_state.borrow();
        let dialog = menu::apply(
            &items,
            &defaults,
            &mut clipboard.borrow_mut(),
            &state,
            action,
        );

        if let (Some(dialog), Some(ui)) = (dialog, ui_weak.upgrade()) {
            open_dialog(&ui, &items, dialog, &pending);
        }
    });
}
