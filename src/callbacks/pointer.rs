//! Pointer callbacks for dragging and resizing items.
//!
//! Handles: item_pressed, item_moved, item_released

use crate::state::{board, gesture, CanvasDefaults, PointerState};
use crate::{AppWindow, CanvasItem};
use log::debug;
use slint::{ComponentHandle, Model};
use std::cell::RefCell;
use std::rc::Rc;

/// Sets up all pointer-related callbacks on the UI.
pub fn setup_pointer_callbacks(
    ui: &AppWindow,
    items: Rc<slint::VecModel<CanvasItem>>,
    pointer: Rc<RefCell<PointerState>>,
    defaults: Rc<CanvasDefaults>,
) {
    setup_item_pressed(ui, items.clone(), pointer.clone(), defaults.clone());
    setup_item_moved(ui, items.clone(), pointer.clone(), defaults);
    setup_item_released(ui, items, pointer);
}

fn setup_item_pressed(
    ui: &AppWindow,
    items: Rc<slint::VecModel<CanvasItem>>,
    pointer: Rc<RefCell<PointerState>>,
    defaults: Rc<CanvasDefaults>,
) {
    ui.on_item_pressed(move |index, x, y| {
        let Ok(index) = usize::try_from(index) else {
            return;
        };
        let state = gesture::begin(&items, &defaults, index, x, y);
        debug!("Pointer pressed on row {index}: {state:?}");
        *pointer.borrow_mut() = state;
    });
}

fn setup_item_moved(
    ui: &AppWindow,
    items: Rc<slint::VecModel<CanvasItem>>,
    pointer: Rc<RefCell<PointerState>>,
    defaults: Rc<CanvasDefaults>,
) {
    let ui_weak = ui.as_weak();
    ui.on_item_moved(move |x, y| {
        let Some(ui) = ui_weak.upgrade() else {
            return;
        };
        let canvas = (ui.get_canvas_width(), ui.get_canvas_height());
        let limits = gesture::subcanvas_limits(&defaults, canvas);
        gesture::track(&items, &pointer.borrow(), x, y, limits);
    });
}

fn setup_item_released(
    ui: &AppWindow,
    items: Rc<slint::VecModel<CanvasItem>>,
    pointer: Rc<RefCell<PointerState>>,
) {
    ui.on_item_released(move || {
        let finished = std::mem::take(&mut *pointer.borrow_mut());
        if let PointerState::Resizing { id, .. } = finished {
            let item = board::find_index(&items, id)
                .and_then(|index| items.row_data(index));
            if let Some(item) = item {
                debug!(
                    "Resize finished: sub-canvas {} is {:.0}x{:.0}",
                    item.id, item.width, item.height
                );
            }
        }
    });
}
