//! Left-button gestures on items: dragging anything, resizing sub-canvases.

use crate::geometry::{drag_target, in_resize_handle, resized, SizeLimits};
use crate::state::{board, CanvasDefaults, ItemKind, PointerState};
use crate::CanvasItem;
use log::debug;
use slint::{Model, VecModel};

/// Decides what a press at canvas point (x, y) on row `index` starts.
/// A press inside a sub-canvas grip resizes; any other press drags.
pub fn begin(
    items: &VecModel<CanvasItem>,
    defaults: &CanvasDefaults,
    index: usize,
    x: f32,
    y: f32,
) -> PointerState {
    let Some(item) = items.row_data(index) else {
        return PointerState::Idle;
    };

    let on_grip = ItemKind::of(&item) == Some(ItemKind::Subcanvas)
        && in_resize_handle(&board::bounds(&item), x, y, defaults.resize_handle);

    if on_grip {
        PointerState::Resizing {
            id: item.id,
            start_x: x,
            start_y: y,
            original_width: item.width,
            original_height: item.height,
        }
    } else {
        PointerState::Dragging {
            id: item.id,
            offset_x: x - item.x,
            offset_y: y - item.y,
        }
    }
}

/// Applies a pointer move to the item the gesture holds. Returns whether
/// anything changed; a held item that no longer exists is left alone.
pub fn track(
    items: &VecModel<CanvasItem>,
    state: &PointerState,
    x: f32,
    y: f32,
    limits: SizeLimits,
) -> bool {
    match *state {
        PointerState::Idle => false,
        PointerState::Dragging {
            id,
            offset_x,
            offset_y,
        } => {
            let Some(index) = board::find_index(items, id) else {
                debug!("Drag target {id} is gone");
                return false;
            };
            let (nx, ny) = drag_target((x, y), (offset_x, offset_y));
            board::move_item(items, index, nx, ny)
        }
        PointerState::Resizing {
            id,
            start_x,
            start_y,
            original_width,
            original_height,
        } => {
            let Some(index) = board::find_index(items, id) else {
                debug!("Resize target {id} is gone");
                return false;
            };
            let (width, height) = resized(
                (original_width, original_height),
                (x - start_x, y - start_y),
                limits,
            );
            board::resize_item(items, index, width, height)
        }
    }
}

/// Sub-canvases may not shrink below their minimum or grow past the canvas.
pub fn subcanvas_limits(defaults: &CanvasDefaults, canvas_size: (f32, f32)) -> SizeLimits {
    SizeLimits {
        min: (defaults.subcanvas_min_width, defaults.subcanvas_min_height),
        max: Some(canvas_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_subcanvas() -> (VecModel<CanvasItem>, CanvasDefaults) {
        let items = VecModel::default();
        let defaults = CanvasDefaults::default();
        board::add_subcanvas(&items, &defaults, 100.0, 100.0);
        board::add_note(&items, &defaults, 400.0, 100.0, "note");
        (items, defaults)
    }

    #[test]
    fn press_on_grip_starts_resize() {
        let (items, defaults) = board_with_subcanvas();
        let state = begin(&items, &defaults, 0, 295.0, 295.0);
        assert!(matches!(state, PointerState::Resizing { id: 1, .. }));
    }

    #[test]
    fn press_elsewhere_starts_drag() {
        let (items, defaults) = board_with_subcanvas();
        assert_eq!(
            begin(&items, &defaults, 0, 150.0, 120.0),
            PointerState::Dragging {
                id: 1,
                offset_x: 50.0,
                offset_y: 20.0
            }
        );
        // Notes never resize, even at their bottom-right corner.
        assert!(matches!(
            begin(&items, &defaults, 1, 495.0, 215.0),
            PointerState::Dragging { id: 2, .. }
        ));
    }

    #[test]
    fn press_on_missing_row_is_idle() {
        let (items, defaults) = board_with_subcanvas();
        assert_eq!(begin(&items, &defaults, 7, 0.0, 0.0), PointerState::Idle);
    }

    #[test]
    fn drag_moves_by_pointer_delta() {
        let (items, defaults) = board_with_subcanvas();
        let state = begin(&items, &defaults, 1, 410.0, 105.0);
        let limits = subcanvas_limits(&defaults, (800.0, 600.0));

        assert!(track(&items, &state, 210.0, 305.0, limits));
        let note = items.row_data(1).unwrap();
        assert_eq!((note.x, note.y), (200.0, 300.0));
    }

    #[test]
    fn resize_is_clamped_to_minimum_and_canvas() {
        let (items, defaults) = board_with_subcanvas();
        let state = begin(&items, &defaults, 0, 295.0, 295.0);
        let limits = subcanvas_limits(&defaults, (800.0, 600.0));

        track(&items, &state, 100.0, 50.0, limits);
        let sub = items.row_data(0).unwrap();
        assert_eq!((sub.width, sub.height), (200.0, 200.0));

        track(&items, &state, 2000.0, 345.0, limits);
        let sub = items.row_data(0).unwrap();
        assert_eq!((sub.width, sub.height), (800.0, 250.0));
    }

    #[test]
    fn drag_follows_its_item_after_rows_shift() {
        let (items, defaults) = board_with_subcanvas();
        let state = begin(&items, &defaults, 1, 410.0, 105.0);
        let limits = subcanvas_limits(&defaults, (800.0, 600.0));

        // Sending the note to the back moves it to row 0.
        board::lower(&items, 2);
        assert!(track(&items, &state, 60.0, 55.0, limits));

        let note = items.row_data(0).unwrap();
        assert_eq!((note.id, note.x, note.y), (2, 50.0, 50.0));
        let sub = items.row_data(1).unwrap();
        assert_eq!((sub.x, sub.y), (100.0, 100.0));
    }

    #[test]
    fn drag_of_removed_item_leaves_others_alone() {
        let items = VecModel::default();
        let defaults = CanvasDefaults::default();
        let held = board::add_note(&items, &defaults, 0.0, 0.0, "held");
        board::add_note(&items, &defaults, 300.0, 300.0, "bystander");
        let limits = subcanvas_limits(&defaults, (800.0, 600.0));

        let state = begin(&items, &defaults, 0, 10.0, 10.0);
        board::remove_item(&items, held);

        assert!(!track(&items, &state, 510.0, 510.0, limits));
        let bystander = items.row_data(0).unwrap();
        assert_eq!((bystander.x, bystander.y), (300.0, 300.0));
    }

    #[test]
    fn idle_ignores_moves() {
        let (items, defaults) = board_with_subcanvas();
        let limits = subcanvas_limits(&defaults, (800.0, 600.0));
        assert!(!track(&items, &PointerState::Idle, 1.0, 1.0, limits));
    }
}
