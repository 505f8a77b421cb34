//! Context menu dispatch.

use crate::state::{board, CanvasDefaults, ItemKind, MenuAction, MenuState, PendingDialog};
use crate::CanvasItem;
use log::debug;
use slint::{Model, VecModel};

/// Which menu entries make sense for the item under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuEnablement {
    pub has_target: bool,
    pub can_edit: bool,
    pub can_rename: bool,
    pub can_paste: bool,
}

/// Records where the menu opened and what it targets.
pub fn open(
    items: &VecModel<CanvasItem>,
    clipboard: &Option<CanvasItem>,
    x: f32,
    y: f32,
) -> (MenuState, MenuEnablement) {
    let target = board::item_at(items, x, y).and_then(|index| items.row_data(index));
    let kind = target.as_ref().and_then(ItemKind::of);

    let menu = MenuState {
        x,
        y,
        target: target.as_ref().map(|item| item.id),
    };
    let enablement = MenuEnablement {
        has_target: target.is_some(),
        can_edit: kind == Some(ItemKind::Note),
        can_rename: matches!(kind, Some(ItemKind::Note | ItemKind::Label)),
        can_paste: clipboard.is_some(),
    };
    (menu, enablement)
}

/// Performs a menu action. Actions that need user input return the dialog
/// to open instead of changing anything.
pub fn apply(
    items: &VecModel<CanvasItem>,
    defaults: &CanvasDefaults,
    clipboard: &mut Option<CanvasItem>,
    menu: &MenuState,
    action: MenuAction,
) -> Option<PendingDialog> {
    let target = menu
        .target
        .and_then(|id| board::find_index(items, id))
        .and_then(|index| items.row_data(index));

    match action {
        MenuAction::NewNote => {
            return Some(PendingDialog::NewNote {
                x: menu.x,
                y: menu.y,
            });
        }
        MenuAction::NewLabel => {
            return Some(PendingDialog::NewLabel {
                x: menu.x,
                y: menu.y,
            });
        }
        MenuAction::NewCanvas => {
            board::add_subcanvas(items, defaults, menu.x, menu.y);
        }
        MenuAction::Paste => match clipboard.as_ref() {
            Some(source) => {
                board::paste_copy(items, source, menu.x, menu.y);
            }
            None => debug!("Paste: clipboard is empty"),
        },
        _ => {
            let Some(item) = target else {
                debug!("{action:?}: nothing under the pointer");
                return None;
            };
            return apply_to_item(items, clipboard, item, action);
        }
    }
    None
}

fn apply_to_item(
    items: &VecModel<CanvasItem>,
    clipboard: &mut Option<CanvasItem>,
    item: CanvasItem,
    action: MenuAction,
) -> Option<PendingDialog> {
    let id = item.id;
    match (action, ItemKind::of(&item)) {
        (MenuAction::Edit, Some(ItemKind::Note)) => return Some(PendingDialog::EditNote { id }),
        (MenuAction::Rename, Some(ItemKind::Note)) => {
            return Some(PendingDialog::RenameNote { id });
        }
        (MenuAction::Rename, Some(ItemKind::Label)) => {
            return Some(PendingDialog::RenameLabel { id });
        }
        (MenuAction::ChangeColor, _) => return Some(PendingDialog::ChangeColor { id }),
        (MenuAction::Copy, _) => *clipboard = Some(item),
        (MenuAction::Cut, _) => *clipboard = board::remove_item(items, id),
        (MenuAction::Delete, _) => {
            board::remove_item(items, id);
        }
        (MenuAction::BringToFront, _) => {
            board::raise(items, id);
        }
        (MenuAction::SendToBack, _) => {
            board::lower(items, id);
        }
        (action, kind) => debug!("{action:?} does not apply to {kind:?} {id}"),
    }
    None
}
