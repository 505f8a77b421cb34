//! Resolving dialog answers into canvas changes.

use crate::state::{board, CanvasDefaults, DialogOutcome, PendingDialog};
use crate::utils::parse_color;
use crate::CanvasItem;
use log::{debug, warn};
use slint::VecModel;

/// Applies the user's answer. Cancelling never changes anything; a colour
/// answer that does not parse counts as a cancel.
pub fn apply_dialog(
    items: &VecModel<CanvasItem>,
    defaults: &CanvasDefaults,
    pending: PendingDialog,
    outcome: DialogOutcome,
) -> bool {
    let DialogOutcome::Accepted(text) = outcome else {
        debug!("{} dialog cancelled", pending.heading());
        return false;
    };

    match pending {
        PendingDialog::NewNote { x, y } => {
            board::add_note(items, defaults, x, y, &text);
            true
        }
        PendingDialog::NewLabel { x, y } => {
            board::add_label(items, defaults, x, y, &text);
            true
        }
        PendingDialog::RenameNote { id } | PendingDialog::RenameLabel { id } => {
            board::rename(items, defaults, id, &text)
        }
        PendingDialog::EditNote { id } => board::set_body(items, id, &text),
        PendingDialog::ChangeColor { id } => match parse_color(&text) {
            Some(color) => board::set_color(items, id, color),
            None => {
                warn!("Ignoring invalid colour {text:?}");
                false
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slint::{Color, Model};

    fn accepted(text: &str) -> DialogOutcome {
        DialogOutcome::Accepted(text.to_string())
    }

    #[test]
    fn new_note_created_only_when_accepted() {
        let items = VecModel::default();
        let defaults = CanvasDefaults::default();
        let pending = PendingDialog::NewNote { x: 5.0, y: 6.0 };

        assert!(!apply_dialog(&items, &defaults, pending, DialogOutcome::Cancelled));
        assert_eq!(items.row_count(), 0);

        assert!(apply_dialog(&items, &defaults, pending, accepted("Groceries")));
        let note = items.row_data(0).unwrap();
        assert_eq!(note.title.as_str(), "Groceries");
        assert_eq!((note.x, note.y), (5.0, 6.0));
    }

    #[test]
    fn empty_answer_still_creates() {
        let items = VecModel::default();
        let defaults = CanvasDefaults::default();
        assert!(apply_dialog(
            &items,
            &defaults,
            PendingDialog::NewLabel { x: 0.0, y: 0.0 },
            accepted("")
        ));
        assert_eq!(items.row_count(), 1);
    }

    #[test]
    fn cancelled_colour_keeps_previous_colour() {
        let items = VecModel::default();
        let defaults = CanvasDefaults::default();
        let id = board::add_note(&items, &defaults, 0.0, 0.0, "n");
        let pending = PendingDialog::ChangeColor { id };

        assert!(!apply_dialog(&items, &defaults, pending, DialogOutcome::Cancelled));
        assert_eq!(items.row_data(0).unwrap().color, defaults.note_color);

        assert!(!apply_dialog(&items, &defaults, pending, accepted("purple-ish")));
        assert_eq!(items.row_data(0).unwrap().color, defaults.note_color);

        assert!(apply_dialog(&items, &defaults, pending, accepted("#102030")));
        assert_eq!(
            items.row_data(0).unwrap().color,
            Color::from_rgb_u8(0x10, 0x20, 0x30)
        );
    }

    #[test]
    fn edit_saves_body() {
        let items = VecModel::default();
        let defaults = CanvasDefaults::default();
        let id = board::add_note(&items, &defaults, 0.0, 0.0, "n");

        let pending = PendingDialog::EditNote { id };
        apply_dialog(&items, &defaults, pending, accepted("body text"));
        assert_eq!(items.row_data(0).unwrap().body.as_str(), "body text");

        apply_dialog(&items, &defaults, pending, DialogOutcome::Cancelled);
        assert_eq!(items.row_data(0).unwrap().body.as_str(), "body text");
    }

    #[test]
    fn answer_for_deleted_item_is_dropped() {
        let items = VecModel::default();
        let defaults = CanvasDefaults::default();
        let id = board::add_note(&items, &defaults, 0.0, 0.0, "n");
        board::remove_item(&items, id);

        assert!(!apply_dialog(
            &items,
            &defaults,
            PendingDialog::RenameNote { id },
            accepted("ghost")
        ));
        assert_eq!(items.row_count(), 0);
    }
}
