//! Operations over the canvas item collection.
//!
//! The `VecModel` is the single source of truth; its order is the z-order,
//! so the last row is drawn on top and wins hit-tests.

use crate::geometry::{label_extent, Rect};
use crate::state::{CanvasDefaults, ItemKind};
use crate::CanvasItem;
use log::{debug, info};
use slint::{Color, Model, SharedString, VecModel};

pub fn next_id(items: &VecModel<CanvasItem>) -> i32 {
    items.iter().map(|item| item.id).max().map_or(1, |id| id + 1)
}

pub fn find_index(items: &VecModel<CanvasItem>, id: i32) -> Option<usize> {
    items.iter().position(|item| item.id == id)
}

pub fn bounds(item: &CanvasItem) -> Rect {
    Rect::new(item.x, item.y, item.width, item.height)
}

/// Index of the topmost item under the point.
pub fn item_at(items: &VecModel<CanvasItem>, x: f32, y: f32) -> Option<usize> {
    (0..items.row_count()).rev().find(|&i| {
        items
            .row_data(i)
            .is_some_and(|item| bounds(&item).contains(x, y))
    })
}

pub fn count_kind(items: &VecModel<CanvasItem>, kind: ItemKind) -> usize {
    items
        .iter()
        .filter(|item| ItemKind::of(item) == Some(kind))
        .count()
}

pub fn add_note(
    items: &VecModel<CanvasItem>,
    defaults: &CanvasDefaults,
    x: f32,
    y: f32,
    title: &str,
) -> i32 {
    let id = next_id(items);
    items.push(CanvasItem {
        id,
        kind: ItemKind::Note.as_str().into(),
        x,
        y,
        width: defaults.note_width,
        height: defaults.note_height,
        title: title.into(),
        body: SharedString::default(),
        color: defaults.note_color,
    });
    info!("Created note {id} {title:?} at ({x:.0}, {y:.0})");
    id
}

/// New sub-canvases start at the bottom of the z-order.
pub fn add_subcanvas(
    items: &VecModel<CanvasItem>,
    defaults: &CanvasDefaults,
    x: f32,
    y: f32,
) -> i32 {
    let id = next_id(items);
    items.insert(
        0,
        CanvasItem {
            id,
            kind: ItemKind::Subcanvas.as_str().into(),
            x,
            y,
            width: defaults.subcanvas_min_width,
            height: defaults.subcanvas_min_height,
            title: SharedString::default(),
            body: SharedString::default(),
            color: defaults.subcanvas_color,
        },
    );
    info!("Created sub-canvas {id} at ({x:.0}, {y:.0})");
    id
}

pub fn add_label(
    items: &VecModel<CanvasItem>,
    defaults: &CanvasDefaults,
    x: f32,
    y: f32,
    text: &str,
) -> i32 {
    let id = next_id(items);
    let (width, height) = label_extent(text, defaults.label_font_size);
    items.push(CanvasItem {
        id,
        kind: ItemKind::Label.as_str().into(),
        x,
        y,
        width,
        height,
        title: text.into(),
        body: SharedString::default(),
        color: defaults.label_color,
    });
    info!("Created text label {id} {text:?} at ({x:.0}, {y:.0})");
    id
}

/// Removes exactly one item and hands it back.
pub fn remove_item(items: &VecModel<CanvasItem>, id: i32) -> Option<CanvasItem> {
    let Some(index) = find_index(items, id) else {
        debug!("Remove: item {id} no longer exists");
        return None;
    };
    let removed = items.remove(index);
    info!("Removed {} {id}", removed.kind);
    Some(removed)
}

fn update(
    items: &VecModel<CanvasItem>,
    id: i32,
    apply: impl FnOnce(&mut CanvasItem) -> bool,
) -> bool {
    let Some(index) = find_index(items, id) else {
        debug!("Update: item {id} no longer exists");
        return false;
    };
    let Some(mut item) = items.row_data(index) else {
        return false;
    };
    if !apply(&mut item) {
        return false;
    }
    items.set_row_data(index, item);
    true
}

/// Notes take the text as their title; labels display it and are re-measured.
pub fn rename(
    items: &VecModel<CanvasItem>,
    defaults: &CanvasDefaults,
    id: i32,
    text: &str,
) -> bool {
    update(items, id, |item| match ItemKind::of(item) {
        Some(ItemKind::Note) => {
            item.title = text.into();
            true
        }
        Some(ItemKind::Label) => {
            let (width, height) = label_extent(text, defaults.label_font_size);
            item.title = text.into();
            item.width = width;
            item.height = height;
            true
        }
        _ => false,
    })
}

pub fn set_body(items: &VecModel<CanvasItem>, id: i32, text: &str) -> bool {
    update(items, id, |item| {
        if ItemKind::of(item) != Some(ItemKind::Note) {
            return false;
        }
        item.body = text.into();
        true
    })
}

pub fn set_color(items: &VecModel<CanvasItem>, id: i32, color: Color) -> bool {
    update(items, id, |item| {
        item.color = color;
        true
    })
}

pub fn raise(items: &VecModel<CanvasItem>, id: i32) -> bool {
    let Some(index) = find_index(items, id) else {
        return false;
    };
    if index + 1 < items.row_count() {
        let item = items.remove(index);
        items.push(item);
    }
    debug!("Raised item {id} to the front");
    true
}

pub fn lower(items: &VecModel<CanvasItem>, id: i32) -> bool {
    let Some(index) = find_index(items, id) else {
        return false;
    };
    if index > 0 {
        let item = items.remove(index);
        items.insert(0, item);
    }
    debug!("Lowered item {id} to the back");
    true
}

pub fn move_item(items: &VecModel<CanvasItem>, index: usize, x: f32, y: f32) -> bool {
    let Some(mut item) = items.row_data(index) else {
        return false;
    };
    item.x = x;
    item.y = y;
    items.set_row_data(index, item);
    true
}

pub fn resize_item(items: &VecModel<CanvasItem>, index: usize, width: f32, height: f32) -> bool {
    let Some(mut item) = items.row_data(index) else {
        return false;
    };
    item.width = width;
    item.height = height;
    items.set_row_data(index, item);
    true
}

/// Inserts a clone of `source` on top with a fresh id, its corner at (x, y).
pub fn paste_copy(items: &VecModel<CanvasItem>, source: &CanvasItem, x: f32, y: f32) -> i32 {
    let id = next_id(items);
    items.push(CanvasItem {
        id,
        x,
        y,
        ..source.clone()
    });
    info!("Pasted {} {id} at ({x:.0}, {y:.0})", source.kind);
    id
}
