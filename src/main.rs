use log::warn;
use notecanvas::callbacks::{context_menu, dialogs, file_menu, pointer, title};
use notecanvas::config::{self, AppConfig};
use notecanvas::state::{CanvasDefaults, MenuState, PendingDialog, PointerState};
use notecanvas::{logging, utils, AppWindow, CanvasItem};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

fn apply_appearance(ui: &AppWindow, config: &AppConfig, defaults: &CanvasDefaults) {
    ui.set_window_title(config.window.title.as_str().into());
    ui.set_window_width(config.window.width);
    ui.set_window_height(config.window.height);
    ui.set_canvas_title(config.window.canvas_title.as_str().into());
    ui.set_text_color(defaults.label_color);
    ui.set_label_font_size(defaults.label_font_size);
    ui.set_resize_handle(defaults.resize_handle);
    ui.set_swatches(Rc::new(slint::VecModel::from(utils::palette_swatches())).into());
}

fn main() -> Result<(), slint::PlatformError> {
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Held for the whole run; dropping it stops file logging.
    let _logger = match logging::init_logging(&config.logging) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Logging disabled: {e}");
            None
        }
    };
    if let Some(e) = config_error {
        warn!("{e}. Using defaults.");
    }

    let ui = AppWindow::new()?;
    let defaults = Rc::new(CanvasDefaults::from_config(&config));
    apply_appearance(&ui, &config, &defaults);

    let items = Rc::new(slint::VecModel::from(Vec::<CanvasItem>::new()));
    ui.set_items(items.clone().into());

    let pointer_state = Rc::new(RefCell::new(PointerState::default()));
    let menu_state = Rc::new(RefCell::new(MenuState::default()));
    let pending_dialog: Rc<RefCell<Option<PendingDialog>>> = Rc::new(RefCell::new(None));
    let clipboard: Rc<RefCell<Option<CanvasItem>>> = Rc::new(RefCell::new(None));

    pointer::setup_pointer_callbacks(&ui, items.clone(), pointer_state, defaults.clone());
    context_menu::setup_context_menu_callbacks(
        &ui,
        items.clone(),
        menu_state,
        pending_dialog.clone(),
        clipboard,
        defaults.clone(),
    );
    dialogs::setup_dialog_callbacks(&ui, items, pending_dialog, defaults);
    file_menu::setup_file_callbacks(&ui);
    title::setup_title_callbacks(&ui);

    ui.run()
}
