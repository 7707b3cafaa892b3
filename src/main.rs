use fltk::{app, prelude::*};

use tab_pad::app::domain::messages::Message;
use tab_pad::app::domain::settings::AppSettings;
use tab_pad::app::state::AppState;
use tab_pad::ui::main_window::build_main_window;

fn main() {
    env_logger::init();

    let settings = AppSettings::load();
    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&settings, &sender);
    // Shown first so tab titles can be measured against an open display
    widgets.wind.show();
    let mut state = AppState::new(widgets, sender, settings);
    log::info!("TabPad started");

    while app.wait() {
        while let Some(msg) = receiver.recv() {
            if state.dispatch(msg) {
                log::info!("Exiting");
                app.quit();
                break;
            }
        }
    }
}
