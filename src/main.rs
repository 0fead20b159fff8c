use std::process::ExitCode;

use fltk::{app, prelude::*};
use log::error;

use firple_specimen::app::{Message, SpecimenSettings, SpecimenState};
use firple_specimen::ui::main_window::build_main_window;
use firple_specimen::ui::menu::build_menu;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = SpecimenSettings::load();
    let mut widgets = build_main_window(&settings, &sender);
    build_menu(&mut widgets.menu, &sender);
    widgets.wind.show();

    let mut state = match SpecimenState::new(settings, sender) {
        Ok(state) => state,
        Err(e) => {
            error!("startup failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    state.start();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle(msg) {
                break;
            }
        }
    }

    ExitCode::SUCCESS
}
