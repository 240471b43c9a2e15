use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, enums::Event, prelude::*};

use chartview::app::messages::Message;
use chartview::app::settings::AppSettings;
use chartview::app::state::AppState;
use chartview::ui::dialogs::about::show_about_dialog;
use chartview::ui::main_window::build_main_window;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));

    let mut widgets = build_main_window(&sender);

    // Closing the window takes the same quit path as File/Quit so settings
    // are persisted either way
    let s = sender;
    widgets.wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::Quit);
        }
    });
    widgets.wind.show();

    let mut state = AppState::new(widgets, sender, settings);

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::RenderRequested => state.submit_render(),
                Message::RenderFinished(outcome) => state.finish_render(outcome),
                Message::CopyOutput => state.copy_output(),
                Message::DownloadOutput => state.download_output(),
                Message::OpenSettings => state.open_settings(),
                Message::ShowAbout => show_about_dialog(),
                Message::Quit => {
                    state.persist_settings();
                    app::quit();
                }
            }
        }
    }
}
