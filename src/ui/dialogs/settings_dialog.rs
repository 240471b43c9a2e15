use fltk::{
    button::{Button, CheckButton, RadioRoundButton},
    group::Group,
    frame::Frame,
    input::{Input, IntInput},
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::settings::{AppSettings, ThemeMode};

/// Show settings dialog and return updated settings if user clicked Save.
pub fn show_settings_dialog(current_settings: &AppSettings) -> Option<AppSettings> {
    let mut dialog = Window::default()
        .with_size(350, 440)
        .with_label("Settings")
        .center_screen();
    dialog.make_modal(true);

    // Rendering service section
    Frame::default()
        .with_pos(15, 15)
        .with_size(320, 25)
        .with_label("Rendering Service URL:")
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut url_input = Input::default().with_pos(30, 45).with_size(290, 25);
    url_input.set_value(&current_settings.server_url);

    Frame::default()
        .with_pos(15, 80)
        .with_size(320, 25)
        .with_label("Request Timeout (seconds):")
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut timeout_input = IntInput::default().with_pos(30, 110).with_size(290, 25);
    timeout_input.set_value(&current_settings.request_timeout_secs.to_string());

    // Theme section
    Frame::default()
        .with_pos(15, 145)
        .with_size(320, 25)
        .with_label("Theme:")
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let theme_group = Group::default().with_pos(30, 175).with_size(280, 50);
    let mut theme_light = RadioRoundButton::default()
        .with_pos(30, 175)
        .with_size(280, 25)
        .with_label("Light");
    let mut theme_dark = RadioRoundButton::default()
        .with_pos(30, 200)
        .with_size(280, 25)
        .with_label("Dark");
    theme_group.end();

    match current_settings.theme_mode {
        ThemeMode::Light => theme_light.set_value(true),
        ThemeMode::Dark => theme_dark.set_value(true),
    }

    // Font size section
    Frame::default()
        .with_pos(15, 235)
        .with_size(320, 25)
        .with_label("Font Size:")
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let size_group = Group::default().with_pos(30, 265).with_size(280, 75);
    let mut size_12 = RadioRoundButton::default()
        .with_pos(30, 265)
        .with_size(280, 25)
        .with_label("Small (12)");
    let mut size_14 = RadioRoundButton::default()
        .with_pos(30, 290)
        .with_size(280, 25)
        .with_label("Medium (14)");
    let mut size_18 = RadioRoundButton::default()
        .with_pos(30, 315)
        .with_size(280, 25)
        .with_label("Large (18)");
    size_group.end();

    match current_settings.font_size {
        12 => size_12.set_value(true),
        18 => size_18.set_value(true),
        _ => size_14.set_value(true),
    }

    // View options
    let mut check_highlighting = CheckButton::default()
        .with_pos(30, 350)
        .with_size(290, 25)
        .with_label("Highlight rendered manifests");
    check_highlighting.set_value(current_settings.highlighting_enabled);

    // Buttons at bottom
    let mut save_btn = Button::default()
        .with_pos(150, 390)
        .with_size(90, 30)
        .with_label("Save");
    let mut cancel_btn = Button::default()
        .with_pos(250, 390)
        .with_size(90, 30)
        .with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();
    let result_cancel = result.clone();

    let dialog_save = dialog.clone();
    let current = current_settings.clone();
    save_btn.set_callback(move |_| {
        let new_settings = AppSettings {
            server_url: url_input.value().trim().to_string(),
            request_timeout_secs: timeout_input
                .value()
                .parse()
                .unwrap_or(current.request_timeout_secs),
            theme_mode: if theme_dark.value() {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            },
            font_size: if size_12.value() {
                12
            } else if size_18.value() {
                18
            } else {
                14
            },
            highlighting_enabled: check_highlighting.value(),
            last_chart_url: current.last_chart_url.clone(),
        };

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        *result_cancel.borrow_mut() = None;
        dialog_cancel.clone().hide();
    });

    let result_close = result.clone();
    dialog.set_callback(move |w| {
        *result_close.borrow_mut() = None;
        w.hide();
    });

    super::run_dialog(&dialog);

    result.borrow().clone()
}
