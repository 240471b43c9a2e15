use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use fltk::{
    app::Sender,
    button::Button,
    dialog,
    enums::Font,
    input::Input,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor},
    window::Window,
};

use super::messages::{Message, RenderOutcome};
use super::render_controller::{FormWidgets, RenderController};
use super::settings::{AppSettings, ThemeMode};
use super::syntax::ManifestHighlighter;
use crate::ui::dialogs::settings_dialog::show_settings_dialog;
use crate::ui::file_dialogs::native_save_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;

/// Default file name offered by the download action.
pub const DOWNLOAD_FILE_NAME: &str = "rendered-manifests.yaml";

pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub chart_url_input: Input,
    pub values_editor: TextEditor,
    pub values_buffer: TextBuffer,
    pub render_button: Button,
    pub output: TextDisplay,
    pub output_buffer: TextBuffer,
    pub output_style_buffer: TextBuffer,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub render: RenderController,
    pub highlighter: ManifestHighlighter,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
    ) -> Self {
        let (is_dark, font_size, last_chart_url) = {
            let s = settings.borrow();
            (
                s.theme_mode == ThemeMode::Dark,
                s.font_size as i32,
                s.last_chart_url.clone(),
            )
        };
        let highlighter = ManifestHighlighter::new(is_dark, Font::Courier, font_size);

        let mut state = Self {
            window: widgets.wind,
            menu: widgets.menu,
            chart_url_input: widgets.chart_url_input,
            values_editor: widgets.values_editor,
            values_buffer: widgets.values_buffer,
            render_button: widgets.render_button,
            output: widgets.output,
            output_buffer: widgets.output_buffer,
            output_style_buffer: widgets.output_style_buffer,
            sender,
            settings,
            render: RenderController::new(),
            highlighter,
        };

        state.chart_url_input.set_value(&last_chart_url);
        state.values_editor.set_text_size(font_size);
        state.output.set_text_size(font_size);
        state.output.set_highlight_data(
            state.output_style_buffer.clone(),
            state.highlighter.style_table(),
        );
        state.apply_theme();
        state
    }

    /// Form submit: validate, then render on a worker thread.
    pub fn submit_render(&mut self) {
        let (server_url, timeout_secs) = {
            let s = self.settings.borrow();
            (s.server_url.clone(), s.request_timeout_secs)
        };
        let sender = self.sender;
        let mut widgets = FormWidgets {
            chart_url: &mut self.chart_url_input,
            values_buffer: &mut self.values_buffer,
            render_button: &mut self.render_button,
            output: &mut self.output,
            output_buffer: &mut self.output_buffer,
            style_buffer: &mut self.output_style_buffer,
        };
        self.render.submit(&server_url, timeout_secs, &mut widgets, &sender);

        if self.render.in_flight() {
            self.settings.borrow_mut().last_chart_url = self.chart_url_input.value();
        }
    }

    /// The worker thread's result arrived over the channel.
    pub fn finish_render(&mut self, outcome: RenderOutcome) {
        let highlighting_enabled = self.settings.borrow().highlighting_enabled;
        let mut widgets = FormWidgets {
            chart_url: &mut self.chart_url_input,
            values_buffer: &mut self.values_buffer,
            render_button: &mut self.render_button,
            output: &mut self.output,
            output_buffer: &mut self.output_buffer,
            style_buffer: &mut self.output_style_buffer,
        };
        self.render.finish(
            outcome,
            &mut self.highlighter,
            highlighting_enabled,
            &mut widgets,
        );
    }

    /// Copy the current output text to the system clipboard.
    pub fn copy_output(&mut self) {
        fltk::app::copy(&self.output_buffer.text());
        dialog::message_default("Copied to clipboard!");
    }

    /// Save the current output text as a YAML file chosen by the user.
    pub fn download_output(&mut self) {
        let text = self.output_buffer.text();
        if let Some(path) = native_save_dialog("*.yaml", DOWNLOAD_FILE_NAME) {
            match fs::write(&path, text) {
                Ok(_) => {}
                Err(e) => dialog::alert_default(&format!("Error saving file: {}", e)),
            }
        }
    }

    pub fn open_settings(&mut self) {
        let current = self.settings.borrow().clone();
        if let Some(new_settings) = show_settings_dialog(&current) {
            if let Err(e) = new_settings.save() {
                dialog::alert_default(&format!("Failed to save settings: {}", e));
            }
            self.apply_settings(new_settings);
        }
    }

    fn apply_settings(&mut self, new_settings: AppSettings) {
        let old = self.settings.replace(new_settings.clone());

        if old.theme_mode != new_settings.theme_mode {
            self.highlighter
                .set_dark_mode(new_settings.theme_mode == ThemeMode::Dark);
            self.apply_theme();
        }
        if old.font_size != new_settings.font_size {
            let size = new_settings.font_size as i32;
            self.highlighter.set_font(Font::Courier, size);
            self.values_editor.set_text_size(size);
            self.output.set_text_size(size);
        }

        // Restyle whatever the output shows under the new theme/size/toggle
        let mut widgets = FormWidgets {
            chart_url: &mut self.chart_url_input,
            values_buffer: &mut self.values_buffer,
            render_button: &mut self.render_button,
            output: &mut self.output,
            output_buffer: &mut self.output_buffer,
            style_buffer: &mut self.output_style_buffer,
        };
        self.render.restyle_output(
            &mut self.highlighter,
            new_settings.highlighting_enabled,
            &mut widgets,
        );
        self.window.redraw();
    }

    pub fn apply_theme(&mut self) {
        let is_dark = self.settings.borrow().theme_mode == ThemeMode::Dark;
        apply_theme(
            &mut self.window,
            &mut self.menu,
            &mut self.chart_url_input,
            &mut self.values_editor,
            &mut self.output,
            is_dark,
        );
    }

    /// Persist settings (last-used chart URL among them) on the way out.
    pub fn persist_settings(&self) {
        if let Err(e) = self.settings.borrow().save() {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
