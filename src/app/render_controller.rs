use std::thread;

use fltk::{
    app::Sender,
    button::Button,
    input::Input,
    prelude::*,
    text::{TextBuffer, TextDisplay},
};

use super::chart::{self, TemplateRequest};
use super::client::TemplateClient;
use super::messages::{Message, RenderOutcome};
use super::syntax::{self, ManifestHighlighter};

/// Borrowed UI widgets needed by the submit/finish flow.
pub struct FormWidgets<'a> {
    pub chart_url: &'a mut Input,
    pub values_buffer: &'a mut TextBuffer,
    pub render_button: &'a mut Button,
    pub output: &'a mut TextDisplay,
    pub output_buffer: &'a mut TextBuffer,
    pub style_buffer: &'a mut TextBuffer,
}

/// Owns the submit flow: validation, the in-flight guard, and the
/// values back-fill decision.
pub struct RenderController {
    in_flight: bool,
    backfill_values: bool,
    has_manifests: bool,
}

impl RenderController {
    pub fn new() -> Self {
        Self {
            in_flight: false,
            backfill_values: false,
            has_manifests: false,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the output pane currently shows rendered manifests
    /// (as opposed to an error message or nothing).
    pub fn has_manifests(&self) -> bool {
        self.has_manifests
    }

    /// Validate the form and start a render request on a worker thread.
    ///
    /// Validation failures are written straight to the output area and issue
    /// no request. While a request is outstanding the Render button stays
    /// deactivated and further submits are ignored, so only the completing
    /// request ever writes the output.
    pub fn submit(
        &mut self,
        server_url: &str,
        timeout_secs: u64,
        widgets: &mut FormWidgets,
        sender: &Sender<Message>,
    ) {
        if self.in_flight {
            return;
        }

        let chart_url = widgets.chart_url.value();
        if let Err(e) = chart::validate_chart_url(&chart_url) {
            self.show_plain(widgets, &format!("Error: {}", e));
            return;
        }

        let values_text = widgets.values_buffer.text();
        let values = match chart::parse_values(&values_text) {
            Ok(v) => v,
            Err(e) => {
                self.show_plain(widgets, &format!("Error parsing YAML: {}", e));
                return;
            }
        };

        self.in_flight = true;
        self.backfill_values = values_text.trim().is_empty();
        widgets.render_button.deactivate();
        widgets.render_button.set_label("Rendering...");

        let client = TemplateClient::new(server_url).with_timeout(timeout_secs);
        let request = TemplateRequest { chart_url, values };
        let s = *sender;
        thread::spawn(move || {
            let outcome = match client.render(&request) {
                Ok(response) => RenderOutcome::Rendered(response),
                Err(e) => RenderOutcome::Failed(format!("Error: {}", e)),
            };
            s.send(Message::RenderFinished(outcome));
        });
    }

    /// Handle the worker thread's result on the UI thread.
    pub fn finish(
        &mut self,
        outcome: RenderOutcome,
        highlighter: &mut ManifestHighlighter,
        highlighting_enabled: bool,
        widgets: &mut FormWidgets,
    ) {
        self.in_flight = false;
        widgets.render_button.set_label("Render");
        widgets.render_button.activate();

        match outcome {
            RenderOutcome::Rendered(response) => {
                self.has_manifests = true;
                widgets.output_buffer.set_text(&response.templates);
                restyle(
                    &response.templates,
                    highlighter,
                    highlighting_enabled,
                    widgets,
                );

                // The server substituted the chart's default values; mirror
                // them into the empty values editor so the user can tweak
                // and re-render.
                if response.values_exist && self.backfill_values {
                    widgets.values_buffer.set_text(&response.values);
                }
            }
            RenderOutcome::Failed(message) => {
                self.show_plain(widgets, &message);
            }
        }
    }

    /// Re-apply styling to whatever the output pane currently shows,
    /// after a theme/font/highlighting change.
    pub fn restyle_output(
        &self,
        highlighter: &mut ManifestHighlighter,
        highlighting_enabled: bool,
        widgets: &mut FormWidgets,
    ) {
        let text = widgets.output_buffer.text();
        if self.has_manifests {
            restyle(&text, highlighter, highlighting_enabled, widgets);
        } else {
            widgets.style_buffer.set_text(&syntax::plain_style(&text));
            widgets
                .output
                .set_highlight_data(widgets.style_buffer.clone(), highlighter.style_table());
            widgets.output.redraw();
        }
    }

    fn show_plain(&mut self, widgets: &mut FormWidgets, message: &str) {
        self.has_manifests = false;
        widgets.output_buffer.set_text(message);
        widgets.style_buffer.set_text(&syntax::plain_style(message));
        widgets.output.redraw();
    }
}

fn restyle(
    text: &str,
    highlighter: &mut ManifestHighlighter,
    highlighting_enabled: bool,
    widgets: &mut FormWidgets,
) {
    let style = if highlighting_enabled {
        highlighter.highlight(text)
    } else {
        syntax::plain_style(text)
    };
    widgets.style_buffer.set_text(&style);
    // The style table may have grown new entries during this highlight
    widgets
        .output
        .set_highlight_data(widgets.style_buffer.clone(), highlighter.style_table());
    widgets.output.redraw();
}
