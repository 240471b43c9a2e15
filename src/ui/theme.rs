use fltk::{
    enums::Color,
    input::Input,
    menu::MenuBar,
    prelude::*,
    text::{TextDisplay, TextEditor},
    window::Window,
};

pub fn apply_theme(
    window: &mut Window,
    menu: &mut MenuBar,
    chart_url_input: &mut Input,
    values_editor: &mut TextEditor,
    output: &mut TextDisplay,
    is_dark: bool,
) {
    if is_dark {
        window.set_color(Color::from_rgb(25, 25, 25));
        window.set_label_color(Color::from_rgb(220, 220, 220));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        chart_url_input.set_color(Color::from_rgb(30, 30, 30));
        chart_url_input.set_text_color(Color::from_rgb(220, 220, 220));
        chart_url_input.set_cursor_color(Color::from_rgb(255, 255, 255));
        values_editor.set_color(Color::from_rgb(30, 30, 30));
        values_editor.set_text_color(Color::from_rgb(220, 220, 220));
        values_editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        values_editor.set_selection_color(Color::from_rgb(70, 70, 100));
        output.set_color(Color::from_rgb(30, 30, 30));
        output.set_text_color(Color::from_rgb(220, 220, 220));
        output.set_selection_color(Color::from_rgb(70, 70, 100));
    } else {
        window.set_color(Color::from_rgb(240, 240, 240));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200));
        chart_url_input.set_color(Color::White);
        chart_url_input.set_text_color(Color::Black);
        chart_url_input.set_cursor_color(Color::Black);
        values_editor.set_color(Color::White);
        values_editor.set_text_color(Color::Black);
        values_editor.set_cursor_color(Color::Black);
        values_editor.set_selection_color(Color::from_rgb(173, 216, 230));
        output.set_color(Color::White);
        output.set_text_color(Color::Black);
        output.set_selection_color(Color::from_rgb(173, 216, 230));
    }
    window.redraw();
}
