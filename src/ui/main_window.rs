use fltk::{
    app::Sender,
    button::Button,
    enums::{CallbackTrigger, Font},
    frame::Frame,
    group::Flex,
    input::Input,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor},
    window::Window,
};

use crate::app::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub chart_url_input: Input,
    pub values_editor: TextEditor,
    pub values_buffer: TextBuffer,
    pub render_button: Button,
    pub output: TextDisplay,
    pub output_buffer: TextBuffer,
    pub output_style_buffer: TextBuffer,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 760, 640, "Chartview");
    wind.set_xclass("Chartview");

    let mut flex = Flex::new(0, 0, 760, 640, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_margin(8);
    flex.set_spacing(6);

    let mut menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);
    build_menu(&mut menu, sender);

    // Chart URL row: label, input, submit button
    let mut url_row = Flex::default();
    url_row.set_type(fltk::group::FlexType::Row);
    url_row.set_spacing(6);
    let url_label = Frame::default()
        .with_label("Chart URL:")
        .with_align(fltk::enums::Align::Right | fltk::enums::Align::Inside);
    url_row.fixed(&url_label, 90);
    let mut chart_url_input = Input::default();
    chart_url_input.set_tooltip("Location of a packaged chart (must end with .tgz)");
    // Enter in the URL field submits, like a form
    chart_url_input.set_trigger(CallbackTrigger::EnterKey);
    chart_url_input.emit(*sender, Message::RenderRequested);
    let mut render_button = Button::default().with_label("Render");
    render_button.emit(*sender, Message::RenderRequested);
    url_row.fixed(&render_button, 100);
    url_row.end();
    flex.fixed(&url_row, 30);

    let values_label = Frame::default()
        .with_label("Values (YAML, optional):")
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    flex.fixed(&values_label, 22);

    let values_buffer = TextBuffer::default();
    let mut values_editor = TextEditor::default();
    values_editor.set_buffer(values_buffer.clone());
    values_editor.set_text_font(Font::Courier);
    flex.fixed(&values_editor, 150);

    // Output header row: label plus the copy/download actions
    let mut output_row = Flex::default();
    output_row.set_type(fltk::group::FlexType::Row);
    output_row.set_spacing(6);
    Frame::default()
        .with_label("Rendered manifests:")
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut copy_button = Button::default().with_label("Copy");
    copy_button.emit(*sender, Message::CopyOutput);
    output_row.fixed(&copy_button, 80);
    let mut download_button = Button::default().with_label("Download");
    download_button.emit(*sender, Message::DownloadOutput);
    output_row.fixed(&download_button, 100);
    output_row.end();
    flex.fixed(&output_row, 28);

    let output_buffer = TextBuffer::default();
    let output_style_buffer = TextBuffer::default();
    let mut output = TextDisplay::default();
    output.set_buffer(output_buffer.clone());
    output.set_text_font(Font::Courier);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        chart_url_input,
        values_editor,
        values_buffer,
        render_button,
        output,
        output_buffer,
        output_style_buffer,
    }
}

fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = *sender;
    menu.add(
        "File/Save Manifests As...",
        fltk::enums::Shortcut::Ctrl | 's',
        fltk::menu::MenuFlag::Normal,
        move |_| s.send(Message::DownloadOutput),
    );

    let s = *sender;
    menu.add(
        "File/Settings...",
        fltk::enums::Shortcut::None,
        fltk::menu::MenuFlag::MenuDivider,
        move |_| s.send(Message::OpenSettings),
    );

    let s = *sender;
    menu.add(
        "File/Quit",
        fltk::enums::Shortcut::Ctrl | 'q',
        fltk::menu::MenuFlag::Normal,
        move |_| s.send(Message::Quit),
    );

    let s = *sender;
    menu.add(
        "Edit/Copy Output",
        fltk::enums::Shortcut::Ctrl | fltk::enums::Shortcut::Shift | 'c',
        fltk::menu::MenuFlag::Normal,
        move |_| s.send(Message::CopyOutput),
    );

    let s = *sender;
    menu.add(
        "Help/About Chartview",
        fltk::enums::Shortcut::None,
        fltk::menu::MenuFlag::Normal,
        move |_| s.send(Message::ShowAbout),
    );
}
