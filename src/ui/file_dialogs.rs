use fltk::dialog::{FileDialogType, NativeFileChooser};

/// Native save dialog, preset with a default file name.
pub fn native_save_dialog(filter: &str, preset_name: &str) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter(filter);
    nfc.set_preset_file(preset_name);
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
