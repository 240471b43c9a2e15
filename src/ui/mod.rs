//! UI layer - window construction, dialogs, theming.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod theme;
