//! YAML highlighting for the output pane.
//!
//! Unlike an editor, the output is written once per render and never edited,
//! so a single full pass is enough; there is no incremental re-highlight.
//! FLTK styles text through a parallel style buffer holding one style
//! character per byte, so the highlighter's job is turning manifest text
//! into that style string plus a matching style table.

use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color as SyntectColor, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

const DARK_THEME: &str = "base16-ocean.dark";
const LIGHT_THEME: &str = "base16-ocean.light";

// FLTK style chars run 'A'.. ; entry 0 is the default style.
const MAX_STYLES: usize = 26;

/// Maps syntect foreground colors to FLTK style characters, growing the
/// style table as new colors show up.
struct StyleMap {
    color_to_char: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
    font: Font,
    font_size: i32,
}

impl StyleMap {
    fn new(font: Font, font_size: i32) -> Self {
        let mut map = Self {
            color_to_char: HashMap::new(),
            entries: Vec::new(),
            font,
            font_size,
        };
        map.push_default_entry();
        map
    }

    fn push_default_entry(&mut self) {
        self.entries.push(StyleTableEntry {
            color: Color::Foreground,
            font: self.font,
            size: self.font_size,
        });
    }

    fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.color_to_char.get(&key) {
            return ch;
        }

        let idx = self.entries.len();
        if idx >= MAX_STYLES {
            // Table full; reuse the last entry rather than overflow
            return (b'A' + (MAX_STYLES - 1) as u8) as char;
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert(key, ch);
        ch
    }

    fn clear(&mut self) {
        self.color_to_char.clear();
        self.entries.clear();
        self.push_default_entry();
    }

    fn set_font(&mut self, font: Font, size: i32) {
        self.font = font;
        self.font_size = size;
        for entry in &mut self.entries {
            entry.font = font;
            entry.size = size;
        }
    }
}

/// One-shot YAML highlighter for rendered manifests.
pub struct ManifestHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    style_map: StyleMap,
}

impl ManifestHighlighter {
    pub fn new(is_dark: bool, font: Font, font_size: i32) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme_for(is_dark).to_string(),
            style_map: StyleMap::new(font, font_size),
        }
    }

    /// Highlight `text` as YAML. Returns one style char per byte.
    pub fn highlight(&mut self, text: &str) -> String {
        let syntax = match self.syntax_set.find_syntax_by_extension("yaml") {
            Some(s) => s,
            None => return plain_style(text),
        };
        let theme = &self.theme_set.themes[&self.theme_name];
        let mut lines = HighlightLines::new(syntax, theme);

        let mut style_string = String::with_capacity(text.len());
        for line in LinesWithEndings::from(text) {
            match lines.highlight_line(line, &self.syntax_set) {
                Ok(regions) => {
                    for (style, piece) in regions {
                        let ch = self.style_map.get_or_insert(style.foreground);
                        for _ in 0..piece.len() {
                            style_string.push(ch);
                        }
                    }
                }
                Err(_) => {
                    for _ in 0..line.len() {
                        style_string.push('A');
                    }
                }
            }
        }
        style_string
    }

    /// Switch theme for dark/light mode. Clears the style map so colors
    /// from the old theme don't linger in the table.
    pub fn set_dark_mode(&mut self, is_dark: bool) {
        self.theme_name = theme_for(is_dark).to_string();
        self.style_map.clear();
    }

    pub fn set_font(&mut self, font: Font, size: i32) {
        self.style_map.set_font(font, size);
    }

    /// Style table for FLTK's `set_highlight_data`.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries.clone()
    }
}

fn theme_for(is_dark: bool) -> &'static str {
    if is_dark { DARK_THEME } else { LIGHT_THEME }
}

/// Default style string: every byte styled with the plain entry.
pub fn plain_style(text: &str) -> String {
    "A".repeat(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> ManifestHighlighter {
        ManifestHighlighter::new(false, Font::Courier, 14)
    }

    #[test]
    fn test_style_string_is_one_char_per_byte() {
        let mut h = highlighter();
        let text = "apiVersion: v1\nkind: Service\n";
        assert_eq!(h.highlight(text).len(), text.len());
    }

    #[test]
    fn test_style_string_counts_bytes_not_chars() {
        let mut h = highlighter();
        // Multi-byte UTF-8 in a comment must still map byte-for-byte
        let text = "# café ↑\nname: test\n";
        assert_eq!(h.highlight(text).len(), text.len());
    }

    #[test]
    fn test_empty_input() {
        let mut h = highlighter();
        assert_eq!(h.highlight(""), "");
    }

    #[test]
    fn test_style_table_has_default_entry() {
        let h = highlighter();
        let table = h.style_table();
        assert!(!table.is_empty());
        assert_eq!(table[0].color, Color::Foreground);
    }

    #[test]
    fn test_theme_switch_resets_style_table() {
        let mut h = highlighter();
        h.highlight("key: value\n");
        assert!(h.style_table().len() > 1);
        h.set_dark_mode(true);
        assert_eq!(h.style_table().len(), 1);
    }

    #[test]
    fn test_plain_style_matches_byte_length() {
        let text = "Error: boom ↯";
        assert_eq!(plain_style(text).len(), text.len());
        assert!(plain_style(text).chars().all(|c| c == 'A'));
    }
}
