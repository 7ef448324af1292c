use crate::syntax::DEFAULT_CLASS_PREFIX;

/// Highlighter settings that can be customized via Rhai config
#[derive(Debug, Clone)]
pub struct Settings {
    // Display
    pub theme: String,
    pub show_line_numbers: bool,

    // Markup
    pub class_prefix: String,

    // Editing
    pub tab_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "gruvbox-dark".to_string(),
            show_line_numbers: true,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            tab_width: 2,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }
}
