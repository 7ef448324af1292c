use std::fmt::Write as _;

use super::Color;
use crate::syntax::Category;

/// Style for a UI element (color + optional attributes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    pub const fn new(fg: Color) -> Self {
        Self {
            fg,
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn css(&self) -> String {
        let mut css = format!("color: {};", self.fg.to_css());
        if self.bold {
            css.push_str(" font-weight: bold;");
        }
        if self.italic {
            css.push_str(" font-style: italic;");
        }
        css
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Style::new(color)
    }
}

/// Complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Editor chrome
    pub background: Color,
    pub foreground: Color,
    pub line_number: Color,
    pub line_number_active: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub warning: Color,

    // Syntax
    pub syntax_keyword: Style,
    pub syntax_declaration: Style,
    pub syntax_boolean: Style,
    pub syntax_builtin: Style,
    pub syntax_string: Style,
    pub syntax_number: Style,
    pub syntax_comment: Style,
    pub syntax_function: Style,
    pub syntax_method: Style,
    pub syntax_operator: Style,
    pub syntax_bracket: Style,
}

impl Theme {
    /// Style for a token category; plain text uses the foreground color
    pub fn style_for(&self, category: Category) -> Style {
        match category {
            Category::Keyword => self.syntax_keyword,
            Category::Declaration => self.syntax_declaration,
            Category::Boolean => self.syntax_boolean,
            Category::Builtin => self.syntax_builtin,
            Category::String => self.syntax_string,
            Category::Number => self.syntax_number,
            Category::Comment => self.syntax_comment,
            Category::FunctionCall => self.syntax_function,
            Category::MethodCall => self.syntax_method,
            Category::Operator => self.syntax_operator,
            Category::Bracket => self.syntax_bracket,
            Category::Plain => self.foreground.into(),
        }
    }

    /// CSS rules for the highlight overlay, one per wrapped category
    pub fn stylesheet(&self, class_prefix: &str) -> String {
        let mut css = format!(
            "/* {} */\n.{}code {{ background: {}; color: {}; }}\n",
            self.name,
            class_prefix,
            self.background.to_css(),
            self.foreground.to_css()
        );
        for category in Category::ALL {
            if let Some(class) = category.css_class() {
                let _ = writeln!(
                    css,
                    ".{}{} {{ {} }}",
                    class_prefix,
                    class,
                    self.style_for(category).css()
                );
            }
        }
        css
    }

    /// Gruvbox Dark - warm retro theme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "gruvbox-dark".to_string(),
            background: Color::hex(0x282828),
            foreground: Color::hex(0xebdbb2),
            line_number: Color::hex(0x665c54),
            line_number_active: Color::hex(0xfabd2f),
            status_bar_bg: Color::hex(0x3c3836),
            status_bar_fg: Color::hex(0xebdbb2),
            warning: Color::hex(0xfabd2f),

            syntax_keyword: Style::new(Color::hex(0xfb4934)).bold(),
            syntax_declaration: Style::new(Color::hex(0x8ec07c)).bold(),
            syntax_boolean: Style::new(Color::hex(0xd3869b)),
            syntax_builtin: Style::new(Color::hex(0xfe8019)),
            syntax_string: Style::new(Color::hex(0xb8bb26)),
            syntax_number: Style::new(Color::hex(0xd3869b)),
            syntax_comment: Style::new(Color::hex(0x928374)).italic(),
            syntax_function: Style::new(Color::hex(0xfabd2f)),
            syntax_method: Style::new(Color::hex(0x83a598)),
            syntax_operator: Color::hex(0xfe8019).into(),
            syntax_bracket: Color::hex(0xebdbb2).into(),
        }
    }

    /// Gruvbox Light
    pub fn gruvbox_light() -> Self {
        Self {
            name: "gruvbox-light".to_string(),
            background: Color::hex(0xfbf1c7),
            foreground: Color::hex(0x3c3836),
            line_number: Color::hex(0xa89984),
            line_number_active: Color::hex(0xb57614),
            status_bar_bg: Color::hex(0xebdbb2),
            status_bar_fg: Color::hex(0x3c3836),
            warning: Color::hex(0xb57614),

            syntax_keyword: Style::new(Color::hex(0x9d0006)).bold(),
            syntax_declaration: Style::new(Color::hex(0x427b58)).bold(),
            syntax_boolean: Style::new(Color::hex(0x8f3f71)),
            syntax_builtin: Style::new(Color::hex(0xaf3a03)),
            syntax_string: Style::new(Color::hex(0x79740e)),
            syntax_number: Style::new(Color::hex(0x8f3f71)),
            syntax_comment: Style::new(Color::hex(0x928374)).italic(),
            syntax_function: Style::new(Color::hex(0xb57614)),
            syntax_method: Style::new(Color::hex(0x076678)),
            syntax_operator: Color::hex(0xd65d0e).into(),
            syntax_bracket: Color::hex(0x3c3836).into(),
        }
    }

    /// Nord - arctic, north-bluish color palette
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::hex(0x2e3440),
            foreground: Color::hex(0xd8dee9),
            line_number: Color::hex(0x4c566a),
            line_number_active: Color::hex(0xd8dee9),
            status_bar_bg: Color::hex(0x3b4252),
            status_bar_fg: Color::hex(0xd8dee9),
            warning: Color::hex(0xebcb8b),

            syntax_keyword: Style::new(Color::hex(0x81a1c1)).bold(),
            syntax_declaration: Style::new(Color::hex(0x8fbcbb)).bold(),
            syntax_boolean: Style::new(Color::hex(0xb48ead)),
            syntax_builtin: Style::new(Color::hex(0xd08770)),
            syntax_string: Style::new(Color::hex(0xa3be8c)),
            syntax_number: Style::new(Color::hex(0xb48ead)),
            syntax_comment: Style::new(Color::hex(0x616e88)).italic(),
            syntax_function: Style::new(Color::hex(0x88c0d0)),
            syntax_method: Style::new(Color::hex(0x8fbcbb)),
            syntax_operator: Color::hex(0x81a1c1).into(),
            syntax_bracket: Color::hex(0xeceff4).into(),
        }
    }

    /// Dracula - dark theme with vibrant colors
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::hex(0x282a36),
            foreground: Color::hex(0xf8f8f2),
            line_number: Color::hex(0x6272a4),
            line_number_active: Color::hex(0xf8f8f2),
            status_bar_bg: Color::hex(0x44475a),
            status_bar_fg: Color::hex(0xf8f8f2),
            warning: Color::hex(0xffb86c),

            syntax_keyword: Style::new(Color::hex(0xff79c6)).bold(),
            syntax_declaration: Style::new(Color::hex(0x8be9fd)).italic(),
            syntax_boolean: Style::new(Color::hex(0xbd93f9)),
            syntax_builtin: Style::new(Color::hex(0xffb86c)),
            syntax_string: Style::new(Color::hex(0xf1fa8c)),
            syntax_number: Style::new(Color::hex(0xbd93f9)),
            syntax_comment: Style::new(Color::hex(0x6272a4)).italic(),
            syntax_function: Style::new(Color::hex(0x50fa7b)),
            syntax_method: Style::new(Color::hex(0x50fa7b)).italic(),
            syntax_operator: Color::hex(0xff79c6).into(),
            syntax_bracket: Color::hex(0xf8f8f2).into(),
        }
    }

    /// Solarized Dark
    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".to_string(),
            background: Color::hex(0x002b36),
            foreground: Color::hex(0x839496),
            line_number: Color::hex(0x586e75),
            line_number_active: Color::hex(0x93a1a1),
            status_bar_bg: Color::hex(0x073642),
            status_bar_fg: Color::hex(0x839496),
            warning: Color::hex(0xcb4b16),

            syntax_keyword: Style::new(Color::hex(0x859900)).bold(),
            syntax_declaration: Style::new(Color::hex(0xb58900)).bold(),
            syntax_boolean: Style::new(Color::hex(0xd33682)),
            syntax_builtin: Style::new(Color::hex(0xcb4b16)),
            syntax_string: Style::new(Color::hex(0x2aa198)),
            syntax_number: Style::new(Color::hex(0xd33682)),
            syntax_comment: Style::new(Color::hex(0x586e75)).italic(),
            syntax_function: Style::new(Color::hex(0x268bd2)),
            syntax_method: Style::new(Color::hex(0x6c71c4)),
            syntax_operator: Color::hex(0x859900).into(),
            syntax_bracket: Color::hex(0x839496).into(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}
