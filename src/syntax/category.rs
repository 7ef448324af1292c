//! Token categories

use serde::Serialize;

/// Semantic class attached to every scanned token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Comment,
    String,
    Number,
    Keyword,
    Declaration,
    Boolean,
    Builtin,
    FunctionCall,
    MethodCall,
    Operator,
    Bracket,
    Plain,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Comment,
        Category::String,
        Category::Number,
        Category::Keyword,
        Category::Declaration,
        Category::Boolean,
        Category::Builtin,
        Category::FunctionCall,
        Category::MethodCall,
        Category::Operator,
        Category::Bracket,
        Category::Plain,
    ];

    /// CSS class suffix used by the playground stylesheet.
    /// `None` for plain text, which is emitted without a wrapper.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Category::Comment => Some("comment"),
            Category::String => Some("string"),
            Category::Number => Some("number"),
            Category::Keyword => Some("keyword"),
            Category::Declaration => Some("variable"),
            Category::Boolean => Some("boolean"),
            Category::Builtin => Some("builtin"),
            Category::FunctionCall => Some("function"),
            Category::MethodCall => Some("method"),
            Category::Operator => Some("operator"),
            Category::Bracket => Some("bracket"),
            Category::Plain => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Number => "number",
            Category::Keyword => "keyword",
            Category::Declaration => "declaration",
            Category::Boolean => "boolean",
            Category::Builtin => "builtin",
            Category::FunctionCall => "function-call",
            Category::MethodCall => "method-call",
            Category::Operator => "operator",
            Category::Bracket => "bracket",
            Category::Plain => "plain",
        }
    }

    pub fn is_plain(self) -> bool {
        self == Category::Plain
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
