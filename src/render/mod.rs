//! Terminal output: the interactive editor view and one-shot ANSI printing

mod renderer;

pub use renderer::{Renderer, status_text, write_highlighted};
