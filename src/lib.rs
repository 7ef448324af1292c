//! Live syntax highlighting for the Dabara language
//!
//! The core is [`syntax::highlight`]: classify source text and render it as
//! markup for an overlay beneath an editable surface. It is total; any input,
//! including half-typed programs, produces complete output.
//!
//! The remaining modules build a small highlighter application around it:
//! themes, Rhai configuration, a terminal editing surface and the sample
//! programs from the playground.

pub mod config;
pub mod editor;
pub mod input;
pub mod render;
pub mod samples;
pub mod syntax;
pub mod theme;

pub use syntax::{Category, Token, highlight, render, scan};

/// Version of this highlighter
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
