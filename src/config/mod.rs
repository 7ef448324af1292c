//! Configuration: settings plus the Rhai engine that evaluates `init.rhai`

mod engine;
mod settings;

pub use engine::ConfigEngine;
pub use settings::Settings;
