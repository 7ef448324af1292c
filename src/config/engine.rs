use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use rhai::{Array, Dynamic, Engine, Scope};
use tracing::{debug, info};

use super::Settings;
use crate::theme;

/// The Rhai scripting engine for configuration
pub struct ConfigEngine {
    engine: Engine,
    settings: Arc<RwLock<Settings>>,
}

impl ConfigEngine {
    pub fn new() -> Self {
        let settings = Arc::new(RwLock::new(Settings::default()));
        let engine = Self::create_engine(Arc::clone(&settings));

        Self {
            engine,
            settings,
        }
    }

    fn create_engine(settings: Arc<RwLock<Settings>>) -> Engine {
        let mut engine = Engine::new();

        // Limit script execution for safety
        engine.set_max_expr_depths(64, 64);
        engine.set_max_operations(100_000);

        {
            let s = Arc::clone(&settings);
            engine.register_fn("set_theme", move |name: &str| {
                if let Ok(mut settings) = s.write() {
                    settings.theme = name.to_string();
                }
            });
        }

        {
            let s = Arc::clone(&settings);
            engine.register_fn("get_theme", move || -> String {
                s.read().map(|s| s.theme.clone()).unwrap_or_default()
            });
        }

        {
            let s = Arc::clone(&settings);
            engine.register_fn("set_tab_width", move |width: i64| {
                if let Ok(mut settings) = s.write() {
                    settings.tab_width = width.clamp(1, 16) as usize;
                }
            });
        }

        {
            let s = Arc::clone(&settings);
            engine.register_fn("set_class_prefix", move |prefix: &str| {
                if let Ok(mut settings) = s.write() {
                    settings.class_prefix = prefix.to_string();
                }
            });
        }

        {
            let s = Arc::clone(&settings);
            engine.register_fn("set_show_line_numbers", move |enabled: bool| {
                if let Ok(mut settings) = s.write() {
                    settings.show_line_numbers = enabled;
                }
            });
        }

        engine.register_fn("list_themes", || -> Array {
            theme::list_builtin_themes()
                .into_iter()
                .map(|name| Dynamic::from(name.to_string()))
                .collect()
        });

        engine.on_print(|msg| info!(target: "dabara::config", "{msg}"));

        engine
    }

    /// Load and execute a config file
    pub fn load_file(&mut self, path: &Path) -> Result<(), String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        debug!(path = %path.display(), "loading config");
        self.eval(&content)
    }

    /// Evaluate a Rhai script string
    pub fn eval(&mut self, script: &str) -> Result<(), String> {
        let ast = self
            .engine
            .compile(script)
            .map_err(|e| format!("Config parse error: {}", e))?;

        let mut scope = Scope::new();
        self.engine
            .run_ast_with_scope(&mut scope, &ast)
            .map_err(|e| format!("Config error: {}", e))?;

        Ok(())
    }

    /// Get the current settings (cloned)
    pub fn settings(&self) -> Settings {
        self.settings.read().map(|s| s.clone()).unwrap_or_default()
    }

    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dabara"))
    }

    /// Get the default config file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("init.rhai"))
    }

    /// Load the default config file if it exists
    pub fn load_default(&mut self) -> Result<(), String> {
        if let Some(config_file) = Self::config_file() {
            if config_file.exists() {
                return self.load_file(&config_file);
            }
            debug!(path = %config_file.display(), "no config file");
        }
        Ok(()) // No config file is fine
    }
}

impl Default for ConfigEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_set_theme() {
        let mut engine = ConfigEngine::new();
        engine.eval(r#"set_theme("nord");"#).unwrap();
        assert_eq!(engine.settings().theme, "nord");
    }

    #[test]
    fn test_get_theme_reads_back() {
        let mut engine = ConfigEngine::new();
        engine
            .eval(
                r#"
                set_theme("dracula");
                if get_theme() != "dracula" {
                    throw "theme not stored";
                }
            "#,
            )
            .unwrap();
    }

    #[test]
    fn test_set_tab_width_clamped() {
        let mut engine = ConfigEngine::new();
        engine.eval("set_tab_width(100);").unwrap();
        assert_eq!(engine.settings().tab_width, 16);
        engine.eval("set_tab_width(0);").unwrap();
        assert_eq!(engine.settings().tab_width, 1);
    }

    #[test]
    fn test_multiple_settings() {
        let mut engine = ConfigEngine::new();
        engine
            .eval(
                r#"
                set_theme("solarized-dark");
                set_tab_width(4);
                set_class_prefix("hl-");
                set_show_line_numbers(false);
            "#,
            )
            .unwrap();

        let settings = engine.settings();
        assert_eq!(settings.theme, "solarized-dark");
        assert_eq!(settings.tab_width, 4);
        assert_eq!(settings.class_prefix, "hl-");
        assert!(!settings.show_line_numbers);
    }

    #[test]
    fn test_list_themes() {
        let mut engine = ConfigEngine::new();
        engine
            .eval(
                r#"
                let themes = list_themes();
                if themes.len() == 0 {
                    throw "No themes returned";
                }
                print(themes[0]);
            "#,
            )
            .unwrap();
    }

    #[test]
    fn test_bad_script_reports_error() {
        let mut engine = ConfigEngine::new();
        let err = engine.eval("set_theme(").unwrap_err();
        assert!(err.starts_with("Config parse error"));
        assert_eq!(engine.settings().theme, "gruvbox-dark");
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"set_theme("nord");"#).unwrap();

        let mut engine = ConfigEngine::new();
        engine.load_file(file.path()).unwrap();
        assert_eq!(engine.settings().theme, "nord");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut engine = ConfigEngine::new();
        let err = engine
            .load_file(Path::new("/definitely/not/here.rhai"))
            .unwrap_err();
        assert!(err.contains("Failed to read config file"));
    }
}
