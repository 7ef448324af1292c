use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use dabara_highlight::config::{ConfigEngine, Settings};
use dabara_highlight::editor::Editor;
use dabara_highlight::render::{Renderer, write_highlighted};
use dabara_highlight::syntax::{self, Renderer as MarkupRenderer};
use dabara_highlight::theme::{self, Theme};
use dabara_highlight::{input, samples};

#[derive(Parser, Debug)]
#[command(name = "dabara-hl", version, about = "Syntax highlighter for Dabara (.ha) programs")]
struct Cli {
    /// Theme name, overrides the config file
    #[arg(long, global = true)]
    theme: Option<String>,

    /// CSS class prefix for generated markup
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Rhai config script to load instead of ~/.config/dabara/init.rhai
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Input {
    /// Source file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Use one of the bundled sample programs
    #[arg(long, conflicts_with = "file")]
    sample: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print overlay markup
    Html {
        #[command(flatten)]
        input: Input,

        /// Wrap the markup in a standalone page with the theme stylesheet
        #[arg(long)]
        page: bool,
    },
    /// Print the classified tokens as JSON
    Tokens {
        #[command(flatten)]
        input: Input,
    },
    /// Print source colored for the terminal
    Ansi {
        #[command(flatten)]
        input: Input,
    },
    /// Print the theme stylesheet
    Css,
    /// List the bundled sample programs
    Samples,
    /// Edit a file with live highlighting
    Edit { file: Option<PathBuf> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(matches!(cli.command, Command::Edit { .. }));

    let settings = load_settings(&cli);
    let theme = theme::resolve_theme(&settings.theme);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Html { input, page } => {
            let source = read_input(&input)?;
            let markup = MarkupRenderer::with_prefix(settings.class_prefix.as_str())
                .render(&syntax::scan(&source));
            if page {
                write!(stdout, "{}", standalone_page(&input, &markup, &theme, &settings))?;
            } else {
                write!(stdout, "{}", markup)?;
            }
        }
        Command::Tokens { input } => {
            let source = read_input(&input)?;
            let tokens = syntax::scan(&source);
            serde_json::to_writer_pretty(&mut stdout, &tokens)?;
            writeln!(stdout)?;
        }
        Command::Ansi { input } => {
            let source = read_input(&input)?;
            write_highlighted(&mut stdout, &source, &theme)?;
        }
        Command::Css => {
            write!(stdout, "{}", theme.stylesheet(&settings.class_prefix))?;
        }
        Command::Samples => {
            for name in samples::names() {
                writeln!(stdout, "{}", name)?;
            }
        }
        Command::Edit { file } => {
            drop(stdout);
            edit(file, &settings, &theme).await?;
        }
    }

    Ok(())
}

fn init_logging(interactive: bool) {
    let filter = EnvFilter::try_from_env("DABARA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if interactive {
        // Anything written to the terminal would draw over the editor
        builder.with_writer(io::sink).init();
    } else {
        builder.with_writer(io::stderr).init();
    }
}

/// Config file first, then command line overrides
fn load_settings(cli: &Cli) -> Settings {
    let mut config = ConfigEngine::new();
    let loaded = match &cli.config {
        Some(path) => config.load_file(path),
        None => config.load_default(),
    };
    if let Err(e) = loaded {
        warn!("{}", e);
    }

    let mut settings = config.settings();
    if let Some(theme) = &cli.theme {
        settings.theme = theme.clone();
    }
    if let Some(prefix) = &cli.prefix {
        settings.class_prefix = prefix.clone();
    }
    debug!(?settings, "effective settings");
    settings
}

fn read_input(input: &Input) -> anyhow::Result<String> {
    if let Some(name) = &input.sample {
        return match samples::get(name) {
            Some(source) => Ok(source.to_string()),
            None => bail!(
                "unknown sample '{}' (available: {})",
                name,
                samples::names().collect::<Vec<_>>().join(", ")
            ),
        };
    }

    match &input.file {
        Some(path) => {
            warn_on_extension(path);
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("reading stdin")?;
            Ok(source)
        }
    }
}

fn warn_on_extension(path: &Path) {
    if path.extension().is_none_or(|ext| ext != "ha") {
        warn!(path = %path.display(), "Dabara sources normally end in .ha");
    }
}

fn standalone_page(input: &Input, markup: &str, theme: &Theme, settings: &Settings) -> String {
    let title = input
        .sample
        .clone()
        .or_else(|| {
            input
                .file
                .as_ref()
                .map(|p| p.display().to_string())
        })
        .unwrap_or_else(|| "Dabara".to_string());

    format!(
        "<!DOCTYPE html>\n<html lang=\"ha\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{css}pre {{ margin: 0; padding: 1em; font-family: monospace; }}\n</style>\n</head>\n<body>\n<pre class=\"{prefix}code\">{markup}</pre>\n</body>\n</html>\n",
        title = syntax::escape(&title),
        css = theme.stylesheet(&settings.class_prefix),
        prefix = settings.class_prefix,
        markup = markup,
    )
}

async fn edit(file: Option<PathBuf>, settings: &Settings, theme: &Theme) -> anyhow::Result<()> {
    let mut editor = match file {
        Some(path) => {
            warn_on_extension(&path);
            Editor::open(path, settings)?
        }
        None => Editor::new(settings),
    };

    Renderer::setup()?;
    let result = run_editor(&mut editor, settings, theme).await;
    Renderer::teardown()?;
    result
}

async fn run_editor(editor: &mut Editor, settings: &Settings, theme: &Theme) -> anyhow::Result<()> {
    let mut renderer = Renderer::new(settings.show_line_numbers)?;

    // Initial render
    editor.adjust_scroll(renderer.text_height());
    renderer.render(editor, theme)?;

    // Event stream for async key reading
    let mut event_stream = EventStream::new();

    while editor.running {
        let Some(event) = event_stream.next().await else {
            break;
        };
        match event? {
            Event::Resize(width, height) => renderer.resize(width, height),
            event => input::handle_event(editor, event),
        }
        editor.adjust_scroll(renderer.text_height());
        renderer.render(editor, theme)?;
    }

    Ok(())
}
