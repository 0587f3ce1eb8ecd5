//! ReadWalk - terminal reader
//! Main entry point

use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use readwalk::clipboard::{Clipboard, NullClipboard, SystemClipboard};
use readwalk::constants::storage::MOUSE_MODE_KEY;
use readwalk::key::{Key, KeyInput};
use readwalk::memory::MemoryDocument;
use readwalk::settings::{FileFlagStore, FlagStore, MemoryFlagStore};
use readwalk::term::crossterm::CrosstermBackend;
use readwalk::term::render::{draw, status_line, visible_rows};
use readwalk::term::{Size, TermEvent, TerminalBackend};
use readwalk::{Engine, HostMessage, Settings};

/// Read a plain-text file with vim-style word and paragraph motions
#[derive(Debug, Parser)]
#[command(name = "readwalk", version, about)]
struct Cli {
    /// Text file to read; paragraphs are separated by blank lines
    file: PathBuf,

    /// Turn mouse mode on for this session (left click `w`, right click `b`)
    #[arg(long)]
    mouse: bool,

    /// File persisting flags between sessions
    #[arg(long, value_name = "PATH", env = "READWALK_FLAGS")]
    flags: Option<PathBuf>,

    /// Write logs to this file (filtered by READWALK_LOG, then RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let mut doc = MemoryDocument::from_plain_text(&text);
    let title = cli
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut store: Box<dyn FlagStore> = match &cli.flags {
        Some(path) => Box::new(FileFlagStore::new(path)),
        None => Box::new(MemoryFlagStore::new()),
    };

    let settings = Settings {
        mouse_mode: cli.mouse,
        ..Settings::default()
    };
    let mut engine = Engine::new(settings, system_clipboard());
    engine.load_flags(store.as_ref());
    if cli.mouse && !engine.mouse_mode() {
        // for this session only; the saved flag is left alone
        engine.receive(&mut doc, HostMessage::MouseMode(true));
    }
    info!(file = %cli.file.display(), mouse_mode = engine.mouse_mode(), "starting");

    let mut backend = CrosstermBackend::new();
    backend.init()?;
    let result = run(&mut backend, &mut doc, &mut engine, store.as_mut(), &title);
    backend.deinit();
    result
}

/// Install a file subscriber; stdout belongs to the terminal UI
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = match std::env::var("READWALK_LOG").or_else(|_| std::env::var("RUST_LOG")) {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) => EnvFilter::new("warn,readwalk=debug"),
    };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}

fn system_clipboard() -> Box<dyn Clipboard> {
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(err) => {
            warn!(%err, "system clipboard unavailable, copies are dropped");
            Box::new(NullClipboard)
        }
    }
}

/// Persist the flag, then deliver the storage change to the engine
fn set_mouse_mode(engine: &mut Engine, store: &mut dyn FlagStore, on: bool) {
    if let Err(err) = store.set_flag(MOUSE_MODE_KEY, on) {
        warn!(%err, "could not persist mouse mode");
    }
    engine.on_flag_changed(MOUSE_MODE_KEY, on);
}

fn is_quit(input: KeyInput) -> bool {
    match input.key {
        Key::Char('q') => input.modifiers.is_empty(),
        Key::Char('c') => input.modifiers.ctrl,
        _ => false,
    }
}

fn run<T: TerminalBackend>(
    backend: &mut T,
    doc: &mut MemoryDocument,
    engine: &mut Engine,
    store: &mut dyn FlagStore,
    title: &str,
) -> Result<()> {
    let mut size = backend.get_size()?;
    doc.set_viewport_height(f64::from(size.text_rows()));

    loop {
        redraw(doc, engine, title, size)?;

        match backend.read_event()? {
            TermEvent::Key(input) if is_quit(input) => return Ok(()),
            TermEvent::Key(input) if input.key == Key::F(2) && input.modifiers.is_empty() => {
                let on = !engine.mouse_mode();
                set_mouse_mode(engine, store, on);
            }
            TermEvent::Key(input) => {
                let outcome = engine.handle_key(doc, input);
                debug!(?input, ?outcome, "key event");
            }
            TermEvent::MouseDown(input) => {
                let outcome = engine.handle_mouse_down(doc, input);
                debug!(?input, ?outcome, "mouse event");
            }
            TermEvent::Resize(new_size) => {
                size = new_size;
                doc.set_viewport_height(f64::from(size.text_rows()));
            }
        }

        // The terminal scrolls by whole rows
        doc.set_scroll_y(doc.scroll_y().round());
    }
}

fn redraw(doc: &MemoryDocument, engine: &Engine, title: &str, size: Size) -> Result<()> {
    let rows = visible_rows(doc, size.text_rows());
    let status = status_line(engine.mode(), engine.mouse_mode(), title);
    let mut out = stdout().lock();
    draw(&mut out, &rows, &status, size).context("Failed to draw frame")
}
