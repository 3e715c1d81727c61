mod cli;
mod config;
mod logging;
mod paths;
mod tty;
mod ui;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rsedit_core::{EditorSession, FsStore, Key};
use tracing::{info, warn};

use cli::CliArgs;
use config::Config;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Logging is configured from the config file, so a bad config can only be
    // reported once the subscriber is up.
    let config_path = args.config.clone().or_else(paths::config_file);
    let (config, config_err) = match config_path.as_deref().map(Config::load) {
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (Config::default(), Some(err)),
        None => (Config::default(), None),
    };
    logging::init(args.log_file.as_deref(), &config.log_level)?;
    if let Some(err) = config_err {
        warn!("{err:#}; using defaults");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting rsedit");

    let (width, height) = tty::screen_size(config.fallback_size());
    let mut session =
        open_session(args.file.as_deref(), width, height).with_status_timeout(config.status_timeout());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut session, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        warn!("editor loop failed: {err:#}");
        eprintln!("Error: {err:?}");
    }
    info!("exiting");

    Ok(())
}

/// Open `file` if given. An unreadable file still gets a session with the
/// name set, so the user can save over it.
fn open_session(file: Option<&str>, width: usize, height: usize) -> EditorSession<FsStore> {
    let Some(path) = file else {
        return EditorSession::new(FsStore, width, height);
    };
    match EditorSession::open(FsStore, path, width, height) {
        Ok(session) => session,
        Err(err) => {
            warn!("{err:#}; starting empty");
            let mut session = EditorSession::new(FsStore, width, height);
            session.set_filename(path);
            session
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut EditorSession<FsStore>,
    config: &Config,
) -> Result<()> {
    let tick = config.tick();

    loop {
        let (width, height) = tty::screen_size(config.fallback_size());
        session.resize(width, height);
        let state = session.render_state();
        terminal.draw(|frame| ui::draw(frame, &state))?;

        // Poll with timeout so expired status messages get redrawn
        let key = if event::poll(tick)? {
            tty::key_from_event(&event::read()?)
        } else {
            Key::None
        };
        session.handle_key(key);

        if session.should_quit() {
            return Ok(());
        }
    }
}
