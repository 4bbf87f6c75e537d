//! Breaker CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI plays the page host: it loads configuration, mounts the demo tree
//! through [`breaker_tui::PageApp`] and runs the frame loop.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_page() -> PageApp + draw
//!                                          |
//!                                          v
//!                                    Quit | uncaught render fault
//! ```
//!
//! # Event Loop
//!
//! A fixed 16ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`breaker_tui::InputPump`])
//! 3. Run the re-render requested by component state (`app.tick()`)
//! 4. Draw the page

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, File, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use breaker_config::BreakerConfig;
use breaker_core::Fallback;
use breaker_tui::{InputPump, PageApp, UiOptions, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: drop logs rather than write over the page.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.breaker/logs/breaker.log
    if let Some(config_path) = BreakerConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("breaker.log"));
    }

    candidates.push(PathBuf::from(".breaker").join("logs").join("breaker.log"));

    candidates
}

fn ui_options(config: Option<&BreakerConfig>) -> UiOptions {
    config.map_or_else(UiOptions::default, |cfg| UiOptions {
        ascii_only: cfg.ascii_only(),
        high_contrast: cfg.high_contrast(),
    })
}

fn fallback(config: Option<&BreakerConfig>) -> Fallback {
    let default = Fallback::default();
    match config {
        Some(cfg) => Fallback::new(
            cfg.fallback_title().unwrap_or(default.title()),
            cfg.fallback_message().unwrap_or(default.message()),
        ),
        None => default,
    }
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode and the alternate screen; on drop both are restored so the
/// terminal stays usable after early returns and uncaught render faults.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match BreakerConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using default config: {err}");
            None
        }
    };

    let mut app = PageApp::demo(fallback(config.as_ref()), ui_options(config.as_ref()))
        .context("failed to mount the page")?;

    let result = {
        let mut session = TerminalSession::new()?;
        run_page(&mut session.terminal, &mut app).await
    };

    if let Err(err) = &result {
        tracing::error!("Page stopped: {err:#}");
    }
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

async fn run_page<B>(terminal: &mut Terminal<B>, app: &mut PageApp) -> Result<()>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        if let Err(e) = app.tick() {
            break Err(e).context("the page crashed");
        }

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}

#[cfg(test)]
mod tests {
    use breaker_config::BreakerConfig;

    use super::{fallback, ui_options};

    #[test]
    fn defaults_without_config() {
        let options = ui_options(None);
        assert!(!options.ascii_only);
        assert_eq!(
            fallback(None).message(),
            "Something's gone wrong. Try refreshing the page."
        );
    }

    #[test]
    fn config_overrides_only_what_it_sets() {
        let config: BreakerConfig = toml::from_str(
            r#"
[app]
ascii_only = true

[fallback]
message = "Press r."
"#,
        )
        .unwrap();

        assert!(ui_options(Some(&config)).ascii_only);
        let fallback = fallback(Some(&config));
        assert_eq!(fallback.title(), "Uh oh!");
        assert_eq!(fallback.message(), "Press r.");
    }
}
