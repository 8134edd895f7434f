//! folio: a single-page portfolio with scroll-tracked navigation.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::app_state::{ActivateEvent, AppEvent, AppState, FocusMove, ScrollEvent};
use folio::registry::SectionRegistry;
use folio::{config, content, theme, ui};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio with scroll-tracked navigation", long_about = None)]
struct Args {
    /// Portfolio content as JSON (built-in sample if omitted)
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Rows before a section heading at which it becomes active
    #[arg(long, value_name = "ROWS")]
    threshold: Option<u32>,

    /// Starting theme: light or dark
    #[arg(long)]
    theme: Option<String>,

    /// Write logs here (filter with FOLIO_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Logs go to a file: stdout belongs to the TUI.
fn init_logging(path: Option<PathBuf>) -> io::Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("folio.log"));
    let file = File::create(&path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file)?;
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(threshold) = args.threshold {
        cfg.scroll_threshold = threshold;
    }
    if let Some(name) = args.theme {
        cfg.theme = name;
    }
    let theme = theme::Theme::from_name(&cfg.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %cfg.theme, "unknown theme, using dark");
        theme::Theme::Dark
    });

    let content = match args.content {
        Some(path) => content::Content::load(&path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        None => content::Content::default(),
    };

    let state = AppState::new(content, SectionRegistry::standard(), &cfg, theme);
    tracing::info!(threshold = cfg.scroll_threshold, "starting folio");

    run_tui(state, &cfg)
}

/// Puts the terminal into raw, alternate-screen, mouse-capturing mode and restores it on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

fn run_tui(mut app: AppState, cfg: &config::Config) -> io::Result<()> {
    let result = {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let result = run_app(&mut terminal, &mut app, cfg);
        app.unmount();
        result.and(terminal.show_cursor())
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
        eprintln!("Error: {e}");
    }
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    let frame = Duration::from_millis(cfg.frame_millis.max(1));
    let step = i64::from(app.scroll_step);

    loop {
        let size = terminal.size()?;
        let (width, height) = ui::body_size(Rect::new(0, 0, size.width, size.height));
        app.update(AppEvent::Resize { width, height });
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        // Only wake on a timer while a smooth scroll needs frames.
        if app.viewport.is_animating() && !event::poll(frame)? {
            app.update(AppEvent::Tick);
            continue;
        }

        let page = i64::from(app.viewport.height().max(1));
        let next = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
                KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::ScrollBy(-step)),
                KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::ScrollBy(step)),
                KeyCode::PageUp => Some(AppEvent::ScrollBy(-page)),
                KeyCode::PageDown | KeyCode::Char(' ') => Some(AppEvent::ScrollBy(page)),
                KeyCode::Home | KeyCode::Char('g') => {
                    Some(AppEvent::Scroll(ScrollEvent { offset: 0 }))
                }
                KeyCode::End | KeyCode::Char('G') => Some(AppEvent::Scroll(ScrollEvent {
                    offset: app.viewport.max_offset(),
                })),
                KeyCode::Left | KeyCode::BackTab => Some(AppEvent::Focus(FocusMove::Prev)),
                KeyCode::Right | KeyCode::Tab => Some(AppEvent::Focus(FocusMove::Next)),
                KeyCode::Enter => Some(AppEvent::ActivateFocused),
                KeyCode::Char('w') => Some(AppEvent::Activate(ActivateEvent {
                    identifier: "projects".to_string(),
                })),
                KeyCode::Char('t') => Some(AppEvent::ToggleTheme),
                KeyCode::Char(c @ '1'..='9') => c
                    .to_digit(10)
                    .and_then(|d| usize::try_from(d).ok())
                    .and_then(|d| app.registry.at(d - 1))
                    .map(|section| {
                        AppEvent::Activate(ActivateEvent {
                            identifier: section.identifier.to_string(),
                        })
                    }),
                _ => None,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => Some(AppEvent::ScrollBy(-step)),
                MouseEventKind::ScrollDown => Some(AppEvent::ScrollBy(step)),
                MouseEventKind::Down(MouseButton::Left) => {
                    app.control_at(mouse.column, mouse.row).map(|id| {
                        AppEvent::Activate(ActivateEvent {
                            identifier: id.to_string(),
                        })
                    })
                }
                _ => None,
            },
            _ => None,
        };

        if let Some(event) = next {
            app.update(event);
        }
    }
}
