//! Terminal front-ends for the quiz and the gallery.

mod form;
mod gallery_screen;
mod quiz_screen;
mod screen;

pub use form::WebsiteForm;
pub use gallery_screen::GalleryScreen;
pub use quiz_screen::QuizScreen;
pub use screen::{Screen, ScreenTransition};

use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};

use crate::{GalleryStore, Locale, QuizError, QuizQuestion, QuizSource};

type FetchResult = Result<Vec<QuizQuestion>, QuizError>;

/// Sends tracing output to `log_path` so it does not corrupt the terminal.
pub fn init_file_tracing(log_path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(log_path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,quizfolio=debug")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the quiz until the player quits.
#[instrument(skip_all)]
pub async fn run_quiz(screen: QuizScreen, source: Arc<dyn QuizSource>) -> Result<()> {
    info!("Starting quiz TUI");
    let mut terminal = setup_terminal()?;
    let res = quiz_loop(&mut terminal, screen, source).await;
    restore_terminal(&mut terminal)?;
    if let Err(err) = &res {
        error!(error = ?err, "Quiz loop error");
    }
    res
}

/// Runs the gallery until the user quits.
#[instrument(skip(store))]
pub async fn run_gallery(store: GalleryStore, locale: Locale) -> Result<()> {
    info!("Starting gallery TUI");
    let mut terminal = setup_terminal()?;
    let res = gallery_loop(&mut terminal, GalleryScreen::new(store, locale)).await;
    restore_terminal(&mut terminal)?;
    if let Err(err) = &res {
        error!(error = ?err, "Gallery loop error");
    }
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw, deliver finished fetches, then handle at most one key.
async fn quiz_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut screen: QuizScreen,
    source: Arc<dyn QuizSource>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchResult>();

    loop {
        while let Ok(result) = rx.try_recv() {
            debug!(ok = result.is_ok(), "Fetch finished");
            screen.controller_mut().finish_loading(result);
        }

        terminal.draw(|f| screen.render(f))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match screen.handle_key(key) {
                ScreenTransition::Stay => {}
                ScreenTransition::Fetch => {
                    info!("Spawning quiz fetch");
                    let source = Arc::clone(&source);
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let result = source.fetch().await;
                        if tx.send(result).is_err() {
                            debug!("Quiz closed before fetch finished");
                        }
                    });
                }
                ScreenTransition::Quit => return Ok(()),
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}

async fn gallery_loop<B: Backend>(terminal: &mut Terminal<B>, mut screen: GalleryScreen) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| screen.render(f))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if screen.handle_key(key) == ScreenTransition::Quit {
                return Ok(());
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
