//! Quizfolio - unified CLI
//!
//! Runs either the word quiz or the portfolio gallery in the terminal.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use quizfolio::cli::{Cli, Command};
use quizfolio::tui::{self, QuizScreen};
use quizfolio::{GalleryStore, GeminiProvider, Locale, QuizConfig, QuizSource};
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tui::init_file_tracing(&cli.log_file)?;

    match cli.command {
        Command::Quiz { config, locale } => run_quiz(config, locale).await,
        Command::Gallery { locale } => run_gallery(locale).await,
    }
}

/// Run the quiz TUI
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_quiz(
    config_path: std::path::PathBuf,
    locale: Option<Locale>,
) -> Result<()> {
    let mut config = QuizConfig::load_or_default(&config_path)?;
    if let Some(locale) = locale {
        info!(locale = %locale, "Overriding locale");
        config = config.with_locale(locale);
    }

    let screen = QuizScreen::new(*config.locale());
    let source: Arc<dyn QuizSource> = Arc::new(GeminiProvider::new(config));
    tui::run_quiz(screen, source).await
}

/// Run the gallery TUI
#[instrument]
async fn run_gallery(locale: Locale) -> Result<()> {
    tui::run_gallery(GalleryStore::seeded(), locale).await
}
