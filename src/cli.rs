//! Command-line interface for quizfolio.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::Locale;

/// Quizfolio - Gemini word quiz and portfolio gallery in the terminal
#[derive(Parser, Debug)]
#[command(name = "quizfolio")]
#[command(about = "Gemini word quiz and portfolio gallery", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File that receives tracing output
    #[arg(long, global = true, default_value = "quizfolio.log")]
    pub log_file: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the word-definition quiz
    Quiz {
        /// Path to the quiz config (defaults are used if it does not exist)
        #[arg(short, long, default_value = "quizfolio.toml")]
        config: PathBuf,

        /// Override the configured language (ko or en)
        #[arg(long)]
        locale: Option<Locale>,
    },

    /// Browse and edit the portfolio gallery
    Gallery {
        /// Language of the gallery labels (ko or en)
        #[arg(long, default_value = "ko")]
        locale: Locale,
    },
}
