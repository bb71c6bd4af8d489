//! quizbot CLI — run meeting quizzes from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizbot", version, about = "Multiple-choice quizzes for meetings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a quiz and answer it interactively
    Play {
        /// Quiz source: http, builtin
        #[arg(long, default_value = "http")]
        source: String,

        /// Answering mode: walker (one question at a time), sheet (submit all at once)
        #[arg(long, default_value = "walker")]
        mode: String,

        /// Number of questions to request
        #[arg(long)]
        num_questions: Option<u32>,

        /// Source text to generate questions from
        #[arg(long)]
        text: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate a quiz and print it as JSON
    Generate {
        /// Quiz source: http, builtin
        #[arg(long, default_value = "http")]
        source: String,

        /// Number of questions to request
        #[arg(long)]
        num_questions: Option<u32>,

        /// Source text to generate questions from
        #[arg(long)]
        text: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quizbot=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            source,
            mode,
            num_questions,
            text,
            config,
        } => commands::play::execute(source, mode, num_questions, text, config).await,
        Commands::Generate {
            source,
            num_questions,
            text,
            config,
        } => commands::generate::execute(source, num_questions, text, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
