mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "errata-cli", about = "Mistake notebook and review scheduler", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Add a mistake to the notebook
    Add {
        /// Short title for the mistake
        title: String,
        /// Subject the mistake belongs to
        #[arg(long)]
        subject: String,
        /// What went wrong, in your own words
        #[arg(long)]
        notes: String,
        /// Question text (use "-" to read from stdin)
        #[arg(long)]
        content: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
        /// Attach a photo of the problem
        #[arg(long)]
        image: Option<PathBuf>,
        /// Fill missing question text by recognizing the image
        #[arg(long)]
        recognize: bool,
    },

    /// List mistakes, newest first
    List {
        /// Filter by subject
        #[arg(long)]
        subject: Option<String>,
        /// Maximum entries to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Most recently added mistakes
    Recent {
        /// Maximum entries to show
        #[arg(long, default_value_t = errata::mistakes::DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },

    /// Mistake counts per subject
    Subjects,

    /// Show one mistake in full, with its attempt history
    Show {
        /// Mistake id (a unique prefix is enough)
        id: String,
    },

    /// Record one review attempt
    Record {
        /// Mistake id (a unique prefix is enough)
        id: String,
        /// The attempt was correct
        #[arg(long, conflicts_with = "wrong")]
        correct: bool,
        /// The attempt was wrong
        #[arg(long)]
        wrong: bool,
        /// Note to keep with the attempt
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a mistake
    Delete {
        /// Mistake id (a unique prefix is enough)
        id: String,
    },

    /// Show the review plan for the coming days
    Plan {
        /// Days to spread the reviews over
        #[arg(long, default_value_t = errata::review::DEFAULT_HORIZON_DAYS)]
        days: usize,
        /// Plan only one subject
        #[arg(long)]
        subject: Option<String>,
    },

    /// Work through the mistakes interactively
    Review {
        /// Review only one subject
        #[arg(long)]
        subject: Option<String>,
    },
}

/// Resolve "-" as stdin for content arguments
fn resolve_content(content: Option<String>) -> Option<String> {
    match content.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf).ok();
            Some(buf.trim_end().to_string())
        }
        _ => content,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Add {
            title,
            subject,
            notes,
            content,
            tags,
            image,
            recognize,
        } => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            let content = resolve_content(content);
            commands::add::run(
                &mut app,
                &title,
                &subject,
                &notes,
                content,
                tags.as_deref(),
                image.as_deref(),
                recognize,
                &cli.format,
            )?;
        }
        Command::List { subject, limit } => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::list::run(&app, subject.as_deref(), limit, &cli.format)?;
        }
        Command::Recent { limit } => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::recent::run(&app, limit, &cli.format)?;
        }
        Command::Subjects => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::subjects::run(&app, &cli.format)?;
        }
        Command::Show { id } => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::show::run(&app, &id, &cli.format)?;
        }
        Command::Record {
            id,
            correct,
            wrong,
            notes,
        } => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            commands::record::run(&mut app, &id, correct, wrong, notes, &cli.format)?;
        }
        Command::Delete { id } => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            commands::delete::run(&mut app, &id, &cli.format)?;
        }
        Command::Plan { days, subject } => {
            let app = app::App::new(cli.data_dir.as_deref())?;
            commands::plan::run(&app, days, subject.as_deref(), &cli.format)?;
        }
        Command::Review { subject } => {
            let mut app = app::App::new(cli.data_dir.as_deref())?;
            commands::review::run(&mut app, subject.as_deref(), &cli.format)?;
        }
    }

    Ok(())
}
