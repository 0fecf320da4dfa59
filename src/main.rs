mod config;
mod sample;
mod save;
mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use whiteboard::doc::Category;

use crate::config::{ConfigError, HostArgs, HostConfig};
use crate::save::{SaveError, sink_for};
use crate::session::Session;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Save(#[from] SaveError),
    #[error("failed to read {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid notes file: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "retroboard", about = "Stop/start/continue retrospective board")]
struct Cli {
    #[command(flatten)]
    host: HostArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed the built-in sample notes, group them, and save.
    Demo,
    /// Load `[{category, text}]` notes from a JSON file, group them, and save.
    Group {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print where `count` new notes would land in one section.
    Place {
        #[arg(long, value_parser = parse_category)]
        category: Category,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::parse(raw).ok_or_else(|| format!("unknown category `{raw}` (expected stop, start, or continue)"))
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = HostConfig::from_args(cli.host)?;
    let sink = sink_for(config.output.as_deref());
    let mut session = Session::open(&config, sink)?;

    match cli.command {
        Command::Demo => {
            session.add_notes(&sample::sample_notes())?;
            run_grouping(&mut session).await?;
        }
        Command::Group { input } => {
            let raw = std::fs::read_to_string(&input).map_err(|source| HostError::Input { path: input.clone(), source })?;
            let notes = sample::parse_notes(&raw)?;
            session.add_notes(&notes)?;
            run_grouping(&mut session).await?;
        }
        Command::Place { category, count } => {
            for (i, point) in session.place(category, count)?.iter().enumerate() {
                println!("{i}\t{:.1}\t{:.1}", point.x, point.y);
            }
        }
    }

    session.close()?;
    Ok(())
}

async fn run_grouping(session: &mut Session) -> Result<(), HostError> {
    session.group_with_ai().await?;
    for theme in &session.engine().themes {
        println!("{:<8}  {:<24}  {}  {} notes", theme.category.title(), theme.name, theme.color, theme.note_ids.len());
    }
    session.save()?;
    Ok(())
}
