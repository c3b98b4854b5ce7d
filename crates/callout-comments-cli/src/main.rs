use anyhow::{Context, Result};
use callout_comments_config::Config;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

mod commands;

use commands::Stamp;

#[derive(Parser)]
#[command(name = "callout-comments")]
#[command(about = "List and edit nested callout comments in markdown files")]
struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the comment tree of a document
    List {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Tree)]
        format: Format,
    },
    /// Start a new top-level comment before a line
    Add {
        file: PathBuf,
        /// 1-based line the comment is inserted before; one past the end appends
        #[arg(long)]
        line: usize,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Reply to an existing comment
    Reply {
        file: PathBuf,
        /// Dotted index path of the parent, e.g. 0.1
        #[arg(long)]
        path: String,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Remove a comment together with its replies
    Remove {
        file: PathBuf,
        #[arg(long)]
        path: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Tree,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::List { file, format } => {
            let path = config.resolve_document(&file);
            let text = read(&path)?;
            let output = match format {
                Format::Tree => commands::render_tree(&commands::list(&config, &file, &text)),
                Format::Json => serde_json::to_string_pretty(&commands::list(&config, &file, &text))?,
            };
            println!("{output}");
        }
        Commands::Add {
            file,
            line,
            author,
            message,
        } => {
            let path = config.resolve_document(&file);
            let text = read(&path)?;
            let stamp = stamp(&config, author);
            let updated = commands::add(&text, line, &stamp, message.as_deref())?;
            write(&path, &updated)?;
        }
        Commands::Reply {
            file,
            path: comment_path,
            author,
            message,
        } => {
            let path = config.resolve_document(&file);
            let text = read(&path)?;
            let stamp = stamp(&config, author);
            let target = commands::parse_comment_path(&comment_path)?;
            let updated = commands::reply(&text, &target, &stamp, message.as_deref())?;
            write(&path, &updated)?;
        }
        Commands::Remove {
            file,
            path: comment_path,
        } => {
            let path = config.resolve_document(&file);
            let text = read(&path)?;
            let target = commands::parse_comment_path(&comment_path)?;
            let updated = commands::remove(&text, &target)?;
            write(&path, &updated)?;
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);
    let config = Config::load_from_path(&config_path)?;
    if config.is_none() {
        log::debug!("no config at {}, using defaults", config_path.display());
    }
    Ok(config.unwrap_or_default())
}

fn stamp(config: &Config, author: Option<String>) -> Stamp {
    Stamp {
        author: author.unwrap_or_else(|| config.author.clone()),
        at: chrono::Local::now().naive_local(),
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("updated {}", path.display());
    Ok(())
}
