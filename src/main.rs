use clap::{Parser, Subcommand};
use chat_status::commands::*;
use chat_status::core::{error::Result, print_error, Availability};
use std::env;

#[derive(Parser)]
#[command(name = "chat-status")]
#[command(about = "Compose chat status messages from reusable templates")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template against the current directory, git HEAD and clock
    Render {
        /// Template text, e.g. "Working on {d+1,^upWord} ({g?branch})"
        template: String,
    },
    /// Print the segments of a template as JSON
    Parse {
        template: String,
    },
    /// List, add or remove configured templates
    Templates {
        #[command(subcommand)]
        action: Option<TemplatesAction>,
    },
    /// Render a configured template and record it in the history
    Use {
        /// 1-based template index
        index: usize,
    },
    /// Show recently used statuses
    History {
        /// Forget every recorded status
        #[arg(long)]
        clear: bool,
    },
    /// Show bookmarked statuses
    Bookmarks,
    /// Bookmark the most recently used status
    Bookmark,
}

#[derive(Subcommand)]
enum TemplatesAction {
    /// Numbered list of templates
    List,
    /// Add a template
    Add {
        label: String,
        message: String,
        #[arg(long, value_enum, default_value_t = Availability::Online)]
        availability: Availability,
    },
    /// Remove a template by its 1-based index
    Remove { index: usize },
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Render { template } => execute_render(&template),
        Commands::Parse { template } => execute_parse(&template),
        Commands::Templates { action } => match action.unwrap_or(TemplatesAction::List) {
            TemplatesAction::List => execute_templates_list(),
            TemplatesAction::Add {
                label,
                message,
                availability,
            } => execute_templates_add(label, message, availability),
            TemplatesAction::Remove { index } => execute_templates_remove(index),
        },
        Commands::Use { index } => execute_use(index),
        Commands::History { clear } => execute_history(clear),
        Commands::Bookmarks => execute_bookmarks(),
        Commands::Bookmark => execute_bookmark(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli.command) {
        log::debug!("{} error ({:?}): {e:?}", e.scope(), e.code());
        print_error(e.message());
        std::process::exit(1);
    }

    Ok(())
}
