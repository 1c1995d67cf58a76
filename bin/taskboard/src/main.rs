//! taskboard – command-line client for a taskboard server.

mod cli;

use clap::Parser;
use taskboard_client::{HttpTaskApi, TaskClient, TaskForm};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, TaskEdits};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so list output stays pipeable.
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut client = TaskClient::new(HttpTaskApi::new(&cli.server)?);
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::List(args) => cli::handle_list(&mut client, args, &mut out).await?,
        Commands::Show { id } => cli::handle_show(&mut client, &id, &mut out).await?,
        Commands::Add {
            title,
            description,
            category,
            status,
            priority,
        } => {
            let form = TaskForm {
                title,
                description,
                category: category.unwrap_or_default(),
                status: status.unwrap_or_default(),
                priority: priority.unwrap_or_default(),
            };
            cli::handle_add(&mut client, form, &mut out).await?
        }
        Commands::Edit {
            id,
            title,
            description,
            category,
            status,
            priority,
        } => {
            let edits = TaskEdits {
                title,
                description,
                category,
                status,
                priority,
            };
            cli::handle_edit(&mut client, &id, edits, &mut out).await?
        }
        Commands::Delete { id, yes } => {
            let mut input = std::io::stdin().lock();
            cli::handle_delete(&mut client, &id, yes, &mut input, &mut out).await?
        }
    }

    Ok(())
}
