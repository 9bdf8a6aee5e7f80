//! folio - manage portfolio projects from the command line
//!
//! # Examples
//!
//! ```bash
//! # List projects
//! folio project list --pretty
//!
//! # Create a project
//! folio project create --title "Trading Bot" --description "ML signals" --url https://github.com/me/bot
//!
//! # Clear a category
//! folio project update 3 --clear-category
//! ```

use folio_cli::{
    Cli, CliClientResult, Client, ProjectInput, ProjectPanel, ProjectUpdate, SERVER_URL_ENV,
    commands::Commands, project_commands::ProjectCommands, resolve_server_url,
};

use std::process::ExitCode;

use clap::Parser;
use dialoguer::Confirm;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let server_url = resolve_server_url(cli.server, std::env::var(SERVER_URL_ENV).ok());
    let panel = ProjectPanel::new(Client::new(&server_url));

    let result = match cli.command {
        Commands::Project { action } => run_project_command(&panel, action).await,
    };

    match result {
        Ok(Some(value)) => print_json(&value, cli.pretty),
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `Ok(None)` means the user backed out and there is nothing to print.
async fn run_project_command(
    panel: &ProjectPanel,
    action: ProjectCommands,
) -> CliClientResult<Option<Value>> {
    let value = match action {
        ProjectCommands::List {
            limit,
            offset,
            search,
        } => panel.list(limit, offset, search.as_deref()).await?,

        ProjectCommands::Get { id } => panel.get(id).await?,

        ProjectCommands::Create {
            title,
            description,
            url,
            image_url,
            category,
            order_index,
        } => {
            panel
                .create(ProjectInput {
                    title,
                    description,
                    url,
                    image_url,
                    category,
                    order_index,
                })
                .await?
        }

        ProjectCommands::Update {
            id,
            title,
            description,
            url,
            image_url,
            category,
            order_index,
            clear_image_url,
            clear_category,
        } => {
            let update = ProjectUpdate {
                title,
                description,
                url,
                image_url: if clear_image_url {
                    Some(None)
                } else {
                    image_url.map(Some)
                },
                category: if clear_category {
                    Some(None)
                } else {
                    category.map(Some)
                },
                order_index,
            };
            panel.update(id, update).await?
        }

        ProjectCommands::Delete { id, yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("Delete project {id}?"))
                    .default(false)
                    .interact()?;
            if !confirmed {
                eprintln!("Deletion cancelled");
                return Ok(None);
            }
            panel.delete(id).await?
        }
    };

    Ok(Some(value))
}

fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
