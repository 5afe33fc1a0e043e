/*
[INPUT]:  Parsed subcommand and configured client
[OUTPUT]: JSON result of the backend operation
[POS]:    CLI layer - maps subcommands onto client operations
[UPDATE]: When adding commands or client operations
*/

use anyhow::{Context, Result};
use cinelist_client::{CineListClient, RegisterRequest};
use serde_json::Value;

use crate::cli::{Command, MoviesCommand};

/// Run one command. Returns `None` when the operation yields no body.
pub async fn run(client: &CineListClient, command: Command) -> Result<Option<Value>> {
    let value = match command {
        Command::Login { email, password } => client.login(&email, &password).await?,
        Command::Register {
            name,
            email,
            tax_id,
            password,
        } => {
            let req = RegisterRequest {
                name,
                email,
                tax_id,
                password,
            };
            client.register(&req).await?
        }
        Command::ResetPassword { token, new_password } => {
            client.reset_password(&token, &new_password).await?
        }
        Command::Movies(MoviesCommand::List) => client.list_movies().await?,
        Command::Movies(MoviesCommand::Get { id }) => client.get_movie(&id).await?,
        Command::Movies(MoviesCommand::Create { data }) => {
            let movie = parse_data(&data)?;
            client.create_movie(&movie).await?
        }
        Command::Movies(MoviesCommand::Update { id, data }) => {
            let movie = parse_data(&data)?;
            client.update_movie(&id, &movie).await?
        }
        Command::Movies(MoviesCommand::Delete { id }) => {
            client.delete_movie(&id).await?;
            return Ok(None);
        }
    };
    Ok(Some(value))
}

/// Parse `--data`: inline JSON, or `@path` to a JSON file.
pub fn parse_data(data: &str) -> Result<Value> {
    let text = match data.strip_prefix('@') {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read movie data from {path}"))?
        }
        None => data.to_string(),
    };
    serde_json::from_str(&text).context("movie data must be valid JSON")
}
