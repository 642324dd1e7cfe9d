//! User commands
//!
//! Commands: get, add

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use lightbnb_core::NewUser;
use lightbnb_db::{DbError, UserRecord};

use super::{connect, print_json, GlobalOpts, OutputFormat};

#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommands,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// Look up a user by email or id
    Get(GetArgs),
    /// Register a new user
    Add(AddArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct GetArgs {
    /// Email address of the user
    #[arg(long)]
    pub email: Option<String>,

    /// Numeric user id
    #[arg(long)]
    pub id: Option<i32>,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unique)
    #[arg(long)]
    pub email: String,

    /// Password hash to store
    #[arg(long)]
    pub password: String,
}

pub async fn run_users(global: &GlobalOpts, args: UsersArgs) -> Result<()> {
    let store = connect(global).await?;

    let result = match args.command {
        UsersCommands::Get(get) => {
            let lookup = match (get.email, get.id) {
                (Some(email), _) => store.get_user_with_email(&email).await,
                (None, Some(id)) => store.get_user_with_id(id).await,
                (None, None) => Ok(None),
            };
            match lookup {
                Ok(Some(user)) => print_user(global.format, &user),
                Ok(None) => Err(anyhow!("No such user")),
                Err(e) => Err(e.into()),
            }
        }
        UsersCommands::Add(add) => {
            let new = NewUser {
                name: add.name,
                email: add.email,
                password: add.password,
            };
            match store.add_user(&new).await {
                Ok(user) => print_user(global.format, &user),
                Err(DbError::Conflict { .. }) => {
                    Err(anyhow!("A user with email '{}' already exists", new.email))
                }
                Err(e) => Err(e.into()),
            }
        }
    };

    store.close().await;
    result
}

fn print_user(format: OutputFormat, user: &UserRecord) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(user),
        OutputFormat::Text => {
            println!("#{} {} <{}>", user.id, user.name, user.email);
            Ok(())
        }
    }
}
