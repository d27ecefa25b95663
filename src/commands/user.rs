//! User command - registration and login.

use super::{print_json, services};
use crate::cli::args::{UserAction, UserArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the user command
pub async fn execute(args: UserArgs, config: Config) -> AppResult<()> {
    let accounts = services(&config).await?.accounts();

    match args.action {
        UserAction::Register {
            username,
            email,
            password,
        } => {
            let user = accounts.register(username, email, password).await?;
            print_json(&user)
        }
        UserAction::Login { username, password } => {
            let session = accounts.authenticate(username, password).await?;
            print_json(&session)
        }
    }
}
