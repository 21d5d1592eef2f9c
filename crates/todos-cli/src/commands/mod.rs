//! CLI subcommands

pub mod lists;
pub mod migrate;
pub mod render;
pub mod request;
pub mod user;

use clap::Args;
use todos_core_types::Sensitive;
use todos_engine::commands::Request;
use todos_engine::{AppConfig, Backend, Response, Session, TodoApp};

/// Credentials and output options shared by commands that act as a user
#[derive(Debug, Args)]
pub struct SignInArgs {
    /// Username to sign in as
    #[arg(long)]
    pub user: String,

    /// Password (prefer the environment variable)
    #[arg(long, env = "TODOS_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Print responses as JSON
    #[arg(long)]
    pub json: bool,
}

/// Open the configured backend and sign a fresh session in
pub fn signed_in_app(
    config: &AppConfig,
    args: &SignInArgs,
) -> Result<(TodoApp, Session), Box<dyn std::error::Error>> {
    let mut app = TodoApp::new(Backend::from_config(config)?);
    let mut session = Session::new();

    let response = app.handle(
        &mut session,
        Request::SignIn {
            username: args.user.clone(),
            password: Sensitive::new(args.password.clone()),
        },
    );

    match response {
        Response::Redirect(_) => {
            // the welcome message is not interesting on a terminal
            session.state.drain_flash();
            Ok((app, session))
        }
        Response::Failure { status, message } => Err(format!("{} {}", status, message).into()),
        Response::Render(_) => Err("Invalid credentials.".into()),
    }
}

/// Print `response`, failing for failure responses
pub fn print_response(
    response: &Response,
    session: &mut Session,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Response::Failure { status, message } = response {
        return Err(format!("{} {}", status, message).into());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        // flash queued by a redirect would show on the next page
        let pending = session.state.drain_flash();
        print!("{}", render::render_response(response, &pending));
    }
    Ok(())
}
