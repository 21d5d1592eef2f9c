//! Lists command
//!
//! Usage: todos lists --user <USERNAME>

use clap::Args;
use todos_engine::commands::Request;
use todos_engine::AppConfig;

use super::{print_response, signed_in_app, SignInArgs};

#[derive(Debug, Args)]
pub struct ListsArgs {
    #[command(flatten)]
    pub sign_in: SignInArgs,
}

pub fn execute(args: ListsArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, mut session) = signed_in_app(config, &args.sign_in)?;
    let response = app.handle(&mut session, Request::Lists);
    print_response(&response, &mut session, args.sign_in.json)
}
