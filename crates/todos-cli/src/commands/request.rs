//! Request command
//!
//! Usage: todos request <METHOD> <PATH> [--field key=value]... --user <USERNAME>

use std::collections::HashMap;

use clap::Args;
use todos_engine::commands::Method;
use todos_engine::AppConfig;

use super::{print_response, signed_in_app, SignInArgs};

#[derive(Debug, Args)]
pub struct RequestArgs {
    /// GET or POST
    #[arg(value_parser = parse_method)]
    pub method: Method,

    /// Request path, e.g. /lists/1/todos
    pub path: String,

    /// Form field as key=value (repeatable)
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    #[command(flatten)]
    pub sign_in: SignInArgs,
}

fn parse_method(value: &str) -> Result<Method, String> {
    value.parse()
}

fn parse_field(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", value))
}

pub fn execute(args: RequestArgs, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (mut app, mut session) = signed_in_app(config, &args.sign_in)?;
    let form: HashMap<String, String> = args.fields.into_iter().collect();

    let response = app.dispatch(&mut session, args.method, &args.path, &form);
    print_response(&response, &mut session, args.sign_in.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("todoTitle=Buy milk"),
            Ok(("todoTitle".to_string(), "Buy milk".to_string()))
        );
        assert_eq!(
            parse_field("a=b=c"),
            Ok(("a".to_string(), "b=c".to_string()))
        );
        assert!(parse_field("novalue").is_err());
    }
}
