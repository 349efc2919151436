//! Command-line front end: collects the request, prints the result.

mod context;
mod flags;
mod help;
mod parse;
mod prompts;

use std::process::ExitCode;

pub use context::{Context, Exit};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::usage_hint();
            return Exit::Rejected.code();
        }
    };

    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.code(),
    }
}
