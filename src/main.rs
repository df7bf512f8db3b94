use std::process::exit;

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::error;

use pushlater::{
    config::Config,
    errors::PushLaterError,
    opts::{normalize_args, CliOptions},
    prompt::TerminalPrompt,
};

fn run(opts: &CliOptions) -> Result<(), PushLaterError> {
    let config = Config::try_from(opts)?;
    pushlater::run(&config, &mut TerminalPrompt)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = normalize_args(std::env::args_os());
    if args.len() <= 1 {
        if let Err(err) = CliOptions::command().print_help() {
            error!("Failed to print usage: {}", err);
            exit(1);
        }
        exit(0);
    }
    let opts = CliOptions::parse_from(args);
    if let Err(err) = run(&opts) {
        error!("{}", err);
        exit(err.exit_code());
    }
}
