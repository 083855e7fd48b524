use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use xdot::XdotError;
use xdot_cli::{
    Args,
    error_adapter::{render, to_reportables},
};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(args.log_level)
        .init();
    debug!(args:?; "Parsed arguments");

    match xdot_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Logs every reportable part of a failed command.
fn report(err: &XdotError) {
    for reportable in to_reportables(err) {
        error!("{}", render(&reportable));
    }
}
