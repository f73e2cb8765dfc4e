use blockcrypt::cli::{Cli, execute};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("blockcrypt: {err}");
            ExitCode::FAILURE
        }
    }
}
