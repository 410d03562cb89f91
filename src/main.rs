use clap::Parser;
use foresight::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
