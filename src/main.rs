use clap::Parser;
use satstacker::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
