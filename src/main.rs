use std::process::ExitCode;

use clap::Parser;
use registration_form::cli::{self, Cli};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cli::run(cli)
}
