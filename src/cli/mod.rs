//! CLI module for the registration form
//!
//! Every invocation is one user event against the saved form session:
//! - `show`: render the form
//! - `set` / `country`: edit fields
//! - `submit`: validate and, when valid, show the submitted data

pub mod form;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Registration form - fill in, validate and submit a user registration
#[derive(Parser)]
#[command(name = "registration-form")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Extra configuration file layered over config/default and config/local
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the form with its current values
    Show(form::ShowArgs),

    /// Set one field
    Set(form::SetArgs),

    /// Select a country; derives the phone code and clears the city
    Country(form::CountryArgs),

    /// List the selectable countries with calling codes and cities
    Countries,

    /// Clear every field
    Reset,

    /// Validate the form and submit it
    Submit,
}

/// Parse-independent entry point used by `main`
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    form::run(cli.command, cli.config.as_deref())
}
