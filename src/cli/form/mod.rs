//! Form commands - edit, show and submit the saved registration form

mod view;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::bail;
use clap::Args;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::{FieldName, ReferenceData};
use crate::infrastructure::logging;
use crate::infrastructure::services::{SubmissionController, SubmissionOutcome};

pub use view::{render_countries, render_error_summary, render_form, render_success, FormView};

#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    /// Show the password in clear text
    #[arg(long)]
    pub reveal_password: bool,

    /// Validate while showing and print the errors inline
    #[arg(long)]
    pub check: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// Field name, e.g. firstName, phone-number or aadhar
    pub field: String,

    /// New value; an empty string clears the field
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args, Debug, Clone)]
pub struct CountryArgs {
    /// Country name as listed by `countries`
    pub name: String,
}

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Done,
    /// Submit found invalid fields
    Rejected,
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Done => ExitCode::SUCCESS,
            CommandStatus::Rejected => ExitCode::FAILURE,
        }
    }
}

/// Load configuration, wire the controller and run one command
pub fn run(command: super::Command, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load_from(config_path);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };
    init_logging(&config);

    if let Err(e) = loaded {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    let mut controller = crate::create_controller_with_config(&config);
    let mut out = std::io::stdout().lock();

    let status = execute(&mut controller, command, &mut out)?;
    Ok(status.into())
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });
}

/// Apply one command to the controller, writing the resulting view to `out`
pub fn execute<W: Write>(
    controller: &mut SubmissionController,
    command: super::Command,
    out: &mut W,
) -> anyhow::Result<CommandStatus> {
    use super::Command;

    match command {
        Command::Show(args) => {
            let errors = args.check.then(|| controller.preview_errors());

            if let Some(errors) = errors.as_ref().filter(|e| !e.is_empty()) {
                render_error_summary(out, errors)?;
            }

            let view = FormView {
                reveal_password: args.reveal_password,
            };
            render_form(out, controller.store(), errors.as_ref(), view)?;
        }
        Command::Set(args) => {
            let field: FieldName = args.field.parse()?;

            if field == FieldName::City {
                check_city(controller, &args.value)?;
            }

            controller.set_field(field, args.value)?;
            info!(field = %field, "Field set");
            writeln!(out, "Updated {}", field.label())?;

            if field == FieldName::Country {
                render_country_selection(controller, out)?;
            }
        }
        Command::Country(args) => {
            controller.set_country(args.name)?;
            render_country_selection(controller, out)?;
        }
        Command::Countries => {
            render_countries(out, controller.store().reference())?;
        }
        Command::Reset => {
            controller.reset()?;
            writeln!(out, "Form cleared")?;
        }
        Command::Submit => match controller.submit()? {
            SubmissionOutcome::Rejected(errors) => {
                render_error_summary(out, &errors)?;
                render_form(out, controller.store(), Some(&errors), FormView::default())?;
                return Ok(CommandStatus::Rejected);
            }
            SubmissionOutcome::Accepted(payload) => {
                render_success(out, &payload)?;
            }
        },
    }

    Ok(CommandStatus::Done)
}

/// A city can only be chosen from the selected country's list
fn check_city(controller: &SubmissionController, city: &str) -> anyhow::Result<()> {
    if city.is_empty() {
        return Ok(());
    }

    let country = &controller.snapshot().country;
    if country.is_empty() {
        bail!("Select a country before choosing a city");
    }

    let selected = controller.store().reference().country(country);
    if !selected.is_some_and(|c| c.has_city(city)) {
        let cities = controller.store().available_cities();
        let options = if cities.is_empty() {
            "none available".to_string()
        } else {
            cities.join(", ")
        };
        bail!(
            "'{}' is not a city of {} (choose from: {})",
            city,
            country,
            options
        );
    }

    Ok(())
}

fn render_country_selection<W: Write>(
    controller: &SubmissionController,
    out: &mut W,
) -> anyhow::Result<()> {
    let form = controller.snapshot();

    if form.phone_code.is_empty() {
        writeln!(
            out,
            "'{}' is not a listed country; phone code cleared",
            form.country
        )?;
        return Ok(());
    }

    writeln!(out, "Country: {} ({})", form.country, form.phone_code)?;
    writeln!(
        out,
        "Cities: {}",
        controller.store().available_cities().join(", ")
    )?;

    Ok(())
}
