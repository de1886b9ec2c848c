use clap::Parser;
use std::path::PathBuf;
use time::{macros::format_description, Date, OffsetDateTime};

use alta::{
    configuration::RenderConfiguration,
    error::RenderError,
    record::ClientRecord,
    submission::{submit, DirectorySink},
};

#[derive(Parser, Debug)]
#[command(version, about = "Generates the registration sheet and the SEPA mandate of a new client", long_about = None)]
struct CliArguments {
    #[arg(short = 'r', long = "record", value_name = "json_file")]
    record_path: PathBuf,
    #[arg(short = 'c', long = "configuration", value_name = "json_file")]
    configuration_path: Option<PathBuf>,
    /// Overrides the output directory of the configuration.
    #[arg(short = 'o', long = "output", value_name = "directory")]
    output_directory: Option<PathBuf>,
    /// The date written on the documents, today when not given.
    #[arg(short = 'd', long = "date", value_name = "yyyy-mm-dd", value_parser = parse_date)]
    current_date: Option<Date>,
}

fn parse_date(argument: &str) -> Result<Date, String> {
    Date::parse(argument, format_description!("[year]-[month]-[day]"))
        .map_err(|error| format!("{argument:?} is not a date in the yyyy-mm-dd format: {error}"))
}

fn main() {
    match fallible_main() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            log::error!("{}", error);
            std::process::exit(1);
        }
    }
}

/// Returns whether both documents were delivered.
fn fallible_main() -> Result<bool, RenderError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let arguments = CliArguments::parse();
    log::debug!("{:?}", arguments);

    let record = ClientRecord::from_path(&arguments.record_path)?;
    let missing_fields = record.missing_required_fields();
    if !missing_fields.is_empty() {
        for field_name in &missing_fields {
            log::error!("The required field {:?} is empty", field_name);
        }
        println!(
            "Por favor, revisa los campos obligatorios: {}",
            missing_fields.join(", ")
        );
        return Ok(false);
    }

    let mut configuration = match &arguments.configuration_path {
        Some(configuration_path) => RenderConfiguration::from_path(configuration_path)?,
        None => RenderConfiguration::default(),
    };
    if let Some(output_directory) = arguments.output_directory {
        configuration.output_directory = output_directory;
    }
    log::debug!("{:?}", configuration);

    let logo = configuration.load_logo();
    let current_date = arguments
        .current_date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let mut sink = DirectorySink::new(configuration.output_directory);
    log::info!("Saving the documents into {:?}", sink.directory());

    let outcome = submit(&record, current_date, logo.as_deref(), &mut sink);
    println!("{}", outcome.message());

    Ok(outcome.is_success())
}
