use std::{io, process};

use acatsw::{
    application::error::AppError,
    config::{self, CliArgs, Command, RenderArgs, Settings},
    infra::telemetry,
    widget::render_fixture,
};
use clap::Parser;
use tracing::{dispatcher, error};

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }
    eprintln!("error: {error}");
}

fn run() -> Result<(), AppError> {
    let cli = CliArgs::parse();
    let settings = config::load(&cli)?;
    telemetry::init(&settings.logging)?;

    match &cli.command {
        Command::Render(args) => render(&settings, args),
    }
}

fn render(settings: &Settings, args: &RenderArgs) -> Result<(), AppError> {
    render_fixture(settings, args, io::stdout().lock()).map(|_| ())
}
