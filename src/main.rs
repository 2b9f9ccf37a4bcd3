//! pedview CLI entry point

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use pedview::cli::Cli;
use pedview::player::clock::validate_speed;
use pedview::theme::Theme;
use pedview::{logging, Config};

mod commands;

fn main() -> ExitCode {
    // clap exits with its own code (2) on parse errors
    let cli = Cli::parse();
    let mut theme = Theme::default();

    match run(cli, &mut theme) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", theme.error_text(&format!("Error: {:#}", err)));
            ExitCode::FAILURE
        }
    }
}

/// Run the command; `theme` is switched to the configured one once loaded.
fn run(cli: Cli, theme: &mut Theme) -> Result<ExitCode> {
    if cli.file.is_none() && !cli.print_config {
        eprintln!("{}", Cli::command().render_usage());
        return Ok(ExitCode::FAILURE);
    }

    if let Some(path) = logging::log_file_path(cli.log_file.as_deref()) {
        logging::init(&path)?;
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);
    *theme = Theme::from_name(config.render.theme);
    config.validate()?;

    if cli.print_config {
        commands::config::handle_show(&config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(file) = cli.file.as_deref() else {
        return Ok(ExitCode::FAILURE);
    };

    validate_speed(config.playback.speed)?;
    commands::play::handle_play(file, &config)?;
    Ok(ExitCode::SUCCESS)
}
