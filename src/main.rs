//! kea-render: Kea DHCPv4 configuration renderer
//!
//! Entry point for the kea-render application.

use std::path::Path;
use std::process::ExitCode;

use kea_render::config::{Cli, Command, RenderJob, write_sample_input};
use kea_render::filters::FILTERS;
use kea_render::kea::catalog::{StandardOption, catalog};

mod app;

use app::{exit_code, exit_code_for, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    match &cli.command {
        Some(Command::Init { to }) => handle_init(to),
        Some(Command::Filters) => handle_filters(),
        Some(Command::Options { query }) => handle_options(query.as_deref()),
        None | Some(Command::Render) => handle_render(&cli),
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &Path) -> ExitCode {
    match write_sample_input(output) {
        Ok(()) => {
            println!("Sample input written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

/// Handles the `filters` subcommand.
fn handle_filters() -> ExitCode {
    for filter in FILTERS {
        println!("{:<20} {}", filter.name, filter.summary);
    }
    exit_code::SUCCESS
}

/// Handles the `options` subcommand.
fn handle_options(query: Option<&str>) -> ExitCode {
    let catalog = catalog();

    let Some(query) = query else {
        for option in catalog.iter() {
            print_option(option);
        }
        return exit_code::SUCCESS;
    };

    if let Some(option) = catalog.lookup(query) {
        print_option(option);
        exit_code::SUCCESS
    } else {
        eprintln!("No standard DHCPv4 option matches '{query}'");
        exit_code::INPUT_ERROR
    }
}

fn print_option(option: &StandardOption) {
    let array = if option.array { " (array)" } else { "" };
    println!(
        "{:>3}  {:<40} {}{array}",
        option.code, option.name, option.data_type
    );
}

/// Validates the input and writes the rendered configuration.
fn handle_render(cli: &Cli) -> ExitCode {
    let result = RenderJob::from_cli(cli).and_then(|job| {
        tracing::debug!("{job}");
        job.run()
    });

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            print_config_hint(&e);
            exit_code_for(&e)
        }
    }
}
