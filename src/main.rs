use indicatif::MultiProgress;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use wsusscn2_cli::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use wsusscn2_cli::adapters::outbound::network::{CatalogClient, CatalogClientOptions};
use wsusscn2_cli::application::dto::ListRequest;
use wsusscn2_cli::application::use_cases::ListRecordsUseCase;
use wsusscn2_cli::cli::{Args, Command, ListArgs};
use wsusscn2_cli::config::{default_config_path, load_config, resolve_api_key, save_api_key};
use wsusscn2_cli::shared::error::ExitCode;
use wsusscn2_cli::shared::Result;

fn main() {
    let args = Args::parse_args();
    let progress = args.logging.clone().init(args.debug, !args.no_progress);

    let exit_code = match run(args, progress) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            let banner = "❌ An error occurred:";
            if std::io::stderr().is_terminal() {
                eprintln!("\n{}\n", banner.red().bold());
            } else {
                eprintln!("\n{}\n", banner);
            }
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: Args, progress: Option<MultiProgress>) -> Result<()> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    match &args.command {
        Command::SetApiKey => set_api_key(&args, config_path),
        command => match command.list_args() {
            Some(list) => list_records(&args, list, config_path, progress),
            None => Ok(()),
        },
    }
}

fn set_api_key(args: &Args, config_path: PathBuf) -> Result<()> {
    save_api_key(&config_path, args.api_key.as_deref().unwrap_or_default())?;
    eprintln!("✅ API key saved to {}", config_path.display());
    Ok(())
}

fn list_records(
    args: &Args,
    list: &dyn ListArgs,
    config_path: PathBuf,
    progress: Option<MultiProgress>,
) -> Result<()> {
    let config = load_config(&config_path)?;
    let api_key = resolve_api_key(args.api_key.as_deref(), &config)?;

    // Validates dates, so a bad value fails before any request
    let page = list.page();
    let request = ListRequest::builder(list.resource())
        .filter_input(list.filter_input())
        .limit(page.limit)
        .offset(page.offset)
        .record_limit(page.record_limit)
        .columns(list.columns())
        .count_only(page.count_only)
        .build()?;

    // Create adapters (Dependency Injection)
    let client = CatalogClient::new(CatalogClientOptions {
        base_url: config.api_url(),
        api_key,
        insecure: args.insecure,
        debug: args.debug,
    })?;
    // None under --no_progress or --quiet
    let progress_reporter = match progress {
        Some(multi) => StderrProgressReporter::new(multi),
        None => StderrProgressReporter::hidden(),
    };

    let use_case = ListRecordsUseCase::new(client, StdoutPresenter::new(), progress_reporter);
    let response = use_case.execute(&request)?;
    log::info!(
        "{} records in {} requests from {}",
        response.record_count,
        response.pages,
        request.resource.descriptor().endpoint
    );

    Ok(())
}
