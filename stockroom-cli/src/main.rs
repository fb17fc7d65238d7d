mod cli;
mod commands;
mod paths;
mod surface;
#[cfg(test)]
mod test_server;

use std::fs;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use simplelog::Config;
use simplelog::WriteLogger;
use stockroom_lib::InventoryClient;
use stockroom_lib::config::Endpoints;
use stockroom_lib::dialog::DialogBroker;
use stockroom_lib::router::Router;

use crate::cli::Cli;
use crate::commands::App;

fn init_logging(cli: &Cli) -> anyhow::Result<PathBuf> {
    let path = match &cli.log_file {
        Some(path) => PathBuf::from(path),
        None => {
            paths::rotate_logs();
            paths::log_file().context("no cache directory for the log file")?
        }
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), file)?;
    Ok(path)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => log::info!("loaded {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("ignoring .env: {}", e),
    }

    let client = InventoryClient::builder()
        .endpoints(Endpoints::from_env()?)
        .timeout(Duration::from_secs(cli.timeout))
        .build()?;
    log::debug!("{:?}", client);

    let dialogs = DialogBroker::new();
    let surface = surface::spawn(dialogs.clone());

    let app = App {
        client,
        dialogs,
        router: Router::new(),
    };

    let result = app.execute(cli.command).await;
    surface.abort();

    let output = result?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match init_logging(&cli) {
        Ok(path) => log::info!(
            "stockroom {} logging to {}",
            env!("CARGO_PKG_VERSION"),
            path.display()
        ),
        Err(e) => eprintln!("warning: logging disabled: {:#}", e),
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
