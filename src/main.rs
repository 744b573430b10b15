mod api;
mod cli;
mod error;
mod fmt;
mod ingest;
mod models;
mod preview;
mod query;
mod render;
mod settings;
mod upload;

use clap::Parser;

use cli::{Cli, Commands};
use settings::resolve_api_url;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let api_url = resolve_api_url(cli.api_url.as_deref());

    let result = match cli.command {
        Commands::Ping => cli::ping::run(&api_url),
        Commands::Process {
            bank,
            rules,
            preview,
        } => cli::process::run(&api_url, &bank, &rules, preview),
        Commands::Records { company_id } => cli::records::run(&api_url, &company_id),
        Commands::Config { url } => cli::config::run(url.as_deref()),
        Commands::Preview { file, kind } => cli::preview::run(&file, kind.map(Into::into)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
