// Main entry point
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;

use locsuggest::infrastructure::config::{self, load_config, Logging};
use locsuggest::infrastructure::network::http::create_client;
use locsuggest::interfaces::cli::Cli;
use locsuggest::{LocationSearchClient, LocationSuggestion, NominatimProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle commands (flags)
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor)
                    .arg(&config_path)
                    .status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }
    if cli.popular {
        print_suggestions(&locsuggest::popular_cities(), cli.json)?;
        return Ok(());
    }
    if cli.regional {
        print_suggestions(&locsuggest::regional_cities(), cli.json)?;
        return Ok(());
    }

    // Handle query
    if cli.query.is_empty() {
        eprintln!("{}", "Please provide a location query".red());
        std::process::exit(1);
    }

    let query = cli.query.join(" ");
    let country = cli.country.as_deref().unwrap_or(&config.country_code);

    let http_client = create_client(&config.provider)?;
    let provider = NominatimProvider::new(http_client, config.provider.clone());
    let client = LocationSearchClient::new(Arc::new(provider), config.search.clone());

    let results = client.search_locations(query.trim(), country).await;
    print_suggestions(&results, cli.json)?;

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Ok(())
}

fn print_suggestions(suggestions: &[LocationSuggestion], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("{}", "No locations found".yellow());
        return Ok(());
    }

    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "  {}. {} {}",
            (i + 1).to_string().cyan(),
            s.display_name.green(),
            format!("[{}] ({}, {})", s.place_type, s.lat, s.lon).dimmed()
        );
    }

    Ok(())
}
