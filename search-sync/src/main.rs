use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use search_sync::telemetry::init_tracing;
use search_sync::{Dependencies, RawIndex, Settings, SyncError};
use search_sync_repository::SearchEngine;
use search_sync_shared::{FilterValue, QueryState};

#[derive(Parser)]
#[command(name = "search-sync")]
#[command(about = "Query and maintain a hosted search index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a query against an index and print the response
    Search {
        /// Index name
        #[arg(long)]
        index: String,

        /// Full-text query
        #[arg(long, default_value = "")]
        query: String,

        /// Maximum number of hits
        #[arg(long)]
        limit: Option<usize>,

        /// Equality filter, as field=value
        #[arg(long = "where", value_parser = parse_where)]
        wheres: Vec<(String, FilterValue)>,

        /// Set-membership filter, as field=a,b,c
        #[arg(long = "where-in", value_parser = parse_where_in)]
        where_ins: Vec<(String, Vec<FilterValue>)>,

        /// Page to fetch, starting at 1
        #[arg(long, requires = "per_page")]
        page: Option<usize>,

        /// Hits per page
        #[arg(long, requires = "page")]
        per_page: Option<usize>,
    },
    /// Remove every object from an index
    Flush {
        /// Index name
        #[arg(long)]
        index: String,
    },
    /// Print what the configured engine needs from its environment
    Configuration,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    if matches!(cli.command, Commands::Configuration) {
        return match render_configuration(|name| std::env::var(name).ok()) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(settings.log_format);

    match run(cli, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, settings: &Settings) -> Result<(), SyncError> {
    let deps = Dependencies::new(settings)?;
    let engine = deps.engine;

    match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            wheres,
            where_ins,
            page,
            per_page,
        } => {
            let mut state = QueryState::new(Arc::new(RawIndex::new(index)), query);
            for (field, value) in wheres {
                state = state.where_eq(field, value);
            }
            for (field, values) in where_ins {
                state = state.where_in(field, values);
            }
            if let Some(limit) = limit {
                state = state.take(limit);
            }

            match (page, per_page) {
                (Some(page), Some(per_page)) => {
                    let paginator = engine.paginate(&state, per_page, page).await?;
                    print_json(&paginator)?;
                }
                _ => {
                    let response = engine.search(&state).await?;
                    print_json(&response)?;
                }
            }
        }
        Commands::Flush { index } => {
            engine.flush(&RawIndex::new(index.as_str())).await?;
            info!(index = %index, "Index flushed");
        }
        Commands::Configuration => {
            print_json(&engine.configuration())?;
        }
    }

    Ok(())
}

/// Requirements of the backend named by `SEARCH_ENGINE`, as JSON.
///
/// Reads nothing else, so it answers before credentials are set.
fn render_configuration<F>(lookup: F) -> Result<String, SyncError>
where
    F: Fn(&str) -> Option<String>,
{
    let kind = Settings::engine_kind_from_lookup(lookup)?;
    Ok(serde_json::to_string_pretty(&kind.configuration())?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), SyncError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn split_pair(raw: &str) -> Result<(&str, &str), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value.trim())),
        _ => Err(format!("expected field=value, got {}", raw)),
    }
}

fn parse_where(raw: &str) -> Result<(String, FilterValue), String> {
    let (field, value) = split_pair(raw)?;
    let value = value.parse::<FilterValue>().map_err(|e| e.to_string())?;
    Ok((field.to_string(), value))
}

fn parse_where_in(raw: &str) -> Result<(String, Vec<FilterValue>), String> {
    let (field, values) = split_pair(raw)?;
    let values = values
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| value.parse::<FilterValue>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((field.to_string(), values))
}
