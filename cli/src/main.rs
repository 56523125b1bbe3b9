//! Fakebook CLI — command-line front end for the analytics engine
//!
//! Loads a JSON dataset, builds the snapshot once and runs one query or the
//! whole battery against it.

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use fakebook::{AnalyticsEngine, Dataset, EngineConfig, UserId};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fakebook", version, about = "Fakebook social-network analytics")]
struct Cli {
    /// Dataset JSON file
    #[arg(long, global = true, env = "FAKEBOOK_DATASET", default_value = "dataset.json")]
    dataset: PathBuf,

    /// Optional YAML configuration
    #[arg(long, global = true, env = "FAKEBOOK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Birth-month distribution
    BirthMonths,
    /// Longest, shortest and most common first names
    Names,
    /// Users without friends
    Lonely,
    /// Users living away from their hometown
    LiveAway,
    /// Photos with the most tagged users
    TopPhotos {
        #[arg(long)]
        num: Option<usize>,
    },
    /// Same-gender non-friends tagged together
    MatchMaker {
        #[arg(long)]
        num: Option<usize>,
        /// Maximum birth-year difference
        #[arg(long)]
        year_diff: Option<u32>,
    },
    /// Non-friends with the most mutual friends
    SuggestFriends {
        #[arg(long)]
        num: Option<usize>,
    },
    /// States hosting the most events
    EventStates,
    /// Oldest and youngest friend of a user
    AgeInfo {
        user: u64,
    },
    /// Friends who are probably siblings
    Siblings,
    /// Run every query
    All {
        /// Target user for the age query
        #[arg(long)]
        user: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let dataset = Dataset::load(&cli.dataset)
        .with_context(|| format!("loading dataset {}", cli.dataset.display()))?;
    let engine = AnalyticsEngine::from_dataset(dataset, config)?;
    let config = engine.config();
    let format = &cli.format;

    match cli.command {
        Commands::BirthMonths => emit(&engine.birth_month_info(), format),
        Commands::Names => emit(&engine.name_info(), format),
        Commands::Lonely => emit(&engine.lonely_users(), format),
        Commands::LiveAway => emit(&engine.live_away_from_home(), format),
        Commands::TopPhotos { num } => {
            emit(&engine.photos_with_most_tags(num.unwrap_or(config.top_photos)), format)
        }
        Commands::MatchMaker { num, year_diff } => emit(
            &engine.match_maker(
                num.unwrap_or(config.top_matches),
                year_diff.unwrap_or(config.match_year_diff),
            ),
            format,
        ),
        Commands::SuggestFriends { num } => {
            emit(&engine.suggest_friends(num.unwrap_or(config.top_suggestions)), format)
        }
        Commands::EventStates => emit(&engine.event_states(), format),
        Commands::AgeInfo { user } => emit(&engine.age_info(UserId::new(user))?, format),
        Commands::Siblings => emit(&engine.potential_siblings(), format),
        Commands::All { user } => emit(&engine.run_all(UserId::new(user)), format),
    }
}

/// Print any result value in the requested format
fn emit<T: Serialize>(result: &T, format: &OutputFormat) -> anyhow::Result<()> {
    let value = serde_json::to_value(result)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Csv => {
            let (columns, rows) = tabulate(&value);
            if !columns.is_empty() {
                println!("{}", columns.join(","));
                for row in &rows {
                    let cells: Vec<String> = row.iter().map(format_csv_value).collect();
                    println!("{}", cells.join(","));
                }
            }
        }
        OutputFormat::Table => {
            let (columns, rows) = tabulate(&value);
            if rows.is_empty() {
                println!("(no results)");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(&columns);

            for row in &rows {
                let cells: Vec<String> = row.iter().map(format_table_value).collect();
                table.add_row(cells);
            }

            println!("{}", table);
            println!("{} row(s)", rows.len());
        }
    }

    Ok(())
}

/// Arrays of objects become one row per element; a single object becomes
/// field/value rows.
fn tabulate(value: &serde_json::Value) -> (Vec<String>, Vec<Vec<serde_json::Value>>) {
    match value {
        serde_json::Value::Array(items) => {
            let columns: Vec<String> = match items.first() {
                Some(serde_json::Value::Object(map)) => map.keys().cloned().collect(),
                _ => vec!["value".to_string()],
            };
            let rows = items
                .iter()
                .map(|item| match item {
                    serde_json::Value::Object(map) => columns
                        .iter()
                        .map(|c| map.get(c).cloned().unwrap_or(serde_json::Value::Null))
                        .collect(),
                    other => vec![other.clone()],
                })
                .collect();
            (columns, rows)
        }
        serde_json::Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(k, v)| vec![serde_json::Value::String(k.clone()), v.clone()])
                .collect();
            (vec!["field".to_string(), "value".to_string()], rows)
        }
        other => (vec!["value".to_string()], vec![vec![other.clone()]]),
    }
}

fn format_table_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Object(map) => {
            // Users and photos get a compact representation
            if let (Some(id), Some(first), Some(last)) =
                (map.get("id"), map.get("first_name"), map.get("last_name"))
            {
                return format!("{} {} {}", id, format_table_value(first), format_table_value(last));
            }
            if let (Some(id), Some(link)) = (map.get("photo_id"), map.get("link")) {
                return format!("#{} {}", id, format_table_value(link));
            }
            serde_json::to_string(v).unwrap_or_default()
        }
        serde_json::Value::Array(items) => items
            .iter()
            .map(format_table_value)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn format_csv_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::Null => "".to_string(),
        serde_json::Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                format!("\"{}\"", s.replace('"', "\"\""))
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => {
            let json = serde_json::to_string(v).unwrap_or_default();
            format!("\"{}\"", json.replace('"', "\"\""))
        }
    }
}
