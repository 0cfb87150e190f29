mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use config::{ConfigError, Overrides, SeedConfig};
use serde::Serialize;
use shopseed_core::{Dialect, Error as CoreError, create_statements, default_catalog};
use shopseed_generate::GenerationError;
use shopseed_generate::output::csv::{CsvSummary, write_purchases_csv, write_users_csv};
use shopseed_generate::{GeneratedRecords, generate_records, seeded_rng};
use shopseed_load::{LoadError, LoadRequest, Target, seed_database};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("load error: {0}")]
    Load(#[from] LoadError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "shopseed", version, about = "Seed a database with synthetic users and purchases")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate records and insert them in one transaction.
    Load(LoadArgs),
    /// Generate records and write them as CSV files.
    Export(ExportArgs),
    /// Print the table DDL.
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct GenerationArgs {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of users to generate.
    #[arg(long)]
    users: Option<u64>,
    /// Number of purchases to generate.
    #[arg(long)]
    purchases: Option<u64>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct LoadArgs {
    /// Connection string (flag form).
    #[arg(long, value_name = "CONNECTION_STRING", conflicts_with = "target_pos")]
    target: Option<String>,
    /// Connection string (positional form).
    #[arg(value_name = "CONNECTION_STRING")]
    target_pos: Option<String>,
    #[command(flatten)]
    generation: GenerationArgs,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Directory receiving user.csv and purchase.csv.
    #[arg(long, default_value = "out")]
    out: PathBuf,
    #[command(flatten)]
    generation: GenerationArgs,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    #[arg(long, value_enum, default_value_t = DialectArg::Sqlite)]
    dialect: DialectArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DialectArg {
    Postgres,
    Sqlite,
}

impl From<DialectArg> for Dialect {
    fn from(value: DialectArg) -> Self {
        match value {
            DialectArg::Postgres => Dialect::Postgres,
            DialectArg::Sqlite => Dialect::Sqlite,
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportSummary {
    seed: u64,
    users: u64,
    purchases: u64,
    bytes_written: u64,
    out: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn failure_message(err: &CliError) -> String {
    format!("error: {err}")
}

async fn run(cli: Cli) -> Result<(), CliError> {
    logging::init_logging(cli.log_json).map_err(CliError::Logging)?;

    match cli.command {
        Command::Load(args) => run_load(args).await,
        Command::Export(args) => run_export(args),
        Command::Schema(args) => run_schema(args),
    }
}

fn resolve_config(args: GenerationArgs, target: Option<String>) -> Result<SeedConfig, CliError> {
    let config = SeedConfig::load(args.config.as_deref())?.apply(Overrides {
        target,
        user_count: args.users,
        purchase_count: args.purchases,
        seed: args.seed,
    });
    if config.max_attempts == 0 {
        return Err(CliError::InvalidConfig(
            "max_attempts must be at least 1".to_string(),
        ));
    }
    Ok(config)
}

async fn run_load(args: LoadArgs) -> Result<(), CliError> {
    let LoadArgs {
        target,
        target_pos,
        generation,
    } = args;

    let config = resolve_config(generation, target.or(target_pos))?;
    let target = match config.target.as_deref() {
        Some(value) => Target::parse(value)?,
        None => Target::default(),
    };

    let run_id = Uuid::new_v4().to_string();
    tracing::info!(event = "load_requested", run_id = %run_id, dialect = %target.dialect());

    let request = LoadRequest {
        options: config.generate_options(),
        seed: config.seed,
        now: None,
    };
    let report = seed_database(&target, &request).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    tracing::info!(event = "load_finished", run_id = %run_id, status = "success");
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let config = resolve_config(args.generation, None)?;
    let timer = Instant::now();
    let mut seeded = seeded_rng(config.seed);
    let now = chrono::Utc::now().naive_utc();

    tracing::info!(
        event = "export_started",
        seed = seeded.seed,
        users = config.user_count,
        purchases = config.purchase_count,
        out = %args.out.display()
    );

    std::fs::create_dir_all(&args.out)?;
    let GeneratedRecords { users, purchases } =
        generate_records(&config.generate_options(), now, &mut seeded.rng)?;
    let users_csv = write_users_csv(&args.out.join("user.csv"), &users)?;
    let purchases_csv = write_purchases_csv(&args.out.join("purchase.csv"), purchases)?;

    let summary = summarize(seeded.seed, &users_csv, &purchases_csv, args.out);
    tracing::info!(
        event = "export_finished",
        duration_ms = timer.elapsed().as_millis() as u64,
        bytes_written = summary.bytes_written
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn summarize(seed: u64, users: &CsvSummary, purchases: &CsvSummary, out: PathBuf) -> ExportSummary {
    ExportSummary {
        seed,
        users: users.rows,
        purchases: purchases.rows,
        bytes_written: users.bytes + purchases.bytes,
        out,
    }
}

fn run_schema(args: SchemaArgs) -> Result<(), CliError> {
    let catalog = default_catalog()?;
    shopseed_core::validate_catalog(&catalog)?;
    for statement in create_statements(&catalog, args.dialect.into()) {
        println!("{statement};\n");
    }
    Ok(())
}
