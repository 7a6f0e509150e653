//! recordscan CLI
//!
//! Generates a dummy dataset and runs queries against it.

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use recordscan::generator;
use recordscan::{
    Config, QueryCommand, QueryEngine, QueryOutcome, Record, RecordCollection,
    UnknownColumnPolicy,
};
use tracing_subscriber::{fmt, EnvFilter};

/// recordscan CLI
#[derive(Parser, Debug)]
#[command(name = "recordscan-cli")]
#[command(about = "Query a generated in-memory record collection")]
#[command(version)]
struct Args {
    /// Prefix for generated text fields
    #[arg(short, long, default_value = "testdata")]
    prefix: String,

    /// Number of records to generate
    #[arg(short, long, default_value = "1000")]
    count: u32,

    /// Fail on selectors naming an unknown column instead of matching nothing
    #[arg(long)]
    reject_unknown: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find records by column selector
    Find {
        /// Column selector, e.g. column0..column3
        selector: String,

        /// Value to match
        value: String,
    },

    /// Delete a record by id
    Delete {
        /// The id to delete
        id: u32,
    },

    /// Run the reference query scenarios and check their result sizes
    Demo,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,recordscan=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let policy = if args.reject_unknown {
        UnknownColumnPolicy::Reject
    } else {
        UnknownColumnPolicy::EmptyResult
    };

    let config = Config::builder()
        .prefix(&args.prefix)
        .record_count(args.count)
        .unknown_column(policy)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!("recordscan v{}", recordscan::VERSION);

    let engine = QueryEngine::new(&config);
    let mut data = generator::generate(&config);
    tracing::info!("Generated {} records with prefix {:?}", data.len(), config.prefix);

    let command = match args.command {
        Commands::Find { selector, value } => QueryCommand::FindBySelector { selector, value },
        Commands::Delete { id } => QueryCommand::Delete { id },
        Commands::Demo => return run_demo(&engine, &config.prefix, data),
    };

    match engine.execute(&mut data, command) {
        Ok(QueryOutcome::Matches(records)) => {
            for record in &records {
                print_record(record);
            }
            println!("{} record(s) matched", records.len());
            ExitCode::SUCCESS
        }
        Ok(QueryOutcome::Deleted(Some(record))) => {
            print_record(&record);
            println!("deleted, {} record(s) remain", data.len());
            ExitCode::SUCCESS
        }
        Ok(QueryOutcome::Deleted(None)) => {
            println!("no record deleted, {} record(s) remain", data.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Query failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_record(record: &Record) {
    println!(
        "{}\t{}\t{}\t{}",
        record.id, record.field_a, record.field_b, record.field_c
    );
}

/// Scenario expectations only hold for the reference dataset shape
fn run_demo(engine: &QueryEngine, prefix: &str, mut data: RecordCollection) -> ExitCode {
    let mut failures = 0;

    let mut check = |label: &str, actual: recordscan::Result<usize>, expected: usize| match actual {
        Ok(n) if n == expected => tracing::info!("{}: {} record(s), ok", label, n),
        Ok(n) => {
            failures += 1;
            tracing::error!("{}: expected {} record(s), got {}", label, expected, n);
        }
        Err(e) => {
            failures += 1;
            tracing::error!("{}: {}", label, e);
        }
    };

    let start = Instant::now();
    let by_a = engine.find_by_selector(&data, "column1", &format!("{prefix}500"));
    let by_b = engine.find_by_selector(&data, "column2", "24");
    tracing::info!("profiler: {:?}", start.elapsed());

    check("column1 == prefix500", by_a.map(|r| r.len()), 1);
    check("column2 == 24", by_b.map(|r| r.len()), 10);
    check(
        "column0 == 314",
        engine.find_by_selector(&data, "column0", "314").map(|r| r.len()),
        1,
    );

    let before = data.len();
    engine.delete(&mut data, 314);
    check(
        "column0 == 314 after delete",
        engine.find_by_selector(&data, "column0", "314").map(|r| r.len()),
        0,
    );
    check("records removed by delete", Ok(before - data.len()), 1);

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
