use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt::Write;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use u_sequencing::generator::InstanceGenerator;
use u_sequencing::scheduler::{GreedyScheduler, RunResult};
use u_sequencing::service::{ErrorResponse, SequencingService};
use u_sequencing::validation::{ValidationConfig, DEFAULT_MAX_ABS_PROFIT, DEFAULT_MAX_DEADLINE};

/// Exit status for rejected requests.
const EXIT_REJECTED: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "u-sequencing")]
#[command(version)]
#[command(about = "Schedule unit-duration jobs with deadlines for maximum profit")]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Schedule a batch of jobs read as JSON ({"jobs": [...]})
    Solve(SolveArgs),

    /// Generate a random job batch as JSON
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct SolveArgs {
    /// Request file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    output: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Accept batches where several jobs share an ID
    #[arg(long)]
    allow_duplicate_ids: bool,

    /// Largest accepted deadline
    #[arg(long, default_value_t = DEFAULT_MAX_DEADLINE)]
    max_deadline: usize,

    /// Largest accepted absolute profit
    #[arg(long, default_value_t = DEFAULT_MAX_ABS_PROFIT)]
    max_abs_profit: i64,

    /// Never schedule jobs with negative profit
    #[arg(long)]
    skip_unprofitable: bool,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Number of jobs
    #[arg(short, long, default_value = "10")]
    jobs: usize,

    /// Largest deadline to draw
    #[arg(short = 'd', long, default_value = "5")]
    max_deadline: usize,

    /// Smallest profit to draw
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    min_profit: i64,

    /// Largest profit to draw
    #[arg(long, default_value = "100", allow_negative_numbers = true)]
    max_profit: i64,

    /// RNG seed
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let outcome = match args.command {
        Commands::Solve(solve_args) => run_solve(solve_args),
        Commands::Generate(generate) => run_generate(generate),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_solve(args: SolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let body = read_input(args.input.as_ref())?;
    let (output, code) = solve(&args, &body)?;

    println!("{}", output);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Handles one request body, returning the text for stdout and the exit
/// status. Rejected requests yield the error JSON and [`EXIT_REJECTED`].
fn solve(args: &SolveArgs, body: &str) -> serde_json::Result<(String, i32)> {
    let service = SequencingService::new()
        .with_validation(
            ValidationConfig::new()
                .with_max_deadline(args.max_deadline)
                .with_max_abs_profit(args.max_abs_profit)
                .with_unique_ids(!args.allow_duplicate_ids),
        )
        .with_scheduler(GreedyScheduler::new().with_skip_unprofitable(args.skip_unprofitable));

    match service.handle_json(body) {
        Ok(result) => {
            let output = match args.output {
                OutputFormat::Json => to_json(&result, args.pretty)?,
                OutputFormat::Table => render_table(&result),
            };
            Ok((output, 0))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Request rejected");
            let response = ErrorResponse {
                error: e.to_string(),
            };
            Ok((to_json(&response, args.pretty)?, EXIT_REJECTED))
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let jobs = InstanceGenerator::new(args.jobs, args.max_deadline)
        .with_profit_range(args.min_profit, args.max_profit)
        .generate(&mut rng);
    tracing::info!(jobs = jobs.len(), seed = args.seed, "Generated job batch");

    let request = serde_json::json!({ "jobs": jobs });
    println!("{}", to_json(&request, args.pretty)?);
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn render_table(result: &RunResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{:<6} {:<20} {:>10} {:>10}", "SLOT", "JOB", "DEADLINE", "PROFIT");
    for entry in &result.schedule {
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:>10} {:>10}",
            entry.slot, entry.job.id, entry.job.deadline, entry.job.profit
        );
    }

    if !result.missed.is_empty() {
        let _ = writeln!(out, "\nMissed:");
        for job in &result.missed {
            let _ = writeln!(
                out,
                "{:<6} {:<20} {:>10} {:>10}",
                "-", job.id, job.deadline, job.profit
            );
        }
    }

    let stats = &result.stats;
    let _ = writeln!(out, "\nTotal profit:     {}", stats.total_profit);
    let _ = writeln!(out, "Utilization rate: {:.2}%", stats.utilization_rate);
    let _ = write!(
        out,
        "Scheduled/missed: {}/{} (max deadline {})",
        stats.scheduled_count, stats.missed_count, stats.max_deadline
    );
    out
}
