use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUN: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate all checks and report the score (default if no subcommand)
    Score,
    /// Validate the config and show allocated point values without evaluating
    Check,
}

#[derive(Parser, Debug)]
#[command(name = "score-agent")]
#[command(about = "Scoreboard agent for security competition images", long_about = None)]
#[command(version)]
struct Cli {
    /// Log passed checks and penalties
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log every condition result
    #[arg(short, long, global = true)]
    debug: bool,

    /// Path to config file (defaults to ~/.config/score-agent/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the previous score file (defaults to ~/.config/score-agent/previous.json)
    #[arg(short, long, global = true)]
    previous: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool, debug: bool) {
    let default_level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let command = cli.command.unwrap_or(Commands::Score);
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);
    let mut config = match score_agent::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!("Loaded {} checks from config", config.checks.len());
    }

    // Bad check definitions are reported but never stop scoring
    if let Err(errors) = score_agent::config::validate_checks(&config.checks) {
        eprintln!("Check config warnings:");
        for error in errors {
            eprintln!("  - {}", error);
        }
    }

    let use_colors = score_agent::output::should_use_colors();

    match command {
        Commands::Check => {
            let status = score_agent::config::config_status(&config);
            if !status.is_ok() {
                eprintln!("{}", status.message());
            }
            let allocation = score_agent::scoring::allocate_points(&mut config.checks);
            println!(
                "{}",
                score_agent::output::format_allocation_table(&config.checks)
            );
            println!();
            println!(
                "Total: {} points across {} scored checks",
                allocation.total_points, allocation.scored_vulns
            );
        }
        Commands::Score => {
            let prior_path = cli
                .previous
                .map(PathBuf::from)
                .unwrap_or_else(score_agent::history::get_prior_score_path);
            let evaluator = Arc::new(score_agent::evaluator::LocalEvaluator::new());

            let report = match score_agent::run::run_once(&config, evaluator, &prior_path).await
            {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Scoring run failed: {:#}", e);
                    std::process::exit(EXIT_RUN);
                }
            };

            println!(
                "{}",
                score_agent::output::format_report(
                    config.title.as_deref(),
                    report.status,
                    &report.state,
                    use_colors
                )
            );

            if let Some(notification) = score_agent::output::format_delta(report.delta, use_colors) {
                println!();
                println!("{}", notification);
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Scored {} checks in {:?}",
                    config.checks.len(),
                    start_time.elapsed()
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
