use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use simplex_trace::algorithm::{SolveResult, solve};
use simplex_trace::algorithm::config::{PivotRuleKind, SolverConfig};
use simplex_trace::data::linear_program::solution::Solution;
use simplex_trace::data::linear_program::standard_form::StandardForm;
use simplex_trace::data::number_types::traits::OrderedField;
use simplex_trace::io::import;
use simplex_trace::io::report::render_trace;
use simplex_trace::io::text::Skipped;

/// Solve a maximization linear program and show every Simplex pivot.
#[derive(Parser)]
#[command(name = "simplex-trace", version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,

    /// JSON file with solver settings (max_iterations, epsilon, pivot_rule)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pivot rule, "dantzig" or "bland"
    #[arg(long)]
    pivot_rule: Option<PivotRuleKind>,

    /// Maximum number of pivots
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Numerical tolerance
    #[arg(long)]
    epsilon: Option<f64>,

    /// Print the complete tableau of every iteration
    #[arg(short, long)]
    tableaus: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a SolverConfig,
    problem: &'a StandardForm<f64>,
    skipped: &'a [Skipped],
    solution: Option<Solution<f64>>,
    result: &'a SolveResult<f64>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the log subscriber")?;

    let config = configuration(&opts)?;
    tracing::info!("Solving with {:?}", config);

    if opts.format == OutputFormat::Text {
        println!("Reading problem file: \"{}\"...", opts.problem_file.display());
    }
    let problem = import(&opts.problem_file, f64::tolerance(config.epsilon))
        .with_context(|| format!("Couldn't read the problem from {}", opts.problem_file.display()))?;
    let result = solve(problem.standard_form(), &config);

    match opts.format {
        OutputFormat::Text => {
            println!("{}\n", problem.standard_form());
            for skipped in problem.skipped() {
                println!("Ignored constraint \"{}\": {}", skipped.line, skipped.reason);
            }
            if !problem.skipped().is_empty() {
                println!();
            }

            println!("{}", render_trace(result.trace(), opts.tableaus));
            match &result {
                SolveResult::Optimal(optimum) => {
                    println!("Solution computed after {} pivots:", optimum.trace().nr_pivots());
                    print!("{}", optimum.named_solution());
                },
                SolveResult::Unbounded(_) => println!("Problem is unbounded."),
                SolveResult::NonConvergent(_) => {
                    println!("No optimum found within {} pivots.", config.max_iterations);
                },
            }
        },
        OutputFormat::Json => {
            let report = JsonReport {
                config: &config,
                problem: problem.standard_form(),
                skipped: problem.skipped(),
                solution: result.optimum().map(|optimum| optimum.named_solution()),
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&report).context("Failed to serialize the result")?);
        },
    }

    Ok(())
}

/// Settings from the configuration file, if any, overridden by the command line flags.
fn configuration(opts: &Opts) -> Result<SolverConfig> {
    let mut config = match &opts.config {
        Some(path) => read_configuration(path)?,
        None => SolverConfig::default(),
    };

    if let Some(pivot_rule) = opts.pivot_rule {
        config.pivot_rule = pivot_rule;
    }
    if let Some(max_iterations) = opts.max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(epsilon) = opts.epsilon {
        config.epsilon = epsilon;
    }

    Ok(config)
}

fn read_configuration(path: &Path) -> Result<SolverConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse configuration file: {}", path.display()))
}
