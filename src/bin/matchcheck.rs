use clap::Parser;
use matchcheck::checks::harness::{ErrorPolicy, Harness, HarnessError};
use matchcheck::checks::solver::ProcessSolver;
use matchcheck::io::known_optima::KnownOptima;
use std::path::PathBuf;
use std::process::exit;
use tracing::{error, info};

/// Runs a matching solver on every instance of a directory and compares the
/// reported matching sizes with the known optima.
#[derive(Parser)]
#[command(version, about)]
pub struct Arguments {
    /// Solver executable; called as `<SOLVER> <instance>`
    pub solver: PathBuf,

    /// Directory of test instances
    pub test_dir: PathBuf,

    /// JSON file mapping instance names to optimal matching sizes (replaces the built-in table)
    #[arg(long)]
    pub optima: Option<PathBuf>,

    /// Report solver failures per instance instead of aborting the run
    #[arg(short, long)]
    pub keep_going: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn run(args: &Arguments) -> Result<bool, HarnessError> {
    let optima = match args.optima.as_ref() {
        Some(path) => KnownOptima::read(path)?,
        None => KnownOptima::builtin(),
    };

    let policy = if args.keep_going {
        ErrorPolicy::Continue
    } else {
        ErrorPolicy::Abort
    };

    info!(
        "Testing {:?} on {:?} ({} known optima)",
        args.solver,
        args.test_dir,
        optima.len()
    );

    let harness = Harness::new(ProcessSolver::new(&args.solver), optima).with_error_policy(policy);
    let summary = harness.run(&args.test_dir, |report| println!("{report}"))?;

    info!("{summary}");
    Ok(summary.failures == 0)
}

fn main() {
    let args = Arguments::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::INFO
        })
        .without_time()
        .init();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(e) => {
            error!("{e}");
            exit(1)
        }
    }
}
