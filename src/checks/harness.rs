use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use thiserror::Error;
use tracing::{error, info};

use crate::checks::{
    instances::{Instance, discover_instances},
    solver::{Solver, SolverError},
    verdict::{InstanceReport, Verdict},
};
use crate::io::{
    known_optima::{KnownOptima, KnownOptimaError},
    solver_output::{OutputError, parse_result_size},
};

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Test directory {path:?} does not exist or is not a directory")]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to list test directory {path:?}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("Malformed solver output for {instance:?}: {source}")]
    MalformedOutput {
        instance: PathBuf,
        #[source]
        source: OutputError,
    },

    #[error("Failed to read known optima: {0}")]
    Optima(#[from] KnownOptimaError),
}

/// What to do when the solver fails on an instance or its output cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the run at the first failure.
    #[default]
    Abort,
    /// Log the failure, count it and carry on with the next instance.
    Continue,
}

/// Captured stdout of one solver run and the wall-clock time it took.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub output: Vec<u8>,
    pub elapsed: Duration,
}

impl Invocation {
    pub fn result_size(&self) -> Result<i64, OutputError> {
        parse_result_size(&self.output)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub matches: usize,
    pub mismatches: usize,
    pub unknown: usize,
    pub failures: usize,
    pub solver_time: Duration,
}

impl RunSummary {
    pub fn record(&mut self, report: &InstanceReport) {
        match report.verdict {
            Verdict::Unknown { .. } => self.unknown += 1,
            Verdict::Mismatch { .. } => self.mismatches += 1,
            Verdict::Match { .. } => self.matches += 1,
        }
        self.solver_time += report.elapsed;
    }

    pub fn instances(&self) -> usize {
        self.matches + self.mismatches + self.unknown + self.failures
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} instances: {} matching, {} wrong, {} unknown, {} failed; solver time {} s",
            self.instances(),
            self.matches,
            self.mismatches,
            self.unknown,
            self.failures,
            self.solver_time.as_secs_f64()
        )
    }
}

pub struct Harness<S> {
    solver: S,
    optima: KnownOptima,
    policy: ErrorPolicy,
}

impl<S: Solver> Harness<S> {
    pub fn new(solver: S, optima: KnownOptima) -> Self {
        Self {
            solver,
            optima,
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn optima(&self) -> &KnownOptima {
        &self.optima
    }

    pub fn invoke(&self, instance: &Instance) -> Result<Invocation, SolverError> {
        let start = Instant::now();
        let output = self.solver.run(&instance.path)?;
        Ok(Invocation {
            output,
            elapsed: start.elapsed(),
        })
    }

    pub fn check_instance(&self, instance: &Instance) -> Result<InstanceReport, HarnessError> {
        let invocation = self.invoke(instance)?;
        let found = invocation
            .result_size()
            .map_err(|source| HarnessError::MalformedOutput {
                instance: instance.path.clone(),
                source,
            })?;

        Ok(InstanceReport {
            name: instance.name.clone(),
            verdict: Verdict::classify(self.optima.get(&instance.name), found),
            elapsed: invocation.elapsed,
        })
    }

    /// Runs the solver on every entry of `dir`, handing each report to `on_report`
    /// in discovery order. Mismatches are reported, never returned as errors.
    pub fn run(
        &self,
        dir: &Path,
        mut on_report: impl FnMut(&InstanceReport),
    ) -> Result<RunSummary, HarnessError> {
        let instances = discover_instances(dir)?;
        let mut summary = RunSummary::default();

        for instance in &instances {
            info!("Running on {}", instance.name);

            match self.check_instance(instance) {
                Ok(report) => {
                    summary.record(&report);
                    on_report(&report);
                }
                Err(e) if self.policy == ErrorPolicy::Continue => {
                    error!("{e}");
                    summary.failures += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }
}
