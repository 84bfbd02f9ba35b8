use std::{
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Failed to launch solver {binary:?} on {instance:?}: {source}")]
    Launch {
        binary: PathBuf,
        instance: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Solver {binary:?} failed on {instance:?} with {status}")]
    ExitStatus {
        binary: PathBuf,
        instance: PathBuf,
        status: ExitStatus,
    },
}

/// Program under test. Receives the path of a single instance and returns
/// everything it wrote to stdout.
pub trait Solver {
    fn run(&self, instance: &Path) -> Result<Vec<u8>, SolverError>;
}

impl<F> Solver for F
where
    F: Fn(&Path) -> Result<Vec<u8>, SolverError>,
{
    fn run(&self, instance: &Path) -> Result<Vec<u8>, SolverError> {
        self(instance)
    }
}

/// Runs an external executable as `<binary> <instance>` and waits for it to exit.
/// Stderr of the child is passed through.
#[derive(Debug, Clone)]
pub struct ProcessSolver {
    binary: PathBuf,
}

impl ProcessSolver {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Solver for ProcessSolver {
    fn run(&self, instance: &Path) -> Result<Vec<u8>, SolverError> {
        debug!("Execute {:?} {instance:?}", self.binary);
        let output = Command::new(&self.binary)
            .arg(instance)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| SolverError::Launch {
                binary: self.binary.clone(),
                instance: instance.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(SolverError::ExitStatus {
                binary: self.binary.clone(),
                instance: instance.to_path_buf(),
                status: output.status,
            });
        }

        Ok(output.stdout)
    }
}
