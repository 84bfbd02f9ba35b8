use std::{
    fmt::{Display, Formatter},
    time::Duration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No known optimum for this instance.
    Unknown { found: i64 },
    Mismatch { expected: i64, found: i64 },
    Match { optimum: i64 },
}

impl Verdict {
    pub fn classify(expected: Option<i64>, found: i64) -> Self {
        match expected {
            None => Verdict::Unknown { found },
            Some(expected) if expected != found => Verdict::Mismatch { expected, found },
            Some(optimum) => Verdict::Match { optimum },
        }
    }

    pub fn found(&self) -> i64 {
        match *self {
            Verdict::Unknown { found } | Verdict::Mismatch { found, .. } => found,
            Verdict::Match { optimum } => optimum,
        }
    }
}

/// Outcome of one solver run; its `Display` is the line printed for the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceReport {
    pub name: String,
    pub verdict: Verdict,
    pub elapsed: Duration,
}

impl Display for InstanceReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let secs = self.elapsed.as_secs_f64();
        match self.verdict {
            Verdict::Unknown { found } => write!(
                f,
                "Unknown instance {}: {found} matching edges found in {secs} s",
                self.name
            ),
            Verdict::Mismatch { expected, found } => write!(
                f,
                "Wrong number of edges for {}: expected {expected}, found {found}",
                self.name
            ),
            Verdict::Match { .. } => write!(
                f,
                "Solution matching expected optimum for {} found in {secs} s",
                self.name
            ),
        }
    }
}
