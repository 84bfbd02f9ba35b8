use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum OutputError {
    #[error("Solver produced no output")]
    Empty,

    #[error("First line of solver output contains no tokens")]
    NoTokens,

    #[error("First line of solver output is not valid UTF-8")]
    InvalidUtf8,

    #[error("Last token of first line is not an integer: {token:?}")]
    InvalidInteger { token: String },
}

/// Extracts the result size reported by a solver: the last whitespace-separated
/// token of the first output line, read as a base-10 integer. Further lines are
/// ignored and the value is not checked for plausibility (negative numbers pass).
pub fn parse_result_size(output: &[u8]) -> Result<i64, OutputError> {
    if output.is_empty() {
        return Err(OutputError::Empty);
    }

    let first_line = output.split(|&b| b == b'\n').next().unwrap_or_default();
    let first_line = std::str::from_utf8(first_line).map_err(|_| OutputError::InvalidUtf8)?;

    let token = first_line
        .split_whitespace()
        .next_back()
        .ok_or(OutputError::NoTokens)?;

    token.parse().map_err(|_| OutputError::InvalidInteger {
        token: token.to_string(),
    })
}
