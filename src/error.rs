use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// The scan matched nothing and the config rejects empty output.
    #[error("No runs found in input")]
    NoRuns,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(TokenizeError::NoRuns.to_string(), "No runs found in input");
        assert_eq!(
            TokenizeError::InvalidArgument("not utf-8".to_string()).to_string(),
            "Invalid argument: not utf-8"
        );
        assert_eq!(
            TokenizeError::InvalidConfig("same delimiter".to_string()).to_string(),
            "Invalid config: same delimiter"
        );
    }
}
