use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout type: {0}")]
    UnknownTag(String),

    #[error("{tag} expects {expected} values, got {got}")]
    Arity {
        tag: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{metric} is not a finite number ({value})")]
    NonFiniteMetric { metric: &'static str, value: f64 },
}
