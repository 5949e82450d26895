// Errors for process configuration and generation.
//
// Every failure here is a caller mistake: a bad stream, a bad option value, or
// malformed JSON. Nothing is retryable. Cycle detection and the iteration cap
// are normal ways for a run to end and never produce an error.
//
// Each variant carries a stable machine-readable code with a `PROCESS_`
// prefix, for callers that want to branch without matching on messages.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    /// The input stream has no elements.
    #[error("input stream is empty")]
    EmptyStream,

    /// A step value of zero or less, either configured or pulled from a source.
    #[error("invalid step value {value}: steps must be at least 1")]
    InvalidStep { value: i64 },

    /// A step sequence with no values.
    #[error("step sequence is empty")]
    EmptyStepSequence,

    /// A repetition count of zero or less.
    #[error("invalid repetition count {value}: repetitions must be at least 1")]
    InvalidRepetition { value: i64 },

    /// A repetition sequence with no values.
    #[error("repetition sequence is empty")]
    EmptyRepetitionSequence,

    /// An iteration cap of zero.
    #[error("iteration cap must be at least 1")]
    InvalidIterations,

    #[error("unknown direction '{0}' (expected forward, backward, inward or outward)")]
    UnknownDirection(String),

    #[error("unknown step mode '{0}' (expected relative or absolute)")]
    UnknownStepMode(String),

    /// A command-line integer list that isn't comma-separated integers.
    #[error("malformed integer list '{0}'")]
    MalformedList(String),

    #[error("unknown process kind '{0}' (expected additive or subtractive)")]
    UnknownKind(String),

    /// Configuration JSON failed to parse.
    #[error("invalid process configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl ProcessError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyStream => "PROCESS_EMPTY_STREAM",
            Self::InvalidStep { .. } => "PROCESS_INVALID_STEP",
            Self::EmptyStepSequence => "PROCESS_EMPTY_STEP_SEQUENCE",
            Self::InvalidRepetition { .. } => "PROCESS_INVALID_REPETITION",
            Self::EmptyRepetitionSequence => "PROCESS_EMPTY_REPETITION_SEQUENCE",
            Self::InvalidIterations => "PROCESS_INVALID_ITERATIONS",
            Self::UnknownDirection(_) => "PROCESS_UNKNOWN_DIRECTION",
            Self::UnknownStepMode(_) => "PROCESS_UNKNOWN_STEP_MODE",
            Self::MalformedList(_) => "PROCESS_MALFORMED_LIST",
            Self::UnknownKind(_) => "PROCESS_UNKNOWN_KIND",
            Self::Config(_) => "PROCESS_CONFIG",
        }
    }
}
