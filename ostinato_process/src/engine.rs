// The process engine: additive and subtractive runs over a stream.
//
// Both processes walk the same claim progression from the step cursor and
// differ only in what they emit for each claim:
//
//   Additive     emits the claimed window, starting at the first step and
//                ending with (and including) the step that claims the whole
//                stream.
//   Subtractive  emits the unclaimed complement, starting with the untouched
//                stream (claim 0) and stopping before the step that would
//                claim everything, since its complement is empty.
//
//   n = 4, forward, step 1
//   additive:     [a]  [a b]  [a b c]  [a b c d]
//   subtractive:  [a b c d]  [b c d]  [c d]  [d]
//
// A run ends at whichever comes first: the full claim, a stalled cursor
// (a repeated absolute claim), an exhausted step source, or the iteration
// cap. Without a cap every absolute run watches for repeats, so one-shot
// sources that never reach n still stop. The cap counts cursor steps. The subtractive starting
// phrase is claim 0, not a step, so `iterations = k` yields up to k + 1
// subtractive phrases. Repetition is applied last and never counts against
// the cap.
//
// Runs are all-or-nothing with respect to errors: an invalid configuration,
// an empty stream, or an invalid value pulled mid-run from a generator
// returns the error and discards anything produced so far.

use crate::config::ProcessConfig;
use crate::cursor::{CursorEvent, StepCursor};
use crate::error::ProcessError;
use crate::repetition::Repetitions;
use ostinato_seq::IntegerSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Build up (additive) or strip down (subtractive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessKind {
    Additive,
    Subtractive,
}

impl ProcessKind {
    pub fn name(self) -> &'static str {
        match self {
            ProcessKind::Additive => "additive",
            ProcessKind::Subtractive => "subtractive",
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProcessKind {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "additive" => Ok(ProcessKind::Additive),
            "subtractive" => Ok(ProcessKind::Subtractive),
            _ => Err(ProcessError::UnknownKind(s.to_string())),
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The claim reached the whole stream.
    Complete,
    /// Absolute-mode claims started repeating without covering the stream.
    Stalled,
    /// The step source ran dry.
    Exhausted,
    /// The configured iteration cap was reached.
    IterationCap,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Termination::Complete => "complete",
            Termination::Stalled => "stalled",
            Termination::Exhausted => "source exhausted",
            Termination::IterationCap => "iteration cap",
        })
    }
}

/// The result of a run, with bookkeeping alongside the phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRun<T> {
    /// Output phrases, after repetition.
    pub phrases: Vec<Vec<T>>,
    /// Distinct phrases before repetition.
    pub distinct: usize,
    /// Cursor steps taken (the quantity the iteration cap limits).
    pub steps: usize,
    pub termination: Termination,
}

/// Build up `stream` from nothing to the full stream.
pub fn additive_process<T: Clone>(
    stream: &[T],
    config: &ProcessConfig,
) -> Result<Vec<Vec<T>>, ProcessError> {
    run(ProcessKind::Additive, stream, config).map(|r| r.phrases)
}

/// Strip `stream` down from the full stream toward nothing.
pub fn subtractive_process<T: Clone>(
    stream: &[T],
    config: &ProcessConfig,
) -> Result<Vec<Vec<T>>, ProcessError> {
    run(ProcessKind::Subtractive, stream, config).map(|r| r.phrases)
}

/// Additive process with step values from `steps` instead of `config.step`.
pub fn additive_process_with<T: Clone, S: IntegerSource>(
    stream: &[T],
    config: &ProcessConfig,
    steps: S,
) -> Result<Vec<Vec<T>>, ProcessError> {
    run_with(ProcessKind::Additive, stream, config, steps).map(|r| r.phrases)
}

/// Subtractive process with step values from `steps` instead of `config.step`.
pub fn subtractive_process_with<T: Clone, S: IntegerSource>(
    stream: &[T],
    config: &ProcessConfig,
    steps: S,
) -> Result<Vec<Vec<T>>, ProcessError> {
    run_with(ProcessKind::Subtractive, stream, config, steps).map(|r| r.phrases)
}

/// Run a process with step values from `config.step`.
pub fn run<T: Clone>(
    kind: ProcessKind,
    stream: &[T],
    config: &ProcessConfig,
) -> Result<ProcessRun<T>, ProcessError> {
    config.validate()?;
    let steps = config.step.source()?;
    run_with(kind, stream, config, steps)
}

/// Run a process with step values from `steps`. `config.step` is ignored.
pub fn run_with<T: Clone, S: IntegerSource>(
    kind: ProcessKind,
    stream: &[T],
    config: &ProcessConfig,
    steps: S,
) -> Result<ProcessRun<T>, ProcessError> {
    let n = stream.len();
    if n == 0 {
        return Err(ProcessError::EmptyStream);
    }
    if config.iterations == Some(0) {
        return Err(ProcessError::InvalidIterations);
    }
    let repetitions = Repetitions::new(&config.repetitions)?;
    let direction = config.direction;
    let cap = config.iterations.unwrap_or(usize::MAX);

    debug!(
        %kind,
        %direction,
        step_mode = %config.step_mode,
        n,
        iterations = ?config.iterations,
        "starting process"
    );

    let mut cursor = StepCursor::new(steps, config.step_mode, n, direction.claim_scale());
    if config.iterations.is_none() {
        cursor = cursor.detect_repeats();
    }
    let mut phrases = Vec::new();
    if kind == ProcessKind::Subtractive {
        phrases.push(stream.to_vec());
    }

    let mut taken = 0;
    let termination = loop {
        if taken == cap {
            break Termination::IterationCap;
        }
        let claim = match cursor.advance()? {
            CursorEvent::Claim(claim) => claim,
            CursorEvent::Exhausted => break Termination::Exhausted,
            CursorEvent::Stalled => break Termination::Stalled,
        };
        taken += 1;
        trace!(step = taken, claim, "claim");

        let window = direction.window(n, claim);
        match kind {
            ProcessKind::Additive => {
                phrases.push(window.select(stream));
                if window.is_full() {
                    break Termination::Complete;
                }
            }
            ProcessKind::Subtractive => {
                if window.is_full() {
                    break Termination::Complete;
                }
                phrases.push(window.complement(stream));
            }
        }
    };

    let distinct = phrases.len();
    let phrases = repetitions.expand(phrases);
    debug!(
        %kind,
        steps = taken,
        distinct,
        phrases = phrases.len(),
        %termination,
        "process finished"
    );

    Ok(ProcessRun {
        phrases,
        distinct,
        steps: taken,
        termination,
    })
}

/// Concatenate phrases into a single output stream.
pub fn flatten<T: Clone>(phrases: &[Vec<T>]) -> Vec<T> {
    phrases.concat()
}
