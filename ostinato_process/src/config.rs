// Process configuration.
//
// Every option has a default, so a `ProcessConfig::default()` (or an empty
// JSON object) describes the plainest process: forward, one element per step,
// relative steps, no repetition, no iteration cap.
//
// JSON shapes accepted by `ProcessConfig::from_json`:
//
//   {
//     "direction": "inward",          // forward | backward | inward | outward
//     "step": [1, 2, 3],              // 2 | [1, 2, 3] | "primes" | "kolakoski"
//     "step_mode": "absolute",        // relative | absolute
//     "repetitions": 2,               // 2 | [1, 2, 3]
//     "iterations": 8                 // omitted or null = unbounded
//   }
//
// `validate` rejects every statically detectable bad value before a run
// starts. Values pulled from a generator can only be checked as they are
// drawn; the cursor handles those (see `cursor.rs`).

use crate::direction::Direction;
use crate::error::ProcessError;
use ostinato_seq::{Constant, Cycle, Generator, IntegerSource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether step values accumulate or are used as claim sizes directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// Each step adds to the previous claim.
    #[default]
    Relative,
    /// Each step is the claim.
    Absolute,
}

impl StepMode {
    pub fn name(self) -> &'static str {
        match self {
            StepMode::Relative => "relative",
            StepMode::Absolute => "absolute",
        }
    }
}

impl fmt::Display for StepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StepMode {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relative" => Ok(StepMode::Relative),
            "absolute" => Ok(StepMode::Absolute),
            _ => Err(ProcessError::UnknownStepMode(s.to_string())),
        }
    }
}

/// Where step values come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepSpec {
    /// The same step every iteration.
    Constant(i64),
    /// A finite list, cycled round-robin.
    Sequence(Vec<i64>),
    /// A built-in infinite generator, consumed in order.
    Generator(Generator),
}

impl Default for StepSpec {
    fn default() -> Self {
        StepSpec::Constant(1)
    }
}

impl StepSpec {
    fn validate(&self) -> Result<(), ProcessError> {
        match self {
            StepSpec::Constant(value) => check_step(*value),
            StepSpec::Sequence(values) if values.is_empty() => {
                Err(ProcessError::EmptyStepSequence)
            }
            StepSpec::Sequence(values) => values.iter().try_for_each(|&v| check_step(v)),
            StepSpec::Generator(_) => Ok(()),
        }
    }

    /// Build a fresh source of step values for one run.
    pub fn source(&self) -> Result<Box<dyn IntegerSource>, ProcessError> {
        self.validate()?;
        let source: Box<dyn IntegerSource> = match self {
            StepSpec::Constant(value) => Box::new(Constant(*value)),
            StepSpec::Sequence(values) => {
                Box::new(Cycle::new(values.clone()).ok_or(ProcessError::EmptyStepSequence)?)
            }
            StepSpec::Generator(generator) => generator.source(),
        };
        Ok(source)
    }
}

impl FromStr for StepSpec {
    type Err = ProcessError;

    /// Parse `2`, `1,2,3` or a generator name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(generator) = Generator::from_name(s.trim()) {
            return Ok(StepSpec::Generator(generator));
        }
        let values = parse_int_list(s)?;
        Ok(match values.as_slice() {
            [single] => StepSpec::Constant(*single),
            _ => StepSpec::Sequence(values),
        })
    }
}

fn check_step(value: i64) -> Result<(), ProcessError> {
    if value < 1 {
        return Err(ProcessError::InvalidStep { value });
    }
    Ok(())
}

/// How many times each produced phrase is repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepetitionSpec {
    /// Every phrase repeated the same number of times.
    Constant(i64),
    /// A repeat count per phrase index, cycled round-robin.
    Sequence(Vec<i64>),
}

impl Default for RepetitionSpec {
    fn default() -> Self {
        RepetitionSpec::Constant(1)
    }
}

impl RepetitionSpec {
    pub(crate) fn validate(&self) -> Result<(), ProcessError> {
        let check = |value: i64| {
            if value < 1 {
                Err(ProcessError::InvalidRepetition { value })
            } else {
                Ok(())
            }
        };
        match self {
            RepetitionSpec::Constant(value) => check(*value),
            RepetitionSpec::Sequence(values) if values.is_empty() => {
                Err(ProcessError::EmptyRepetitionSequence)
            }
            RepetitionSpec::Sequence(values) => values.iter().try_for_each(|&v| check(v)),
        }
    }
}

impl FromStr for RepetitionSpec {
    type Err = ProcessError;

    /// Parse `2` or `1,2,3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = parse_int_list(s)?;
        Ok(match values.as_slice() {
            [single] => RepetitionSpec::Constant(*single),
            _ => RepetitionSpec::Sequence(values),
        })
    }
}

/// Parse a comma-separated integer list.
fn parse_int_list(s: &str) -> Result<Vec<i64>, ProcessError> {
    s.split(',')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<Vec<i64>>>()
        .ok_or_else(|| ProcessError::MalformedList(s.to_string()))
}

/// Full configuration for one additive or subtractive run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    pub direction: Direction,
    pub step: StepSpec,
    pub step_mode: StepMode,
    pub repetitions: RepetitionSpec,
    /// Maximum number of process steps. `None` runs to natural termination.
    pub iterations: Option<usize>,
}

impl ProcessConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ProcessError> {
        let config: ProcessConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every option value. Generator output is checked later, as drawn.
    pub fn validate(&self) -> Result<(), ProcessError> {
        self.step.validate()?;
        self.repetitions.validate()?;
        if self.iterations == Some(0) {
            return Err(ProcessError::InvalidIterations);
        }
        Ok(())
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_step(mut self, step: StepSpec) -> Self {
        self.step = step;
        self
    }

    pub fn with_step_mode(mut self, step_mode: StepMode) -> Self {
        self.step_mode = step_mode;
        self
    }

    pub fn with_repetitions(mut self, repetitions: RepetitionSpec) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }
}
