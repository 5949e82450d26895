// Ostinato — minimalist process engine.
//
// Given an ordered phrase of opaque elements, generates the sequence of
// derived phrases of a classic minimalist "additive" (build up) or
// "subtractive" (strip down) process. The caller supplies elements of any
// `Clone` type; the engine only cares about their positions.
//
// Architecture:
// - direction.rs: Claim geometry (forward, backward, inward, outward) as a
//   pure window resolver
// - cursor.rs: The step cursor: step values -> claim sizes, relative or
//   absolute, with stall detection on repeated absolute claims
// - repetition.rs: Per-phrase repetition expansion
// - engine.rs: Additive and subtractive runs, termination rules, iteration cap
// - config.rs: `ProcessConfig` and its JSON form
// - error.rs: `ProcessError`
//
// Step values come from `ostinato_seq` sources: constants, cycled lists, or
// infinite generators (primes, Kolakoski), or any caller-supplied
// `IntegerSource` via the `*_with` entry points.
//
// Everything is deterministic: the same stream and configuration always
// produce the same phrases.

pub mod config;
pub mod cursor;
pub mod direction;
pub mod engine;
pub mod error;
pub mod repetition;

pub use config::{ProcessConfig, RepetitionSpec, StepMode, StepSpec};
pub use direction::{Direction, Window};
pub use engine::{
    ProcessKind, ProcessRun, Termination, additive_process, additive_process_with, flatten, run,
    run_with, subtractive_process, subtractive_process_with,
};
pub use error::ProcessError;
pub use ostinato_seq::Generator;
