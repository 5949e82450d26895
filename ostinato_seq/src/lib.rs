// Integer sequence sources for driving minimalist processes.
//
// A process advances by step values drawn from a source. Sources come in two
// flavors, and the distinction matters to the process engine:
// - Cyclic sources (`Constant`, `Cycle`) repeat a finite pattern forever.
//   Their output is periodic, so a process that stops progressing will
//   revisit the same values and can be detected as stalled.
// - One-shot sources (`Primes`, `Kolakoski`, `Iter`) are consumed strictly in
//   order and never rewind. They may be infinite, and each pull resumes from
//   where the previous one left off.
//
// Module overview:
// - `primes.rs`:    Ascending primes via an incremental sieve of Eratosthenes.
// - `kolakoski.rs`: The Kolakoski sequence in constant space.
//
// Every source is an explicit state object with a single "pull next value"
// operation (`IntegerSource::next_value`). Nothing is eagerly materialized,
// and identical construction always yields identical output.

pub mod kolakoski;
pub mod primes;

pub use kolakoski::Kolakoski;
pub use primes::Primes;

use serde::{Deserialize, Serialize};

/// A resumable producer of integer step values.
///
/// Values are nominally `>= 1`, but sources do not enforce this; consumers
/// validate each value at the point of use.
pub trait IntegerSource {
    /// Pull the next value and advance the source. `None` means the source
    /// is exhausted and will not produce further values.
    fn next_value(&mut self) -> Option<i64>;

    /// Whether this source repeats a finite pattern forever.
    fn is_cyclic(&self) -> bool {
        false
    }
}

impl<S: IntegerSource + ?Sized> IntegerSource for Box<S> {
    fn next_value(&mut self) -> Option<i64> {
        (**self).next_value()
    }

    fn is_cyclic(&self) -> bool {
        (**self).is_cyclic()
    }
}

impl<S: IntegerSource + ?Sized> IntegerSource for &mut S {
    fn next_value(&mut self) -> Option<i64> {
        (**self).next_value()
    }

    fn is_cyclic(&self) -> bool {
        (**self).is_cyclic()
    }
}

/// The same value, every pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant(pub i64);

impl IntegerSource for Constant {
    fn next_value(&mut self) -> Option<i64> {
        Some(self.0)
    }

    fn is_cyclic(&self) -> bool {
        true
    }
}

/// A finite list of values cycled round-robin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    values: Vec<i64>,
    pos: usize,
}

impl Cycle {
    /// Create a cycle over `values`. Returns `None` for an empty list, which
    /// has nothing to cycle.
    pub fn new(values: Vec<i64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Cycle { values, pos: 0 })
    }

    /// Length of one period.
    pub fn period(&self) -> usize {
        self.values.len()
    }
}

impl IntegerSource for Cycle {
    fn next_value(&mut self) -> Option<i64> {
        let value = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        Some(value)
    }

    fn is_cyclic(&self) -> bool {
        true
    }
}

/// Adapter turning any integer iterator into a one-shot source.
#[derive(Debug, Clone)]
pub struct Iter<I>(pub I);

impl<I: Iterator<Item = i64>> IntegerSource for Iter<I> {
    fn next_value(&mut self) -> Option<i64> {
        self.0.next()
    }
}

/// Named built-in infinite sources, usable from serialized configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generator {
    /// 2, 3, 5, 7, 11, 13, ...
    Primes,
    /// 1, 2, 2, 1, 1, 2, 1, 2, 2, 1, ...
    Kolakoski,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::Primes, Generator::Kolakoski];

    /// Build a fresh source positioned at the start of the sequence.
    pub fn source(self) -> Box<dyn IntegerSource> {
        match self {
            Generator::Primes => Box::new(Primes::new()),
            Generator::Kolakoski => Box::new(Kolakoski::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Generator::Primes => "primes",
            Generator::Kolakoski => "kolakoski",
        }
    }

    /// Look up a generator by its lowercase name.
    pub fn from_name(name: &str) -> Option<Generator> {
        let name = name.to_lowercase();
        Generator::ALL.into_iter().find(|g| g.name() == name)
    }
}
