// Phrase repetition.
//
// After the engine settles on its sequence of distinct phrases, each one is
// repeated in place: `[a, b]` with counts `[1, 2]` becomes `[a, b, b]`.
// Counts come from a `RepetitionSpec` indexed by phrase position and cycled
// round-robin. Repetition happens after the iteration cap is applied, so it
// multiplies the output without consuming any of the cap.

use crate::config::RepetitionSpec;
use crate::error::ProcessError;

/// Per-phrase repeat counts drawn from a validated `RepetitionSpec`.
#[derive(Debug, Clone)]
pub struct Repetitions {
    counts: Vec<usize>,
}

impl Repetitions {
    pub fn new(spec: &RepetitionSpec) -> Result<Self, ProcessError> {
        spec.validate()?;
        let values: &[i64] = match spec {
            RepetitionSpec::Constant(value) => std::slice::from_ref(value),
            RepetitionSpec::Sequence(values) => values,
        };
        let counts: Vec<usize> = values
            .iter()
            .map(|&v| usize::try_from(v).map_err(|_| ProcessError::InvalidRepetition { value: v }))
            .collect::<Result<_, _>>()?;
        Ok(Repetitions { counts })
    }

    /// Repeat count for the phrase at `index`.
    pub fn count(&self, index: usize) -> usize {
        self.counts[index % self.counts.len()]
    }

    /// Total phrase count after expanding `distinct` phrases.
    pub fn expanded_len(&self, distinct: usize) -> usize {
        (0..distinct).map(|i| self.count(i)).sum()
    }

    /// Repeat each phrase consecutively according to its count.
    pub fn expand<T: Clone>(&self, phrases: Vec<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(self.expanded_len(phrases.len()));
        for (i, phrase) in phrases.into_iter().enumerate() {
            let count = self.count(i);
            out.extend(std::iter::repeat_n(phrase, count));
        }
        out
    }
}
