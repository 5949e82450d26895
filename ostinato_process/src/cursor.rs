// The step cursor: turns step values into a stream of claim sizes.
//
// Claim 0 (nothing claimed) is the implicit starting state. Each `advance`
// pulls one step value from the source and produces the next claim:
//
//   Relative:  claim(i) = claim(i-1) + step(i)
//   Absolute:  claim(i) = step(i)
//
// The raw value is then multiplied by the direction's claim scale (two-sided
// directions grow by one step per side) and clamped to the stream length, so
// every claim the cursor reports is directly usable by `Direction::window`.
//
// Termination. Relative claims strictly increase because steps are >= 1, so
// they always reach n. Absolute claims don't: a cyclic source such as
// [1, 2, 3] repeats the same claims forever without ever covering the
// stream. For cyclic sources in absolute mode the cursor remembers every claim
// it has produced, and a repeat of anything short of the full stream reports
// `Stalled` instead. One-shot sources (primes, Kolakoski) may revisit claims
// under an iteration cap, so for them repeat detection is opt-in through
// `detect_repeats`; the engine turns it on for uncapped runs.

use crate::config::StepMode;
use crate::error::ProcessError;
use ostinato_seq::IntegerSource;
use rustc_hash::FxHashSet;

/// One pull of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEvent {
    /// The next claim, scaled and clamped to the stream length.
    Claim(usize),
    /// The step source has no more values.
    Exhausted,
    /// An absolute-mode claim short of the full stream was repeated while
    /// repeat detection was on; the process can make no further progress.
    Stalled,
}

#[derive(Debug)]
pub struct StepCursor<S> {
    source: S,
    mode: StepMode,
    n: usize,
    scale: usize,
    /// Accumulated (relative) or latest (absolute) unscaled claim.
    raw: u64,
    /// Claims produced so far; only populated when repeat detection applies.
    seen: FxHashSet<usize>,
    detect_repeats: bool,
}

impl<S: IntegerSource> StepCursor<S> {
    /// A cursor over an `n`-element stream, where one unit of step covers
    /// `scale` positions.
    pub fn new(source: S, mode: StepMode, n: usize, scale: usize) -> Self {
        let detect_repeats = mode == StepMode::Absolute && source.is_cyclic();
        StepCursor {
            source,
            mode,
            n,
            scale,
            raw: 0,
            seen: FxHashSet::default(),
            detect_repeats,
        }
    }

    /// Report `Stalled` on a repeated absolute claim whatever the source.
    /// Has no effect in relative mode, where claims never repeat below n.
    pub fn detect_repeats(mut self) -> Self {
        self.detect_repeats = self.mode == StepMode::Absolute;
        self
    }

    /// Pull the next step value and compute the next claim.
    ///
    /// Returns `InvalidStep` if the source yields a value below 1.
    pub fn advance(&mut self) -> Result<CursorEvent, ProcessError> {
        let Some(value) = self.source.next_value() else {
            return Ok(CursorEvent::Exhausted);
        };
        if value < 1 {
            return Err(ProcessError::InvalidStep { value });
        }
        let step = value.unsigned_abs();

        self.raw = match self.mode {
            StepMode::Relative => self.raw.saturating_add(step),
            StepMode::Absolute => step,
        };
        let scaled = self.raw.saturating_mul(self.scale as u64);
        let claim = usize::try_from(scaled).map_or(self.n, |c| c.min(self.n));

        if self.detect_repeats && claim != self.n && !self.seen.insert(claim) {
            return Ok(CursorEvent::Stalled);
        }
        Ok(CursorEvent::Claim(claim))
    }
}
