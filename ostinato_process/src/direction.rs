// Claim geometry: which stream positions a claim of size `c` covers.
//
// A process "claims" part of the stream at every step. The direction decides
// where that claim sits:
//
//   n = 8, c = 4     positions 0 1 2 3 4 5 6 7
//   Forward                    # # # # . . . .
//   Backward                   . . . . # # # #
//   Inward                     # # . . . . # #
//   Outward                    . . # # # # . .
//
// Inward claims an outer shell, ceil(c/2) from the head and floor(c/2) from
// the tail. Outward claims a centered block whose left edge rounds down. Both
// are exactly symmetric only for even claims; the engine keeps them even by
// scaling the cursor (see `claim_scale`), this module just applies the
// formula.
//
// Everything here is pure: the same (direction, n, c) always gives the same
// window.

use crate::error::ProcessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Grow from the head.
    #[default]
    Forward,
    /// Grow from the tail.
    Backward,
    /// Grow from both ends toward the middle.
    Inward,
    /// Grow from the middle toward both ends.
    Outward,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Inward,
        Direction::Outward,
    ];

    /// How many positions one unit of cursor claim covers. Two-sided
    /// directions grow by one step on each side.
    pub fn claim_scale(self) -> usize {
        match self {
            Direction::Forward | Direction::Backward => 1,
            Direction::Inward | Direction::Outward => 2,
        }
    }

    /// The window claimed by `claim` positions of an `n`-element stream.
    /// Claims beyond `n` are clamped.
    pub fn window(self, n: usize, claim: usize) -> Window {
        let c = claim.min(n);
        match self {
            Direction::Forward => Window::split(n, c, 0),
            Direction::Backward => Window::split(n, 0, c),
            Direction::Inward => Window::split(n, c.div_ceil(2), c / 2),
            Direction::Outward => Window::block(n, (n - c) / 2, c),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Inward => "inward",
            Direction::Outward => "outward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.name() == lower)
            .ok_or_else(|| ProcessError::UnknownDirection(s.to_string()))
    }
}

/// A set of stream positions made of at most two runs, `head` then `tail`.
///
/// Invariant: `head.end <= tail.start` and `tail.end <= n`, so iterating head
/// then tail visits positions in stream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    n: usize,
    head: Range<usize>,
    tail: Range<usize>,
}

impl Window {
    /// A prefix of `head_len` plus a suffix of `tail_len`.
    fn split(n: usize, head_len: usize, tail_len: usize) -> Self {
        debug_assert!(head_len + tail_len <= n);
        Window {
            n,
            head: 0..head_len,
            tail: n - tail_len..n,
        }
    }

    /// A single contiguous run of `len` starting at `start`.
    fn block(n: usize, start: usize, len: usize) -> Self {
        debug_assert!(start + len <= n);
        Window {
            n,
            head: start..start + len,
            tail: n..n,
        }
    }

    pub fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the window covers the whole stream.
    pub fn is_full(&self) -> bool {
        self.len() == self.n
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.head.contains(&pos) || self.tail.contains(&pos)
    }

    /// Claimed positions, in stream order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.head.clone().chain(self.tail.clone())
    }

    /// Unclaimed positions, in stream order.
    pub fn complement_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(|&p| !self.contains(p))
    }

    /// The claimed elements of `stream`, in stream order.
    pub fn select<T: Clone>(&self, stream: &[T]) -> Vec<T> {
        debug_assert_eq!(stream.len(), self.n);
        stream[self.head.clone()]
            .iter()
            .chain(&stream[self.tail.clone()])
            .cloned()
            .collect()
    }

    /// The unclaimed elements of `stream`, in stream order.
    pub fn complement<T: Clone>(&self, stream: &[T]) -> Vec<T> {
        debug_assert_eq!(stream.len(), self.n);
        self.complement_positions()
            .map(|p| stream[p].clone())
            .collect()
    }
}
