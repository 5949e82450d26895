// The Kolakoski sequence: 1, 2, 2, 1, 1, 2, 1, 2, 2, 1, 2, 2, 1, ...
//
// The unique sequence over {1, 2} that equals its own run-length encoding.
// The textbook construction keeps the whole generated prefix around, since
// the run lengths are read back out of the sequence itself. That costs memory
// linear in the number of pulls.
//
// This version uses Jörg Arndt's bit-level construction instead (OEIS A000002):
// two 64-bit words encode the nested "generator of run lengths" levels, one
// bit per level. Each pull is a handful of bit operations and the state never
// grows. The counters are good for 2^63 pulls before wrapping.

use crate::IntegerSource;

/// Resumable generator of the Kolakoski sequence, in constant space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kolakoski {
    x: i64,
    y: i64,
}

impl Default for Kolakoski {
    fn default() -> Self {
        Kolakoski { x: -1, y: -1 }
    }
}

impl Kolakoski {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_term(&mut self) -> u8 {
        let term = if self.x & 1 == 1 { 1 } else { 2 };
        let f = self.y & !self.y.wrapping_add(1);
        self.x ^= f;
        self.y = self.y.wrapping_add(1) | (f & (self.x >> 1));
        term
    }
}

impl IntegerSource for Kolakoski {
    fn next_value(&mut self) -> Option<i64> {
        Some(i64::from(self.next_term()))
    }
}

impl Iterator for Kolakoski {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_term())
    }
}
