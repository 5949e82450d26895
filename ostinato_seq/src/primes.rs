// Ascending prime numbers via an incremental sieve of Eratosthenes.
//
// A classic sieve needs an upper bound up front. This one doesn't: it keeps a
// map from each upcoming odd composite to the stride (2p) of the prime that
// will cross it off. Candidates are tested in increasing order; a candidate
// absent from the map is prime, and its first interesting multiple (p*p) is
// scheduled. A candidate present in the map is composite, and its entry is
// slid forward to the next multiple not already claimed by another prime.
//
// Each prime contributes exactly one map entry, so memory grows with the
// number of primes emitted so far and each pull is O(1) amortized.

use crate::IntegerSource;
use rustc_hash::FxHashMap;

/// Resumable generator of 2, 3, 5, 7, 11, ...
#[derive(Debug, Clone, Default)]
pub struct Primes {
    /// Next odd candidate to test. 0 until 2 has been emitted.
    candidate: u64,
    /// Upcoming composite -> stride of the prime sieving it.
    composites: FxHashMap<u64, u64>,
}

impl Primes {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_prime(&mut self) -> u64 {
        if self.candidate == 0 {
            self.candidate = 3;
            return 2;
        }
        loop {
            let n = self.candidate;
            self.candidate += 2;
            match self.composites.remove(&n) {
                None => {
                    // p*p overflowing u64 is unreachable in practice; skip scheduling.
                    if let Some(square) = n.checked_mul(n) {
                        self.composites.insert(square, 2 * n);
                    }
                    return n;
                }
                Some(stride) => {
                    let mut next = n + stride;
                    while self.composites.contains_key(&next) {
                        next += stride;
                    }
                    self.composites.insert(next, stride);
                }
            }
        }
    }
}

impl IntegerSource for Primes {
    fn next_value(&mut self) -> Option<i64> {
        i64::try_from(self.next_prime()).ok()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        Some(self.next_prime())
    }
}
