//! Randomness sources for password synthesis.
//!
//! Synthesis only ever asks for a uniformly distributed index below some bound,
//! so the whole capability is the [`IndexSource`] trait. Which implementation
//! backs it is decided by the caller:
//!
//! - [`OsSource`]: the operating system CSPRNG (default).
//! - [`UrandomPool`]: a locked, pooled buffer filled from `/dev/urandom`.
//! - [`SeededSource`]: reproducible Xoshiro256** stream. Not for credentials.

mod seeded;
pub mod urand;

use rand::Rng;
use rand::rngs::OsRng;

pub use seeded::SeededSource;
pub use urand::UrandomPool;

/// A source of uniformly distributed indices.
pub trait IndexSource {
    /// Return an index uniformly distributed in `[0, n)`. `n` is always > 0.
    fn next_index(&mut self, n: usize) -> usize;

    /// Short human-readable name for status output.
    fn name(&self) -> &'static str;

    /// Why the source stopped drawing from its configured backend, if it has.
    fn fault(&self) -> Option<&str> {
        None
    }
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        (**self).next_index(n)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fault(&self) -> Option<&str> {
        (**self).fault()
    }
}

impl<S: IndexSource + ?Sized> IndexSource for Box<S> {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        (**self).next_index(n)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fault(&self) -> Option<&str> {
        (**self).fault()
    }
}

/// Operating system CSPRNG (`getrandom`).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource;

impl IndexSource for OsSource {
    #[inline]
    fn next_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "index bound must be positive");
        OsRng.gen_range(0..n)
    }

    fn name(&self) -> &'static str {
        "OS CSPRNG"
    }
}

/// Map a raw 64-bit stream onto `[0, n)` without modulo bias.
///
/// Values at or above the largest multiple of `n` are rejected and redrawn.
#[inline]
pub(crate) fn uniform_below(n: usize, mut next_u64: impl FnMut() -> u64) -> usize {
    debug_assert!(n > 0, "index bound must be positive");
    let n = n as u64;
    let limit = u64::MAX - (u64::MAX % n);
    loop {
        let x = next_u64();
        if x < limit {
            return (x % n) as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_source_stays_in_bounds() {
        let mut src = OsSource;
        for n in 1..50 {
            for _ in 0..20 {
                assert!(src.next_index(n) < n);
            }
        }
    }

    #[test]
    fn bound_of_one_always_yields_zero() {
        let mut src = OsSource;
        assert_eq!(src.next_index(1), 0);
        assert_eq!(uniform_below(1, || u64::MAX - 1), 0);
    }

    #[test]
    fn uniform_below_rejects_biased_tail() {
        // For n = 10 the limit is u64::MAX - 5; the first value is rejected.
        let mut stream = [u64::MAX - 1, 13].into_iter();
        let idx = uniform_below(10, || stream.next().unwrap());
        assert_eq!(idx, 3);
    }

    #[test]
    fn mut_ref_and_box_forward_to_inner_source() {
        let mut seeded = SeededSource::new(7);
        let expected: Vec<usize> = {
            let mut copy = SeededSource::new(7);
            (0..5).map(|_| copy.next_index(100)).collect()
        };

        let mut by_ref: &mut SeededSource = &mut seeded;
        let got: Vec<usize> = (0..5)
            .map(|_| IndexSource::next_index(&mut by_ref, 100))
            .collect();
        assert_eq!(got, expected);

        let mut boxed: Box<dyn IndexSource> = Box::new(SeededSource::new(7));
        let got: Vec<usize> = (0..5).map(|_| boxed.next_index(100)).collect();
        assert_eq!(got, expected);
        assert_eq!(boxed.name(), "seeded (xoshiro256**)");
    }

    struct Failing;

    impl IndexSource for Failing {
        fn next_index(&mut self, _n: usize) -> usize {
            0
        }

        fn name(&self) -> &'static str {
            "failing"
        }

        fn fault(&self) -> Option<&str> {
            Some("read error")
        }
    }

    #[test]
    fn fault_defaults_to_none_and_forwards() {
        assert_eq!(OsSource.fault(), None);
        assert_eq!(SeededSource::new(1).fault(), None);

        let boxed: Box<dyn IndexSource> = Box::new(Failing);
        assert_eq!(boxed.fault(), Some("read error"));
        let mut inner = Failing;
        let by_ref: &mut dyn IndexSource = &mut inner;
        assert_eq!(IndexSource::fault(&by_ref), Some("read error"));
    }
}
