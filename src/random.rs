//! Pseudo-random number generation.
//!
//! Every sampling function in the crate takes an explicit [`Rng`], so results
//! are reproducible when a seeded generator is passed in. For convenience,
//! each thread also owns a [`MathRng`] seeded from the OS on first use.

use crate::num::{Float, Scalar};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::cell::RefCell;

/// The generator used for math sampling.
pub type MathRng = Pcg64Mcg;

thread_local! {
    static THREAD_RNG: RefCell<MathRng> = RefCell::new(MathRng::from_rng(&mut rand::rng()));
}

/// Creates a deterministic generator from the given seed.
pub fn seeded_rng(seed: u64) -> MathRng {
    MathRng::seed_from_u64(seed)
}

/// Calls the given closure with this thread's generator.
///
/// # Panics
/// If called reentrantly from within the closure.
pub fn with_thread_rng<R>(f: impl FnOnce(&mut MathRng) -> R) -> R {
    THREAD_RNG.with(|rng| f(&mut rng.borrow_mut()))
}

/// Draws a uniformly distributed value between `min` and `max` (see
/// [`Scalar::sample_uniform`] for the treatment of the bounds).
#[inline]
pub fn random_range<T: Scalar, R: Rng + ?Sized>(rng: &mut R, min: T, max: T) -> T {
    T::sample_uniform(rng, min, max)
}

/// Draws a normally distributed value with the given mean and standard
/// deviation.
#[inline]
pub fn gauss<T: Float, R: Rng + ?Sized>(rng: &mut R, mean: T, stddev: T) -> T {
    mean + stddev * T::sample_standard_normal(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_are_reproducible() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        for _ in 0..10 {
            assert_eq!(
                random_range(&mut a, 0_u64, 1000),
                random_range(&mut b, 0_u64, 1000)
            );
        }
    }

    #[test]
    fn thread_rng_samples_within_range() {
        for _ in 0..100 {
            let value = with_thread_rng(|rng| random_range(rng, -2.0_f64, 3.0));
            assert!((-2.0..3.0).contains(&value));
        }
    }

    #[test]
    fn gaussian_samples_have_expected_mean() {
        let mut rng = seeded_rng(1);
        let n = 20_000;
        let mean = (0..n).map(|_| gauss(&mut rng, 5.0_f64, 2.0)).sum::<f64>() / f64::from(n);
        assert!((mean - 5.0).abs() < 0.1);
    }

    #[test]
    fn zero_stddev_gives_mean() {
        let mut rng = seeded_rng(3);
        assert_eq!(gauss(&mut rng, 1.5_f32, 0.0), 1.5);
    }
}
