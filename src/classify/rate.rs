//! Hourly rate generation.
//!
//! The base rate is a uniform draw from a specialty-specific range, scaled by
//! an experience multiplier of `1 + 0.1` per certification. Draws go through
//! `RateSource` so callers can swap the RNG for a fixed source.

use std::ops::Range;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::Specialty;

/// Experience bonus per certification.
const CERTIFICATION_STEP: f64 = 0.1;

/// Source of uniform draws for base rates.
pub trait RateSource {
    /// Uniform draw from the half-open `range`.
    fn draw(&mut self, range: Range<f64>) -> f64;
}

/// RNG-backed rate source.
pub struct RandomRates<R = StdRng> {
    rng: R,
}

impl RandomRates<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomRates<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RateSource for RandomRates<R> {
    fn draw(&mut self, range: Range<f64>) -> f64 {
        self.rng.gen_range(range)
    }
}

/// Always lands the same fraction of the way through each range.
///
/// `FixedRates::new(0.0)` yields every range's lower bound.
#[derive(Debug, Clone, Copy)]
pub struct FixedRates {
    fraction: f64,
}

impl FixedRates {
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }
}

impl RateSource for FixedRates {
    fn draw(&mut self, range: Range<f64>) -> f64 {
        range.start + self.fraction * (range.end - range.start)
    }
}

pub fn experience_multiplier(certification_count: usize) -> f64 {
    1.0 + certification_count as f64 * CERTIFICATION_STEP
}

/// Generate an hourly rate rounded to two decimals.
pub fn hourly_rate<S: RateSource + ?Sized>(
    specialty: Specialty,
    certification_count: usize,
    source: &mut S,
) -> f64 {
    let base = source.draw(specialty.base_rate_range());
    round_cents(base * experience_multiplier(certification_count))
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_gives_exact_rates() {
        let mut low = FixedRates::new(0.0);
        assert_eq!(hourly_rate(Specialty::Doctor, 0, &mut low), 85.0);
        assert_eq!(hourly_rate(Specialty::Tech, 2, &mut low), 30.0);

        let mut mid = FixedRates::new(0.5);
        // (35 + 5) * 1.4 = 56
        assert_eq!(hourly_rate(Specialty::Nurse, 4, &mut mid), 56.0);
        // (30 + 7.5) * 1.0
        assert_eq!(hourly_rate(Specialty::Other, 0, &mut mid), 37.5);
    }

    #[test]
    fn random_rates_stay_in_scaled_range() {
        let mut rates = RandomRates::seeded(7);
        for specialty in Specialty::ALL {
            let range = specialty.base_rate_range();
            for certs in [0usize, 1, 4, 10] {
                let m = experience_multiplier(certs);
                for _ in 0..200 {
                    let rate = hourly_rate(specialty, certs, &mut rates);
                    assert!(
                        rate >= round_cents(range.start * m) && rate <= round_cents(range.end * m),
                        "{specialty:?} with {certs} certs produced {rate}"
                    );
                    assert_eq!(round_cents(rate), rate);
                }
            }
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RandomRates::seeded(42);
        let mut b = RandomRates::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                hourly_rate(Specialty::Doctor, 3, &mut a),
                hourly_rate(Specialty::Doctor, 3, &mut b)
            );
        }
    }

    #[test]
    fn any_rng_can_back_the_source() {
        let mut rng = StdRng::seed_from_u64(3);
        let expected: f64 = rng.gen_range(Specialty::Tech.base_rate_range());

        let mut rates = RandomRates::with_rng(StdRng::seed_from_u64(3));
        assert_eq!(hourly_rate(Specialty::Tech, 0, &mut rates), round_cents(expected));
    }

    #[test]
    fn round_cents_rounds_half_up() {
        assert_eq!(round_cents(12.345_000_1), 12.35);
        assert_eq!(round_cents(12.344), 12.34);
    }
}
