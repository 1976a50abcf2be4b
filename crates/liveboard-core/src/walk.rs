//! The bounded random walk driving participant scores.
//!
//! Every tick, each participant's score moves by a random delta, clamped to
//! `[0, 100]` and rounded to one decimal place. The selected favorite gets
//! a biased distribution: most of the time a strong positive "boost", rarely
//! a small steady move. Everyone else draws from a wider field distribution.
//!
//! Deltas are sampled as integer tenths and converted to [`Decimal`], so
//! the stored one-decimal precision is exact and no float arithmetic is
//! involved.

use rand::Rng;
use rust_decimal::Decimal;

/// Lower score bound.
pub const MIN_SCORE: Decimal = Decimal::ZERO;

/// Upper score bound.
pub const MAX_SCORE: Decimal = Decimal::ONE_HUNDRED;

/// Percent chance the favorite draws from the boost distribution.
const BOOST_CHANCE_PCT: u32 = 90;

/// Favorite boost delta range in tenths: +4.0 to +12.0.
const BOOST_TENTHS: core::ops::RangeInclusive<i64> = 40..=120;

/// Favorite steady delta range in tenths: -1.0 to +2.0.
const STEADY_TENTHS: core::ops::RangeInclusive<i64> = -10..=20;

/// Field delta range in tenths: -3.0 to +8.0.
const FIELD_TENTHS: core::ops::RangeInclusive<i64> = -30..=80;

/// Initial score range in tenths: 5.0 to 65.0 (exclusive upper bound).
const INITIAL_TENTHS: core::ops::Range<i64> = 50..650;

/// Sample the score delta for one participant on one tick.
///
/// The favorite draws a boost (`[4.0, 12.0]`) with 90% probability and a
/// small steady move (`[-1.0, 2.0]`) otherwise. Non-favorites draw from the
/// wider field range (`[-3.0, 8.0]`).
pub fn sample_delta(rng: &mut impl Rng, is_favorite: bool) -> Decimal {
    let tenths = if is_favorite {
        let roll: u32 = rng.random_range(0..100);
        if roll < BOOST_CHANCE_PCT {
            rng.random_range(BOOST_TENTHS)
        } else {
            rng.random_range(STEADY_TENTHS)
        }
    } else {
        rng.random_range(FIELD_TENTHS)
    };
    Decimal::new(tenths, 1)
}

/// Apply a delta to a score: saturating add, clamp to `[0, 100]`, round to
/// one decimal place.
///
/// Holds for arbitrary deltas, not only the sampled ranges, so extreme
/// inputs can never push a score out of bounds.
pub fn apply_delta(score: Decimal, delta: Decimal) -> Decimal {
    score
        .saturating_add(delta)
        .clamp(MIN_SCORE, MAX_SCORE)
        .round_dp(1)
}

/// Draw an initial score uniformly from `[5.0, 65.0)`.
pub fn initial_score(rng: &mut impl Rng) -> Decimal {
    let tenths = rng.random_range(INITIAL_TENTHS);
    Decimal::new(tenths, 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn field_deltas_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let delta = sample_delta(&mut rng, false);
            assert!(delta >= Decimal::new(-30, 1));
            assert!(delta <= Decimal::new(80, 1));
        }
    }

    #[test]
    fn favorite_deltas_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let delta = sample_delta(&mut rng, true);
            // Union of the boost and steady ranges.
            assert!(delta >= Decimal::new(-10, 1));
            assert!(delta <= Decimal::new(120, 1));
        }
    }

    #[test]
    fn favorite_is_biased_upward() {
        // With a 90% boost chance of at least +4.0, the mean favorite delta
        // over many samples is far above the field mean (+2.5).
        let mut rng = SmallRng::seed_from_u64(7);
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total = total.saturating_add(sample_delta(&mut rng, true));
        }
        let mean = total.checked_div(Decimal::from(1000)).unwrap_or_default();
        assert!(mean > Decimal::from(5), "mean favorite delta was {mean}");
    }

    #[test]
    fn clamping_holds_under_extreme_deltas() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut score = Decimal::new(500, 1);
        for _ in 0..200 {
            let sign = if rng.random_range(0..2) == 0 { -1 } else { 1 };
            let extreme = Decimal::from(1000i64.saturating_mul(sign));
            score = apply_delta(score, extreme);
            assert!(score >= MIN_SCORE);
            assert!(score <= MAX_SCORE);
        }
    }

    #[test]
    fn scores_round_to_one_decimal() {
        let score = apply_delta(Decimal::new(105, 2), Decimal::new(111, 2));
        // 1.05 + 1.11 = 2.16 -> 2.2
        assert_eq!(score, Decimal::new(22, 1));
    }

    #[test]
    fn clamp_at_upper_bound() {
        let score = apply_delta(Decimal::new(995, 1), Decimal::from(8));
        assert_eq!(score, MAX_SCORE);
    }

    #[test]
    fn clamp_at_lower_bound() {
        let score = apply_delta(Decimal::new(5, 1), Decimal::from(-3));
        assert_eq!(score, MIN_SCORE);
    }

    #[test]
    fn initial_scores_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let score = initial_score(&mut rng);
            assert!(score >= Decimal::from(5));
            assert!(score < Decimal::new(650, 1));
        }
    }
}
