//! Coefficient draws shared by the kind generators.
//!
//! Every coefficient in every template comes from one of two closed ranges.
//! Keeping the ranges here means the kind modules only decide *which* range a
//! field uses, and the range tests have a single source to check against.

use std::ops::RangeInclusive;

use crate::generation_engine::random::RandomSource;

/// Range for ordinary coefficients.
pub const COEFFICIENT_RANGE: RangeInclusive<i32> = 1..=10;

/// Range for the two leading coefficients of a system of equations.
pub const SMALL_COEFFICIENT_RANGE: RangeInclusive<i32> = 1..=5;

/// Draw an ordinary coefficient in `1..=10`.
pub fn coefficient<R: RandomSource + ?Sized>(rng: &mut R) -> i32 {
    rng.next_int(*COEFFICIENT_RANGE.start(), *COEFFICIENT_RANGE.end())
}

/// Draw a coefficient in `1..=5`.
pub fn small_coefficient<R: RandomSource + ?Sized>(rng: &mut R) -> i32 {
    rng.next_int(*SMALL_COEFFICIENT_RANGE.start(), *SMALL_COEFFICIENT_RANGE.end())
}

/// Pick one of `options` uniformly. Draws `1..=len` so scripted sources can
/// address choices by their 1-based position.
pub fn pick<R: RandomSource + ?Sized, T: Copy>(rng: &mut R, options: &[T]) -> T {
    assert!(!options.is_empty(), "pick from empty option list");
    let n = options.len() as i32;
    let index = rng.next_int(1, n).clamp(1, n) - 1;
    options[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation_engine::random::ScriptedRandom;

    #[test]
    fn pick_is_one_based() {
        let mut rng = ScriptedRandom::new(vec![1, 3, 2]);
        let options = ['a', 'b', 'c'];
        assert_eq!(pick(&mut rng, &options), 'a');
        assert_eq!(pick(&mut rng, &options), 'c');
        assert_eq!(pick(&mut rng, &options), 'b');
    }
}
