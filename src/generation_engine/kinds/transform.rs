use std::fmt;

use crate::generation_engine::{
    helpers::{coefficient, pick},
    models::{LaplaceTransform, TrigTerm},
    random::RandomSource,
};

impl LaplaceTransform {
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let a = coefficient(rng);
        let b = coefficient(rng);
        let c = coefficient(rng);
        let forcing = pick(rng, &[TrigTerm::Sine, TrigTerm::Cosine, TrigTerm::Both]);
        LaplaceTransform { a, b, c, forcing }
    }
}

impl fmt::Display for LaplaceTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (b, c) = (self.b, self.c);
        let rhs = match self.forcing {
            TrigTerm::Sine   => format!("{b}sin({c}t)"),
            TrigTerm::Cosine => format!("{b}cos({c}t)"),
            // Only the sine term carries `b`.
            TrigTerm::Both   => format!("{b}sin({c}t) + cos({c}t)"),
        };
        write!(f, "Generated Laplace Equation:\ny'(t) + {}y(t) = {}", self.a, rhs)
    }
}
