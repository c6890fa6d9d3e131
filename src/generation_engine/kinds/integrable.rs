use std::fmt;

use crate::generation_engine::{
    helpers::{coefficient, pick},
    models::{Exact, ExactForm, Separable},
    random::RandomSource,
};

impl Separable {
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let p = coefficient(rng);
        let q = coefficient(rng);
        Separable { p, q }
    }
}

impl fmt::Display for Separable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generated Separable Equation:\n(dy/{}y) = (dx/{}x)", self.p, self.q)
    }
}

impl Exact {
    /// Coefficients first, then the form. The form never changes afterwards.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let a = coefficient(rng);
        let b = coefficient(rng);
        let c = coefficient(rng);
        let form = pick(rng, &[ExactForm::Logarithmic, ExactForm::ScaledProduct]);
        Exact { a, b, c, form }
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            ExactForm::Logarithmic => write!(
                f,
                "Generated Exact Equation:\n{}ln(y)*dy + {}ln(x)*dx = 0",
                self.a, self.b
            ),
            ExactForm::ScaledProduct => write!(
                f,
                "Generated Exact Equation:\n{}y*dy + {}x*dx = 0",
                self.a * self.c,
                self.b * self.c
            ),
        }
    }
}
