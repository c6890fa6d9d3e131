use std::fmt;

use crate::generation_engine::{
    helpers::{coefficient, small_coefficient},
    models::{Partial, SystemOfEquations},
    random::RandomSource,
};

impl Partial {
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let alpha = coefficient(rng);
        let beta = coefficient(rng);
        Partial { alpha, beta }
    }
}

impl fmt::Display for Partial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated Partial DE:\n∂^2u/∂x^2 + {}*∂u/∂x = {}",
            self.alpha, self.beta
        )
    }
}

impl SystemOfEquations {
    /// The two leading coefficients come from the small range; `rhs` from the
    /// ordinary one.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let x_coeff = small_coefficient(rng);
        let y_coeff = small_coefficient(rng);
        let rhs = coefficient(rng);
        SystemOfEquations { x_coeff, y_coeff, rhs }
    }
}

impl fmt::Display for SystemOfEquations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated System of Equations:\ndx/dt = {}x + {}y,\ndy/dt = {}x",
            self.x_coeff, self.y_coeff, self.rhs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation_engine::random::ScriptedRandom;

    #[test]
    fn partial_template_uses_partial_symbol() {
        let eq = Partial { alpha: 7, beta: 2 };
        assert_eq!(eq.to_string(), "Generated Partial DE:\n∂^2u/∂x^2 + 7*∂u/∂x = 2");
    }

    #[test]
    fn system_leading_coefficients_are_capped_at_five() {
        let mut rng = ScriptedRandom::new(vec![9, 8, 9]);
        let eq = SystemOfEquations::generate(&mut rng);
        assert_eq!((eq.x_coeff, eq.y_coeff, eq.rhs), (5, 5, 9));
        assert_eq!(
            eq.to_string(),
            "Generated System of Equations:\ndx/dt = 5x + 5y,\ndy/dt = 9x"
        );
    }
}
