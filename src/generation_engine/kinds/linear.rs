use std::fmt;

use crate::generation_engine::{
    helpers::coefficient,
    models::{CauchyEuler, FirstOrderLinear, FirstOrderOptions, HigherOrder, LeadCoefficient},
    random::RandomSource,
};

// ---------------------------------------------------------------------------
// First-order linear
// ---------------------------------------------------------------------------

impl FirstOrderLinear {
    /// Draw `P` then `Q` using the shared flags.
    pub fn generate<R: RandomSource + ?Sized>(options: FirstOrderOptions, rng: &mut R) -> Self {
        let mut eq = FirstOrderLinear {
            p: LeadCoefficient::Constant(1),
            q: 0,
            drawn_with: options,
        };
        eq.regenerate(options, rng);
        eq
    }

    /// Redraw `P` and `Q` from the current flag values.
    ///
    /// `Q` is always 0 for a homogeneous equation; no draw is spent on it.
    pub fn regenerate<R: RandomSource + ?Sized>(&mut self, options: FirstOrderOptions, rng: &mut R) {
        let p = coefficient(rng);
        self.p = if options.has_variable_coefficient {
            LeadCoefficient::Variable(p)
        } else {
            LeadCoefficient::Constant(p)
        };
        self.q = if options.is_homogeneous { 0 } else { coefficient(rng) };
        self.drawn_with = options;
    }

    pub fn is_homogeneous(&self) -> bool {
        self.drawn_with.is_homogeneous
    }

    pub fn has_variable_coefficient(&self) -> bool {
        self.drawn_with.has_variable_coefficient
    }
}

impl fmt::Display for FirstOrderLinear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let homogeneity = if self.is_homogeneous() { "Homogeneous" } else { "Non-Homogeneous" };
        let coefficient = if self.has_variable_coefficient() { "Variable" } else { "Constant" };
        write!(
            f,
            "Generated First-Order Linear DE\n ({homogeneity}, {coefficient} Coefficient):\n\
             dy/dx + {}y = {}",
            self.p, self.q
        )
    }
}

// ---------------------------------------------------------------------------
// Cauchy-Euler
// ---------------------------------------------------------------------------

impl CauchyEuler {
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let a = coefficient(rng);
        let b = coefficient(rng);
        CauchyEuler { a, b }
    }
}

impl fmt::Display for CauchyEuler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated Cauchy-Euler Equation:\nx^2 * d^2y/dx^2 + {}x*dy/dx + {}y = 0",
            self.a, self.b
        )
    }
}

// ---------------------------------------------------------------------------
// Higher-order (second order, constant coefficients)
// ---------------------------------------------------------------------------

impl HigherOrder {
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let a = coefficient(rng);
        let b = coefficient(rng);
        let c = coefficient(rng);
        HigherOrder { a, b, c }
    }
}

impl fmt::Display for HigherOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated Higher-Order DE:\nd^2y/dx^2 + {}dy/dx + {}y = {}",
            self.a, self.b, self.c
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation_engine::random::ScriptedRandom;

    #[test]
    fn first_order_constant_non_homogeneous() {
        let mut rng = ScriptedRandom::new(vec![6, 2]);
        let eq = FirstOrderLinear::generate(FirstOrderOptions::default(), &mut rng);
        assert_eq!(eq.p, LeadCoefficient::Constant(6));
        assert_eq!(eq.q, 2);
        assert_eq!(
            eq.to_string(),
            "Generated First-Order Linear DE\n (Non-Homogeneous, Constant Coefficient):\ndy/dx + 6y = 2"
        );
    }

    #[test]
    fn first_order_variable_homogeneous_skips_q_draw() {
        let options = FirstOrderOptions { is_homogeneous: true, has_variable_coefficient: true };
        let mut rng = ScriptedRandom::new(vec![4, 9]);
        let eq = FirstOrderLinear::generate(options, &mut rng);
        assert_eq!(rng.drawn(), 1);
        assert_eq!(
            eq.to_string(),
            "Generated First-Order Linear DE\n (Homogeneous, Variable Coefficient):\ndy/dx + 4xy = 0"
        );
    }

    #[test]
    fn regenerate_picks_up_new_flags() {
        let mut rng = ScriptedRandom::new(vec![3, 5, 7]);
        let mut eq = FirstOrderLinear::generate(FirstOrderOptions::default(), &mut rng);
        assert!(!eq.is_homogeneous());

        let options = FirstOrderOptions { is_homogeneous: true, has_variable_coefficient: false };
        eq.regenerate(options, &mut rng);
        assert_eq!(eq.p, LeadCoefficient::Constant(7));
        assert_eq!(eq.q, 0);
        assert!(eq.is_homogeneous());
    }

    #[test]
    fn higher_order_template() {
        let eq = HigherOrder { a: 1, b: 2, c: 3 };
        assert_eq!(eq.to_string(), "Generated Higher-Order DE:\nd^2y/dx^2 + 1dy/dx + 2y = 3");
    }
}
