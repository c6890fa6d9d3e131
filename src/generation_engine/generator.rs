use crate::generation_engine::{
    error::GenerationError,
    models::{
        CauchyEuler, Equation, EquationKind, Exact, FirstOrderLinear, FirstOrderOptions,
        GenerationRequest, HigherOrder, LaplaceTransform, Partial, Separable, SystemOfEquations,
    },
    random::{RandomSource, SystemRandom},
};

/// Core dispatch: routes a typed kind to its generator.
///
/// `first_order` is only read for [`EquationKind::FirstOrderLinear`].
pub fn generate_kind<R: RandomSource + ?Sized>(
    kind: EquationKind,
    first_order: FirstOrderOptions,
    rng: &mut R,
) -> Equation {
    let equation = match kind {
        EquationKind::FirstOrderLinear =>
            Equation::FirstOrderLinear(FirstOrderLinear::generate(first_order, rng)),

        EquationKind::CauchyEuler =>
            Equation::CauchyEuler(CauchyEuler::generate(rng)),

        EquationKind::HigherOrder =>
            Equation::HigherOrder(HigherOrder::generate(rng)),

        EquationKind::Partial =>
            Equation::Partial(Partial::generate(rng)),

        EquationKind::SystemOfEquations =>
            Equation::SystemOfEquations(SystemOfEquations::generate(rng)),

        EquationKind::Separable =>
            Equation::Separable(Separable::generate(rng)),

        EquationKind::Exact =>
            Equation::Exact(Exact::generate(rng)),

        EquationKind::LaplaceTransform =>
            Equation::LaplaceTransform(LaplaceTransform::generate(rng)),
    };
    tracing::debug!(kind = %kind, selector = kind.selector(), "generated equation");
    equation
}

/// Factory entry point for integer selectors (1..=8, in [`EquationKind::ALL`]
/// order). Anything else is [`GenerationError::InvalidSelector`].
pub fn generate_from_selector<R: RandomSource + ?Sized>(
    selector: i32,
    first_order: FirstOrderOptions,
    rng: &mut R,
) -> Result<Equation, GenerationError> {
    match EquationKind::from_selector(selector) {
        Some(kind) => Ok(generate_kind(kind, first_order, rng)),
        None => {
            tracing::warn!(selector, "invalid equation selector");
            Err(GenerationError::InvalidSelector(selector))
        }
    }
}

/// One-shot generation from a request. Seeded requests are reproducible.
pub fn generate_equation(request: GenerationRequest) -> Equation {
    let mut rng = SystemRandom::from_seed(request.rng_seed);
    generate_kind(request.kind, request.first_order, &mut rng)
}
