use diffeq_drill_gen::generation_engine::{
    helpers::{COEFFICIENT_RANGE, SMALL_COEFFICIENT_RANGE},
    LeadCoefficient,
};
use diffeq_drill_gen::{
    generate_equation, generate_from_selector, Equation, EquationKind, FirstOrderOptions,
    GenerationRequest, SelectionState, SystemRandom,
};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = EquationKind> {
    (0usize..8).prop_map(|i| EquationKind::ALL[i])
}

fn flags() -> impl Strategy<Value = FirstOrderOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(h, v)| FirstOrderOptions {
        is_homogeneous: h,
        has_variable_coefficient: v,
    })
}

proptest! {
    #[test]
    fn seeded_generation_is_reproducible(kind in kind(), seed in any::<u64>(), flags in flags()) {
        let request = GenerationRequest::new(kind).with_seed(seed).with_first_order(flags);
        let a = generate_equation(request.clone());
        let b = generate_equation(request);
        prop_assert_eq!(a.kind(), kind);
        prop_assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn selector_validity(selector in any::<i32>(), seed in any::<u64>()) {
        let mut rng = SystemRandom::seeded(seed);
        let result = generate_from_selector(selector, FirstOrderOptions::default(), &mut rng);
        prop_assert_eq!(result.is_ok(), (1..=8).contains(&selector));
    }

    #[test]
    fn system_leading_coefficients_in_small_range(seed in any::<u64>()) {
        let eq = generate_equation(GenerationRequest::new(EquationKind::SystemOfEquations).with_seed(seed));
        let Equation::SystemOfEquations(s) = eq else { panic!("wrong kind") };
        prop_assert!(SMALL_COEFFICIENT_RANGE.contains(&s.x_coeff));
        prop_assert!(SMALL_COEFFICIENT_RANGE.contains(&s.y_coeff));
        prop_assert!(COEFFICIENT_RANGE.contains(&s.rhs));
    }

    #[test]
    fn first_order_follows_flags(seed in any::<u64>(), flags in flags()) {
        let eq = generate_equation(
            GenerationRequest::new(EquationKind::FirstOrderLinear).with_seed(seed).with_first_order(flags),
        );
        let first = eq.as_first_order().expect("first-order");
        if flags.is_homogeneous {
            prop_assert_eq!(first.q, 0);
        } else {
            prop_assert!(COEFFICIENT_RANGE.contains(&first.q));
        }
        prop_assert_eq!(
            matches!(first.p, LeadCoefficient::Variable(_)),
            flags.has_variable_coefficient
        );
    }

    #[test]
    fn popup_fires_only_on_transition_into_first_order(picks in prop::collection::vec(1i32..=8, 1..30)) {
        let mut state = SelectionState::with_random(SystemRandom::seeded(0));
        let mut previous = 0;
        for pick in picks {
            state.show_first_order_config_popup = false;
            state.selected_kind = pick;
            state.observe_selection();
            prop_assert_eq!(state.show_first_order_config_popup, pick == 1 && previous != 1);
            prop_assert_eq!(state.last_selected_kind(), pick);
            previous = pick;
        }
    }
}
