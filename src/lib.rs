//! # diffeq_drill_gen
//!
//! Random differential-equation practice problems, plus the small stateful
//! front end that lets a user pick a kind, generate, and read the result.
//!
//! Eight kinds are supported: first-order linear, Cauchy-Euler, higher-order,
//! partial, systems of equations, separable, exact, and Laplace-transform.
//! Every coefficient is a small integer drawn from a closed range, and each
//! kind renders through a fixed text template.
//!
//! ## How it works
//!
//! 1. Pick an [`EquationKind`] (or its integer selector, 1..=8).
//! 2. Call [`generate_equation`] with a [`GenerationRequest`], or
//!    [`generate_from_selector`] with your own [`RandomSource`]. An unknown
//!    selector is [`GenerationError::InvalidSelector`].
//! 3. Print the returned [`Equation`]; its `Display` impl is the problem text.
//!
//! For an interactive front end, [`SelectionState`] holds the selected kind,
//! the current equation and the window flags, and [`Presenter`] draws them
//! each frame through the [`Frontend`] / [`Widgets`] traits. With the `gui`
//! feature, `gui::run` hosts the presenter in an `eframe` window.
//!
//! ## Quick start
//!
//! ```rust
//! use diffeq_drill_gen::{generate_equation, EquationKind, GenerationRequest};
//!
//! let eq = generate_equation(GenerationRequest::new(EquationKind::CauchyEuler).with_seed(42));
//! assert!(eq.to_string().starts_with("Generated Cauchy-Euler Equation:"));
//! ```
//!
//! ## Scripted draws
//!
//! ```rust
//! use diffeq_drill_gen::{generate_from_selector, FirstOrderOptions, ScriptedRandom};
//!
//! let mut rng = ScriptedRandom::new(vec![3, 4]);
//! let eq = generate_from_selector(2, FirstOrderOptions::default(), &mut rng).unwrap();
//! assert_eq!(
//!     eq.to_string(),
//!     "Generated Cauchy-Euler Equation:\nx^2 * d^2y/dx^2 + 3x*dy/dx + 4y = 0"
//! );
//! ```

pub mod generation_engine;
pub mod presenter;
pub mod selection;

#[cfg(feature = "gui")]
pub mod gui;

// Convenience re-exports so callers can use `diffeq_drill_gen::generate_equation`
// directly without reaching into `generation_engine::`.
pub use generation_engine::{
    generate_equation, generate_from_selector, generate_kind, Equation, EquationKind,
    FirstOrderLinear, FirstOrderOptions, GenerationError, GenerationRequest, RandomSource,
    ScriptedRandom, SystemRandom,
};
pub use presenter::{Frontend, Presenter, PresenterConfig, Widgets};
pub use selection::SelectionState;
