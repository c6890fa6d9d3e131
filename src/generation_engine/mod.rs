//! Core generation engine — random draws, equation kinds, and the factory.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: kinds, per-kind records, options, request |
//! | `random`    | `RandomSource` trait with entropy, seeded, and scripted sources |
//! | `helpers`   | Coefficient ranges and draw helpers used by every kind |
//! | `kinds`     | Per-kind `generate` + `Display` template, grouped by family |
//! | `generator` | Factory: selector or request in, `Equation` out |
//! | `error`     | `GenerationError` |

pub mod error;
pub mod generator;
pub mod helpers;
pub mod kinds;
pub mod models;
pub mod random;

pub use error::GenerationError;
pub use generator::{generate_equation, generate_from_selector, generate_kind};
pub use models::{
    CauchyEuler, Equation, EquationKind, Exact, ExactForm, FirstOrderLinear, FirstOrderOptions,
    GenerationRequest, HigherOrder, LaplaceTransform, LeadCoefficient, Partial, Separable,
    SystemOfEquations, TrigTerm,
};
pub use random::{RandomSource, ScriptedRandom, SystemRandom};
