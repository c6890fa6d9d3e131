//! Per-kind generators and templates, grouped by family.
//!
//! Every kind record gets two things here: an associated `generate` that
//! draws its coefficients from a [`RandomSource`](super::random::RandomSource)
//! in a fixed order, and a `Display` impl that renders the problem text.
//!
//! ```ignore
//! impl CauchyEuler {
//!     pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self
//! }
//! ```
//!
//! The factory in `generator.rs` dispatches to these.

/// First-order linear, Cauchy-Euler, higher-order
pub mod linear;
/// Partial, system of equations
pub mod multivariable;
/// Separable, exact
pub mod integrable;
/// Laplace transform
pub mod transform;
