use thiserror::Error;

/// Errors raised while turning a selector into an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Selector outside the eight known kinds.
    #[error("invalid equation selector {0}: expected 1..=8")]
    InvalidSelector(i32),
}
