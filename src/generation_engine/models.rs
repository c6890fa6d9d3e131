use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Kinds and selectors
// ---------------------------------------------------------------------------

/// The eight equation categories, in selector order (1..=8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationKind {
    FirstOrderLinear,
    CauchyEuler,
    HigherOrder,
    Partial,
    SystemOfEquations,
    Separable,
    Exact,
    LaplaceTransform,
}

impl EquationKind {
    pub const ALL: [EquationKind; 8] = [
        EquationKind::FirstOrderLinear,
        EquationKind::CauchyEuler,
        EquationKind::HigherOrder,
        EquationKind::Partial,
        EquationKind::SystemOfEquations,
        EquationKind::Separable,
        EquationKind::Exact,
        EquationKind::LaplaceTransform,
    ];

    /// Integer selector used by the radio group and the factory.
    pub fn selector(self) -> i32 {
        match self {
            EquationKind::FirstOrderLinear  => 1,
            EquationKind::CauchyEuler       => 2,
            EquationKind::HigherOrder       => 3,
            EquationKind::Partial           => 4,
            EquationKind::SystemOfEquations => 5,
            EquationKind::Separable         => 6,
            EquationKind::Exact             => 7,
            EquationKind::LaplaceTransform  => 8,
        }
    }

    pub fn from_selector(selector: i32) -> Option<EquationKind> {
        EquationKind::ALL.into_iter().find(|k| k.selector() == selector)
    }

    /// Short machine name, accepted by the CLI.
    pub fn slug(self) -> &'static str {
        match self {
            EquationKind::FirstOrderLinear  => "first-order-linear",
            EquationKind::CauchyEuler       => "cauchy-euler",
            EquationKind::HigherOrder       => "higher-order",
            EquationKind::Partial           => "partial",
            EquationKind::SystemOfEquations => "system",
            EquationKind::Separable         => "separable",
            EquationKind::Exact             => "exact",
            EquationKind::LaplaceTransform  => "laplace",
        }
    }

    pub fn from_slug(slug: &str) -> Option<EquationKind> {
        EquationKind::ALL.into_iter().find(|k| k.slug() == slug)
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EquationKind::FirstOrderLinear  => "First-Order Linear",
            EquationKind::CauchyEuler       => "Cauchy-Euler",
            EquationKind::HigherOrder       => "Higher-Order",
            EquationKind::Partial           => "Partial",
            EquationKind::SystemOfEquations => "System of Equations",
            EquationKind::Separable         => "Separable",
            EquationKind::Exact             => "Exact",
            EquationKind::LaplaceTransform  => "Laplace Transform",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// First-order configuration
// ---------------------------------------------------------------------------

/// Flags shared by every first-order linear equation.
///
/// There is one value of this per [`SelectionState`](crate::SelectionState);
/// each first-order equation reads it when drawn or regenerated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstOrderOptions {
    pub is_homogeneous: bool,
    pub has_variable_coefficient: bool,
}

/// Coefficient of `y` in a first-order linear equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadCoefficient {
    Constant(i32),
    /// Multiplied by the independent variable, rendered as `<n>x`.
    Variable(i32),
}

impl LeadCoefficient {
    pub fn value(self) -> i32 {
        match self {
            LeadCoefficient::Constant(n) | LeadCoefficient::Variable(n) => n,
        }
    }
}

impl fmt::Display for LeadCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadCoefficient::Constant(n) => write!(f, "{}", n),
            LeadCoefficient::Variable(n) => write!(f, "{}x", n),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-kind records
// ---------------------------------------------------------------------------

/// `dy/dx + P y = Q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstOrderLinear {
    pub p: LeadCoefficient,
    pub q: i32,
    /// Flag values these coefficients were drawn with.
    pub drawn_with: FirstOrderOptions,
}

/// `x^2 y'' + a x y' + b y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauchyEuler {
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HigherOrder {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partial {
    pub alpha: i32,
    pub beta: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemOfEquations {
    pub x_coeff: i32,
    pub y_coeff: i32,
    pub rhs: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separable {
    pub p: i32,
    pub q: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExactForm {
    /// `a ln(y) dy + b ln(x) dx = 0`
    Logarithmic,
    /// `(a*c) y dy + (b*c) x dx = 0`
    ScaledProduct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exact {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub form: ExactForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrigTerm {
    Sine,
    Cosine,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaplaceTransform {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub forcing: TrigTerm,
}

// ---------------------------------------------------------------------------
// Generated equation
// ---------------------------------------------------------------------------

/// One generated equation. `Display` renders the problem statement shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Equation {
    FirstOrderLinear(FirstOrderLinear),
    CauchyEuler(CauchyEuler),
    HigherOrder(HigherOrder),
    Partial(Partial),
    SystemOfEquations(SystemOfEquations),
    Separable(Separable),
    Exact(Exact),
    LaplaceTransform(LaplaceTransform),
}

impl Equation {
    pub fn kind(&self) -> EquationKind {
        match self {
            Equation::FirstOrderLinear(_)  => EquationKind::FirstOrderLinear,
            Equation::CauchyEuler(_)       => EquationKind::CauchyEuler,
            Equation::HigherOrder(_)       => EquationKind::HigherOrder,
            Equation::Partial(_)           => EquationKind::Partial,
            Equation::SystemOfEquations(_) => EquationKind::SystemOfEquations,
            Equation::Separable(_)         => EquationKind::Separable,
            Equation::Exact(_)             => EquationKind::Exact,
            Equation::LaplaceTransform(_)  => EquationKind::LaplaceTransform,
        }
    }

    pub fn as_first_order(&self) -> Option<&FirstOrderLinear> {
        match self {
            Equation::FirstOrderLinear(eq) => Some(eq),
            _ => None,
        }
    }

    pub fn as_first_order_mut(&mut self) -> Option<&mut FirstOrderLinear> {
        match self {
            Equation::FirstOrderLinear(eq) => Some(eq),
            _ => None,
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Equation::FirstOrderLinear(eq)  => fmt::Display::fmt(eq, f),
            Equation::CauchyEuler(eq)       => fmt::Display::fmt(eq, f),
            Equation::HigherOrder(eq)       => fmt::Display::fmt(eq, f),
            Equation::Partial(eq)           => fmt::Display::fmt(eq, f),
            Equation::SystemOfEquations(eq) => fmt::Display::fmt(eq, f),
            Equation::Separable(eq)         => fmt::Display::fmt(eq, f),
            Equation::Exact(eq)             => fmt::Display::fmt(eq, f),
            Equation::LaplaceTransform(eq)  => fmt::Display::fmt(eq, f),
        }
    }
}

// ---------------------------------------------------------------------------
// Request type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub kind: EquationKind,
    /// `None` draws from entropy; `Some(seed)` reproduces the same equation.
    pub rng_seed: Option<u64>,
    /// Only read for [`EquationKind::FirstOrderLinear`].
    pub first_order: FirstOrderOptions,
}

impl GenerationRequest {
    /// Entropy-seeded request with non-homogeneous, constant-coefficient
    /// first-order flags.
    pub fn new(kind: EquationKind) -> Self {
        Self {
            kind,
            rng_seed: None,
            first_order: FirstOrderOptions::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_first_order(mut self, options: FirstOrderOptions) -> Self {
        self.first_order = options;
        self
    }
}
