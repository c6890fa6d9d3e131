//! UI-thread state: which kind is selected, the current equation, and the
//! visibility of each window.
//!
//! All mutation goes through the methods here so the presenter stays a thin
//! mapping from widget events to state transitions.

use crate::generation_engine::{
    generate_from_selector, Equation, EquationKind, FirstOrderLinear, FirstOrderOptions,
    GenerationError, RandomSource, SystemRandom,
};

/// Selector shown as chosen when the app starts (Cauchy-Euler).
pub const DEFAULT_SELECTED_KIND: i32 = 2;

/// `last_selected_kind` before any selection pass has run.
pub const NO_PRIOR_SELECTION: i32 = 0;

#[derive(Debug)]
pub struct SelectionState<R: RandomSource = SystemRandom> {
    /// Radio-group value; normally 1..=8.
    pub selected_kind: i32,
    last_selected_kind: i32,
    current_equation: Option<Equation>,
    /// Shared by every first-order equation this state generates.
    pub first_order: FirstOrderOptions,
    pub show_selection_window: bool,
    pub show_display_window: bool,
    pub show_first_order_config_popup: bool,
    rng: R,
}

impl SelectionState<SystemRandom> {
    pub fn new() -> Self {
        Self::with_random(SystemRandom::new())
    }
}

impl Default for SelectionState<SystemRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> SelectionState<R> {
    /// Start-up state. The current equation is a first-order one even though
    /// the selected kind is Cauchy-Euler; the two only line up after the first
    /// generation.
    pub fn with_random(mut rng: R) -> Self {
        let first_order = FirstOrderOptions::default();
        let current = FirstOrderLinear::generate(first_order, &mut rng);
        Self {
            selected_kind: DEFAULT_SELECTED_KIND,
            last_selected_kind: NO_PRIOR_SELECTION,
            current_equation: Some(Equation::FirstOrderLinear(current)),
            first_order,
            show_selection_window: true,
            show_display_window: false,
            show_first_order_config_popup: false,
            rng,
        }
    }

    pub fn current_equation(&self) -> Option<&Equation> {
        self.current_equation.as_ref()
    }

    pub fn last_selected_kind(&self) -> i32 {
        self.last_selected_kind
    }

    /// Typed view of `selected_kind`, `None` if it is out of range.
    pub fn selected(&self) -> Option<EquationKind> {
        EquationKind::from_selector(self.selected_kind)
    }

    /// Run once after every selection-window pass.
    ///
    /// Moving onto first-order from any other value opens the config popup;
    /// staying on it does not.
    pub fn observe_selection(&mut self) {
        let first_order = EquationKind::FirstOrderLinear.selector();
        if self.selected_kind == first_order && self.last_selected_kind != first_order {
            tracing::debug!(from = self.last_selected_kind, "first-order selected, opening config popup");
            self.show_first_order_config_popup = true;
        }
        self.last_selected_kind = self.selected_kind;
    }

    /// Replace the current equation with a fresh one of the selected kind and
    /// show the display window.
    ///
    /// An invalid selector empties the slot; the display window still opens
    /// and shows the placeholder.
    pub fn generate(&mut self) -> Result<&Equation, GenerationError> {
        self.show_display_window = true;
        match generate_from_selector(self.selected_kind, self.first_order, &mut self.rng) {
            Ok(equation) => Ok(&*self.current_equation.insert(equation)),
            Err(err) => {
                self.current_equation = None;
                Err(err)
            }
        }
    }

    /// Popup "Confirm": redraw the first-order equation with the shared flags
    /// and close the popup.
    pub fn confirm_first_order(&mut self) {
        let options = self.first_order;
        if let Some(eq) = self.current_equation.as_mut().and_then(Equation::as_first_order_mut) {
            eq.regenerate(options, &mut self.rng);
            tracing::info!(
                homogeneous = options.is_homogeneous,
                variable_coefficient = options.has_variable_coefficient,
                "regenerated first-order equation"
            );
        }
        self.show_first_order_config_popup = false;
    }

    pub fn close_display(&mut self) {
        self.show_display_window = false;
    }

    /// The popup needs both its flag and a first-order equation to edit.
    pub fn first_order_popup_visible(&self) -> bool {
        self.show_first_order_config_popup
            && self
                .current_equation
                .as_ref()
                .is_some_and(|eq| eq.kind() == EquationKind::FirstOrderLinear)
    }
}
