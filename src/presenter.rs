//! Per-frame presentation of [`SelectionState`] through an immediate-mode
//! toolkit.
//!
//! The presenter never talks to a toolkit directly. It draws through two small
//! traits: [`Frontend`] opens windows and modal popups, [`Widgets`] places
//! controls inside them and reports edits back synchronously. The `gui`
//! feature implements both for `egui`; tests implement them with a recorder.

use serde::{Deserialize, Serialize};

use crate::generation_engine::{EquationKind, RandomSource, SystemRandom};
use crate::selection::SelectionState;

pub const CONFIG_POPUP_TITLE: &str = "First Order Linear";
pub const SELECTION_WINDOW_TITLE: &str = "Generate Equation";
pub const DISPLAY_WINDOW_TITLE: &str = "Equation Display";
pub const WELCOME_WINDOW_TITLE: &str = "Welcome";

/// Shown in the display window when the last generation failed.
pub const NO_EQUATION_MESSAGE: &str = "No equation generated!";

/// Controls placed inside a window or popup.
pub trait Widgets {
    fn text(&mut self, text: &str);
    fn separator(&mut self);
    /// Returns `true` when the user toggled `value` this frame.
    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool;
    /// Sets `*value = choice` and returns `true` when clicked this frame.
    fn radio_button(&mut self, label: &str, value: &mut i32, choice: i32) -> bool;
    /// Returns `true` when clicked this frame.
    fn button(&mut self, label: &str) -> bool;
}

/// Containers opened by the presenter each frame.
pub trait Frontend {
    /// A regular window. `open`, when given, is cleared if the user closes the
    /// window from its title bar.
    fn window(
        &mut self,
        title: &str,
        open: Option<&mut bool>,
        add_contents: &mut dyn FnMut(&mut dyn Widgets),
    );

    /// A modal popup, shown for as long as the presenter keeps calling this.
    fn modal(&mut self, title: &str, add_contents: &mut dyn FnMut(&mut dyn Widgets));
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Name greeted by the welcome panel.
    pub user_name: String,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self { user_name: "9th Grade Algebra expert".to_string() }
    }
}

/// Owns the selection state plus the welcome panel's click counter.
#[derive(Debug)]
pub struct Presenter<R: RandomSource = SystemRandom> {
    pub state: SelectionState<R>,
    pub config: PresenterConfig,
    welcome_clicks: u32,
}

impl Presenter<SystemRandom> {
    pub fn new(config: PresenterConfig) -> Self {
        Self::with_state(SelectionState::new(), config)
    }
}

impl<R: RandomSource> Presenter<R> {
    pub fn with_state(state: SelectionState<R>, config: PresenterConfig) -> Self {
        Self { state, config, welcome_clicks: 0 }
    }

    pub fn welcome_clicks(&self) -> u32 {
        self.welcome_clicks
    }

    /// Draw one frame: config popup, selection window, display window,
    /// welcome panel.
    pub fn render<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        self.render_first_order_popup(frontend);
        self.render_selection_window(frontend);
        self.render_display_window(frontend);
        self.render_welcome_panel(frontend);
    }

    fn render_first_order_popup<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        if !self.state.first_order_popup_visible() {
            return;
        }
        let state = &mut self.state;
        frontend.modal(CONFIG_POPUP_TITLE, &mut |ui| {
            ui.text("Configure Equation Parameters");
            ui.separator();
            ui.checkbox("Homogeneous?", &mut state.first_order.is_homogeneous);
            ui.checkbox("Variable coefficients?", &mut state.first_order.has_variable_coefficient);
            if ui.button("Confirm") {
                state.confirm_first_order();
            }
        });
    }

    fn render_selection_window<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        if !self.state.show_selection_window {
            return;
        }
        let state = &mut self.state;
        frontend.window(SELECTION_WINDOW_TITLE, None, &mut |ui| {
            ui.text("Select Equation Type:");
            for kind in EquationKind::ALL {
                ui.radio_button(&kind.to_string(), &mut state.selected_kind, kind.selector());
            }
            state.observe_selection();

            if ui.button("Generate Equation") {
                if let Err(err) = state.generate() {
                    tracing::warn!(%err, "generation failed, showing placeholder");
                }
            }
        });
    }

    fn render_display_window<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        if !self.state.show_display_window {
            return;
        }
        let mut open = true;
        let state = &mut self.state;
        frontend.window(DISPLAY_WINDOW_TITLE, Some(&mut open), &mut |ui| {
            match state.current_equation() {
                Some(eq) => ui.text(&eq.to_string()),
                None => ui.text(NO_EQUATION_MESSAGE),
            }
            if ui.button("Close") {
                state.close_display();
            }
        });
        if !open {
            self.state.close_display();
        }
    }

    fn render_welcome_panel<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        let greeting = format!("Welcome, {}", self.config.user_name);
        let clicks = &mut self.welcome_clicks;
        frontend.window(WELCOME_WINDOW_TITLE, None, &mut |ui| {
            ui.text(&greeting);
            if ui.button("Button") {
                *clicks += 1;
            }
            ui.text(&format!("counter = {}", clicks));
        });
    }
}
