//! `egui` adapter and the `eframe` desktop host.

use eframe::egui;

use crate::presenter::{Frontend, Presenter, PresenterConfig, Widgets};

impl Widgets for egui::Ui {
    fn text(&mut self, text: &str) {
        egui::Ui::label(self, text);
    }

    fn separator(&mut self) {
        egui::Ui::separator(self);
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        egui::Ui::checkbox(self, value, label).changed()
    }

    fn radio_button(&mut self, label: &str, value: &mut i32, choice: i32) -> bool {
        egui::Ui::radio_value(self, value, choice, label).clicked()
    }

    fn button(&mut self, label: &str) -> bool {
        egui::Ui::button(self, label).clicked()
    }
}

/// Draws presenter containers into one `egui` context for the current frame.
pub struct EguiFrontend<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiFrontend<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl Frontend for EguiFrontend<'_> {
    fn window(
        &mut self,
        title: &str,
        open: Option<&mut bool>,
        add_contents: &mut dyn FnMut(&mut dyn Widgets),
    ) {
        let mut window = egui::Window::new(title).resizable(false).collapsible(false);
        if let Some(open) = open {
            window = window.open(open);
        }
        window.show(self.ctx, |ui| add_contents(ui));
    }

    fn modal(&mut self, title: &str, add_contents: &mut dyn FnMut(&mut dyn Widgets)) {
        egui::Modal::new(egui::Id::new(title)).show(self.ctx, |ui| {
            ui.heading(title);
            add_contents(ui);
        });
    }
}

pub struct DrillApp {
    presenter: Presenter,
}

impl DrillApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: PresenterConfig) -> Self {
        tracing::info!(user = %config.user_name, "starting equation generator");
        Self { presenter: Presenter::new(config) }
    }
}

impl eframe::App for DrillApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut frontend = EguiFrontend::new(ctx);
        self.presenter.render(&mut frontend);
    }
}

/// Open the desktop window and block until it is closed.
pub fn run(config: PresenterConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Differential Equation Generator")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Differential Equation Generator",
        options,
        Box::new(|cc| Ok(Box::new(DrillApp::new(cc, config)))),
    )
}
