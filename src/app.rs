use eframe::egui;

use crate::config::Settings;
use crate::session::Command;
use crate::state::AppState;
use crate::ui::{figure, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpectralWorkbenchApp {
    pub state: AppState,
}

impl SpectralWorkbenchApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }

    /// Ask the viewport for a screenshot and, once it arrives, write it out.
    fn handle_figure_capture(&mut self, ctx: &egui::Context) {
        if self.state.capture_requested {
            self.state.capture_requested = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }

        let capture = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(capture) = capture else {
            return;
        };
        let Some(path) = self.state.pending_save.take() else {
            return;
        };

        let outcome = figure::save_png(
            &capture,
            self.state.plot_rect,
            ctx.pixels_per_point(),
            &path,
        )
        .map_err(|e| format!("{e:#}"));
        self.state.run(Command::SaveFinished { path, outcome });
    }
}

impl eframe::App for SpectralWorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: operation buttons ----
        egui::TopBottomPanel::top("button_bar").show(ctx, |ui| {
            panels::button_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: message box ----
        egui::TopBottomPanel::bottom("message_box")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| {
                panels::message_box(ui, &self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::spectrum_plot(ui, &mut self.state);
        });

        self.handle_figure_capture(ctx);
    }
}
