use std::path::PathBuf;

use eframe::egui::{self, RichText, ScrollArea, TextEdit, TextStyle, Ui};

use crate::session::Command;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – one button per operation
// ---------------------------------------------------------------------------

/// Render the button row.
pub fn button_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        if ui.button("Load Data").clicked() {
            let folder = open_folder_dialog();
            state.run(Command::LoadData(folder));
        }
        if ui.button("Plot Data").clicked() {
            state.run(Command::PlotData);
        }
        if ui.button("Remove Linear Dependency").clicked() {
            state.run(Command::RemoveLinearDependency);
        }
        if ui.button("Calculate Intensities").clicked() {
            state.run(Command::CalculateIntensity);
        }
        if ui.button("Save Figure").clicked() {
            // No dialog when there is nothing to save; the session reports why.
            let target = if state.session.is_plotted() {
                save_figure_dialog()
            } else {
                None
            };
            state.run(Command::SaveFigure(target));
        }
        if ui.button("Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }

        ui.separator();

        if let Some(series) = state.session.series() {
            ui.label(format!("{} samples", series.len()));
        }

        let selection = state.session.selection();
        if let Some(label) = selection.mode().button_label() {
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "{label}: {}/2 points",
                    selection.points().len()
                ))
                .strong(),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Message box
// ---------------------------------------------------------------------------

/// Read-only log of every reported message, newest at the bottom.
pub fn message_box(ui: &mut Ui, state: &AppState) {
    let mut text = state.messages.join("\n");
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui: &mut Ui| {
            ui.add(
                TextEdit::multiline(&mut text)
                    .interactive(false)
                    .font(TextStyle::Monospace)
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            );
        });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn open_folder_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Choose a folder of spectra")
        .pick_folder()
}

fn save_figure_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save your graph")
        .save_file()
}
