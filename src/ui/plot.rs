use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::session::Command;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Spectrum plot (central panel)
// ---------------------------------------------------------------------------

/// Render the spectrum and forward primary clicks as point submissions.
pub fn spectrum_plot(ui: &mut Ui, state: &mut AppState) {
    let Some(view) = &state.plot else {
        state.plot_rect = None;
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Load a folder, then press Plot Data");
        });
        return;
    };

    let settings = &state.settings;
    let selected: Vec<[f64; 2]> = state
        .session
        .selection()
        .points()
        .iter()
        .map(|p| [p.x, p.y])
        .collect();

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(settings.plot_title.as_str());
    });

    let response = Plot::new("spectrum_plot")
        .legend(Legend::default())
        .x_axis_label(settings.x_label.as_str())
        .y_axis_label(settings.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = view.points.iter().copied().collect();
            plot_ui.line(
                Line::new(points)
                    .name("Intensity")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );

            if !selected.is_empty() {
                plot_ui.points(
                    Points::new(selected)
                        .name("Selected")
                        .radius(4.0)
                        .color(Color32::YELLOW),
                );
            }
        });

    state.plot_rect = Some(response.response.rect);

    if response.response.clicked() {
        if let Some(screen_pos) = response.response.interact_pointer_pos() {
            let pos = response.transform.value_from_position(screen_pos);
            state.run(Command::PlotClick { x: pos.x, y: pos.y });
        }
    }
}
