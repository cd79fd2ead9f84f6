use std::path::PathBuf;

use eframe::egui::Rect;
use log::debug;

use crate::config::Settings;
use crate::data::model::Series;
use crate::session::{Command, Effect, Session};

// ---------------------------------------------------------------------------
// Plot handle
// ---------------------------------------------------------------------------

/// What is currently drawn. Rebuilt on render/redraw, never edited.
pub struct PlotView {
    pub points: Vec<[f64; 2]>,
}

impl PlotView {
    fn from_series(series: &Series) -> Self {
        Self {
            points: series.pairs().map(|(x, y)| [x, y]).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub settings: Settings,

    /// Current spectrum and selection.
    pub session: Session,

    /// Message box lines, oldest first.
    pub messages: Vec<String>,

    /// Plot handle (None until "Plot Data").
    pub plot: Option<PlotView>,

    /// Screen rectangle of the plot in the last frame, for cropping captures.
    pub plot_rect: Option<Rect>,

    /// Where the next viewport capture should be written.
    pub pending_save: Option<PathBuf>,

    /// A capture was requested and not yet sent to the viewport.
    pub capture_requested: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let session = Session::new(settings.data_suffix.clone());
        Self {
            settings,
            session,
            messages: Vec::new(),
            plot: None,
            plot_rect: None,
            pending_save: None,
            capture_requested: false,
        }
    }

    /// Run a command through the session and carry out its effects.
    pub fn run(&mut self, command: Command) {
        debug!("Command {command:?}");
        let effects = self.session.dispatch(command);
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Report(message) => self.messages.push(message),
            Effect::Render(series) | Effect::Redraw(series) => {
                self.plot = Some(PlotView::from_series(&series));
            }
            Effect::ClosePlot => {
                self.plot = None;
                self.plot_rect = None;
            }
            Effect::SaveRendered(path) => {
                self.pending_save = Some(path);
                self.capture_requested = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_applies_effects() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "0 1\n1 2\n").unwrap();

        let mut state = AppState::new(Settings::default());
        state.run(Command::PlotData);
        assert_eq!(state.messages, vec!["Data is not loaded. Load data first"]);
        assert!(state.plot.is_none());

        state.run(Command::LoadData(Some(dir.path().to_path_buf())));
        state.run(Command::PlotData);
        let plot = state.plot.as_ref().unwrap();
        assert_eq!(plot.points, vec![[0.0, 1.0], [1.0, 2.0]]);

        state.run(Command::SaveFigure(Some(dir.path().join("fig"))));
        assert!(state.capture_requested);
        assert_eq!(state.pending_save, Some(dir.path().join("fig.png")));
    }

    #[test]
    fn test_reload_drops_plot() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "0 1\n1 2\n").unwrap();

        let mut state = AppState::new(Settings::default());
        state.run(Command::LoadData(Some(dir.path().to_path_buf())));
        state.run(Command::PlotData);
        state.run(Command::LoadData(Some(dir.path().to_path_buf())));
        assert!(state.plot.is_none());
    }

    #[test]
    fn test_custom_suffix_reaches_loader() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.dat"), "0 1\n").unwrap();
        std::fs::write(dir.path().join("b.txt"), "0 1\n").unwrap();

        let settings = Settings {
            data_suffix: ".dat".to_string(),
            ..Settings::default()
        };
        let mut state = AppState::new(settings);
        state.run(Command::LoadData(Some(dir.path().to_path_buf())));
        assert_eq!(state.messages, vec!["Read 1 lines of data", "Faulty: b.txt"]);
    }
}
