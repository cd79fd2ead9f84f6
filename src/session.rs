//! Session controller.
//!
//! [`Session`] owns the current spectrum, the plotted flag and the point
//! selection, and is the only thing that mutates them. Every user action is
//! a [`Command`]; handling one returns the [`Effect`]s the front end has to
//! carry out (messages, plot updates, figure captures). The session itself
//! never touches widgets, dialogs or the file system beyond aggregation.

use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::analysis::{self, FitLine};
use crate::data::loader::{self, LoadResult};
use crate::data::model::{Point, Series};
use crate::error::{AnalysisError, Precondition, Result};
use crate::selection::{Mode, PointOutcome, Selection};

/// Something the user did.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Folder picked in the dialog (`None` when the dialog was cancelled).
    LoadData(Option<PathBuf>),
    PlotData,
    RemoveLinearDependency,
    CalculateIntensity,
    /// Save target picked in the dialog, without the forced `.png`.
    SaveFigure(Option<PathBuf>),
    /// Click on the plot, in data coordinates.
    PlotClick { x: f64, y: f64 },
    /// The front end finished writing a requested figure.
    SaveFinished {
        path: PathBuf,
        outcome: std::result::Result<(), String>,
    },
}

/// Something the front end must do in response.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append a line to the message box.
    Report(String),
    /// Create the plot for this series.
    Render(Series),
    /// Replace the data on the existing plot.
    Redraw(Series),
    /// Drop the existing plot.
    ClosePlot,
    /// Capture the rendered plot as PNG at this path, then send
    /// [`Command::SaveFinished`].
    SaveRendered(PathBuf),
}

#[derive(Debug)]
pub struct Session {
    suffix: String,
    series: Option<Series>,
    plotted: bool,
    selection: Selection,
}

impl Session {
    /// New empty session reading files that end in `suffix`.
    pub fn new(suffix: impl Into<String>) -> Self {
        Session {
            suffix: suffix.into(),
            series: None,
            plotted: false,
            selection: Selection::default(),
        }
    }

    pub fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    pub fn is_plotted(&self) -> bool {
        self.plotted
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Handle one command and return the resulting effects in order.
    pub fn dispatch(&mut self, command: Command) -> Vec<Effect> {
        let mut fx = Vec::new();
        match command {
            Command::LoadData(folder) => self.load_data(folder.as_deref(), &mut fx),
            Command::PlotData => self.plot_data(&mut fx),
            Command::RemoveLinearDependency => {
                self.two_point_operation(Mode::AwaitingDependencyPoints, &mut fx)
            }
            Command::CalculateIntensity => {
                self.two_point_operation(Mode::AwaitingIntensityPoints, &mut fx)
            }
            Command::SaveFigure(target) => self.save_figure(target, &mut fx),
            Command::PlotClick { x, y } => self.plot_click(x, y, &mut fx),
            Command::SaveFinished { path, outcome } => match outcome {
                Ok(()) => report(&mut fx, format!("File saved to {}", path.display())),
                Err(e) => {
                    error!("Failed to save {}: {e}", path.display());
                    report(&mut fx, "Unable to save file. Please try again");
                }
            },
        }
        fx
    }

    // -- Load / plot ----------------------------------------------------------

    fn load_data(&mut self, folder: Option<&Path>, fx: &mut Vec<Effect>) {
        let Some(folder) = folder else {
            report(fx, "Folder does not exist. Please try again");
            return;
        };

        let mut result: LoadResult = match loader::aggregate(folder, &self.suffix) {
            Ok(result) => result,
            Err(e) => {
                report(fx, e.to_string());
                return;
            }
        };

        match result.series.take() {
            Some(series) => {
                info!(
                    "Loaded {} samples from {} file(s)",
                    series.len(),
                    result.files_read
                );
                report(fx, format!("Read {} lines of data", series.len()));
                self.series = Some(series);
                self.selection.exit_mode();
                if self.plotted {
                    self.plotted = false;
                    fx.push(Effect::ClosePlot);
                }
            }
            None => report(fx, AnalysisError::NoReadableFiles.to_string()),
        }

        for faulty in &result.faulty_files {
            warn!("Skipped {}: {}", faulty.name, faulty.reason);
            report(fx, format!("Faulty: {}", faulty.name));
        }
    }

    fn plot_data(&mut self, fx: &mut Vec<Effect>) {
        let Some(series) = &self.series else {
            report_unmet(fx, Precondition::NothingToPlot);
            return;
        };
        if self.plotted {
            report_unmet(fx, Precondition::AlreadyPlotted);
            return;
        }
        fx.push(Effect::Render(series.clone()));
        self.plotted = true;
    }

    fn require_plotted(&self) -> Result<()> {
        match (&self.series, self.plotted) {
            (None, _) => Err(AnalysisError::PreconditionUnmet(Precondition::DataNotLoaded)),
            (Some(_), false) => Err(AnalysisError::PreconditionUnmet(Precondition::NotPlotted)),
            (Some(_), true) => Ok(()),
        }
    }

    // -- Two-point operations -------------------------------------------------

    /// First press enters the mode; a press with two points buffered runs it.
    fn two_point_operation(&mut self, mode: Mode, fx: &mut Vec<Effect>) {
        if let Err(e) = self.require_plotted() {
            report(fx, e.to_string());
            return;
        }

        self.selection.enter_mode(mode);
        let (p1, p2) = match self.selection.pair() {
            Ok(pair) => pair,
            Err(e) => {
                report(fx, e.to_string());
                self.selection.reset();
                return;
            }
        };

        let outcome = match mode {
            Mode::AwaitingDependencyPoints => self.remove_background(p1, p2, fx),
            Mode::AwaitingIntensityPoints => self.calculate_intensity(p1, p2, fx),
            Mode::Idle => return,
        };

        match outcome {
            Ok(()) => self.selection.exit_mode(),
            Err(e) => {
                report(fx, e.to_string());
                self.selection.reset();
            }
        }
    }

    fn remove_background(&mut self, p1: Point, p2: Point, fx: &mut Vec<Effect>) -> Result<()> {
        let Some(series) = &self.series else {
            return Err(AnalysisError::PreconditionUnmet(Precondition::DataNotLoaded));
        };
        let line = FitLine::fit(p1, p2)?;
        info!(
            "Removing background slope={:.4} intercept={:.4}",
            line.slope, line.intercept
        );
        let corrected = line.apply(series);
        fx.push(Effect::Redraw(corrected.clone()));
        self.series = Some(corrected);
        report(fx, "Linear dependency removed.");
        Ok(())
    }

    fn calculate_intensity(&self, p1: Point, p2: Point, fx: &mut Vec<Effect>) -> Result<()> {
        let Some(series) = &self.series else {
            return Err(AnalysisError::PreconditionUnmet(Precondition::DataNotLoaded));
        };
        let value = analysis::integrate(series, p1, p2)?;
        info!("Intensity between x={:.2} and x={:.2}: {value}", p1.x, p2.x);
        report(fx, format!("Intensity: {}", two_decimals(value)));
        Ok(())
    }

    fn plot_click(&mut self, x: f64, y: f64, fx: &mut Vec<Effect>) {
        let Some(series) = &self.series else {
            report(fx, AnalysisError::NoModeActive.to_string());
            return;
        };

        let before = self.selection.points().len();
        match self.selection.submit_point(x, y, series) {
            Err(e) => report(fx, e.to_string()),
            Ok(PointOutcome::OutsideGraph) => {
                report(fx, "Point selected is outside the graph");
            }
            Ok(PointOutcome::Accepted { .. }) => {
                report(fx, format!("Point selected = {}", Point::new(x, y)));
            }
            Ok(PointOutcome::ReadyToCompute) => {
                if self.selection.points().len() > before {
                    report(fx, format!("Point selected = {}", Point::new(x, y)));
                }
                if let Some(label) = self.selection.mode().button_label() {
                    report(fx, format!("Click '{label}' again"));
                }
            }
        }
    }

    // -- Save -----------------------------------------------------------------

    fn save_figure(&mut self, target: Option<PathBuf>, fx: &mut Vec<Effect>) {
        if let Err(e) = self.require_plotted() {
            report(fx, e.to_string());
            return;
        }
        let Some(target) = target else {
            report(fx, "Unable to save file. Please try again");
            return;
        };
        fx.push(Effect::SaveRendered(with_png_suffix(target)));
    }
}

fn report(fx: &mut Vec<Effect>, message: impl Into<String>) {
    fx.push(Effect::Report(message.into()));
}

fn report_unmet(fx: &mut Vec<Effect>, precondition: Precondition) {
    report(fx, AnalysisError::PreconditionUnmet(precondition).to_string());
}

/// `.png` is always appended, even to a name that already ends in it.
fn with_png_suffix(path: PathBuf) -> PathBuf {
    let mut raw = path.into_os_string();
    raw.push(".png");
    PathBuf::from(raw)
}

/// Two decimals without a stray minus on values that round to zero.
fn two_decimals(value: f64) -> String {
    let shown = format!("{value:.2}");
    if shown == "-0.00" {
        "0.00".to_string()
    } else {
        shown
    }
}
