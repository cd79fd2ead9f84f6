//! Two-point selection state machine.
//!
//! A [`Selection`] remembers which operation the user asked for and collects
//! the plot clicks meant for it. Mode and buffer are kept in step: the buffer
//! is emptied whenever the mode changes, so points gathered for one operation
//! never leak into another.

use log::debug;

use crate::data::model::{Point, Series};
use crate::error::{AnalysisError, Result};

const CAPACITY: usize = 2;

/// Which two-point operation is collecting clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    AwaitingDependencyPoints,
    AwaitingIntensityPoints,
}

impl Mode {
    /// Label of the button that started this mode.
    pub fn button_label(self) -> Option<&'static str> {
        match self {
            Mode::Idle => None,
            Mode::AwaitingDependencyPoints => Some("Remove Linear Dependency"),
            Mode::AwaitingIntensityPoints => Some("Calculate Intensities"),
        }
    }
}

/// What happened to a submitted click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// Stored; `count` points are now buffered.
    Accepted { count: usize },
    /// Outside the rounded domain or range of the series; nothing stored.
    OutsideGraph,
    /// Two points are buffered and the calculation can run.
    ReadyToCompute,
}

#[derive(Debug, Default)]
pub struct Selection {
    mode: Mode,
    points: Vec<Point>,
}

impl Selection {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Switch to `requested`. Staying in the same mode keeps the buffer.
    pub fn enter_mode(&mut self, requested: Mode) {
        if requested != self.mode {
            debug!("Selection mode {:?} -> {requested:?}", self.mode);
            self.mode = requested;
            self.points.clear();
        }
    }

    /// Validate a raw click against `series` and buffer it.
    ///
    /// Validation is deliberately coarse: the click is accepted when its
    /// rounded x equals the rounded x of *some* sample and its rounded y
    /// equals the rounded y of *some* sample, not necessarily the same one.
    pub fn submit_point(&mut self, x: f64, y: f64, series: &Series) -> Result<PointOutcome> {
        if self.mode == Mode::Idle {
            return Err(AnalysisError::NoModeActive);
        }
        if !within_rounded_bounds(x, y, series) {
            return Ok(PointOutcome::OutsideGraph);
        }
        if self.points.len() < CAPACITY {
            self.points.push(Point::new(x, y));
        }
        if self.points.len() == CAPACITY {
            Ok(PointOutcome::ReadyToCompute)
        } else {
            Ok(PointOutcome::Accepted {
                count: self.points.len(),
            })
        }
    }

    /// The buffered pair, if there are exactly two points.
    pub fn pair(&self) -> Result<(Point, Point)> {
        match self.points.as_slice() {
            [a, b] => Ok((*a, *b)),
            other => Err(AnalysisError::WrongPointCount { found: other.len() }),
        }
    }

    /// Empty the buffer, keep the mode.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Back to idle with an empty buffer.
    pub fn exit_mode(&mut self) {
        self.enter_mode(Mode::Idle);
        self.points.clear();
    }
}

// Ties round to even.
fn within_rounded_bounds(x: f64, y: f64, series: &Series) -> bool {
    let rx = x.round_ties_even();
    let ry = y.round_ties_even();
    series.x().iter().any(|v| v.round_ties_even() == rx)
        && series.y().iter().any(|v| v.round_ties_even() == ry)
}
