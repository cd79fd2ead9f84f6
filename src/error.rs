//! Error types for the analysis pipeline.
//!
//! The `Display` text of every variant is what ends up in the message log,
//! so keep it phrased for the person clicking the buttons.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors raised by aggregation, selection and the two calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The chosen folder is missing or is a regular file.
    #[error("Could not read folder")]
    NotADirectory(PathBuf),

    /// Every entry of the folder was faulty.
    #[error("No readable files. Please select another folder")]
    NoReadableFiles,

    /// x and y axes of different length (or empty).
    #[error("x has {x} values but y has {y}")]
    MismatchedAxes { x: usize, y: usize },

    /// Two points with the same x-coordinate cannot define a line.
    #[error("Both points have x = {0:.2}. Select two points with different x values.")]
    DegenerateSelection(f64),

    /// A calculation was requested with something other than two points.
    #[error("Select exactly two points.")]
    WrongPointCount { found: usize },

    /// No sample of the series lies between the two chosen x values.
    #[error("Error, Failed to select a valid interval. Please try again.")]
    EmptyInterval,

    /// A plot click arrived while no two-point operation was active.
    #[error("Please click 'Remove Linear Dependency' or 'Calculate Intensities' first.")]
    NoModeActive,

    /// An operation was invoked out of order.
    #[error("{0}")]
    PreconditionUnmet(Precondition),
}

/// Which ordering rule an operation violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    #[error("Data is not loaded. Load data first")]
    NothingToPlot,
    #[error("Data is already plotted")]
    AlreadyPlotted,
    #[error("Data is not loaded. Please load data first")]
    DataNotLoaded,
    #[error("Please plot the data first")]
    NotPlotted,
}

/// Why a single directory entry was skipped during aggregation.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("name does not end in '{0}'")]
    WrongSuffix(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file contains no data rows")]
    Empty,

    #[error("line {line}: expected 2 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: '{token}' is not a number")]
    NotANumber { line: usize, token: String },

    #[error("{found} rows but the first file has {expected}")]
    LengthMismatch { expected: usize, found: usize },
}
