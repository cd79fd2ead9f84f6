use std::fmt;

use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// Point – a raw plot click
// ---------------------------------------------------------------------------

/// A coordinate delivered by a click on the plot, in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2} , {:.2})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Series – the aggregated spectrum
// ---------------------------------------------------------------------------

/// One spectrum: binding-energy axis (x) and summed intensity (y).
///
/// Both axes always have the same, non-zero length. Transforms build a new
/// `Series` rather than editing one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Pair up two axes, rejecting empty or mismatched ones.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.is_empty() || x.len() != y.len() {
            return Err(AnalysisError::MismatchedAxes {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Series { x, y })
    }

    /// Same x-axis, new y-axis. Caller guarantees the length.
    pub(crate) fn with_y(&self, y: Vec<f64>) -> Self {
        debug_assert_eq!(self.x.len(), y.len());
        Series {
            x: self.x.clone(),
            y,
        }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// `(x, y)` pairs in sample order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_rejects_mismatched_axes() {
        let err = Series::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert_eq!(err, AnalysisError::MismatchedAxes { x: 2, y: 1 });
    }

    #[test]
    fn test_series_rejects_empty() {
        assert!(Series::new(Vec::new(), Vec::new()).is_err());
    }

    #[test]
    fn test_pairs_keep_order() {
        let s = Series::new(vec![3.0, 1.0, 2.0], vec![30.0, 10.0, 20.0]).unwrap();
        let pairs: Vec<_> = s.pairs().collect();
        assert_eq!(pairs, vec![(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_point_display_two_decimals() {
        assert_eq!(Point::new(1.234, -5.0).to_string(), "(1.23 , -5.00)");
    }
}
