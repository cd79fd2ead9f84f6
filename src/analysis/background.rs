use crate::data::model::{Point, Series};
use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// Linear background
// ---------------------------------------------------------------------------

/// Straight line through two clicked points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitLine {
    pub slope: f64,
    pub intercept: f64,
}

impl FitLine {
    /// Line through `p1` and `p2` exactly as clicked, not snapped to samples.
    pub fn fit(p1: Point, p2: Point) -> Result<Self> {
        let dx = p2.x - p1.x;
        if dx == 0.0 {
            return Err(AnalysisError::DegenerateSelection(p1.x));
        }
        Ok(FitLine {
            slope: (p2.y - p1.y) / dx,
            intercept: (p2.x * p1.y - p1.x * p2.y) / dx,
        })
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Subtract the line from every sample, keeping the x-axis.
    pub fn apply(&self, series: &Series) -> Series {
        let y = series.pairs().map(|(x, y)| y - self.eval(x)).collect();
        series.with_y(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_through_origin() {
        let line = FitLine::fit(Point::new(0.0, 0.0), Point::new(2.0, 4.0)).unwrap();
        assert_relative_eq!(line.slope, 2.0);
        assert_relative_eq!(line.intercept, 0.0);
    }

    #[test]
    fn test_fit_is_symmetric_in_point_order() {
        let a = Point::new(1.0, 5.0);
        let b = Point::new(4.0, -1.0);
        let ab = FitLine::fit(a, b).unwrap();
        let ba = FitLine::fit(b, a).unwrap();
        assert_relative_eq!(ab.slope, -2.0);
        assert_relative_eq!(ab.intercept, 7.0);
        assert_relative_eq!(ab.slope, ba.slope);
        assert_relative_eq!(ab.intercept, ba.intercept);
    }

    #[test]
    fn test_fit_rejects_equal_x() {
        let err = FitLine::fit(Point::new(3.0, 1.0), Point::new(3.0, 9.0)).unwrap_err();
        assert_eq!(err, AnalysisError::DegenerateSelection(3.0));
    }

    #[test]
    fn test_apply_subtracts_line() {
        let series = Series::new(vec![0.0, 1.0, 2.0], vec![5.0, 5.0, 5.0]).unwrap();
        let line = FitLine::fit(Point::new(0.0, 0.0), Point::new(2.0, 4.0)).unwrap();
        let out = line.apply(&series);
        assert_eq!(out.x(), series.x());
        assert_eq!(out.y(), &[5.0, 3.0, 1.0]);
        // input untouched
        assert_eq!(series.y(), &[5.0, 5.0, 5.0]);
    }
}
