use crate::data::model::{Point, Series};
use crate::error::{AnalysisError, Result};

/// Trapezoidal integral of the series between the x-coordinates of two
/// points, bounds inclusive.
///
/// Samples are filtered by `lo <= x <= hi` in their stored order; nothing is
/// interpolated at the edges. A single surviving sample integrates to zero.
pub fn integrate(series: &Series, p1: Point, p2: Point) -> Result<f64> {
    let lo = p1.x.min(p2.x);
    let hi = p1.x.max(p2.x);

    let (xs, ys): (Vec<f64>, Vec<f64>) = series
        .pairs()
        .filter(|&(x, _)| lo <= x && x <= hi)
        .unzip();

    if xs.is_empty() {
        return Err(AnalysisError::EmptyInterval);
    }
    Ok(trapezoid(&xs, &ys))
}

fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xw, yw)| 0.5 * (xw[1] - xw[0]) * (yw[0] + yw[1]))
        .sum()
}
