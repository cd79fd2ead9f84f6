//! The two calculations driven by a pair of selected points.

pub mod background;
pub mod intensity;

pub use background::FitLine;
pub use intensity::integrate;
