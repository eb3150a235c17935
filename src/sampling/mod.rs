//! Point generation and sampling algorithms.

mod uniform;

pub use uniform::{CountLaw, PointSampler};
