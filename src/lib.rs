//! punctum - Random point configurations in convex regions
//!
//! Spatial statistics start from a point pattern. This library generates
//! uniform binomial and Poisson point configurations in the unit hypercube,
//! or in any convex polytope inside it by rejection sampling, and provides
//! the tolerance-aware membership test the rejection loop is built on.
//!
//! ```
//! use punctum::{ConvexRegion, PointSampler};
//!
//! let triangle = ConvexRegion::from_points(&[[0.1, 0.1], [0.9, 0.1], [0.5, 0.9]])?;
//! let sampler = PointSampler::binomial_with_seed(100, 2, 42)?.in_region(triangle)?;
//!
//! let points = sampler.points()?;
//! assert_eq!(points.len(), 100);
//! # Ok::<(), punctum::PunctumError>(())
//! ```

pub mod error;
pub mod hull;
pub mod sampling;

pub use error::PunctumError;
pub use hull::{in_hull, in_hull_with_tolerance, ConvexRegion, HalfSpace, DEFAULT_TOLERANCE};
pub use sampling::{CountLaw, PointSampler};
