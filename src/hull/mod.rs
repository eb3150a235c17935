//! Convex regions and point-in-polytope membership.
//!
//! A region is an intersection of half-spaces, each written as
//! `normal · x + offset <= 0`, the facet-equation form produced by convex
//! hull codes. Regions are usually supplied by an external hull routine;
//! for the two-dimensional case [`ConvexRegion::from_points`] builds the
//! facet equations directly from a vertex set.

mod membership;
mod region;

pub use membership::{in_hull, in_hull_with_tolerance, DEFAULT_TOLERANCE};
pub use region::{ConvexRegion, HalfSpace};
