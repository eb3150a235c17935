//! Point-in-polytope membership with explicit tolerance.

use crate::error::PunctumError;
use crate::hull::ConvexRegion;

/// Default slack for facet evaluations, absorbing floating-point error at
/// region boundaries.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Tests whether a point lies inside a convex region.
///
/// Uses [`DEFAULT_TOLERANCE`] as the boundary slack; see
/// [`in_hull_with_tolerance`] for the exact semantics.
///
/// # Example
///
/// ```
/// use punctum::{in_hull, ConvexRegion};
///
/// let square = ConvexRegion::unit_box(2)?;
///
/// assert!(in_hull(&[0.5, 0.5], &square)?);
/// assert!(!in_hull(&[1.5, 0.5], &square)?);
/// # Ok::<(), punctum::PunctumError>(())
/// ```
#[inline]
pub fn in_hull(point: &[f64], region: &ConvexRegion) -> Result<bool, PunctumError> {
    in_hull_with_tolerance(point, region, DEFAULT_TOLERANCE)
}

/// Tests whether a point satisfies every facet inequality of a region.
///
/// The point is inside iff `normal · point + offset <= tol` holds for all
/// facets. The tolerance is inclusive slack: a point exactly on a facet, or
/// outside it by at most `tol`, is classified as inside.
///
/// Pure and side-effect free, so it is safe to call from concurrent
/// sampling trials.
///
/// # Errors
///
/// Returns [`PunctumError::DimensionMismatch`] when the point's length does
/// not equal the region's dimension. The check is explicit; coordinates are
/// never silently truncated or zero-extended.
pub fn in_hull_with_tolerance(
    point: &[f64],
    region: &ConvexRegion,
    tol: f64,
) -> Result<bool, PunctumError> {
    if point.len() != region.dim() {
        return Err(PunctumError::DimensionMismatch {
            expected: region.dim(),
            actual: point.len(),
        });
    }
    Ok(region.facets().iter().all(|facet| facet.evaluate(point) <= tol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::HalfSpace;

    /// The square [0,1] x [0,1] written out as x >= 0, x <= 1, y >= 0, y <= 1.
    fn unit_square() -> ConvexRegion {
        ConvexRegion::new(
            2,
            vec![
                HalfSpace::new(vec![-1.0, 0.0], 0.0),
                HalfSpace::new(vec![1.0, 0.0], -1.0),
                HalfSpace::new(vec![0.0, -1.0], 0.0),
                HalfSpace::new(vec![0.0, 1.0], -1.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_interior_point() {
        assert!(in_hull(&[0.5, 0.5], &unit_square()).unwrap());
    }

    #[test]
    fn test_exterior_point() {
        assert!(!in_hull(&[1.5, 0.5], &unit_square()).unwrap());
    }

    #[test]
    fn test_boundary_point_is_inside() {
        // Exactly on the x = 1 facet
        assert!(in_hull(&[1.0, 0.5], &unit_square()).unwrap());
        // A corner
        assert!(in_hull(&[0.0, 0.0], &unit_square()).unwrap());
    }

    #[test]
    fn test_tolerance_slack() {
        let square = unit_square();

        // Outside by less than the default tolerance: inside
        assert!(in_hull(&[1.0 + 1e-12, 0.5], &square).unwrap());
        // Outside by more: outside
        assert!(!in_hull(&[1.0 + 1e-3, 0.5], &square).unwrap());
        // Unless the caller loosens the tolerance
        assert!(in_hull_with_tolerance(&[1.0 + 1e-3, 0.5], &square, 1e-2).unwrap());
    }

    #[test]
    fn test_zero_tolerance() {
        let square = unit_square();
        assert!(in_hull_with_tolerance(&[1.0, 0.5], &square, 0.0).unwrap());
        assert!(!in_hull_with_tolerance(&[1.0 + f64::EPSILON, 0.5], &square, 0.0).unwrap());
    }

    #[test]
    fn test_dimension_mismatch() {
        assert_eq!(
            in_hull(&[0.5, 0.5, 0.5], &unit_square()),
            Err(PunctumError::DimensionMismatch {
                expected: 2,
                actual: 3,
            })
        );
        assert_eq!(
            in_hull(&[0.5], &unit_square()),
            Err(PunctumError::DimensionMismatch {
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_region_without_facets_contains_everything() {
        // No facets means no constraints; the whole space passes
        let region = ConvexRegion::new(2, Vec::new()).unwrap();
        assert!(in_hull(&[100.0, -100.0], &region).unwrap());
    }
}
