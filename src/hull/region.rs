//! Convex polytopes as intersections of half-spaces.

use std::cmp::Ordering;

use crate::error::PunctumError;

/// A single facet constraint of the form `normal · x + offset <= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct HalfSpace {
    normal: Vec<f64>,
    offset: f64,
}

impl HalfSpace {
    /// Creates a half-space from its facet equation coefficients.
    pub fn new(normal: Vec<f64>, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// The facet normal.
    pub fn normal(&self) -> &[f64] {
        &self.normal
    }

    /// The scalar offset of the facet equation.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Evaluates `normal · point + offset`.
    ///
    /// Negative inside, positive outside, zero on the facet. When the normal
    /// has unit length this is the signed distance to the facet plane. The
    /// point is assumed to have the same length as the normal; membership
    /// tests check this before calling.
    pub fn evaluate(&self, point: &[f64]) -> f64 {
        let dot: f64 = self.normal.iter().zip(point).map(|(n, x)| n * x).sum();
        dot + self.offset
    }
}

/// A bounded convex region in d-dimensional space, described by the
/// half-space inequalities of its facets.
///
/// # Example
///
/// ```
/// use punctum::{in_hull, ConvexRegion};
///
/// let triangle = ConvexRegion::from_points(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]])?;
///
/// assert!(in_hull(&[0.25, 0.25], &triangle)?);
/// assert!(!in_hull(&[0.75, 0.75], &triangle)?);
/// # Ok::<(), punctum::PunctumError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexRegion {
    dim: usize,
    facets: Vec<HalfSpace>,
}

impl ConvexRegion {
    /// Creates a region from its dimension and facet inequalities.
    ///
    /// Every facet normal must have exactly `dim` coordinates. The facets
    /// are taken as given; no check is made that they bound a non-empty
    /// (or bounded) region.
    pub fn new(dim: usize, facets: Vec<HalfSpace>) -> Result<Self, PunctumError> {
        if dim == 0 {
            return Err(PunctumError::ZeroDimension);
        }
        for facet in &facets {
            if facet.normal().len() != dim {
                return Err(PunctumError::DimensionMismatch {
                    expected: dim,
                    actual: facet.normal().len(),
                });
            }
        }
        Ok(Self { dim, facets })
    }

    /// The unit box `[0,1]^dim` as `2 * dim` facet inequalities.
    pub fn unit_box(dim: usize) -> Result<Self, PunctumError> {
        if dim == 0 {
            return Err(PunctumError::ZeroDimension);
        }
        let mut facets = Vec::with_capacity(2 * dim);
        for axis in 0..dim {
            // -x_axis <= 0 and x_axis - 1 <= 0
            let mut low = vec![0.0; dim];
            low[axis] = -1.0;
            facets.push(HalfSpace::new(low, 0.0));
            let mut high = vec![0.0; dim];
            high[axis] = 1.0;
            facets.push(HalfSpace::new(high, -1.0));
        }
        Ok(Self { dim, facets })
    }

    /// Builds a two-dimensional region from the convex hull of a vertex set.
    ///
    /// Computes the hull with Andrew's monotone chain algorithm, then emits
    /// one facet per hull edge with an outward-pointing unit normal.
    /// Interior and duplicate vertices are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`PunctumError::DegenerateRegion`] when the vertices span
    /// fewer than 3 hull corners (all coincident or collinear).
    ///
    /// # Example
    ///
    /// ```
    /// use punctum::ConvexRegion;
    ///
    /// let square = ConvexRegion::from_points(&[
    ///     [0.0, 0.0],
    ///     [1.0, 0.0],
    ///     [0.5, 0.5], // Interior point
    ///     [1.0, 1.0],
    ///     [0.0, 1.0],
    /// ])?;
    ///
    /// assert_eq!(square.facets().len(), 4);
    /// # Ok::<(), punctum::PunctumError>(())
    /// ```
    pub fn from_points(points: &[[f64; 2]]) -> Result<Self, PunctumError> {
        let hull = monotone_chain(points);
        if hull.len() < 3 {
            return Err(PunctumError::DegenerateRegion);
        }

        let mut facets = Vec::with_capacity(hull.len());
        for i in 0..hull.len() {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];

            // Outward normal of a CCW edge, scaled to unit length
            let dx = b[0] - a[0];
            let dy = b[1] - a[1];
            let len = (dx * dx + dy * dy).sqrt();
            let normal = vec![dy / len, -dx / len];

            let offset = -(normal[0] * a[0] + normal[1] * a[1]);
            facets.push(HalfSpace::new(normal, offset));
        }

        Ok(Self { dim: 2, facets })
    }

    /// The dimension of the ambient space.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The facet inequalities.
    pub fn facets(&self) -> &[HalfSpace] {
        &self.facets
    }
}

/// Cross product of (b - a) and (c - a), twice the signed triangle area.
fn cross(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

/// Convex hull via Andrew's monotone chain, vertices in CCW order.
///
/// Collinear points are dropped, so the result is the minimal vertex set.
/// Fewer than 3 distinct input points come back as-is.
fn monotone_chain(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    // Sort points lexicographically
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a[0].partial_cmp(&b[0])
            .unwrap_or(Ordering::Equal)
            .then_with(|| a[1].partial_cmp(&b[1]).unwrap_or(Ordering::Equal))
    });
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    // Build lower hull
    let mut lower: Vec<[f64; 2]> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    // Build upper hull
    let mut upper: Vec<[f64; 2]> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // Remove last point of each half because it's repeated
    lower.pop();
    upper.pop();

    lower.extend(upper);
    lower
}
