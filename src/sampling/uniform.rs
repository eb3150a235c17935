//! Uniform point configurations with binomial or Poisson counts.
//!
//! A [`PointSampler`] draws points uniformly from the unit hypercube
//! `[0,1)^d`, or from a convex region inside it via rejection sampling.
//! The total count is either fixed (binomial law) or itself random, drawn
//! once from a Poisson distribution (Poisson law).

use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;

use log::warn;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

use crate::error::PunctumError;
use crate::hull::{in_hull, ConvexRegion};

/// How the total point count of a configuration is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountLaw {
    /// Exact count, fixed by the caller.
    Binomial,
    /// Count drawn once from a Poisson distribution with a given mean.
    Poisson,
}

impl FromStr for CountLaw {
    type Err = PunctumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binomial" => Ok(CountLaw::Binomial),
            "poisson" => Ok(CountLaw::Poisson),
            other => Err(PunctumError::UnknownLaw(other.to_string())),
        }
    }
}

impl fmt::Display for CountLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountLaw::Binomial => f.write_str("binomial"),
            CountLaw::Poisson => f.write_str("poisson"),
        }
    }
}

/// Rejected candidates per point before the stall warning fires.
const STALL_WARN_ATTEMPTS: usize = 100_000;

/// Generates a random point configuration in the unit hypercube or a convex
/// region inside it.
///
/// The configuration is drawn lazily on the first call to [`points`] and
/// cached for the lifetime of the sampler; the same sampler always returns
/// the same coordinates. Construct a new sampler (with a different seed) to
/// get a different draw.
///
/// [`points`]: PointSampler::points
///
/// # Example
///
/// ```
/// use punctum::{ConvexRegion, PointSampler};
///
/// let triangle = ConvexRegion::from_points(&[[0.1, 0.1], [0.9, 0.1], [0.5, 0.9]])?;
/// let sampler = PointSampler::binomial_with_seed(100, 2, 42)?.in_region(triangle)?;
///
/// assert_eq!(sampler.points()?.len(), 100);
/// # Ok::<(), punctum::PunctumError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PointSampler {
    n: usize,
    dim: usize,
    seed: Option<u64>,
    law: CountLaw,
    region: Option<ConvexRegion>,
    max_attempts: Option<usize>,
    cache: OnceCell<Vec<Vec<f64>>>,
}

impl PointSampler {
    /// Creates a binomial (exact-count) sampler over `[0,1)^dim`.
    ///
    /// Unseeded: every sampler draws a different configuration.
    pub fn binomial(n: usize, dim: usize) -> Result<Self, PunctumError> {
        Self::from_parts(CountLaw::Binomial, n, dim, None)
    }

    /// Creates a binomial sampler with a fixed seed.
    ///
    /// Samplers built with the same `(n, dim, seed)` produce identical
    /// configurations.
    pub fn binomial_with_seed(n: usize, dim: usize, seed: u64) -> Result<Self, PunctumError> {
        Self::from_parts(CountLaw::Binomial, n, dim, Some(seed))
    }

    /// Creates a Poisson-law sampler: the point count itself is random.
    ///
    /// The count is drawn here, once, from a Poisson distribution with the
    /// given mean; it is fixed for the sampler's lifetime and never
    /// re-drawn.
    ///
    /// # Errors
    ///
    /// Returns [`PunctumError::InvalidMean`] when `mean` is negative, NaN,
    /// or infinite.
    pub fn poisson(mean: f64, dim: usize) -> Result<Self, PunctumError> {
        let n = draw_poisson_count(mean, None)?;
        Self::from_parts(CountLaw::Poisson, n, dim, None)
    }

    /// Creates a Poisson-law sampler with a fixed seed.
    ///
    /// The seed determines both the resolved count and the coordinates.
    pub fn poisson_with_seed(mean: f64, dim: usize, seed: u64) -> Result<Self, PunctumError> {
        let n = draw_poisson_count(mean, Some(seed))?;
        Self::from_parts(CountLaw::Poisson, n, dim, Some(seed))
    }

    fn from_parts(
        law: CountLaw,
        n: usize,
        dim: usize,
        seed: Option<u64>,
    ) -> Result<Self, PunctumError> {
        if dim == 0 {
            return Err(PunctumError::ZeroDimension);
        }
        Ok(Self {
            n,
            dim,
            seed,
            law,
            region: None,
            max_attempts: None,
            cache: OnceCell::new(),
        })
    }

    /// Restricts sampling to a convex region via rejection sampling.
    ///
    /// Candidates are drawn from the unit hypercube and kept only if they
    /// pass the membership test, so the region should lie inside
    /// `[0,1)^dim`; facets outside the hypercube never reject anything.
    ///
    /// # Errors
    ///
    /// Returns [`PunctumError::DimensionMismatch`] when the region's
    /// dimension differs from the sampler's.
    pub fn in_region(mut self, region: ConvexRegion) -> Result<Self, PunctumError> {
        if region.dim() != self.dim {
            return Err(PunctumError::DimensionMismatch {
                expected: self.dim,
                actual: region.dim(),
            });
        }
        self.region = Some(region);
        Ok(self)
    }

    /// Caps the rejection loop at `attempts` candidates per point.
    ///
    /// Without a cap the loop runs until acceptance, which may be forever
    /// for a region of near-zero volume. With a cap, exceeding it makes
    /// [`points`](PointSampler::points) fail with
    /// [`PunctumError::SamplingTimeout`]. Has no effect when no region is
    /// attached.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// The resolved point count.
    ///
    /// For the Poisson law this is the count drawn at construction, not the
    /// mean that was requested.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The dimension of the sampled points.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The count law the sampler was built with.
    pub fn law(&self) -> CountLaw {
        self.law
    }

    /// The seed, if one was given.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The bounding region, if one is attached.
    pub fn region(&self) -> Option<&ConvexRegion> {
        self.region.as_ref()
    }

    /// The sampled point configuration: `n()` rows of `dim()` coordinates,
    /// each in `[0, 1)`.
    ///
    /// Computed on the first call and cached; repeated calls return the
    /// same slice without drawing new randomness. With a seed, the
    /// configuration is reproducible, including the rejection-sampled case,
    /// where a single seeded generator is reused across all trials.
    ///
    /// # Errors
    ///
    /// Returns [`PunctumError::SamplingTimeout`] when a region is attached,
    /// a cap was set with
    /// [`with_max_attempts`](PointSampler::with_max_attempts), and some
    /// point exhausted it.
    ///
    /// # Liveness
    ///
    /// Without a cap, rejection sampling retries until acceptance. If the
    /// region's volume fraction within the unit hypercube is near zero this
    /// call may effectively never return; a `log` warning is emitted
    /// periodically so a stalled sampler is diagnosable.
    pub fn points(&self) -> Result<&[Vec<f64>], PunctumError> {
        if let Some(points) = self.cache.get() {
            return Ok(points);
        }
        let points = self.draw()?;
        Ok(self.cache.get_or_init(|| points))
    }

    fn draw(&self) -> Result<Vec<Vec<f64>>, PunctumError> {
        let mut rng = rng_for(self.seed);
        let mut points = Vec::with_capacity(self.n);
        for _ in 0..self.n {
            points.push(self.draw_point(&mut rng)?);
        }
        assert_eq!(
            points.len(),
            self.n,
            "sampler produced {} of {} requested points",
            points.len(),
            self.n
        );
        Ok(points)
    }

    /// Draws one accepted point, rejection sampling against the region if
    /// one is attached.
    fn draw_point(&self, rng: &mut SmallRng) -> Result<Vec<f64>, PunctumError> {
        let Some(region) = &self.region else {
            return Ok((0..self.dim).map(|_| rng.gen::<f64>()).collect());
        };

        let mut attempts = 0usize;
        loop {
            let candidate: Vec<f64> = (0..self.dim).map(|_| rng.gen::<f64>()).collect();
            if in_hull(&candidate, region)? {
                return Ok(candidate);
            }

            attempts += 1;
            if let Some(cap) = self.max_attempts {
                if attempts >= cap {
                    return Err(PunctumError::SamplingTimeout { attempts: cap });
                }
            }
            if attempts % STALL_WARN_ATTEMPTS == 0 {
                warn!(
                    "rejection sampling has discarded {} candidates without an acceptance",
                    attempts
                );
            }
        }
    }
}

fn rng_for(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

fn draw_poisson_count(mean: f64, seed: Option<u64>) -> Result<usize, PunctumError> {
    if !mean.is_finite() || mean < 0.0 {
        return Err(PunctumError::InvalidMean(mean));
    }
    if mean == 0.0 {
        return Ok(0);
    }
    let poisson = Poisson::new(mean).map_err(|_| PunctumError::InvalidMean(mean))?;
    Ok(poisson.sample(&mut rng_for(seed)) as usize)
}
