// File: crates/graph-core/src/sampler.rs
// Summary: Uniform sampling of a real function into plane points embedded in 3D.
// Notes:
// - A request with N intervals yields N + 1 candidate samples, both endpoints included.
// - Samples whose value is NaN or infinite are dropped, never reported as errors.

use std::convert::Infallible;
use std::ops::RangeInclusive;

use tracing::{debug, trace, warn};

use crate::error::{PlotError, Result};
use crate::geometry::{clamp, ordered};
use crate::types::Point3D;

/// Upper bound on up-front allocation for a single pass.
const PREALLOC_LIMIT: usize = 1 << 20;

/// Domain sweep and interval count for one plot.
/// Contract: `point_count >= 1`; `min_x > max_x` sweeps right to left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRequest {
    pub min_x: f64,
    pub max_x: f64,
    pub point_count: usize,
}

impl PlotRequest {
    pub const fn new(min_x: f64, max_x: f64, point_count: usize) -> Self {
        Self { min_x, max_x, point_count }
    }

    pub fn validate(&self) -> Result<()> {
        if self.point_count == 0 {
            return Err(PlotError::invalid_argument("point_count must be at least 1"));
        }
        Ok(())
    }

    /// Signed distance between consecutive sample abscissae.
    pub fn step(&self) -> f64 {
        (self.max_x - self.min_x) / self.point_count as f64
    }

    /// Number of candidate samples, endpoints included.
    pub fn sample_count(&self) -> usize {
        self.point_count.saturating_add(1)
    }

    /// Same domain swept in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self { min_x: self.max_x, max_x: self.min_x, point_count: self.point_count }
    }
}

/// Lazy, restartable walk over the abscissae of a request.
#[derive(Clone, Debug)]
pub struct SampleIter {
    min_x: f64,
    max_x: f64,
    step: f64,
    last: usize,
    lo: f64,
    hi: f64,
    indices: RangeInclusive<usize>,
}

impl SampleIter {
    fn new(req: &PlotRequest) -> Self {
        let (lo, hi) = ordered(req.min_x, req.max_x);
        Self {
            min_x: req.min_x,
            max_x: req.max_x,
            step: req.step(),
            last: req.point_count,
            lo,
            hi,
            indices: 0..=req.point_count,
        }
    }

    fn x_at(&self, i: usize) -> f64 {
        if i == self.last {
            return self.max_x;
        }
        if !self.step.is_finite() {
            // span overflowed; interpolate without forming max_x - min_x
            let t = i as f64 / self.last as f64;
            return self.min_x * (1.0 - t) + self.max_x * t;
        }
        self.min_x + i as f64 * self.step
    }
}

impl Iterator for SampleIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let i = self.indices.next()?;
        // rounding in `i * step` may overshoot an endpoint by an ulp
        Some(clamp(self.x_at(i), self.lo, self.hi))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

/// Counts gathered while sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleStats {
    pub requested: usize,
    pub kept: usize,
    pub dropped: usize,
}

/// Turns a validated [`PlotRequest`] into an ordered list of points.
#[derive(Clone, Copy, Debug)]
pub struct FunctionSampler {
    request: PlotRequest,
}

impl FunctionSampler {
    /// Validate `request`; rejects `point_count == 0`.
    pub fn new(request: PlotRequest) -> Result<Self> {
        if let Err(e) = request.validate() {
            warn!(?request, "rejected plot request");
            return Err(e);
        }
        Ok(Self { request })
    }

    pub fn request(&self) -> &PlotRequest { &self.request }

    pub fn xs(&self) -> SampleIter {
        SampleIter::new(&self.request)
    }

    pub fn sample<F>(&self, f: F) -> Vec<Point3D>
    where
        F: FnMut(f64) -> f64,
    {
        self.sample_with_stats(f).0
    }

    pub fn sample_with_stats<F>(&self, mut f: F) -> (Vec<Point3D>, SampleStats)
    where
        F: FnMut(f64) -> f64,
    {
        match self.try_sample_with_stats(|x| Ok::<f64, Infallible>(f(x))) {
            Ok(out) => out,
            Err(never) => match never {},
        }
    }

    /// Sample a fallible function. The first error aborts the pass and is returned as-is.
    pub fn try_sample<F, E>(&self, f: F) -> std::result::Result<Vec<Point3D>, E>
    where
        F: FnMut(f64) -> std::result::Result<f64, E>,
    {
        self.try_sample_with_stats(f).map(|(points, _)| points)
    }

    pub fn try_sample_with_stats<F, E>(
        &self,
        mut f: F,
    ) -> std::result::Result<(Vec<Point3D>, SampleStats), E>
    where
        F: FnMut(f64) -> std::result::Result<f64, E>,
    {
        let xs = self.xs();
        let mut stats = SampleStats { requested: xs.size_hint().0, ..SampleStats::default() };
        let mut points = Vec::with_capacity(stats.requested.min(PREALLOC_LIMIT));
        for x in xs {
            let y = f(x)?;
            if y.is_finite() {
                points.push(Point3D::on_plane(x, y));
            } else {
                trace!(x, y, "dropped non-finite sample");
                stats.dropped += 1;
            }
        }
        stats.kept = points.len();
        debug!(
            min_x = self.request.min_x,
            max_x = self.request.max_x,
            requested = stats.requested,
            kept = stats.kept,
            dropped = stats.dropped,
            "sampled function"
        );
        Ok((points, stats))
    }
}

/// One-shot helper: validate the request and sample `f` over it.
pub fn sample<F>(f: F, min_x: f64, max_x: f64, point_count: usize) -> Result<Vec<Point3D>>
where
    F: FnMut(f64) -> f64,
{
    Ok(FunctionSampler::new(PlotRequest::new(min_x, max_x, point_count))?.sample(f))
}
