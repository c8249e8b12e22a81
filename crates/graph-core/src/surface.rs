// File: crates/graph-core/src/surface.rs
// Summary: PlotSurface owns the fixed axis frame and the replaceable sample point set.

use tracing::debug;

use crate::axis::{AxisFrame, AxisIndicator};
use crate::error::{PlotError, Result};
use crate::options::SurfaceOptions;
use crate::sampler::{FunctionSampler, PlotRequest};
use crate::types::Point3D;

/// Live scene: three axis indicators plus the points of the latest plot.
#[derive(Clone, Debug)]
pub struct PlotSurface {
    axes: AxisFrame,
    points: Vec<Point3D>,
    options: SurfaceOptions,
    last_request: Option<PlotRequest>,
    revision: u64,
}

impl PlotSurface {
    pub fn new() -> Self {
        Self::build(SurfaceOptions::default())
    }

    pub fn with_options(options: SurfaceOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(options))
    }

    fn build(options: SurfaceOptions) -> Self {
        Self {
            axes: AxisFrame::new(options.axis_length, options.axis_thickness),
            points: Vec::new(),
            options,
            last_request: None,
            revision: 0,
        }
    }

    /// Replace the current points with samples of `f` over `[min_x, max_x]`.
    /// On error the previous points stay in place.
    pub fn plot<F>(&mut self, f: F, min_x: f64, max_x: f64, point_count: usize) -> Result<&[Point3D]>
    where
        F: FnMut(f64) -> f64,
    {
        self.plot_request(PlotRequest::new(min_x, max_x, point_count), f)
    }

    pub fn plot_request<F>(&mut self, request: PlotRequest, f: F) -> Result<&[Point3D]>
    where
        F: FnMut(f64) -> f64,
    {
        let points = FunctionSampler::new(request)?.sample(f);
        Ok(self.replace_points(request, points))
    }

    /// Like [`plot`](Self::plot) for a fallible function. Any error, from the request or
    /// from `f`, is returned before the scene is touched.
    pub fn try_plot<F, E>(
        &mut self,
        f: F,
        min_x: f64,
        max_x: f64,
        point_count: usize,
    ) -> std::result::Result<&[Point3D], E>
    where
        F: FnMut(f64) -> std::result::Result<f64, E>,
        E: From<PlotError>,
    {
        let request = PlotRequest::new(min_x, max_x, point_count);
        let points = FunctionSampler::new(request)?.try_sample(f)?;
        Ok(self.replace_points(request, points))
    }

    fn replace_points(&mut self, request: PlotRequest, points: Vec<Point3D>) -> &[Point3D] {
        let previous = std::mem::replace(&mut self.points, points);
        self.last_request = Some(request);
        self.revision += 1;
        debug!(
            removed = previous.len(),
            inserted = self.points.len(),
            revision = self.revision,
            "replaced plot points"
        );
        &self.points
    }

    /// Drop every sample point; axes stay.
    pub fn clear(&mut self) {
        if self.points.is_empty() && self.last_request.is_none() {
            return;
        }
        self.points.clear();
        self.last_request = None;
        self.revision += 1;
        debug!(revision = self.revision, "cleared plot points");
    }

    pub fn axes(&self) -> &AxisFrame { &self.axes }
    pub fn points(&self) -> &[Point3D] { &self.points }
    pub fn options(&self) -> &SurfaceOptions { &self.options }
    pub fn last_request(&self) -> Option<&PlotRequest> { self.last_request.as_ref() }

    /// Bumped on every change to the point set.
    pub fn revision(&self) -> u64 { self.revision }

    pub fn scene(&self) -> Scene<'_> {
        Scene { axes: &self.axes, points: &self.points, point_radius: self.options.point_radius }
    }
}

impl Default for PlotSurface {
    fn default() -> Self { Self::new() }
}

/// Read-only view of everything currently visible.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    axes: &'a AxisFrame,
    points: &'a [Point3D],
    point_radius: f64,
}

/// One visible element, tagged by kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneElement<'a> {
    Axis(&'a AxisIndicator),
    Point(&'a Point3D),
}

impl<'a> Scene<'a> {
    pub fn axes(&self) -> &'a [AxisIndicator] { self.axes.indicators() }
    pub fn points(&self) -> &'a [Point3D] { self.points }
    pub fn point_radius(&self) -> f64 { self.point_radius }

    pub fn len(&self) -> usize { self.axes.indicators().len() + self.points.len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Axes first, then points in sample order.
    pub fn elements(&self) -> impl Iterator<Item = SceneElement<'a>> + 'a {
        let axes = self.axes.indicators().iter().map(SceneElement::Axis);
        let points = self.points.iter().map(SceneElement::Point);
        axes.chain(points)
    }
}
