// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports function sampling and the plot scene model.

pub mod axis;
pub mod error;
pub mod geometry;
pub mod options;
pub mod sampler;
pub mod surface;
pub mod theme;
pub mod types;

pub use axis::{AxisFrame, AxisIndicator, AxisRole};
pub use error::{PlotError, Result};
pub use options::SurfaceOptions;
pub use sampler::{sample, FunctionSampler, PlotRequest, SampleIter, SampleStats};
pub use surface::{PlotSurface, Scene, SceneElement};
pub use theme::{Rgba, Theme};
pub use types::{Extent3, Point3D};
