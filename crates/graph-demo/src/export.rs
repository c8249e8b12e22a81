// File: crates/graph-demo/src/export.rs
// Summary: CSV export of a scene: one row per axis indicator, then one row per sample point.

use anyhow::{Context, Result};
use graph_core::{Scene, SceneElement, Theme};
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 9] = ["kind", "role", "x", "y", "z", "width", "height", "depth", "color"];

pub fn write_scene<W: Write>(scene: &Scene<'_>, theme: &Theme, out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(HEADER)?;
    let diameter = (scene.point_radius() * 2.0).to_string();
    for elem in scene.elements() {
        match elem {
            SceneElement::Axis(axis) => {
                let e = axis.extent();
                wtr.write_record([
                    "axis".to_string(),
                    axis.role().label().to_string(),
                    "0".to_string(),
                    "0".to_string(),
                    "0".to_string(),
                    e.width.to_string(),
                    e.height.to_string(),
                    e.depth.to_string(),
                    theme.axis_color(axis.role()).to_hex(),
                ])?;
            }
            SceneElement::Point(p) => {
                wtr.write_record([
                    "point".to_string(),
                    String::new(),
                    p.x.to_string(),
                    p.y.to_string(),
                    p.z.to_string(),
                    diameter.clone(),
                    diameter.clone(),
                    diameter.clone(),
                    theme.point.to_hex(),
                ])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_scene_csv(scene: &Scene<'_>, theme: &Theme, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_scene(scene, theme, file).with_context(|| format!("writing {}", path.display()))
}
