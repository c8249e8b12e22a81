// File: crates/graph-examples/src/bin/parabola.rs
// Summary: Minimal example that plots x^2, then replots 1/x, printing the scene each time.

use graph_core::{PlotSurface, Scene};

fn print_scene(title: &str, scene: &Scene<'_>) {
    println!("{title}: {} axes, {} points", scene.axes().len(), scene.points().len());
    for p in scene.points() {
        println!("  ({:>5.2}, {:>5.2}, {:>5.2})", p.x, p.y, p.z);
    }
}

fn main() -> graph_core::Result<()> {
    let mut surface = PlotSurface::new();

    surface.plot(|x| x * x, -2.0, 2.0, 4)?;
    print_scene("x^2 on [-2, 2]", &surface.scene());

    // the pole at x = 0 is dropped
    surface.plot(|x| 1.0 / x, -1.0, 1.0, 2)?;
    print_scene("1/x on [-1, 1]", &surface.scene());
    Ok(())
}
