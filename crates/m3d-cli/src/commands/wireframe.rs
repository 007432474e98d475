//! Wireframe command - projected cube, axes and camera frustum as SVG
//!
//! Each object is a small set of local points. They are moved into world
//! space with a point stream transform, then into screen space with an
//! in-place coord transform (`screen * perspective * view`), and joined by
//! lines.

use anyhow::{Context, Result};
use m3d_core::Degrees;
use m3d_math::{Mat4, Vec4, simd};
use tracing::{debug, info};

use crate::WireframeArgs;
use crate::config::{Placement, WireframeConfig};
use crate::svg::{Drawing, Point, Rgb};

const BLACK: Rgb = 0x000000;
const AXIS_COLORS: [Rgb; 3] = [0xFF0000, 0x00FF00, 0x0000FF];

/// Frustum edges: apex to far corners, near square, far square.
const FRUSTUM_EDGES: [(usize, usize); 12] = [
    (0, 5),
    (0, 6),
    (0, 7),
    (0, 8),
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 1),
    (5, 6),
    (6, 7),
    (7, 8),
    (8, 5),
];

pub fn run(args: WireframeArgs, scene: &WireframeConfig) -> Result<()> {
    let mut scene = scene.clone();
    if let Some(fov) = args.fov {
        scene.fov = Degrees::new(fov);
    }
    if let Some(grid) = args.grid {
        scene.grid = grid;
    }
    info!(fov = %scene.fov, grid = scene.grid, "drawing wireframe");

    let drawing = draw(&scene)?;
    drawing.save(&args.output)?;
    info!(shapes = drawing.shapes.len(), "Saved: {}", args.output.display());
    Ok(())
}

/// Corners of the unit cube centered on the origin, corner `i` having
/// bit 0 set for +x, bit 1 for +y, bit 2 for +z.
pub fn unit_cube() -> [Vec4; 8] {
    std::array::from_fn(|i| {
        let side = |bit: usize| if i & bit != 0 { 0.5 } else { -0.5 };
        Vec4::point(side(1), side(2), side(4))
    })
}

/// Cube edges join corners differing in exactly one bit.
pub fn cube_edges() -> impl Iterator<Item = (usize, usize)> {
    (0..8usize).flat_map(|a| {
        (a + 1..8).filter(move |b| matches!(a ^ b, 1 | 2 | 4)).map(move |b| (a, b))
    })
}

/// Origin followed by the x, y and z unit points.
pub fn unit_axes() -> [Vec4; 4] {
    [Vec4::W, Vec4::X.with_w(1.0), Vec4::Y.with_w(1.0), Vec4::Z.with_w(1.0)]
}

/// Apex behind a small near square and a larger far square.
pub fn unit_frustum() -> [Vec4; 9] {
    [
        Vec4::point(0.0, 0.0, -3.0),
        Vec4::point(0.5, 0.5, -1.0),
        Vec4::point(-0.5, 0.5, -1.0),
        Vec4::point(-0.5, -0.5, -1.0),
        Vec4::point(0.5, -0.5, -1.0),
        Vec4::point(1.0, 1.0, 1.0),
        Vec4::point(-1.0, 1.0, 1.0),
        Vec4::point(-1.0, -1.0, 1.0),
        Vec4::point(1.0, -1.0, 1.0),
    ]
}

/// Local points to screen space.
fn project(local: &[Vec4], model: &Mat4, view_projection: &Mat4) -> Result<Vec<Vec4>> {
    let mut points = vec![Vec4::ZERO; local.len()];
    simd::transform_stream(&mut points, local, model)?;
    simd::transform_in_place(&mut points, view_projection);
    Ok(points)
}

fn screen(p: Vec4) -> Option<Point> {
    (p.x.is_finite() && p.y.is_finite()).then_some((p.x, p.y))
}

/// Add a line between two projected points, skipping points that cannot be
/// placed on screen.
fn edge(drawing: &mut Drawing, a: Vec4, b: Vec4, color: Rgb, arrow: bool) {
    match (screen(a), screen(b)) {
        (Some(from), Some(to)) if arrow => drawing.arrow(from, to, color),
        (Some(from), Some(to)) => drawing.line(from, to, color),
        _ => debug!(?a, ?b, "skipping edge with non-finite endpoint"),
    }
}

/// Build the full drawing for a scene.
pub fn draw(scene: &WireframeConfig) -> Result<Drawing> {
    let xform = scene.view_projection().context("Invalid camera projection")?;
    let mut drawing = Drawing::new(scene.width, scene.height);

    let cube = unit_cube();
    for j in 0..scene.grid {
        for i in 0..scene.grid {
            let [x, y, z] = scene.cube.translation;
            let cell = Placement {
                translation: [
                    x + i as f32 * scene.grid_spacing,
                    y,
                    z + j as f32 * scene.grid_spacing,
                ],
                ..scene.cube.clone()
            };
            let pts = project(&cube, &cell.model_matrix(), &xform)?;
            for (a, b) in cube_edges() {
                edge(&mut drawing, pts[a], pts[b], BLACK, false);
            }
        }
    }

    let axes = project(&unit_axes(), &scene.axes.model_matrix(), &xform)?;
    for (tip, color) in axes[1..].iter().zip(AXIS_COLORS) {
        edge(&mut drawing, axes[0], *tip, color, true);
    }

    let frustum = project(&unit_frustum(), &scene.frustum.model_matrix(), &xform)?;
    for (a, b) in FRUSTUM_EDGES {
        edge(&mut drawing, frustum[a], frustum[b], BLACK, false);
    }
    if let Some(apex) = screen(frustum[0]) {
        drawing.circle(apex, 2.0, BLACK);
    }

    debug!(shapes = drawing.shapes.len(), "wireframe built");
    Ok(drawing)
}
