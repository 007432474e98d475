//! Project command - world points through the wireframe camera

use anyhow::{Context, Result};
use m3d_math::{Mat4, Vec4, simd};
use tracing::{debug, info};

use crate::ProjectArgs;
use crate::commands::parse_point;
use crate::config::WireframeConfig;

pub fn run(args: ProjectArgs, scene: &WireframeConfig) -> Result<()> {
    let points = args
        .points
        .iter()
        .map(|s| parse_point(s))
        .collect::<Result<Vec<_>>>()?;

    let xform = if args.ndc {
        scene.ndc_projection()
    } else {
        scene.view_projection()
    }
    .context("Invalid camera projection")?;
    info!(count = points.len(), ndc = args.ndc, "projecting points");

    for (world, projected) in points.iter().zip(project(&points, &xform)?) {
        println!(
            "({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})",
            world.x, world.y, world.z, projected.x, projected.y, projected.z
        );
    }
    Ok(())
}

/// Coord transform of every point, in parallel for large inputs.
pub fn project(points: &[Vec4], xform: &Mat4) -> Result<Vec<Vec4>> {
    let mut out = vec![Vec4::ZERO; points.len()];
    if points.len() >= simd::PAR_CHUNK {
        debug!(count = points.len(), "parallel projection");
        simd::par_transform_coord_stream(&mut out, points, xform)?;
    } else {
        simd::transform_coord_stream(&mut out, points, xform)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_matches_transform_point() {
        let xform = WireframeConfig::default().view_projection().unwrap();
        let pts = [Vec4::point(0.0, 0.0, 0.0), Vec4::point(1.0, 2.0, 3.0)];
        let out = project(&pts, &xform).unwrap();
        for (p, o) in pts.iter().zip(&out) {
            assert!(o.abs_diff_eq(xform.transform_point(*p), 1e-3));
        }
    }

    #[test]
    fn test_large_input_uses_same_result() {
        let xform = WireframeConfig::default().ndc_projection().unwrap();
        let pts: Vec<Vec4> = (0..simd::PAR_CHUNK + 3)
            .map(|i| Vec4::point(i as f32 * 0.01, 1.0, 2.0))
            .collect();
        let out = project(&pts, &xform).unwrap();
        assert_eq!(out.len(), pts.len());
        assert_eq!(out[7], project(&pts[7..8], &xform).unwrap()[0]);
    }

    #[test]
    fn test_run_rejects_bad_point() {
        let args = ProjectArgs {
            points: vec!["1,2".into()],
            ndc: false,
        };
        assert!(run(args, &WireframeConfig::default()).is_err());
    }
}
