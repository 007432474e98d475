//! CLI command implementations

pub mod project;
pub mod raytrace;
pub mod wireframe;

use anyhow::{Context, Result};
use m3d_math::Vec4;

/// Parse a point like "1,2,3" (w = 1)
pub fn parse_point(s: &str) -> Result<Vec4> {
    let parts: Result<Vec<f32>, _> = s.split(',').map(|p| p.trim().parse::<f32>()).collect();
    let parts = parts.with_context(|| format!("Invalid point: {s}"))?;
    match parts[..] {
        [x, y, z] => Ok(Vec4::point(x, y, z)),
        _ => anyhow::bail!("Invalid point: {s} (expected x,y,z)"),
    }
}
