//! Raytrace command - first-hit sphere ray tracer
//!
//! The eye sits at `(0, 0, -view_distance)` behind a view plane at `z = 0`.
//! Each pixel casts one ray from the eye through its position on the view
//! plane; the ray hits a sphere when its closest approach to the center is
//! less than the radius. No lighting, no depth sort: the first sphere in
//! scene order that the ray passes through colors the pixel.

use anyhow::{Context, Result, bail};
use image::RgbImage;
use m3d_math::Vec4;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::RaytraceArgs;
use crate::config::{RaytraceConfig, SphereConfig};

pub fn run(args: RaytraceArgs, scene: &RaytraceConfig) -> Result<()> {
    let width = args.width.unwrap_or(scene.width);
    let height = args.height.unwrap_or(scene.height);
    info!(width, height, spheres = scene.spheres.len(), "ray tracing");

    let image = render(scene, width, height)?;

    image
        .save(&args.output)
        .with_context(|| format!("Failed to save: {}", args.output.display()))?;
    info!("Saved: {}", args.output.display());
    Ok(())
}

/// A half line from `origin` along the unit vector `direction`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec4,
    pub direction: Vec4,
}

impl Ray {
    /// Ray from `origin` passing through `look_at`.
    pub fn through(origin: Vec4, look_at: Vec4) -> Self {
        Self {
            origin,
            direction: (look_at - origin).normalized(),
        }
    }

    /// Point on the ray's line nearest to `p`.
    pub fn closest_point(&self, p: Vec4) -> Vec4 {
        let along = self.direction.dot(p - self.origin);
        self.origin + self.direction * along
    }

    pub fn hits(&self, sphere: &SphereConfig) -> bool {
        let center = sphere.center();
        (self.closest_point(center) - center).length() < sphere.radius
    }
}

/// Color seen through pixel `(i, j)`, with `j` counted up from the bottom row.
fn trace(scene: &RaytraceConfig, width: u32, height: u32, i: u32, j: u32) -> [u8; 3] {
    let eye = Vec4::point(0.0, 0.0, -scene.view_distance);
    let look_at = Vec4::point(i as f32 - 0.5 * width as f32, j as f32 - 0.5 * height as f32, 0.0);
    let ray = Ray::through(eye, look_at);

    scene
        .spheres
        .iter()
        .find(|s| ray.hits(s))
        .map_or(scene.background, |s| s.color)
}

/// Render the scene, rows in parallel.
pub fn render(scene: &RaytraceConfig, width: u32, height: u32) -> Result<RgbImage> {
    if width == 0 || height == 0 {
        bail!("Image size must be non-zero, got {width}x{height}");
    }
    let row_len = width as usize * 3;
    let mut pixels = vec![0u8; row_len * height as usize];

    pixels
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, line)| {
            // image rows run top to bottom, scene y points up
            let j = height - 1 - row as u32;
            for (i, rgb) in line.chunks_exact_mut(3).enumerate() {
                rgb.copy_from_slice(&trace(scene, width, height, i as u32, j));
            }
        });
    debug!(bytes = pixels.len(), "rendered");

    RgbImage::from_raw(width, height, pixels).context("Pixel buffer does not match image size")
}
