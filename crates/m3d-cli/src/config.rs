//! Scene configuration.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! built-in scenes: three spheres for the ray tracer, and a cube with axes
//! and a camera frustum for the wireframe.
//!
//! ```yaml
//! raytrace:
//!   width: 320
//!   height: 240
//!   view_distance: 100
//!   spheres:
//!     - { center: [-50, -50, 90], radius: 50, color: [255, 0, 0] }
//! wireframe:
//!   fov: 90
//!   camera:
//!     scale: 1.5
//!     rotation: { x: 5, y: 45, z: 10 }
//!     translation: [12, -1, -10]
//! ```

use anyhow::{Context, Result};
use m3d_core::{Degrees, Rotation};
use m3d_math::{Mat4, Vec4};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Complete scene file
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub raytrace: RaytraceConfig,
    pub wireframe: WireframeConfig,
}

impl SceneConfig {
    /// Load a scene from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading scene from {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene: {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid scene: {}", path.display()))
    }

    /// Parse a scene from YAML text
    pub fn from_yaml(text: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}

// ============================================================================
// Ray tracer
// ============================================================================

/// Sphere scene for the ray tracer
#[derive(Clone, Debug, Deserialize)]
pub struct RaytraceConfig {
    /// Image width in pixels (default: 320)
    #[serde(default = "default_rt_width")]
    pub width: u32,

    /// Image height in pixels (default: 240)
    #[serde(default = "default_rt_height")]
    pub height: u32,

    /// Distance from the eye to the view plane at z = 0 (default: 100)
    #[serde(default = "default_view_distance")]
    pub view_distance: f32,

    /// Color of pixels that miss every sphere (default: black)
    #[serde(default)]
    pub background: [u8; 3],

    /// Spheres, earlier entries drawn in front of later ones
    #[serde(default = "default_spheres")]
    pub spheres: Vec<SphereConfig>,
}

/// One sphere in the ray traced scene
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SphereConfig {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [u8; 3],
}

impl SphereConfig {
    /// Center as a point
    pub fn center(&self) -> Vec4 {
        let [x, y, z] = self.center;
        Vec4::point(x, y, z)
    }
}

impl Default for RaytraceConfig {
    fn default() -> Self {
        Self {
            width: default_rt_width(),
            height: default_rt_height(),
            view_distance: default_view_distance(),
            background: [0, 0, 0],
            spheres: default_spheres(),
        }
    }
}

fn default_rt_width() -> u32 {
    320
}
fn default_rt_height() -> u32 {
    240
}
fn default_view_distance() -> f32 {
    100.0
}
fn default_spheres() -> Vec<SphereConfig> {
    vec![
        SphereConfig {
            center: [-50.0, -50.0, 90.0],
            radius: 50.0,
            color: [255, 0, 0],
        },
        SphereConfig {
            center: [60.0, 20.0, 70.0],
            radius: 50.0,
            color: [0, 255, 0],
        },
        SphereConfig {
            center: [0.0, 30.0, 80.0],
            radius: 70.0,
            color: [0, 0, 255],
        },
    ]
}

// ============================================================================
// Wireframe
// ============================================================================

/// Placement of an object or camera: uniform scale, rotation, translation
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Placement {
    #[serde(default = "default_one")]
    pub scale: f32,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub translation: [f32; 3],
}

impl Placement {
    pub fn new(scale: f32, rotation: Rotation, translation: [f32; 3]) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    fn offset(&self) -> Vec4 {
        let [x, y, z] = self.translation;
        Vec4::direction(x, y, z)
    }

    /// Local to world: `translate * rotate * scale`
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::translate_xyz(self.offset())
            * Mat4::rotate_xyz(&self.rotation)
            * Mat4::scale(self.scale)
    }

    /// World to camera, treating this placement as the camera.
    ///
    /// The rotation is rigid, so its transpose is its inverse.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::rotate_xyz(&self.rotation).transposed()
            * Mat4::translate_xyz(self.offset())
            * Mat4::scale(self.scale)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(1.0, Rotation::ZERO, [0.0; 3])
    }
}

/// Camera and objects for the wireframe drawing
#[derive(Clone, Debug, Deserialize)]
pub struct WireframeConfig {
    /// Drawing width (default: 300)
    #[serde(default = "default_wf_width")]
    pub width: f32,

    /// Drawing height (default: 200)
    #[serde(default = "default_wf_height")]
    pub height: f32,

    /// Vertical field of view (default: 90 degrees)
    #[serde(default = "default_fov")]
    pub fov: Degrees,

    #[serde(default = "default_near")]
    pub near: f32,

    #[serde(default = "default_far")]
    pub far: f32,

    #[serde(default = "default_camera")]
    pub camera: Placement,

    #[serde(default = "default_cube")]
    pub cube: Placement,

    /// Cubes per side of the grid (default: 1)
    #[serde(default = "default_one_u32")]
    pub grid: u32,

    /// Distance between grid cells (default: 5)
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: f32,

    #[serde(default = "default_axes")]
    pub axes: Placement,

    #[serde(default = "default_frustum")]
    pub frustum: Placement,
}

impl WireframeConfig {
    /// World to normalized device coordinates: `perspective * view`.
    pub fn ndc_projection(&self) -> m3d_core::Result<Mat4> {
        let aspect = self.width / self.height;
        let perspective = Mat4::perspective(self.fov.into(), aspect, self.near, self.far)?;
        Ok(perspective * self.camera.view_matrix())
    }

    /// World to screen: `screen * perspective * view`.
    pub fn view_projection(&self) -> m3d_core::Result<Mat4> {
        Ok(self.screen_matrix() * self.ndc_projection()?)
    }

    /// NDC to screen pixels, y pointing down.
    pub fn screen_matrix(&self) -> Mat4 {
        let (w, h) = (self.width, self.height);
        Mat4::translate_xyz(Vec4::direction(w / 2.0, h / 2.0, 0.0))
            * Mat4::scale_xyz(Vec4::new(w / 2.0, -h / 2.0, 1.0, 1.0))
    }
}

impl Default for WireframeConfig {
    fn default() -> Self {
        Self {
            width: default_wf_width(),
            height: default_wf_height(),
            fov: default_fov(),
            near: default_near(),
            far: default_far(),
            camera: default_camera(),
            cube: default_cube(),
            grid: default_one_u32(),
            grid_spacing: default_grid_spacing(),
            axes: default_axes(),
            frustum: default_frustum(),
        }
    }
}

fn default_one() -> f32 {
    1.0
}
fn default_one_u32() -> u32 {
    1
}
fn default_wf_width() -> f32 {
    300.0
}
fn default_wf_height() -> f32 {
    200.0
}
fn default_fov() -> Degrees {
    Degrees::new(90.0)
}
fn default_near() -> f32 {
    0.1
}
fn default_far() -> f32 {
    10000.0
}
fn default_grid_spacing() -> f32 {
    5.0
}
fn default_camera() -> Placement {
    Placement::new(1.5, Rotation::from_degrees(5.0, 45.0, 10.0), [12.0, -1.0, -10.0])
}
fn default_cube() -> Placement {
    Placement::new(2.0, Rotation::from_degrees(20.0, 40.0, 0.0), [0.0; 3])
}
fn default_axes() -> Placement {
    Placement::new(5.0, Rotation::ZERO, [0.0; 3])
}
fn default_frustum() -> Placement {
    Placement::new(3.0, Rotation::ZERO, [0.0; 3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let scene = SceneConfig::from_yaml("").unwrap();
        assert_eq!(scene.raytrace.width, 320);
        assert_eq!(scene.raytrace.spheres.len(), 3);
        assert_eq!(scene.wireframe.fov, Degrees::new(90.0));
        assert_eq!(scene.wireframe.camera, default_camera());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
raytrace:
  width: 64
  spheres:
    - { center: [0, 0, 50], radius: 10, color: [255, 255, 0] }
wireframe:
  fov: 60
  camera:
    rotation: { x: 0, y: 90, z: 0 }
"#;
        let scene = SceneConfig::from_yaml(yaml).unwrap();
        assert_eq!(scene.raytrace.width, 64);
        assert_eq!(scene.raytrace.height, 240);
        assert_eq!(scene.raytrace.spheres[0].color, [255, 255, 0]);
        assert_eq!(scene.wireframe.fov, Degrees::new(60.0));
        assert_eq!(scene.wireframe.camera.scale, 1.0);
        assert_eq!(scene.wireframe.camera.rotation.y, Degrees::new(90.0));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "raytrace:\n  view_distance: 250").unwrap();
        let scene = SceneConfig::load(file.path()).unwrap();
        assert_eq!(scene.raytrace.view_distance, 250.0);
    }

    #[test]
    fn test_load_invalid() {
        assert!(SceneConfig::from_yaml("raytrace: [1, 2").is_err());
        assert!(SceneConfig::load(Path::new("/nonexistent/scene.yaml")).is_err());
    }

    #[test]
    fn test_screen_matrix_maps_ndc_corners() {
        let wf = WireframeConfig::default();
        let s = wf.screen_matrix();
        let top_left = s.transform_point(Vec4::point(-1.0, 1.0, 0.0));
        let bottom_right = s.transform_point(Vec4::point(1.0, -1.0, 0.0));
        assert_eq!((top_left.x, top_left.y), (0.0, 0.0));
        assert_eq!((bottom_right.x, bottom_right.y), (300.0, 200.0));
    }

    #[test]
    fn test_view_matrix_undoes_camera_rotation() {
        let cam = Placement::new(1.0, Rotation::from_degrees(10.0, 20.0, 30.0), [0.0; 3]);
        let round = cam.view_matrix() * Mat4::rotate_xyz(&cam.rotation);
        assert!(round.abs_diff_eq(&Mat4::IDENTITY, 1e-5));
    }
}
