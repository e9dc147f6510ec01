//! Procedural test scene: a sphere at the origin seen through a perspective
//! camera that looks at the origin from the material's camera position.
//!
//! Stands in for the geometry stage of a real host. Each covered pixel gets the
//! interpolated inputs the fragment stage expects.

use depthcue::{FragDepth, ModelBounds, PixelInput, ShadeError};
use glam::{Mat4, Vec3, Vec4};

const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;

/// One covered pixel of the rasterized scene.
#[derive(Clone, Copy, Debug)]
pub struct Fragment {
    /// Row-major pixel index.
    pub index: usize,
    pub input: PixelInput,
}

pub struct SphereScene {
    pub radius: f32,
    pub camera_position: Vec3,
    pub width: u32,
    pub height: u32,
}

impl SphereScene {
    /// Bounds of the sphere, used to derive the material's model size.
    pub fn bounds(&self) -> Result<ModelBounds, ShadeError> {
        ModelBounds::from_positions(&[Vec3::splat(-self.radius), Vec3::splat(self.radius)])
    }

    /// Number of pixels in the output image.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major buffer index of pixel `(x, y)`.
    pub fn pixel_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn view_projection(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height as f32;
        let projection = Mat4::perspective_rh(FOV_Y, aspect, NEAR_PLANE, FAR_PLANE);
        let view = Mat4::look_at_rh(self.camera_position, Vec3::ZERO, up_vector(self.camera_position));
        projection * view
    }

    /// Ray-cast the sphere for every pixel. `light_vector` is shared by all
    /// fragments (directional light).
    pub fn rasterize(&self, light_vector: Vec3) -> Vec<Fragment> {
        let view_projection = self.view_projection();
        let inverse = view_projection.inverse();
        let origin = self.camera_position;
        let mut fragments = Vec::new();

        for y in 0..self.height {
            for x in 0..self.width {
                let ndc_x = 2.0 * (x as f32 + 0.5) / self.width as f32 - 1.0;
                let ndc_y = 1.0 - 2.0 * (y as f32 + 0.5) / self.height as f32;
                let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
                let Some(direction) = (far - origin).try_normalize() else {
                    continue;
                };
                let Some(t) = intersect_sphere(origin, direction, self.radius) else {
                    continue;
                };

                let hit = origin + direction * t;
                let clip = view_projection * Vec4::new(hit.x, hit.y, hit.z, 1.0);
                fragments.push(Fragment {
                    index: self.pixel_index(x, y),
                    input: PixelInput {
                        normal: hit,
                        light_vector,
                        depth: FragDepth::from_clip(clip),
                    },
                });
            }
        }

        fragments
    }
}

/// Nearest positive hit of a ray against a sphere centered at the origin.
fn intersect_sphere(origin: Vec3, direction: Vec3, radius: f32) -> Option<f32> {
    let b = origin.dot(direction);
    let c = origin.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    [-b - sqrt_d, -b + sqrt_d].into_iter().find(|t| *t > 0.0)
}

/// World up, unless the camera sits on the Y axis.
fn up_vector(camera_position: Vec3) -> Vec3 {
    if camera_position.normalize_or_zero().cross(Vec3::Y).length_squared() < 1e-6 {
        Vec3::Z
    } else {
        Vec3::Y
    }
}
