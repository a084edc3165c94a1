use crate::transform::Transform;
use nalgebra as na;

/// A camera view paired with its projection, ready to hand to the renderer.
pub struct Frustum {
    pub view: Transform,
    pub projection: na::Matrix4<f32>,
}

impl Frustum {
    pub fn new_perspective(
        view: Transform,
        aspect_ratio: f32,
        fov: f32,
        near: f32,
        far: f32,
    ) -> Frustum {
        Frustum {
            view,
            projection: na::Matrix4::new_perspective(aspect_ratio, fov, near, far),
        }
    }

    /// Combined world-to-clip matrix in render precision. The view transform
    /// is kept in f64 and only collapsed to f32 here.
    pub fn view_projection(&self) -> na::Matrix4<f32> {
        self.projection
            * na::convert::<na::Matrix4<f64>, na::Matrix4<f32>>(self.view.to_homogeneous())
    }
}
