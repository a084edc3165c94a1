use crate::frustum::Frustum;
use crate::transform::{Transform, Transformable};

/// A perspective camera. The transform is the view transform (world to eye
/// space); whoever drives the camera writes it directly.
pub struct Camera {
    transform: Transform,

    fov: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new() -> Camera {
        Camera {
            transform: Transform::identity(),
            fov: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn set_near(&mut self, near: f32) -> &mut Self {
        self.near = near;
        self
    }

    pub fn set_far(&mut self, far: f32) -> &mut Self {
        self.far = far;
        self
    }

    pub fn set_field_of_view(&mut self, fov: f32) -> &mut Self {
        self.fov = fov;
        self
    }

    pub fn field_of_view(&self) -> f32 {
        self.fov
    }

    /// The view frustum for the given aspect ratio. Aspect is supplied by the
    /// viewport since only it knows the current surface size.
    pub fn frustum(&self, aspect_ratio: f32) -> Frustum {
        Frustum::new_perspective(self.transform, aspect_ratio, self.fov, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Camera {
        Camera::new()
    }
}

impl Transformable for Camera {
    fn transform(&self) -> &Transform {
        &self.transform
    }
    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
