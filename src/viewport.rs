use crate::camera::Camera;
use crate::frustum::Frustum;

/// Owns the camera plus the current surface size, and keeps the projection
/// aspect ratio equal to width / height of the drawing surface.
pub struct Viewport {
    camera: Camera,
    width: u32,
    height: u32,
}

impl Viewport {
    /// Starts out at a 1x1 placeholder size; call `resize` with the real
    /// surface size once at startup and again on every resize notification.
    pub fn new(camera: Camera) -> Viewport {
        Viewport {
            camera,
            width: 1,
            height: 1,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Adopts a new surface size. A zero width or height is reported during
    /// minimization on some window systems; the previous projection state is
    /// kept until a usable size comes in.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            warn!("ignoring {}x{} resize", width, height);
            return;
        }
        if (width, height) != (self.width, self.height) {
            debug!("viewport resized to {}x{}", width, height);
        }
        self.width = width;
        self.height = height;
    }

    /// The camera frustum at the current aspect ratio.
    pub fn frustum(&self) -> Frustum {
        self.camera.frustum(self.aspect_ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_is_idempotent() {
        let mut viewport = Viewport::new(Camera::new());
        viewport.resize(800, 600);
        let once = (viewport.size(), viewport.aspect_ratio());

        viewport.resize(800, 600);
        assert_eq!((viewport.size(), viewport.aspect_ratio()), once);
    }

    #[test]
    fn zero_sized_resize_keeps_the_previous_projection() {
        let mut viewport = Viewport::new(Camera::new());
        viewport.resize(800, 600);

        viewport.resize(0, 600);
        viewport.resize(800, 0);
        viewport.resize(0, 0);

        assert_eq!(viewport.size(), (800, 600));
        assert!((viewport.aspect_ratio() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn minimize_then_restore_ends_at_the_restored_aspect() {
        let mut viewport = Viewport::new(Camera::new());
        viewport.resize(800, 600);
        viewport.resize(0, 0);
        viewport.resize(1024, 768);

        assert!((viewport.aspect_ratio() - 1024.0 / 768.0).abs() < 1e-6);
    }

    #[test]
    fn aspect_tracks_the_surface_size() {
        let mut viewport = Viewport::new(Camera::new());
        for &(w, h) in &[(100u32, 100u32), (1920, 1080), (333, 777)] {
            viewport.resize(w, h);
            assert!((viewport.aspect_ratio() - w as f32 / h as f32).abs() < 1e-6);
        }
    }
}
