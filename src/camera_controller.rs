use crate::camera::Camera;
use crate::transform::{Transform, Transformable};
use nalgebra::{Point3, Vector3};

const ROTATE_SENSITIVITY: f64 = 0.005;
const PITCH_LIMIT: f64 = 1.55;
const DOLLY_STEP: f64 = 0.95;
const MIN_DISTANCE: f64 = 8.0;
const MAX_DISTANCE: f64 = 200.0;

/// Per-frame fraction by which the damped state closes in on its target.
/// Applied once per `tick`, not scaled by elapsed time.
const DAMPING: f64 = 0.15;

/// Interactive orbit control: the camera circles a fixed focus point at a
/// controlled yaw, pitch and distance. Pointer input only moves the targets;
/// `tick` advances the damped state once per frame and writes the camera
/// transform. The control never touches scene nodes.
pub struct CameraController {
    focus: Point3<f64>,

    yaw: f64,
    pitch: f64,
    distance: f64,

    target_yaw: f64,
    target_pitch: f64,
    target_distance: f64,
}

impl CameraController {
    pub fn new() -> CameraController {
        CameraController {
            focus: Point3::new(0.0, 0.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            distance: 20.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
            target_distance: 20.0,
        }
    }

    /// Accumulates a pointer drag, in surface pixels. The caller decides what
    /// counts as a drag (typically: left button held).
    pub fn mouse_moved(&mut self, delta_x: f64, delta_y: f64) {
        self.target_yaw -= delta_x * ROTATE_SENSITIVITY;
        self.target_pitch = (self.target_pitch - delta_y * ROTATE_SENSITIVITY)
            .max(-PITCH_LIMIT)
            .min(PITCH_LIMIT);
    }

    /// Accumulates scroll-wheel input; positive amounts dolly in.
    pub fn scroll(&mut self, amount: f64) {
        self.target_distance = (self.target_distance * DOLLY_STEP.powf(amount))
            .max(MIN_DISTANCE)
            .min(MAX_DISTANCE);
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Advances the damping one step and points the camera at the focus from
    /// the resulting orbit position. Must run once per frame, before the
    /// frame is drawn, so input accumulated since the last call shows up.
    pub fn tick(&mut self, camera: &mut Camera) {
        self.yaw += (self.target_yaw - self.yaw) * DAMPING;
        self.pitch += (self.target_pitch - self.pitch) * DAMPING;
        self.distance += (self.target_distance - self.distance) * DAMPING;

        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let offset = Vector3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw);
        let eye = self.focus + offset * self.distance;

        *camera.transform_mut() = Transform::look_at_rh(&eye, &self.focus, &Vector3::y());
    }
}

impl Default for CameraController {
    fn default() -> CameraController {
        CameraController::new()
    }
}
