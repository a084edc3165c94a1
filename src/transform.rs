pub type Transform = nalgebra::Isometry3<f64>;

/// Anything that carries a rigid-body transform and lets a driver write it.
pub trait Transformable: Sized {
    fn transform(&self) -> &Transform;
    fn transform_mut(&mut self) -> &mut Transform;
}
