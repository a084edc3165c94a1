#[macro_use]
extern crate glium;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

extern crate image;
extern crate nalgebra;
extern crate serde_yaml;

pub mod camera;
pub mod camera_controller;
pub mod frustum;
pub mod render;
pub mod scene;
pub mod settings;
pub mod solar_system;
pub mod timeline;
pub mod transform;
pub mod viewport;
