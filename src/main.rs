extern crate glium;
#[macro_use]
extern crate log;
extern crate pretty_env_logger;
extern crate solarium;

use glium::glutin;
use glium::Surface;
use solarium::camera::Camera;
use solarium::camera_controller::CameraController;
use solarium::render::Renderer;
use solarium::settings::Settings;
use solarium::solar_system::SolarSystem;
use solarium::timeline::Timeline;
use solarium::viewport::Viewport;
use std::path::Path;

fn main() {
    pretty_env_logger::init();

    let settings = Settings::load(Path::new("settings.yaml")).unwrap_or_else(|err| {
        warn!("could not read settings.yaml: {}; using defaults", err);
        Settings::default()
    });

    let mut events_loop = glutin::EventsLoop::new();
    let mut window = glutin::WindowBuilder::new()
        .with_title("Solarium")
        .with_dimensions(glutin::dpi::LogicalSize::new(
            f64::from(settings.width),
            f64::from(settings.height),
        ));
    if settings.fullscreen {
        window = window.with_fullscreen(Some(events_loop.get_primary_monitor()));
    }
    let context = glutin::ContextBuilder::new()
        .with_vsync(settings.vsync)
        .with_depth_buffer(24);
    let display =
        glium::Display::new(window, context, &events_loop).expect("Could not create display");

    let mut camera = Camera::new();
    camera.set_field_of_view(settings.fov_degrees.to_radians());

    let mut viewport = Viewport::new(camera);
    let (width, height) = display.get_framebuffer_dimensions();
    viewport.resize(width, height);

    let mut controller = CameraController::new();
    let mut system = SolarSystem::new();
    let renderer = Renderer::new(&display, &settings).expect("Could not instantiate renderer");

    info!("scene ready: {} nodes", system.graph.len());

    let mut timeline = Timeline::new();
    let mut closed = false;
    let mut left_mouse_pressed = false;
    let mut last_mouse_position = glutin::dpi::LogicalPosition::new(0.0, 0.0);

    while !closed {
        timeline.next_frame();
        if let Some(fps) = timeline.frames_per_second() {
            debug!("{:.1} fps", fps);
        }

        // Advance every rotation by its per-frame increment, then fold the
        // accumulated pointer input into the camera before drawing.
        system.graph.tick();
        controller.tick(viewport.camera_mut());

        let mut frame = display.draw();
        frame.clear_color_and_depth((0.0, 0.0, 0.0, 1.0), 1.0);
        renderer.draw(&mut frame, &viewport.frustum(), &system);
        frame.finish().unwrap();

        events_loop.poll_events(|ev| match ev {
            glutin::Event::WindowEvent { event, .. } => match event {
                glutin::WindowEvent::CloseRequested => closed = true,
                glutin::WindowEvent::Resized(size) => {
                    viewport.resize(size.width as u32, size.height as u32);
                }
                glutin::WindowEvent::MouseInput {
                    state: glutin::ElementState::Pressed,
                    button: glutin::MouseButton::Left,
                    ..
                } => {
                    left_mouse_pressed = true;
                }
                glutin::WindowEvent::MouseInput {
                    state: glutin::ElementState::Released,
                    button: glutin::MouseButton::Left,
                    ..
                } => {
                    left_mouse_pressed = false;
                }
                glutin::WindowEvent::CursorMoved { position, .. } => {
                    let delta_x = position.x - last_mouse_position.x;
                    let delta_y = position.y - last_mouse_position.y;
                    last_mouse_position = position;

                    if left_mouse_pressed {
                        controller.mouse_moved(delta_x, delta_y);
                    }
                }
                glutin::WindowEvent::MouseWheel { delta, .. } => {
                    controller.scroll(match delta {
                        glutin::MouseScrollDelta::LineDelta(_, y) => f64::from(y),
                        glutin::MouseScrollDelta::PixelDelta(position) => position.y / 20.0,
                    });
                }
                _ => (),
            },
            _ => (),
        });
    }

    // Renderer, display and event loop drop here, releasing the GPU
    // resources and the window.
    info!("shutting down");
}
