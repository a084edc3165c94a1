use crate::scene::{Body, Node, NodeId, SceneGraph};
use nalgebra::Vector3;

/// The texture catalog of the scene. A `scene::Body` refers to its texture by
/// `index()`; the renderer resolves the index against whatever it loaded.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BodyImage {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
}

impl BodyImage {
    pub fn index(self) -> usize {
        match self {
            BodyImage::Sun => 0,
            BodyImage::Mercury => 1,
            BodyImage::Venus => 2,
            BodyImage::Earth => 3,
            BodyImage::Mars => 4,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            BodyImage::Sun => "sun.jpg",
            BodyImage::Mercury => "mercury.jpg",
            BodyImage::Venus => "venus.jpg",
            BodyImage::Earth => "earth.jpg",
            BodyImage::Mars => "mars.jpg",
        }
    }

    /// Flat color used when the image file is missing.
    pub fn fallback_color(self) -> [u8; 3] {
        match self {
            BodyImage::Sun => [244, 188, 66],
            BodyImage::Mercury => [151, 138, 129],
            BodyImage::Venus => [205, 165, 95],
            BodyImage::Earth => [62, 108, 173],
            BodyImage::Mars => [178, 90, 53],
        }
    }

    pub fn values() -> impl Iterator<Item = &'static BodyImage> {
        static VALUES: [BodyImage; 5] = [
            BodyImage::Sun,
            BodyImage::Mercury,
            BodyImage::Venus,
            BodyImage::Earth,
            BodyImage::Mars,
        ];
        VALUES.iter()
    }
}

// Rotation increments in radians per clock tick. These are the literal
// constants of the scene, not derived from any orbital-period formula;
// perceived speed therefore depends on the display refresh rate.
pub const SYSTEM_REVOLVE: f64 = 0.009;
pub const SUN_SPIN: f64 = 0.005;
pub const MERCURY_REVOLVE: f64 = 0.01;
pub const VENUS_REVOLVE: f64 = 0.007;
pub const EARTH_SPIN: f64 = 0.01;
pub const MARS_REVOLVE: f64 = 0.001;
pub const MARS_SPIN: f64 = 0.004;

const SUN_RADIUS: f64 = 5.0;
const MERCURY_RADIUS: f64 = 1.0;
const VENUS_RADIUS: f64 = 2.0;
const EARTH_RADIUS: f64 = 3.0;
const MARS_RADIUS: f64 = 1.8;

const MERCURY_OFFSET: f64 = -15.0;
const VENUS_OFFSET: f64 = -25.0;
const EARTH_OFFSET: f64 = -35.0;
const MARS_OFFSET: f64 = -39.0;

/// A body that orbits: the pivot node that revolves and the body node that
/// hangs off it at the orbit offset.
#[derive(Copy, Clone, Debug)]
pub struct Orbiter {
    pub pivot: NodeId,
    pub body: NodeId,
}

/// Wraps `body` in a fresh pivot under `parent`. The body sits at
/// `orbit_offset` from the pivot origin, so revolving the pivot at
/// `revolve` radians per tick sweeps the body through a circular path of
/// radius `|orbit_offset|`. Bodies with a zero offset need no pivot and
/// should be added to their parent directly instead.
pub fn create_pivot(
    graph: &mut SceneGraph,
    parent: NodeId,
    body: Node,
    orbit_offset: Vector3<f64>,
    revolve: f64,
) -> Orbiter {
    let pivot = graph.add(parent, Node::new().with_increment(revolve));
    let body = graph.add(pivot, body.with_position(orbit_offset));
    Orbiter { pivot, body }
}

/// The assembled scene: the graph plus handles to every independently
/// animated node.
pub struct SolarSystem {
    pub graph: SceneGraph,

    /// The shared "solar system" group; revolving it rotates everything
    /// except the camera.
    pub system: NodeId,

    pub sun: NodeId,
    pub mercury: Orbiter,
    pub venus: Orbiter,
    pub earth: NodeId,
    pub mars: Orbiter,
}

impl SolarSystem {
    pub fn new() -> SolarSystem {
        let mut graph = SceneGraph::new();
        let root = graph.root();

        let system = graph.add(root, Node::new().with_increment(SYSTEM_REVOLVE));

        // The sun spins in place: orbit offset zero, so no pivot.
        let sun = graph.add(
            system,
            Node::new()
                .with_increment(SUN_SPIN)
                .with_body(body_of(SUN_RADIUS, BodyImage::Sun, false)),
        );

        let mercury = create_pivot(
            &mut graph,
            system,
            Node::new().with_body(body_of(MERCURY_RADIUS, BodyImage::Mercury, true)),
            Vector3::new(0.0, 0.0, MERCURY_OFFSET),
            MERCURY_REVOLVE,
        );

        let venus = create_pivot(
            &mut graph,
            system,
            Node::new().with_body(body_of(VENUS_RADIUS, BodyImage::Venus, true)),
            Vector3::new(0.0, 0.0, VENUS_OFFSET),
            VENUS_REVOLVE,
        );

        // Earth hangs directly off the system group, so it revolves at the
        // group's rate while spinning at its own.
        let earth = graph.add(
            system,
            Node::new()
                .with_position(Vector3::new(0.0, 0.0, EARTH_OFFSET))
                .with_increment(EARTH_SPIN)
                .with_body(body_of(EARTH_RADIUS, BodyImage::Earth, true)),
        );

        let mars = create_pivot(
            &mut graph,
            system,
            Node::new()
                .with_increment(MARS_SPIN)
                .with_body(body_of(MARS_RADIUS, BodyImage::Mars, true)),
            Vector3::new(0.0, 0.0, MARS_OFFSET),
            MARS_REVOLVE,
        );

        SolarSystem {
            graph,
            system,
            sun,
            mercury,
            venus,
            earth,
            mars,
        }
    }
}

impl Default for SolarSystem {
    fn default() -> SolarSystem {
        SolarSystem::new()
    }
}

fn body_of(radius: f64, image: BodyImage, lit: bool) -> Body {
    Body {
        radius,
        texture: image.index(),
        lit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn builder_produces_the_expected_tree() {
        let system = SolarSystem::new();
        let graph = &system.graph;

        // root + group + sun + earth + three pivots + three bodies
        assert_eq!(graph.len(), 10);

        assert_eq!(graph.node(system.system).parent(), Some(graph.root()));
        assert_eq!(graph.node(system.sun).parent(), Some(system.system));
        assert_eq!(graph.node(system.earth).parent(), Some(system.system));
        for orbiter in &[system.mercury, system.venus, system.mars] {
            assert_eq!(graph.node(orbiter.pivot).parent(), Some(system.system));
            assert_eq!(graph.node(orbiter.body).parent(), Some(orbiter.pivot));
            assert!(graph.node(orbiter.pivot).body.is_none());
            assert!(graph.node(orbiter.body).body.is_some());
        }
    }

    #[test]
    fn increments_match_the_scene_constants() {
        let mut system = SolarSystem::new();

        for _ in 0..100 {
            system.graph.tick();
        }

        let graph = &system.graph;
        assert_close(graph.node(system.system).rotation, 0.9);
        assert_close(graph.node(system.sun).rotation, 0.5);
        assert_close(graph.node(system.mercury.pivot).rotation, 1.0);
        assert_close(graph.node(system.mercury.body).rotation, 0.0);
        assert_close(graph.node(system.venus.pivot).rotation, 0.7);
        assert_close(graph.node(system.earth).rotation, 1.0);
        assert_close(graph.node(system.mars.pivot).rotation, 0.1);
        assert_close(graph.node(system.mars.body).rotation, 0.4);
    }

    #[test]
    fn sun_plus_one_planet_accumulate_independently() {
        // Minimal system: a sun spinning at 0.005 and one planet at offset 15
        // spinning and revolving at 0.01 per call.
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let sun = graph.add(root, Node::new().with_increment(0.005));
        let planet = create_pivot(
            &mut graph,
            root,
            Node::new().with_increment(0.01),
            Vector3::new(0.0, 0.0, 15.0),
            0.01,
        );

        for _ in 0..100 {
            graph.tick();
        }

        assert_close(graph.node(planet.body).rotation, 1.0);
        assert_close(graph.node(planet.pivot).rotation, 1.0);
        assert_close(graph.node(sun).rotation, 0.5);
    }

    #[test]
    fn orbit_radius_is_preserved_while_ticking() {
        let mut system = SolarSystem::new();

        for _ in 0..250 {
            system.graph.tick();

            // Every rotation in the chain is about the origin, so the
            // distance from the sun never drifts.
            let mercury =
                system.graph.world_transform(system.mercury.body) * Point3::new(0.0, 0.0, 0.0);
            assert_close(mercury.coords.norm(), 15.0);
        }
    }

    #[test]
    fn body_image_indices_are_dense_and_distinct() {
        let mut seen = vec![false; 5];
        for image in BodyImage::values() {
            assert!(!seen[image.index()]);
            seen[image.index()] = true;
        }
        assert!(seen.into_iter().all(|s| s));
    }
}
