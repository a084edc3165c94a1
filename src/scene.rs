use crate::transform::Transform;
use nalgebra::{Translation3, UnitQuaternion, Vector3};
use std::error;
use std::fmt;

/// Handle to a node inside a `SceneGraph`. Only valid for the graph that
/// produced it; nodes are never removed so handles stay valid for the
/// lifetime of the graph.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct NodeId(usize);

/// Visual payload of a node: a textured sphere. The texture is an index into
/// whatever texture table the renderer maintains; the scene graph itself
/// never touches GPU resources.
#[derive(Copy, Clone, Debug)]
pub struct Body {
    pub radius: f64,
    pub texture: usize,

    /// Unlit bodies are drawn at full brightness regardless of the scene
    /// light (the sun is its own light source).
    pub lit: bool,
}

/// A single transform node: a local rotation about the +Y axis, a local
/// offset in the orbital plane and an optional visual payload. The rotation
/// is advanced by `increment` radians on every clock tick and is not wrapped;
/// the trigonometry downstream is periodic so unbounded growth is harmless.
pub struct Node {
    pub position: Vector3<f64>,
    pub rotation: f64,
    pub increment: f64,
    pub body: Option<Body>,

    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new() -> Node {
        Node {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: 0.0,
            increment: 0.0,
            body: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_position(mut self, position: Vector3<f64>) -> Node {
        self.position = position;
        self
    }

    pub fn with_increment(mut self, increment: f64) -> Node {
        self.increment = increment;
        self
    }

    pub fn with_body(mut self, body: Body) -> Node {
        self.body = Some(body);
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Local transform: rotate about +Y, then offset by `position`.
    pub fn local_transform(&self) -> Transform {
        Transform::from_parts(
            Translation3::from_vector(self.position),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.rotation),
        )
    }
}

impl Default for Node {
    fn default() -> Node {
        Node::new()
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum AttachError {
    AttachToSelf,
    WouldCycle,
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttachError::AttachToSelf => write!(f, "cannot attach a node to itself"),
            AttachError::WouldCycle => {
                write!(f, "cannot attach a node to one of its own descendants")
            }
        }
    }
}

impl error::Error for AttachError {}

/// An owned, single-rooted, acyclic tree of transform nodes addressed by
/// `NodeId`. The graph exclusively owns its nodes; parent/child links are
/// plain indices so there are no shared mutable references anywhere.
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    /// Creates a graph containing only the world-origin root node.
    pub fn new() -> SceneGraph {
        SceneGraph {
            nodes: vec![Node::new()],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Inserts `node` as the last child of `parent` and returns its handle.
    pub fn add(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Re-parents `child` under `parent`, detaching it from its current
    /// parent first so a node never has more than one parent. Attaching a
    /// node to itself or to a node inside its own subtree is rejected, which
    /// keeps the tree acyclic and single-rooted.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), AttachError> {
        if parent == child {
            return Err(AttachError::AttachToSelf);
        }
        if self.is_ancestor(child, parent) {
            return Err(AttachError::WouldCycle);
        }

        if let Some(old_parent) = self.nodes[child.0].parent {
            let siblings = &mut self.nodes[old_parent.0].children;
            siblings.retain(|&c| c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// World transform of a node: the parent's world transform composed with
    /// the node's own local transform.
    pub fn world_transform(&self, id: NodeId) -> Transform {
        let node = &self.nodes[id.0];
        match node.parent {
            Some(parent) => self.world_transform(parent) * node.local_transform(),
            None => node.local_transform(),
        }
    }

    /// The animation clock: advances every node's rotation by that node's own
    /// increment. Increments are radians per call, deliberately decoupled
    /// from wall-clock time, and no node reads another node's state.
    pub fn tick(&mut self) {
        for node in self.nodes.iter_mut() {
            node.rotation += node.increment;
        }
    }

    /// Pre-order traversal delivering the world transform of every node that
    /// carries a visual payload.
    pub fn visit_bodies<F: FnMut(&Transform, &Body)>(&self, mut f: F) {
        self.visit(self.root(), &Transform::identity(), &mut f);
    }

    fn visit<F: FnMut(&Transform, &Body)>(&self, id: NodeId, parent_world: &Transform, f: &mut F) {
        let node = &self.nodes[id.0];
        let world = parent_world * node.local_transform();
        if let Some(ref body) = node.body {
            f(&world, body);
        }
        for &child in node.children.iter() {
            self.visit(child, &world, f);
        }
    }

    fn is_ancestor(&self, maybe_ancestor: NodeId, of: NodeId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == maybe_ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }
}

impl Default for SceneGraph {
    fn default() -> SceneGraph {
        SceneGraph::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::f64::consts::PI;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn tick_accumulates_each_increment_independently() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let fast = graph.add(root, Node::new().with_increment(0.01));
        let slow = graph.add(fast, Node::new().with_increment(0.007));
        let still = graph.add(root, Node::new());

        for _ in 0..100 {
            graph.tick();
        }

        assert_close(graph.node(fast).rotation, 1.0);
        assert_close(graph.node(slow).rotation, 0.7);
        assert_close(graph.node(still).rotation, 0.0);
    }

    #[test]
    fn tick_adds_to_an_existing_rotation() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let id = graph.add(root, Node::new().with_increment(0.5));
        graph.node_mut(id).rotation = 1.25;

        graph.tick();
        graph.tick();

        assert_close(graph.node(id).rotation, 2.25);
    }

    #[test]
    fn revolving_a_pivot_sweeps_the_body_through_a_circle() {
        let offset = 15.0;
        for step in 0..16 {
            let theta = f64::from(step) * PI / 8.0;

            let mut graph = SceneGraph::new();
            let pivot = graph.add(graph.root(), Node::new());
            let body = graph.add(pivot, Node::new().with_position(Vector3::new(0.0, 0.0, -offset)));

            graph.node_mut(pivot).rotation = theta;
            let world = graph.world_transform(body) * Point3::new(0.0, 0.0, 0.0);

            // Distance from the pivot origin stays at the orbit radius...
            assert_close(world.coords.norm(), offset);
            // ...and the angular position around it equals the pivot angle.
            assert_close(world.x, -offset * theta.sin());
            assert_close(world.z, -offset * theta.cos());
            assert_close(world.y, 0.0);
        }
    }

    #[test]
    fn world_transform_composes_down_the_tree() {
        let mut graph = SceneGraph::new();
        let outer = graph.add(graph.root(), Node::new());
        let inner = graph.add(outer, Node::new().with_position(Vector3::new(0.0, 0.0, -10.0)));
        let leaf = graph.add(inner, Node::new().with_position(Vector3::new(0.0, 0.0, -5.0)));

        graph.node_mut(outer).rotation = PI;
        let world = graph.world_transform(leaf) * Point3::new(0.0, 0.0, 0.0);

        // The outer half-turn flips both offsets onto +Z.
        assert_close(world.x, 0.0);
        assert_close(world.z, 15.0);
    }

    #[test]
    fn attach_moves_a_node_between_parents() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.add(root, Node::new());
        let b = graph.add(root, Node::new());
        let child = graph.add(a, Node::new());

        graph.attach(b, child).unwrap();

        assert_eq!(graph.node(child).parent(), Some(b));
        assert!(graph.node(a).children().is_empty());
        assert_eq!(graph.node(b).children(), &[child]);
    }

    #[test]
    fn attach_rejects_self_and_descendants() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.add(root, Node::new());
        let b = graph.add(a, Node::new());

        assert_eq!(graph.attach(a, a), Err(AttachError::AttachToSelf));
        assert_eq!(graph.attach(b, a), Err(AttachError::WouldCycle));
        assert_eq!(graph.attach(b, root), Err(AttachError::WouldCycle));

        // The failed attempts left the tree untouched.
        assert_eq!(graph.node(a).parent(), Some(root));
        assert_eq!(graph.node(b).parent(), Some(a));
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let first = graph.add(root, Node::new());
        let second = graph.add(root, Node::new());
        let third = graph.add(root, Node::new());

        assert_eq!(graph.node(root).children(), &[first, second, third]);
    }

    #[test]
    fn visit_bodies_skips_pivots_and_composes_transforms() {
        let mut graph = SceneGraph::new();
        let pivot = graph.add(graph.root(), Node::new());
        graph.add(
            pivot,
            Node::new()
                .with_position(Vector3::new(0.0, 0.0, -15.0))
                .with_body(Body {
                    radius: 1.0,
                    texture: 0,
                    lit: true,
                }),
        );
        graph.node_mut(pivot).rotation = PI / 2.0;

        let mut seen = Vec::new();
        graph.visit_bodies(|world, body| {
            seen.push((world * Point3::new(0.0, 0.0, 0.0), body.radius));
        });

        assert_eq!(seen.len(), 1);
        assert_close(seen[0].0.x, -15.0);
        assert_close(seen[0].1, 1.0);
    }
}
