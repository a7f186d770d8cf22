use glam::{Mat4, Vec3};

use crate::math::AABB;

/// Upper bound on parent hops when walking toward the root
pub const MAX_DEPTH: usize = 32;

/// Index of a node inside its `SceneGraph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Back-reference to the owning group. The graph owns every node;
    /// this is only an index for walking upward.
    parent: Option<NodeId>,
    pub name: String,
    pub translation: Vec3,
    /// Rotation about the local Y axis, radians
    pub rotation_y: f32,
    /// Local-space box for pickable surfaces; `None` for pure groups
    pub bounds: Option<AABB>,
    /// Entity identifier carried by interactive groups
    pub tag: Option<String>,
}

impl SceneNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation) * Mat4::from_rotation_y(self.rotation_y)
    }
}

/// Flat arena of spatial nodes
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, parent: Option<NodeId>, name: &str, translation: Vec3, bounds: Option<AABB>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            parent,
            name: name.to_string(),
            translation,
            rotation_y: 0.0,
            bounds,
            tag: None,
        });
        id
    }

    /// Add a transform-only node
    pub fn add_group(&mut self, parent: Option<NodeId>, name: &str, translation: Vec3) -> NodeId {
        self.push(parent, name, translation, None)
    }

    /// Add a pickable surface with local bounds
    pub fn add_mesh(&mut self, parent: Option<NodeId>, name: &str, translation: Vec3, bounds: AABB) -> NodeId {
        self.push(parent, name, translation, Some(bounds))
    }

    pub fn set_tag(&mut self, id: NodeId, tag: &str) {
        self.nodes[id.0].tag = Some(tag.to_string());
    }

    pub fn set_rotation_y(&mut self, id: NodeId, angle: f32) {
        self.nodes[id.0].rotation_y = angle;
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node itself, then each parent up to the root or `MAX_DEPTH` hops
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |current| self.nodes[current.0].parent).take(MAX_DEPTH + 1)
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        self.ancestors(id)
            .fold(Mat4::IDENTITY, |acc, node| self.node(node).local_matrix() * acc)
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.world_matrix(id).transform_point3(Vec3::ZERO)
    }

    pub fn world_bounds(&self, id: NodeId) -> Option<AABB> {
        let bounds = self.node(id).bounds?;
        Some(bounds.transformed(&self.world_matrix(id)))
    }

    /// All nodes carrying a surface
    pub fn meshes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.bounds.is_some())
            .map(|(index, _)| NodeId(index))
    }

    pub fn find_tagged(&self, tag: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.tag.as_deref() == Some(tag))
            .map(NodeId)
    }
}
