//! Arena-backed scene tree

use crate::foundation::collections::{NodeArena, NodeId};
use crate::foundation::math::{Mat4, Point3, Transform, Vec3};
use crate::material::MaterialRef;

use super::Aabb;

/// Renderable payload of a node: geometry plus one or more material slots
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions in node-local space
    pub positions: Vec<Point3>,
    /// Material slots; entries may share one instance
    pub materials: Vec<MaterialRef>,
}

impl Mesh {
    /// Create a mesh from raw positions and material slots
    pub fn new(positions: Vec<Point3>, materials: Vec<MaterialRef>) -> Self {
        Self { positions, materials }
    }
    
    /// Box geometry of the given full size, centered on the node origin
    pub fn cuboid(size: Vec3, materials: Vec<MaterialRef>) -> Self {
        let bounds = Aabb::from_center_extents(Point3::origin(), size * 0.5);
        Self::new(bounds.corners().to_vec(), materials)
    }
    
    /// Local-space bounds, `None` when the mesh has no vertices
    pub fn local_bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions.iter())
    }
}

/// A single node of the vehicle tree
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Display name supplied by the asset author; unreliable
    pub name: String,
    /// Transform relative to the parent node
    pub transform: Transform,
    /// Optional renderable payload
    pub mesh: Option<Mesh>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    /// Create a group node without geometry
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            mesh: None,
            parent: None,
            children: Vec::new(),
        }
    }
    
    /// Create a mesh-bearing node
    pub fn with_mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::group(name)
        }
    }
    
    /// Set the local transform
    pub fn at(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
    
    /// Whether this node carries geometry
    pub fn is_mesh(&self) -> bool {
        self.mesh.is_some()
    }
    
    /// Ordered child identifiers
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
    
    /// Parent identifier, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Tree of scene nodes rooted at a node representing the whole vehicle
#[derive(Debug, Clone)]
pub struct SceneGraph {
    nodes: NodeArena<SceneNode>,
    root: NodeId,
}

impl SceneGraph {
    /// Create a graph containing only a root group node
    pub fn new(root_name: impl Into<String>) -> Self {
        Self::with_root(SceneNode::group(root_name))
    }
    
    /// Create a graph from an explicit root node
    ///
    /// Any parent/children links on `root` are discarded.
    pub fn with_root(mut root: SceneNode) -> Self {
        root.parent = None;
        root.children.clear();
        let mut nodes = NodeArena::with_key();
        let root = nodes.insert(root);
        Self { nodes, root }
    }
    
    /// Attach `node` as the last child of `parent`
    ///
    /// Returns `None` if `parent` does not belong to this graph.
    pub fn add_child(&mut self, parent: NodeId, mut node: SceneNode) -> Option<NodeId> {
        if !self.nodes.contains_key(parent) {
            return None;
        }
        node.parent = Some(parent);
        node.children.clear();
        let id = self.nodes.insert(node);
        self.nodes[parent].children.push(id);
        Some(id)
    }
    
    /// Identifier of the root node
    pub fn root(&self) -> NodeId {
        self.root
    }
    
    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }
    
    /// Look up a node mutably
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }
    
    /// Ordered children of a node; empty for unknown ids
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }
    
    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }
    
    /// Number of nodes including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    
    /// Always false: a graph has at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    
    /// Depth-first pre-order traversal starting at the root
    ///
    /// Child order is preserved, so the sequence is deterministic for a given
    /// tree.
    pub fn traverse(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }
    
    /// Mesh-bearing nodes in traversal order
    pub fn mesh_nodes(&self) -> Vec<NodeId> {
        self.traverse()
            .into_iter()
            .filter(|id| self.nodes[*id].is_mesh())
            .collect()
    }
    
    /// First node in traversal order with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.traverse()
            .into_iter()
            .find(|id| self.nodes[*id].name == name)
    }
    
    /// Accumulated local-to-world matrix of a node
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::identity();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|id| self.nodes.get(id)) {
            matrix = node.transform.to_matrix() * matrix;
            current = node.parent;
        }
        matrix
    }
    
    /// World-space bounds of a node's own geometry
    ///
    /// `None` for group nodes and meshes without vertices.
    pub fn world_bounds(&self, id: NodeId) -> Option<Aabb> {
        let local = self.nodes.get(id)?.mesh.as_ref()?.local_bounds()?;
        Some(local.transformed(&self.world_matrix(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    
    fn sample_graph() -> (SceneGraph, NodeId, NodeId, NodeId) {
        let mut graph = SceneGraph::new("car");
        let root = graph.root();
        let chassis = graph
            .add_child(root, SceneNode::group("chassis").at(Transform::from_position(Vec3::new(0.0, 1.0, 0.0))))
            .unwrap();
        let door = graph
            .add_child(chassis, SceneNode::with_mesh("door", Mesh::cuboid(Vec3::new(1.0, 1.0, 1.0), vec![])))
            .unwrap();
        let hood = graph
            .add_child(root, SceneNode::with_mesh("hood", Mesh::cuboid(Vec3::new(2.0, 0.1, 1.0), vec![])))
            .unwrap();
        (graph, chassis, door, hood)
    }
    
    #[test]
    fn test_traversal_is_preorder() {
        let (graph, chassis, door, hood) = sample_graph();
        assert_eq!(graph.traverse(), vec![graph.root(), chassis, door, hood]);
        assert_eq!(graph.mesh_nodes(), vec![door, hood]);
        assert_eq!(graph.len(), 4);
    }
    
    #[test]
    fn test_parent_links() {
        let (graph, chassis, door, _) = sample_graph();
        assert_eq!(graph.parent(door), Some(chassis));
        assert_eq!(graph.parent(graph.root()), None);
        assert_eq!(graph.children(chassis), &[door]);
    }
    
    #[test]
    fn test_world_bounds_accumulate_parent_transform() {
        let (graph, _, door, _) = sample_graph();
        let bounds = graph.world_bounds(door).unwrap();
        assert_relative_eq!(bounds.center(), Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(bounds.size(), Vec3::new(1.0, 1.0, 1.0));
    }
    
    #[test]
    fn test_group_has_no_bounds() {
        let (graph, chassis, _, _) = sample_graph();
        assert!(graph.world_bounds(chassis).is_none());
    }
    
    #[test]
    fn test_add_child_to_foreign_id_fails() {
        let (_other, _, door, _) = sample_graph();
        let mut graph = SceneGraph::new("empty");
        assert!(graph.add_child(door, SceneNode::group("orphan")).is_none());
        assert_eq!(graph.len(), 1);
    }
    
    #[test]
    fn test_find_by_name() {
        let (graph, _, _, hood) = sample_graph();
        assert_eq!(graph.find_by_name("hood"), Some(hood));
        assert_eq!(graph.find_by_name("trunk"), None);
    }
}
