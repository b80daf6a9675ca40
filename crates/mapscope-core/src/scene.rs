//! Scene graph arena.
//!
//! Rendering itself happens elsewhere; the scene here is the authoritative
//! record of which node trees are currently part of the displayed plot.
//! Nodes live in an arena and are referenced by [`NodeId`] handles, so
//! elements, overlays, and the composer can all point at the same node
//! without shared ownership.

use crate::material::Material;

/// Handle to a node in the scene arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the scene graph.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Material for this node's geometry, if it draws anything itself.
    pub material: Option<Material>,
    /// Child nodes, e.g. the per-glyph meshes of a text element.
    pub children: Vec<NodeId>,
    /// Whether the node draws when its tree is in the scene.
    pub visible: bool,
    /// Draw-order override; higher draws later.
    pub render_order: i32,
}

impl Node {
    /// Creates a visible node with the given material.
    pub fn with_material(material: Material) -> Self {
        Self {
            material: Some(material),
            children: Vec::new(),
            visible: true,
            render_order: 0,
        }
    }

    /// Creates a visible node that only holds children.
    pub fn container() -> Self {
        Self {
            material: None,
            children: Vec::new(),
            visible: true,
            render_order: 0,
        }
    }
}

/// The scene: a node arena plus an insertion-ordered membership set.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    members: Vec<NodeId>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a node in the arena. The node is not yet part of the scene.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns a node by handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this scene.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns a mutable node by handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this scene.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Adds a node tree to the scene. Idempotent.
    pub fn add(&mut self, id: NodeId) {
        if !self.contains(id) {
            self.members.push(id);
        }
    }

    /// Removes a node tree from the scene. Idempotent.
    pub fn remove(&mut self, id: NodeId) {
        self.members.retain(|&m| m != id);
    }

    /// Returns whether a node tree is currently in the scene.
    pub fn contains(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    /// Returns the scene members in insertion order.
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    /// Number of allocated nodes (in or out of the scene).
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove_idempotent() {
        let mut scene = Scene::new();
        let id = scene.insert(Node::container());

        scene.add(id);
        scene.add(id);
        assert_eq!(scene.members().len(), 1);
        assert!(scene.contains(id));

        scene.remove(id);
        scene.remove(id);
        assert!(!scene.contains(id));
        assert!(scene.members().is_empty());
    }

    #[test]
    fn test_membership_order() {
        let mut scene = Scene::new();
        let a = scene.insert(Node::container());
        let b = scene.insert(Node::container());
        let c = scene.insert(Node::container());
        scene.add(b);
        scene.add(a);
        scene.add(c);
        assert_eq!(scene.members(), &[b, a, c]);
    }

    #[test]
    fn test_children_and_materials() {
        let mut scene = Scene::new();
        let child = scene.insert(Node::with_material(Material::default()));
        let root = scene.insert(Node::container());
        scene.node_mut(root).children.push(child);

        assert!(scene.node(root).material.is_none());
        assert!(scene.node(child).material.is_some());
        assert_eq!(scene.node(root).children, vec![child]);
    }
}
