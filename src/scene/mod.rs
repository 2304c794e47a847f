//! Minimal named-node registry for the loaded geometry.
//!
//! The core does not own meshes or materials; it only needs somewhere to
//! publish the panel orientation. The render surface registers the node
//! names from its loaded geometry, and the session writes rotations onto
//! the chosen rotation target every frame.

use std::collections::HashMap;

use glam::Quat;

/// Identifier for a registered scene node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneNodeId(pub u64);

/// A registered node: a name and the rotation the core writes to it.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub rotation: Quat,
}

/// Flat registry of named nodes with a root.
pub struct SceneNodes {
    nodes: HashMap<SceneNodeId, SceneNode>,
    root: SceneNodeId,
    next_id: u64,
}

impl SceneNodes {
    /// Create a registry containing only the root node.
    pub fn new() -> Self {
        let root_id = SceneNodeId(0);
        let root = SceneNode {
            name: "root".to_string(),
            rotation: Quat::IDENTITY,
        };

        let mut nodes = HashMap::new();
        nodes.insert(root_id, root);

        Self {
            nodes,
            root: root_id,
            next_id: 1,
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> SceneNodeId {
        self.root
    }

    /// Register a named node. Returns the new node's ID.
    pub fn add(&mut self, name: impl Into<String>) -> SceneNodeId {
        let id = SceneNodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            SceneNode {
                name: name.into(),
                rotation: Quat::IDENTITY,
            },
        );
        id
    }

    /// Find a node by name.
    pub fn find(&self, name: &str) -> Option<SceneNodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(id, _)| *id)
    }

    /// Resolve the rotation target by name, falling back to the root.
    ///
    /// A missing target is not a failure: the whole geometry rotates
    /// instead, and the session carries on.
    pub fn rotation_target(&self, name: &str) -> SceneNodeId {
        match self.find(name) {
            Some(id) => id,
            None => {
                log::warn!("rotation target '{name}' not found, using geometry root");
                self.root
            }
        }
    }

    /// Write a node's rotation. Unknown ids are ignored.
    pub fn set_rotation(&mut self, id: SceneNodeId, rotation: Quat) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.rotation = rotation;
        }
    }

    /// Read a node's rotation.
    pub fn rotation(&self, id: SceneNodeId) -> Option<Quat> {
        self.nodes.get(&id).map(|node| node.rotation)
    }

    /// Number of registered nodes (including the root).
    pub fn count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for SceneNodes {
    fn default() -> Self {
        Self::new()
    }
}
