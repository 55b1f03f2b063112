//! Node type registration.
//!
//! A [`PluginRegistry`] is the table of deformer node types a host
//! knows about. [`initialize_plugin`] and [`uninitialize_plugin`] add and
//! remove both collision deformers. They are best effort: failures are
//! logged and the remaining registrations still run.

use std::collections::BTreeMap;

use imprint_types::{ImprintError, ImprintResult, NodeTypeId};
use serde::{Deserialize, Serialize};

use crate::deformer::{CollisionDeformer, Deformer, MultiCollisionDeformer};

/// Which deformer implementation a descriptor instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Collision,
    MultiCollision,
}

impl NodeKind {
    /// A fresh node of this kind with default settings.
    pub fn instantiate(self) -> Box<dyn Deformer> {
        match self {
            NodeKind::Collision => Box::new(CollisionDeformer::new()),
            NodeKind::MultiCollision => Box::new(MultiCollisionDeformer::new()),
        }
    }
}

/// A registered node type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub name: String,
    pub type_id: NodeTypeId,
    pub kind: NodeKind,
    /// Accepts per-vertex paint weights.
    pub paintable: bool,
}

impl NodeDescriptor {
    pub fn collision() -> Self {
        Self {
            name: CollisionDeformer::NAME.into(),
            type_id: CollisionDeformer::TYPE_ID,
            kind: NodeKind::Collision,
            paintable: true,
        }
    }

    pub fn multi_collision() -> Self {
        Self {
            name: MultiCollisionDeformer::NAME.into(),
            type_id: MultiCollisionDeformer::TYPE_ID,
            kind: NodeKind::MultiCollision,
            paintable: true,
        }
    }
}

/// Registered node types, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    nodes: BTreeMap<String, NodeDescriptor>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node type.
    ///
    /// Fails if the name or the type id is already taken.
    pub fn register(&mut self, descriptor: NodeDescriptor) -> ImprintResult<()> {
        if self.nodes.contains_key(&descriptor.name) {
            return Err(ImprintError::Registration(format!(
                "node name '{}' is already registered",
                descriptor.name
            )));
        }
        if self.by_id(descriptor.type_id).is_some() {
            return Err(ImprintError::Registration(format!(
                "node id {} is already registered",
                descriptor.type_id
            )));
        }
        self.nodes.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Removes the node type with `type_id` and returns its descriptor.
    pub fn deregister(&mut self, type_id: NodeTypeId) -> ImprintResult<NodeDescriptor> {
        let name = self
            .by_id(type_id)
            .map(|d| d.name.clone())
            .ok_or_else(|| {
                ImprintError::Registration(format!("node id {type_id} is not registered"))
            })?;
        self.nodes
            .remove(&name)
            .ok_or_else(|| ImprintError::Registration(format!("node '{name}' vanished")))
    }

    /// Looks up a node type by name.
    pub fn get(&self, name: &str) -> Option<&NodeDescriptor> {
        self.nodes.get(name)
    }

    pub fn by_id(&self, type_id: NodeTypeId) -> Option<&NodeDescriptor> {
        self.nodes.values().find(|d| d.type_id == type_id)
    }

    /// Instantiates a registered node type.
    pub fn create(&self, name: &str) -> ImprintResult<Box<dyn Deformer>> {
        self.get(name)
            .map(|d| d.kind.instantiate())
            .ok_or_else(|| ImprintError::Registration(format!("unknown node type '{name}'")))
    }

    /// Returns all registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.nodes.keys().map(String::as_str).collect()
    }

    /// Names of node types that accept paint weights.
    pub fn paintable(&self) -> Vec<&str> {
        self.nodes
            .values()
            .filter(|d| d.paintable)
            .map(|d| d.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Register both collision deformers.
///
/// Returns the number that registered successfully.
pub fn initialize_plugin(registry: &mut PluginRegistry) -> usize {
    [NodeDescriptor::collision(), NodeDescriptor::multi_collision()]
        .into_iter()
        .filter(|descriptor| match registry.register(descriptor.clone()) {
            Ok(()) => {
                tracing::debug!(node = %descriptor.name, id = %descriptor.type_id, "registered node");
                true
            }
            Err(e) => {
                tracing::error!(node = %descriptor.name, error = %e, "failed to register node");
                false
            }
        })
        .count()
}

/// Deregister both collision deformers.
///
/// Returns the number that deregistered successfully.
pub fn uninitialize_plugin(registry: &mut PluginRegistry) -> usize {
    [CollisionDeformer::TYPE_ID, MultiCollisionDeformer::TYPE_ID]
        .into_iter()
        .filter(|&id| match registry.deregister(id) {
            Ok(descriptor) => {
                tracing::debug!(node = %descriptor.name, "deregistered node");
                true
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "failed to deregister node");
                false
            }
        })
        .count()
}
