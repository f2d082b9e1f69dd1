//! Scene graph lookup and the one-shot remap lifecycle.
//!
//! Loaded book assets arrive as a named node tree; the actual book mesh sits
//! a few levels deep (e.g. `Sketchfab_model/Geode/Object_2`). [`BookObject`]
//! resolves that path, runs the remap pipeline exactly once, and exposes a
//! readiness flag. Any failure along the way simply leaves the object
//! not-ready forever; nothing is raised to the caller.

use crate::error::{MapperError, Result};
use crate::geometry::Mesh;
use crate::remap::UvMapper;

/// A node in a loaded scene graph.
#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    /// Node name as authored in the source asset.
    pub name: String,
    /// Mesh payload, if this node carries geometry.
    pub mesh: Option<Mesh>,
    /// Child nodes.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create an empty node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: None,
            children: Vec::new(),
        }
    }

    /// Create a node carrying a mesh.
    pub fn with_mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh: Some(mesh),
            children: Vec::new(),
        }
    }

    /// Add a child node, returning `self` for chaining.
    pub fn add_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search for a descendant (or self) by name.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Resolve a chain of named lookups, each searched from the previous
    /// match.
    pub fn resolve_path(&self, path: &[&str]) -> Result<&SceneNode> {
        let mut node = self;
        for segment in path {
            node = node
                .find(segment)
                .ok_or_else(|| MapperError::UnresolvableNode(segment.to_string()))?;
        }
        Ok(node)
    }
}

/// A loaded book model plus its remap lifecycle state.
///
/// The pipeline runs at most once per instance; the result is cached until
/// the object is dropped (a new book means a new `BookObject`).
#[derive(Debug)]
pub struct BookObject {
    root: SceneNode,
    mesh_path: Vec<String>,
    remapped: Option<Mesh>,
    attempted: bool,
}

impl BookObject {
    /// Wrap a loaded scene, naming the path to the book mesh node.
    pub fn new(root: SceneNode, mesh_path: &[&str]) -> Self {
        Self {
            root,
            mesh_path: mesh_path.iter().map(|s| s.to_string()).collect(),
            remapped: None,
            attempted: false,
        }
    }

    /// Locate the mesh and run the remap pipeline, once.
    ///
    /// Returns the readiness state. An unresolvable node path, a node
    /// without geometry, or a pipeline error all collapse to `false`, and
    /// later calls do not retry; the host shows its loading state instead
    /// of an error.
    pub fn prepare(&mut self, mapper: &UvMapper) -> bool {
        if self.attempted {
            return self.ready();
        }
        self.attempted = true;

        let path: Vec<&str> = self.mesh_path.iter().map(String::as_str).collect();
        let Ok(node) = self.root.resolve_path(&path) else {
            return false;
        };
        let Some(mesh) = node.mesh.as_ref() else {
            return false;
        };

        if let Ok(output) = mapper.remap(mesh) {
            self.remapped = Some(output.mesh);
        }
        self.ready()
    }

    /// Whether the remapped mesh is available.
    pub fn ready(&self) -> bool {
        self.remapped.is_some()
    }

    /// The remapped mesh, once ready.
    pub fn mesh(&self) -> Option<&Mesh> {
        self.remapped.as_ref()
    }

    /// The untouched scene graph.
    pub fn root(&self) -> &SceneNode {
        &self.root
    }
}
