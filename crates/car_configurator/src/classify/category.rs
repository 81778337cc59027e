//! Categories and the per-scene assignment

use serde::{Deserialize, Serialize};

use crate::foundation::collections::NodeId;
use crate::scene::SceneGraph;

/// Semantic part category of a mesh node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Painted exterior shell
    Body,
    /// Wheels, rims and tires
    Wheel,
    /// Cabin surfaces
    Interior,
    /// Everything customization must leave alone
    Excluded,
}

impl Category {
    /// Every category, in precedence order
    pub const ALL: [Self; 4] = [Self::Body, Self::Wheel, Self::Interior, Self::Excluded];

    const fn index(self) -> usize {
        match self {
            Self::Body => 0,
            Self::Wheel => 1,
            Self::Interior => 2,
            Self::Excluded => 3,
        }
    }

    /// Lowercase display name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Wheel => "wheel",
            Self::Interior => "interior",
            Self::Excluded => "excluded",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from category to the mesh nodes it contains
///
/// Every mesh node of the classified scene appears in exactly one category;
/// node order within a category follows scene traversal order. Built once per
/// scene by [`super::SceneClassifier::classify`] and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAssignment {
    groups: [Vec<NodeId>; 4],
}

impl CategoryAssignment {
    pub(crate) fn push(&mut self, category: Category, id: NodeId) {
        self.groups[category.index()].push(id);
    }

    /// Nodes assigned to `category`
    pub fn nodes(&self, category: Category) -> &[NodeId] {
        &self.groups[category.index()]
    }

    /// Category a node was assigned to, `None` for non-mesh or unknown nodes
    pub fn category_of(&self, id: NodeId) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| self.contains(*category, id))
    }

    /// Whether `id` belongs to `category`
    pub fn contains(&self, category: Category, id: NodeId) -> bool {
        self.nodes(category).contains(&id)
    }

    /// Number of nodes in `category`
    pub fn len(&self, category: Category) -> usize {
        self.nodes(category).len()
    }

    /// Whether `category` has no nodes
    pub fn is_empty(&self, category: Category) -> bool {
        self.nodes(category).is_empty()
    }

    /// Total number of classified mesh nodes
    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Iterate categories with their nodes
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[NodeId])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.nodes(category)))
    }

    /// Node names of a category, resolved against `graph`
    pub fn names<'g>(&self, graph: &'g SceneGraph, category: Category) -> Vec<&'g str> {
        self.nodes(category)
            .iter()
            .filter_map(|id| graph.node(*id))
            .map(|node| node.name.as_str())
            .collect()
    }
}
