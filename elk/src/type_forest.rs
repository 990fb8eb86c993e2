//  Library for the Elk programming language.
// Copyright (C) 2021 The Elk Developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use crate::{
    errors::{ElkError, ElkResult},
    ids::NodeId,
};
use log::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeNode {
    pub id: NodeId,
    pub name: String,
    /// The type this one specializes, if any.
    pub of: Option<NodeId>,
}

/// Types linked to the type they specialize. Each node has at most one parent and no node is its
/// own ancestor, so the nodes form disjoint trees.
#[derive(Clone, Debug, Default)]
pub struct TypeForest {
    nodes: Vec<TypeNode>,
}

impl TypeForest {
    pub fn insert_type(&mut self, name: &str, of: Option<NodeId>) -> ElkResult<NodeId> {
        if let Some(parent) = of {
            self.node(parent)?;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(TypeNode {
            id,
            name: name.into(),
            of,
        });
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> ElkResult<&TypeNode> {
        self.nodes.get(id.0).ok_or(ElkError::UnknownTypeNode(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every other node with the same parent. A node without a parent has no siblings.
    pub fn siblings_of(&self, id: NodeId) -> ElkResult<Vec<NodeId>> {
        match self.node(id)?.of {
            None => Ok(vec![]),
            Some(parent) => Ok(self
                .descendants_of(parent)?
                .into_iter()
                .filter(|sibling| *sibling != id)
                .collect()),
        }
    }

    /// The direct children of a node. Grandchildren are not included.
    pub fn descendants_of(&self, id: NodeId) -> ElkResult<Vec<NodeId>> {
        self.node(id)?;
        Ok(self
            .nodes
            .iter()
            .filter(|node| node.id != id && node.of == Some(id))
            .map(|node| node.id)
            .collect())
    }

    /// Whether a value of type `from` may be treated as a `to`, by identity, a direct parent or
    /// child relation, or through the parent shared by two siblings.
    pub fn conversion_paths(&self, from: NodeId, to: NodeId) -> ElkResult<bool> {
        debug!("conversion_paths({}, {})", from, to);
        let from_parent = self.node(from)?.of;
        let to_parent = self.node(to)?.of;
        if from == to {
            return Ok(true);
        }
        if from_parent == Some(to) {
            return Ok(true);
        }
        if to_parent == Some(from) {
            return Ok(true);
        }
        match (from_parent, to_parent) {
            (Some(f), Some(t)) if f == t => {
                Ok(self.conversion_paths(from, f)? && self.conversion_paths(f, to)?)
            },
            _ => Ok(false),
        }
    }
}
