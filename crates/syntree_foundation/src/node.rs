//! The syntax-tree value.
//!
//! A [`TreeNode`] exclusively owns its children; there are no back-references
//! and no shared mutable state. Children live in an [`LtVec`], so cloning a
//! tree is O(1) and rebuilding one root-to-node path shares every untouched
//! subtree with the original.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::LtVec;
use crate::id::NodeId;
use crate::language::LanguageCode;
use crate::tag::Tag;

/// Descriptive facts attached to a node. Never affects structural invariants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeMetadata {
    /// Part of speech assigned by the classifier.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pos: Option<Tag>,
    /// Source language.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub language: Option<LanguageCode>,
    /// Free-form feature map.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "BTreeMap::is_empty"))]
    pub features: BTreeMap<String, String>,
}

impl NodeMetadata {
    /// Metadata recording a part of speech.
    #[must_use]
    pub fn pos(tag: Tag) -> Self {
        Self {
            pos: Some(tag),
            ..Self::default()
        }
    }

    /// Metadata recording a source language.
    #[must_use]
    pub fn language(language: LanguageCode) -> Self {
        Self {
            language: Some(language),
            ..Self::default()
        }
    }

    /// Builder method to add a feature.
    #[must_use]
    pub fn with_feature(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.features.insert(key.into(), value.into());
        self
    }
}

/// A node of a syntax tree. The root of a tree is itself a `TreeNode`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeNode {
    /// Identifier, unique across the whole tree.
    pub id: NodeId,
    /// Phrase label or surface word.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
    /// Tag drawn from the part-of-speech, phrase, and root tags.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub tag: Tag,
    /// Literal text; present only on terminal nodes.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub value: Option<String>,
    /// Ordered children, left to right.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: LtVec<TreeNode>,
    /// Optional descriptive facts.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub metadata: Option<NodeMetadata>,
}

impl TreeNode {
    /// Creates a childless node with no value or metadata.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, tag: impl Into<Tag>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tag: tag.into(),
            value: None,
            children: LtVec::new(),
            metadata: None,
        }
    }

    /// Creates a terminal node for a surface word. The word is both label and value.
    #[must_use]
    pub fn terminal(id: impl Into<NodeId>, word: impl Into<String>, tag: impl Into<Tag>) -> Self {
        let word = word.into();
        Self {
            value: Some(word.clone()),
            ..Self::new(id, word, tag)
        }
    }

    /// Builder method to append a child.
    #[must_use]
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children = self.children.push_back(child);
        self
    }

    /// Builder method to set metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: NodeMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Returns true if this node carries a literal word.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// Finds the node with the given id anywhere in this subtree.
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&TreeNode> {
        self.iter().find(|node| &node.id == id)
    }

    /// Returns true if a node with the given id exists in this subtree.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Total number of nodes in this subtree, including itself.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Tags of the direct children, left to right.
    #[must_use]
    pub fn child_tags(&self) -> Vec<Tag> {
        self.children.iter().map(|child| child.tag.clone()).collect()
    }

    /// Ids of every node in pre-order.
    #[must_use]
    pub fn ids(&self) -> Vec<NodeId> {
        self.iter().map(|node| node.id.clone()).collect()
    }

    /// Pre-order, left-to-right iterator over this subtree.
    #[must_use]
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`TreeNode::iter`].
#[derive(Debug)]
pub struct Nodes<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let mut children: Vec<&TreeNode> = node.children.iter().collect();
        children.reverse();
        self.stack.extend(children);
        Some(node)
    }
}
