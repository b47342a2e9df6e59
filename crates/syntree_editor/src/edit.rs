//! Tree mutation by structural recursion.
//!
//! Each operation locates its target, rebuilds the nodes on the path from
//! the target up to the root, and returns the new root. Validation happens
//! before any rebuilding, so an error always means the input tree is the
//! only tree there is.

use syntree_foundation::{
    Error, ErrorKind, LtVec, NodeId, NodeIdGenerator, Result, Tag, TreeNode,
};
use tracing::debug;

use crate::patch::NodePatch;

/// Owns the id generator used for a sequence of edits.
#[derive(Debug, Default)]
pub struct TreeEditor {
    ids: NodeIdGenerator,
}

impl TreeEditor {
    /// Creates an editor with a randomly seeded id generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor whose ids follow a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            ids: NodeIdGenerator::seeded(seed),
        }
    }

    /// Appends a fresh node under `parent_id`. See [`add_node`].
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if no node has `parent_id`.
    pub fn add_node(
        &mut self,
        tree: &TreeNode,
        parent_id: &NodeId,
        label: impl Into<String>,
        tag: impl Into<Tag>,
    ) -> Result<(TreeNode, NodeId)> {
        add_node(tree, parent_id, label, tag, &mut self.ids)
    }
}

/// Appends a new childless node as the last child of `parent_id`.
///
/// The new id is drawn from `ids` until it collides with nothing in the tree.
/// Returns the new tree and the new node's id.
///
/// # Errors
///
/// Returns `NodeNotFound` if no node has `parent_id`.
pub fn add_node(
    tree: &TreeNode,
    parent_id: &NodeId,
    label: impl Into<String>,
    tag: impl Into<Tag>,
    ids: &mut NodeIdGenerator,
) -> Result<(TreeNode, NodeId)> {
    if !tree.contains(parent_id) {
        return Err(Error::node_not_found(parent_id.clone()));
    }

    let mut id = ids.next_id();
    while tree.contains(&id) {
        id = ids.next_id();
    }

    let node = TreeNode::new(id.clone(), label, tag);
    let updated = map_node(tree, parent_id, |parent| parent.clone().with_child(node))
        .ok_or_else(|| Error::node_not_found(parent_id.clone()))?;

    debug!(parent = %parent_id, node = %id, "added node");
    Ok((updated, id))
}

/// Removes the node with `node_id` and its whole subtree.
///
/// # Errors
///
/// Returns `CannotRemoveRoot` if `node_id` is the root, or `NodeNotFound` if
/// no node has it.
pub fn remove_node(tree: &TreeNode, node_id: &NodeId) -> Result<TreeNode> {
    if &tree.id == node_id {
        return Err(Error::cannot_remove_root(node_id.clone()));
    }

    let (updated, removed) =
        detach(tree, node_id).ok_or_else(|| Error::node_not_found(node_id.clone()))?;

    debug!(node = %node_id, removed = removed.node_count(), "removed subtree");
    Ok(updated)
}

/// Applies a patch to the node with `node_id`.
///
/// # Errors
///
/// Returns `NodeNotFound` if no node has `node_id`.
pub fn update_node(tree: &TreeNode, node_id: &NodeId, patch: &NodePatch) -> Result<TreeNode> {
    let updated = map_node(tree, node_id, |node| patch.apply(node))
        .ok_or_else(|| Error::node_not_found(node_id.clone()))?;

    debug!(node = %node_id, "updated node");
    Ok(updated)
}

/// Detaches the node with `node_id` and reattaches it as the last child of
/// `new_parent_id`.
///
/// # Errors
///
/// - `NodeNotFound` if either id is absent
/// - `CannotRemoveRoot` if `node_id` is the root
/// - `InvalidMove` if `new_parent_id` is the node itself or one of its
///   descendants
pub fn move_node(tree: &TreeNode, node_id: &NodeId, new_parent_id: &NodeId) -> Result<TreeNode> {
    let subtree = tree
        .find(node_id)
        .ok_or_else(|| Error::node_not_found(node_id.clone()))?;
    if !tree.contains(new_parent_id) {
        return Err(Error::node_not_found(new_parent_id.clone()));
    }
    if &tree.id == node_id {
        return Err(Error::cannot_remove_root(node_id.clone()));
    }
    if subtree.contains(new_parent_id) {
        return Err(Error::invalid_move(node_id.clone(), new_parent_id.clone()));
    }

    let (detached, moved) =
        detach(tree, node_id).ok_or_else(|| internal("moved node vanished"))?;
    let updated = map_node(&detached, new_parent_id, |parent| {
        parent.clone().with_child(moved)
    })
    .ok_or_else(|| internal("new parent vanished"))?;

    debug!(node = %node_id, parent = %new_parent_id, "moved subtree");
    Ok(updated)
}

fn internal(message: &str) -> Error {
    Error::new(ErrorKind::Internal(message.to_string()))
}

fn with_children(node: &TreeNode, children: LtVec<TreeNode>) -> TreeNode {
    TreeNode {
        children,
        ..node.clone()
    }
}

/// Replaces the first node with `id`, in pre-order, by `f(node)`.
fn map_node<F>(tree: &TreeNode, id: &NodeId, f: F) -> Option<TreeNode>
where
    F: FnOnce(&TreeNode) -> TreeNode,
{
    let mut f = Some(f);
    map_node_inner(tree, id, &mut f)
}

fn map_node_inner<F>(node: &TreeNode, id: &NodeId, f: &mut Option<F>) -> Option<TreeNode>
where
    F: FnOnce(&TreeNode) -> TreeNode,
{
    if &node.id == id {
        return f.take().map(|f| f(node));
    }
    for (index, child) in node.children.iter().enumerate() {
        if let Some(updated) = map_node_inner(child, id, f) {
            let children = node.children.update(index, updated)?;
            return Some(with_children(node, children));
        }
    }
    None
}

/// Removes the first strict descendant with `id`, returning the new tree and
/// the removed subtree.
fn detach(node: &TreeNode, id: &NodeId) -> Option<(TreeNode, TreeNode)> {
    for (index, child) in node.children.iter().enumerate() {
        if &child.id == id {
            let (children, removed) = node.children.remove(index)?;
            return Some((with_children(node, children), removed));
        }
        if let Some((updated, removed)) = detach(child, id) {
            let children = node.children.update(index, updated)?;
            return Some((with_children(node, children), removed));
        }
    }
    None
}
