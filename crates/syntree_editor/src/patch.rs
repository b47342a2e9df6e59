//! Partial node updates.

use syntree_foundation::{NodeMetadata, Tag, TreeNode};

/// Changes to apply to one node. Unset fields are left alone.
///
/// `value` and `metadata` distinguish "leave alone" (`None`) from "clear"
/// (`Some(None)`). Ids and children are not patchable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePatch {
    /// New label.
    pub label: Option<String>,
    /// New tag.
    pub tag: Option<Tag>,
    /// New literal value, or `Some(None)` to clear it.
    pub value: Option<Option<String>>,
    /// New metadata, or `Some(None)` to clear it.
    pub metadata: Option<Option<NodeMetadata>>,
}

impl NodePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder method to set the tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Builder method to set the value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(Some(value.into()));
        self
    }

    /// Builder method to clear the value.
    #[must_use]
    pub fn clear_value(mut self) -> Self {
        self.value = Some(None);
        self
    }

    /// Builder method to set the metadata.
    #[must_use]
    pub fn metadata(mut self, metadata: NodeMetadata) -> Self {
        self.metadata = Some(Some(metadata));
        self
    }

    /// Builder method to clear the metadata.
    #[must_use]
    pub fn clear_metadata(mut self) -> Self {
        self.metadata = Some(None);
        self
    }

    /// Returns true if applying this patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.tag.is_none() && self.value.is_none() && self.metadata.is_none()
    }

    /// Returns a copy of `node` with this patch applied.
    #[must_use]
    pub fn apply(&self, node: &TreeNode) -> TreeNode {
        let mut patched = node.clone();
        if let Some(label) = &self.label {
            patched.label.clone_from(label);
        }
        if let Some(tag) = &self.tag {
            patched.tag = tag.clone();
        }
        if let Some(value) = &self.value {
            patched.value.clone_from(value);
        }
        if let Some(metadata) = &self.metadata {
            patched.metadata.clone_from(metadata);
        }
        patched
    }
}
