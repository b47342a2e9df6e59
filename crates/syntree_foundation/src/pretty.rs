//! Plain indented-text rendering of trees.
//!
//! One line per node, `TYPE` or `TYPE: value`, indented by depth.
//!
//! # Example
//!
//! ```
//! use syntree_foundation::{render_text, PhraseTag, PosTag, Tag, TreeNode};
//!
//! let tree = TreeNode::new("s", "S", Tag::Sentence).with_child(
//!     TreeNode::new("vp", "VP", PhraseTag::Vp)
//!         .with_child(TreeNode::terminal("w", "runs", PosTag::Verb)),
//! );
//! assert_eq!(render_text(&tree), "SENTENCE\n  VP\n    VERB: runs\n");
//! ```

use std::fmt::Write;

use crate::node::TreeNode;

/// Configuration for text rendering.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
    /// Whether to append `#id` to every line.
    pub show_ids: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_ids: false,
        }
    }
}

/// Renders a tree as indented text with the default configuration.
#[must_use]
pub fn render_text(tree: &TreeNode) -> String {
    render_text_with_config(tree, &PrettyConfig::default())
}

/// Renders a tree as indented text.
#[must_use]
pub fn render_text_with_config(tree: &TreeNode, config: &PrettyConfig) -> String {
    let mut output = String::new();
    write_node(&mut output, tree, 0, config);
    output
}

fn write_node(output: &mut String, node: &TreeNode, depth: usize, config: &PrettyConfig) {
    let indent = " ".repeat(depth * config.indent_width);
    // Writing to a String cannot fail.
    let _ = write!(output, "{indent}{}", node.tag);
    if let Some(value) = &node.value {
        let _ = write!(output, ": {value}");
    }
    if config.show_ids {
        let _ = write!(output, "  #{}", node.id);
    }
    output.push('\n');

    for child in &node.children {
        write_node(output, child, depth + 1, config);
    }
}
