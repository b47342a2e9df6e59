//! Tree validation against a language grammar.
//!
//! Every check runs independently and all findings accumulate; a failing
//! check never hides the others. Validation itself never fails: findings
//! are returned as data and [`validate_or_fail`] exists for callers that want
//! to treat any finding as an error.

use std::collections::HashSet;

use syntree_foundation::{
    Detail, Error, ErrorCode, NodeId, PhraseTag, Result, Tag, TreeNode, ValidationError,
};
use tracing::debug;

use crate::grammar::LanguageGrammar;

/// Validates a tree and returns every finding, in check order.
#[must_use]
pub fn validate(tree: &TreeNode, grammar: &LanguageGrammar) -> Vec<ValidationError> {
    let mut findings = Vec::new();

    check_unique_ids(tree, &mut findings);
    check_tag_universe(tree, &mut findings);
    check_required_phrases(tree, grammar, &mut findings);
    check_phrase_order(tree, grammar, &mut findings);
    check_phrases(tree, grammar, &mut findings);

    debug!(
        language = %grammar.language(),
        nodes = tree.node_count(),
        findings = findings.len(),
        "validated tree"
    );
    findings
}

/// Validates a tree and fails with every finding if there is at least one.
///
/// # Errors
///
/// Returns a `Validation` error carrying the full finding list.
pub fn validate_or_fail(tree: &TreeNode, grammar: &LanguageGrammar) -> Result<()> {
    let findings = validate(tree, grammar);
    if findings.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(findings))
    }
}

/// First-seen wins; every repeat is reported.
fn check_unique_ids(tree: &TreeNode, findings: &mut Vec<ValidationError>) {
    let mut seen: HashSet<&NodeId> = HashSet::new();
    for node in tree.iter() {
        if !seen.insert(&node.id) {
            findings.push(
                ValidationError::new(
                    ErrorCode::InvalidTreeStructure,
                    format!("Duplicate node id: {}", node.id),
                )
                .at_node(node.id.clone()),
            );
        }
    }
}

fn check_tag_universe(tree: &TreeNode, findings: &mut Vec<ValidationError>) {
    for node in tree.iter().filter(|node| !node.tag.is_known()) {
        findings.push(
            ValidationError::new(
                ErrorCode::UnknownPhraseType,
                format!("Unknown phrase type: {}", node.tag),
            )
            .at_node(node.id.clone())
            .in_phrase(node.tag.clone()),
        );
    }
}

fn check_required_phrases(
    tree: &TreeNode,
    grammar: &LanguageGrammar,
    findings: &mut Vec<ValidationError>,
) {
    let actual = tree.child_tags();
    let required: Vec<Tag> = grammar
        .required_phrases()
        .iter()
        .copied()
        .map(Tag::Phrase)
        .collect();

    for phrase in &required {
        if !actual.contains(phrase) {
            findings.push(
                ValidationError::new(
                    ErrorCode::MissingRequiredPhrase,
                    format!("Missing required phrase: {phrase}"),
                )
                .in_phrase(phrase.clone())
                .expected(Detail::Tags(required.clone()))
                .actual(Detail::Tags(actual.clone())),
            );
        }
    }
}

/// Root children must have non-decreasing positions in the phrase order,
/// measured against the highest position seen so far.
fn check_phrase_order(
    tree: &TreeNode,
    grammar: &LanguageGrammar,
    findings: &mut Vec<ValidationError>,
) {
    let order: Vec<Tag> = grammar
        .phrase_order()
        .iter()
        .copied()
        .map(Tag::Phrase)
        .collect();
    let actual = tree.child_tags();
    let mut max_seen: Option<usize> = None;

    for (position, tag) in actual.iter().enumerate() {
        match tag.as_phrase().and_then(|phrase| grammar.order_index(phrase)) {
            None => findings.push(
                ValidationError::new(
                    ErrorCode::UnknownPhraseType,
                    format!("Unknown phrase type in order: {tag}"),
                )
                .at_position(position)
                .expected(Detail::Tags(order.clone()))
                .actual(Detail::Tag(tag.clone())),
            ),
            Some(index) => {
                if max_seen.is_some_and(|max| index < max) {
                    findings.push(
                        ValidationError::new(
                            ErrorCode::InvalidPhraseOrder,
                            format!("Phrase {tag} is out of order"),
                        )
                        .at_position(position)
                        .in_phrase(tag.clone())
                        .expected(Detail::Tags(order.clone()))
                        .actual(Detail::Tags(actual.clone())),
                    );
                }
                max_seen = Some(max_seen.map_or(index, |max| max.max(index)));
            }
        }
    }
}

/// Every root child is checked as a phrase; deeper nodes only when they
/// carry a phrase tag.
fn check_phrases(tree: &TreeNode, grammar: &LanguageGrammar, findings: &mut Vec<ValidationError>) {
    for child in &tree.children {
        match child.tag.as_phrase() {
            Some(phrase) => check_phrase(child, phrase, grammar, findings),
            // Out-of-universe tags were reported by the tag check.
            None if child.tag.is_known() => findings.push(no_rule(child)),
            None => {}
        }
        check_nested_phrases(child, grammar, findings);
    }
}

fn check_nested_phrases(
    node: &TreeNode,
    grammar: &LanguageGrammar,
    findings: &mut Vec<ValidationError>,
) {
    for child in &node.children {
        if let Some(phrase) = child.tag.as_phrase() {
            check_phrase(child, phrase, grammar, findings);
        }
        check_nested_phrases(child, grammar, findings);
    }
}

fn check_phrase(
    node: &TreeNode,
    phrase: PhraseTag,
    grammar: &LanguageGrammar,
    findings: &mut Vec<ValidationError>,
) {
    let Some(rule) = grammar.rule(phrase) else {
        findings.push(no_rule(node));
        return;
    };

    let count = node.children.len();
    if count < rule.min_children {
        findings.push(
            ValidationError::new(
                ErrorCode::InvalidChildrenCount,
                format!("Phrase {phrase} has too few children"),
            )
            .at_node(node.id.clone())
            .in_phrase(node.tag.clone())
            .expected(Detail::Count(rule.min_children))
            .actual(Detail::Count(count)),
        );
    }
    if count > rule.max_children {
        findings.push(
            ValidationError::new(
                ErrorCode::InvalidChildrenCount,
                format!("Phrase {phrase} has too many children"),
            )
            .at_node(node.id.clone())
            .in_phrase(node.tag.clone())
            .expected(Detail::Count(rule.max_children))
            .actual(Detail::Count(count)),
        );
    }

    for (position, child) in node.children.iter().enumerate() {
        if !rule.allows(&child.tag) {
            findings.push(
                ValidationError::new(
                    ErrorCode::InvalidNodeType,
                    format!("Invalid node type {} in {phrase}", child.tag),
                )
                .at_node(child.id.clone())
                .in_phrase(node.tag.clone())
                .expected(Detail::Tags(rule.allowed.clone()))
                .actual(Detail::Tag(child.tag.clone()))
                .at_position(position),
            );
        }
    }
}

fn no_rule(node: &TreeNode) -> ValidationError {
    ValidationError::new(
        ErrorCode::UnknownPhraseType,
        format!("Unknown phrase type: {}", node.tag),
    )
    .at_node(node.id.clone())
    .in_phrase(node.tag.clone())
}
