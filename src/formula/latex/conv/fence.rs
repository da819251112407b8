// Delimiter conversion logic for LaTeX conversion
//
// Fences are written with `\left`/`\right` when they grow with their
// content. Matrices and brace-opened equation arrays take over the fence
// of a delimiter that wraps nothing else.

use super::converter::LatexConverter;
use crate::formula::latex::matrix::MatrixFence;
use crate::formula::latex::operators::delimiter_to_latex;
use crate::formula::latex::symbols::convert_text;
use crate::formula::latex::utils::push_fragment;
use crate::formula::omml::{DelimiterNode, MathTree, NodeId, NodeKind};

const DEFAULT_SEPARATOR: &str = ", ";

/// Whether a delimiter opens with `{` and leaves its right side open
#[inline]
pub(super) fn is_cases_fence(delim: &DelimiterNode) -> bool {
    delim.begin == "{" && delim.explicit_end.as_deref().is_none_or(|end| end.trim().is_empty())
}

/// The node a delimiter wraps, looking through a single `m:e` container.
fn wrapped_content(tree: &MathTree, delim: &DelimiterNode) -> Option<NodeId> {
    let sole = delim.sole_content()?;
    let node = tree.node(sole);
    if !node.is_omml_tag("e") {
        return Some(sole);
    }
    let mut children = tree.content_children(sole);
    match (children.next(), children.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

/// The delimiter whose only content is `id`, either directly or through an
/// `m:e` holding nothing else.
pub(super) fn enclosing_delimiter(tree: &MathTree, id: NodeId) -> Option<&DelimiterNode> {
    let parent = tree.parent(id)?;
    if let NodeKind::Delimiter(delim) = tree.node(parent).kind() {
        return (delim.sole_content() == Some(id)).then_some(delim);
    }

    if !tree.node(parent).is_omml_tag("e") || tree.content_children(parent).count() != 1 {
        return None;
    }
    let grandparent = tree.parent(parent)?;
    match tree.node(grandparent).kind() {
        NodeKind::Delimiter(delim) if delim.sole_content() == Some(parent) => Some(delim),
        _ => None,
    }
}

/// Content that renders its own fence in place of the delimiter's
fn absorbed_content(tree: &MathTree, delim: &DelimiterNode) -> Option<NodeId> {
    let content = wrapped_content(tree, delim)?;
    let absorbs = match tree.node(content).kind() {
        NodeKind::Matrix(_) => {
            MatrixFence::from_delimiters(&delim.begin, &delim.end) != MatrixFence::None
        },
        NodeKind::EqArray(_) => is_cases_fence(delim),
        _ => false,
    };
    absorbs.then_some(content)
}

impl LatexConverter {
    pub(super) fn write_delimiter(
        &self,
        tree: &MathTree,
        node: &DelimiterNode,
        buffer: &mut String,
    ) {
        if let Some(content) = absorbed_content(tree, node) {
            buffer.push_str(&self.render(tree, content));
            return;
        }

        let separator = match node.separator.as_deref() {
            Some(sep) => convert_text(sep),
            None => DEFAULT_SEPARATOR.to_string(),
        };

        let mut content = String::new();
        for (i, segment) in node.segments.iter().enumerate() {
            if i > 0 {
                content.push_str(&separator);
            }
            for &id in segment {
                self.write_node(tree, id, &mut content);
            }
        }

        let open = delimiter_to_latex(&node.begin);
        let close = delimiter_to_latex(&node.end);

        if node.grow {
            buffer.push_str("\\left");
            buffer.push_str(if open.is_empty() { "." } else { &*open });
            push_fragment(buffer, &content);
            buffer.push_str("\\right");
            buffer.push_str(if close.is_empty() { "." } else { &*close });
        } else {
            push_fragment(buffer, &open);
            push_fragment(buffer, &content);
            push_fragment(buffer, &close);
        }
    }
}
