// Delimiter element handler

use crate::formula::omml::elements::{DelimiterNode, MathTree, NodeId, NodeKind};
use crate::formula::omml::properties::{property_flag, property_val};
use crate::formula::omml::xml::XmlElement;
use smallvec::SmallVec;

/// Handler for delimiter (fenced) elements
pub struct DelimiterHandler;

impl DelimiterHandler {
    pub fn handle_start(elem: &XmlElement) -> NodeKind {
        // Some producers put the fence characters on `m:d` itself
        let begin = property_val(elem, "dPr", "begChr").or_else(|| elem.attribute("begChr"));
        let end = property_val(elem, "dPr", "endChr").or_else(|| elem.attribute("endChr"));

        NodeKind::Delimiter(DelimiterNode {
            begin: begin.unwrap_or("(").to_string(),
            end: end.unwrap_or(")").to_string(),
            explicit_end: end.map(str::to_owned),
            separator: property_val(elem, "dPr", "sepChr").map(str::to_owned),
            grow: property_flag(elem, "dPr", "grow"),
            segments: Vec::new(),
        })
    }

    /// Split the content into segments: every `m:e` is one segment, and
    /// loose content between explicit `m:sep` markers forms the others.
    pub fn handle_end(node: &mut DelimiterNode, tree: &MathTree, id: NodeId) {
        let mut loose: SmallVec<[NodeId; 2]> = SmallVec::new();

        for child in tree.content_children(id) {
            let child_node = tree.node(child);
            if child_node.is_omml_tag("e") {
                if !loose.is_empty() {
                    node.segments.push(std::mem::take(&mut loose));
                }
                node.segments.push(SmallVec::from_slice(&[child]));
            } else if child_node.is_omml_tag("sep") {
                if !loose.is_empty() {
                    node.segments.push(std::mem::take(&mut loose));
                }
            } else {
                loose.push(child);
            }
        }

        if !loose.is_empty() {
            node.segments.push(loose);
        }
    }
}
