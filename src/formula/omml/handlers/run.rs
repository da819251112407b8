// Run element handler

use crate::formula::latex::convert_text;
use crate::formula::omml::elements::{NodeKind, RunNode};
use crate::formula::omml::properties::parse_run_properties;
use crate::formula::omml::xml::XmlElement;

/// Handler for runs (`m:r`)
///
/// A run is a leaf: its `m:t` text is read and converted here and no child
/// nodes are built.
pub struct RunHandler;

impl RunHandler {
    pub fn handle_start(elem: &XmlElement) -> NodeKind {
        let style = elem
            .child("rPr")
            .map(parse_run_properties)
            .unwrap_or_default();

        let mut source = String::new();
        for text in elem.elements().filter(|e| e.is_omml_tag("t")) {
            source.push_str(&text.text());
        }
        let latex = convert_text(&source);

        NodeKind::Run(RunNode {
            source,
            latex,
            style,
        })
    }
}
