use crate::formula::config::{ConvertOptions, DEFAULT_MAX_DEPTH};
use crate::formula::omml::elements::{MathTree, Node, NodeId, NodeKind};
use crate::formula::omml::error::OmmlError;
use crate::formula::omml::handlers::{builds_children, handle_end, handle_start};
use crate::formula::omml::lookup::get_element_type;
use crate::formula::omml::xml::XmlElement;
use smallvec::SmallVec;

/// OMML parser that builds an equation tree from OMML XML
///
/// Each element becomes one node: registered OMML tags get their specific
/// kind, everything else (containers, unknown tags, foreign namespaces)
/// becomes a generic pass-through node.
#[derive(Debug, Clone)]
pub struct OmmlParser {
    max_depth: usize,
}

impl Default for OmmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OmmlParser {
    /// Create a parser with the default nesting limit
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create a parser honouring `options.max_depth`
    pub fn with_options(options: &ConvertOptions) -> Self {
        Self {
            max_depth: options.max_depth,
        }
    }

    /// Parse OMML from a string
    ///
    /// # Example
    /// ```
    /// use omml2latex::OmmlParser;
    ///
    /// let tree = OmmlParser::new().parse("<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>")?;
    /// assert_eq!(tree.roots().len(), 1);
    /// # Ok::<(), omml2latex::OmmlError>(())
    /// ```
    pub fn parse(&self, xml: &str) -> Result<MathTree, OmmlError> {
        if xml.trim().is_empty() {
            return Err(OmmlError::EmptyInput);
        }
        let root = XmlElement::parse_with_depth(xml, self.max_depth)?;
        self.parse_element(&root)
    }

    /// Build a tree from an `m:oMath` element, rejecting anything else
    pub fn parse_math(&self, root: &XmlElement) -> Result<MathTree, OmmlError> {
        if !root.is_omml_tag("oMath") {
            return Err(OmmlError::NotOmath(root.name().to_string()));
        }
        self.parse_element(root)
    }

    /// Build a tree from an already-parsed element.
    ///
    /// The children of an `m:oMath` element become the roots; any other
    /// element is itself the single root.
    pub fn parse_element(&self, root: &XmlElement) -> Result<MathTree, OmmlError> {
        let mut tree = MathTree::default();

        if root.is_omml_tag("oMath") {
            for child in root.elements() {
                let id = self.parse_node(&mut tree, child, None, 1)?;
                tree.roots.push(id);
            }
        } else {
            let id = self.parse_node(&mut tree, root, None, 0)?;
            tree.roots.push(id);
        }

        Ok(tree)
    }

    /// Properties, then children, then kind fields.
    fn parse_node(
        &self,
        tree: &mut MathTree,
        elem: &XmlElement,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Result<NodeId, OmmlError> {
        if depth >= self.max_depth {
            return Err(OmmlError::DepthLimitExceeded(self.max_depth));
        }

        let element_type = if elem.is_omml() {
            get_element_type(elem.local_name())
        } else {
            None
        };
        let mut kind = match element_type {
            Some(element_type) => handle_start(element_type, elem),
            None => NodeKind::Generic,
        };

        let id = u32::try_from(tree.nodes.len())
            .map(NodeId)
            .map_err(|_| OmmlError::Xml("equation has too many elements".to_string()))?;
        tree.nodes.push(Node {
            tag: elem.local_name().to_string(),
            in_omml_namespace: elem.is_omml(),
            parent,
            children: SmallVec::new(),
            kind: NodeKind::Generic,
        });

        if element_type.is_none_or(builds_children) {
            for child in elem.elements() {
                let child_id = self.parse_node(tree, child, Some(id), depth + 1)?;
                tree.nodes[id.index()].children.push(child_id);
            }
        }

        handle_end(&mut kind, tree, id);
        tree.nodes[id.index()].kind = kind;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::omml::elements::FractionType;

    fn parse(xml: &str) -> MathTree {
        OmmlParser::new().parse(xml).unwrap()
    }

    #[test]
    fn test_omath_children_become_roots() {
        let tree = parse("<m:oMath><m:r><m:t>a</m:t></m:r><m:r><m:t>b</m:t></m:r></m:oMath>");
        assert_eq!(tree.roots().len(), 2);
        for &root in tree.roots() {
            assert!(matches!(tree.node(root).kind(), NodeKind::Run(_)));
            assert_eq!(tree.parent(root), None);
        }
    }

    #[test]
    fn test_fraction_fields_resolved() {
        let tree = parse(
            r#"<m:f><m:fPr><m:type m:val="noBar"/></m:fPr>
                <m:num><m:r><m:t>n</m:t></m:r></m:num>
                <m:den><m:r><m:t>k</m:t></m:r></m:den></m:f>"#,
        );
        let root = tree.roots()[0];
        let NodeKind::Fraction(frac) = tree.node(root).kind() else {
            panic!("expected a fraction");
        };
        assert_eq!(frac.fraction_type, FractionType::NoBar);
        let num = frac.numerator.unwrap();
        assert_eq!(tree.node(num).tag(), "num");
        assert_eq!(tree.parent(num), Some(root));
        assert!(frac.denominator.is_some());
    }

    #[test]
    fn test_unknown_and_foreign_elements_are_generic() {
        let tree = parse(
            r#"<m:oMath xmlns:w="urn:w"><m:unknownTag><m:r><m:t>y</m:t></m:r></m:unknownTag><w:f/></m:oMath>"#,
        );
        let unknown = tree.roots()[0];
        assert!(tree.node(unknown).kind().is_generic());
        assert_eq!(tree.node(unknown).children().len(), 1);

        // `f` outside the math namespace is not a fraction
        let foreign = tree.roots()[1];
        assert!(tree.node(foreign).kind().is_generic());
        assert!(!tree.node(foreign).is_omml());
        assert_eq!(tree.unrecognized_tags(), vec!["unknownTag", "f"]);
    }

    #[test]
    fn test_run_children_are_not_built() {
        let tree = parse("<m:r><m:rPr><m:sty m:val=\"p\"/></m:rPr><m:t>x</m:t></m:r>");
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_parse_math_requires_omath() {
        let parser = OmmlParser::new();
        let f = XmlElement::omml("f");
        assert!(matches!(parser.parse_math(&f), Err(OmmlError::NotOmath(_))));
        assert!(parser.parse_math(&XmlElement::omml("oMath")).is_ok());
    }

    #[test]
    fn test_depth_limit_on_built_elements() {
        let mut elem = XmlElement::omml("e");
        for _ in 0..10 {
            elem = XmlElement::omml("e").with_child(elem);
        }
        let shallow = OmmlParser::with_options(&ConvertOptions::new().with_max_depth(5));
        assert!(matches!(
            shallow.parse_element(&elem),
            Err(OmmlError::DepthLimitExceeded(5))
        ));
        assert!(OmmlParser::new().parse_element(&elem).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(OmmlParser::new().parse("  \n"), Err(OmmlError::EmptyInput)));
    }
}
