// Namespace-aware element tree for OMML fragments
//
// Node kinds need to look at whole elements (a fraction reads its `fPr`
// before building `num` and `den`), so the quick-xml event stream is folded
// into a small owned tree first. Names are resolved by quick-xml's
// `NsReader`; an undeclared `m` prefix still means the OMML namespace
// because fragments cut out of `document.xml` usually lose the declaration
// that lived on the document root.

use super::error::OmmlError;
use crate::formula::config::DEFAULT_MAX_DEPTH;
use quick_xml::NsReader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use std::fmt;

/// The Office Math Markup Language namespace URI.
pub const OMML_NAMESPACE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";

const OMML_PREFIX: &[u8] = b"m";

/// Namespace URI of a resolved name.
fn namespace_uri(resolved: ResolveResult<'_>) -> Result<Option<String>, OmmlError> {
    Ok(match resolved {
        ResolveResult::Bound(Namespace(uri)) if !uri.is_empty() => {
            Some(std::str::from_utf8(uri)?.to_owned())
        },
        ResolveResult::Unknown(prefix) if prefix == OMML_PREFIX => Some(OMML_NAMESPACE.to_owned()),
        _ => None,
    })
}

/// A namespace-resolved element or attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    namespace: Option<String>,
    local: String,
}

impl QName {
    pub fn new(namespace: Option<&str>, local_name: &str) -> Self {
        Self {
            namespace: namespace.map(str::to_owned),
            local: local_name.to_owned(),
        }
    }

    #[inline]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    #[inline]
    pub fn local_name(&self) -> &str {
        &self.local
    }

    /// Whether the name lives in the OMML namespace.
    #[inline]
    pub fn is_omml(&self) -> bool {
        self.namespace.as_deref() == Some(OMML_NAMESPACE)
    }
}

impl fmt::Display for QName {
    /// Clark notation (`{uri}local`), the same spelling ElementTree uses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// One item of element content.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    Comment(String),
    ProcessingInstruction(String),
}

/// An owned XML element with resolved names.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: QName,
    attributes: Vec<(QName, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element.
    pub fn new(namespace: Option<&str>, local_name: &str) -> Self {
        Self {
            name: QName::new(namespace, local_name),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty element in the OMML namespace.
    #[inline]
    pub fn omml(local_name: &str) -> Self {
        Self::new(Some(OMML_NAMESPACE), local_name)
    }

    pub fn with_attribute(
        mut self,
        namespace: Option<&str>,
        local_name: &str,
        value: impl Into<String>,
    ) -> Self {
        self.attributes
            .push((QName::new(namespace, local_name), value.into()));
        self
    }

    /// Add an `m:val` attribute, the carrier of almost every OMML property.
    #[inline]
    pub fn with_val(self, value: impl Into<String>) -> Self {
        self.with_attribute(Some(OMML_NAMESPACE), "val", value)
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn with_node(mut self, node: XmlNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Parse a complete XML fragment with exactly one root element.
    ///
    /// # Example
    /// ```
    /// use omml2latex::XmlElement;
    ///
    /// let root = XmlElement::parse("<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>")?;
    /// assert!(root.is_omml_tag("oMath"));
    /// # Ok::<(), omml2latex::OmmlError>(())
    /// ```
    pub fn parse(xml: &str) -> Result<Self, OmmlError> {
        Self::parse_with_depth(xml, DEFAULT_MAX_DEPTH)
    }

    /// Parse with an explicit nesting limit.
    pub fn parse_with_depth(xml: &str, max_depth: usize) -> Result<Self, OmmlError> {
        let mut reader = NsReader::from_str(xml);
        let mut builder = TreeBuilder::new(max_depth);

        loop {
            let (resolved, event) = reader.read_resolved_event()?;
            let namespace = namespace_uri(resolved)?;
            match event {
                Event::Start(ref e) => {
                    let element = builder.open_element(namespace, e, &reader)?;
                    builder.open.push(element);
                },
                Event::Empty(ref e) => {
                    let element = builder.open_element(namespace, e, &reader)?;
                    builder.attach(XmlNode::Element(element))?;
                },
                Event::End(_) => {
                    let element = builder
                        .open
                        .pop()
                        .ok_or_else(|| OmmlError::Xml("unexpected closing tag".to_string()))?;
                    builder.attach(XmlNode::Element(element))?;
                },
                Event::Text(ref e) => {
                    let text = std::str::from_utf8(e)?;
                    builder.push_text(text)?;
                },
                Event::CData(ref e) => {
                    let text = std::str::from_utf8(e)?;
                    builder.push_text(text)?;
                },
                Event::GeneralRef(ref e) => {
                    let resolved = match e.resolve_char_ref()? {
                        Some(ch) => ch.to_string(),
                        None => {
                            let name = std::str::from_utf8(e)?;
                            resolve_predefined_entity(name)
                                .ok_or_else(|| {
                                    OmmlError::Xml(format!("undefined entity: &{};", name))
                                })?
                                .to_string()
                        },
                    };
                    builder.push_text(&resolved)?;
                },
                Event::Comment(ref e) => {
                    let text = String::from_utf8_lossy(e).into_owned();
                    if !builder.open.is_empty() {
                        builder.attach(XmlNode::Comment(text))?;
                    }
                },
                Event::PI(ref e) => {
                    let text = String::from_utf8_lossy(e).into_owned();
                    if !builder.open.is_empty() {
                        builder.attach(XmlNode::ProcessingInstruction(text))?;
                    }
                },
                Event::Eof => break,
                _ => {}, // declarations and doctypes carry nothing we use
            }
        }

        builder.finish()
    }

    #[inline]
    pub fn name(&self) -> &QName {
        &self.name
    }

    #[inline]
    pub fn local_name(&self) -> &str {
        self.name.local_name()
    }

    #[inline]
    pub fn is_omml(&self) -> bool {
        self.name.is_omml()
    }

    /// Whether this is the OMML element `local_name`.
    #[inline]
    pub fn is_omml_tag(&self, local_name: &str) -> bool {
        self.is_omml() && self.name.local_name() == local_name
    }

    /// Attribute value by local name, accepting the OMML namespace or none.
    ///
    /// Producers disagree on whether `val` is written `m:val` or `val`.
    pub fn attribute(&self, local_name: &str) -> Option<&str> {
        let mut unqualified = None;
        for (name, value) in &self.attributes {
            if name.local_name() != local_name {
                continue;
            }
            if name.is_omml() {
                return Some(value);
            }
            if name.namespace().is_none() && unqualified.is_none() {
                unqualified = Some(value.as_str());
            }
        }
        unqualified
    }

    /// The `val` attribute.
    #[inline]
    pub fn val(&self) -> Option<&str> {
        self.attribute("val")
    }

    /// All content items in document order.
    #[inline]
    pub fn nodes(&self) -> &[XmlNode] {
        &self.children
    }

    /// Element children in document order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First OMML child element named `local_name`.
    pub fn child(&self, local_name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.is_omml_tag(local_name))
    }

    /// Concatenated direct text content.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            if let XmlNode::Text(t) = node {
                text.push_str(t);
            }
        }
        text
    }
}

/// Folds reader events into an element tree.
struct TreeBuilder {
    open: Vec<XmlElement>,
    root: Option<XmlElement>,
    max_depth: usize,
}

impl TreeBuilder {
    fn new(max_depth: usize) -> Self {
        Self {
            open: Vec::with_capacity(32),
            root: None,
            max_depth,
        }
    }

    fn open_element(
        &self,
        namespace: Option<String>,
        start: &BytesStart<'_>,
        reader: &NsReader<&[u8]>,
    ) -> Result<XmlElement, OmmlError> {
        if self.open.len() >= self.max_depth {
            return Err(OmmlError::DepthLimitExceeded(self.max_depth));
        }

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }
            let (resolved, local) = reader.resolver().resolve_attribute(attr.key);
            let name = QName {
                namespace: namespace_uri(resolved)?,
                local: std::str::from_utf8(local.as_ref())?.to_owned(),
            };
            let value = attr.decode_and_unescape_value(reader.decoder())?.into_owned();
            attributes.push((name, value));
        }

        let local = start.local_name();
        Ok(XmlElement {
            name: QName {
                namespace,
                local: std::str::from_utf8(local.as_ref())?.to_owned(),
            },
            attributes,
            children: Vec::new(),
        })
    }

    fn push_text(&mut self, text: &str) -> Result<(), OmmlError> {
        match self.open.last_mut() {
            Some(parent) => {
                if let Some(XmlNode::Text(existing)) = parent.children.last_mut() {
                    existing.push_str(text);
                } else {
                    parent.children.push(XmlNode::Text(text.to_string()));
                }
                Ok(())
            },
            None if text.trim().is_empty() => Ok(()),
            None => Err(OmmlError::Xml(
                "text content outside the root element".to_string(),
            )),
        }
    }

    fn attach(&mut self, node: XmlNode) -> Result<(), OmmlError> {
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(node);
            return Ok(());
        }
        match node {
            XmlNode::Element(element) if self.root.is_none() => {
                self.root = Some(element);
                Ok(())
            },
            XmlNode::Element(_) => Err(OmmlError::Xml(
                "junk after document element".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn finish(self) -> Result<XmlElement, OmmlError> {
        if !self.open.is_empty() {
            return Err(OmmlError::UnclosedElement(self.open.len()));
        }
        self.root.ok_or(OmmlError::EmptyInput)
    }
}
