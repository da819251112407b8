//! omml2latex - Convert Office Math Markup Language (OMML) equations to LaTeX
//!
//! OMML is the XML dialect Word stores equations in (`<m:oMath>` elements of
//! `document.xml`). This library turns such fragments into LaTeX source
//! without math-mode delimiters, suitable for embedding in Markdown or a
//! LaTeX document.
//!
//! # Features
//!
//! - **Total conversion**: the string entry points never fail; malformed XML
//!   yields a fixed marker and incomplete constructs render a marker in
//!   their own place only
//! - **Namespace aware**: unknown tags and foreign namespaces pass their
//!   content through unchanged
//! - **Static tables**: symbols, functions, accents and fences are
//!   compile-time perfect-hash maps, so conversion is thread-safe without
//!   locking
//!
//! # Example - Converting a fragment
//!
//! ```
//! use omml2latex::omml_to_latex;
//!
//! let omml = r#"<m:oMath xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math">
//!     <m:func>
//!         <m:fName><m:r><m:t>sin</m:t></m:r></m:fName>
//!         <m:e><m:r><m:t>θ</m:t></m:r></m:e>
//!     </m:func>
//! </m:oMath>"#;
//! assert_eq!(omml_to_latex(omml), "\\sin(\\theta)");
//! ```
//!
//! # Example - Typed access
//!
//! ```
//! use omml2latex::{ConvertOptions, EquationArrayEnv, LatexConverter, OmmlParser};
//!
//! # fn main() -> Result<(), omml2latex::OmmlError> {
//! let options = ConvertOptions::new().with_equation_array(EquationArrayEnv::Gathered);
//! let tree = OmmlParser::with_options(&options)
//!     .parse("<m:oMath><m:eqArr><m:e><m:r><m:t>a</m:t></m:r></m:e></m:eqArr></m:oMath>")?;
//!
//! let latex = LatexConverter::with_options(options).convert(&tree);
//! assert_eq!(latex, "\\begin{gathered}\na\n\\end{gathered}");
//! assert!(tree.unrecognized_tags().is_empty());
//! # Ok(())
//! # }
//! ```

/// Formula parsing and conversion
///
/// This module contains the OMML parser, the LaTeX converter and the
/// high-level conversion functions.
pub mod formula;

// Re-export commonly used types for convenience
pub use formula::omml::sentinel;
pub use formula::{
    CONVERSION_ERROR, ConvertOptions, DEFAULT_MAX_DEPTH, EquationArrayEnv, LatexConverter,
    MathTree, NOT_OMATH_ERROR, NodeId, NodeKind, OmmlError, OmmlParser, PARSE_ERROR, XmlElement,
    omml_element_to_latex, omml_node_to_latex, omml_to_latex, omml_to_latex_with_options,
};
