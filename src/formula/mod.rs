// Formula Module - OMML to LaTeX conversion
//
// This module converts Office Math Markup Language (OMML), the XML dialect
// Word uses for equations, into LaTeX source:
//
// - **OMML**: parsed into an arena-backed equation tree (`omml`)
// - **LaTeX**: rendered from that tree in a single pass (`latex`)
//
// The string-returning entry points below never fail: malformed input
// yields one of the fixed error markers in `omml::error`, and a node missing
// a required part renders a marker in its own place only.
//
// # Example
//
// ```
// use omml2latex::formula::omml_to_latex;
//
// let latex = omml_to_latex("<m:oMath><m:r><m:t>x</m:t></m:r></m:oMath>");
// assert_eq!(latex, "x");
// ```

/// Conversion options
pub mod config;
/// OMML (Office Math Markup Language) Parser
///
/// This module parses OMML into an equation tree. Registered tags become
/// typed nodes; containers, unknown tags and foreign elements become generic
/// pass-through nodes.
///
/// Reference: https://devblogs.microsoft.com/math-in-office/officemath/
pub mod omml;
/// LaTeX Converter
///
/// This module renders an equation tree as LaTeX without math-mode
/// delimiters.
pub mod latex;

pub use config::{ConvertOptions, DEFAULT_MAX_DEPTH, EquationArrayEnv};
pub use latex::LatexConverter;
pub use omml::{
    CONVERSION_ERROR, MathTree, NOT_OMATH_ERROR, NodeId, NodeKind, OmmlError, OmmlParser,
    PARSE_ERROR, XmlElement,
};

/// High-level conversion functions
/// Convert an OMML fragment to LaTeX
///
/// The fragment is normally a standalone `<m:oMath>`; the `m` prefix does not
/// need to be declared. Malformed XML yields [`PARSE_ERROR`].
///
/// # Example
/// ```
/// use omml2latex::omml_to_latex;
///
/// let omml = "<m:oMath><m:f><m:num><m:r><m:t>1</m:t></m:r></m:num>\
///             <m:den><m:r><m:t>2</m:t></m:r></m:den></m:f></m:oMath>";
/// assert_eq!(omml_to_latex(omml), "\\frac{1}{2}");
/// assert_eq!(omml_to_latex("<m:oMath>"), omml2latex::PARSE_ERROR);
/// ```
pub fn omml_to_latex(omml: &str) -> String {
    omml_to_latex_with_options(omml, &ConvertOptions::default())
}

/// Convert an OMML fragment to LaTeX with custom options
pub fn omml_to_latex_with_options(omml: &str, options: &ConvertOptions) -> String {
    let parser = OmmlParser::with_options(options);
    match parser.parse(omml) {
        Ok(tree) => LatexConverter::with_options(options.clone()).convert(&tree),
        Err(e) => e.sentinel().to_string(),
    }
}

/// Convert an already-parsed `m:oMath` element to LaTeX
///
/// Any other element yields [`NOT_OMATH_ERROR`].
pub fn omml_element_to_latex(element: &XmlElement) -> String {
    let tree = OmmlParser::new().parse_math(element);
    render_or_sentinel(tree)
}

/// Convert a single OMML element of any kind to LaTeX
///
/// # Example
/// ```
/// use omml2latex::{XmlElement, omml_node_to_latex};
///
/// let run = XmlElement::omml("r").with_child(XmlElement::omml("t").with_text("α"));
/// assert_eq!(omml_node_to_latex(&run), "\\alpha");
/// ```
pub fn omml_node_to_latex(element: &XmlElement) -> String {
    let tree = OmmlParser::new().parse_element(element);
    render_or_sentinel(tree)
}

fn render_or_sentinel(tree: Result<MathTree, OmmlError>) -> String {
    match tree {
        Ok(tree) => LatexConverter::new().convert(&tree),
        Err(e) => e.sentinel().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> String {
        format!("<m:r><m:t>{text}</m:t></m:r>")
    }

    fn math(body: &str) -> String {
        format!(
            r#"<m:oMath xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math">{body}</m:oMath>"#
        )
    }

    #[test]
    fn test_single_run() {
        assert_eq!(omml_to_latex(&math(&run("x"))), "x");
    }

    #[test]
    fn test_simple_fraction() {
        let body = format!("<m:f><m:num>{}</m:num><m:den>{}</m:den></m:f>", run("1"), run("2"));
        assert_eq!(omml_to_latex(&math(&body)), "\\frac{1}{2}");
    }

    #[test]
    fn test_unknown_tag_passes_through() {
        let body = format!("<m:unknownThing>{}</m:unknownThing>", run("y"));
        assert_eq!(omml_to_latex(&math(&body)), "y");

        let body = format!(r#"<w:ins xmlns:w="urn:other">{}</w:ins>"#, run("y"));
        assert_eq!(omml_to_latex(&math(&body)), "y");
    }

    #[test]
    fn test_incomplete_node_is_contained() {
        let body = format!(
            "{}<m:f><m:num>{}</m:num></m:f>{}",
            run("a="),
            run("1"),
            run("+b")
        );
        assert_eq!(
            omml_to_latex(&math(&body)),
            "a={ERROR: Incomplete Fraction}+b"
        );
    }

    #[test]
    fn test_function_application() {
        let body = format!(
            "<m:func><m:fName>{}</m:fName><m:e>{}</m:e></m:func>",
            run("sin"),
            run("x")
        );
        assert_eq!(omml_to_latex(&math(&body)), "\\sin(x)");
    }

    #[test]
    fn test_undeclared_prefix() {
        assert_eq!(omml_to_latex("<m:oMath><m:r><m:t>z</m:t></m:r></m:oMath>"), "z");
    }

    #[test]
    fn test_top_level_sentinels() {
        assert_eq!(omml_to_latex(""), PARSE_ERROR);
        assert_eq!(omml_to_latex("   "), PARSE_ERROR);
        assert_eq!(omml_to_latex("<m:oMath><m:r>"), PARSE_ERROR);
        assert_eq!(omml_to_latex("not xml at all"), PARSE_ERROR);

        let deep = format!("{}{}", "<m:e>".repeat(20), "</m:e>".repeat(20));
        let options = ConvertOptions::new().with_max_depth(8);
        assert_eq!(omml_to_latex_with_options(&deep, &options), CONVERSION_ERROR);
        assert_ne!(omml_to_latex(&deep), CONVERSION_ERROR);
    }

    #[test]
    fn test_element_entry_points() {
        let root = XmlElement::parse(&math(&run("q"))).unwrap();
        assert_eq!(omml_element_to_latex(&root), "q");
        assert_eq!(omml_node_to_latex(&root), "q");

        let fraction = XmlElement::parse(&format!(
            "<m:f><m:num>{}</m:num><m:den>{}</m:den></m:f>",
            run("a"),
            run("b")
        ))
        .unwrap();
        assert_eq!(omml_element_to_latex(&fraction), NOT_OMATH_ERROR);
        assert_eq!(omml_node_to_latex(&fraction), "\\frac{a}{b}");
    }

    #[test]
    fn test_built_element_tree() {
        let fraction = XmlElement::omml("f")
            .with_child(XmlElement::omml("fPr").with_child(XmlElement::omml("type").with_val("noBar")))
            .with_child(XmlElement::omml("num").with_child(
                XmlElement::omml("r").with_child(XmlElement::omml("t").with_text("n")),
            ))
            .with_child(XmlElement::omml("den").with_child(
                XmlElement::omml("r").with_child(XmlElement::omml("t").with_text("k")),
            ));
        let root = XmlElement::omml("oMath").with_child(fraction);
        assert_eq!(omml_element_to_latex(&root), "\\binom{n}{k}");
    }

    #[test]
    fn test_nary_defaults_to_sum() {
        let body = format!(
            "<m:nary><m:sub>{}</m:sub><m:sup>{}</m:sup><m:e>{}</m:e></m:nary>",
            run("k=0"),
            run("∞"),
            run("a"),
        );
        assert_eq!(omml_to_latex(&math(&body)), "\\sum_{k=0}^{\\infty} a");
    }

    #[test]
    fn test_cases_inside_brace() {
        let body = format!(
            r#"<m:d><m:dPr><m:begChr m:val="{{"/><m:endChr m:val=""/></m:dPr><m:e><m:eqArr><m:e>{}</m:e><m:e>{}</m:e></m:eqArr></m:e></m:d>"#,
            run("1"),
            run("0")
        );
        assert_eq!(
            omml_to_latex(&math(&body)),
            "\\begin{cases}\n1 \\\\\n0\n\\end{cases}"
        );
    }

    #[test]
    fn test_equation_array_option() {
        let body = format!("<m:eqArr><m:e>{}</m:e><m:e>{}</m:e></m:eqArr>", run("a"), run("b"));
        let options = ConvertOptions::new().with_equation_array(EquationArrayEnv::Align);
        assert_eq!(
            omml_to_latex_with_options(&math(&body), &options),
            "\\begin{align}\na \\\\\nb\n\\end{align}"
        );
    }

    #[test]
    fn test_word_document_fragment() {
        let omml = r#"<m:oMathPara xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math" xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <m:oMath>
    <m:sSup>
      <m:e><m:r><w:rPr><w:rFonts w:ascii="Cambria Math"/></w:rPr><m:t>e</m:t></m:r></m:e>
      <m:sup><m:r><m:t>iπ</m:t></m:r></m:sup>
    </m:sSup>
    <m:r><m:t>+1=0</m:t></m:r>
  </m:oMath>
</m:oMathPara>"#;
        assert_eq!(omml_to_latex(omml), "{e}^{i\\pi}+1=0");
    }

    #[test]
    fn test_concurrent_conversion() {
        let body = format!(
            "<m:rad><m:deg>{}</m:deg><m:e>{}</m:e></m:rad>",
            run("3"),
            run("x")
        );
        let omml = math(&body);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| omml_to_latex(&omml)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), "\\sqrt[3]{x}");
            }
        });
    }

    #[test]
    fn test_tree_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MathTree>();
        assert_send_sync::<LatexConverter>();
        assert_send_sync::<XmlElement>();
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Tags the generator draws from: registered kinds, containers,
        /// property wrappers and one unknown name
        const TAGS: &[&str] = &[
            "f", "num", "den", "fPr", "rad", "deg", "radPr", "e", "sSub", "sSup", "sSubSup",
            "sPre", "sub", "sup", "d", "dPr", "sep", "func", "fName", "nary", "naryPr", "m",
            "mr", "limLow", "limUpp", "lim", "eqArr", "acc", "accPr", "bar", "barPr", "box",
            "borderBox", "groupChr", "groupChrPr", "phant", "phantPr", "unknownTag",
        ];

        /// Property leaves carrying an `m:val`
        const PROPERTIES: &[&str] = &[
            "chr", "begChr", "endChr", "sepChr", "type", "pos", "limLoc", "degHide", "show",
            "grow", "subHide",
        ];

        /// Strategy to generate a run with arbitrary text
        fn run_strategy() -> impl Strategy<Value = XmlElement> {
            r"[a-z0-9+=αβ∑∫{}_^\\]{0,5}"
                .prop_map(|text| XmlElement::omml("r").with_child(XmlElement::omml("t").with_text(text)))
        }

        /// Strategy to generate a property element
        fn property_strategy() -> impl Strategy<Value = XmlElement> {
            (
                prop::sample::select(PROPERTIES),
                prop_oneof![
                    Just(String::new()),
                    Just("off".to_string()),
                    Just("noBar".to_string()),
                    Just("undOvr".to_string()),
                    Just("top".to_string()),
                    "[({|⏞∫]{1,2}",
                ],
            )
                .prop_map(|(name, value)| XmlElement::omml(name).with_val(value))
        }

        /// Strategy to generate OMML-like element trees
        fn element_strategy() -> impl Strategy<Value = XmlElement> {
            let leaf = prop_oneof![3 => run_strategy(), 1 => property_strategy()];
            leaf.prop_recursive(5, 64, 4, |inner| {
                (
                    prop::sample::select(TAGS),
                    prop::collection::vec(inner, 0..4),
                    prop::bool::weighted(0.1),
                )
                    .prop_map(|(tag, children, foreign)| {
                        let namespace = if foreign { "urn:other" } else { omml::OMML_NAMESPACE };
                        children
                            .into_iter()
                            .fold(XmlElement::new(Some(namespace), tag), XmlElement::with_child)
                    })
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_any_element_converts(element in element_strategy()) {
                let latex = omml_node_to_latex(&element);
                prop_assert_ne!(latex.as_str(), CONVERSION_ERROR);
                prop_assert_ne!(latex.as_str(), PARSE_ERROR);

                // rendering is a pure function of the input
                prop_assert_eq!(omml_node_to_latex(&element), latex);
            }

            #[test]
            fn prop_wrapped_in_omath_converts(children in prop::collection::vec(element_strategy(), 0..4)) {
                let root = children
                    .into_iter()
                    .fold(XmlElement::omml("oMath"), XmlElement::with_child);
                let latex = omml_element_to_latex(&root);
                prop_assert_ne!(latex.as_str(), NOT_OMATH_ERROR);
                prop_assert_ne!(latex.as_str(), CONVERSION_ERROR);
            }

            #[test]
            fn prop_arbitrary_strings_never_panic(input in "\\PC{0,64}") {
                let _ = omml_to_latex(&input);
            }

            #[test]
            fn prop_tag_soup_never_panics(
                parts in prop::collection::vec(
                    prop_oneof![
                        Just("<m:oMath>"), Just("</m:oMath>"), Just("<m:f>"), Just("</m:f>"),
                        Just("<m:num>"), Just("</m:num>"), Just("<m:r><m:t>x</m:t></m:r>"),
                        Just("<m:d>"), Just("</m:d>"), Just("<m:e>"), Just("</m:e>"),
                        Just("&amp;"), Just("&bogus;"), Just("<!-- c -->"),
                    ],
                    0..16,
                )
            ) {
                let input: String = parts.concat();
                let latex = omml_to_latex(&input);
                prop_assert_ne!(latex.as_str(), CONVERSION_ERROR);
            }
        }
    }
}
