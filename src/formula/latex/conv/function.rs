// Function conversion logic for LaTeX conversion
//
// Known function names map to their LaTeX operator, anything else is set
// with `\operatorname`.

use super::converter::LatexConverter;
use crate::formula::latex::operators::function_to_latex;
use crate::formula::latex::utils::push_fragment;
use crate::formula::omml::sentinel;
use crate::formula::omml::{FunctionNode, MathTree, NodeId, NodeKind};
use std::borrow::Cow;

#[inline]
fn operatorname(name: &str) -> String {
    format!("\\operatorname{{{name}}}")
}

/// Operator for a name typed as plain text, e.g. `sin` or `sgn`
fn plain_function_name(plain: &str) -> Option<Cow<'static, str>> {
    if let Some(latex) = function_to_latex(plain) {
        return Some(Cow::Borrowed(latex));
    }
    let plain = plain.trim();
    (!plain.is_empty() && plain.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| Cow::Owned(operatorname(plain)))
}

impl LatexConverter {
    /// LaTeX for the `fName` container
    fn function_name(&self, tree: &MathTree, name: NodeId) -> Cow<'static, str> {
        if let Some(latex) = tree.plain_text(name).as_deref().and_then(plain_function_name) {
            return latex;
        }
        if let Some(latex) = self.scripted_function_name(tree, name) {
            return Cow::Owned(latex);
        }

        let rendered = self.render(tree, name);
        let rendered = rendered.trim();
        if let Some(latex) = function_to_latex(rendered) {
            Cow::Borrowed(latex)
        } else if rendered.starts_with('\\') && !rendered.contains("operatorname") {
            Cow::Owned(rendered.to_string())
        } else {
            Cow::Owned(operatorname(rendered))
        }
    }

    /// A name that is a script over a plain function name, such as `log`
    /// with subscript `2`, becomes `\log_{2}`.
    fn scripted_function_name(&self, tree: &MathTree, name: NodeId) -> Option<String> {
        let mut children = tree.content_children(name);
        let (Some(only), None) = (children.next(), children.next()) else {
            return None;
        };
        let NodeKind::Script(script) = tree.node(only).kind() else {
            return None;
        };
        let base = tree.plain_text(script.base?)?;
        let mut latex = plain_function_name(&base)?.into_owned();
        if let Some(sub) = script.sub {
            latex.push_str("_{");
            latex.push_str(&self.render(tree, sub));
            latex.push('}');
        }
        if let Some(sup) = script.sup {
            latex.push_str("^{");
            latex.push_str(&self.render(tree, sup));
            latex.push('}');
        }
        Some(latex)
    }

    /// Whether a lone argument is already fenced
    fn is_fenced_argument(tree: &MathTree, arg: NodeId) -> bool {
        let mut children = tree.content_children(arg);
        match (children.next(), children.next()) {
            (Some(only), None) => matches!(tree.node(only).kind(), NodeKind::Delimiter(_)),
            _ => false,
        }
    }

    pub(super) fn write_function(&self, tree: &MathTree, node: &FunctionNode, buffer: &mut String) {
        let args: Vec<String> = node.arguments.iter().map(|&arg| self.render(tree, arg)).collect();

        let Some(name) = node.name else {
            if args.is_empty() {
                buffer.push_str(sentinel::MISSING_FUNCTION_NAME);
            } else {
                buffer.push_str(sentinel::MISSING_FUNCTION_NAME.trim_end_matches('}'));
                buffer.push_str("; args: ");
                buffer.push_str(&args.join(", "));
                buffer.push('}');
            }
            return;
        };
        let name = self.function_name(tree, name);

        match args.as_slice() {
            [] => buffer.push_str(&name),
            [arg] if name == "\\lim" => {
                buffer.push_str("\\lim_{");
                buffer.push_str(arg);
                buffer.push('}');
            },
            _ if name.contains('_') => {
                buffer.push_str(&name);
                buffer.push(' ');
                buffer.push_str(&args.join(" "));
            },
            [arg] if Self::is_fenced_argument(tree, node.arguments[0]) => {
                buffer.push_str(&name);
                push_fragment(buffer, arg);
            },
            _ => {
                buffer.push_str(&name);
                buffer.push('(');
                buffer.push_str(&args.join(", "));
                buffer.push(')');
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::formula::latex::LatexConverter;
    use crate::formula::omml::OmmlParser;

    fn to_latex(xml: &str) -> String {
        let tree = OmmlParser::new().parse(xml).unwrap();
        LatexConverter::new().convert(&tree)
    }

    fn run(text: &str) -> String {
        format!("<m:r><m:t>{text}</m:t></m:r>")
    }

    fn func(name: &str, args: &[&str]) -> String {
        let args: String = args.iter().map(|a| format!("<m:e>{a}</m:e>")).collect();
        format!("<m:func><m:fName>{name}</m:fName>{args}</m:func>")
    }

    #[test]
    fn test_known_function() {
        assert_eq!(to_latex(&func(&run("sin"), &[&run("x")])), "\\sin(x)");
        assert_eq!(to_latex(&func(&run("log"), &[])), "\\log");
    }

    #[test]
    fn test_unknown_function_name() {
        assert_eq!(
            to_latex(&func(&run("sgn"), &[&run("x")])),
            "\\operatorname{sgn}(x)"
        );
        assert_eq!(
            to_latex(&func(&run("f2"), &[&run("x")])),
            "\\operatorname{f2}(x)"
        );
    }

    #[test]
    fn test_fenced_argument() {
        let arg = format!("<m:d><m:e>{}</m:e></m:d>", run("x"));
        assert_eq!(to_latex(&func(&run("cos"), &[&arg])), "\\cos(x)");

        let arg = format!(
            r#"<m:d><m:dPr><m:begChr m:val="["/><m:endChr m:val="]"/></m:dPr><m:e>{}</m:e></m:d>"#,
            run("x")
        );
        assert_eq!(to_latex(&func(&run("cos"), &[&arg])), "\\cos[x]");
    }

    #[test]
    fn test_multiple_arguments() {
        assert_eq!(
            to_latex(&func(&run("gcd"), &[&run("a"), &run("b")])),
            "\\gcd(a, b)"
        );
    }

    #[test]
    fn test_lim_with_argument() {
        assert_eq!(to_latex(&func(&run("lim"), &[&run("x")])), "\\lim_{x}");
    }

    #[test]
    fn test_name_with_limit() {
        let name = format!(
            "<m:limLow><m:e>{}</m:e><m:lim>{}</m:lim></m:limLow>",
            run("lim"),
            run("n→∞")
        );
        assert_eq!(
            to_latex(&func(&name, &[&run("a")])),
            "\\lim_{n\\rightarrow\\infty} a"
        );
    }

    #[test]
    fn test_scripted_name() {
        let name = format!(
            r#"<m:sSub><m:e><m:r><m:rPr><m:sty m:val="p"/></m:rPr><m:t>log</m:t></m:r></m:e><m:sub>{}</m:sub></m:sSub>"#,
            run("2")
        );
        assert_eq!(to_latex(&func(&name, &[&run("x")])), "\\log_{2} x");

        let name = format!("<m:sSup><m:e>{}</m:e><m:sup>{}</m:sup></m:sSup>", run("sin"), run("2"));
        assert_eq!(to_latex(&func(&name, &[&run("x")])), "\\sin^{2}(x)");
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            to_latex(&format!("<m:func><m:e>{}</m:e></m:func>", run("x"))),
            "{ERROR: Missing function name; args: x}"
        );
        assert_eq!(to_latex("<m:func><m:fName/></m:func>"), "{ERROR: Missing function name}");
    }
}
