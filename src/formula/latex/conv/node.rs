// Node conversion logic for LaTeX conversion
//
// Runs, fractions, radicals, scripts, large operators, limits and the
// single-base decorations.

use super::converter::LatexConverter;
use crate::formula::latex::operators::{function_to_latex, is_integral};
use crate::formula::latex::symbols::unicode_to_latex;
use crate::formula::latex::templates::{DEFAULT_ACCENT, accent_template};
use crate::formula::latex::utils::{escape_latex, push_fragment};
use crate::formula::omml::sentinel;
use crate::formula::omml::{
    AccentNode, BarNode, BoxNode, FractionNode, FractionType, GroupCharNode, LimitLocation,
    LimitNode, MathAlphabet, MathTree, NaryNode, NodeId, PhantomNode, RadicalNode, RunNode,
    ScriptNode, VerticalPosition,
};

/// Grouping characters that render as a brace
const BRACE_GROUP_CHARS: [&str; 4] = ["⏞", "⏟", "{", "}"];
/// Default `m:groupChr/m:chr`: bottom curly bracket
const DEFAULT_GROUP_CHAR: &str = "⏟";
const TOP_GROUP_CHAR: &str = "⏞";

/// Convert math alphabet to its LaTeX command
#[inline]
fn alphabet_to_latex(alphabet: MathAlphabet) -> &'static str {
    match alphabet {
        MathAlphabet::Script => "\\mathscr",
        MathAlphabet::Fraktur => "\\mathfrak",
        MathAlphabet::DoubleStruck => "\\mathbb",
        MathAlphabet::SansSerif => "\\mathsf",
        MathAlphabet::Monospace => "\\mathtt",
    }
}

/// `\cmd{arg}`
#[inline]
fn wrap(command: &str, arg: &str) -> String {
    let mut out = String::with_capacity(command.len() + arg.len() + 2);
    out.push_str(command);
    out.push('{');
    out.push_str(arg);
    out.push('}');
    out
}

impl LatexConverter {
    /// Render an optional container, `None` when missing
    #[inline]
    fn render_opt(&self, tree: &MathTree, id: Option<NodeId>) -> Option<String> {
        id.map(|id| self.render(tree, id))
    }

    pub(super) fn write_run(&self, run: &RunNode, buffer: &mut String) {
        let text = &run.latex;
        if text.is_empty() {
            return;
        }

        if let Some(alphabet) = run.style.alphabet {
            buffer.push_str(&wrap(alphabet_to_latex(alphabet), text));
            return;
        }

        let mut latex = text.clone();
        let trimmed = text.trim();
        if run.style.plain
            && trimmed.chars().count() > 1
            && trimmed.chars().all(char::is_alphabetic)
        {
            latex = wrap("\\mathrm", &latex);
        }
        if run.style.italic {
            latex = wrap("\\textit", &latex);
        }
        if run.style.bold {
            latex = wrap("\\mathbf", &latex);
        }
        buffer.push_str(&latex);
    }

    pub(super) fn write_fraction(&self, tree: &MathTree, node: &FractionNode, buffer: &mut String) {
        let (Some(num), Some(den)) = (node.numerator, node.denominator) else {
            buffer.push_str(sentinel::INCOMPLETE_FRACTION);
            return;
        };
        let num = self.render(tree, num);
        let den = self.render(tree, den);

        match node.fraction_type {
            FractionType::Bar => {
                buffer.push_str(&wrap("\\frac", &num));
                buffer.push_str(&wrap("", &den));
            },
            FractionType::NoBar => {
                buffer.push_str(&wrap("\\binom", &num));
                buffer.push_str(&wrap("", &den));
            },
            FractionType::Linear => {
                buffer.push_str(&format!("{{{{{num}}} \\over {{{den}}}}}"));
            },
            FractionType::Skewed => {
                buffer.push_str(&format!("{{{num}}}/{{{den}}}"));
            },
        }
    }

    pub(super) fn write_radical(&self, tree: &MathTree, node: &RadicalNode, buffer: &mut String) {
        let Some(base) = node.base else {
            buffer.push_str(sentinel::INCOMPLETE_RADICAL);
            return;
        };
        let base = self.render(tree, base);

        let degree = if node.hide_degree {
            None
        } else {
            self.render_opt(tree, node.degree)
        };
        match degree {
            Some(degree) if !matches!(degree.trim(), "" | "2") => {
                buffer.push_str("\\sqrt[");
                buffer.push_str(&degree);
                buffer.push(']');
                buffer.push_str(&wrap("", &base));
            },
            _ => buffer.push_str(&wrap("\\sqrt", &base)),
        }
    }

    /// Append `_{sub}` and `^{sup}` for whichever are present
    fn write_scripts(&self, sub: Option<&str>, sup: Option<&str>, buffer: &mut String) {
        if let Some(sub) = sub {
            buffer.push_str(&wrap("_", sub));
        }
        if let Some(sup) = sup {
            buffer.push_str(&wrap("^", sup));
        }
    }

    pub(super) fn write_script(&self, tree: &MathTree, node: &ScriptNode, buffer: &mut String) {
        let base = self.render_opt(tree, node.base);
        let sub = self.render_opt(tree, node.sub);
        let sup = self.render_opt(tree, node.sup);

        if sub.is_none() && sup.is_none() {
            buffer.push_str(base.as_deref().unwrap_or_default());
            return;
        }
        buffer.push_str(&wrap("", base.as_deref().unwrap_or_default()));
        self.write_scripts(sub.as_deref(), sup.as_deref(), buffer);
    }

    pub(super) fn write_pre_script(&self, tree: &MathTree, node: &ScriptNode, buffer: &mut String) {
        let base = self.render_opt(tree, node.base);
        let sub = self.render_opt(tree, node.sub);
        let sup = self.render_opt(tree, node.sup);

        if sub.is_some() || sup.is_some() {
            buffer.push_str("{}");
            self.write_scripts(sub.as_deref(), sup.as_deref(), buffer);
            if let Some(base) = base {
                buffer.push_str(&wrap("", &base));
            }
        } else if let Some(base) = base {
            buffer.push_str(&base);
        }
    }

    pub(super) fn write_nary(&self, tree: &MathTree, node: &NaryNode, buffer: &mut String) {
        let Some(base) = node.base else {
            buffer.push_str(sentinel::NARY_MISSING_BASE);
            return;
        };

        let chr = node.chr.as_deref().filter(|c| !c.is_empty());
        match chr {
            None => buffer.push_str("\\sum"),
            Some(chr) => {
                let mut chars = chr.chars();
                match (chars.next().and_then(unicode_to_latex), chars.next()) {
                    (Some(op), None) => buffer.push_str(op),
                    _ => buffer.push_str(&escape_latex(chr)),
                }
            },
        }

        let integral = chr.is_some_and(is_integral);
        match node.limit_location {
            Some(LimitLocation::UnderOver) if integral => buffer.push_str("\\limits"),
            Some(LimitLocation::SubSup) if !integral => buffer.push_str("\\nolimits"),
            _ => {},
        }

        let sub = if node.hide_sub { None } else { self.render_opt(tree, node.sub) };
        let sup = if node.hide_sup { None } else { self.render_opt(tree, node.sup) };
        self.write_scripts(sub.as_deref(), sup.as_deref(), buffer);

        buffer.push(' ');
        buffer.push_str(&self.render(tree, base));
    }

    pub(super) fn write_limit(
        &self,
        tree: &MathTree,
        node: &LimitNode,
        upper: bool,
        buffer: &mut String,
    ) {
        let script = if upper { "^" } else { "_" };

        match (node.base, node.limit) {
            (Some(base), Some(limit)) => {
                let limit = self.render(tree, limit);
                match tree.plain_text(base).as_deref().and_then(function_to_latex) {
                    // `lim` over `n→∞` becomes `\lim_{n\rightarrow\infty}`
                    Some(function) => buffer.push_str(function),
                    None => buffer.push_str(&wrap("", &self.render(tree, base))),
                }
                buffer.push_str(&wrap(script, &limit));
            },
            (None, Some(limit)) if upper => {
                buffer.push_str(&wrap("^", &self.render(tree, limit)));
            },
            (base, limit) => {
                if let Some(base) = self.render_opt(tree, base) {
                    buffer.push_str(&base);
                }
                if let Some(limit) = self.render_opt(tree, limit) {
                    push_fragment(buffer, &limit);
                }
                buffer.push_str(if upper {
                    sentinel::LIM_UPP_INCOMPLETE
                } else {
                    sentinel::LIM_LOW_INCOMPLETE
                });
            },
        }
    }

    pub(super) fn write_accent(&self, tree: &MathTree, node: &AccentNode, buffer: &mut String) {
        let Some(base) = node.base else {
            buffer.push_str(sentinel::ACCENT_MISSING_BASE);
            return;
        };
        let base = self.render(tree, base);
        let chr = node
            .chr
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_ACCENT);

        match accent_template(chr) {
            Some(template) => buffer.push_str(&template.apply(&base)),
            None => {
                buffer.push_str("\\text{Accent?}");
                buffer.push_str(&wrap("", &base));
            },
        }
    }

    pub(super) fn write_bar(&self, tree: &MathTree, node: &BarNode, buffer: &mut String) {
        let Some(base) = node.base else {
            buffer.push_str(sentinel::BAR_MISSING_BASE);
            return;
        };
        let command = match node.position {
            VerticalPosition::Bottom => "\\underline",
            VerticalPosition::Top => "\\overline",
        };
        buffer.push_str(&wrap(command, &self.render(tree, base)));
    }

    pub(super) fn write_box(&self, tree: &MathTree, node: &BoxNode, buffer: &mut String) {
        match node.base {
            Some(base) => buffer.push_str(&wrap("\\boxed", &self.render(tree, base))),
            None => buffer.push_str(sentinel::BOX_MISSING_BASE),
        }
    }

    pub(super) fn write_group_char(
        &self,
        tree: &MathTree,
        node: &GroupCharNode,
        buffer: &mut String,
    ) {
        let Some(base) = node.base else {
            buffer.push_str(sentinel::GROUP_CHAR_MISSING_BASE);
            return;
        };
        let base = self.render(tree, base);
        let chr = node
            .chr
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_GROUP_CHAR);

        if !BRACE_GROUP_CHARS.contains(&chr) {
            buffer.push_str(&base);
            return;
        }

        let position = node.position.unwrap_or(if chr == TOP_GROUP_CHAR {
            VerticalPosition::Top
        } else {
            VerticalPosition::Bottom
        });
        let command = match position {
            VerticalPosition::Top => "\\overbrace",
            VerticalPosition::Bottom => "\\underbrace",
        };
        buffer.push_str(&wrap(command, &base));
    }

    pub(super) fn write_phantom(&self, tree: &MathTree, node: &PhantomNode, buffer: &mut String) {
        let Some(base) = node.base else {
            buffer.push_str(sentinel::PHANTOM_MISSING_BASE);
            return;
        };
        let base = self.render(tree, base);
        if node.show {
            buffer.push_str(&base);
        } else {
            buffer.push_str(&wrap("\\phantom", &base));
        }
    }
}
