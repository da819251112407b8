// Accent templates for LaTeX

use phf::phf_map;

/// A LaTeX snippet with a single `#1` slot for the accented expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatexTemplate(&'static str);

impl LatexTemplate {
    pub const SLOT: &'static str = "#1";

    #[inline]
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    /// Substitute `arg` into the slot
    pub fn apply(self, arg: &str) -> String {
        match self.0.split_once(Self::SLOT) {
            Some((before, after)) => {
                let mut out = String::with_capacity(self.0.len() + arg.len());
                out.push_str(before);
                out.push_str(arg);
                out.push_str(after);
                out
            },
            None => format!("{}{{{}}}", self.0, arg),
        }
    }
}

/// Accent character (or its four-digit hex spelling) to template
pub static ACCENTS: phf::Map<&'static str, LatexTemplate> = phf_map! {
    // Combining marks
    "\u{0300}" => LatexTemplate::new("\\grave{#1}"),
    "\u{0301}" => LatexTemplate::new("\\acute{#1}"),
    "\u{0302}" => LatexTemplate::new("\\hat{#1}"),
    "\u{0303}" => LatexTemplate::new("\\tilde{#1}"),
    "\u{0304}" => LatexTemplate::new("\\bar{#1}"),
    "\u{0305}" => LatexTemplate::new("\\overline{#1}"),
    "\u{0306}" => LatexTemplate::new("\\breve{#1}"),
    "\u{0307}" => LatexTemplate::new("\\dot{#1}"),
    "\u{0308}" => LatexTemplate::new("\\ddot{#1}"),
    "\u{030A}" => LatexTemplate::new("\\mathring{#1}"),
    "\u{030C}" => LatexTemplate::new("\\check{#1}"),
    "\u{20D6}" => LatexTemplate::new("\\overleftarrow{#1}"),
    "\u{20D7}" => LatexTemplate::new("\\vec{#1}"),
    "\u{20E1}" => LatexTemplate::new("\\overleftrightarrow{#1}"),

    // Hex spellings
    "0300" => LatexTemplate::new("\\grave{#1}"),
    "0301" => LatexTemplate::new("\\acute{#1}"),
    "0302" => LatexTemplate::new("\\hat{#1}"),
    "0303" => LatexTemplate::new("\\tilde{#1}"),
    "0304" => LatexTemplate::new("\\bar{#1}"),
    "0305" => LatexTemplate::new("\\overline{#1}"),
    "0306" => LatexTemplate::new("\\breve{#1}"),
    "0307" => LatexTemplate::new("\\dot{#1}"),
    "0308" => LatexTemplate::new("\\ddot{#1}"),
    "030A" => LatexTemplate::new("\\mathring{#1}"),
    "030C" => LatexTemplate::new("\\check{#1}"),
    "20D6" => LatexTemplate::new("\\overleftarrow{#1}"),
    "20D7" => LatexTemplate::new("\\vec{#1}"),
    "20E1" => LatexTemplate::new("\\overleftrightarrow{#1}"),

    // Spacing forms
    "^" => LatexTemplate::new("\\hat{#1}"),
    "~" => LatexTemplate::new("\\tilde{#1}"),
    "-" => LatexTemplate::new("\\bar{#1}"),
    "¯" => LatexTemplate::new("\\bar{#1}"),
    "→" => LatexTemplate::new("\\vec{#1}"),
    "." => LatexTemplate::new("\\dot{#1}"),
    ".." => LatexTemplate::new("\\ddot{#1}"),
    "'" => LatexTemplate::new("\\acute{#1}"),
    "`" => LatexTemplate::new("\\grave{#1}"),
    "˘" => LatexTemplate::new("\\breve{#1}"),
    "ˇ" => LatexTemplate::new("\\check{#1}"),
    "˙" => LatexTemplate::new("\\dot{#1}"),
    "¨" => LatexTemplate::new("\\ddot{#1}"),
};

/// Default accent when `m:chr` is absent (combining circumflex)
pub const DEFAULT_ACCENT: &str = "\u{0302}";

/// Find the template for an accent character
pub fn accent_template(chr: &str) -> Option<LatexTemplate> {
    if let Some(template) = ACCENTS.get(chr) {
        return Some(*template);
    }
    if chr.len() == 4 && chr.bytes().all(|b| b.is_ascii_hexdigit()) {
        return ACCENTS.get(chr.to_ascii_uppercase().as_str()).copied();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_apply() {
        assert_eq!(LatexTemplate::new("\\hat{#1}").apply("x"), "\\hat{x}");
        assert_eq!(LatexTemplate::new("\\hat").apply("x"), "\\hat{x}");
    }

    #[test]
    fn test_accent_lookup() {
        assert_eq!(accent_template("\u{0303}").map(|t| t.apply("a")).as_deref(), Some("\\tilde{a}"));
        assert_eq!(accent_template("20d7").map(|t| t.apply("v")).as_deref(), Some("\\vec{v}"));
        assert_eq!(accent_template("˙").map(|t| t.apply("y")).as_deref(), Some("\\dot{y}"));
        assert_eq!(accent_template(DEFAULT_ACCENT).map(|t| t.apply("p")).as_deref(), Some("\\hat{p}"));
        assert!(accent_template("☃").is_none());
        assert!(accent_template("zzzz").is_none());
    }

    #[test]
    fn test_every_template_has_one_slot() {
        for (key, template) in ACCENTS.entries() {
            assert_eq!(template.0.matches(LatexTemplate::SLOT).count(), 1, "{key}");
        }
    }
}
