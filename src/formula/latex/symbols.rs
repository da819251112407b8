// Symbol conversion to LaTeX
//
// This module maps Unicode characters found in OMML runs to LaTeX: Greek
// letters, operators, relations, arrows, large operators, letter-like
// symbols and spacing glyphs. Characters without an entry are escaped and
// otherwise passed through unchanged.

use super::utils::{escape_char, push_fragment};
use phf::phf_map;

/// Unicode character to LaTeX command
pub static UNICODE_TO_LATEX: phf::Map<char, &'static str> = phf_map! {
    // Lowercase Greek
    'α' => "\\alpha",
    'β' => "\\beta",
    'γ' => "\\gamma",
    'δ' => "\\delta",
    'ε' => "\\epsilon",
    'ζ' => "\\zeta",
    'η' => "\\eta",
    'θ' => "\\theta",
    'ι' => "\\iota",
    'κ' => "\\kappa",
    'λ' => "\\lambda",
    'μ' => "\\mu",
    'ν' => "\\nu",
    'ξ' => "\\xi",
    'ο' => "o",
    'π' => "\\pi",
    'ρ' => "\\rho",
    'ς' => "\\varsigma",
    'σ' => "\\sigma",
    'τ' => "\\tau",
    'υ' => "\\upsilon",
    'φ' => "\\phi",
    'χ' => "\\chi",
    'ψ' => "\\psi",
    'ω' => "\\omega",

    // Uppercase Greek (letters identical to Latin ones have no command)
    'Α' => "A",
    'Β' => "B",
    'Γ' => "\\Gamma",
    'Δ' => "\\Delta",
    'Ε' => "E",
    'Ζ' => "Z",
    'Η' => "H",
    'Θ' => "\\Theta",
    'Ι' => "I",
    'Κ' => "K",
    'Λ' => "\\Lambda",
    'Μ' => "M",
    'Ν' => "N",
    'Ξ' => "\\Xi",
    'Ο' => "O",
    'Π' => "\\Pi",
    'Ρ' => "P",
    'Σ' => "\\Sigma",
    'Τ' => "T",
    'Υ' => "\\Upsilon",
    'Φ' => "\\Phi",
    'Χ' => "X",
    'Ψ' => "\\Psi",
    'Ω' => "\\Omega",

    // Variant forms
    'ϵ' => "\\varepsilon",
    'ϑ' => "\\vartheta",
    'ϰ' => "\\varkappa",
    'ϕ' => "\\varphi",
    'ϱ' => "\\varrho",
    'ϖ' => "\\varpi",

    // Letter-like symbols
    '∂' => "\\partial",
    '∇' => "\\nabla",
    '∞' => "\\infty",
    '∅' => "\\emptyset",
    'ℏ' => "\\hbar",
    'ℓ' => "\\ell",
    '℘' => "\\wp",
    'ℑ' => "\\Im",
    'ℜ' => "\\Re",
    'ℵ' => "\\aleph",
    'ℎ' => "h",
    'ℕ' => "\\mathbb{N}",
    'ℤ' => "\\mathbb{Z}",
    'ℚ' => "\\mathbb{Q}",
    'ℝ' => "\\mathbb{R}",
    'ℂ' => "\\mathbb{C}",
    '∀' => "\\forall",
    '∃' => "\\exists",
    '∄' => "\\nexists",
    '¬' => "\\neg",
    '∠' => "\\angle",
    '△' => "\\triangle",
    '∴' => "\\therefore",
    '∵' => "\\because",
    '°' => "^{\\circ}",
    '′' => "'",
    '″' => "''",
    '‴' => "'''",
    '√' => "\\sqrt",

    // Binary operators
    '±' => "\\pm",
    '∓' => "\\mp",
    '×' => "\\times",
    '÷' => "\\div",
    '−' => "-",
    '⋅' => "\\cdot",
    '·' => "\\cdot",
    '∘' => "\\circ",
    '∙' => "\\bullet",
    '•' => "\\bullet",
    '∗' => "\\ast",
    '⋆' => "\\star",
    '⊕' => "\\oplus",
    '⊖' => "\\ominus",
    '⊗' => "\\otimes",
    '⊙' => "\\odot",
    '∧' => "\\wedge",
    '∨' => "\\vee",
    '∩' => "\\cap",
    '∪' => "\\cup",
    '∖' => "\\setminus",
    '⊎' => "\\uplus",
    '⊓' => "\\sqcap",
    '⊔' => "\\sqcup",
    '†' => "\\dagger",
    '‡' => "\\ddagger",

    // Relations
    '≠' => "\\ne",
    '≤' => "\\leq",
    '≥' => "\\geq",
    '≦' => "\\leqq",
    '≧' => "\\geqq",
    '≨' => "\\lneqq",
    '≩' => "\\gneqq",
    '≪' => "\\ll",
    '≫' => "\\gg",
    '≡' => "\\equiv",
    '≈' => "\\approx",
    '≅' => "\\cong",
    '∼' => "\\sim",
    '≃' => "\\simeq",
    '≍' => "\\asymp",
    '≐' => "\\doteq",
    '≜' => "\\triangleq",
    '∝' => "\\propto",
    '≺' => "\\prec",
    '≻' => "\\succ",
    '⪯' => "\\preceq",
    '⪰' => "\\succeq",
    '∈' => "\\in",
    '∉' => "\\notin",
    '∋' => "\\ni",
    '∌' => "\\not\\ni",
    '⊂' => "\\subset",
    '⊃' => "\\supset",
    '⊆' => "\\subseteq",
    '⊇' => "\\supseteq",
    '⊄' => "\\not\\subset",
    '⊊' => "\\subsetneq",
    '⊋' => "\\supsetneq",
    '⊥' => "\\perp",
    '∥' => "\\parallel",
    '∣' => "\\mid",
    '⊢' => "\\vdash",
    '⊨' => "\\models",

    // Arrows
    '←' => "\\leftarrow",
    '↑' => "\\uparrow",
    '→' => "\\rightarrow",
    '↓' => "\\downarrow",
    '↔' => "\\leftrightarrow",
    '↕' => "\\updownarrow",
    '↖' => "\\nwarrow",
    '↗' => "\\nearrow",
    '↘' => "\\searrow",
    '↙' => "\\swarrow",
    '⇐' => "\\Leftarrow",
    '⇒' => "\\Rightarrow",
    '⇑' => "\\Uparrow",
    '⇓' => "\\Downarrow",
    '⇔' => "\\Leftrightarrow",
    '↦' => "\\mapsto",
    '↩' => "\\hookleftarrow",
    '↪' => "\\hookrightarrow",
    '⇀' => "\\rightharpoonup",
    '↼' => "\\leftharpoonup",
    '⇌' => "\\rightleftharpoons",
    '⟵' => "\\longleftarrow",
    '⟶' => "\\longrightarrow",
    '⟷' => "\\longleftrightarrow",
    '⟸' => "\\Longleftarrow",
    '⟹' => "\\Longrightarrow",
    '⟺' => "\\Longleftrightarrow",

    // Dots
    '…' => "\\dots",
    '⋮' => "\\vdots",
    '⋯' => "\\cdots",
    '⋰' => "\\adots",
    '⋱' => "\\ddots",

    // Large operators
    '∑' => "\\sum",
    '∏' => "\\prod",
    '∐' => "\\coprod",
    '∫' => "\\int",
    '∬' => "\\iint",
    '∭' => "\\iiint",
    '∮' => "\\oint",
    '∯' => "\\oiint",
    '∰' => "\\oiiint",
    '⋀' => "\\bigwedge",
    '⋁' => "\\bigvee",
    '⋂' => "\\bigcap",
    '⋃' => "\\bigcup",
    '⨀' => "\\bigodot",
    '⨁' => "\\bigoplus",
    '⨂' => "\\bigotimes",
    '⨄' => "\\biguplus",
    '⨆' => "\\bigsqcup",
    '⅀' => "\\Bbbsum",

    // Spacing
    '\u{2002}' => "\\enspace",
    '\u{2003}' => "\\quad",
    '\u{2009}' => "\\,",
    '\u{200A}' => "\\:",
    '\u{205F}' => "\\:",
    '\u{00A0}' => "~",

    // Invisible characters
    '\u{200B}' => "",
    '\u{2061}' => "",
    '\u{2062}' => "",
    '\u{2063}' => "",
};

/// Mathematical italic letters (U+1D434..U+1D467) as plain ASCII letters.
///
/// Word stores typed variables as ordinary letters, but text pasted from
/// other tools often carries the styled codepoints.
#[inline]
fn math_italic_to_ascii(ch: char) -> Option<char> {
    let offset = (ch as u32).checked_sub(0x1D434)?;
    match offset {
        0..=25 => char::from_u32(u32::from(b'A') + offset),
        26..=51 => char::from_u32(u32::from(b'a') + offset - 26),
        _ => None,
    }
}

/// Look up the LaTeX form of a single character.
#[inline]
pub fn unicode_to_latex(ch: char) -> Option<&'static str> {
    UNICODE_TO_LATEX.get(&ch).copied()
}

/// Convert run text to LaTeX one character at a time.
///
/// Mapped characters become their command, a space separating a command from
/// a following letter (`\alpha x`). Everything else is escaped.
pub fn convert_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut utf8 = [0u8; 4];

    for ch in text.chars() {
        if let Some(latex) = unicode_to_latex(ch) {
            push_fragment(&mut out, latex);
        } else if let Some(letter) = math_italic_to_ascii(ch) {
            push_fragment(&mut out, letter.encode_utf8(&mut utf8));
        } else if let Some(escaped) = escape_char(ch) {
            push_fragment(&mut out, escaped);
        } else {
            push_fragment(&mut out, ch.encode_utf8(&mut utf8));
        }
    }

    out
}
