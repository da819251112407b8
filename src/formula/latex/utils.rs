// String helpers for LaTeX generation
//
// Escaping of literal text and joining of fragments so that a control word
// never runs into a following letter.

use memchr::{memchr, memchr3};
use phf::phf_map;

/// Characters that cannot appear literally in LaTeX source
pub static LATEX_SPECIAL_CHARS: phf::Map<char, &'static str> = phf_map! {
    '&' => "\\&",
    '%' => "\\%",
    '$' => "\\$",
    '#' => "\\#",
    '_' => "\\_",
    '{' => "\\{",
    '}' => "\\}",
    '~' => "\\textasciitilde{}",
    '^' => "\\textasciicircum{}",
    '\\' => "\\textbackslash{}",
    '\n' => "\\\\",
};

/// Escaped form of `ch`, or `None` if it can be written as is.
#[inline]
pub fn escape_char(ch: char) -> Option<&'static str> {
    LATEX_SPECIAL_CHARS.get(&ch).copied()
}

/// Check if text contains LaTeX special characters using memchr
#[inline]
pub fn contains_latex_special(text: &str) -> bool {
    let bytes = text.as_bytes();

    memchr3(b'&', b'%', b'$', bytes).is_some()
        || memchr3(b'#', b'_', b'{', bytes).is_some()
        || memchr3(b'}', b'~', b'^', bytes).is_some()
        || memchr(b'\\', bytes).is_some()
        || memchr(b'\n', bytes).is_some()
}

/// Append `text` to `buffer` with LaTeX special characters escaped.
/// Returns true if escaping was needed.
pub fn escape_latex_special_chars(text: &str, buffer: &mut String) -> bool {
    if !contains_latex_special(text) {
        buffer.push_str(text);
        return false;
    }

    for ch in text.chars() {
        match escape_char(ch) {
            Some(escaped) => buffer.push_str(escaped),
            None => buffer.push(ch),
        }
    }
    true
}

/// Escape LaTeX special characters into a new string
#[inline]
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_latex_special_chars(text, &mut out);
    out
}

/// Whether `latex` ends in a control word such as `\alpha`.
#[inline]
pub fn ends_with_control_word(latex: &str) -> bool {
    let trimmed = latex.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    trimmed.len() < latex.len() && trimmed.ends_with('\\')
}

/// Append `fragment`, separating it from a preceding control word when it
/// starts with a letter (`\alpha` + `x` becomes `\alpha x`).
#[inline]
pub fn push_fragment(buffer: &mut String, fragment: &str) {
    if fragment.starts_with(|c: char| c.is_ascii_alphabetic()) && ends_with_control_word(buffer) {
        buffer.push(' ');
    }
    buffer.push_str(fragment);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_table() {
        assert_eq!(escape_latex("a&b"), "a\\&b");
        assert_eq!(escape_latex("#1_2"), "\\#1\\_2");
        assert_eq!(escape_latex("{x}"), "\\{x\\}");
        assert_eq!(escape_latex("~^"), "\\textasciitilde{}\\textasciicircum{}");
        assert_eq!(escape_latex("a\\b"), "a\\textbackslash{}b");
        assert_eq!(escape_latex("a\nb"), "a\\\\b");
    }

    #[test]
    fn test_fast_path_passes_through() {
        let mut buffer = String::new();
        assert!(!escape_latex_special_chars("x+y=2", &mut buffer));
        assert_eq!(buffer, "x+y=2");
        assert!(escape_latex_special_chars("5%", &mut buffer));
        assert_eq!(buffer, "x+y=25\\%");
    }

    #[test]
    fn test_control_word_detection() {
        assert!(ends_with_control_word("\\alpha"));
        assert!(ends_with_control_word("x+\\sin"));
        assert!(!ends_with_control_word("\\,"));
        assert!(!ends_with_control_word("abc"));
        assert!(!ends_with_control_word("\\mathrm{d}"));
        assert!(!ends_with_control_word(""));
    }

    #[test]
    fn test_push_fragment_spacing() {
        let mut buffer = String::from("\\alpha");
        push_fragment(&mut buffer, "x");
        push_fragment(&mut buffer, "\\beta");
        push_fragment(&mut buffer, "2");
        assert_eq!(buffer, "\\alpha x\\beta2");
    }
}
