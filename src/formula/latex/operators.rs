// Function names, fences and large operators

use super::utils::escape_latex;
use phf::{phf_map, phf_set};
use std::borrow::Cow;

/// Function name as typed in Word to its LaTeX macro
pub static FUNCTION_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    // Trigonometric
    "sin" => "\\sin",
    "cos" => "\\cos",
    "tan" => "\\tan",
    "cot" => "\\cot",
    "sec" => "\\sec",
    "csc" => "\\csc",
    "arcsin" => "\\arcsin",
    "arccos" => "\\arccos",
    "arctan" => "\\arctan",

    // Hyperbolic
    "sinh" => "\\sinh",
    "cosh" => "\\cosh",
    "tanh" => "\\tanh",
    "coth" => "\\coth",

    // Logarithmic
    "exp" => "\\exp",
    "ln" => "\\ln",
    "lg" => "\\lg",
    "log" => "\\log",

    // Limits and extrema
    "lim" => "\\lim",
    "liminf" => "\\liminf",
    "limsup" => "\\limsup",
    "lim inf" => "\\liminf",
    "lim sup" => "\\limsup",
    "min" => "\\min",
    "max" => "\\max",
    "sup" => "\\sup",
    "inf" => "\\inf",

    // Algebra
    "det" => "\\det",
    "dim" => "\\dim",
    "gcd" => "\\gcd",
    "Pr" => "\\Pr",
    "arg" => "\\arg",
    "deg" => "\\deg",
    "hom" => "\\hom",
    "ker" => "\\ker",
};

/// Fence character to its LaTeX bracket
pub static DELIMITERS: phf::Map<&'static str, &'static str> = phf_map! {
    "(" => "(",
    ")" => ")",
    "[" => "[",
    "]" => "]",
    "{" => "\\{",
    "}" => "\\}",
    "|" => "|",
    "‖" => "\\|",
    "⟨" => "\\langle",
    "⟩" => "\\rangle",
    "〈" => "\\langle",
    "〉" => "\\rangle",
    "⌊" => "\\lfloor",
    "⌋" => "\\rfloor",
    "⌈" => "\\lceil",
    "⌉" => "\\rceil",
};

/// Operators that take their limits beside the sign by default
pub static INTEGRAL_OPERATORS: phf::Set<char> = phf_set! {
    '∫', '∬', '∭', '∮', '∯', '∰', '∱', '∲', '∳',
};

/// Look up a function name, ignoring surrounding whitespace
#[inline]
pub fn function_to_latex(name: &str) -> Option<&'static str> {
    FUNCTION_NAMES.get(name.trim()).copied()
}

/// Convert a fence character to LaTeX; unknown fences are escaped
pub fn delimiter_to_latex(fence: &str) -> Cow<'static, str> {
    match DELIMITERS.get(fence) {
        Some(latex) => Cow::Borrowed(latex),
        None => Cow::Owned(escape_latex(fence)),
    }
}

/// Whether an n-ary character is integral-like
#[inline]
pub fn is_integral(chr: &str) -> bool {
    let mut chars = chr.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if INTEGRAL_OPERATORS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_names() {
        assert_eq!(function_to_latex("sin"), Some("\\sin"));
        assert_eq!(function_to_latex(" log "), Some("\\log"));
        assert_eq!(function_to_latex("lim sup"), Some("\\limsup"));
        assert_eq!(function_to_latex("foo"), None);
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(delimiter_to_latex("{"), "\\{");
        assert_eq!(delimiter_to_latex("⟨"), "\\langle");
        assert_eq!(delimiter_to_latex("‖"), "\\|");
        assert_eq!(delimiter_to_latex("/"), "/");
        assert_eq!(delimiter_to_latex("#"), "\\#");
    }

    #[test]
    fn test_integrals() {
        assert!(is_integral("∫"));
        assert!(is_integral("∮"));
        assert!(!is_integral("∑"));
        assert!(!is_integral("∫∫"));
        assert!(!is_integral(""));
    }
}
