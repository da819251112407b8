// OMML property parsing
//
// Properties live in a `*Pr` child of the element they configure and are
// spelled as empty elements carrying an `m:val` attribute.

use super::elements::{FractionType, LimitLocation, MathAlphabet, RunStyle, VerticalPosition};
use super::lookup::parse_on_off_value;
use super::xml::XmlElement;

/// The `val` of `<pr_tag><prop/></pr_tag>` below `element`.
pub fn property_val<'a>(element: &'a XmlElement, pr_tag: &str, prop: &str) -> Option<&'a str> {
    element.child(pr_tag)?.child(prop)?.val()
}

/// Whether `prop` is present under `pr_tag` with a value other than
/// `0`/`off`/`false`.
pub fn property_flag(element: &XmlElement, pr_tag: &str, prop: &str) -> bool {
    element
        .child(pr_tag)
        .is_some_and(|pr| parse_on_off(pr.child(prop)))
}

/// On/off flag element: absent is off, present is on unless switched off.
#[inline]
pub fn parse_on_off(flag: Option<&XmlElement>) -> bool {
    flag.is_some_and(|e| parse_on_off_value(e.val()))
}

/// Parse run properties (m:rPr)
pub fn parse_run_properties(rpr: &XmlElement) -> RunStyle {
    let mut style = RunStyle::default();

    let sty = rpr.child("sty").and_then(XmlElement::val);
    match sty {
        Some("p") => style.plain = true,
        Some("b") => style.bold = true,
        Some("i") => style.italic = true,
        Some("bi") => {
            style.bold = true;
            style.italic = true;
        },
        Some("sc") => style.alphabet = Some(MathAlphabet::Script),
        Some("fr") => style.alphabet = Some(MathAlphabet::Fraktur),
        _ => {},
    }

    if matches!(sty, None | Some("p") | Some("nor")) {
        if style.alphabet.is_none()
            && let Some(scr) = rpr.child("scr")
        {
            style.alphabet = parse_alphabet(scr.val());
        }
        if style.alphabet.is_none() && parse_on_off(rpr.child("frak")) {
            style.alphabet = Some(MathAlphabet::Fraktur);
        }
        if style.alphabet.is_none() {
            style.bold |= parse_on_off(rpr.child("b"));
            style.italic |= parse_on_off(rpr.child("i"));
        }
    }

    style
}

/// Map `m:scr/@val` onto an alphabet; a bare `<m:scr/>` means script.
fn parse_alphabet(val: Option<&str>) -> Option<MathAlphabet> {
    match val {
        None | Some("script") => Some(MathAlphabet::Script),
        Some("fraktur") => Some(MathAlphabet::Fraktur),
        Some("double-struck") => Some(MathAlphabet::DoubleStruck),
        Some("sans-serif") => Some(MathAlphabet::SansSerif),
        Some("monospace") => Some(MathAlphabet::Monospace),
        _ => None, // roman and unknown values
    }
}

/// Parse the fraction type (m:fPr/m:type)
pub fn parse_fraction_type(val: Option<&str>) -> FractionType {
    match val {
        Some("noBar") => FractionType::NoBar,
        Some("lin") => FractionType::Linear,
        Some("skw") => FractionType::Skewed,
        _ => FractionType::Bar,
    }
}

/// Parse n-ary limit placement (m:naryPr/m:limLoc)
pub fn parse_limit_location(val: Option<&str>) -> Option<LimitLocation> {
    match val {
        Some("undOvr") => Some(LimitLocation::UnderOver),
        Some("subSup") => Some(LimitLocation::SubSup),
        _ => None,
    }
}

/// Parse a `top`/`bot` position value
pub fn parse_position(val: Option<&str>) -> Option<VerticalPosition> {
    match val {
        Some("top") => Some(VerticalPosition::Top),
        Some("bot") => Some(VerticalPosition::Bottom),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rpr(props: &[(&str, Option<&str>)]) -> XmlElement {
        props.iter().fold(XmlElement::omml("rPr"), |pr, (tag, val)| {
            let mut prop = XmlElement::omml(tag);
            if let Some(val) = val {
                prop = prop.with_val(*val);
            }
            pr.with_child(prop)
        })
    }

    #[test]
    fn test_sty_values() {
        let style = parse_run_properties(&rpr(&[("sty", Some("bi"))]));
        assert!(style.bold && style.italic && !style.plain);

        let style = parse_run_properties(&rpr(&[("sty", Some("p"))]));
        assert!(style.plain && !style.bold);
    }

    #[test]
    fn test_explicit_sty_wins_over_toggles() {
        let style = parse_run_properties(&rpr(&[("sty", Some("i")), ("b", None)]));
        assert!(style.italic);
        assert!(!style.bold);
    }

    #[test]
    fn test_toggles_when_sty_absent() {
        let style = parse_run_properties(&rpr(&[("b", None), ("i", Some("off"))]));
        assert!(style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_alphabets() {
        let style = parse_run_properties(&rpr(&[("scr", None)]));
        assert_eq!(style.alphabet, Some(MathAlphabet::Script));

        let style = parse_run_properties(&rpr(&[("scr", Some("double-struck")), ("b", None)]));
        assert_eq!(style.alphabet, Some(MathAlphabet::DoubleStruck));
        assert!(!style.bold);

        let style = parse_run_properties(&rpr(&[("scr", Some("roman"))]));
        assert_eq!(style.alphabet, None);

        let style = parse_run_properties(&rpr(&[("frak", None)]));
        assert_eq!(style.alphabet, Some(MathAlphabet::Fraktur));
    }

    #[test]
    fn test_property_helpers() {
        let rad = XmlElement::omml("rad").with_child(
            XmlElement::omml("radPr").with_child(XmlElement::omml("degHide").with_val("1")),
        );
        assert!(property_flag(&rad, "radPr", "degHide"));
        assert!(!property_flag(&rad, "radPr", "missing"));
        assert_eq!(property_val(&rad, "radPr", "degHide"), Some("1"));
        assert_eq!(property_val(&rad, "fPr", "type"), None);
    }

    #[test]
    fn test_enum_values() {
        assert_eq!(parse_fraction_type(Some("noBar")), FractionType::NoBar);
        assert_eq!(parse_fraction_type(Some("bogus")), FractionType::Bar);
        assert_eq!(parse_limit_location(Some("undOvr")), Some(LimitLocation::UnderOver));
        assert_eq!(parse_position(Some("bot")), Some(VerticalPosition::Bottom));
        assert_eq!(parse_position(None), None);
    }
}
