use super::elements::ElementType;
use phf::{phf_map, phf_set};

/// OMML local name to node kind.
///
/// A tag is registered at most once: a duplicate key fails to compile.
pub static ELEMENT_TYPES: phf::Map<&'static str, ElementType> = phf_map! {
    // Text
    "r" => ElementType::Run,

    // Fractions and roots
    "f" => ElementType::Fraction,
    "rad" => ElementType::Radical,

    // Scripts
    "sSub" => ElementType::Subscript,
    "sSup" => ElementType::Superscript,
    "sSubSup" => ElementType::SubSup,
    "sPre" => ElementType::PreScript,

    // Fences and functions
    "d" => ElementType::Delimiter,
    "func" => ElementType::Function,

    // Large operators and limits
    "nary" => ElementType::Nary,
    "limLow" => ElementType::LimLow,
    "limUpp" => ElementType::LimUpp,

    // Arrays
    "m" => ElementType::Matrix,
    "mr" => ElementType::MatrixRow,
    "eqArr" => ElementType::EqArr,

    // Decorations
    "acc" => ElementType::Accent,
    "bar" => ElementType::Bar,
    "box" => ElementType::Box,
    "borderBox" => ElementType::BorderBox,
    "groupChr" => ElementType::GroupChar,
    "phant" => ElementType::Phantom,
};

/// Unregistered elements that are structural and expected to pass through.
pub static KNOWN_CONTAINERS: phf::Set<&'static str> = phf_set! {
    "oMathPara", "oMath", "e", "num", "den", "sub", "sup", "deg", "lim",
    "fName", "sep", "t",
};

/// `m:val` spellings that switch an on/off property off
pub static OFF_VALUES: phf::Set<&'static str> = phf_set! {
    "0", "off", "false", "no",
};

/// Get the node kind registered for an OMML local name
#[inline]
pub fn get_element_type(name: &str) -> Option<ElementType> {
    ELEMENT_TYPES.get(name).copied()
}

#[inline]
pub fn is_known_container(name: &str) -> bool {
    KNOWN_CONTAINERS.contains(name)
}

/// Parse an on/off value; an absent value means on.
#[inline]
pub fn parse_on_off_value(val: Option<&str>) -> bool {
    val.is_none_or(|v| !OFF_VALUES.contains(v.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_tags() {
        assert_eq!(get_element_type("f"), Some(ElementType::Fraction));
        assert_eq!(get_element_type("sSubSup"), Some(ElementType::SubSup));
        assert_eq!(get_element_type("borderBox"), Some(ElementType::BorderBox));
        assert_eq!(ELEMENT_TYPES.len(), 21);
    }

    #[test]
    fn test_containers_are_not_registered() {
        for tag in KNOWN_CONTAINERS.iter() {
            assert!(get_element_type(tag).is_none(), "{tag} must stay generic");
        }
        assert!(get_element_type("m:f").is_none());
        assert!(get_element_type("unknownTag").is_none());
    }

    #[test]
    fn test_on_off_values() {
        assert!(parse_on_off_value(None));
        assert!(parse_on_off_value(Some("1")));
        assert!(parse_on_off_value(Some("on")));
        assert!(!parse_on_off_value(Some("0")));
        assert!(!parse_on_off_value(Some("off")));
        assert!(!parse_on_off_value(Some("false")));
    }
}
