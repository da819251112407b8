use thiserror::Error;

/// Returned by the string entry points when the input is not well-formed XML.
pub const PARSE_ERROR: &str = "[OMML Parse Error]";
/// Returned when well-formed input cannot be converted (e.g. nesting too deep).
pub const CONVERSION_ERROR: &str = "[OMML Conversion Error]";
/// Returned by the `oMath` element entry point for any other element.
pub const NOT_OMATH_ERROR: &str = "[Error: Not an oMath element]";

/// Node-scoped markers rendered in place of a structurally incomplete node.
///
/// Only the offending node is replaced; siblings and ancestors render
/// normally.
pub mod sentinel {
    pub const INCOMPLETE_FRACTION: &str = "{ERROR: Incomplete Fraction}";
    pub const INCOMPLETE_RADICAL: &str = "{ERROR: Incomplete Radical}";
    pub const MISSING_FUNCTION_NAME: &str = "{ERROR: Missing function name}";
    pub const NARY_MISSING_BASE: &str = "{ERROR: N-ary operator missing base element}";
    pub const ACCENT_MISSING_BASE: &str = "{ERROR: Accent missing base or char}";
    pub const BAR_MISSING_BASE: &str = "{ERROR: Bar missing base element}";
    pub const BOX_MISSING_BASE: &str = "{ERROR: Box missing base element}";
    pub const GROUP_CHAR_MISSING_BASE: &str = "{ERROR: GroupChar missing base or char}";
    pub const PHANTOM_MISSING_BASE: &str = "{ERROR: Phantom missing base element}";
    pub const LIM_LOW_INCOMPLETE: &str = "{ERROR: LimLow incomplete}";
    pub const LIM_UPP_INCOMPLETE: &str = "{ERROR: LimUpp incomplete}";
}

/// Errors that can occur while reading OMML
#[derive(Debug, Error)]
pub enum OmmlError {
    /// The input is not well-formed XML
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// The input bytes are not valid UTF-8
    #[error("Text encoding error: {0}")]
    Encoding(String),

    /// The input contains no element at all
    #[error("Empty XML input")]
    EmptyInput,

    /// End of input reached with elements still open
    #[error("Unclosed elements detected, final depth: {0}")]
    UnclosedElement(usize),

    /// Nesting deeper than the configured limit
    #[error("XML depth limit exceeded: {0}")]
    DepthLimitExceeded(usize),

    /// An `oMath` root was required
    #[error("Expected an oMath element, found {0}")]
    NotOmath(String),
}

impl OmmlError {
    /// The fixed marker string the infallible entry points return for this error.
    pub fn sentinel(&self) -> &'static str {
        match self {
            OmmlError::Xml(_)
            | OmmlError::Encoding(_)
            | OmmlError::EmptyInput
            | OmmlError::UnclosedElement(_) => PARSE_ERROR,
            OmmlError::DepthLimitExceeded(_) => CONVERSION_ERROR,
            OmmlError::NotOmath(_) => NOT_OMATH_ERROR,
        }
    }
}

impl From<std::str::Utf8Error> for OmmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        OmmlError::Encoding(format!("UTF-8 decoding error: {}", err))
    }
}

impl From<quick_xml::Error> for OmmlError {
    fn from(err: quick_xml::Error) -> Self {
        OmmlError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OmmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OmmlError::Xml(format!("Malformed attribute: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_mapping() {
        assert_eq!(OmmlError::EmptyInput.sentinel(), PARSE_ERROR);
        assert_eq!(OmmlError::Xml("bad".into()).sentinel(), PARSE_ERROR);
        assert_eq!(OmmlError::UnclosedElement(2).sentinel(), PARSE_ERROR);
        assert_eq!(OmmlError::DepthLimitExceeded(4).sentinel(), CONVERSION_ERROR);
        assert_eq!(OmmlError::NotOmath("f".into()).sentinel(), NOT_OMATH_ERROR);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            OmmlError::DepthLimitExceeded(1000).to_string(),
            "XML depth limit exceeded: 1000"
        );
    }
}
