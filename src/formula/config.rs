//! Configuration types for OMML to LaTeX conversion.
//!
//! The defaults reproduce the behaviour expected by document converters:
//! generous nesting limits and `aligned` for bare equation arrays, which is
//! valid inside both inline and display math.

/// Maximum element nesting accepted before conversion is abandoned.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Environment used for an equation array that is not a case distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EquationArrayEnv {
    /// `\begin{aligned}` (usable inside `$...$`)
    #[default]
    Aligned,
    /// `\begin{align}` (top-level display environment)
    Align,
    /// `\begin{gathered}`
    Gathered,
}

impl EquationArrayEnv {
    /// LaTeX environment name.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            EquationArrayEnv::Aligned => "aligned",
            EquationArrayEnv::Align => "align",
            EquationArrayEnv::Gathered => "gathered",
        }
    }
}

/// Configuration options for OMML conversion.
///
/// # Examples
///
/// ```rust
/// use omml2latex::{ConvertOptions, EquationArrayEnv};
///
/// let options = ConvertOptions::new()
///     .with_max_depth(256)
///     .with_equation_array(EquationArrayEnv::Align);
/// assert_eq!(options.max_depth, 256);
/// ```
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Deepest element nesting accepted by the parser
    pub max_depth: usize,
    /// Environment for equation arrays outside a `{` delimiter
    pub equation_array: EquationArrayEnv,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            equation_array: EquationArrayEnv::default(),
        }
    }
}

impl ConvertOptions {
    /// Create a new `ConvertOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum element nesting depth.
    ///
    /// Input nested deeper than this is reported as a conversion error
    /// instead of being recursed into.
    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the environment used for plain equation arrays.
    #[inline]
    pub fn with_equation_array(mut self, env: EquationArrayEnv) -> Self {
        self.equation_array = env;
        self
    }
}
