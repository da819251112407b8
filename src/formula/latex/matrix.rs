// Matrix and equation array environments
//
// Both constructs render as a LaTeX environment whose name depends on the
// fence characters of an enclosing delimiter.

/// Fence pair around a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFence {
    None,
    Paren,
    Bracket,
    Brace,
    Pipe,
    DoublePipe,
}

impl MatrixFence {
    /// Classify a delimiter's begin/end characters
    pub fn from_delimiters(begin: &str, end: &str) -> Self {
        match (begin, end) {
            ("(", ")") => MatrixFence::Paren,
            ("[", "]") => MatrixFence::Bracket,
            ("{", "}") => MatrixFence::Brace,
            ("|", "|") => MatrixFence::Pipe,
            ("‖", "‖") => MatrixFence::DoublePipe,
            _ => MatrixFence::None,
        }
    }
}

/// Convert matrix fence type to LaTeX environment name
#[inline]
pub fn matrix_fence_to_env(fence_type: MatrixFence) -> &'static str {
    match fence_type {
        MatrixFence::None => "matrix",
        MatrixFence::Paren => "pmatrix",
        MatrixFence::Bracket => "bmatrix",
        MatrixFence::Brace => "Bmatrix",
        MatrixFence::Pipe => "vmatrix",
        MatrixFence::DoublePipe => "Vmatrix",
    }
}

/// Separator between rows of a matrix or equation array
pub const ROW_SEPARATOR: &str = " \\\\\n";
/// Separator between cells of a matrix row
pub const CELL_SEPARATOR: &str = " & ";

/// Write `\begin{env}` rows `\end{env}` into `buffer`
pub fn write_environment<S: AsRef<str>>(buffer: &mut String, env: &str, rows: &[S]) {
    let content_len: usize = rows.iter().map(|r| r.as_ref().len() + ROW_SEPARATOR.len()).sum();
    buffer.reserve(content_len + 2 * env.len() + 16);

    buffer.push_str("\\begin{");
    buffer.push_str(env);
    buffer.push_str("}\n");
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            buffer.push_str(ROW_SEPARATOR);
        }
        buffer.push_str(row.as_ref());
    }
    buffer.push_str("\n\\end{");
    buffer.push_str(env);
    buffer.push('}');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_classification() {
        assert_eq!(MatrixFence::from_delimiters("(", ")"), MatrixFence::Paren);
        assert_eq!(MatrixFence::from_delimiters("[", "]"), MatrixFence::Bracket);
        assert_eq!(MatrixFence::from_delimiters("‖", "‖"), MatrixFence::DoublePipe);
        assert_eq!(MatrixFence::from_delimiters("(", "]"), MatrixFence::None);
        assert_eq!(matrix_fence_to_env(MatrixFence::Brace), "Bmatrix");
    }

    #[test]
    fn test_write_environment() {
        let mut buffer = String::new();
        write_environment(&mut buffer, "pmatrix", &["1 & 0", "0 & 1"]);
        assert_eq!(buffer, "\\begin{pmatrix}\n1 & 0 \\\\\n0 & 1\n\\end{pmatrix}");
    }
}
