//! Command line tokenizer.
//!
//! Splits a raw input line into tokens on spaces and tabs. There is no
//! quoting or escaping: runs of delimiters collapse, and an all-delimiter
//! line yields no tokens. The first token (uppercased) selects the command;
//! the rest are passed to the handler verbatim, case preserved.

/// Tokenize an input line.
///
/// # Arguments
///
/// * `line` - Raw input line, without the trailing newline
///
/// # Returns
///
/// The tokens in order. Empty or whitespace-only input yields an empty vec.
pub fn parse_line(line: &str) -> Vec<String> {
    line.split([' ', '\t'])
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
