//! Wildcard name matching.

/// Match a file name against a `*`/`?` pattern, case-insensitively.
///
/// `*` matches any run of characters (including none) and is tried at every
/// position by backtracking; `?` matches exactly one character. The match
/// succeeds when both pattern and name are exhausted, with any trailing `*`s
/// consumed.
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().flat_map(char::to_uppercase).collect();
    let name: Vec<char> = name.chars().flat_map(char::to_uppercase).collect();
    match_at(&pattern, &name)
}

/// Does the name contain wildcard metacharacters at all?
pub fn has_wildcards(name: &str) -> bool {
    name.contains(['*', '?'])
}

fn match_at(pattern: &[char], name: &[char]) -> bool {
    match pattern.first() {
        None => name.is_empty(),
        Some('*') => {
            // Try the star against every suffix, longest skip last.
            for start in 0..=name.len() {
                if match_at(&pattern[1..], &name[start..]) {
                    return true;
                }
            }
            false
        }
        Some('?') => !name.is_empty() && match_at(&pattern[1..], &name[1..]),
        Some(&ch) => match name.first() {
            Some(&first) if first == ch => match_at(&pattern[1..], &name[1..]),
            _ => false,
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
