//! Case-folded substring containment used by matching and search.

/// Lower-case a term for comparison
#[inline]
pub fn normalize(term: &str) -> String {
    term.to_lowercase()
}

/// Lower-case a list of terms, preserving order
pub fn normalize_all<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms.iter().map(|t| normalize(t.as_ref())).collect()
}

/// Two already-normalized terms match if either contains the other
///
/// This is deliberately looser than equality: "market" matches "marketing".
#[inline]
pub fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Subset of `terms` matching at least one of `tags`, in `terms` order
///
/// Both sides must already be normalized.
pub fn matched_terms(terms: &[String], tags: &[String]) -> Vec<String> {
    terms
        .iter()
        .filter(|term| tags.iter().any(|tag| contains_either(tag, term)))
        .cloned()
        .collect()
}

/// Location match; false unless both sides are present and non-empty
pub fn locations_match(requester: Option<&str>, candidate: Option<&str>) -> bool {
    match (requester, candidate) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => contains_either(a, b),
        _ => false,
    }
}

/// Case-insensitive one-way containment of a raw needle in a raw haystack
#[inline]
pub fn contains_folded(haystack: &str, needle_folded: &str) -> bool {
    normalize(haystack).contains(needle_folded)
}
