//! Free-text answer comparison.

/// Strip every whitespace character and lowercase.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// True if `submitted` matches `canonical`, also accepting the `x=<answer>` form.
#[must_use]
pub fn check_answer(submitted: &str, canonical: &str) -> bool {
    let submitted = normalize(submitted);
    let canonical = normalize(canonical);
    if submitted == canonical {
        return true;
    }
    submitted
        .strip_prefix("x=")
        .is_some_and(|rest| rest == canonical)
}

/// Bookwork comparison: normalized equality, no aliases.
#[must_use]
pub fn matches_verbatim(submitted: &str, recorded: &str) -> bool {
    normalize(submitted) == normalize(recorded)
}
