//! Skill and interest matching shared by the fallback scorer, the ranking
//! rationale, and the gap analyzer.
//!
//! The skill rule is deliberately permissive: case-insensitive substring
//! containment in either direction, so "Data" matches "Data Analysis" and
//! vice versa. Known looseness, kept as-is; ranking and gap reports must
//! agree about what counts as a possessed skill.

/// Case-insensitive substring containment in either direction.
/// Empty or whitespace-only names never match anything.
pub fn skills_match(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// True if any of the candidate's skills matches `target`.
pub fn profile_has_skill(profile_skills: &[String], target: &str) -> bool {
    profile_skills.iter().any(|s| skills_match(s, target))
}

/// True if `needle` appears case-insensitively inside `haystack`.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    !needle.is_empty() && haystack.to_lowercase().contains(&needle)
}

/// Interest containment with light stemming: one trailing 's' or 'e' is
/// dropped from the interest term before the substring test, so derived
/// forms still count — "Finance" stems to "financ" and matches
/// "Financial Analyst Intern".
pub fn interest_matches(text: &str, interest: &str) -> bool {
    let needle = interest.trim().to_lowercase();
    let needle = needle
        .strip_suffix('s')
        .or_else(|| needle.strip_suffix('e'))
        .unwrap_or(&needle);
    !needle.is_empty() && text.to_lowercase().contains(needle)
}
