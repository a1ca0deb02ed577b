//! Version normalization and comparison
//!
//! Declared manifest versions and upstream tag names come from two
//! independent vocabularies: tags often carry a `v` prefix, and either
//! side may carry a pre-release or build suffix. Both normalization
//! strategies are pure functions applied identically to both sides
//! before equality is decided.

/// Normalization strategy for version comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Strip one leading `v`, then compare the remainder verbatim.
    /// `1.2.3-beta` and `1.2.3` compare unequal.
    StrictStrip,
    /// Strip one leading `v`, then drop everything from the first `-`
    /// when the portion before it contains a digit. A prefix with no
    /// digit (a tag like `release-4.5.6`) is kept whole, since splitting
    /// would misidentify the version component.
    #[default]
    PrefixCanonical,
}

/// Reduces a version string to its canonical comparison form
pub fn canonicalize(version: &str, mode: Normalization) -> String {
    let stripped = version.strip_prefix('v').unwrap_or(version);
    match mode {
        Normalization::StrictStrip => stripped.to_string(),
        Normalization::PrefixCanonical => match stripped.split_once('-') {
            Some((head, _)) if head.chars().any(|c| c.is_ascii_digit()) => head.to_string(),
            _ => stripped.to_string(),
        },
    }
}

/// Decides whether two version strings denote the same release
pub fn versions_match(declared: &str, latest: &str, mode: Normalization) -> bool {
    canonicalize(declared, mode) == canonicalize(latest, mode)
}
