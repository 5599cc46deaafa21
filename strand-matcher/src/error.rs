//! Invariant violations and build errors.
//!
//! An ordinary "no match" is never an error: matchers report it as `Ok(None)`. The
//! [`Error`] variants indicate a bug in how matchers are being composed, not a property of
//! the input text, and are not meant to be recovered from.

/// A violated navigator invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The navigator was invalidated by a failed match and must not be reused.
    #[error("navigator has been invalidated by a failed match")]
    Invalidated,

    /// A matcher was applied after a ghost capture, which must be the last step of a match.
    #[error("cannot match further after a ghost capture (ghost spans {capture}..{nav})")]
    MatchAfterGhost { capture: usize, nav: usize },

    /// The operation requires a navigator without a partial capture.
    #[error("navigator is not fresh: capture already spans {start}..{capture}")]
    NotFresh { start: usize, capture: usize },

    /// Find-all produced a zero-width match, which would never advance.
    #[error("find-all produced a zero-width match at {at}, which would never advance")]
    ZeroWidthMatch { at: usize },

    /// A cursor movement would leave the slice.
    #[error("cannot move {by} code units from {at} past the end of the slice (length {len})")]
    OutOfBounds { at: usize, by: usize, len: usize },
}

/// An error building a matcher.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[cfg(feature = "unicode")]
    #[error("failed to compile the general category table: {0}")]
    Category(#[from] regex_syntax::Error),

    #[cfg(feature = "perf-literal")]
    #[error("failed to build the literal prefilter: {0}")]
    Prefilter(#[from] aho_corasick::BuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::MatchAfterGhost { capture: 2, nav: 3 }.to_string(),
            "cannot match further after a ghost capture (ghost spans 2..3)"
        );
        assert_eq!(
            Error::ZeroWidthMatch { at: 5 }.to_string(),
            "find-all produced a zero-width match at 5, which would never advance"
        );
    }
}
