use crate::{matcher::MatchResult, navigator::Navigator};

use super::{IntoMatcher, Matcher, SharedMatcher};

/// Consumes what the inner matcher matches without adding it to the visible capture.
///
/// The consumed text lands in [`Navigator::ghost_match`]. Nothing may be matched after a
/// ghost, so a `Ghost` is always the last step of a pattern: a trailing delimiter, or a
/// terminator that should be skipped but not reported.
///
/// ## Example
/// ```
/// use strand_matcher::{matcher::{CodePoint, Ghost, Literal, Matcher}, seq};
///
/// let key = seq![Literal::from_string("key"), Ghost::new(CodePoint::literal('='))];
/// let nav = key.match_view(&"key=value".into()).unwrap().unwrap();
/// assert_eq!(nav.capture_match(), "key");
/// assert_eq!(nav.whole_match(), "key=");
/// ```
#[derive(Clone, Debug)]
pub struct Ghost(SharedMatcher);

impl Ghost {
    pub fn new(inner: impl IntoMatcher) -> Self {
        Self(inner.into_matcher())
    }
}

impl Matcher for Ghost {
    fn try_match(&self, mut nav: Navigator) -> MatchResult {
        nav.assert_matchable()?;
        let Some(inner) = self.0.try_match(nav.clone())? else {
            return Ok(None);
        };
        // The inner match may itself end in a ghost; all of it becomes ours
        nav.move_to_ghost(inner.nav_index() - nav.nav_index())?;
        Ok(Some(nav))
    }
}
