use crate::{matcher::MatchResult, navigator::Navigator};

use super::{IntoMatcher, Matcher, SharedMatcher};

/// Sequence: every sub-matcher in order.
///
/// The navigator is moved through the chain and dropped at the first failure, so a failed
/// `All` cannot be resumed. With no sub-matchers it succeeds with a zero-width match.
#[derive(Clone, Debug, Default)]
pub struct All {
    matchers: Vec<SharedMatcher>,
}

impl All {
    pub fn new(matchers: Vec<SharedMatcher>) -> Self {
        Self { matchers }
    }

    pub fn matchers(&self) -> &[SharedMatcher] {
        &self.matchers
    }
}

impl Matcher for All {
    fn try_match(&self, mut nav: Navigator) -> MatchResult {
        nav.assert_matchable()?;
        for m in &self.matchers {
            match m.try_match(nav)? {
                Some(next) => nav = next,
                None => return Ok(None),
            }
        }
        Ok(Some(nav))
    }
}

/// Ordered alternation: the first sub-matcher that matches wins.
///
/// Each branch runs on its own clone of the navigator. Declaration order is the tie-break,
/// so put longer alternatives first if they share a prefix.
#[derive(Clone, Debug, Default)]
pub struct Any {
    matchers: Vec<SharedMatcher>,
}

impl Any {
    pub fn new(matchers: Vec<SharedMatcher>) -> Self {
        Self { matchers }
    }

    pub fn matchers(&self) -> &[SharedMatcher] {
        &self.matchers
    }
}

impl Matcher for Any {
    fn try_match(&self, nav: Navigator) -> MatchResult {
        nav.assert_matchable()?;
        for m in &self.matchers {
            if let Some(matched) = m.try_match(nav.clone())? {
                return Ok(Some(matched));
            }
        }
        Ok(None)
    }
}

/// Never fails: returns the advanced navigator, or the original one unchanged.
#[derive(Clone, Debug)]
pub struct Optional(SharedMatcher);

impl Optional {
    pub fn new(inner: impl IntoMatcher) -> Self {
        Self(inner.into_matcher())
    }
}

impl Matcher for Optional {
    fn try_match(&self, nav: Navigator) -> MatchResult {
        nav.assert_matchable()?;
        Ok(Some(self.0.try_match(nav.clone())?.unwrap_or(nav)))
    }
}

/// Zero-width negation: matches at the current position iff the inner matcher doesn't.
#[derive(Clone, Debug)]
pub struct Not(SharedMatcher);

impl Not {
    pub fn new(inner: impl IntoMatcher) -> Self {
        Self(inner.into_matcher())
    }
}

impl Matcher for Not {
    fn try_match(&self, nav: Navigator) -> MatchResult {
        nav.assert_matchable()?;
        Ok(match self.0.try_match(nav.clone())? {
            Some(_) => None,
            None => Some(nav),
        })
    }
}
