/*!
Composable matchers.

A [`Matcher`] is an immutable, reusable configuration object with one operation: [`try_match`](Matcher::try_match) a [`Navigator`], returning the advanced navigator on success. Matchers carry no attempt-local state, so one matcher tree can be shared across threads and applied to independent navigators concurrently.

| Kind | Types |
|---|---|
| Position | [`Position`] |
| Code point | [`CodePoint`] |
| Literal string | [`Literal`] (backed by a [`PrefixIndex`]) |
| Sequence / alternation | [`All`], [`Any`] (and the [`seq!`](crate::seq) / [`alt!`](crate::alt) macros) |
| Optional / negation | [`Optional`], [`Not`] |
| Repetition | [`Repeat`] with [`Edge`] overrides for the first/last iteration |
| Lookaround | [`LookAhead`], [`LookBehind`], [`word_boundary()`] |
| Ghost capture | [`Ghost`] |

## Example
Groups of exactly three digits separated by commas, except the first and last groups which allow one to three digits:
```
use strand_matcher::{matcher::{CodePoint, Edge, IntoMatcher, Matcher, Position, Repeat}, seq};

let digit = CodePoint::range('0', '9');
let first = seq![Repeat::between(1, 3, digit.clone()), CodePoint::literal(',')];
let middle = seq![Repeat::exactly(3, digit.clone()), CodePoint::literal(',')];
let last = seq![Repeat::between(1, 3, digit), Position::EndOfSlice];
let number = Repeat::builder()
    .inner(middle.into_matcher())
    .min(1)
    .first(Edge::optional(first))
    .last(Edge::required(last))
    .build();

assert!(number.match_string("1,567,890,3").unwrap());
assert!(number.match_string("123,567,890").unwrap());
assert!(!number.match_string("123,12,").unwrap());
```
*/
use std::{fmt::Debug, sync::Arc};

use crate::{group::GroupPattern, navigator::Navigator, text::TextView, Error};

mod code_point;
mod combinator;
mod ghost;
mod literal;
mod look;
mod position;
pub(crate) mod repeat;

pub use code_point::CodePoint;
pub use combinator::{All, Any, Not, Optional};
pub use ghost::Ghost;
pub use literal::{Literal, LiteralBuilder, PrefixIndex};
pub use look::{word_boundary, LookAhead, LookBehind};
pub use position::Position;
pub use repeat::{Edge, Repeat, RepeatBuilder};

/// `Ok(Some(_))` on a match, `Ok(None)` on an ordinary failure, `Err(_)` on an invariant
/// violation.
pub type MatchResult = Result<Option<Navigator>, Error>;

/// A matcher shared by reference counting.
pub type SharedMatcher = Arc<dyn Matcher>;

pub trait Matcher: Debug + Send + Sync {
    /// Attempts a match at `nav.nav_index()`.
    ///
    /// On an ordinary failure the navigator is dropped; callers that need rollback must
    /// clone beforehand.
    fn try_match(&self, nav: Navigator) -> MatchResult;

    /// In-place form of [`try_match`](Self::try_match). Returns whether it matched; on
    /// failure `nav` is [invalidated](Navigator::invalidate).
    fn apply(&self, nav: &mut Navigator) -> Result<bool, Error> {
        nav.assert_valid()?;
        match self.try_match(nav.clone())? {
            Some(matched) => {
                *nav = matched;
                Ok(true)
            }
            None => {
                nav.invalidate();
                Ok(false)
            }
        }
    }

    /// Matches at the start of `view`.
    fn match_view(&self, view: &TextView) -> MatchResult {
        self.try_match(Navigator::new(view.clone()))
    }

    /// Whether a match (of any length) starts at the beginning of `text`.
    fn is_match(&self, text: &str) -> Result<bool, Error> {
        Ok(self.match_view(&TextView::new(text))?.is_some())
    }

    /// The group pattern behind this matcher, if it is one.
    ///
    /// [`Group::new`](crate::group::Group::new) uses this to keep the child nodes of a
    /// wrapped group pattern.
    fn as_group_pattern(&self) -> Option<&dyn GroupPattern> {
        None
    }

    /// Whether a match covers the whole of `text`.
    fn match_string(&self, text: &str) -> Result<bool, Error> {
        Ok(self
            .match_view(&TextView::new(text))?
            .is_some_and(|nav| nav.is_end_of_slice()))
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    #[inline]
    fn try_match(&self, nav: Navigator) -> MatchResult {
        (**self).try_match(nav)
    }

    fn as_group_pattern(&self) -> Option<&dyn GroupPattern> {
        (**self).as_group_pattern()
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    #[inline]
    fn try_match(&self, nav: Navigator) -> MatchResult {
        (**self).try_match(nav)
    }

    fn as_group_pattern(&self) -> Option<&dyn GroupPattern> {
        (**self).as_group_pattern()
    }
}

/// Conversion into a [`SharedMatcher`], used by every combinator constructor.
pub trait IntoMatcher {
    fn into_matcher(self) -> SharedMatcher;
}

impl<M: Matcher + 'static> IntoMatcher for M {
    #[inline]
    fn into_matcher(self) -> SharedMatcher {
        Arc::new(self)
    }
}

/// Builds an [`All`] from a list of matchers.
///
/// ```
/// use strand_matcher::{matcher::{CodePoint, Matcher}, seq};
///
/// let ab = seq![CodePoint::literal('a'), CodePoint::literal('b')];
/// assert!(ab.match_string("ab").unwrap());
/// ```
#[macro_export]
macro_rules! seq {
    ($($m:expr),* $(,)?) => {
        $crate::matcher::All::new(::std::vec![$($crate::matcher::IntoMatcher::into_matcher($m)),*])
    };
}

/// Builds an [`Any`] from a list of matchers, tried in order.
///
/// ```
/// use strand_matcher::{alt, matcher::{Literal, Matcher}};
///
/// let m = alt![Literal::from_string("sam"), Literal::from_string("samwise")];
/// // Order is the tie-break
/// assert!(!m.match_string("samwise").unwrap());
/// ```
#[macro_export]
macro_rules! alt {
    ($($m:expr),* $(,)?) => {
        $crate::matcher::Any::new(::std::vec![$($crate::matcher::IntoMatcher::into_matcher($m)),*])
    };
}
