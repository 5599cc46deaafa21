/*!
Bounded repetition with optional first/last overrides.

## Count search
The count of a repetition includes the first and last iterations and must lie in
`[min, max]`. The search is greedy, then retreats:

1. Iteration 0 uses the first edge if there is one. A required first edge that doesn't match
   fails the repetition; an optional one falls back to the inner matcher.
2. The inner matcher is applied repeatedly, each time on a clone, committing every success,
   until it fails or `max` is reached.
3. With a last edge, the last matcher is tried after `k` committed iterations, for `k` from
   `min(count, max - 1)` down to `min - 1`. The first `k` that works wins. The last matcher is
   often only valid at one specific count, e.g. when it asserts the end of the slice, which is
   why the greedy count can't simply be kept. An optional last edge only wins if it ends no
   earlier than the greedy match; otherwise the greedy result stands.

Backtracking is scoped to this one count range: an inner matcher is never asked for a
different (shorter) match of the same iteration.

An iteration that matches without advancing ends the greedy phase, and the count is padded up
to `min` with that zero-width iteration, so an unbounded repetition of a matcher that can
match the empty string still terminates.
*/
use bon::Builder;

use crate::{matcher::MatchResult, navigator::Navigator, Error};

use super::{IntoMatcher, Matcher, SharedMatcher};

/// A first/last override for [`Repeat`].
#[derive(Clone, Debug)]
pub struct Edge {
    matcher: SharedMatcher,
    required: bool,
}

impl Edge {
    /// The edge iteration must use this matcher.
    pub fn required(matcher: impl IntoMatcher) -> Self {
        Self {
            matcher: matcher.into_matcher(),
            required: true,
        }
    }

    /// The edge iteration uses this matcher if it can.
    pub fn optional(matcher: impl IntoMatcher) -> Self {
        Self {
            matcher: matcher.into_matcher(),
            required: false,
        }
    }

    pub fn matcher(&self) -> &SharedMatcher {
        &self.matcher
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    fn as_search_edge(&self) -> (&(dyn Matcher + 'static), bool) {
        (&*self.matcher, self.required)
    }
}

/// Repeats a matcher between `min` and `max` times.
///
/// See the [module docs](self) for how the count is chosen when `first` or `last` is set.
///
/// ## Example
/// ```
/// use strand_matcher::matcher::{CodePoint, Matcher, Repeat};
///
/// let digits = Repeat::between(2, 4, CodePoint::range('0', '9'));
/// assert!(digits.match_string("123").unwrap());
/// assert!(!digits.match_string("1").unwrap());
/// // Greedy, but never more than `max`
/// assert!(!digits.match_string("12345").unwrap());
/// ```
#[derive(Builder, Clone, Debug)]
pub struct Repeat {
    inner: SharedMatcher,
    #[builder(default = 0)]
    min: usize,
    /// Unbounded if unset.
    max: Option<usize>,
    /// Override for the first iteration.
    first: Option<Edge>,
    /// Override for the last iteration.
    last: Option<Edge>,
}

impl Repeat {
    pub fn exactly(n: usize, inner: impl IntoMatcher) -> Self {
        Self::between(n, n, inner)
    }

    pub fn zero_or_more(inner: impl IntoMatcher) -> Self {
        Self::at_least(0, inner)
    }

    pub fn one_or_more(inner: impl IntoMatcher) -> Self {
        Self::at_least(1, inner)
    }

    pub fn at_least(min: usize, inner: impl IntoMatcher) -> Self {
        Self::builder().inner(inner.into_matcher()).min(min).build()
    }

    pub fn between(min: usize, max: usize, inner: impl IntoMatcher) -> Self {
        Self::builder()
            .inner(inner.into_matcher())
            .min(min)
            .max(max)
            .build()
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Like [`try_match`](Matcher::try_match), but also returns the chosen count.
    pub fn try_match_count(&self, nav: Navigator) -> Result<Option<(Navigator, usize)>, Error> {
        nav.assert_matchable()?;
        let search = CountSearch {
            min: self.min,
            max: self.max,
            inner: &*self.inner,
            first: self.first.as_ref().map(Edge::as_search_edge),
            last: self.last.as_ref().map(Edge::as_search_edge),
        };
        Ok(search
            .run(nav, |m, nav| Ok(m.try_match(nav)?.map(|nav| (nav, ()))))?
            .map(|(nav, iterations)| (nav, iterations.len())))
    }
}

impl Matcher for Repeat {
    fn try_match(&self, nav: Navigator) -> MatchResult {
        Ok(self.try_match_count(nav)?.map(|(nav, _)| nav))
    }
}

/// The outcome of one iteration: the advanced navigator and what the iteration produced.
pub(crate) type StepResult<T> = Result<Option<(Navigator, T)>, Error>;

/// The count search shared by [`Repeat`] and [`GroupRepeat`](crate::group::GroupRepeat).
///
/// `S` is the pattern type and the step closure applies one to a navigator. Edges are
/// `(pattern, required)`.
pub(crate) struct CountSearch<'a, S: ?Sized> {
    pub min: usize,
    pub max: Option<usize>,
    pub inner: &'a S,
    pub first: Option<(&'a S, bool)>,
    pub last: Option<(&'a S, bool)>,
}

impl<S: ?Sized> CountSearch<'_, S> {
    fn at_max(&self, count: usize) -> bool {
        self.max.is_some_and(|max| count >= max)
    }

    /// Returns the final navigator and the output of every iteration, in order.
    pub fn run<T: Clone>(
        &self,
        nav: Navigator,
        step: impl Fn(&S, Navigator) -> StepResult<T>,
    ) -> StepResult<Vec<T>> {
        let min = self.min;
        let empty = |origin: Navigator| (min == 0).then(|| (origin, Vec::new()));

        // navs[k] is the navigator after k iterations
        let mut navs = vec![nav];
        let mut outs: Vec<T> = Vec::new();

        while !self.at_max(outs.len()) {
            let current = navs[outs.len()].clone();
            let before = current.nav_index();

            let mut result = None;
            if outs.is_empty() {
                if let Some((first, required)) = self.first {
                    result = step(first, current.clone())?;
                    if result.is_none() && required {
                        return Ok(empty(navs.swap_remove(0)));
                    }
                }
            }
            if result.is_none() {
                result = step(self.inner, current)?;
            }
            let Some((next, out)) = result else {
                break;
            };

            let advanced = next.nav_index() > before;
            navs.push(next);
            outs.push(out);
            if !advanced {
                while outs.len() < min && !self.at_max(outs.len()) {
                    let (nav, out) = (navs[outs.len()].clone(), outs[outs.len() - 1].clone());
                    navs.push(nav);
                    outs.push(out);
                }
                break;
            }
        }
        let count = outs.len();

        let Some((last, required)) = self.last else {
            if count < min {
                return Ok(None);
            }
            return Ok(navs.pop().map(|nav| (nav, outs)));
        };

        // One slot is reserved for the last iteration
        let upper = match self.max {
            Some(0) => None,
            Some(max) => Some(count.min(max - 1)),
            None => Some(count),
        };
        let mut lower = min.saturating_sub(1);
        if self.first.is_some_and(|(_, required)| required) {
            lower = lower.max(1);
        }
        // An optional last edge may not shorten a valid greedy match
        let floor = (!required && count >= min).then(|| navs[count].nav_index());
        if let Some(upper) = upper {
            for k in (lower..=upper).rev() {
                if let Some((nav, out)) = step(last, navs[k].clone())? {
                    if floor.is_some_and(|floor| nav.nav_index() < floor) {
                        continue;
                    }
                    outs.truncate(k);
                    outs.push(out);
                    return Ok(Some((nav, outs)));
                }
            }
        }

        if required {
            return Ok(empty(navs.swap_remove(0)));
        }
        if count < min {
            return Ok(None);
        }
        Ok(navs.pop().map(|nav| (nav, outs)))
    }
}
