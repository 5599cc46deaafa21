use bon::Builder;

use crate::{
    matcher::{repeat::CountSearch, MatchResult, Matcher},
    navigator::Navigator,
};

use super::{impl_matcher, GroupMatch, GroupPattern, GroupResult, IntoGroupPattern, SharedGroupPattern};

/// A first/last override for [`GroupRepeat`].
#[derive(Clone, Debug)]
pub struct GroupEdge {
    pattern: SharedGroupPattern,
    required: bool,
}

impl GroupEdge {
    pub fn required(pattern: impl IntoGroupPattern) -> Self {
        Self {
            pattern: pattern.into_group_pattern(),
            required: true,
        }
    }

    pub fn optional(pattern: impl IntoGroupPattern) -> Self {
        Self {
            pattern: pattern.into_group_pattern(),
            required: false,
        }
    }

    fn as_search_edge(&self) -> (&(dyn GroupPattern + 'static), bool) {
        (&*self.pattern, self.required)
    }
}

/// [`Repeat`](crate::matcher::Repeat) for group patterns: the same count search, with the
/// nodes of every iteration concatenated in order.
///
/// ## Example
/// ```
/// use strand_matcher::{
///     group::{Group, GroupEdge, GroupRepeat, IntoGroupPattern, Unnamed},
///     group_seq,
///     matcher::{CodePoint, Position, Repeat},
///     seq,
/// };
///
/// let digits = || Repeat::one_or_more(CodePoint::range('0', '9'));
/// let dot = Unnamed::new(CodePoint::literal('.'));
/// let version = GroupRepeat::builder()
///     .inner(group_seq![Group::new("part", digits()), dot].into_group_pattern())
///     .min(1)
///     .max(3)
///     .last(GroupEdge::required(Group::new("part", seq![digits(), Position::EndOfSlice])))
///     .build();
///
/// let (_, parts) = version.match_groups("1.22.3").unwrap().unwrap();
/// assert_eq!(parts.iter().map(|p| p.to_string()).collect::<Vec<_>>(), ["1", "22", "3"]);
/// ```
#[derive(Builder, Clone, Debug)]
pub struct GroupRepeat {
    inner: SharedGroupPattern,
    #[builder(default = 0)]
    min: usize,
    max: Option<usize>,
    first: Option<GroupEdge>,
    last: Option<GroupEdge>,
}

impl GroupRepeat {
    pub fn exactly(n: usize, inner: impl IntoGroupPattern) -> Self {
        Self::between(n, n, inner)
    }

    pub fn zero_or_more(inner: impl IntoGroupPattern) -> Self {
        Self::at_least(0, inner)
    }

    pub fn one_or_more(inner: impl IntoGroupPattern) -> Self {
        Self::at_least(1, inner)
    }

    pub fn at_least(min: usize, inner: impl IntoGroupPattern) -> Self {
        Self::builder()
            .inner(inner.into_group_pattern())
            .min(min)
            .build()
    }

    pub fn between(min: usize, max: usize, inner: impl IntoGroupPattern) -> Self {
        Self::builder()
            .inner(inner.into_group_pattern())
            .min(min)
            .max(max)
            .build()
    }

    /// Matches at the start of `text`, returning the nodes of every iteration.
    pub fn match_groups(&self, text: &str) -> GroupResult {
        self.try_match_groups(Navigator::new(text.into()))
    }
}

impl GroupPattern for GroupRepeat {
    fn try_match_groups(&self, nav: Navigator) -> GroupResult {
        nav.assert_matchable()?;
        let search = CountSearch {
            min: self.min,
            max: self.max,
            inner: &*self.inner,
            first: self.first.as_ref().map(GroupEdge::as_search_edge),
            last: self.last.as_ref().map(GroupEdge::as_search_edge),
        };
        let matched = search.run(nav, |p, nav| p.try_match_groups(nav))?;
        Ok(matched.map(|(nav, iterations)| {
            let nodes: Vec<GroupMatch> = iterations.into_iter().flatten().collect();
            (nav, nodes)
        }))
    }
}

impl_matcher!(GroupRepeat);
