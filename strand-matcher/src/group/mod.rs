/*!
Named captures as trees.

A [`Group`] wraps a matcher (or another group pattern) and records a [`GroupMatch`] node
when it matches. Group patterns compose like matchers ([`GroupSeq`], [`GroupAny`],
[`GroupOptional`], [`GroupRepeat`]), and every composition hands back its children in match
order, so the resulting tree mirrors the nesting of the pattern.

Every group pattern is also a [`Matcher`] that drops the nodes. Wrapped in [`Group::new`],
a group pattern keeps them as the node's children.

## Example
```
use strand_matcher::{
    group::{Group, GroupOptional, Unnamed},
    group_seq,
    matcher::{CodePoint, Ghost, Repeat},
};

let word = || Repeat::one_or_more(CodePoint::range('a', 'z'));
let entry = Group::nested(
    "entry",
    group_seq![
        Group::new("key", word()),
        Unnamed::new(CodePoint::literal('=')),
        Group::new("value", word()),
        GroupOptional::new(Group::new("end", Ghost::new(CodePoint::literal(';')))),
    ],
);

let m = entry.captures("name=strand;").unwrap().unwrap();
assert_eq!(m.get("key").unwrap().content(), "name");
assert_eq!(m.get("value").unwrap().content(), "strand");
assert_eq!(m.content(), "name=strand");
assert_eq!(m.whole(), "name=strand;");
```
*/
use std::{fmt, sync::Arc};

use crate::{
    matcher::{IntoMatcher, MatchResult, Matcher, SharedMatcher},
    navigator::Navigator,
    text::TextView,
    Error,
};

mod repeat;
mod splitter;

pub use repeat::{GroupEdge, GroupRepeat, GroupRepeatBuilder};
pub use splitter::{Splitter, SplitterBuilder};

/// A node of the capture tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupMatch {
    name: Arc<str>,
    whole: TextView,
    content: TextView,
    children: Vec<GroupMatch>,
}

impl GroupMatch {
    pub(crate) fn new(
        name: Arc<str>,
        whole: TextView,
        content: TextView,
        children: Vec<GroupMatch>,
    ) -> Self {
        Self {
            name,
            whole,
            content,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The matched span including a trailing ghost, e.g. a delimiter.
    pub fn whole(&self) -> &TextView {
        &self.whole
    }

    /// The matched span without the trailing ghost.
    pub fn content(&self) -> &TextView {
        &self.content
    }

    pub fn children(&self) -> &[GroupMatch] {
        &self.children
    }

    /// The first direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&GroupMatch> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// All direct children named `name`, in match order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a GroupMatch> {
        self.children.iter().filter(move |c| c.name() == name)
    }

    /// Follows a dot-separated path of child names, e.g. `"entry.key"`.
    pub fn get(&self, path: &str) -> Option<&GroupMatch> {
        path.split('.')
            .try_fold(self, |node, name| node.child(name))
    }

    /// Every node below this one, depth-first in match order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

impl fmt::Display for GroupMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.content, f)
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a GroupMatch>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a GroupMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// `Ok(Some((nav, nodes)))` on a match, with the nodes produced in match order.
pub type GroupResult = Result<Option<(Navigator, Vec<GroupMatch>)>, Error>;

/// A group pattern shared by reference counting.
pub type SharedGroupPattern = Arc<dyn GroupPattern>;

/// A matcher that also produces capture nodes.
pub trait GroupPattern: fmt::Debug + Send + Sync {
    fn try_match_groups(&self, nav: Navigator) -> GroupResult;
}

impl<G: GroupPattern + ?Sized> GroupPattern for Arc<G> {
    #[inline]
    fn try_match_groups(&self, nav: Navigator) -> GroupResult {
        (**self).try_match_groups(nav)
    }
}

impl<G: GroupPattern + ?Sized> GroupPattern for Box<G> {
    #[inline]
    fn try_match_groups(&self, nav: Navigator) -> GroupResult {
        (**self).try_match_groups(nav)
    }
}

pub trait IntoGroupPattern {
    fn into_group_pattern(self) -> SharedGroupPattern;
}

impl<G: GroupPattern + 'static> IntoGroupPattern for G {
    #[inline]
    fn into_group_pattern(self) -> SharedGroupPattern {
        Arc::new(self)
    }
}

/// Group patterns are matchers that drop their nodes.
macro_rules! impl_matcher {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Matcher for $ty {
                fn try_match(&self, nav: Navigator) -> MatchResult {
                    Ok(self.try_match_groups(nav)?.map(|(nav, _)| nav))
                }

                fn as_group_pattern(&self) -> Option<&dyn GroupPattern> {
                    Some(self)
                }
            }
        )*
    };
}
pub(crate) use impl_matcher;

impl_matcher!(Group, Unnamed, GroupSeq, GroupAny, GroupOptional);

/// A named capture.
#[derive(Clone, Debug)]
pub struct Group {
    name: Arc<str>,
    imp: GroupI,
}

#[derive(Clone, Debug)]
enum GroupI {
    Matcher(SharedMatcher),
    Nested(SharedGroupPattern),
}

impl Group {
    /// A group around a matcher. The node has no children unless `matcher` is itself a
    /// group pattern, whose nodes then become the children, as with [`nested`](Self::nested).
    pub fn new(name: &str, matcher: impl IntoMatcher) -> Self {
        Self {
            name: name.into(),
            imp: GroupI::Matcher(matcher.into_matcher()),
        }
    }

    /// A group whose node has the nodes of `pattern` as children.
    pub fn nested(name: &str, pattern: impl IntoGroupPattern) -> Self {
        Self {
            name: name.into(),
            imp: GroupI::Nested(pattern.into_group_pattern()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Matches at the start of `view` and returns this group's node.
    pub fn captures_view(&self, view: &TextView) -> Result<Option<GroupMatch>, Error> {
        Ok(self
            .try_match_groups(Navigator::new(view.clone()))?
            .and_then(|(_, nodes)| nodes.into_iter().next()))
    }

    /// Matches at the start of `text` and returns this group's node.
    pub fn captures(&self, text: &str) -> Result<Option<GroupMatch>, Error> {
        self.captures_view(&TextView::new(text))
    }

    /// Runs the wrapped pattern and builds the node, also returning the navigator.
    pub(crate) fn match_node(&self, nav: Navigator) -> Result<Option<(Navigator, GroupMatch)>, Error> {
        nav.assert_matchable()?;
        let entry = nav.nav_index();
        let matched = match &self.imp {
            GroupI::Matcher(m) => match m.as_group_pattern() {
                Some(p) => p.try_match_groups(nav)?,
                None => m.try_match(nav)?.map(|nav| (nav, Vec::new())),
            },
            GroupI::Nested(p) => p.try_match_groups(nav)?,
        };
        Ok(matched.map(|(nav, children)| {
            let source = nav.source();
            let node = GroupMatch::new(
                self.name.clone(),
                source.slice(entry..nav.nav_index()),
                source.slice(entry..nav.capture_index()),
                children,
            );
            (nav, node)
        }))
    }
}

impl GroupPattern for Group {
    fn try_match_groups(&self, nav: Navigator) -> GroupResult {
        Ok(self.match_node(nav)?.map(|(nav, node)| (nav, vec![node])))
    }
}

/// A plain matcher inside a group composition. Records no node.
#[derive(Clone, Debug)]
pub struct Unnamed(SharedMatcher);

impl Unnamed {
    pub fn new(matcher: impl IntoMatcher) -> Self {
        Self(matcher.into_matcher())
    }
}

impl GroupPattern for Unnamed {
    fn try_match_groups(&self, nav: Navigator) -> GroupResult {
        Ok(self.0.try_match(nav)?.map(|nav| (nav, Vec::new())))
    }
}

/// Group patterns in sequence; their nodes are concatenated.
#[derive(Clone, Debug, Default)]
pub struct GroupSeq {
    patterns: Vec<SharedGroupPattern>,
}

impl GroupSeq {
    pub fn new(patterns: Vec<SharedGroupPattern>) -> Self {
        Self { patterns }
    }
}

impl GroupPattern for GroupSeq {
    fn try_match_groups(&self, mut nav: Navigator) -> GroupResult {
        nav.assert_matchable()?;
        let mut nodes = Vec::new();
        for p in &self.patterns {
            match p.try_match_groups(nav)? {
                Some((next, children)) => {
                    nav = next;
                    nodes.extend(children);
                }
                None => return Ok(None),
            }
        }
        Ok(Some((nav, nodes)))
    }
}

/// Ordered alternation of group patterns.
#[derive(Clone, Debug, Default)]
pub struct GroupAny {
    patterns: Vec<SharedGroupPattern>,
}

impl GroupAny {
    pub fn new(patterns: Vec<SharedGroupPattern>) -> Self {
        Self { patterns }
    }
}

impl GroupPattern for GroupAny {
    fn try_match_groups(&self, nav: Navigator) -> GroupResult {
        nav.assert_matchable()?;
        for p in &self.patterns {
            if let Some(matched) = p.try_match_groups(nav.clone())? {
                return Ok(Some(matched));
            }
        }
        Ok(None)
    }
}

/// Never fails; produces no nodes when the inner pattern doesn't match.
#[derive(Clone, Debug)]
pub struct GroupOptional(SharedGroupPattern);

impl GroupOptional {
    pub fn new(pattern: impl IntoGroupPattern) -> Self {
        Self(pattern.into_group_pattern())
    }
}

impl GroupPattern for GroupOptional {
    fn try_match_groups(&self, nav: Navigator) -> GroupResult {
        nav.assert_matchable()?;
        Ok(Some(
            self.0
                .try_match_groups(nav.clone())?
                .unwrap_or((nav, Vec::new())),
        ))
    }
}

/// Builds a [`GroupSeq`] from a list of group patterns.
#[macro_export]
macro_rules! group_seq {
    ($($p:expr),* $(,)?) => {
        $crate::group::GroupSeq::new(::std::vec![$($crate::group::IntoGroupPattern::into_group_pattern($p)),*])
    };
}

/// Builds a [`GroupAny`] from a list of group patterns, tried in order.
#[macro_export]
macro_rules! group_alt {
    ($($p:expr),* $(,)?) => {
        $crate::group::GroupAny::new(::std::vec![$($crate::group::IntoGroupPattern::into_group_pattern($p)),*])
    };
}
