/*!
Whole-text search: find the next match, or split a text into a stream of match and fragment
tokens.

A [`Finder`] is either matcher-driven (tries the matcher at every code point) or a
literal-set search driven by a [`PrefixIndex`](crate::matcher::PrefixIndex), which only
looks at the candidates sharing the first code point at each position. With the
`perf-literal` feature, literal sets are additionally prefiltered with
[`aho-corasick`](aho_corasick) so positions without any candidate are skipped in bulk.

## Example
```
use strand_matcher::{matcher::{CodePoint, Repeat}, search::{Finder, TokenKind}, text::TextView};

let numbers = Finder::matcher("number", Repeat::one_or_more(CodePoint::range('0', '9')));
let tokens = numbers.find_all(&TextView::new("a1b22")).unwrap();
assert_eq!(
    tokens.iter().map(|t| (t.kind, t.value.to_string())).collect::<Vec<_>>(),
    [
        (TokenKind::Fragment, "a".into()),
        (TokenKind::Match, "1".into()),
        (TokenKind::Fragment, "b".into()),
        (TokenKind::Match, "22".into()),
    ]
);
```
*/
use std::sync::Arc;

use bon::bon;

use crate::{
    matcher::{IntoMatcher, PrefixIndex, SharedMatcher},
    navigator::Navigator,
    text::TextView,
    BuildError, Error,
};

mod generic;
mod literal;

use literal::{Cache, LiteralSearch};

/// The outcome of one search.
#[derive(Clone, Debug)]
pub struct Found {
    /// The skipped text between the search start and the match, or to the end of the view
    /// if there was no match.
    pub fragment: TextView,
    pub matched: Option<Navigator>,
}

impl Found {
    fn fragment_only(view: &TextView, from: usize) -> Self {
        Self {
            fragment: view.slice(from..view.len()),
            matched: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A matched span: the capture of a match.
    Match,
    /// Unmatched text between matches.
    Fragment,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The [`Finder`] category.
    pub category: Arc<str>,
    pub kind: TokenKind,
    pub value: TextView,
}

/// Finds matches of a matcher or a literal set.
#[derive(Clone, Debug)]
pub struct Finder {
    category: Arc<str>,
    imp: FinderI,
}

#[derive(Clone, Debug)]
enum FinderI {
    Matcher(SharedMatcher),
    Literal(LiteralSearch),
}

#[bon]
impl Finder {
    /// Matcher-driven search.
    pub fn matcher(category: &str, matcher: impl IntoMatcher) -> Self {
        Self {
            category: category.into(),
            imp: FinderI::Matcher(matcher.into_matcher()),
        }
    }

    /// Literal-set search. Prefers the longest literal at the leftmost position.
    pub fn literals(category: &str, strings: &[&str]) -> Result<Self, BuildError> {
        Self::with_literals(category, strings).call()
    }

    /// [`literals`](Self::literals) with options.
    ///
    /// ```
    /// use strand_matcher::search::Finder;
    ///
    /// let keywords = Finder::with_literals("keyword", &["if", "else"])
    ///     .case_insensitive(true)
    ///     .call()
    ///     .unwrap();
    /// let found = keywords.find(&"x IF y".into(), 0).unwrap();
    /// assert_eq!(found.matched.unwrap().capture_match(), "IF");
    /// ```
    #[builder]
    pub fn with_literals(
        #[builder(start_fn)] category: &str,
        #[builder(start_fn)] strings: &[&str],
        #[builder(default = false)] case_insensitive: bool,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            category: category.into(),
            imp: FinderI::Literal(LiteralSearch::new(PrefixIndex::new(
                strings,
                case_insensitive,
            ))?),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The prefix index of a literal-set finder.
    pub fn prefix_index(&self) -> Option<&PrefixIndex> {
        match &self.imp {
            FinderI::Matcher(_) => None,
            FinderI::Literal(search) => Some(search.index()),
        }
    }

    /// Searches `view` from `start`.
    ///
    /// ## Panics
    /// If `start > view.len()`.
    pub fn find(&self, view: &TextView, start: usize) -> Result<Found, Error> {
        self.find_at(Navigator::at(view.clone(), start))
    }

    /// Searches from the navigator's start, which must be [fresh](Navigator::is_fresh).
    pub fn find_at(&self, nav: Navigator) -> Result<Found, Error> {
        self.find_with(nav, &mut Cache::default())
    }

    fn find_with(&self, nav: Navigator, cache: &mut Cache) -> Result<Found, Error> {
        match &self.imp {
            FinderI::Matcher(m) => generic::find_at(&**m, nav),
            FinderI::Literal(search) => search.find_at(nav, cache),
        }
    }

    /// Every match in `view`, with the fragments between them. See [`find_iter`](Self::find_iter).
    pub fn find_all(&self, view: &TextView) -> Result<Vec<Token>, Error> {
        self.find_iter(view).collect()
    }

    /// Iterates over the match and fragment tokens of `view`, in order.
    ///
    /// Concatenating the token values gives back `view`. Each search starts at the end of
    /// the previous capture, so a trailing ghost is only looked at, not consumed. A match
    /// with an empty capture would never advance and is reported as
    /// [`Error::ZeroWidthMatch`], which ends the iteration.
    pub fn find_iter(&self, view: &TextView) -> FindIter<'_> {
        FindIter {
            finder: self,
            view: view.clone(),
            pos: 0,
            pending: None,
            done: false,
            cache: Cache::default(),
        }
    }

    fn token(&self, kind: TokenKind, value: TextView) -> Token {
        Token {
            category: self.category.clone(),
            kind,
            value,
        }
    }
}

pub struct FindIter<'f> {
    finder: &'f Finder,
    view: TextView,
    pos: usize,
    /// A match found together with a non-empty fragment before it.
    pending: Option<Token>,
    done: bool,
    cache: Cache,
}

impl Iterator for FindIter<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(Ok(token));
        }
        if self.done || self.pos >= self.view.len() {
            self.done = true;
            return None;
        }

        let found = match self
            .finder
            .find_with(Navigator::at(self.view.clone(), self.pos), &mut self.cache)
        {
            Ok(found) => found,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };
        let Some(matched) = found.matched else {
            self.done = true;
            return (!found.fragment.is_empty())
                .then(|| Ok(self.finder.token(TokenKind::Fragment, found.fragment)));
        };
        if matched.is_empty_match() {
            self.done = true;
            return Some(Err(Error::ZeroWidthMatch {
                at: matched.start_index(),
            }));
        }

        self.pos = matched.capture_index();
        let token = self.finder.token(TokenKind::Match, matched.capture_match());
        if found.fragment.is_empty() {
            Some(Ok(token))
        } else {
            self.pending = Some(token);
            Some(Ok(self.finder.token(TokenKind::Fragment, found.fragment)))
        }
    }
}
