use std::sync::Arc;

use itertools::Itertools;

use crate::{matcher::MatchResult, navigator::Navigator};

use super::{Any, CodePoint, IntoMatcher, Matcher, Not, SharedMatcher};

/// Zero-width assertion that the inner matcher matches starting at the current position.
///
/// The inner matcher runs on a fresh navigator at `nav_index`, so a ghost it leaves behind
/// is discarded along with everything else.
#[derive(Clone, Debug)]
pub struct LookAhead(SharedMatcher);

impl LookAhead {
    pub fn new(inner: impl IntoMatcher) -> Self {
        Self(inner.into_matcher())
    }
}

impl Matcher for LookAhead {
    fn try_match(&self, nav: Navigator) -> MatchResult {
        nav.assert_matchable()?;
        Ok(self
            .0
            .try_match(nav.zero_width_at_nav())?
            .map(|_| nav))
    }
}

/// Zero-width assertion on the text ending at the current position.
///
/// Always fails at the start of the slice.
#[derive(Clone, Debug)]
pub struct LookBehind {
    imp: LookBehindI,
}

#[derive(Clone, Debug)]
enum LookBehindI {
    CodePoint(CodePoint),
    /// UTF-16 encoded
    Literal(Arc<[Box<[u16]>]>),
}

impl LookBehind {
    /// The code point before the cursor.
    pub fn code_point(code_point: CodePoint) -> Self {
        Self {
            imp: LookBehindI::CodePoint(code_point),
        }
    }

    /// One of `strings` ends exactly at the cursor.
    pub fn literal(strings: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let strings = strings
            .into_iter()
            .map(|s| s.as_ref().encode_utf16().collect::<Box<[u16]>>())
            .unique()
            .collect();
        Self {
            imp: LookBehindI::Literal(strings),
        }
    }

    fn test(&self, nav: &Navigator) -> bool {
        if nav.is_start_of_slice() {
            return false;
        }
        match &self.imp {
            LookBehindI::CodePoint(m) => nav
                .previous_code_point()
                .is_some_and(|(c, _)| m.test(c)),
            LookBehindI::Literal(strings) => strings
                .iter()
                .any(|s| nav.source().ends_with_at(nav.nav_index(), s)),
        }
    }
}

impl Matcher for LookBehind {
    fn try_match(&self, nav: Navigator) -> MatchResult {
        nav.assert_matchable()?;
        Ok(self.test(&nav).then_some(nav))
    }
}

/// A zero-width boundary between a word code point (`word`) and anything else, including
/// either end of the slice.
///
/// ```
/// use strand_matcher::matcher::{word_boundary, CodePoint, Matcher, Literal};
/// use strand_matcher::seq;
///
/// let word = CodePoint::any_of([
///     CodePoint::range('a', 'z'),
///     CodePoint::range('A', 'Z'),
///     CodePoint::range('0', '9'),
///     CodePoint::literal('_'),
/// ]);
/// let on = seq![Literal::from_string("on"), word_boundary(word)];
/// assert!(on.is_match("on off").unwrap());
/// assert!(!on.is_match("once").unwrap());
/// ```
pub fn word_boundary(word: CodePoint) -> Any {
    crate::alt![
        crate::seq![LookBehind::code_point(word.clone()), Not::new(word.clone())],
        crate::seq![Not::new(LookBehind::code_point(word.clone())), LookAhead::new(word)],
    ]
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_nav,
        matcher::{tests::nav, Ghost, Literal},
        navigator::Navigator,
        seq,
        text::TextView,
    };

    use super::*;

    fn at(s: &str, i: usize) -> Navigator {
        Navigator::at(TextView::new(s), i)
    }

    #[test]
    fn look_ahead() {
        let m = LookAhead::new(Literal::from_string("ab"));
        assert_nav!(m.try_match(nav("abc")), (0, 0, 0));
        assert_nav!(m.try_match(nav("ac")), None);

        // Inner ghosts are discarded
        let m = LookAhead::new(Ghost::new(CodePoint::any()));
        assert_nav!(m.try_match(nav("a")), (0, 0, 0));

        let m = seq![CodePoint::any(), LookAhead::new(CodePoint::literal('!'))];
        assert_nav!(m.try_match(nav("a!")), (0, 1, 1));
        assert_nav!(m.try_match(nav("a?")), None);
    }

    #[test]
    fn look_behind_code_point() {
        let m = LookBehind::code_point(CodePoint::literal('a'));
        assert_nav!(m.try_match(at("ab", 1)), (1, 1, 1));
        assert_nav!(m.try_match(at("ab", 2)), None);
        assert_nav!(m.try_match(at("ab", 0)), None);

        let m = LookBehind::code_point(CodePoint::literal('😀'));
        assert_nav!(m.try_match(at("😀x", 2)), (2, 2, 2));
    }

    #[test]
    fn look_behind_literal() {
        let m = LookBehind::literal(["ab", "b", "ab"]);
        assert_nav!(m.try_match(at("xab", 3)), (3, 3, 3));
        assert_nav!(m.try_match(at("xb", 2)), (2, 2, 2));
        assert_nav!(m.try_match(at("xa", 2)), None);
        // Only the view is visible, not the text before it
        let view = TextView::new("abc").slice(1..3);
        let ab = LookBehind::literal(["ab"]);
        assert_nav!(ab.try_match(Navigator::at(view.clone(), 1)), None);
        assert_nav!(m.try_match(Navigator::at(view, 1)), (1, 1, 1));

        let empty = LookBehind::literal([""]);
        assert_nav!(empty.try_match(at("a", 0)), None);
        assert_nav!(empty.try_match(at("a", 1)), (1, 1, 1));
    }

    #[test]
    fn boundaries() {
        let b = word_boundary(CodePoint::range('a', 'z'));
        assert_nav!(b.try_match(at("ab cd", 0)), (0, 0, 0));
        assert_nav!(b.try_match(at("ab cd", 1)), None);
        assert_nav!(b.try_match(at("ab cd", 2)), (2, 2, 2));
        assert_nav!(b.try_match(at("ab cd", 3)), (3, 3, 3));
        assert_nav!(b.try_match(at("ab cd", 5)), (5, 5, 5));
        assert_nav!(b.try_match(at("  ", 1)), None);
        assert_nav!(b.try_match(at("", 0)), None);
    }
}
