use std::sync::Arc;

use itertools::Itertools;

#[cfg(feature = "unicode")]
use crate::{
    text::category::{CategorySet, GeneralCategory},
    BuildError,
};
use crate::{matcher::MatchResult, navigator::Navigator};

use super::Matcher;

/// Matches exactly one code point (one or two code units).
///
/// `CodePoint`s compose with [`any_of`](Self::any_of) and [`not`](Self::not) into a single
/// code point matcher, which is also what [`LookBehind::code_point`](super::LookBehind::code_point)
/// takes.
///
/// ## Example
/// ```
/// use strand_matcher::matcher::{CodePoint, Matcher};
///
/// let hex = CodePoint::any_of([
///     CodePoint::range('0', '9'),
///     CodePoint::range('a', 'f'),
///     CodePoint::one_of("ABCDEF".chars()),
/// ]);
/// assert!(hex.match_string("c").unwrap());
/// assert!(!hex.match_string("g").unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct CodePoint {
    imp: CodePointI,
}

#[derive(Clone, Debug)]
enum CodePointI {
    Any,
    Literal(char),
    /// Sorted and deduplicated.
    Set(Arc<[char]>),
    Range(char, char),
    #[cfg(feature = "unicode")]
    Category(Arc<CategorySet>),
    AnyOf(Arc<[CodePoint]>),
    Not(Box<CodePoint>),
}

impl CodePoint {
    /// Any code point.
    pub fn any() -> Self {
        Self {
            imp: CodePointI::Any,
        }
    }

    pub fn literal(c: char) -> Self {
        Self {
            imp: CodePointI::Literal(c),
        }
    }

    pub fn one_of(chars: impl IntoIterator<Item = char>) -> Self {
        let set: Vec<char> = chars.into_iter().sorted_unstable().dedup().collect();
        Self {
            imp: CodePointI::Set(set.into()),
        }
    }

    pub fn none_of(chars: impl IntoIterator<Item = char>) -> Self {
        Self::one_of(chars).not()
    }

    /// Inclusive range.
    pub fn range(start: char, end: char) -> Self {
        Self {
            imp: CodePointI::Range(start, end),
        }
    }

    /// Unicode general category membership, e.g. letters or decimal digits.
    ///
    /// ```
    /// use strand_matcher::{matcher::{CodePoint, Matcher}, text::category::GeneralCategory};
    ///
    /// let digit = CodePoint::category([GeneralCategory::DecimalNumber]).unwrap();
    /// assert!(digit.match_string("٣").unwrap());
    /// ```
    #[cfg(feature = "unicode")]
    pub fn category(
        categories: impl IntoIterator<Item = GeneralCategory>,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            imp: CodePointI::Category(Arc::new(CategorySet::new(categories)?)),
        })
    }

    /// Matches if any member matches.
    pub fn any_of(members: impl IntoIterator<Item = CodePoint>) -> Self {
        Self {
            imp: CodePointI::AnyOf(members.into_iter().collect()),
        }
    }

    /// Matches any code point this one doesn't. Still consumes one code point.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        match self.imp {
            CodePointI::Not(inner) => *inner,
            imp => Self {
                imp: CodePointI::Not(Box::new(Self { imp })),
            },
        }
    }

    pub fn test(&self, c: char) -> bool {
        match &self.imp {
            CodePointI::Any => true,
            CodePointI::Literal(l) => *l == c,
            CodePointI::Set(set) => set.binary_search(&c).is_ok(),
            CodePointI::Range(start, end) => (*start..=*end).contains(&c),
            #[cfg(feature = "unicode")]
            CodePointI::Category(set) => set.contains(c),
            CodePointI::AnyOf(members) => members.iter().any(|m| m.test(c)),
            CodePointI::Not(inner) => !inner.test(c),
        }
    }
}

impl Matcher for CodePoint {
    fn try_match(&self, mut nav: Navigator) -> MatchResult {
        nav.assert_matchable()?;
        match nav.current_code_point() {
            Some(c) if self.test(c) => {
                nav.move_capture_forward_one_code_point()?;
                Ok(Some(nav))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_nav, matcher::tests::nav, text::TextView};

    use super::*;

    #[test]
    fn literal() {
        let a = CodePoint::literal('a');
        assert_nav!(a.try_match(nav("ab")), (0, 1, 1));
        assert_nav!(a.try_match(nav("ba")), None);
        assert_nav!(a.try_match(nav("")), None);
    }

    #[test]
    fn astral() {
        let m = CodePoint::literal('😀');
        assert_nav!(m.try_match(nav("😀!")), (0, 2, 2));
        assert_nav!(CodePoint::any().try_match(nav("😀")), (0, 2, 2));
        assert_nav!(CodePoint::literal('a').not().try_match(nav("😀")), (0, 2, 2));
    }

    #[test]
    fn sets() {
        let m = CodePoint::one_of("cab".chars());
        assert!(m.test('a') && m.test('b') && m.test('c'));
        assert!(!m.test('d'));

        let m = CodePoint::none_of([',', ';']);
        assert!(m.test('a'));
        assert!(!m.test(','));
        assert_nav!(m.try_match(nav("")), None);

        let m = CodePoint::range('0', '9');
        assert!(m.test('0') && m.test('9'));
        assert!(!m.test('a'));
    }

    #[test]
    fn composition() {
        let m = CodePoint::any_of([CodePoint::range('a', 'z'), CodePoint::literal('_')]);
        assert!(m.test('_'));
        assert!(m.test('q'));
        assert!(!m.test('Q'));
        let not = m.clone().not();
        assert!(not.test('Q'));
        assert!(!not.test('_'));
        // Double negation unwraps
        assert!(not.not().test('_'));
        assert!(!CodePoint::any_of([]).test('a'));
    }

    #[cfg(feature = "unicode")]
    #[test]
    fn category() {
        let m = CodePoint::category([GeneralCategory::Letter]).unwrap();
        assert_nav!(m.try_match(nav("ж1")), (0, 1, 1));
        assert_nav!(m.try_match(nav("1ж")), None);
        // MATHEMATICAL BOLD CAPITAL A is an astral letter
        assert_nav!(m.try_match(nav("𝐀")), (0, 2, 2));
    }

    #[test]
    fn ghost_rejected() {
        let mut n = Navigator::new(TextView::new("ab"));
        n.move_to_ghost(1).unwrap();
        assert!(CodePoint::any().try_match(n).is_err());
    }
}
