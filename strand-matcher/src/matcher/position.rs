use crate::{matcher::MatchResult, navigator::Navigator};

use super::Matcher;

/// Zero-width position assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// `nav_index == 0`
    StartOfSlice,
    /// `nav_index == source.len()`
    EndOfSlice,
    NotStartOfSlice,
    NotEndOfSlice,
}

impl Position {
    #[inline]
    pub fn test(self, nav: &Navigator) -> bool {
        match self {
            Position::StartOfSlice => nav.is_start_of_slice(),
            Position::EndOfSlice => nav.is_end_of_slice(),
            Position::NotStartOfSlice => !nav.is_start_of_slice(),
            Position::NotEndOfSlice => !nav.is_end_of_slice(),
        }
    }
}

impl Matcher for Position {
    fn try_match(&self, nav: Navigator) -> MatchResult {
        nav.assert_matchable()?;
        Ok(self.test(&nav).then_some(nav))
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_nav, matcher::tests::nav, text::TextView};

    use super::*;

    #[test]
    fn positions() {
        assert_nav!(Position::StartOfSlice.try_match(nav("ab")), (0, 0, 0));
        assert_nav!(Position::EndOfSlice.try_match(nav("ab")), None);
        assert_nav!(Position::NotStartOfSlice.try_match(nav("ab")), None);
        assert_nav!(Position::NotEndOfSlice.try_match(nav("ab")), (0, 0, 0));

        let end = Navigator::at(TextView::new("ab"), 2);
        assert_nav!(Position::EndOfSlice.try_match(end.clone()), (2, 2, 2));
        assert_nav!(Position::NotStartOfSlice.try_match(end.clone()), (2, 2, 2));
        assert_nav!(Position::NotEndOfSlice.try_match(end), None);

        // Empty text is both
        assert_nav!(Position::StartOfSlice.try_match(nav("")), (0, 0, 0));
        assert_nav!(Position::EndOfSlice.try_match(nav("")), (0, 0, 0));
    }

    #[test]
    fn slice_relative() {
        let view = TextView::new("xxab").slice(2..4);
        assert_nav!(Position::StartOfSlice.try_match(Navigator::new(view)), (0, 0, 0));
    }
}
