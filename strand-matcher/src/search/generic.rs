use crate::{matcher::Matcher, navigator::Navigator, Error};

use super::Found;

/// Tries `matcher` at every code point from the navigator's start, including the end of the
/// slice.
pub(crate) fn find_at(matcher: &dyn Matcher, mut nav: Navigator) -> Result<Found, Error> {
    nav.assert_fresh()?;
    nav.assert_no_ghost()?;
    let from = nav.start_index();
    loop {
        if let Some(matched) = matcher.try_match(nav.clone())? {
            return Ok(Found {
                fragment: nav.source().slice(from..matched.start_index()),
                matched: Some(matched),
            });
        }
        if nav.is_end_of_slice() {
            return Ok(Found::fragment_only(nav.source(), from));
        }
        nav.move_start_forward_one_code_point()?;
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        matcher::{CodePoint, Position, Repeat},
        text::TextView,
    };

    use super::*;

    #[test]
    fn scan() {
        let digits = Repeat::one_or_more(CodePoint::range('0', '9'));
        let view = TextView::new("ab12c");
        let found = find_at(&digits, Navigator::new(view.clone())).unwrap();
        assert_eq!(found.fragment, "ab");
        assert_eq!(found.matched.unwrap().capture_match(), "12");

        let found = find_at(&digits, Navigator::at(view.clone(), 4)).unwrap();
        assert_eq!(found.fragment, "c");
        assert!(found.matched.is_none());
    }

    #[test]
    fn astral_steps() {
        let found = find_at(&CodePoint::literal('x'), Navigator::new("😀😀x".into())).unwrap();
        assert_eq!(found.fragment, "😀😀");
        assert_eq!(found.matched.unwrap().start_index(), 4);
    }

    #[test]
    fn end_of_slice_is_tried() {
        let found = find_at(&Position::EndOfSlice, Navigator::new("ab".into())).unwrap();
        assert_eq!(found.fragment, "ab");
        assert_eq!(found.matched.unwrap().start_index(), 2);
    }

    #[test]
    fn requires_fresh() {
        let mut nav = Navigator::new("ab".into());
        nav.move_capture_forward(1).unwrap();
        assert_eq!(
            find_at(&CodePoint::any(), nav).unwrap_err(),
            Error::NotFresh {
                start: 0,
                capture: 1
            }
        );
    }
}
