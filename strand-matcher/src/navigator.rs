/*!
The mutable per-attempt cursor that every matcher reads and advances.

A [`Navigator`] tracks three indices over its [`TextView`]:

```text
start_index <= capture_index <= nav_index
|-- capture_match --|-- ghost_match --|
```

- `capture_match` is the finalized, visible match so far.
- `ghost_match` is content consumed but excluded from the visible match (e.g. a trailing
  delimiter). It may only exist as the last step of a match: matching further would be
  ambiguous about which index to resume from, so it's an [`Error::MatchAfterGhost`].

## Ownership
Matchers take navigators by value and hand back the advanced one on success. A combinator
that needs rollback (optional, alternation, repetition) clones first and only commits a
successful branch; one that commits eagerly (sequence) just moves the navigator along and
drops it on failure. [`Matcher::apply`](crate::matcher::Matcher::apply) is the in-place form
for callers that hold a `&mut Navigator`: on failure it [invalidates](Navigator::invalidate)
the navigator, and any further operation on it reports [`Error::Invalidated`].
*/
use crate::{text::TextView, Error};

#[derive(Clone, Debug)]
pub struct Navigator {
    source: TextView,
    start: usize,
    capture: usize,
    nav: usize,
    invalid: bool,
}

impl Navigator {
    /// A fresh navigator at the start of `source`.
    pub fn new(source: TextView) -> Self {
        Self::at(source, 0)
    }

    /// A fresh, zero-width navigator at `offset`: all three indices equal `offset`.
    ///
    /// ## Panics
    /// If `offset > source.len()`.
    pub fn at(source: TextView, offset: usize) -> Self {
        assert!(
            offset <= source.len(),
            "offset {offset} out of range for text view of length {}",
            source.len()
        );
        Self {
            source,
            start: offset,
            capture: offset,
            nav: offset,
            invalid: false,
        }
    }

    #[inline]
    pub fn source(&self) -> &TextView {
        &self.source
    }

    /// Where the current match attempt began.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// The end of the finalized, visible capture.
    #[inline]
    pub fn capture_index(&self) -> usize {
        self.capture
    }

    /// The scanning cursor.
    #[inline]
    pub fn nav_index(&self) -> usize {
        self.nav
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// `source[start_index..capture_index]`
    pub fn capture_match(&self) -> TextView {
        self.source.slice(self.start..self.capture)
    }

    /// `source[capture_index..nav_index]`
    pub fn ghost_match(&self) -> TextView {
        self.source.slice(self.capture..self.nav)
    }

    /// `source[start_index..nav_index]`, i.e. the capture and the ghost.
    pub fn whole_match(&self) -> TextView {
        self.source.slice(self.start..self.nav)
    }

    /// `source[nav_index..]`
    pub fn remaining(&self) -> TextView {
        self.source.slice(self.nav..self.source.len())
    }

    /// The code point at `nav_index`.
    #[inline]
    pub fn current_code_point(&self) -> Option<char> {
        self.source.code_point_at(self.nav)
    }

    /// The code point ending at `nav_index`, with its length in code units.
    #[inline]
    pub fn previous_code_point(&self) -> Option<(char, usize)> {
        self.source.code_point_before(self.nav)
    }

    /// Sets the terminal failure flag.
    pub fn invalidate(&mut self) -> &mut Self {
        self.invalid = true;
        self
    }

    pub fn assert_valid(&self) -> Result<(), Error> {
        if self.invalid {
            return Err(Error::Invalidated);
        }
        Ok(())
    }

    /// Fails unless `capture_index == start_index`.
    pub fn assert_fresh(&self) -> Result<(), Error> {
        self.assert_valid()?;
        if !self.is_fresh() {
            return Err(Error::NotFresh {
                start: self.start,
                capture: self.capture,
            });
        }
        Ok(())
    }

    pub fn assert_no_ghost(&self) -> Result<(), Error> {
        if self.has_ghost() {
            return Err(Error::MatchAfterGhost {
                capture: self.capture,
                nav: self.nav,
            });
        }
        Ok(())
    }

    /// Called by every matcher before it looks at the text.
    #[inline]
    pub fn assert_matchable(&self) -> Result<(), Error> {
        self.assert_valid()?;
        self.assert_no_ghost()
    }

    fn check_bounds(&self, at: usize, by: usize) -> Result<(), Error> {
        if at + by > self.source.len() {
            return Err(Error::OutOfBounds {
                at,
                by,
                len: self.source.len(),
            });
        }
        Ok(())
    }

    /// Advances both `capture_index` and `nav_index` by `n` code units.
    pub fn move_capture_forward(&mut self, n: usize) -> Result<(), Error> {
        self.assert_matchable()?;
        self.check_bounds(self.nav, n)?;
        self.capture += n;
        self.nav += n;
        Ok(())
    }

    /// Advances only `nav_index` by `n` code units, opening or extending the ghost region.
    pub fn move_to_ghost(&mut self, n: usize) -> Result<(), Error> {
        self.assert_valid()?;
        self.check_bounds(self.nav, n)?;
        self.nav += n;
        Ok(())
    }

    /// Moves the attempt start one code point forward, keeping the navigator fresh.
    ///
    /// Used by linear scanners to retry a match at the next position.
    pub fn move_start_forward_one_code_point(&mut self) -> Result<(), Error> {
        self.assert_fresh()?;
        self.assert_no_ghost()?;
        let n = self.source.code_point_len_at(self.start);
        if n == 0 {
            return Err(Error::OutOfBounds {
                at: self.start,
                by: 1,
                len: self.source.len(),
            });
        }
        self.start += n;
        self.capture = self.start;
        self.nav = self.start;
        Ok(())
    }

    /// Consumes the code point at `nav_index` into the capture.
    pub fn move_capture_forward_one_code_point(&mut self) -> Result<(), Error> {
        let n = self.source.code_point_len_at(self.nav);
        if n == 0 {
            self.assert_matchable()?;
            return Err(Error::OutOfBounds {
                at: self.nav,
                by: 1,
                len: self.source.len(),
            });
        }
        self.move_capture_forward(n)
    }

    /// `nav_index == 0`
    #[inline]
    pub fn is_start_of_slice(&self) -> bool {
        self.nav == 0
    }

    /// `nav_index == source.len()`
    #[inline]
    pub fn is_end_of_slice(&self) -> bool {
        self.nav == self.source.len()
    }

    /// `capture_index == start_index`
    #[inline]
    pub fn is_empty_match(&self) -> bool {
        self.capture == self.start
    }

    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.capture == self.start
    }

    /// `nav_index > capture_index`
    #[inline]
    pub fn has_ghost(&self) -> bool {
        self.nav > self.capture
    }

    /// A fresh navigator at `nav_index`, for lookaround assertions.
    pub fn zero_width_at_nav(&self) -> Navigator {
        Navigator::at(self.source.clone(), self.nav)
    }

    /// A fresh navigator at `capture_index`, for the next search attempt.
    ///
    /// A trailing ghost is not consumed: it's left for the next attempt.
    pub fn restart_at_capture(&self) -> Navigator {
        Navigator::at(self.source.clone(), self.capture)
    }
}
