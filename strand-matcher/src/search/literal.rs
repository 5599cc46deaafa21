use std::sync::Arc;

#[cfg(feature = "perf-literal")]
use aho_corasick::{AhoCorasick, Input, MatchKind};

use crate::{matcher::PrefixIndex, navigator::Navigator, text::TextView, BuildError, Error};

use super::Found;

/// Per-view scan state, reused across the searches of one find-all.
#[derive(Default)]
pub(crate) struct Cache {
    /// The view as big-endian bytes, for the prefilter.
    #[cfg(feature = "perf-literal")]
    bytes: Option<Vec<u8>>,
}

/// Literal-set search driven by a [`PrefixIndex`].
#[derive(Clone, Debug)]
pub(crate) struct LiteralSearch {
    index: Arc<PrefixIndex>,
    /// Jumps to candidate starts. Unset for case-insensitive sets and sets with the empty
    /// string, which both need every position looked at.
    #[cfg(feature = "perf-literal")]
    prefilter: Option<AhoCorasick>,
}

impl LiteralSearch {
    pub fn new(index: PrefixIndex) -> Result<Self, BuildError> {
        #[cfg(feature = "perf-literal")]
        let prefilter = if index.is_case_insensitive() || index.has_empty() {
            None
        } else {
            let patterns = index.candidates().map(|s| {
                s.encode_utf16()
                    .flat_map(u16::to_be_bytes)
                    .collect::<Vec<u8>>()
            });
            Some(
                AhoCorasick::builder()
                    .match_kind(MatchKind::LeftmostFirst)
                    .build(patterns)?,
            )
        };
        Ok(Self {
            index: Arc::new(index),
            #[cfg(feature = "perf-literal")]
            prefilter,
        })
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    pub fn find_at(&self, nav: Navigator, cache: &mut Cache) -> Result<Found, Error> {
        nav.assert_fresh()?;
        nav.assert_no_ghost()?;
        let view = nav.source();
        let from = nav.start_index();
        match self.scan(view, from, cache) {
            Some((pos, len)) => {
                let mut matched = Navigator::at(view.clone(), pos);
                matched.move_capture_forward(len)?;
                Ok(Found {
                    fragment: view.slice(from..pos),
                    matched: Some(matched),
                })
            }
            None => Ok(Found::fragment_only(view, from)),
        }
    }

    /// The leftmost position with a candidate, and the length of the longest candidate there.
    fn scan(&self, view: &TextView, from: usize, cache: &mut Cache) -> Option<(usize, usize)> {
        #[cfg(feature = "perf-literal")]
        if let Some(prefilter) = &self.prefilter {
            let bytes = cache.bytes.get_or_insert_with(|| view.encode_be_bytes());
            return self.scan_prefiltered(prefilter, bytes, view, from);
        }
        #[cfg(not(feature = "perf-literal"))]
        let _ = cache;

        let mut pos = from;
        loop {
            if let Some(len) = self.index.longest_prefix_at(view, pos) {
                return Some((pos, len));
            }
            match view.code_point_len_at(pos) {
                0 => return None,
                n => pos += n,
            }
        }
    }

    #[cfg(feature = "perf-literal")]
    fn scan_prefiltered(
        &self,
        prefilter: &AhoCorasick,
        bytes: &[u8],
        view: &TextView,
        from: usize,
    ) -> Option<(usize, usize)> {
        let mut at = from * 2;
        while at <= bytes.len() {
            let m = prefilter.find(Input::new(bytes).span(at..bytes.len()))?;
            // Leftmost, so nothing aligned starts before a misaligned hit
            if m.start() % 2 == 1 {
                at = m.start() + 1;
                continue;
            }
            let pos = m.start() / 2;
            if let Some(len) = self.index.longest_prefix_at(view, pos) {
                return Some((pos, len));
            }
            at = m.start() + 2;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(strings: &[&str], case_insensitive: bool) -> LiteralSearch {
        LiteralSearch::new(PrefixIndex::new(strings, case_insensitive)).unwrap()
    }

    fn find(s: &LiteralSearch, text: &str, from: usize) -> (String, Option<String>) {
        let found = s
            .find_at(Navigator::at(text.into(), from), &mut Cache::default())
            .unwrap();
        (
            found.fragment.to_string(),
            found.matched.map(|m| m.capture_match().to_string()),
        )
    }

    #[test]
    fn leftmost_longest() {
        let s = search(&["foo", "foobar", "bar"], false);
        assert_eq!(find(&s, "xxfoobarbaz", 0), ("xx".into(), Some("foobar".into())));
        assert_eq!(find(&s, "xxfoobarbaz", 5), ("".into(), Some("bar".into())));
        assert_eq!(find(&s, "xxfoobarbaz", 8), ("baz".into(), None));
        assert_eq!(find(&s, "", 0), ("".into(), None));
    }

    #[test]
    fn misaligned_bytes() {
        // "a\0" encodes as 00 61 00 00, which has the candidate's 61 00 at an odd offset
        let s = search(&["\u{6100}"], false);
        assert_eq!(find(&s, "\u{0061}\u{0000}\u{6100}", 0), ("a\0".into(), Some("\u{6100}".into())));
        assert_eq!(find(&s, "\u{0061}\u{0000}", 0), ("a\0".into(), None));
    }

    #[test]
    fn astral() {
        let s = search(&["😁"], false);
        assert_eq!(find(&s, "😀😁", 0), ("😀".into(), Some("😁".into())));
    }

    #[test]
    fn case_insensitive() {
        let s = search(&["select"], true);
        assert_eq!(find(&s, "x SELECT y", 0), ("x ".into(), Some("SELECT".into())));
    }

    #[test]
    fn empty_candidate() {
        let s = search(&["", "b"], false);
        assert_eq!(find(&s, "ab", 0), ("".into(), Some("".into())));
    }

    #[test]
    fn reuses_cache() {
        let s = search(&["b"], false);
        let view = TextView::new("abab");
        let mut cache = Cache::default();
        let first = s.find_at(Navigator::new(view.clone()), &mut cache).unwrap();
        let second = s
            .find_at(Navigator::at(view, 2), &mut cache)
            .unwrap();
        assert_eq!(first.matched.unwrap().start_index(), 1);
        assert_eq!(second.matched.unwrap().start_index(), 3);
        assert_eq!(second.fragment, "a");
    }
}
