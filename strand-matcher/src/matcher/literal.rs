use std::{collections::HashMap, sync::Arc};

use bon::bon;
use itertools::Itertools;

use crate::{
    matcher::MatchResult,
    navigator::Navigator,
    text::{
        case::{self, FoldCase},
        TextView,
    },
};

use super::Matcher;

/// Maps a leading code point to the literal candidates starting with it, longest first.
///
/// Lookup cost is proportional to the number of candidates sharing the first code point
/// of the text, not to the size of the whole set.
///
/// ## Example
/// ```
/// use strand_matcher::{matcher::PrefixIndex, text::TextView};
///
/// let index = PrefixIndex::new(["foo", "foobar", "bar"], false);
/// let text = TextView::new("foobarbaz");
/// assert_eq!(index.longest_prefix_at(&text, 0), Some(6));
/// assert_eq!(index.longest_prefix_at(&text, 3), Some(3));
/// assert_eq!(index.longest_prefix_at(&text, 6), None);
/// ```
#[derive(Clone, Debug)]
pub struct PrefixIndex {
    /// Keyed by the (folded) first code point. Each bucket is sorted by descending length.
    buckets: HashMap<char, Box<[Box<[u16]>]>>,
    /// Whether the empty string is a candidate.
    empty: bool,
    len: usize,
    case_insensitive: bool,
}

impl PrefixIndex {
    /// Duplicate candidates are collapsed. With `case_insensitive`, candidates are folded
    /// with [`fold_str`](case::fold_str) and compared code point by code point.
    pub fn new(strings: impl IntoIterator<Item = impl AsRef<str>>, case_insensitive: bool) -> Self {
        let strings: Vec<String> = strings
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                if case_insensitive {
                    case::fold_str(s)
                } else {
                    s.to_owned()
                }
            })
            .sorted_unstable()
            .dedup()
            .collect();

        let mut empty = false;
        let mut buckets: HashMap<char, Vec<Box<[u16]>>> = HashMap::new();
        for s in &strings {
            match s.chars().next() {
                Some(c) => buckets
                    .entry(c)
                    .or_default()
                    .push(s.encode_utf16().collect()),
                None => empty = true,
            }
        }
        let buckets = buckets
            .into_iter()
            .map(|(c, mut candidates)| {
                // Stable, so equal lengths keep lexicographic order
                candidates.sort_by(|a, b| b.len().cmp(&a.len()));
                (c, candidates.into_boxed_slice())
            })
            .collect();

        Self {
            buckets,
            empty,
            len: strings.len(),
            case_insensitive,
        }
    }

    /// The number of distinct candidates.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Whether the empty string is a candidate.
    pub fn has_empty(&self) -> bool {
        self.empty
    }

    #[inline]
    fn fold(&self, c: char) -> char {
        if self.case_insensitive {
            c.fold_case()
        } else {
            c
        }
    }

    /// The length in code units of `candidate` matched at `text[i..]`, if it matches.
    fn prefix_len_at(&self, text: &TextView, i: usize, candidate: &[u16]) -> Option<usize> {
        if !self.case_insensitive {
            return text
                .starts_with_at(i, candidate)
                .then_some(candidate.len());
        }
        let mut at = i;
        for c in char::decode_utf16(candidate.iter().copied()) {
            let c = c.ok()?;
            let t = text.code_point_at(at)?;
            if !case::eq_folded(t, c) {
                return None;
            }
            at += text.code_point_len_at(at);
        }
        Some(at - i)
    }

    fn bucket(&self, text: &TextView, i: usize) -> &[Box<[u16]>] {
        text.code_point_at(i)
            .and_then(|c| self.buckets.get(&self.fold(c)))
            .map(|bucket| &bucket[..])
            .unwrap_or_default()
    }

    /// The length in code units of the longest candidate that is a prefix of `text[i..]`.
    ///
    /// `Some(0)` means only the empty candidate matched.
    pub fn longest_prefix_at(&self, text: &TextView, i: usize) -> Option<usize> {
        self.bucket(text, i)
            .iter()
            .find_map(|candidate| self.prefix_len_at(text, i, candidate))
            .or(self.empty.then_some(0))
    }

    /// Whether `s` is one of the candidates.
    pub fn contains(&self, s: &str) -> bool {
        let text = TextView::new(s);
        if text.is_empty() {
            return self.empty;
        }
        self.bucket(&text, 0)
            .iter()
            .any(|candidate| self.prefix_len_at(&text, 0, candidate) == Some(text.len()))
    }

    /// All candidates, folded if case-insensitive, in no particular order.
    pub fn candidates(&self) -> impl Iterator<Item = String> + '_ {
        self.empty
            .then(String::new)
            .into_iter()
            .chain(
                self.buckets
                    .values()
                    .flat_map(|bucket| bucket.iter())
                    .map(|units| String::from_utf16_lossy(units)),
            )
    }
}

/// Matches one of a fixed set of literal strings, preferring the longest.
///
/// ## Example
/// ```
/// use strand_matcher::matcher::{Literal, Matcher};
///
/// let m = Literal::from_strings(["foo", "foobar"]);
/// let nav = m.match_view(&"foobarbaz".into()).unwrap().unwrap();
/// assert_eq!(nav.capture_match(), "foobar");
///
/// let m = Literal::builder(&["null", "nil"]).case_insensitive(true).build();
/// assert!(m.match_string("NULL").unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Literal {
    index: Arc<PrefixIndex>,
}

#[bon]
impl Literal {
    #[builder]
    pub fn new(
        #[builder(start_fn)] strings: &[&str],
        /// Compare by single-char lowercase mapping, e.g. `"ß"` does not match `"SS"`.
        #[builder(default = false)]
        case_insensitive: bool,
    ) -> Self {
        Self::from_index(PrefixIndex::new(strings, case_insensitive))
    }

    pub fn from_string(s: &str) -> Self {
        Self::from_strings([s])
    }

    pub fn from_strings(strings: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self::from_index(PrefixIndex::new(strings, false))
    }

    pub fn from_index(index: PrefixIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }
}

impl Matcher for Literal {
    fn try_match(&self, mut nav: Navigator) -> MatchResult {
        nav.assert_matchable()?;
        match self.index.longest_prefix_at(nav.source(), nav.nav_index()) {
            Some(len) => {
                nav.move_capture_forward(len)?;
                Ok(Some(nav))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_nav, matcher::tests::nav};

    use super::*;

    #[test]
    fn longest_match_first() {
        let m = Literal::from_strings(["foo", "foobar"]);
        assert_nav!(m.try_match(nav("foobarbaz")), (0, 6, 6));
        let m = Literal::from_strings(["foobar", "foo"]);
        assert_nav!(m.try_match(nav("foobarbaz")), (0, 6, 6));
        assert_nav!(m.try_match(nav("foobaz")), (0, 3, 3));
        assert_nav!(m.try_match(nav("fo")), None);
    }

    #[test]
    fn single() {
        let m = Literal::from_string("key");
        assert!(m.match_string("key").unwrap());
        assert!(!m.match_string("keys").unwrap());
        assert!(m.is_match("keys").unwrap());
        assert!(!m.is_match("ke").unwrap());
        assert!(!m.is_match("").unwrap());
    }

    #[test]
    fn empty_candidate() {
        let m = Literal::from_strings(["", "ab"]);
        assert_nav!(m.try_match(nav("abc")), (0, 2, 2));
        assert_nav!(m.try_match(nav("xyz")), (0, 0, 0));
        assert_nav!(m.try_match(nav("")), (0, 0, 0));
        assert!(m.index().has_empty());
        assert!(m.index().contains(""));
    }

    #[test]
    fn astral_candidates() {
        let m = Literal::from_strings(["😀", "😀😀", "😁"]);
        assert_nav!(m.try_match(nav("😀😀!")), (0, 4, 4));
        assert_nav!(m.try_match(nav("😁😀")), (0, 2, 2));
        // Same high surrogate, different code point
        assert_nav!(m.try_match(nav("😂")), None);
    }

    #[test]
    fn index() {
        let index = PrefixIndex::new(["b", "a", "ab", "a"], false);
        assert_eq!(index.len(), 3);
        assert!(index.contains("a"));
        assert!(index.contains("ab"));
        assert!(!index.contains("abc"));
        assert!(!index.contains(""));
        assert_eq!(index.candidates().sorted().collect_vec(), ["a", "ab", "b"]);
        assert!(PrefixIndex::new(Vec::<String>::new(), false).is_empty());
    }

    #[test]
    fn case_insensitive() {
        let m = Literal::builder(&["True", "tru"]).case_insensitive(true).build();
        assert_nav!(m.try_match(nav("TRUE!")), (0, 4, 4));
        assert_nav!(m.try_match(nav("tRuX")), (0, 3, 3));
        assert!(m.index().contains("TRUE"));
        assert!(m.index().is_case_insensitive());

        let m = Literal::builder(&["Straße"]).case_insensitive(true).build();
        assert!(m.match_string("STRAẞE").unwrap());
        assert!(!m.match_string("STRASSE").unwrap());

        let m = Literal::builder(&["True"]).build();
        assert!(!m.match_string("true").unwrap());
    }
}
