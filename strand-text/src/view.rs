//! An immutable, O(1)-sliceable view over UTF-16 code units.
//!
//! Indices are code unit offsets relative to the view, so a code point outside the BMP
//! occupies two indices. Slicing shares the backing buffer.
use core::fmt;
use std::{ops::Range, sync::Arc};

use widestring::{U16Str, U16String};

const HIGH_SURROGATES: Range<u16> = 0xD800..0xDC00;
const LOW_SURROGATES: Range<u16> = 0xDC00..0xE000;

/// A `(source_text, start_inclusive, end_exclusive)` view.
///
/// Invariant: `0 <= start <= end <= source.len()`.
///
/// ## Example
/// ```
/// use strand_text::TextView;
///
/// let text = TextView::new("a😀b");
/// assert_eq!(text.len(), 4);
/// assert_eq!(text.code_point_at(1), Some('😀'));
/// assert_eq!(text.code_point_len_at(1), 2);
/// assert_eq!(text.slice(3..4), "b");
/// ```
#[derive(Clone)]
pub struct TextView {
    source: Arc<[u16]>,
    start: usize,
    end: usize,
}

impl TextView {
    pub fn new(text: &str) -> Self {
        Self::from_units(U16String::from_str(text).into_vec())
    }

    /// Wraps raw code units. Lone surrogates are allowed and decode as U+FFFD.
    pub fn from_units(units: Vec<u16>) -> Self {
        let end = units.len();
        Self {
            source: units.into(),
            start: 0,
            end,
        }
    }

    /// Length in code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn units(&self) -> &[u16] {
        &self.source[self.start..self.end]
    }

    /// The range this view covers in the backing text.
    pub fn range_in_source(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns a sub-view. `range` is relative to this view.
    ///
    /// ## Panics
    /// If `range` is decreasing or exceeds [`len()`](Self::len), like `str` indexing.
    pub fn slice(&self, range: Range<usize>) -> TextView {
        assert!(
            range.start <= range.end && range.end <= self.len(),
            "slice {range:?} out of range for text view of length {}",
            self.len()
        );
        TextView {
            source: self.source.clone(),
            start: self.start + range.start,
            end: self.start + range.end,
        }
    }

    /// Decodes the code point starting at `i`.
    ///
    /// Returns `None` at or past the end. A lone surrogate, or a high surrogate cut off by
    /// the end of the view, decodes as U+FFFD.
    pub fn code_point_at(&self, i: usize) -> Option<char> {
        let units = self.units();
        let unit = *units.get(i)?;
        if HIGH_SURROGATES.contains(&unit) {
            if let Some(&low) = units.get(i + 1).filter(|u| LOW_SURROGATES.contains(u)) {
                let c = 0x10000 + (((unit - 0xD800) as u32) << 10) + (low - 0xDC00) as u32;
                return Some(char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            return Some(char::REPLACEMENT_CHARACTER);
        }
        Some(char::from_u32(unit as u32).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Number of code units taken by the code point at `i`: 2 for a surrogate pair,
    /// 1 otherwise, 0 at or past the end.
    pub fn code_point_len_at(&self, i: usize) -> usize {
        let units = self.units();
        match units.get(i) {
            None => 0,
            Some(unit) if HIGH_SURROGATES.contains(unit) => {
                match units.get(i + 1) {
                    Some(low) if LOW_SURROGATES.contains(low) => 2,
                    _ => 1,
                }
            }
            Some(_) => 1,
        }
    }

    /// Decodes the code point ending exactly at `i`, with its length in code units.
    pub fn code_point_before(&self, i: usize) -> Option<(char, usize)> {
        if i == 0 || i > self.len() {
            return None;
        }
        let units = self.units();
        if i >= 2
            && LOW_SURROGATES.contains(&units[i - 1])
            && HIGH_SURROGATES.contains(&units[i - 2])
        {
            return self.code_point_at(i - 2).map(|c| (c, 2));
        }
        self.code_point_at(i - 1).map(|c| (c, 1))
    }

    /// Whether `prefix` occurs at offset `i`.
    #[inline]
    pub fn starts_with_at(&self, i: usize, prefix: &[u16]) -> bool {
        self.units()
            .get(i..)
            .is_some_and(|rest| rest.starts_with(prefix))
    }

    /// Whether `suffix` ends exactly at offset `i`.
    #[inline]
    pub fn ends_with_at(&self, i: usize, suffix: &[u16]) -> bool {
        self.units()
            .get(..i)
            .is_some_and(|head| head.ends_with(suffix))
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        let mut units = self.units().iter().copied();
        prefix.encode_utf16().all(|u| units.next() == Some(u))
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        let suffix: Vec<u16> = suffix.encode_utf16().collect();
        self.units().ends_with(&suffix)
    }

    /// Code points with their offsets.
    pub fn char_indices(&self) -> CharIndices<'_> {
        CharIndices { view: self, i: 0 }
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.char_indices().map(|(_, c)| c)
    }

    /// Big-endian byte encoding of the units, for byte-oriented searchers.
    ///
    /// Offset `i` in the view corresponds to byte offset `2 * i`.
    pub fn encode_be_bytes(&self) -> Vec<u8> {
        self.units().iter().flat_map(|u| u.to_be_bytes()).collect()
    }

    #[inline]
    pub fn as_u16str(&self) -> &U16Str {
        U16Str::from_slice(self.units())
    }
}

pub struct CharIndices<'a> {
    view: &'a TextView,
    i: usize,
}

impl Iterator for CharIndices<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.view.code_point_at(self.i)?;
        let i = self.i;
        self.i += self.view.code_point_len_at(i);
        Some((i, c))
    }
}

impl From<&str> for TextView {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextView {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl fmt::Display for TextView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_u16str().to_string_lossy())
    }
}

impl fmt::Debug for TextView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.to_string(), self.range_in_source())
    }
}

/// Compares content only, not the position in the backing text.
impl PartialEq for TextView {
    fn eq(&self, other: &Self) -> bool {
        self.units() == other.units()
    }
}

impl Eq for TextView {}

impl PartialEq<str> for TextView {
    fn eq(&self, other: &str) -> bool {
        self.units().iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for TextView {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmp_and_astral() {
        let text = TextView::new("a😀b");
        assert_eq!(text.len(), 4);
        assert_eq!(text.code_point_at(0), Some('a'));
        assert_eq!(text.code_point_at(1), Some('😀'));
        assert_eq!(text.code_point_len_at(1), 2);
        assert_eq!(text.code_point_at(3), Some('b'));
        assert_eq!(text.code_point_at(4), None);
        assert_eq!(text.code_point_len_at(4), 0);
        assert_eq!(text.chars().collect::<String>(), "a😀b");
    }

    #[test]
    fn code_point_before() {
        let text = TextView::new("a😀b");
        assert_eq!(text.code_point_before(0), None);
        assert_eq!(text.code_point_before(1), Some(('a', 1)));
        assert_eq!(text.code_point_before(3), Some(('😀', 2)));
        assert_eq!(text.code_point_before(4), Some(('b', 1)));
        assert_eq!(text.code_point_before(5), None);
    }

    #[test]
    fn lone_surrogates() {
        let text = TextView::from_units(vec![0xD800, 0x61, 0xDC00]);
        assert_eq!(text.code_point_at(0), Some(char::REPLACEMENT_CHARACTER));
        assert_eq!(text.code_point_len_at(0), 1);
        assert_eq!(text.code_point_at(2), Some(char::REPLACEMENT_CHARACTER));
        // High surrogate cut off by the view
        let text = TextView::new("😀").slice(0..1);
        assert_eq!(text.code_point_at(0), Some(char::REPLACEMENT_CHARACTER));
        assert_eq!(text.code_point_len_at(0), 1);
    }

    #[test]
    fn slice_shares_and_compares_content() {
        let text = TextView::new("foobarfoo");
        let a = text.slice(0..3);
        let b = text.slice(6..9);
        assert_eq!(a, b);
        assert_ne!(a.range_in_source(), b.range_in_source());
        assert_eq!(a, "foo");
        assert_eq!(text.slice(3..6).slice(1..2), "a");
        assert!(text.slice(3..3).is_empty());
    }

    #[test]
    #[should_panic]
    fn slice_out_of_range() {
        TextView::new("abc").slice(2..4);
    }

    #[test]
    fn prefix_suffix() {
        let text = TextView::new("foobarbaz");
        assert!(text.starts_with("foo"));
        assert!(!text.starts_with("bar"));
        assert!(text.ends_with("baz"));
        let bar: Vec<u16> = "bar".encode_utf16().collect();
        assert!(text.starts_with_at(3, &bar));
        assert!(!text.starts_with_at(8, &bar));
        assert!(!text.starts_with_at(100, &bar));
        assert!(text.ends_with_at(6, &bar));
        assert!(!text.ends_with_at(5, &bar));
    }

    #[test]
    fn display_and_bytes() {
        let text = TextView::new("hé😀");
        assert_eq!(text.to_string(), "hé😀");
        assert_eq!(
            TextView::new("ab").encode_be_bytes(),
            vec![0x00, b'a', 0x00, b'b']
        );
    }
}
