/*!
Case folding for case-insensitive literal matching.

Folding maps each code point to exactly one code point: its first simple lowercase code
point, so `İ` folds to `i` and the combining dot is dropped. Matching never expands or
contracts a code point, which lets a literal be compared against the text code point by
code point.

A folded literal doesn't have to encode to the same length as the text it matches: `K`
(U+212A KELVIN SIGN) folds to ASCII `k`, three UTF-8 bytes against one. Matched lengths are
therefore measured in the text's own code points, never taken from the literal.
*/

pub trait FoldCase {
    fn fold_case(self) -> char;
}

impl FoldCase for char {
    #[inline]
    fn fold_case(self) -> char {
        if self.is_ascii() {
            return self.to_ascii_lowercase();
        }
        self.to_lowercase().next().unwrap_or(self)
    }
}

/// Folds every code point of `s`.
pub fn fold_str(s: &str) -> String {
    s.chars().map(FoldCase::fold_case).collect()
}

/// Whether `a` and `b` are equal after folding.
#[inline]
pub fn eq_folded(a: char, b: char) -> bool {
    a == b || a.fold_case() == b.fold_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold() {
        assert_eq!('A'.fold_case(), 'a');
        assert_eq!('!'.fold_case(), '!');
        assert_eq!('Σ'.fold_case(), 'σ');
        assert_eq!('う'.fold_case(), 'う');
        assert_eq!('İ'.fold_case(), 'i');
        assert_eq!(fold_str("Grüße, ÉTÉ"), "grüße, été");
    }

    #[test]
    fn one_to_one() {
        // The fold of a code point is always a single code point
        assert_eq!(fold_str("İSTANBUL").chars().count(), "İSTANBUL".chars().count());
    }

    #[test]
    fn length_may_differ() {
        assert!(eq_folded('\u{212A}', 'k'));
        assert!(eq_folded('𐐀', '𐐨'));
        assert_ne!('\u{212A}'.len_utf8(), 'k'.len_utf8());
        assert!(!eq_folded('a', 'b'));
    }
}
