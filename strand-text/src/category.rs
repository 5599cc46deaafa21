/*!
Unicode [general category](https://www.unicode.org/reports/tr44/#General_Category_Values) membership.

The range tables come from [`regex-syntax`](https://docs.rs/regex-syntax/), which is compiled with its `unicode-gencat` tables. A [`CategorySet`] is compiled once and is immutable afterwards.

## Example
```
use strand_text::category::{CategorySet, GeneralCategory};

let set = CategorySet::new([GeneralCategory::UppercaseLetter, GeneralCategory::DecimalNumber]).unwrap();
assert!(set.contains('A'));
assert!(set.contains('٣'));
assert!(!set.contains('a'));
```
*/
use regex_syntax::{
    hir::{Class, HirKind},
    ParserBuilder,
};

/// Surrogates (`Cs`) are absent: a [`TextView`](crate::TextView) never yields them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    /// `Lu`
    UppercaseLetter,
    /// `Ll`
    LowercaseLetter,
    /// `Lt`
    TitlecaseLetter,
    /// `Lm`
    ModifierLetter,
    /// `Lo`
    OtherLetter,
    /// `Mn`
    NonspacingMark,
    /// `Mc`
    SpacingMark,
    /// `Me`
    EnclosingMark,
    /// `Nd`
    DecimalNumber,
    /// `Nl`
    LetterNumber,
    /// `No`
    OtherNumber,
    /// `Pc`
    ConnectorPunctuation,
    /// `Pd`
    DashPunctuation,
    /// `Ps`
    OpenPunctuation,
    /// `Pe`
    ClosePunctuation,
    /// `Pi`
    InitialPunctuation,
    /// `Pf`
    FinalPunctuation,
    /// `Po`
    OtherPunctuation,
    /// `Sm`
    MathSymbol,
    /// `Sc`
    CurrencySymbol,
    /// `Sk`
    ModifierSymbol,
    /// `So`
    OtherSymbol,
    /// `Zs`
    SpaceSeparator,
    /// `Zl`
    LineSeparator,
    /// `Zp`
    ParagraphSeparator,
    /// `Cc`
    Control,
    /// `Cf`
    Format,
    /// `Co`
    PrivateUse,
    /// `Cn`
    Unassigned,

    /// `L`
    Letter,
    /// `M`
    Mark,
    /// `N`
    Number,
    /// `P`
    Punctuation,
    /// `S`
    Symbol,
    /// `Z`
    Separator,
    /// `C`
    Other,
}

impl GeneralCategory {
    pub fn abbreviation(self) -> &'static str {
        use GeneralCategory::*;
        match self {
            UppercaseLetter => "Lu",
            LowercaseLetter => "Ll",
            TitlecaseLetter => "Lt",
            ModifierLetter => "Lm",
            OtherLetter => "Lo",
            NonspacingMark => "Mn",
            SpacingMark => "Mc",
            EnclosingMark => "Me",
            DecimalNumber => "Nd",
            LetterNumber => "Nl",
            OtherNumber => "No",
            ConnectorPunctuation => "Pc",
            DashPunctuation => "Pd",
            OpenPunctuation => "Ps",
            ClosePunctuation => "Pe",
            InitialPunctuation => "Pi",
            FinalPunctuation => "Pf",
            OtherPunctuation => "Po",
            MathSymbol => "Sm",
            CurrencySymbol => "Sc",
            ModifierSymbol => "Sk",
            OtherSymbol => "So",
            SpaceSeparator => "Zs",
            LineSeparator => "Zl",
            ParagraphSeparator => "Zp",
            Control => "Cc",
            Format => "Cf",
            PrivateUse => "Co",
            Unassigned => "Cn",
            Letter => "L",
            Mark => "M",
            Number => "N",
            Punctuation => "P",
            Symbol => "S",
            Separator => "Z",
            Other => "C",
        }
    }
}

/// A union of general categories as sorted, non-overlapping code point ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySet {
    ranges: Box<[(char, char)]>,
}

impl CategorySet {
    pub fn new(
        categories: impl IntoIterator<Item = GeneralCategory>,
    ) -> Result<Self, regex_syntax::Error> {
        let class: String = categories
            .into_iter()
            .map(|cat| format!(r"\p{{{}}}", cat.abbreviation()))
            .collect();
        if class.is_empty() {
            return Ok(Self {
                ranges: Box::new([]),
            });
        }

        // The parser canonicalizes the union: sorted, merged ranges
        let hir = ParserBuilder::new()
            .unicode(true)
            .utf8(true)
            .build()
            .parse(&format!("[{class}]"))?;
        let ranges = match hir.into_kind() {
            HirKind::Class(Class::Unicode(class)) => class
                .ranges()
                .iter()
                .map(|r| (r.start(), r.end()))
                .collect(),
            // A class of a single code point is simplified into a literal, e.g. `\p{Zl}`
            HirKind::Literal(literal) => String::from_utf8_lossy(&literal.0)
                .chars()
                .map(|c| (c, c))
                .collect(),
            _ => Vec::new(),
        };
        Ok(Self {
            ranges: ranges.into_boxed_slice(),
        })
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.ranges
            .binary_search_by(|&(start, end)| {
                if end < c {
                    core::cmp::Ordering::Less
                } else if start > c {
                    core::cmp::Ordering::Greater
                } else {
                    core::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    pub fn ranges(&self) -> &[(char, char)] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GeneralCategory::*;

    #[test]
    fn letters() {
        let set = CategorySet::new([Letter]).unwrap();
        for c in ['a', 'Z', 'é', 'ж', '拼', 'ア'] {
            assert!(set.contains(c), "{c}");
        }
        for c in ['1', ' ', '-', '😀'] {
            assert!(!set.contains(c), "{c}");
        }

        let upper = CategorySet::new([UppercaseLetter]).unwrap();
        assert!(upper.contains('Σ'));
        assert!(!upper.contains('σ'));
    }

    #[test]
    fn decimal_digits() {
        let set = CategorySet::new([DecimalNumber]).unwrap();
        assert!(set.contains('0'));
        assert!(set.contains('9'));
        // ARABIC-INDIC DIGIT THREE
        assert!(set.contains('٣'));
        // Superscript two is `No`
        assert!(!set.contains('²'));
        assert!(CategorySet::new([OtherNumber]).unwrap().contains('²'));
    }

    #[test]
    fn single_code_point_category() {
        let set = CategorySet::new([LineSeparator]).unwrap();
        assert_eq!(set.ranges(), &[('\u{2028}', '\u{2028}')]);
        assert!(set.contains('\u{2028}'));
        assert!(!set.contains('\u{2029}'));
    }

    #[test]
    fn union() {
        let set = CategorySet::new([LineSeparator, ParagraphSeparator, SpaceSeparator]).unwrap();
        assert!(set.contains(' '));
        assert!(set.contains('\u{2028}'));
        assert!(set.contains('\u{2029}'));
        assert!(!set.contains('\t'));
        assert!(set.ranges().windows(2).all(|w| w[0].1 < w[1].0));
    }

    #[test]
    fn empty() {
        let set = CategorySet::new([]).unwrap();
        assert!(set.is_empty());
        assert!(!set.contains('a'));
    }
}
