use bon::Builder;

use crate::{
    matcher::{Ghost, Matcher, SharedMatcher},
    navigator::Navigator,
    text::TextView,
    Error,
};

use super::{Group, GroupMatch};

/// Splits text into delimited segments, capturing each with a content group.
///
/// Each segment is `content` followed by `delimiter`; the delimiter is matched as a ghost,
/// so a segment node's [`whole`](GroupMatch::whole) includes it and its
/// [`content`](GroupMatch::content) doesn't. Splitting stops when `end` matches after a
/// segment (without consuming it) or when the text is exhausted.
///
/// When both the content and the delimiter of a segment match zero-width, the scan skips one
/// code point to make progress. That code point belongs to no segment, so the `whole` spans
/// only cover the text if every segment consumes something.
///
/// ## Example
/// ```
/// use strand_matcher::{
///     group::{Group, Splitter},
///     matcher::{CodePoint, IntoMatcher, Repeat},
/// };
///
/// let splitter = Splitter::builder()
///     .content(Group::new("item", Repeat::one_or_more(CodePoint::none_of([',', ']']))))
///     .delimiter(CodePoint::literal(',').into_matcher())
///     .end(CodePoint::literal(']').into_matcher())
///     .build();
///
/// let items = splitter.split(&"a,bc,d]rest".into()).unwrap().unwrap();
/// assert_eq!(items.iter().map(|i| i.to_string()).collect::<Vec<_>>(), ["a", "bc", "d"]);
/// assert_eq!(items[0].whole(), "a,");
/// ```
#[derive(Builder, Clone, Debug)]
pub struct Splitter {
    content: Group,
    delimiter: SharedMatcher,
    end: Option<SharedMatcher>,
}

impl Splitter {
    /// Returns one node per segment, or `None` if a segment's content doesn't match or isn't
    /// followed by a delimiter, the end matcher, or the end of the text.
    pub fn split(&self, view: &TextView) -> Result<Option<Vec<GroupMatch>>, Error> {
        let delimiter = Ghost::new(self.delimiter.clone());
        let mut segments = Vec::new();
        let mut pos = 0;
        while pos < view.len() {
            let Some((after, node)) = self
                .content
                .match_node(Navigator::at(view.clone(), pos))?
            else {
                return Ok(None);
            };

            if let Some(delimited) = delimiter.try_match(after.clone())? {
                let next = delimited.nav_index();
                segments.push(GroupMatch {
                    whole: view.slice(pos..next),
                    ..node
                });
                // Zero-width segments still make progress
                pos = if next > pos {
                    next
                } else {
                    pos + view.code_point_len_at(pos)
                };
                if self.at_end(view, pos)? {
                    break;
                }
            } else if after.is_end_of_slice() || self.at_end(view, after.nav_index())? {
                segments.push(node);
                break;
            } else {
                return Ok(None);
            }
        }
        Ok(Some(segments))
    }

    /// [`split`](Self::split) over a string.
    pub fn split_str(&self, text: &str) -> Result<Option<Vec<GroupMatch>>, Error> {
        self.split(&TextView::new(text))
    }

    fn at_end(&self, view: &TextView, pos: usize) -> Result<bool, Error> {
        match &self.end {
            Some(end) if pos <= view.len() => {
                Ok(end.try_match(Navigator::at(view.clone(), pos))?.is_some())
            }
            _ => Ok(false),
        }
    }
}
