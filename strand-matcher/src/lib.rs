/*!
A hand-rolled, composable pattern matcher over code-point-aware text.

Patterns are built by composing typed [matchers](matcher), not by parsing a pattern string.
On top of what a regular expression gives you, strand-matcher has:

- Named captures returned as navigable [trees](group::GroupMatch).
- "Ghost" captures: text consumed by a match but excluded from the visible capture, such as a
  trailing delimiter. See [`Ghost`](matcher::Ghost).
- Ordered alternation with deterministic backtracking bounds: backtracking only happens within
  the count range of a single [`Repeat`](matcher::Repeat).
- Per-repetition overrides of the first and last iteration, e.g. "groups of exactly three
  digits, except the first and last groups which allow one to three digits".
- A delimiter-driven [`Splitter`](group::Splitter) and whole-text [search](search) with a
  prefix-indexed multi-literal matcher.

Text is indexed by UTF-16 code units, via [`TextView`](text::TextView).
*/
//! ## Usage
//! ```
//! use strand_matcher::{
//!     group::{Group, Splitter},
//!     matcher::{CodePoint, IntoMatcher, Literal, Matcher, Repeat},
//!     search::{Finder, TokenKind},
//!     seq,
//!     text::TextView,
//! };
//!
//! let ident = Repeat::one_or_more(CodePoint::any_of([
//!     CodePoint::range('a', 'z'),
//!     CodePoint::literal('_'),
//! ]));
//! let flag = seq![Literal::from_strings(["--", "-"]), ident.clone()];
//! assert!(flag.match_string("--dry_run").unwrap());
//!
//! let splitter = Splitter::builder()
//!     .content(Group::new("flag", flag.clone()))
//!     .delimiter(CodePoint::literal(' ').into_matcher())
//!     .build();
//! let flags = splitter.split_str("-v --dry_run").unwrap().unwrap();
//! assert_eq!(flags[1].content(), "--dry_run");
//!
//! let finder = Finder::matcher("flag", flag);
//! let tokens = finder.find_all(&TextView::new("run -v now")).unwrap();
//! assert_eq!(tokens[1].kind, TokenKind::Match);
//! assert_eq!(tokens[1].value, "-v");
//! ```
//!
//! ## Navigators and errors
//! Every matcher takes a [`Navigator`] by value and returns `Ok(Some(nav))` on a match and
//! `Ok(None)` on an ordinary failure. An [`Error`] means matchers were composed in a way that
//! breaks a navigator invariant, such as matching after a ghost capture; it's a bug, not a
//! property of the input.
//!
//! ## Performance
//! The following `Cargo.toml` settings are recommended if best performance is desired:
//! ```toml
//! [profile.release]
//! lto = "fat"
//! codegen-units = 1
//! ```
//!
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub use strand_text as text;

pub mod error;
pub mod group;
pub mod matcher;
pub mod navigator;
pub mod search;

pub use error::{BuildError, Error};
pub use navigator::Navigator;
