//! Code-point-aware text utils.
/*!
## Features
- [`TextView`]: an immutable, O(1)-sliceable view over UTF-16 code units with code-point-at and prefix/suffix tests
- One-to-one [case folding](case) for case-insensitive matching
- Unicode [general category](category) membership

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
pub mod case;
#[cfg(feature = "category")]
pub mod category;
pub mod view;

pub use view::TextView;
