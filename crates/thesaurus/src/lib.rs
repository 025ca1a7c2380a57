//! # LanguaL Thesaurus
//!
//! Lookup and hierarchy navigation over the LanguaL food-descriptor
//! thesaurus.
//!
//! ## Architecture
//!
//! ```text
//! record file (JSON / TSV)
//!     │
//!     ├──> Source loaders
//!     │      └─ flat Vec<DescriptorRecord> (code, name, parent code)
//!     │
//!     ├──> ThesaurusIndex (petgraph arena, built once, read-only)
//!     │      ├─ code -> record
//!     │      ├─ parent code -> children (source order)
//!     │      └─ name -> records (exact / substring)
//!     │
//!     ├──> TreeNavigator
//!     │      ├─ parent, ancestor chain (cycle-capped)
//!     │      └─ children, breadth-first descendant closure
//!     │
//!     ├──> QueryResolver
//!     │      ├─ classify: code pattern vs. name
//!     │      └─ code lookup | exact name -> substring fallback
//!     │
//!     └──> Presenter
//!            └─ indented root-to-leaf paths, flat lines, JSON reports
//! ```
//!
//! ```
//! use langual_thesaurus::{DescriptorRecord, QueryResolver, ThesaurusIndex, ROOT_NAME};
//!
//! let index = ThesaurusIndex::build(vec![
//!     DescriptorRecord::new("R0", ROOT_NAME, None),
//!     DescriptorRecord::new("B1272", "almond", Some("R0")),
//! ])?;
//! let resolution = QueryResolver::new(&index).resolve("B1272");
//! assert_eq!(resolution.matches()[0].name, "ALMOND");
//! # Ok::<(), langual_thesaurus::ThesaurusError>(())
//! ```

mod config;
mod error;
mod index;
mod navigator;
mod presenter;
mod resolver;
mod source;
mod types;

#[cfg(test)]
mod test_support;

pub use config::ThesaurusConfig;
pub use error::{IntegrityViolation, Result, ThesaurusError};
pub use index::ThesaurusIndex;
pub use navigator::TreeNavigator;
pub use presenter::{MatchReport, Presenter, ResolutionReport, SEPARATOR};
pub use resolver::{QueryKind, QueryResolver, Resolution};
pub use source::{load_index, load_records, parse, parse_json, parse_tsv, SourceFormat};
pub use types::{DescriptorRecord, IndexStats, ROOT_NAME};
