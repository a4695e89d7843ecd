//! Core engine: flattening, path resolution, key translation and report assembly.
//!
//! ## Module Structure
//!
//! - `path`: Typed key paths and their dotted-bracket rendering
//! - `flatten`: Lazy leaf enumeration over a JSON document
//! - `resolve`: Value lookup by rendered or typed path
//! - `table`: Translation table and the built-in dictionary
//! - `translate`: Segment-wise key translation
//! - `report`: Path set collection and report rows
//! - `parsers`: Loading documents and translation tables from disk

pub mod flatten;
pub mod parsers;
pub mod path;
pub mod report;
pub mod resolve;
pub mod table;
pub mod translate;

pub use flatten::{Flatten, flatten};
pub use path::{KeyPath, Step};
pub use report::{PathSet, REPORT_HEADER, Report, ReportRow, build_report};
pub use resolve::{resolve, resolve_path};
pub use table::{BUILTIN_TRANSLATIONS, TranslationTable};
pub use translate::KeyTranslator;
