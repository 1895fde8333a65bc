//! Locale document operations.
//!
//! ## Module Structure
//!
//! - `document`: TOML load/save of the ordered key-value document model
//! - `variant`: `base-SUFFIX` directory convention and parent path derivation
//! - `unmerge`: resolve a child variant against its parent
//! - `merge`: factor two sibling variants into a shared parent
//! - `sync`: add missing template keys as empty placeholders
//! - `annotate`: append reference-language comments to assignment lines
//! - `error`: typed errors for the operations above

pub mod annotate;
pub mod document;
pub mod error;
pub mod merge;
pub mod sync;
pub mod unmerge;
pub mod variant;

pub use annotate::{annotate_file, annotate_text};
pub use document::{ALERTS_KEY, Document, DocumentInfo, INFO_KEY, Section};
pub use error::{DocumentError, MergeError, OrderingError, ParseError};
pub use merge::{MergeOptions, MergeStats, merge, merge_documents};
pub use sync::{SyncOutcome, sync_document, sync_file};
pub use unmerge::{overlay, resolve, unmerge};
