//! langsync - keep TOML locale files in step with a translation template
//!
//! langsync is a CLI tool and library for maintaining a directory of TOML
//! locale files. It adds keys missing from a template, factors regional
//! variants (`es-ES`, `es-MX`) into a shared parent file plus per-variant
//! overrides, and annotates entries with the template's reference strings.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Document model and the sync/merge/unmerge/annotate operations
//! - `pipeline`: Sync → Merge → Annotate over a whole locale directory

pub mod cli;
pub mod config;
pub mod core;
pub mod pipeline;
