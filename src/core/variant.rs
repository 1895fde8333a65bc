//! Directory naming convention for regional variants.
//!
//! A locale directory named `base-SUFFIX` (e.g. `es-MX`) is a child variant
//! of the sibling directory `base`. The relation is never stored; it is
//! derived here and handed to the rest of the crate as an explicit path.

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Separator between the base language and the regional suffix.
pub const VARIANT_SEPARATOR: char = '-';

/// Split a directory name into its base language and optional suffix.
///
/// ```
/// use langsync::core::variant::split_variant;
///
/// assert_eq!(split_variant("es-MX"), ("es", Some("MX")));
/// assert_eq!(split_variant("zh-Hant-TW"), ("zh", Some("Hant-TW")));
/// assert_eq!(split_variant("fr"), ("fr", None));
/// ```
pub fn split_variant(name: &str) -> (&str, Option<&str>) {
    match name.split_once(VARIANT_SEPARATOR) {
        Some((base, suffix)) => (base, Some(suffix)),
        None => (name, None),
    }
}

/// Name of the directory holding `path`, if it is valid UTF-8.
pub fn locale_dir_name(path: &Path) -> Option<&str> {
    path.parent()?.file_name()?.to_str()
}

/// True when `path` lives in a `base-SUFFIX` directory.
pub fn is_child_variant(path: &Path) -> bool {
    locale_dir_name(path).is_some_and(|name| split_variant(name).1.is_some())
}

/// Conventional parent path of a child variant file.
///
/// `<root>/es-MX/translation.toml` maps to `<root>/es/translation.toml`.
/// Returns `None` for files that are not in a child variant directory.
pub fn parent_path(path: &Path) -> Option<PathBuf> {
    let dir = path.parent()?;
    let (base, suffix) = split_variant(dir.file_name()?.to_str()?);
    suffix?;
    let root = dir.parent().unwrap_or_else(|| Path::new(""));
    Some(root.join(base).join(path.file_name()?))
}

/// Compare two paths by their canonical form, falling back to a literal
/// comparison when either does not exist.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
