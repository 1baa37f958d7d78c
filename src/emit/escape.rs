use std::path::Path;

/// Escape `s` for use inside a double-quoted C string literal.
///
/// Only backslash, double quote and newline are rewritten. Backslashes go
/// first so the ones added for quotes are not doubled.
pub fn escape_c_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Include guard macro for a header written to `path`: the base name,
/// uppercased, with every `.` turned into `_`.
pub fn include_guard<P: AsRef<Path>>(path: P) -> String {
    let base = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    base.to_uppercase().replace('.', "_")
}
