/// Default delimiter used by [`basename`]
pub const DEFAULT_DELIMITER: &str = "/";

/// Return everything after the last `/` in `path`
pub fn basename(path: &str) -> &str {
    basename_by(path, DEFAULT_DELIMITER)
}

/// Return everything after the last occurrence of `delimiter` in `path`
///
/// - If the delimiter does not occur, `path` is returned unchanged.
/// - If `path` ends with the delimiter, the result is empty.
/// - The delimiter may be more than one character (`"::"`, `".tar."`).
/// - An empty delimiter matches at the very end, so the result is empty.
pub fn basename_by<'a>(path: &'a str, delimiter: &str) -> &'a str {
    match path.rsplit_once(delimiter) {
        Some((_, tail)) => tail,
        None => path,
    }
}
