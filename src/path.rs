//! Lexical path cleaning for remote SFTP paths.
//!
//! Remote paths always use `/` as separator. Cleaning works on the string
//! alone and never consults a filesystem, so `..` is resolved textually.

/// Path separator used by SFTP servers.
pub const SEPARATOR: char = '/';

/// Returns true if `path` starts at the filesystem root.
pub fn is_rooted(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Returns the shortest path equivalent to `path` by lexical processing.
///
/// The rules are applied until nothing changes:
///
/// 1. Repeated separators collapse to one.
/// 2. `.` segments are removed.
/// 3. A `..` segment removes the segment before it. Leading `..` segments
///    of a relative path are kept; `..` directly under the root is dropped.
///
/// A trailing separator is removed unless the result is the root. An empty
/// result becomes `.`.
///
/// # Examples
///
/// ```
/// use sftp_location::path::clean;
///
/// assert_eq!(clean("dir///subdir"), "dir/subdir");
/// assert_eq!(clean("dir/subdir/../other"), "dir/other");
/// assert_eq!(clean("/../etc"), "/etc");
/// assert_eq!(clean("../dir/subdir"), "../dir/subdir");
/// assert_eq!(clean(""), ".");
/// ```
pub fn clean(path: &str) -> String {
    let rooted = is_rooted(path);
    let segments = resolve_segments(path.split(SEPARATOR), rooted);

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Resolves `.`, `..` and empty segments of a split path.
///
/// `rooted` decides what happens to a `..` that has nothing left to remove.
fn resolve_segments<'a>(segments: impl Iterator<Item = &'a str>, rooted: bool) -> Vec<&'a str> {
    let mut out: Vec<&'a str> = Vec::new();

    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => match out.last() {
                Some(&last) if last != ".." => {
                    out.pop();
                }
                _ if rooted => {}
                _ => out.push(segment),
            },
            _ => out.push(segment),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_collapses_separators() {
        assert_eq!(clean("dir///subdir"), "dir/subdir");
        assert_eq!(clean("//dir//subdir//"), "/dir/subdir");
        assert_eq!(clean("dir/"), "dir");
    }

    #[test]
    fn test_clean_resolves_dot_segments() {
        assert_eq!(clean("dir/subdir/../other"), "dir/other");
        assert_eq!(clean("./dir/./subdir"), "dir/subdir");
        assert_eq!(clean("dir/.."), ".");
        assert_eq!(clean("dir/../.."), "..");
        assert_eq!(clean("../../dir"), "../../dir");
        assert_eq!(clean("a/b/../../../c"), "../c");
    }

    #[test]
    fn test_clean_rooted_paths() {
        assert_eq!(clean("/"), "/");
        assert_eq!(clean("///"), "/");
        assert_eq!(clean("/.."), "/");
        assert_eq!(clean("/../dir"), "/dir");
        assert_eq!(clean("/dir/subdir/.."), "/dir");
    }

    #[test]
    fn test_clean_keeps_other_characters() {
        assert_eq!(clean("dir/subdir:suffix"), "dir/subdir:suffix");
        assert_eq!(clean("dir/...hidden"), "dir/...hidden");
        assert_eq!(clean("~user/dir"), "~user/dir");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let inputs = [
            "",
            ".",
            "/",
            "dir///subdir",
            "/dir/./subdir/../other/",
            "../../a/./b/..",
            "//a//b//c//",
            "/../../x",
            "a/b/c/../../../../d",
        ];

        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "cleaning {input:?} twice changed it");
        }
    }

    #[test]
    fn test_is_rooted() {
        assert!(is_rooted("/dir"));
        assert!(!is_rooted("dir"));
        assert!(!is_rooted(""));
    }
}
