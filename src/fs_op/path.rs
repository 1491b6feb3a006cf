//! Lexical path joining.
//!
//! Nothing in here touches the filesystem: paths are treated as plain text
//! and cleaned with the same rules for every input.

use std::fmt;

/// Path separator convention used when joining and cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `/` only.
    Unix,
    /// `\` on output; both `\` and `/` are accepted on input.
    Windows,
}

impl Separator {
    /// Convention of the platform this crate was compiled for.
    pub fn native() -> Self {
        if cfg!(windows) {
            Separator::Windows
        } else {
            Separator::Unix
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Separator::Unix => '/',
            Separator::Windows => '\\',
        }
    }

    pub fn is_separator(self, c: char) -> bool {
        match self {
            Separator::Unix => c == '/',
            Separator::Windows => c == '\\' || c == '/',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Unix => write!(f, "unix"),
            Separator::Windows => write!(f, "windows"),
        }
    }
}

/// Join `segments` with `sep` and clean the result.
///
/// Behaviour:
/// - Empty segments are skipped, so a trailing `""` never adds a separator.
/// - If no segment is left the result is the empty string.
/// - Otherwise the joined string is passed through [`clean`].
///
/// ```
/// use fullpath::fs_op::path::{join, Separator};
///
/// assert_eq!(join(["home/klundert", "document.txt"], Separator::Unix), "home/klundert/document.txt");
/// assert_eq!(join(["a/", ""], Separator::Unix), "a");
/// assert_eq!(join(["", ""], Separator::Unix), "");
/// ```
pub fn join<I, S>(segments: I, sep: Separator) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    let mut any = false;

    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        if any {
            joined.push(sep.as_char());
        }
        joined.push_str(segment);
        any = true;
    }

    if !any {
        tracing::trace!(%sep, "join: no non-empty segments");
        return String::new();
    }

    let cleaned = clean(&joined, sep);
    tracing::trace!(%sep, raw = %joined, cleaned = %cleaned, "join");
    cleaned
}

/// [`join`] using [`Separator::native`].
pub fn join_native<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join(segments, Separator::native())
}

/// Returns the shortest path equivalent to `path` by pure lexical processing.
///
/// 1. Replace runs of separators with a single `sep`.
/// 2. Eliminate `.` components.
/// 3. Eliminate inner `..` along with the component before it.
/// 4. Drop `..` that directly follows the root (`/..` becomes `/`).
///
/// Trailing separators are removed unless the path is the root, and an
/// empty result becomes `.`.
///
/// ```
/// use fullpath::fs_op::path::{clean, Separator};
///
/// assert_eq!(clean("usr//lib/./gcc/..", Separator::Unix), "usr/lib");
/// assert_eq!(clean("/../usr/", Separator::Unix), "/usr");
/// assert_eq!(clean("a/b\\..", Separator::Windows), "a");
/// ```
pub fn clean(path: &str, sep: Separator) -> String {
    let rooted = path.chars().next().is_some_and(|c| sep.is_separator(c));
    let mut stack: Vec<&str> = Vec::new();

    for component in path.split(|c| sep.is_separator(c)) {
        match component {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&last) if last != ".." => {
                    stack.pop();
                }
                // `..` above the root stays at the root
                _ if rooted => {}
                _ => stack.push(component),
            },
            _ => stack.push(component),
        }
    }

    let sep_str = sep.as_char().to_string();
    let body = stack.join(&sep_str);

    match (rooted, body.is_empty()) {
        (true, _) => format!("{}{}", sep_str, body),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
