//! Dot-segment removal (RFC 3986 §5.2.3).
//!
//! The algorithm walks the path left to right, keeping the unprocessed
//! suffix of the input as a slice and appending kept segments to an output
//! buffer. At each step the first matching rule applies:
//!
//! | Rule | Input begins with | Effect |
//! |------|-------------------|--------|
//! | A | `../` or `./` | drop the prefix |
//! | B | `/./` or is `/.` | replace the prefix with `/` |
//! | C | `/../` or is `/..` | replace the prefix with `/`, drop the last output segment |
//! | D | is `.` or `..` | drop everything |
//! | E | anything else | move the first segment, with its leading `/`, to the output |
//!
//! Every rule shortens the input, so the loop ends after at most one step
//! per input character. Percent-encoded dots (`%2E`) are ordinary
//! characters here.

use crate::error::Result;
use crate::input::UriInput;
use crate::uri::Uri;

/// Removes `.` and `..` segments from a URI's path.
///
/// The input is coerced as described in [`UriInput::coerce`]. Only the path
/// changes: scheme, authority, query and fragment are kept exactly as
/// written, including their case and any default port. A [`Uri`] passed by
/// reference is not modified; the result is a new value.
///
/// # Errors
///
/// Returns [`Error::MissingArgument`](crate::Error::MissingArgument) if the
/// input is missing and [`Error::Parse`](crate::Error::Parse) if a string
/// input cannot be parsed.
///
/// # Examples
///
/// ```
/// use urinorm::remove_dot_segments;
///
/// let uri = remove_dot_segments("HTTPS://www.Example.com:443/../test/../foo/index.html")?;
/// assert_eq!(uri.to_string(), "HTTPS://www.Example.com:443/foo/index.html");
///
/// assert!(remove_dot_segments(None::<&str>).is_err());
/// # Ok::<(), urinorm::Error>(())
/// ```
pub fn remove_dot_segments<'a>(input: impl Into<UriInput<'a>>) -> Result<Uri> {
    let uri = input.into().coerce()?;
    let result = uri.without_dot_segments()?;
    if result.path() != uri.path() {
        log::debug!("removed dot segments: {:?} -> {:?}", uri.path(), result.path());
    }
    Ok(result)
}

/// Removes `.` and `..` segments from a path string.
///
/// Absolute and relative paths go through the same rules. A `..` with no
/// segment left to remove is dropped silently. When `..` removes the first
/// segment of a relative path, the `/` after the `..` is dropped with it, so
/// `a/../b` becomes `b`. If the segment after the `..` is empty, one `/`
/// remains and the result starts with it: `a/..//b` becomes `/b`.
///
/// # Examples
///
/// ```
/// use urinorm::remove_dot_segments_from_path;
///
/// assert_eq!(remove_dot_segments_from_path("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments_from_path("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments_from_path("/.."), "/");
/// assert_eq!(remove_dot_segments_from_path("../test/../foo/index.html"), "foo/index.html");
/// ```
#[must_use]
pub fn remove_dot_segments_from_path(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input
            .strip_prefix("../")
            .or_else(|| input.strip_prefix("./"))
        {
            // A
            input = rest;
        } else if input.starts_with("/./") || input == "/." {
            // B: "/./x" -> "/x", "/." -> "/"
            input = if input.len() == 2 { &input[..1] } else { &input[2..] };
        } else if input.starts_with("/../") || input == "/.." {
            // C: "/../x" -> "/x", "/.." -> "/"
            input = if input.len() == 3 { &input[..1] } else { &input[3..] };
            if pop_last_segment(&mut output) {
                // The removed segment was the leading segment of a relative
                // path; drop the slash that followed the "..".
                input = &input[1..];
            }
        } else if input == "." || input == ".." {
            // D
            input = "";
        } else {
            // E
            let start = usize::from(input.starts_with('/'));
            let end = input[start..].find('/').map_or(input.len(), |i| start + i);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }

    output
}

/// Truncates `output` at its last `/`.
///
/// Returns `true` when `output` had no `/` but was non-empty, meaning the
/// whole buffer was a single relative segment and has been cleared.
fn pop_last_segment(output: &mut String) -> bool {
    match output.rfind('/') {
        Some(slash) => {
            output.truncate(slash);
            false
        }
        None => {
            let was_relative = !output.is_empty();
            output.clear();
            was_relative
        }
    }
}
