//! Delimited-path segmentation.
//!
//! Paths name nested keys with any non-segment delimiter, so
//! `".poll.user.email"`, `":user:location:zipcode"` and `"user/location"`
//! all address the same shape. A segment keeps word characters plus `-`
//! and `'`; everything else delimits.

/// Split a delimited path into its key segments, skipping empty runs
/// (a leading `.` or doubled delimiters produce none).
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(|c: char| !is_segment_char(c))
        .filter(|segment| !segment.is_empty())
}

fn is_segment_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '\'')
}
