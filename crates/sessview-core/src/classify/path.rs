//! Extension extraction from the URL path.

/// Returns the last segment of the URL path, without query or fragment.
///
/// Returns `None` if the URL cannot be parsed or the last segment is empty
/// (root path, trailing slash).
pub fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    segment_of(&parsed).map(str::to_string)
}

/// Lower-cased substring after the final `.` of the last path segment.
pub fn extension_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    extension_of(&parsed)
}

pub(super) fn extension_of(parsed: &url::Url) -> Option<String> {
    let segment = segment_of(parsed)?;
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn segment_of(parsed: &url::Url) -> Option<&str> {
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment)
}
