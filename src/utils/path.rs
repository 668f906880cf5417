//! URL path joining utilities.

/// Join two slash-delimited path strings into one absolute URL path
///
/// Both inputs are split on `/`, empty segments are dropped, and the
/// remaining segments are rejoined under a single leading slash. Inputs
/// may carry any mix of leading, trailing, or doubled slashes.
///
/// # Examples
/// ```
/// use vellum::utils::path::path_join;
/// assert_eq!(path_join("/a/", "/b/c"), "/a/b/c");
/// assert_eq!(path_join("", ""), "/");
/// assert_eq!(path_join("posts", "hello-world"), "/posts/hello-world");
/// ```
#[inline]
pub fn path_join(path: &str, sub_path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .chain(sub_path.split('/'))
        .filter(|s| !s.is_empty())
        .collect();

    format!("/{}", segments.join("/"))
}
