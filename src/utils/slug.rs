//! Collection name slugification.

use deunicode::deunicode;

/// Convert a collection name into a URL-safe slug
///
/// Transliterates Unicode to ASCII, lowercases, and collapses every run of
/// non-alphanumeric characters into a single dash. Leading and trailing
/// dashes are trimmed.
///
/// # Examples
/// ```
/// use vellum::utils::slug::slugify;
/// assert_eq!(slugify("Book Reviews"), "book-reviews");
/// assert_eq!(slugify("Déjà Vu!"), "deja-vu");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}
