//! Link utilities.
//!
//! - Link type detection (external vs document path)
//! - Fragment splitting

/// Schemes without an authority (`//`) that still name an external target.
const OPAQUE_SCHEMES: &[&str] = &["mailto", "tel", "sms", "data"];

/// Check if a link is external (`scheme://...` or `mailto:`, `tel:`, ...)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
/// - Be followed by `//`, or be one of the opaque schemes
///
/// A bare `a:b.md` is a document path.
///
/// # Examples
/// ```
/// use docplan::utils::path::is_external_link;
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("guide/install.md"));
/// assert!(!is_external_link("a:b.md"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    let Some((scheme, rest)) = link.split_once(':') else {
        return false;
    };
    let valid = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid
        && (rest.starts_with("//")
            || OPAQUE_SCHEMES
                .iter()
                .any(|known| scheme.eq_ignore_ascii_case(known)))
}

/// Split a link into path and fragment parts
///
/// # Returns
/// A tuple of (path, fragment) where fragment is empty string if no `#` found
///
/// # Examples
/// ```
/// use docplan::utils::path::split_path_fragment;
/// assert_eq!(split_path_fragment("guide.md#install"), ("guide.md", "install"));
/// assert_eq!(split_path_fragment("guide.md"), ("guide.md", ""));
/// ```
#[inline]
pub fn split_path_fragment(link: &str) -> (&str, &str) {
    link.split_once('#').unwrap_or((link, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(is_external_link("tel:+1234567890"));
        assert!(!is_external_link("/about.md"));
        assert!(!is_external_link("./file.md"));
        assert!(!is_external_link("#section"));
        assert!(!is_external_link("notes/a:b.md"));
        assert!(!is_external_link("a:b.md"));
        assert!(!is_external_link("c:notes.md"));
        assert!(is_external_link("MAILTO:user@example.com"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("about.md#team"), ("about.md", "team"));
        assert_eq!(split_path_fragment("about.md"), ("about.md", ""));
        assert_eq!(split_path_fragment("#section"), ("", "section"));
    }
}
