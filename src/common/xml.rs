//! XML helpers shared by the writer and reader modules.

/// Escape XML special characters.
#[inline]
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Unescape the five standard XML entities.
///
/// `&amp;` is replaced last so that `&amp;lt;` yields the literal `&lt;`.
#[inline]
pub fn unescape_xml(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_unescape_xml() {
        assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
        assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
        assert_eq!(unescape_xml(&escape_xml("a<'&\">b")), "a<'&\">b");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_escape_round_trips(s in "\\PC{0,64}") {
                prop_assert_eq!(unescape_xml(&escape_xml(&s)), s);
            }

            #[test]
            fn prop_escaped_text_has_no_markup(s in "\\PC{0,64}") {
                let escaped = escape_xml(&s);
                prop_assert!(!escaped.contains('<'));
                prop_assert!(!escaped.contains('>'));
                prop_assert!(!escaped.contains('"'));
            }
        }
    }
}
