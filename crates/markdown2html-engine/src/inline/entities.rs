use std::borrow::Cow;

/// Decodes HTML entity and numeric character references, then escapes the
/// characters that are significant in HTML text (`&`, `<`, `>`, `"`).
///
/// NUL characters, whether literal or produced by a reference such as
/// `&#0;`, become U+FFFD.
pub fn escape_entities(content: &str) -> String {
    let decoded = html_escape::decode_html_entities(content);
    let sanitized: Cow<'_, str> = if decoded.contains('\0') {
        Cow::Owned(decoded.replace('\0', "\u{FFFD}"))
    } else {
        decoded
    };
    html_escape::encode_double_quoted_attribute(sanitized.as_ref()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a < b & c > d", "a &lt; b &amp; c &gt; d")]
    #[case("say \"hi\"", "say &quot;hi&quot;")]
    #[case("&amp;", "&amp;")]
    #[case("&copy; 2024", "\u{a9} 2024")]
    #[case("&#35; &#x41;", "# A")]
    #[case("&notanentity;", "&amp;notanentity;")]
    #[case("plain", "plain")]
    fn escapes_after_decoding(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_entities(input), expected);
    }

    #[test]
    fn nul_becomes_replacement_character() {
        assert_eq!(escape_entities("a\0b"), "a\u{FFFD}b");
    }
}
