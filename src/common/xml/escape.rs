use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Attribute values need quotes escaped as well, element text does not.
static ATTR_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML attribute escaper")
});

static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">"])
        .expect("Failed to build XML text escaper")
});

/// Escape a value for use inside an XML attribute.
///
/// # Examples
///
/// ```
/// use ethereal_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    ATTR_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Escape a value for use as XML element text (`<a:t>` runs).
#[inline]
pub fn escape_text(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"])
}

/// Resolve the name of an entity reference (the text between `&` and `;`)
/// to the character it stands for.
///
/// Handles the five predefined entities and decimal (`#10`) or hexadecimal
/// (`#x2022`) character references. Returns `None` for anything else,
/// including references to code points that are not valid characters.
///
/// ```
/// use ethereal_deck::common::xml::resolve_entity;
/// assert_eq!(resolve_entity("lt"), Some('<'));
/// assert_eq!(resolve_entity("#10"), Some('\n'));
/// assert_eq!(resolve_entity("#x2022"), Some('•'));
/// assert_eq!(resolve_entity("invalid"), None);
/// ```
pub fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_keeps_quotes() {
        assert_eq!(
            escape_text(r#"AI Art & "NFT" <500KB"#),
            r#"AI Art &amp; "NFT" &lt;500KB"#
        );
    }

    #[test]
    fn test_emoji_untouched() {
        assert_eq!(escape_text("🎨 Ethereal Canvas"), "🎨 Ethereal Canvas");
    }

    #[test]
    fn test_resolve_predefined_entities() {
        assert_eq!(resolve_entity("amp"), Some('&'));
        assert_eq!(resolve_entity("gt"), Some('>'));
        assert_eq!(resolve_entity("quot"), Some('"'));
        assert_eq!(resolve_entity("apos"), Some('\''));
    }

    #[test]
    fn test_resolve_char_references() {
        assert_eq!(resolve_entity("#38"), Some('&'));
        assert_eq!(resolve_entity("#X1F3A8"), Some('🎨'));
        assert_eq!(resolve_entity("#xD800"), None);
        assert_eq!(resolve_entity("#"), None);
        assert_eq!(resolve_entity("#x"), None);
        assert_eq!(resolve_entity("#-5"), None);
        assert_eq!(resolve_entity("nbsp"), None);
    }
}
