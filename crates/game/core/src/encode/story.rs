/// Encodes a validated story text as raw ASCII; its length lives only in the index.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Returns the first byte that the engine's text renderer cannot display.
///
/// Printable ASCII and the newline are allowed.
pub fn first_unprintable(text: &str) -> Option<(usize, char)> {
    text.char_indices()
        .find(|&(_, c)| !(matches!(c, ' '..='~') || c == '\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_raw_bytes() {
        assert_eq!(encode_text("Hello"), b"Hello");
        assert_eq!(encode_text("a\nb"), b"a\nb");
        assert!(encode_text("").is_empty());
    }

    #[test]
    fn finds_unprintable_characters() {
        assert_eq!(first_unprintable("The glade.\nA path."), None);
        assert_eq!(first_unprintable("tab\there"), Some((3, '\t')));
        assert_eq!(first_unprintable("café"), Some((3, 'é')));
    }
}
