/// Trait extension utility for [`str`].
pub trait StrExtension {
    /// Returns `true` if `needle` is a prefix of the string regardless of its case.
    fn starts_with_ignore_case(&self, needle: &str) -> bool;

    /// Returns a string slice with the prefix removed regardless of its case.
    fn strip_prefix_ignore_case(&self, prefix: &str) -> Option<&Self>;

    /// Splits `Key: value` into the trimmed key and the trimmed value. Only the first colon
    /// separates them, so values may contain colons.
    fn split_key_value(&self) -> Option<(&Self, &Self)>;
}

impl StrExtension for str {
    fn starts_with_ignore_case(&self, needle: &str) -> bool {
        let n = needle.len();
        self.len() >= n && self.is_char_boundary(n) && needle.eq_ignore_ascii_case(&self[..n])
    }

    fn strip_prefix_ignore_case(&self, prefix: &str) -> Option<&Self> {
        self.starts_with_ignore_case(prefix)
            .then(|| &self[prefix.len()..])
            .filter(|s| !s.is_empty())
    }

    fn split_key_value(&self) -> Option<(&Self, &Self)> {
        self.split_once(':')
            .map(|(key, value)| (key.trim(), value.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_ignore_case() {
        assert_eq!(
            "osu file format v14".strip_prefix_ignore_case("OSU FILE FORMAT V"),
            Some("14")
        );
        assert_eq!("osu file format v".strip_prefix_ignore_case("osu file format v"), None);
        assert_eq!("osu".strip_prefix_ignore_case("osu file format v"), None);
    }

    #[test]
    fn test_split_key_value() {
        assert_eq!(
            "AudioFilename:  song.mp3 ".split_key_value(),
            Some(("AudioFilename", "song.mp3"))
        );
        assert_eq!(
            "Title:Re: Zero".split_key_value(),
            Some(("Title", "Re: Zero"))
        );
        assert_eq!("Bookmarks".split_key_value(), None);
    }
}
