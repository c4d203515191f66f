use std::ops::Range;

/// A cursor walking the source line by line.
pub(crate) struct Cursor<'a> {
    /// The index position of the start of the next line.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(source: &'a str) -> Self {
        Self {
            index: 0,
            source,
        }
    }

    pub(crate) const fn is_end(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Determines the end of the current line and handles CRLF (\r\n) correctly.
    ///
    /// Returns a tuple `(consumed_end, content_end)` of absolute byte indices where:
    /// - `consumed_end` is just after the line feed, or the end of the source.
    /// - `content_end` is where the line content ends (exclusive), before `\r\n` or `\n`.
    fn current_line_bounds(&self) -> (usize, usize) {
        let rest = &self.source[self.index..];
        let Some(lf) = rest.find('\n') else {
            return (self.source.len(), self.source.len());
        };
        let content_end = if rest[..lf].ends_with('\r') {
            self.index + lf - 1
        } else {
            self.index + lf
        };
        (self.index + lf + 1, content_end)
    }

    /// Moves the cursor through the next line, and returns its content without the line
    /// terminator together with its range.
    pub(crate) fn next_line(&mut self) -> Option<(Range<usize>, &'a str)> {
        if self.is_end() {
            return None;
        }
        let (consumed_end, content_end) = self.current_line_bounds();
        let range = self.index..content_end;
        self.index = consumed_end;
        Some((range.clone(), &self.source[range]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line_crlf() {
        const SOURCE: &str = "osu file format v14\r\n\r\n[General]\r\nMode: 0";

        let mut cursor = Cursor::new(SOURCE);
        assert_eq!(cursor.next_line(), Some((0..19, "osu file format v14")));
        assert_eq!(cursor.next_line(), Some((21..21, "")));
        assert_eq!(cursor.next_line(), Some((23..32, "[General]")));
        assert_eq!(cursor.next_line(), Some((34..41, "Mode: 0")));
        assert!(cursor.is_end());
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_next_line_keeps_leading_spaces() {
        const SOURCE: &str = "Sprite,Foreground\n _F,0,0,1000,0,1\n";

        let mut cursor = Cursor::new(SOURCE);
        assert_eq!(cursor.next_line().map(|(_, line)| line), Some("Sprite,Foreground"));
        assert_eq!(cursor.next_line().map(|(_, line)| line), Some(" _F,0,0,1000,0,1"));
        assert_eq!(cursor.next_line(), None);
    }
}
