/// A single line of the input, newline included if present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte offset of the line start within the text it was split from.
    pub start: usize,
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Line text without its trailing newline.
    pub fn content(&self) -> &'a str {
        self.text.strip_suffix('\n').unwrap_or(self.text)
    }

    /// Blank means nothing but spaces and tabs.
    pub fn is_blank(&self) -> bool {
        self.content().chars().all(|c| c == ' ' || c == '\t')
    }
}

/// Returns an iterator over lines with their byte offsets.
///
/// Newlines stay attached to their line so offsets add up to the input length.
pub fn lines_with_offsets(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    let mut offset = 0usize;
    text.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef { start, text: line }
    })
}

pub fn first_line(text: &str) -> Option<LineRef<'_>> {
    lines_with_offsets(text).next()
}
