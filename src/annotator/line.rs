//! Physical lines of a source text and offset-to-line lookup.

/// One physical line. `start` and `end` are character offsets into the
/// source; `end` stops before the terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    /// 0-based line index.
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
    /// `"\n"`, `"\r\n"`, a lone `"\r"` at end of input, or `""` for a last line
    /// without terminator.
    pub terminator: &'a str,
}

impl LineRecord<'_> {
    /// 1-based number as shown to readers.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Offset of the first character of the following line.
    pub fn next_start(&self) -> usize {
        self.end + self.terminator.chars().count()
    }
}

/// Lines of one text, ordered by start offset.
#[derive(Debug, Clone, Default)]
pub struct LineIndex<'a> {
    lines: Vec<LineRecord<'a>>,
}

impl<'a> LineIndex<'a> {
    /// Splits `source` on `\n`. A trailing `\r` is stripped from each line's
    /// text. Empty input has no lines and a final terminator does not open an
    /// extra empty line.
    #[tracing::instrument(level = "debug", skip(source), fields(bytes = source.len()))]
    pub fn new(source: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        for (index, piece) in source.split_inclusive('\n').enumerate() {
            let body = piece.strip_suffix('\n').unwrap_or(piece);
            let text = body.strip_suffix('\r').unwrap_or(body);
            let end = start + text.chars().count();
            let terminator = &piece[text.len()..];
            lines.push(LineRecord {
                index,
                start,
                end,
                text,
                terminator,
            });
            start = end + terminator.chars().count();
        }
        tracing::debug!(lines = lines.len(), "indexed source lines");
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[LineRecord<'a>] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&LineRecord<'a>> {
        self.lines.get(index)
    }

    /// Index of the line whose span `[start, next_start)` holds `offset`,
    /// found by binary search over line starts.
    pub fn line_of(&self, offset: usize) -> Option<usize> {
        let following = self.lines.partition_point(|line| line.start <= offset);
        let index = following.checked_sub(1)?;
        let line = &self.lines[index];
        (offset < line.next_start()).then_some(index)
    }
}
