/// Maps `graphql-parser` positions (1-based line, 1-based column counted in
/// chars) to byte offsets within the source they were produced from.
#[derive(Clone, Debug)]
pub struct LineIndex<'src> {
    line_starts: Vec<usize>,
    source: &'src str,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self {
            line_starts,
            source,
        }
    }

    /// Byte offset of `pos`. Positions past the end of a line or of the
    /// source clamp to the nearest valid offset.
    pub fn offset(&self, pos: graphql_parser::Pos) -> usize {
        let line_idx = pos.line.saturating_sub(1);
        let Some(&line_start) = self.line_starts.get(line_idx) else {
            return self.source.len();
        };

        let line = &self.source[line_start..];
        let line = line.split('\n').next().unwrap_or(line);
        let col_bytes: usize = line
            .chars()
            .take(pos.column.saturating_sub(1))
            .map(char::len_utf8)
            .sum();

        line_start + col_bytes
    }
}
