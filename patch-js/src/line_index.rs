use memchr::memchr_iter;

/// Byte offsets at which each line of a text begins: 0 for line 0, then the
/// offset immediately after every line terminator.
pub struct LineIndex {
  line_starts: Vec<usize>,
}

impl LineIndex {
  pub fn new(text: &str) -> LineIndex {
    let mut line_starts = vec![0];
    line_starts.extend(memchr_iter(b'\n', text.as_bytes()).map(|at| at + 1));
    LineIndex { line_starts }
  }

  pub fn line_count(&self) -> usize {
    self.line_starts.len()
  }

  /// Converts a byte offset into a zero-based (line, byte column) pair via
  /// binary search for the greatest recorded line start at or before it.
  pub fn line_col(&self, offset: usize) -> (u32, u32) {
    let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
    ((line as u32), (offset - self.line_starts[line]) as u32)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn single_line_columns_equal_offsets() {
    let index = LineIndex::new("const x = 1;");
    assert_eq!(index.line_count(), 1);
    assert_eq!(index.line_col(0), (0, 0));
    assert_eq!(index.line_col(6), (0, 6));
  }

  #[test]
  fn offsets_after_terminators_start_new_lines() {
    let index = LineIndex::new("ab\ncdef\n\ng");
    assert_eq!(index.line_count(), 4);
    assert_eq!(index.line_col(2), (0, 2));
    assert_eq!(index.line_col(3), (1, 0));
    assert_eq!(index.line_col(6), (1, 3));
    // Offset 8 is the empty line's own position; line 3 starts at offset 9.
    assert_eq!(index.line_col(8), (2, 0));
    assert_eq!(index.line_col(9), (3, 0));
  }

  #[test]
  fn crlf_terminators_count_once() {
    let index = LineIndex::new("ab\r\ncd");
    assert_eq!(index.line_count(), 2);
    assert_eq!(index.line_col(4), (1, 0));
  }
}
