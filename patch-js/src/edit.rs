/// A single span replacement against an original text.
///
/// Offsets are UTF-8 byte offsets and the span is half-open. Spans within one
/// edit list must be pairwise disjoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
  pub start: usize,
  pub end: usize,
  pub new_text: String,
}

impl Edit {
  pub fn new(start: usize, end: usize, new_text: impl Into<String>) -> Edit {
    Edit {
      start,
      end,
      new_text: new_text.into(),
    }
  }

  pub fn original_len(&self) -> usize {
    self.end - self.start
  }
}

/// Applies `edits` to `source` in a single linear pass, sorting `edits` by
/// start offset in place first.
///
/// Overlapping or inverted spans are a caller contract violation and panic.
pub fn apply_edits(source: &str, edits: &mut [Edit]) -> String {
  if edits.is_empty() {
    return source.to_string();
  }
  edits.sort_by_key(|e| e.start);
  let mut out = String::with_capacity(source.len());
  let mut cur = 0;
  for edit in edits.iter() {
    assert!(
      edit.start >= cur && edit.end >= edit.start && edit.end <= source.len(),
      "edit spans must be disjoint and within the source"
    );
    out.push_str(&source[cur..edit.start]);
    out.push_str(&edit.new_text);
    cur = edit.end;
  }
  out.push_str(&source[cur..]);
  out
}
