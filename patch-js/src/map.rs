use crate::edit::Edit;
use crate::line_index::LineIndex;
use ahash::HashMap;
use serde::Deserialize;
use serde::Serialize;

/// One debug-map record correlating a generated-text position with an
/// original-source position.
///
/// Lines and columns are zero-based; columns are byte columns. Entries
/// produced by some emitters carry no original position at all; those are
/// representable here and dropped during adjustment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
  pub generated_line: u32,
  pub generated_column: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub original_line: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub original_column: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_id: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

impl MappingEntry {
  pub fn has_original(&self) -> bool {
    self.original_line.is_some() && self.original_column.is_some() && self.source_id.is_some()
  }
}

/// The debug-map data shape this crate reads and produces: ordered mapping
/// entries plus embedded original text per source, indexed by `source_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMap {
  pub mappings: Vec<MappingEntry>,
  #[serde(default)]
  pub sources_content: Vec<Option<String>>,
}

struct LineShift {
  column: u32,
  original_len: u32,
  new_len: u32,
}

/// Produces a copy of `map` whose generated columns are consistent with the
/// text produced by applying `edits` to `pre_edit_text`.
///
/// Edits must each lie within a single line of `pre_edit_text` (replacement
/// text included), so line numbers never move. Entries without a known
/// original position are dropped rather than given invented coordinates.
pub fn adjust_map(map: &PositionMap, pre_edit_text: &str, edits: &[Edit]) -> PositionMap {
  if edits.is_empty() {
    return map.clone();
  }

  let index = LineIndex::new(pre_edit_text);
  let mut shifts_by_line: HashMap<u32, Vec<LineShift>> = HashMap::default();
  for edit in edits {
    let (line, column) = index.line_col(edit.start);
    shifts_by_line.entry(line).or_default().push(LineShift {
      column,
      original_len: edit.original_len() as u32,
      new_len: edit.new_text.len() as u32,
    });
  }
  for shifts in shifts_by_line.values_mut() {
    shifts.sort_by_key(|s| s.column);
  }

  let mut mappings = Vec::with_capacity(map.mappings.len());
  for entry in map.mappings.iter() {
    if !entry.has_original() {
      continue;
    }
    let mut adjusted = entry.clone();
    if let Some(shifts) = shifts_by_line.get(&entry.generated_line) {
      adjusted.generated_column = shifted_column(entry.generated_column, shifts);
    }
    mappings.push(adjusted);
  }

  PositionMap {
    mappings,
    sources_content: map.sources_content.clone(),
  }
}

fn shifted_column(column: u32, shifts: &[LineShift]) -> u32 {
  let mut shift: i64 = 0;
  for s in shifts {
    if s.column + s.original_len <= column {
      shift += s.new_len as i64 - s.original_len as i64;
      continue;
    }
    if s.column < column {
      // The position falls inside a replaced span; snap to the start of the
      // replacement.
      return (s.column as i64 + shift) as u32;
    }
    break;
  }
  (column as i64 + shift) as u32
}
