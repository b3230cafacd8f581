mod edit;
mod line_index;
mod map;

pub use edit::apply_edits;
pub use edit::Edit;
pub use line_index::LineIndex;
pub use map::adjust_map;
pub use map::MappingEntry;
pub use map::PositionMap;
