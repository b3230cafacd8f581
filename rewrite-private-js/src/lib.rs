use std::time::Duration;
use std::time::Instant;

pub use patch_js::adjust_map;
pub use patch_js::apply_edits;
pub use patch_js::Edit;
pub use patch_js::LineIndex;
pub use patch_js::MappingEntry;
pub use patch_js::PositionMap;

pub use crate::loc::Loc;
pub use crate::tree::NodeKind;
pub use crate::tree::SyntaxNode;
pub use crate::walk::PRIVATE_SIGIL;

mod loc;
mod name;
mod scope;
mod tree;
mod walk;

/// Options controlling replacement-name synthesis.
#[derive(Clone, Debug)]
pub struct RewriteOptions {
  /// Leading character of every synthesized replacement name. The surrounding
  /// bundling policy must reserve it away from ordinary identifiers; the pass
  /// itself does not verify that convention.
  pub name_sigil: char,
}

impl Default for RewriteOptions {
  fn default() -> Self {
    Self { name_sigil: '$' }
  }
}

/// Result of one rewrite pass over a single source text.
#[derive(Clone, Debug)]
pub struct RewriteResult {
  /// The rewritten text.
  pub code: String,
  /// Classes entered during the walk.
  pub class_count: usize,
  /// Distinct private members declared across all classes.
  pub field_count: usize,
  /// Number of edits applied.
  pub edit_count: usize,
  /// Wall-clock duration of the whole pass.
  pub elapsed: Duration,
  /// The applied edits in ascending start order. Retain these if the debug
  /// map must be adjusted afterwards with [`adjust_map`].
  pub edits: Vec<Edit>,
}

/// Rewrites every resolvable class-private member (`#name`) in `source` into
/// a short, globally unique ordinary property name, with default options.
///
/// `root` must be the parser collaborator's tree over exactly `source`; node
/// spans index into it. Occurrences no enclosing class declares are left
/// untouched, and a text without the `#` sigil is returned unchanged without
/// walking the tree at all.
pub fn rewrite<N: SyntaxNode>(source: &str, root: &N) -> RewriteResult {
  rewrite_with_options(&RewriteOptions::default(), source, root)
}

/// See [`rewrite`].
pub fn rewrite_with_options<N: SyntaxNode>(
  options: &RewriteOptions,
  source: &str,
  root: &N,
) -> RewriteResult {
  let started = Instant::now();
  let output = walk::walk_tree(source, root, options.name_sigil);
  let mut edits = output.edits;
  let code = apply_edits(source, &mut edits);
  RewriteResult {
    code,
    class_count: output.class_count,
    field_count: output.field_count,
    edit_count: edits.len(),
    elapsed: started.elapsed(),
    edits,
  }
}
