use crate::loc::Loc;
use crate::scope::ScopeStack;
use crate::tree::NodeKind;
use crate::tree::SyntaxNode;
use memchr::memchr;
use patch_js::Edit;

/// The reserved leading character of a private-member identifier.
pub const PRIVATE_SIGIL: u8 = b'#';

pub struct WalkOutput {
  pub edits: Vec<Edit>,
  pub class_count: usize,
  pub field_count: usize,
}

/// Walks `root` depth-first in document order, accumulating one edit per
/// resolvable private-member occurrence.
pub fn walk_tree<N: SyntaxNode>(source: &str, root: &N, name_sigil: char) -> WalkOutput {
  let mut walker = Walker {
    source,
    scopes: ScopeStack::new(name_sigil),
    edits: Vec::new(),
    class_count: 0,
    field_count: 0,
  };
  // Private members are rare across a whole bundle; skip the walk entirely
  // when the sigil never appears in the text.
  if memchr(PRIVATE_SIGIL, source.as_bytes()).is_some() {
    walker.visit(root);
  }
  WalkOutput {
    edits: walker.edits,
    class_count: walker.class_count,
    field_count: walker.field_count,
  }
}

fn node_text<'a, N: SyntaxNode>(source: &'a str, node: &N) -> &'a str {
  let Loc(start, end) = node.loc();
  &source[start..end]
}

struct Walker<'a> {
  source: &'a str,
  scopes: ScopeStack,
  edits: Vec<Edit>,
  class_count: usize,
  field_count: usize,
}

impl<'a> Walker<'a> {
  fn visit<N: SyntaxNode>(&mut self, node: &N) {
    match node.kind() {
      kind if kind.is_class() => self.visit_class(node),
      NodeKind::InExpr => self.visit_in_expr(node),
      NodeKind::PrivateName => self.visit_private_name(node),
      _ => {
        for child in node.children() {
          self.visit(child);
        }
      }
    }
  }

  /// Registers the class's own private members before descending, so that
  /// every occurrence in the body (including inside nested classes) resolves
  /// to its nearest declaring class.
  fn visit_class<N: SyntaxNode>(&mut self, node: &N) {
    self.class_count += 1;
    let mut member_names = Vec::new();
    for member in node.children() {
      if member.kind() != NodeKind::Member {
        continue;
      }
      let Some(name) = member.children().next() else {
        continue;
      };
      if name.kind() == NodeKind::PrivateName {
        member_names.push(node_text(self.source, name));
      }
    }
    self.field_count += self.scopes.enter_class(member_names.into_iter());
    for child in node.children() {
      self.visit(child);
    }
    self.scopes.exit_class();
  }

  /// A brand check (`#name in expr`) rewrites its left operand to a quoted
  /// string literal: once the member is an ordinary property, presence is
  /// tested with a string key. The right operand is walked as usual.
  fn visit_in_expr<N: SyntaxNode>(&mut self, node: &N) {
    let mut children = node.children();
    let (Some(lhs), Some(rhs)) = (children.next(), children.next()) else {
      for child in node.children() {
        self.visit(child);
      }
      return;
    };
    if lhs.kind() == NodeKind::PrivateName {
      let name = node_text(self.source, lhs);
      if let Some(replacement) = self.scopes.resolve(name) {
        // Generated names are sigil + ASCII letters, so no escaping arises.
        let quoted = format!("'{replacement}'");
        let Loc(start, end) = lhs.loc();
        self.edits.push(Edit::new(start, end, quoted));
      }
    } else {
      self.visit(lhs);
    }
    self.visit(rhs);
    for extra in children {
      self.visit(extra);
    }
  }

  /// A bare private-member occurrence (declaration, member access, call
  /// target) rewrites to the bare replacement identifier. Occurrences no
  /// enclosing class declares are left exactly as written.
  fn visit_private_name<N: SyntaxNode>(&mut self, node: &N) {
    let name = node_text(self.source, node);
    if let Some(replacement) = self.scopes.resolve(name) {
      let Loc(start, end) = node.loc();
      self.edits.push(Edit::new(start, end, replacement.to_string()));
    }
  }
}
