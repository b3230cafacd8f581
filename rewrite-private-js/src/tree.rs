use crate::loc::Loc;

/// Node classification the rewrite requires of the parser's tree. Everything
/// the pass does not care about is `Other`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NodeKind {
  /// `class` declaration statement. Its `Member` nodes must be direct
  /// children of the class node.
  ClassDecl,
  /// `class` expression, same child convention as `ClassDecl`.
  ClassExpr,
  /// A direct member of a class body: field, method, or accessor, static or
  /// not. The member's name node must be its first child.
  Member,
  /// A `#name` private identifier token; its span includes the sigil.
  PrivateName,
  /// A binary `in` expression; its children must be `[lhs, rhs]`.
  InExpr,
  Other,
}

impl NodeKind {
  pub fn is_class(self) -> bool {
    matches!(self, NodeKind::ClassDecl | NodeKind::ClassExpr)
  }
}

/// Read-only capability interface over the parser collaborator's syntax tree.
///
/// The pass never constructs or mutates nodes; it needs a kind tag, a byte
/// span into the source text it was parsed from, and child enumeration in
/// document order. Any parser able to present its tree this way can drive the
/// rewrite.
pub trait SyntaxNode: Sized {
  fn kind(&self) -> NodeKind;

  fn loc(&self) -> Loc;

  fn children(&self) -> impl Iterator<Item = &Self>;
}
