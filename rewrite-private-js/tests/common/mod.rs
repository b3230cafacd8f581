use rewrite_private_js::Loc;
use rewrite_private_js::NodeKind;
use rewrite_private_js::SyntaxNode;

pub struct TestNode {
  pub kind: NodeKind,
  pub loc: Loc,
  pub children: Vec<TestNode>,
}

impl TestNode {
  pub fn new(kind: NodeKind, loc: Loc, children: Vec<TestNode>) -> TestNode {
    TestNode {
      kind,
      loc,
      children,
    }
  }

  pub fn leaf(kind: NodeKind, loc: Loc) -> TestNode {
    TestNode::new(kind, loc, Vec::new())
  }
}

impl SyntaxNode for TestNode {
  fn kind(&self) -> NodeKind {
    self.kind
  }

  fn loc(&self) -> Loc {
    self.loc
  }

  fn children(&self) -> impl Iterator<Item = &Self> {
    self.children.iter()
  }
}
