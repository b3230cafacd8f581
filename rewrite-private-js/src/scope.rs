use crate::name::NameGenerator;
use ahash::HashMap;

/// Replacement names for one class's direct private members.
#[derive(Default)]
struct ClassScope {
  names: HashMap<String, String>,
}

/// Lexical stack of class scopes, innermost last, owning the invocation-local
/// name generator. Depth equals the current class nesting level.
pub struct ScopeStack {
  scopes: Vec<ClassScope>,
  names: NameGenerator,
}

impl ScopeStack {
  pub fn new(name_sigil: char) -> ScopeStack {
    ScopeStack {
      scopes: Vec::new(),
      names: NameGenerator::new(name_sigil),
    }
  }

  /// Pushes a scope for a class, assigning a fresh replacement name to each
  /// distinct member name. Repeated declarations of one name (a get/set
  /// accessor pair) share a single slot.
  ///
  /// Returns how many distinct members the class declared.
  pub fn enter_class<'a>(&mut self, members: impl Iterator<Item = &'a str>) -> usize {
    let mut scope = ClassScope::default();
    for member in members {
      if !scope.names.contains_key(member) {
        scope.names.insert(member.to_string(), self.names.next_name());
      }
    }
    let declared = scope.names.len();
    self.scopes.push(scope);
    declared
  }

  /// Nearest-enclosing-class lookup, innermost scope first.
  pub fn resolve(&self, name: &str) -> Option<&str> {
    self
      .scopes
      .iter()
      .rev()
      .find_map(|scope| scope.names.get(name).map(String::as_str))
  }

  pub fn exit_class(&mut self) {
    self.scopes.pop();
  }
}
