/// Generates the sequence `a, b, …, z, A, …, Z, aa, ab, …` prefixed with a
/// reserved sigil character. No name is ever produced twice.
pub struct NameGenerator {
  sigil: char,
  counter: usize,
}

impl NameGenerator {
  const ALPHABET: &'static [u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

  pub fn new(sigil: char) -> NameGenerator {
    NameGenerator { sigil, counter: 0 }
  }

  pub fn next_name(&mut self) -> String {
    let name = self.encode(self.counter);
    self.counter += 1;
    name
  }

  // Bijective base-52: no digit stands for zero, so every length enumerates
  // fully before the next one starts and no two indices collide. The `- 1`
  // after each division is what makes the numbering bijective rather than
  // ordinary base-52.
  fn encode(&self, mut n: usize) -> String {
    let base = Self::ALPHABET.len();
    let mut digits = Vec::new();
    loop {
      digits.push(Self::ALPHABET[n % base]);
      if n < base {
        break;
      }
      n = n / base - 1;
    }
    let mut name = String::with_capacity(self.sigil.len_utf8() + digits.len());
    name.push(self.sigil);
    name.extend(digits.iter().rev().map(|&b| b as char));
    name
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn names(count: usize) -> Vec<String> {
    let mut gen = NameGenerator::new('$');
    (0..count).map(|_| gen.next_name()).collect()
  }

  #[test]
  fn first_names_walk_the_alphabet() {
    let names = names(53);
    assert_eq!(names[0], "$a");
    assert_eq!(names[25], "$z");
    assert_eq!(names[26], "$A");
    assert_eq!(names[51], "$Z");
    assert_eq!(names[52], "$aa");
  }

  #[test]
  fn rollover_points_have_no_leading_digit_collisions() {
    let mut gen = NameGenerator::new('$');
    let all: Vec<String> = (0..2757).map(|_| gen.next_name()).collect();
    assert_eq!(all[103], "$aZ");
    assert_eq!(all[104], "$ba");
    assert_eq!(all[2755], "$ZZ");
    assert_eq!(all[2756], "$aaa");
  }

  #[test]
  fn long_runs_never_repeat() {
    let mut seen = std::collections::HashSet::new();
    let mut gen = NameGenerator::new('$');
    for _ in 0..10_000 {
      assert!(seen.insert(gen.next_name()));
    }
  }

  #[test]
  fn sigil_is_configurable() {
    let mut gen = NameGenerator::new('_');
    assert_eq!(gen.next_name(), "_a");
  }
}
