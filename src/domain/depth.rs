//! Running bracket/paren depth across lines.
//!
//! Purely textual: brackets inside string literals or trailing comments are
//! counted like any others.

pub const BRACES: (char, char) = ('{', '}');
pub const PARENS: (char, char) = ('(', ')');

/// `counter + count(open) - count(close)` over `text`.
pub fn update(counter: i32, text: &str, open: char, close: char) -> i32 {
    text.chars().fold(counter, |depth, c| {
        if c == open {
            depth + 1
        } else if c == close {
            depth - 1
        } else {
            depth
        }
    })
}

/// A depth counter bound to one bracket pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthCounter {
    open: char,
    close: char,
    depth: i32,
}

impl DepthCounter {
    pub fn new((open, close): (char, char), seed: i32) -> Self {
        Self {
            open,
            close,
            depth: seed,
        }
    }

    pub fn feed(&mut self, text: &str) -> i32 {
        self.depth = update(self.depth, text, self.open, self.close);
        self.depth
    }

    pub fn is_balanced(&self) -> bool {
        self.depth <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_counts_both_sides() {
        assert_eq!(update(0, "type R interface {", '{', '}'), 1);
        assert_eq!(update(1, "}", '{', '}'), 0);
        assert_eq!(update(0, "f(a, g(b)) (", '(', ')'), 1);
        assert_eq!(update(2, "no brackets", '(', ')'), 2);
    }

    #[test]
    fn test_counter_tracks_nesting() {
        let mut c = DepthCounter::new(BRACES, 0);
        assert_eq!(c.feed("func f() {"), 1);
        assert!(!c.is_balanced());
        assert_eq!(c.feed("  if x { y() }"), 1);
        assert_eq!(c.feed("}"), 0);
        assert!(c.is_balanced());
    }

    #[test]
    fn test_seeded_counter() {
        let mut c = DepthCounter::new(PARENS, 1);
        assert!(!c.is_balanced());
        c.feed("a int) error {");
        assert!(c.is_balanced());
    }

    #[test]
    fn test_counter_balanced_without_opening() {
        let c = DepthCounter::new(BRACES, 0);
        assert!(c.is_balanced());
    }
}
