//! Name ordering for the client list.
//!
//! Names sort the way a reader expects: case and accents do not move a name
//! away from its unaccented spelling (`álvaro` sits with `Alvaro`, before
//! `Bruno`). Ties are broken the way `localeCompare` does: an unaccented
//! spelling sorts before an accented one, then lowercase before uppercase
//! (`ana` before `Ana`). The raw text settles anything left, so the result is
//! total and repeatable.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// The primary sort key: decomposed, marks removed, lowercased.
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| swap_case(a).cmp(&swap_case(b)))
        .then_with(|| a.cmp(b))
}

// ASCII and most scripts order uppercase first; swapping flips that.
fn swap_case(s: &str) -> String {
    s.chars()
        .flat_map(|c| -> Box<dyn Iterator<Item = char>> {
            if c.is_uppercase() {
                Box::new(c.to_lowercase())
            } else {
                Box::new(c.to_uppercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| compare_names(a, b));
        names
    }

    #[test]
    fn ignores_case() {
        assert_eq!(sorted(&["bruno", "Ana", "carla"]), vec!["Ana", "bruno", "carla"]);
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(
            sorted(&["Bruno", "Álvaro", "Alberto"]),
            vec!["Alberto", "Álvaro", "Bruno"]
        );
        assert_eq!(sorted(&["Joao", "João", "Joana"]), vec!["Joana", "Joao", "João"]);
    }

    #[test]
    fn lowercase_sorts_before_uppercase() {
        assert_eq!(compare_names("ana", "Ana"), Ordering::Less);
        assert_eq!(sorted(&["Ana", "ANA", "ana"]), vec!["ana", "Ana", "ANA"]);
        assert_eq!(compare_names("Ana", "Ana"), Ordering::Equal);
    }

    #[test]
    fn unaccented_sorts_before_accented() {
        assert_eq!(sorted(&["José", "Jose", "jose"]), vec!["jose", "Jose", "José"]);
    }
}
