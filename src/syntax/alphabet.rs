//! Dabara identifier alphabet and reserved word tables

use std::collections::HashSet;
use std::sync::LazyLock;

use super::Category;

/// Hausa hooked letters accepted in identifiers
pub const HAUSA_LETTERS: [char; 5] = ['ɓ', 'ɗ', 'ƙ', 'ƴ', 'ʔ'];

static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "fara", "ƙare", "kare", "rubuta", "idan", "amma", "ammaina", "maimaita", "ga", "cikin",
        "katse", "ci_gaba", "aiki", "mayar",
    ])
});

static DECLARATIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["var", "naɗa", "nada"]));

static BOOLEANS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["gaskiya", "karya"]));

static BUILTINS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| HashSet::from(["karɓa"]));

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || HAUSA_LETTERS.contains(&c)
}

pub fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Look up a complete identifier in the reserved word tables
pub fn reserved_category(word: &str) -> Option<Category> {
    if KEYWORDS.contains(word) {
        Some(Category::Keyword)
    } else if DECLARATIONS.contains(word) {
        Some(Category::Declaration)
    } else if BOOLEANS.contains(word) {
        Some(Category::Boolean)
    } else if BUILTINS.contains(word) {
        Some(Category::Builtin)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hausa_letters_start_identifiers() {
        for c in HAUSA_LETTERS {
            assert!(is_ident_start(c), "{c} should start an identifier");
        }
        assert!(!is_ident_start('Ɓ'));
        assert!(!is_ident_start('é'));
    }

    #[test]
    fn digits_continue_but_do_not_start() {
        assert!(!is_ident_start('7'));
        assert!(is_ident_char('7'));
        assert!(!is_ident_char('-'));
    }

    #[test]
    fn tables_are_disjoint() {
        let tables = [&*KEYWORDS, &*DECLARATIONS, &*BOOLEANS, &*BUILTINS];
        for (i, a) in tables.iter().enumerate() {
            for b in tables.iter().skip(i + 1) {
                assert!(a.is_disjoint(b));
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(reserved_category("idan"), Some(Category::Keyword));
        assert_eq!(reserved_category("Idan"), None);
        assert_eq!(reserved_category("naɗa"), Some(Category::Declaration));
        assert_eq!(reserved_category("karya"), Some(Category::Boolean));
        assert_eq!(reserved_category("karɓa"), Some(Category::Builtin));
        assert_eq!(reserved_category("kar"), None);
    }
}
