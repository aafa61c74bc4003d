//! Genre alias table and preferred genre identifiers.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Catalog genre ids that earn the genre bonus.
///
/// 5 House, 12 Deep House, 11 Tech House, 39 Dance, 17 Electro House,
/// 65 Future House, 91 Bass House.
pub const PREFERRED_GENRE_IDS: &[i64] = &[5, 12, 11, 39, 17, 65, 91];

static GENRE_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("House", "Pure House"), ("Dance", "Pure Dance")])
});

/// Map a raw catalog genre label to its canonical name.
///
/// Labels without an alias are returned unchanged.
pub fn normalize_genre(raw: &str) -> String {
    GENRE_ALIASES
        .get(raw)
        .map(|alias| alias.to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Whether a candidate's genre id is in the preferred set.
pub fn is_preferred_genre(genre_id: Option<i64>) -> bool {
    genre_id.is_some_and(|id| PREFERRED_GENRE_IDS.contains(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_lookup() {
        assert_eq!(normalize_genre("House"), "Pure House");
        assert_eq!(normalize_genre("Dance"), "Pure Dance");
    }

    #[test]
    fn test_unknown_genre_passes_through() {
        assert_eq!(normalize_genre("Techno"), "Techno");
        assert_eq!(normalize_genre(""), "");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(normalize_genre("house"), "house");
    }

    #[test]
    fn test_normalize_idempotent() {
        for genre in ["House", "Dance", "Techno", "Pure House", "Deep House", ""] {
            let once = normalize_genre(genre);
            assert_eq!(normalize_genre(&once), once, "not idempotent for {:?}", genre);
        }
    }

    #[test]
    fn test_preferred_genres() {
        for id in [5, 12, 11, 39, 17, 65, 91] {
            assert!(is_preferred_genre(Some(id)));
        }
        assert!(!is_preferred_genre(Some(999)));
        assert!(!is_preferred_genre(Some(6)));
        assert!(!is_preferred_genre(None));
    }
}
