//! Case-insensitive containment matching.

/// Returns true when either string contains the other, ignoring case.
///
/// An empty string never matches. A missing mix title or an untagged field
/// would otherwise be contained in every string and award points for nothing.
/// Whitespace is ordinary text and follows plain containment.
pub fn texts_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(texts_match("On My Mind", "On My Mind"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(texts_match("ON MY MIND", "on my mind"));
        assert!(texts_match("Diplo", "DIPLO"));
    }

    #[test]
    fn test_containment_either_direction() {
        assert!(texts_match("On My Mind (Extended Mix)", "On My Mind"));
        assert!(texts_match("Diplo", "Diplo; SIDEPIECE"));
    }

    #[test]
    fn test_no_match() {
        assert!(!texts_match("Completely Different Song", "On My Mind"));
        assert!(!texts_match("Unrelated Artist", "Diplo"));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!texts_match("", "anything"));
        assert!(!texts_match("anything", ""));
        assert!(!texts_match("", ""));
    }

    #[test]
    fn test_whitespace_uses_plain_containment() {
        assert!(texts_match(" ", "On My Mind"));
        assert!(texts_match("On My Mind", " "));
        assert!(!texts_match("   ", "On My Mind"));
    }

    #[test]
    fn test_symmetry() {
        let samples = [
            "",
            "  ",
            "Diplo",
            "diplo; sidepiece",
            "On My Mind",
            "ON MY MIND (Extended Mix)",
            "Ünïcödé Artist",
            "Different",
        ];
        for a in samples {
            for b in samples {
                assert_eq!(
                    texts_match(a, b),
                    texts_match(b, a),
                    "asymmetric for {:?} / {:?}",
                    a,
                    b
                );
            }
        }
    }
}
