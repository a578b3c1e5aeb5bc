use unicode_segmentation::UnicodeSegmentation;

/// A single letter, optionally followed by a period ("J", "J.").
///
/// Initials are never treated as titles, prefixes, suffixes or
/// conjunctions, even when the letter happens to be one ("y", "v").
pub fn is_initial(word: &str) -> bool {
    let mut graphemes = word.graphemes(true);

    match (graphemes.next(), graphemes.next(), graphemes.next()) {
        (Some(first), second, None) => {
            first.chars().next().map_or(false, char::is_alphabetic)
                && second.map_or(true, |s| s == ".")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        assert!(is_initial("J"));
        assert!(is_initial("j"));
        assert!(is_initial("J."));
        assert!(is_initial("É."));
        assert!(is_initial("e\u{301}"));
    }

    #[test]
    fn not_letters() {
        assert!(!is_initial(""));
        assert!(!is_initial("&"));
        assert!(!is_initial("2."));
        assert!(!is_initial("."));
    }

    #[test]
    fn too_long() {
        assert!(!is_initial("Jo"));
        assert!(!is_initial("J.R."));
        assert!(!is_initial("Dr."));
    }
}
