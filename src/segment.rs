use super::word::Pieces;
use compact_str::CompactString;
use smallvec::SmallVec;

/// The non-empty, trimmed comma-separated segments of a name.
pub fn comma_segments(text: &str) -> SmallVec<[&str; 3]> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// The whitespace-separated pieces of a segment, with stray commas trimmed.
pub fn pieces(segment: &str) -> Pieces {
    segment
        .split_whitespace()
        .map(|piece| piece.trim_matches(','))
        .filter(|piece| !piece.is_empty())
        .map(CompactString::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments() {
        assert_eq!(
            vec!["Smith", "John", "Jr."],
            comma_segments(" Smith ,John,, Jr., ").to_vec()
        );
        assert!(comma_segments(" , ").is_empty());
    }

    #[test]
    fn split_pieces() {
        let pieces = pieces("  John\tQ.  Smith, ");
        let pieces: Vec<&str> = pieces.iter().map(CompactString::as_str).collect();
        assert_eq!(vec!["John", "Q.", "Smith"], pieces);
    }

    #[test]
    fn lone_commas_vanish() {
        assert!(pieces(", ,,").is_empty());
    }
}
